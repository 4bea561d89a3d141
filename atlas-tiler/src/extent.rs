//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Bounding boxes

use geo::{BoundingRect, Geometry, Rect};

/// Geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn new(minx: f64, miny: f64, maxx: f64, maxy: f64) -> Extent {
        Extent {
            minx,
            miny,
            maxx,
            maxy,
        }
    }
    /// Combined bounding box of all geometries (None for an empty collection)
    pub fn from_geometries<'a, I>(geometries: I) -> Option<Extent>
    where
        I: IntoIterator<Item = &'a Geometry<f64>>,
    {
        geometries
            .into_iter()
            .filter_map(|g| g.bounding_rect())
            .map(|rect| Extent::from(&rect))
            .fold(None, |acc: Option<Extent>, ext| match acc {
                Some(acc) => Some(acc.union(&ext)),
                None => Some(ext),
            })
    }
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Center point `(x, y)`
    pub fn center(&self) -> (f64, f64) {
        (
            (self.minx + self.maxx) / 2.0,
            (self.miny + self.maxy) / 2.0,
        )
    }
    /// Non-finite or inverted bounds.
    /// A zero-area extent (single point) is not degenerate.
    pub fn is_degenerate(&self) -> bool {
        let finite = self.minx.is_finite()
            && self.miny.is_finite()
            && self.maxx.is_finite()
            && self.maxy.is_finite();
        !finite || self.minx > self.maxx || self.miny > self.maxy
    }
    pub fn union(&self, other: &Extent) -> Extent {
        Extent {
            minx: self.minx.min(other.minx),
            miny: self.miny.min(other.miny),
            maxx: self.maxx.max(other.maxx),
            maxy: self.maxy.max(other.maxy),
        }
    }
    /// Extent grown by `offset` on all four sides
    pub fn buffer(&self, offset: f64) -> Extent {
        Extent {
            minx: self.minx - offset,
            miny: self.miny - offset,
            maxx: self.maxx + offset,
            maxy: self.maxy + offset,
        }
    }
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new((self.minx, self.miny), (self.maxx, self.maxy))
    }
}

impl From<&Rect<f64>> for Extent {
    fn from(rect: &Rect<f64>) -> Extent {
        Extent {
            minx: rect.min().x,
            miny: rect.min().y,
            maxx: rect.max().x,
            maxy: rect.max().y,
        }
    }
}
