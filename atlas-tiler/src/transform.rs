//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Coordinate transformations between spatial references

use crate::error::{GridError, GridResult};
use crate::extent::Extent;
use crate::srs::SpatialRef;
use geo::{Coord, Geometry, MapCoords};
use proj4rs::proj::Proj;
use proj4rs::transform::transform;

/// Points sampled along each edge when transforming an extent
const EXTENT_EDGE_SAMPLES: u32 = 21;

struct Projections {
    source: Proj,
    target: Proj,
}

/// Reusable transformation from one spatial reference to another.
/// Equal references give an identity transformation which never touches coordinates.
pub struct Transformer {
    pub from: SpatialRef,
    pub to: SpatialRef,
    projections: Option<Projections>,
}

/// Feature skipped during transformation
#[derive(PartialEq, Clone, Debug)]
pub struct TransformFailure {
    /// Position of the feature in the input collection
    pub index: usize,
    pub reason: String,
}

impl Transformer {
    pub fn new(from: &SpatialRef, to: &SpatialRef) -> GridResult<Transformer> {
        let projections = if from == to {
            None
        } else {
            Some(Projections {
                source: proj(from)?,
                target: proj(to)?,
            })
        };
        Ok(Transformer {
            from: from.clone(),
            to: to.clone(),
            projections,
        })
    }
    pub fn is_identity(&self) -> bool {
        self.projections.is_none()
    }
    /// Transform a single coordinate
    pub fn transform_coord(&self, coord: Coord<f64>) -> GridResult<Coord<f64>> {
        let projections = match self.projections {
            Some(ref p) => p,
            None => return Ok(coord),
        };
        // proj4rs expects radians for geographic references
        let mut point = if self.from.is_geographic() {
            (coord.x.to_radians(), coord.y.to_radians(), 0.0)
        } else {
            (coord.x, coord.y, 0.0)
        };
        transform(&projections.source, &projections.target, &mut point).map_err(|e| {
            GridError::Transform(format!(
                "({}, {}) {} -> {}: {:?}",
                coord.x, coord.y, self.from, self.to, e
            ))
        })?;
        let (x, y) = if self.to.is_geographic() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };
        if !x.is_finite() || !y.is_finite() {
            return Err(GridError::Transform(format!(
                "({}, {}) {} -> {}: result out of range",
                coord.x, coord.y, self.from, self.to
            )));
        }
        Ok(Coord { x, y })
    }
    /// Transformed copy of a geometry
    pub fn transform_geometry(&self, geometry: &Geometry<f64>) -> GridResult<Geometry<f64>> {
        if self.is_identity() {
            return Ok(geometry.clone());
        }
        geometry.try_map_coords(|coord| self.transform_coord(coord))
    }
    /// Bounding box of a transformed extent.
    /// Edges are densified, so curved edges in the target reference are covered.
    pub fn transform_extent(&self, extent: &Extent) -> GridResult<Extent> {
        if self.is_identity() {
            return Ok(extent.clone());
        }
        let mut bbox = Extent::new(
            f64::INFINITY,
            f64::INFINITY,
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
        );
        let segments = (EXTENT_EDGE_SAMPLES - 1) as f64;
        for i in 0..EXTENT_EDGE_SAMPLES {
            let t = i as f64 / segments;
            let x = extent.minx + t * extent.width();
            let y = extent.miny + t * extent.height();
            let edge_points = [
                Coord { x, y: extent.miny },
                Coord { x, y: extent.maxy },
                Coord { x: extent.minx, y },
                Coord { x: extent.maxx, y },
            ];
            for coord in edge_points.iter() {
                let c = self.transform_coord(*coord)?;
                bbox = bbox.union(&Extent::new(c.x, c.y, c.x, c.y));
            }
        }
        Ok(bbox)
    }
    /// Transform a feature collection, skipping empty geometries and
    /// features which fail to transform.
    pub fn transform_features(
        &self,
        geometries: &[Geometry<f64>],
    ) -> (Vec<Geometry<f64>>, Vec<TransformFailure>) {
        let mut transformed = Vec::with_capacity(geometries.len());
        let mut failures = Vec::new();
        for (index, geometry) in geometries.iter().enumerate() {
            if is_empty(geometry) {
                debug!("Skipping empty geometry #{}", index);
                continue;
            }
            match self.transform_geometry(geometry) {
                Ok(geom) => transformed.push(geom),
                Err(err) => {
                    warn!("Skipping feature #{} - {}", index, err);
                    failures.push(TransformFailure {
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }
        (transformed, failures)
    }
}

fn proj(srs: &SpatialRef) -> GridResult<Proj> {
    Proj::from_proj_string(&srs.proj).map_err(|e| GridError::Projection {
        srid: srs.srid,
        reason: format!("{:?}", e),
    })
}

/// Geometry without any coordinates
pub fn is_empty(geometry: &Geometry<f64>) -> bool {
    match geometry {
        Geometry::LineString(g) => g.0.is_empty(),
        Geometry::Polygon(g) => g.exterior().0.is_empty(),
        Geometry::MultiPoint(g) => g.0.is_empty(),
        Geometry::MultiLineString(g) => g.0.iter().all(|l| l.0.is_empty()),
        Geometry::MultiPolygon(g) => g.0.iter().all(|p| p.exterior().0.is_empty()),
        Geometry::GeometryCollection(g) => g.0.iter().all(is_empty),
        _ => false,
    }
}
