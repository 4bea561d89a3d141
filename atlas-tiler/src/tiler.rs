//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid tiler keeping lattice cells which intersect the input geometries

use crate::error::{GridError, GridResult};
use crate::extent::Extent;
use crate::label::cell_label;
use crate::lattice::Lattice;
use crate::paper::GridConfig;
use geo::{BoundingRect, Geometry, Intersects, Polygon, Rect};
use rstar::{RTree, RTreeObject, AABB};

/// Margin added around the data extent, in working reference units
pub const EXTENT_MARGIN: f64 = 10.0;

/// Maximal number of candidate cells of a lattice
pub const MAX_LATTICE_CELLS: u64 = 5_000_000;

/// Atlas page cell
#[derive(PartialEq, Clone, Debug)]
pub struct GridCell {
    /// Lattice row (1-based, counted from the bottom)
    pub row: u32,
    /// Lattice column (1-based, counted from the left)
    pub column: u32,
    /// Column letters and row number, e.g. "C12"
    pub label: String,
    /// Reading order rank (1-based), 0 until assigned
    pub serial: u32,
    pub geometry: Polygon<f64>,
    /// Spatial reference of `geometry`
    pub srid: i32,
}

struct IndexedGeometry {
    envelope: AABB<[f64; 2]>,
    index: usize,
}

impl RTreeObject for IndexedGeometry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// R-tree over geometry envelopes
pub struct FeatureIndex {
    tree: RTree<IndexedGeometry>,
}

impl FeatureIndex {
    pub fn new(geometries: &[Geometry<f64>]) -> FeatureIndex {
        let entries = geometries
            .iter()
            .enumerate()
            .filter_map(|(index, geom)| {
                geom.bounding_rect().map(|rect| IndexedGeometry {
                    envelope: AABB::from_corners(
                        [rect.min().x, rect.min().y],
                        [rect.max().x, rect.max().y],
                    ),
                    index,
                })
            })
            .collect();
        FeatureIndex {
            tree: RTree::bulk_load(entries),
        }
    }
    /// Indices of geometries with an envelope intersecting `extent`
    pub fn candidates(&self, extent: &Extent) -> Vec<usize> {
        let envelope =
            AABB::from_corners([extent.minx, extent.miny], [extent.maxx, extent.maxy]);
        let mut ids: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.index)
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Tiles input geometries with cells of a fixed size
pub struct GridTiler {
    pub config: GridConfig,
    /// Pre-filter intersection candidates with an R-tree
    pub use_index: bool,
}

impl GridTiler {
    pub fn new(config: GridConfig) -> GridTiler {
        GridTiler {
            config,
            use_index: true,
        }
    }
    pub fn with_index(mut self, use_index: bool) -> GridTiler {
        self.use_index = use_index;
        self
    }
    /// Buffered lattice covering all geometries
    pub fn lattice(&self, geometries: &[Geometry<f64>]) -> Option<Lattice> {
        Extent::from_geometries(geometries)
            .filter(|extent| !extent.is_degenerate())
            .map(|extent| Lattice::new(&extent.buffer(EXTENT_MARGIN), &self.config))
    }
    /// Labeled cells intersecting at least one geometry, in lattice order.
    /// Serials are not assigned yet. Empty for lattices above `MAX_LATTICE_CELLS`.
    pub fn tile(&self, geometries: &[Geometry<f64>], srid: i32) -> Vec<GridCell> {
        // Never cancelled
        self.tile_with_progress(geometries, srid, |_, _| true)
            .unwrap_or_default()
    }
    /// Like `tile`, calling `on_row(row, rows)` after each lattice row.
    /// Returning `false` from the callback aborts with `GridError::Cancelled`.
    pub fn tile_with_progress<F>(
        &self,
        geometries: &[Geometry<f64>],
        srid: i32,
        mut on_row: F,
    ) -> GridResult<Vec<GridCell>>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let lattice = match self.lattice(geometries) {
            Some(lattice) => lattice,
            None => return Ok(Vec::new()),
        };
        debug!(
            "Lattice {} rows x {} columns of {} x {}",
            lattice.rows, lattice.columns, lattice.cell_width, lattice.cell_height
        );
        if lattice.len() > MAX_LATTICE_CELLS {
            return Err(GridError::Config(format!(
                "{} x {} candidate cells exceed the limit of {} cells, use a smaller scale",
                lattice.rows, lattice.columns, MAX_LATTICE_CELLS
            )));
        }
        let index = if self.use_index {
            Some(FeatureIndex::new(geometries))
        } else {
            None
        };
        let mut cells = Vec::new();
        for (row, column) in lattice.iter() {
            let extent = lattice.cell_extent(row, column);
            if intersects_any(geometries, index.as_ref(), &extent) {
                cells.push(GridCell {
                    row,
                    column,
                    label: cell_label(row, column),
                    serial: 0,
                    geometry: extent.to_rect().to_polygon(),
                    srid,
                });
            }
            if column == lattice.columns && !on_row(row, lattice.rows) {
                return Err(GridError::Cancelled);
            }
        }
        Ok(cells)
    }
}

fn intersects_any(
    geometries: &[Geometry<f64>],
    index: Option<&FeatureIndex>,
    extent: &Extent,
) -> bool {
    let rect: Rect<f64> = extent.to_rect();
    match index {
        Some(index) => index
            .candidates(extent)
            .into_iter()
            .any(|idx| geometries[idx].intersects(&rect)),
        None => geometries.iter().any(|geom| geom.intersects(&rect)),
    }
}
