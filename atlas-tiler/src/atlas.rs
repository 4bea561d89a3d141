//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Atlas grid generation

use crate::error::{GridError, GridResult};
use crate::extent::Extent;
use crate::label::assign_serials;
use crate::paper::GridOptions;
use crate::srs::{select_working_srs, SpatialRef};
use crate::tiler::{GridCell, GridTiler};
use crate::transform::{TransformFailure, Transformer};
use geo::{BoundingRect, Geometry};
use std::fmt;

/// Grid generation settings
#[derive(Clone, Debug)]
pub struct AtlasOptions {
    pub grid: GridOptions,
    /// Use an R-tree for intersection tests
    pub spatial_index: bool,
    /// Return cells in the source reference instead of the working reference
    pub reproject: bool,
    /// Working reference overriding the automatic selection
    pub working_srs: Option<SpatialRef>,
}

impl AtlasOptions {
    pub fn new(grid: GridOptions) -> AtlasOptions {
        AtlasOptions {
            grid,
            spatial_index: true,
            reproject: true,
            working_srs: None,
        }
    }
}

/// Generated atlas grid
#[derive(Debug)]
pub struct AtlasGrid {
    /// Cells in reading order
    pub cells: Vec<GridCell>,
    /// Reference of the cell geometries
    pub srs: SpatialRef,
    /// Reference used for tiling
    pub working_srs: SpatialRef,
    /// Features skipped because they could not be transformed
    pub failures: Vec<TransformFailure>,
}

/// Why no grid was generated
#[derive(PartialEq, Clone, Debug)]
pub enum EmptyInput {
    /// Input collection without features
    NoFeatures,
    /// No feature left after skipping empty and untransformable geometries
    NoValidGeometries,
}

impl fmt::Display for EmptyInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EmptyInput::NoFeatures => write!(f, "Input has no features"),
            EmptyInput::NoValidGeometries => write!(f, "No valid geometries"),
        }
    }
}

#[derive(Debug)]
pub enum GridOutcome {
    Grid(AtlasGrid),
    Empty {
        reason: EmptyInput,
        failures: Vec<TransformFailure>,
    },
}

impl GridOutcome {
    pub fn cell_count(&self) -> usize {
        match self {
            GridOutcome::Grid(grid) => grid.cells.len(),
            GridOutcome::Empty { .. } => 0,
        }
    }
    pub fn failures(&self) -> &[TransformFailure] {
        match self {
            GridOutcome::Grid(grid) => &grid.failures,
            GridOutcome::Empty { failures, .. } => failures,
        }
    }
}

/// Generate an atlas grid for geometries in the `source` reference
pub fn generate_grid(
    geometries: &[Geometry<f64>],
    source: &SpatialRef,
    options: &AtlasOptions,
) -> GridResult<GridOutcome> {
    generate_grid_with_progress(geometries, source, options, |_, _| true)
}

/// Generate an atlas grid, calling `on_row(row, rows)` after each lattice row.
/// The callback can abort generation by returning `false`.
pub fn generate_grid_with_progress<F>(
    geometries: &[Geometry<f64>],
    source: &SpatialRef,
    options: &AtlasOptions,
    on_row: F,
) -> GridResult<GridOutcome>
where
    F: FnMut(u32, u32) -> bool,
{
    let config = options.grid.grid_config()?;
    if geometries.is_empty() {
        return Ok(GridOutcome::Empty {
            reason: EmptyInput::NoFeatures,
            failures: Vec::new(),
        });
    }

    let working_srs = match options.working_srs {
        Some(ref srs) => srs.clone(),
        None => select_working_srs(Extent::from_geometries(geometries).as_ref(), source),
    };
    info!("Tiling in {}", working_srs);

    let to_working = Transformer::new(source, &working_srs)?;
    let (features, failures) = to_working.transform_features(geometries);
    if features.is_empty() {
        return Ok(GridOutcome::Empty {
            reason: EmptyInput::NoValidGeometries,
            failures,
        });
    }

    let tiler = GridTiler::new(config).with_index(options.spatial_index);
    let mut cells = tiler.tile_with_progress(&features, working_srs.srid, on_row)?;
    if cells.is_empty() {
        return Ok(GridOutcome::Empty {
            reason: EmptyInput::NoValidGeometries,
            failures,
        });
    }

    let srs = if options.reproject && working_srs != *source {
        let to_source = Transformer::new(&working_srs, source)?;
        for cell in cells.iter_mut() {
            let extent = cell
                .geometry
                .bounding_rect()
                .map(|rect| Extent::from(&rect))
                .ok_or_else(|| GridError::Transform(format!("Empty cell {}", cell.label)))?;
            cell.geometry = to_source.transform_extent(&extent)?.to_rect().to_polygon();
            cell.srid = source.srid;
        }
        source.clone()
    } else {
        working_srs.clone()
    };
    // Reading order of the returned cells
    assign_serials(&mut cells);

    Ok(GridOutcome::Grid(AtlasGrid {
        cells,
        srs,
        working_srs,
        failures,
    }))
}
