//! A library for atlas index grid calculations
//!
//! ## Cell labels
//!
//! ```rust
//! use atlas_tiler::{cell_label, column_label};
//!
//! assert_eq!(column_label(28), "AB");
//! assert_eq!(cell_label(12, 3), "C12");
//! ```
//!
//! ## Tiling
//!
//! ```rust
//! use atlas_tiler::{GridConfig, GridTiler};
//! use geo::{point, Geometry};
//!
//! let tiler = GridTiler::new(GridConfig::new(100.0, 100.0).unwrap());
//! let cells = tiler.tile(&[Geometry::Point(point!(x: 50.0, y: 50.0))], 25832);
//! assert_eq!(cells.len(), 1);
//! assert_eq!(cells[0].label, "A1");
//! ```
//!
//! ## Atlas grids
//!
//! ```rust
//! use atlas_tiler::{generate_grid, AtlasOptions, GridOptions, Orientation, PaperSize, SpatialRef};
//! use geo::{polygon, Geometry};
//!
//! let parcel = Geometry::Polygon(polygon![
//!     (x: 9.0, y: 51.0),
//!     (x: 9.01, y: 51.0),
//!     (x: 9.01, y: 51.01),
//!     (x: 9.0, y: 51.01),
//! ]);
//! let options = AtlasOptions::new(GridOptions::new(1000, PaperSize::A4, Orientation::Landscape));
//! let outcome = generate_grid(&[parcel], &SpatialRef::wgs84(), &options).unwrap();
//! assert!(outcome.cell_count() > 0);
//! ```

#[macro_use]
extern crate log;

mod atlas;
mod error;
mod extent;
mod label;
mod lattice;
mod naming;
mod paper;
mod srs;
mod tiler;
mod transform;

#[cfg(test)]
mod srs_test;
#[cfg(test)]
mod tiler_test;

pub use atlas::{
    generate_grid, generate_grid_with_progress, AtlasGrid, AtlasOptions, EmptyInput, GridOutcome,
};
pub use error::{GridError, GridResult};
pub use extent::Extent;
pub use label::{assign_serials, cell_label, column_label, reading_order};
pub use lattice::{Lattice, LatticeIterator};
pub use naming::{base_name, grid_name, sanitize_name, unique_name};
pub use paper::{GridConfig, GridOptions, Orientation, PaperSize, STANDARD_SCALES};
pub use srs::{
    select_working_srs, utm_srid, utm_zone, SpatialRef, Unit, EPSG_WGS84, FALLBACK_SRID,
};
pub use tiler::{FeatureIndex, GridCell, GridTiler, EXTENT_MARGIN, MAX_LATTICE_CELLS};
pub use transform::{is_empty, TransformFailure, Transformer};
