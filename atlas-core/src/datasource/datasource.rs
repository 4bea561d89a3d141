//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use atlas_tiler::SpatialRef;
use geo::Geometry;

/// Input geometries of a dataset
#[derive(Debug)]
pub struct InputFeatures {
    pub geometries: Vec<Geometry<f64>>,
    /// Spatial reference of `geometries`
    pub srs: SpatialRef,
    /// Number of features without readable geometry
    pub skipped: usize,
}

pub trait DatasourceInput {
    /// Dataset name used for naming grids
    fn name(&self) -> String;
    /// Read all feature geometries
    fn read_features(&self) -> Result<InputFeatures, String>;
}
