//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use atlas_tiler::AtlasGrid;
use std::collections::HashSet;
use std::io;

pub trait GridOutput {
    fn info(&self) -> String;
    /// Names of grids already stored
    fn existing_names(&self) -> Result<HashSet<String>, io::Error>;
    /// Store grid and return its location
    fn write(&self, name: &str, grid: &AtlasGrid) -> Result<String, io::Error>;
}

/// Output for dry runs
#[derive(Clone)]
pub struct Nooutput;

impl GridOutput for Nooutput {
    fn info(&self) -> String {
        "No output".to_string()
    }
    fn existing_names(&self) -> Result<HashSet<String>, io::Error> {
        Ok(HashSet::new())
    }
    fn write(&self, name: &str, _grid: &AtlasGrid) -> Result<String, io::Error> {
        Ok(name.to_string())
    }
}
