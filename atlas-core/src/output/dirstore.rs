//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::OutputCfg;
use crate::core::Config;
use crate::output::geojson_writer::grid_feature_collection;
use crate::output::output::GridOutput;
use atlas_tiler::AtlasGrid;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Grid files in an output directory
#[derive(Clone)]
pub struct Dirstore {
    pub basepath: String,
}

impl Dirstore {
    pub fn new(basepath: &str) -> Dirstore {
        Dirstore {
            basepath: basepath.to_string(),
        }
    }
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}.geojson", self.basepath, name)
    }
}

impl GridOutput for Dirstore {
    fn info(&self) -> String {
        format!("Grid output directory: {}", self.basepath)
    }
    fn existing_names(&self) -> Result<HashSet<String>, io::Error> {
        let mut names = HashSet::new();
        let dir = Path::new(&self.basepath);
        if !dir.is_dir() {
            return Ok(names);
        }
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().map_or(false, |ext| ext == "geojson") {
                if let Some(stem) = path.file_stem() {
                    names.insert(stem.to_string_lossy().into_owned());
                }
            }
        }
        Ok(names)
    }
    fn write(&self, name: &str, grid: &AtlasGrid) -> Result<String, io::Error> {
        let fullpath = self.path(name);
        debug!("Dirstore.write {}", fullpath);
        fs::create_dir_all(&self.basepath)?;
        let json = grid_feature_collection(name, grid);
        let mut f = File::create(&fullpath)?;
        f.write_all(json.to_string().as_bytes())?;
        Ok(fullpath)
    }
}

impl<'a> Config<'a, OutputCfg> for Dirstore {
    fn from_config(output_cfg: &OutputCfg) -> Result<Self, String> {
        if output_cfg.dir.is_empty() {
            return Err("Empty output directory (`dir` in [output])".to_string());
        }
        Ok(Dirstore::new(output_cfg.dir.trim_end_matches('/')))
    }
    fn gen_config() -> String {
        let toml = r#"
[output]
# Directory for grid files ({name}.geojson)
dir = "."
# Write cells in the input reference (false: working reference)
reproject = true
"#;
        toml.to_string()
    }
}
