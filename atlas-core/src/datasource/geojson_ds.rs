//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::InputCfg;
use crate::core::Config;
use crate::datasource::geojson::parse_geojson;
use crate::datasource::{DatasourceInput, InputFeatures};
use atlas_tiler::{SpatialRef, EPSG_WGS84};
use std::fs;
use std::path::Path;

/// GeoJSON file datasource
#[derive(Clone, Debug)]
pub struct GeojsonDatasource {
    pub path: String,
    /// Dataset name (Default: file name without extension)
    pub name: Option<String>,
    /// Overrides the `crs` member of the file
    pub srid: Option<i32>,
}

impl GeojsonDatasource {
    pub fn new(path: &str) -> GeojsonDatasource {
        GeojsonDatasource {
            path: path.to_string(),
            name: None,
            srid: None,
        }
    }
    /// Decode GeoJSON text with the settings of this datasource
    pub fn features_from_str(&self, json: &str) -> Result<InputFeatures, String> {
        let features = parse_geojson(json).map_err(|e| format!("{} - {}", self.path, e))?;
        let srid = match (self.srid, features.srid) {
            (Some(srid), Some(file_srid)) if srid != file_srid => {
                warn!(
                    "{} - ignoring crs EPSG:{}, using EPSG:{}",
                    self.path, file_srid, srid
                );
                srid
            }
            (Some(srid), _) => srid,
            (None, Some(file_srid)) => file_srid,
            (None, None) => EPSG_WGS84,
        };
        let srs = SpatialRef::from_srid(srid).map_err(|e| e.to_string())?;
        for (no, reason) in &features.skipped {
            warn!("{} - skipping feature #{}: {}", self.path, no, reason);
        }
        Ok(InputFeatures {
            geometries: features.geometries,
            srs,
            skipped: features.skipped.len(),
        })
    }
}

impl DatasourceInput for GeojsonDatasource {
    fn name(&self) -> String {
        match self.name {
            Some(ref name) => name.clone(),
            None => Path::new(&self.path)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "grid".to_string()),
        }
    }
    fn read_features(&self) -> Result<InputFeatures, String> {
        info!("Reading features from '{}'", self.path);
        let json = fs::read_to_string(&self.path)
            .map_err(|e| format!("Could not read '{}': {}", self.path, e))?;
        self.features_from_str(&json)
    }
}

impl<'a> Config<'a, InputCfg> for GeojsonDatasource {
    fn from_config(input_cfg: &InputCfg) -> Result<Self, String> {
        if input_cfg.path.is_empty() {
            return Err("Missing input dataset (`path` in [input])".to_string());
        }
        if let Some(srid) = input_cfg.srid {
            SpatialRef::from_srid(srid).map_err(|e| e.to_string())?;
        }
        Ok(GeojsonDatasource {
            path: input_cfg.path.clone(),
            name: input_cfg.name.clone(),
            srid: input_cfg.srid,
        })
    }
    fn gen_config() -> String {
        let toml = r#"
[input]
# GeoJSON file with the features to cover
path = "parcels.geojson"
# Dataset name used in the grid name (Default: file name)
#name = "Parcels"
# EPSG code of the coordinates (Default: crs of the file or 4326)
#srid = 4326
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = format!("\n[input]\npath = \"{}\"\nname = \"{}\"\n", self.path, self.name());
        if let Some(srid) = self.srid {
            config.push_str(&format!("srid = {}\n", srid));
        }
        config
    }
}
