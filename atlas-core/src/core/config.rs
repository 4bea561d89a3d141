//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use regex::Regex;
use serde::Deserialize;
use std;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use tera::{Context, Tera};
use toml::Value;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, String>;
    /// Generate configuration template
    fn gen_config() -> String;
    /// Generate configuration template with runtime information
    fn gen_runtime_config(&self) -> String {
        Self::gen_config()
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub input: InputCfg,
    pub grid: GridCfg,
    #[serde(default)]
    pub output: OutputCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct InputCfg {
    /// GeoJSON file
    pub path: String,
    /// Dataset name used in the grid name (Default: file name without extension)
    pub name: Option<String>,
    /// Spatial reference system of the input coordinates (EPSG code).
    /// Default: `crs` member of the file or 4326
    pub srid: Option<i32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GridCfg {
    /// Map scale denominator
    pub scale: u32,
    /// A0-A5, Letter, Legal or Custom
    #[serde(default = "default_paper")]
    pub paper: String,
    /// Page size in millimeters for custom paper
    pub width_mm: Option<f64>,
    pub height_mm: Option<f64>,
    /// portrait or landscape
    #[serde(default = "default_orientation")]
    pub orientation: String,
    /// Use spatial index for intersection tests
    #[serde(default = "default_true")]
    pub spatial_index: bool,
    /// Working reference (Default: UTM zone of the data center)
    pub working_srid: Option<i32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputCfg {
    /// Output directory
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// Write cells in the input reference instead of the working reference
    #[serde(default = "default_true")]
    pub reproject: bool,
}

impl Default for OutputCfg {
    fn default() -> Self {
        OutputCfg {
            dir: default_output_dir(),
            reproject: true,
        }
    }
}

pub fn default_paper() -> String {
    "A4".to_string()
}

pub fn default_orientation() -> String {
    "landscape".to_string()
}

pub fn default_output_dir() -> String {
    ".".to_string()
}

fn default_true() -> bool {
    true
}

pub const DEFAULT_CONFIG: &'static str = r#"
[input]
path = ""

[grid]
scale = 1000
paper = "A4"
orientation = "landscape"

[output]
dir = "."
"#;

/// Load and parse the config file into an config struct.
pub fn read_config<'a, T: Deserialize<'a>>(path: &str) -> Result<T, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err("Could not find config file!".to_string());
        }
    };
    let mut config_toml = String::new();
    if let Err(err) = file.read_to_string(&mut config_toml) {
        return Err(format!("Error while reading config: [{}]", err));
    };

    parse_config(config_toml, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<'a, T: Deserialize<'a>>(config_toml: String, path: &str) -> Result<T, String> {
    // Check for old ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]]+)\}").map_err(|e| e.to_string())?;
    if re.is_match(&config_toml) {
        return Err(
            "Replace old environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        );
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_toml)
        .map_err(|e| format!("Template error: {}", e))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let toml = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map(|s| s.to_string()).unwrap_or(e.to_string());
        format!("Template error: {}", cause)
    })?;

    toml.parse::<Value>()
        .and_then(|cfg| cfg.try_into::<T>())
        .map_err(|err| format!("{} - {}", path, err))
}
