//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::grid_service::GridService;
use atlas_core::core::config::DEFAULT_CONFIG;
use atlas_core::core::{parse_config, read_config, ApplicationCfg, Config};
use clap::ArgMatches;
use std::process;
use std::str::FromStr;

const INPUT_ARGS: [&str; 11] = [
    "input",
    "name",
    "srid",
    "scale",
    "paper",
    "width-mm",
    "height-mm",
    "orientation",
    "outdir",
    "no-reproject",
    "working-srid",
];

fn parse_arg<T: FromStr>(args: &ArgMatches, name: &str) -> Result<Option<T>, String> {
    match args.value_of(name) {
        Some(val) => val
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value '{}' for argument `{}`", val, name)),
        None => Ok(None),
    }
}

/// Build configuration from command line arguments
pub fn config_from_cli(args: &ArgMatches) -> Result<ApplicationCfg, String> {
    let mut config: ApplicationCfg = parse_config(DEFAULT_CONFIG.to_string(), "")?;
    if let Some(path) = args.value_of("input") {
        config.input.path = path.to_string();
    }
    config.input.name = args.value_of("name").map(|s| s.to_string());
    config.input.srid = parse_arg(args, "srid")?;
    if let Some(scale) = parse_arg::<u32>(args, "scale")? {
        config.grid.scale = scale;
    }
    if let Some(paper) = args.value_of("paper") {
        config.grid.paper = paper.to_string();
    }
    config.grid.width_mm = parse_arg(args, "width-mm")?;
    config.grid.height_mm = parse_arg(args, "height-mm")?;
    if let Some(orientation) = args.value_of("orientation") {
        config.grid.orientation = orientation.to_string();
    }
    config.grid.working_srid = parse_arg(args, "working-srid")?;
    if let Some(dir) = args.value_of("outdir") {
        config.output.dir = dir.to_string();
    }
    config.output.reproject = !args.is_present("no-reproject");
    Ok(config)
}

pub fn config_from_args(args: &ArgMatches) -> ApplicationCfg {
    let config = if let Some(cfgpath) = args.value_of("config") {
        info!("Reading configuration from '{}'", cfgpath);
        for argname in INPUT_ARGS.iter() {
            if args.is_present(argname) {
                warn!("Ignoring argument `{}`", argname);
            }
        }
        read_config(cfgpath)
    } else {
        config_from_cli(args)
    };
    config.unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}

pub fn service_from_args(config: &ApplicationCfg) -> GridService {
    GridService::from_config(config).unwrap_or_else(|err| {
        println!("Error reading configuration - {} ", err);
        process::exit(1)
    })
}
