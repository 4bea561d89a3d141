//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;

use atlas_core::core::Config;
use atlas_service::runtime_config::{config_from_args, service_from_args};
use atlas_service::GridService;
use clap::{App, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;
use std::process;
use time;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = match (args.value_of("loglevel"), rust_log_env.as_ref()) {
        (None, Ok(rust_log)) => rust_log.as_str(),
        (loglevel, _) => loglevel.unwrap_or("info"),
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn generate(args: &ArgMatches<'_>) {
    let config = config_from_args(args);
    let service = service_from_args(&config);
    let progress = args.value_of("progress").map_or(true, |s| {
        s.parse::<bool>().unwrap_or_else(|_| {
            println!("Error parsing 'progress' as boolean value");
            process::exit(1)
        })
    });
    match service.generate(progress) {
        Ok(report) => print!("{}", report),
        Err(err) => {
            println!("Error generating grid - {}", err);
            process::exit(1)
        }
    }
}

fn gen_config(args: &ArgMatches<'_>) -> String {
    if args.value_of("input").is_some() {
        let config = config_from_args(args);
        service_from_args(&config).gen_runtime_config()
    } else {
        GridService::gen_config()
    }
}

const INPUT_ARGS: &str = "--input=[FILE] 'GeoJSON input file'
                          --name=[NAME] 'Dataset name used in grid name (Default: file name)'
                          --srid=[EPSG] 'Spatial reference of input coordinates (Default: crs of file or 4326)'
                          --scale=[SCALE] 'Map scale denominator (500, 1000, 2000, 3000, 5000, 10000, 25000, ..)'
                          --paper=[A0|A1|A2|A3|A4|A5|Letter|Legal|Custom] 'Paper size (Default: A4)'
                          --width-mm=[MM] 'Page width for custom paper size'
                          --height-mm=[MM] 'Page height for custom paper size'
                          --orientation=[portrait|landscape] 'Page orientation (Default: landscape)'
                          --working-srid=[EPSG] 'Metric reference for tiling (Default: UTM zone of data center)'
                          --outdir=[DIR] 'Output directory (Default: .)'
                          --no-reproject 'Write cells in working reference'
                          --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'";

fn main() {
    dotenv().ok();
    let mut app = App::new("atlas_grid")
        .version(crate_version!())
        .author("Pirmin Kalberer <pka@sourcepole.ch>")
        .about("Atlas index grids covering the features of a dataset")
        .subcommand(
            SubCommand::with_name("generate")
                .args_from_usage(INPUT_ARGS)
                .args_from_usage(
                    "-c, --config=[FILE] 'Load from custom config file'
                     --progress=[true|false] 'Show progress bar'",
                )
                .about("Generate atlas grid"),
        )
        .subcommand(
            SubCommand::with_name("genconfig")
                .args_from_usage(INPUT_ARGS)
                .about("Generate configuration template"),
        );

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("generate", Some(sub_m)) => {
                init_logger(sub_m);
                generate(sub_m);
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", gen_config(sub_m));
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
