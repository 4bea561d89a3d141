//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use atlas_core::core::stats::GridStatistics;
use atlas_core::core::{ApplicationCfg, Config};
use atlas_core::datasource::{DatasourceInput, GeojsonDatasource, InputFeatures};
use atlas_core::output::{Dirstore, GridOutput};
use atlas_tiler::{
    generate_grid_with_progress, grid_name, AtlasGrid, AtlasOptions, EmptyInput, GridOutcome,
    Transformer,
};
use pbr::ProgressBar;
use std::fmt;
use std::io::Stdout;
use std::time::Instant;

/// Atlas grid generation service
#[derive(Clone)]
pub struct GridService {
    pub input: GeojsonDatasource,
    pub options: AtlasOptions,
    pub output: Dirstore,
}

/// Result of a generation run
pub struct GridReport {
    /// Unique grid name
    pub name: String,
    /// Written grid file, `None` if no grid was generated
    pub path: Option<String>,
    /// Reason for an empty result
    pub notice: Option<String>,
    pub cells: usize,
    /// Features without readable or transformable geometry
    pub skipped: usize,
    pub statistics: GridStatistics,
}

impl GridService {
    fn progress_bar(&self, rows: u32) -> ProgressBar<Stdout> {
        let mut pb = ProgressBar::new(rows as u64);
        pb.message("Row ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Unique name for the next grid of the input dataset
    pub fn grid_name(&self) -> Result<String, String> {
        let existing = self
            .output
            .existing_names()
            .map_err(|e| format!("Error reading {} - {}", self.output.basepath, e))?;
        Ok(grid_name(
            &self.input.name(),
            self.options.grid.scale,
            &self.options.grid.paper.name(),
            &self.options.grid.orientation.to_string(),
            &existing,
        ))
    }
    /// Generate grid for input dataset and write it to the output directory
    pub fn generate(&self, progress: bool) -> Result<GridReport, String> {
        info!("{}", self.output.info());
        let features = self.input.read_features()?;
        let name = self.grid_name()?;
        info!(
            "Generating '{}' for {} features",
            name,
            features.geometries.len()
        );
        let now = Instant::now();
        let mut pb: Option<ProgressBar<Stdout>> = None;
        let outcome = generate_grid_with_progress(
            &features.geometries,
            &features.srs,
            &self.options,
            |_row, rows| {
                if progress {
                    pb.get_or_insert_with(|| self.progress_bar(rows)).inc();
                }
                true
            },
        )
        .map_err(|e| e.to_string())?;
        if let Some(ref mut pb) = pb {
            pb.finish();
            println!("");
        }
        debug!("Grid generated in {:?}", now.elapsed());

        let skipped = features.skipped + outcome.failures().len();
        match outcome {
            GridOutcome::Grid(grid) => {
                let statistics = cell_statistics(&grid, &features)?;
                let path = self
                    .output
                    .write(&name, &grid)
                    .map_err(|e| format!("Error writing {} - {}", name, e))?;
                info!("Grid written to '{}'", path);
                Ok(GridReport {
                    name,
                    path: Some(path),
                    notice: None,
                    cells: grid.cells.len(),
                    skipped,
                    statistics,
                })
            }
            GridOutcome::Empty { reason, .. } => {
                // Features without readable geometry count as invalid
                let reason = if features.skipped > 0 {
                    EmptyInput::NoValidGeometries
                } else {
                    reason
                };
                warn!("{} - no grid written", reason);
                Ok(GridReport {
                    name,
                    path: None,
                    notice: Some(reason.to_string()),
                    cells: 0,
                    skipped,
                    statistics: GridStatistics::new(),
                })
            }
        }
    }
}

/// Features per cell, counted in the reference of the cells
fn cell_statistics(grid: &AtlasGrid, features: &InputFeatures) -> Result<GridStatistics, String> {
    if grid.srs == features.srs {
        return Ok(GridStatistics::features_per_cell(
            &grid.cells,
            &features.geometries,
        ));
    }
    let transformer = Transformer::new(&features.srs, &grid.srs).map_err(|e| e.to_string())?;
    let (geometries, _) = transformer.transform_features(&features.geometries);
    Ok(GridStatistics::features_per_cell(&grid.cells, &geometries))
}

impl fmt::Display for GridReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.path {
            Some(ref path) => writeln!(
                f,
                "{}: {} cells written to {}",
                self.name, self.cells, path
            )?,
            None => writeln!(
                f,
                "{} - no grid created",
                self.notice.as_ref().map_or("No cells", |n| n.as_str())
            )?,
        }
        if self.skipped > 0 {
            writeln!(f, "{} features skipped", self.skipped)?;
        }
        write!(f, "{}", self.statistics)
    }
}

impl<'a> Config<'a, ApplicationCfg> for GridService {
    fn from_config(config: &ApplicationCfg) -> Result<Self, String> {
        let input = GeojsonDatasource::from_config(&config.input)?;
        let mut options = AtlasOptions::from_config(&config.grid)?;
        options.reproject = config.output.reproject;
        let output = Dirstore::from_config(&config.output)?;
        Ok(GridService {
            input,
            options,
            output,
        })
    }
    fn gen_config() -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&GeojsonDatasource::gen_config());
        config.push_str(&AtlasOptions::gen_config());
        config.push_str(&Dirstore::gen_config());
        config
    }
    fn gen_runtime_config(&self) -> String {
        let mut config = String::new();
        config.push_str(TOML_HEADER);
        config.push_str(&self.input.gen_runtime_config());
        config.push_str(&self.options.gen_runtime_config());
        config.push_str(&format!(
            "\n[output]\ndir = \"{}\"\nreproject = {}\n",
            self.output.basepath, self.options.reproject
        ));
        config
    }
}

const TOML_HEADER: &'static str = "# atlas grid configuration\n";
