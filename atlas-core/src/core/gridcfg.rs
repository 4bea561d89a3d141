//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::GridCfg;
use crate::core::Config;
use atlas_tiler::{AtlasOptions, GridOptions, Orientation, PaperSize, SpatialRef};

fn paper_from_config(grid_cfg: &GridCfg) -> Result<PaperSize, String> {
    if grid_cfg.paper.to_lowercase() == "custom" {
        match (grid_cfg.width_mm, grid_cfg.height_mm) {
            (Some(width_mm), Some(height_mm)) if width_mm > 0.0 && height_mm > 0.0 => {
                Ok(PaperSize::Custom {
                    width_mm,
                    height_mm,
                })
            }
            _ => Err("Custom paper requires positive `width_mm` and `height_mm`".to_string()),
        }
    } else {
        grid_cfg.paper.parse::<PaperSize>().map_err(|e| e.to_string())
    }
}

impl<'a> Config<'a, GridCfg> for AtlasOptions {
    fn from_config(grid_cfg: &GridCfg) -> Result<Self, String> {
        let paper = paper_from_config(grid_cfg)?;
        let orientation = grid_cfg
            .orientation
            .parse::<Orientation>()
            .map_err(|e| e.to_string())?;
        let grid = GridOptions::new(grid_cfg.scale, paper, orientation);
        // Reject invalid cell sizes before reading any data
        grid.grid_config().map_err(|e| e.to_string())?;
        if !grid.is_standard_scale() {
            info!("Using non-standard scale 1:{}", grid.scale);
        }
        let working_srs = match grid_cfg.working_srid {
            Some(srid) => Some(SpatialRef::from_srid(srid).map_err(|e| e.to_string())?),
            None => None,
        };
        let mut options = AtlasOptions::new(grid);
        options.spatial_index = grid_cfg.spatial_index;
        options.working_srs = working_srs;
        Ok(options)
    }
    fn gen_config() -> String {
        let toml = r#"
[grid]
# Map scale denominator (500, 1000, 2000, 3000, 5000, 10000, 25000 or any other)
scale = 1000
# A0-A5, Letter, Legal or Custom (with width_mm and height_mm)
paper = "A4"
# portrait (hoch) or landscape (quer)
orientation = "landscape"
#spatial_index = true
# Metric reference for tiling (Default: UTM zone of the data center)
#working_srid = 25832
"#;
        toml.to_string()
    }
    fn gen_runtime_config(&self) -> String {
        let paper = match self.grid.paper {
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => format!(
                "paper = \"Custom\"\nwidth_mm = {}\nheight_mm = {}",
                width_mm, height_mm
            ),
            ref paper => format!("paper = \"{}\"", paper),
        };
        let working_srid = match self.working_srs {
            Some(ref srs) => format!("working_srid = {}\n", srs.srid),
            None => String::new(),
        };
        format!(
            "\n[grid]\nscale = {}\n{}\norientation = \"{}\"\nspatial_index = {}\n{}",
            self.grid.scale, paper, self.grid.orientation, self.spatial_index, working_srid
        )
    }
}
