//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Paper sizes, map scales and grid cell dimensions

use crate::error::{GridError, GridResult};
use std::fmt;
use std::str::FromStr;

/// Commonly used map scale denominators
pub const STANDARD_SCALES: [u32; 7] = [500, 1000, 2000, 3000, 5000, 10000, 25000];

/// Paper size with dimensions in millimeters (short side first)
#[derive(PartialEq, Clone, Debug)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    Letter,
    Legal,
    Custom { width_mm: f64, height_mm: f64 },
}

impl PaperSize {
    /// `(short side, long side)` in millimeters
    pub fn dimensions_mm(&self) -> (f64, f64) {
        match *self {
            PaperSize::A0 => (841.0, 1189.0),
            PaperSize::A1 => (594.0, 841.0),
            PaperSize::A2 => (420.0, 594.0),
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            PaperSize::A5 => (148.0, 210.0),
            PaperSize::Letter => (215.9, 279.4),
            PaperSize::Legal => (215.9, 355.6),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (width_mm.min(height_mm), width_mm.max(height_mm)),
        }
    }
    pub fn name(&self) -> String {
        match self {
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => format!("{}x{}", width_mm, height_mm),
            paper => format!("{:?}", paper),
        }
    }
}

impl FromStr for PaperSize {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<PaperSize> {
        match &s.to_uppercase() as &str {
            "A0" => Ok(PaperSize::A0),
            "A1" => Ok(PaperSize::A1),
            "A2" => Ok(PaperSize::A2),
            "A3" => Ok(PaperSize::A3),
            "A4" => Ok(PaperSize::A4),
            "A5" => Ok(PaperSize::A5),
            "LETTER" => Ok(PaperSize::Letter),
            "LEGAL" => Ok(PaperSize::Legal),
            _ => Err(GridError::Config(format!("Unknown paper size '{}'", s))),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Page orientation
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl FromStr for Orientation {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Orientation> {
        match &s.to_lowercase() as &str {
            "portrait" | "hoch" => Ok(Orientation::Portrait),
            "landscape" | "quer" => Ok(Orientation::Landscape),
            _ => Err(GridError::Config(format!("Unknown orientation '{}'", s))),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

/// Page layout of an atlas
#[derive(Clone, Debug)]
pub struct GridOptions {
    /// Scale denominator
    pub scale: u32,
    pub paper: PaperSize,
    pub orientation: Orientation,
}

impl GridOptions {
    pub fn new(scale: u32, paper: PaperSize, orientation: Orientation) -> GridOptions {
        GridOptions {
            scale,
            paper,
            orientation,
        }
    }
    pub fn is_standard_scale(&self) -> bool {
        STANDARD_SCALES.contains(&self.scale)
    }
    /// Ground size of a page in meters
    pub fn grid_config(&self) -> GridResult<GridConfig> {
        if self.scale == 0 {
            return Err(GridError::Config("Scale must be positive".to_string()));
        }
        let (short, long) = self.paper.dimensions_mm();
        let (width_mm, height_mm) = match self.orientation {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        };
        let scale = self.scale as f64;
        GridConfig::new(width_mm * scale / 1000.0, height_mm * scale / 1000.0)
    }
}

/// Cell dimensions in units of the working reference
#[derive(PartialEq, Clone, Debug)]
pub struct GridConfig {
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridConfig {
    pub fn new(cell_width: f64, cell_height: f64) -> GridResult<GridConfig> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cell_width) || !valid(cell_height) {
            return Err(GridError::Config(format!(
                "Cell size must be positive, got {} x {}",
                cell_width, cell_height
            )));
        }
        Ok(GridConfig {
            cell_width,
            cell_height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size() {
        let opts = GridOptions::new(1000, PaperSize::A4, Orientation::Portrait);
        let cfg = opts.grid_config().unwrap();
        assert_eq!(cfg.cell_width, 210.0);
        assert_eq!(cfg.cell_height, 297.0);

        let opts = GridOptions::new(2000, PaperSize::A4, Orientation::Landscape);
        let cfg = opts.grid_config().unwrap();
        assert_eq!(cfg.cell_width, 594.0);
        assert_eq!(cfg.cell_height, 420.0);

        let opts = GridOptions::new(
            1000,
            PaperSize::Custom {
                width_mm: 344.0,
                height_mm: 280.0,
            },
            Orientation::Landscape,
        );
        let cfg = opts.grid_config().unwrap();
        assert_eq!(cfg, GridConfig::new(344.0, 280.0).unwrap());
    }

    #[test]
    fn test_invalid_config() {
        let opts = GridOptions::new(0, PaperSize::A3, Orientation::Portrait);
        assert!(opts.grid_config().is_err());
        assert!(GridConfig::new(0.0, 10.0).is_err());
        assert!(GridConfig::new(10.0, -1.0).is_err());
        assert!(GridConfig::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!("a4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert_eq!("Letter".parse::<PaperSize>().unwrap(), PaperSize::Letter);
        assert!("B5".parse::<PaperSize>().is_err());
        assert_eq!(
            "quer".parse::<Orientation>().unwrap(),
            Orientation::Landscape
        );
        assert_eq!(
            "Portrait".parse::<Orientation>().unwrap(),
            Orientation::Portrait
        );
        assert!("diagonal".parse::<Orientation>().is_err());
        assert_eq!(PaperSize::A4.to_string(), "A4");
        assert!(GridOptions::new(5000, PaperSize::A4, Orientation::Portrait).is_standard_scale());
        assert!(!GridOptions::new(4000, PaperSize::A4, Orientation::Portrait).is_standard_scale());
    }
}
