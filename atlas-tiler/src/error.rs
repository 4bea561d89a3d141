//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Error types

use std::error::Error;
use std::fmt;

/// Errors raised by grid calculations
#[derive(PartialEq, Clone, Debug)]
pub enum GridError {
    /// Invalid grid configuration (scale, paper size, cell size)
    Config(String),
    /// Spatial reference without known definition
    UnknownSrid(i32),
    /// Projection definition rejected by proj4rs
    Projection { srid: i32, reason: String },
    /// Coordinate transformation failed
    Transform(String),
    /// Aborted between lattice rows
    Cancelled,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Config(msg) => write!(f, "Invalid grid configuration: {}", msg),
            GridError::UnknownSrid(srid) => write!(f, "Unsupported spatial reference EPSG:{}", srid),
            GridError::Projection { srid, reason } => {
                write!(f, "Invalid projection EPSG:{}: {}", srid, reason)
            }
            GridError::Transform(msg) => write!(f, "Transformation failed: {}", msg),
            GridError::Cancelled => write!(f, "Grid generation cancelled"),
        }
    }
}

impl Error for GridError {}

pub type GridResult<T> = Result<T, GridError>;
