//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate log;

pub mod grid_service;
pub mod runtime_config;

pub use grid_service::{GridReport, GridService};
