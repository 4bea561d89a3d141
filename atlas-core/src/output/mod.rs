//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

mod dirstore;
mod geojson_writer;
mod output;


pub use self::dirstore::Dirstore;
pub use self::geojson_writer::grid_feature_collection;
pub use self::output::{GridOutput, Nooutput};
