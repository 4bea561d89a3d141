//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod datasource;
pub mod geojson;
pub mod geojson_ds;


pub use self::datasource::{DatasourceInput, InputFeatures};
pub use self::geojson_ds::GeojsonDatasource;
