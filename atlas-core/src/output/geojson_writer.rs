//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use atlas_tiler::{AtlasGrid, GridCell};
use geo::{LineString, Polygon};
use serde_json::Value;

fn ring(line: &LineString<f64>) -> Value {
    Value::Array(line.coords().map(|c| json!([c.x, c.y])).collect())
}

fn polygon_coordinates(poly: &Polygon<f64>) -> Value {
    let mut rings = vec![ring(poly.exterior())];
    rings.extend(poly.interiors().iter().map(ring));
    Value::Array(rings)
}

fn cell_feature(cell: &GridCell) -> Value {
    json!({
        "type": "Feature",
        "properties": {
            "grid": cell.label,
            "serial": cell.serial,
            "row": cell.row,
            "column": cell.column,
        },
        "geometry": {
            "type": "Polygon",
            "coordinates": polygon_coordinates(&cell.geometry),
        }
    })
}

/// GeoJSON FeatureCollection with one feature per cell in serial order
pub fn grid_feature_collection(name: &str, grid: &AtlasGrid) -> Value {
    let mut cells: Vec<&GridCell> = grid.cells.iter().collect();
    cells.sort_by_key(|cell| cell.serial);
    json!({
        "type": "FeatureCollection",
        "name": name,
        "crs": {
            "type": "name",
            "properties": { "name": format!("urn:ogc:def:crs:EPSG::{}", grid.srs.srid) }
        },
        "features": cells.into_iter().map(cell_feature).collect::<Vec<_>>(),
    })
}
