//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! GeoJSON geometry decoding

use geo::{
    Coord, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon,
    Point, Polygon,
};
use serde_json::Value;

/// Decoded features of a GeoJSON document
#[derive(Debug)]
pub struct GeojsonFeatures {
    pub geometries: Vec<Geometry<f64>>,
    /// Features without usable geometry: (feature number, reason)
    pub skipped: Vec<(usize, String)>,
    /// EPSG code from a `crs` member
    pub srid: Option<i32>,
}

/// Decode a FeatureCollection, Feature or bare geometry
pub fn parse_geojson(json: &str) -> Result<GeojsonFeatures, String> {
    let doc: Value =
        serde_json::from_str(json).map_err(|e| format!("Invalid GeoJSON: {}", e))?;
    let srid = doc.get("crs").and_then(crs_srid);
    let mut result = GeojsonFeatures {
        geometries: Vec::new(),
        skipped: Vec::new(),
        srid,
    };
    match doc.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => {
            let features = doc
                .get("features")
                .and_then(Value::as_array)
                .ok_or("FeatureCollection without `features` array")?;
            for (no, feature) in features.iter().enumerate() {
                match feature_geometry(feature) {
                    Ok(geom) => result.geometries.push(geom),
                    Err(reason) => {
                        debug!("Skipping feature #{}: {}", no, reason);
                        result.skipped.push((no, reason));
                    }
                }
            }
        }
        Some("Feature") => match feature_geometry(&doc) {
            Ok(geom) => result.geometries.push(geom),
            Err(reason) => result.skipped.push((0, reason)),
        },
        Some(_) => result.geometries.push(geometry(&doc)?),
        None => return Err("Invalid GeoJSON: missing `type`".to_string()),
    }
    Ok(result)
}

fn feature_geometry(feature: &Value) -> Result<Geometry<f64>, String> {
    match feature.get("geometry") {
        Some(Value::Null) | None => Err("Feature without geometry".to_string()),
        Some(geom) => geometry(geom),
    }
}

/// EPSG code of a named crs (`EPSG:2056`, `urn:ogc:def:crs:EPSG::2056`)
fn crs_srid(crs: &Value) -> Option<i32> {
    let name = crs.get("properties")?.get("name")?.as_str()?;
    if name.ends_with("CRS84") {
        return Some(4326);
    }
    name.rsplit(':').next()?.parse().ok()
}

fn position(value: &Value) -> Result<Coord<f64>, String> {
    let pos = value.as_array().ok_or("Position is not an array")?;
    match (
        pos.get(0).and_then(Value::as_f64),
        pos.get(1).and_then(Value::as_f64),
    ) {
        (Some(x), Some(y)) => Ok(Coord { x, y }),
        _ => Err(format!("Invalid position {}", value)),
    }
}

fn positions(value: &Value) -> Result<Vec<Coord<f64>>, String> {
    value
        .as_array()
        .ok_or("Coordinates are not an array")?
        .iter()
        .map(position)
        .collect()
}

fn polygon(value: &Value) -> Result<Polygon<f64>, String> {
    let mut rings = value
        .as_array()
        .ok_or("Polygon rings are not an array")?
        .iter()
        .map(|ring| positions(ring).map(LineString::from));
    let exterior = match rings.next() {
        Some(ring) => ring?,
        None => LineString::new(Vec::new()),
    };
    let interiors = rings.collect::<Result<Vec<_>, String>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn members<T, F>(value: &Value, decode: F) -> Result<Vec<T>, String>
where
    F: Fn(&Value) -> Result<T, String>,
{
    value
        .as_array()
        .ok_or("Coordinates are not an array")?
        .iter()
        .map(decode)
        .collect()
}

/// Decode a GeoJSON geometry object
pub fn geometry(value: &Value) -> Result<Geometry<f64>, String> {
    let geom_type = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or("Geometry without `type`")?;
    if geom_type == "GeometryCollection" {
        let geometries = value
            .get("geometries")
            .and_then(Value::as_array)
            .ok_or("GeometryCollection without `geometries`")?
            .iter()
            .map(geometry)
            .collect::<Result<Vec<_>, String>>()?;
        return Ok(Geometry::GeometryCollection(GeometryCollection(geometries)));
    }
    let coords = value
        .get("coordinates")
        .ok_or_else(|| format!("{} without `coordinates`", geom_type))?;
    let geom = match geom_type {
        "Point" => Geometry::Point(Point::from(position(coords)?)),
        "MultiPoint" => Geometry::MultiPoint(MultiPoint::new(
            positions(coords)?.into_iter().map(Point::from).collect(),
        )),
        "LineString" => Geometry::LineString(LineString::from(positions(coords)?)),
        "MultiLineString" => Geometry::MultiLineString(MultiLineString::new(members(
            coords,
            |line| positions(line).map(LineString::from),
        )?)),
        "Polygon" => Geometry::Polygon(polygon(coords)?),
        "MultiPolygon" => Geometry::MultiPolygon(MultiPolygon::new(members(coords, polygon)?)),
        other => return Err(format!("Unsupported geometry type '{}'", other)),
    };
    Ok(geom)
}
