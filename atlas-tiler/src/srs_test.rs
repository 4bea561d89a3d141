//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::error::GridError;
use crate::extent::Extent;
use crate::srs::{select_working_srs, utm_srid, utm_zone, SpatialRef, Unit, FALLBACK_SRID};
use crate::transform::Transformer;
use geo::{point, Coord, Geometry, LineString};

#[test]
fn test_utm_zone() {
    assert_eq!(utm_zone(9.0), 32);
    assert_eq!(utm_zone(-180.0), 1);
    assert_eq!(utm_zone(179.9), 60);
    // clamped
    assert_eq!(utm_zone(180.0), 60);
    assert_eq!(utm_srid(9.0, 51.0), 32632);
    assert_eq!(utm_srid(-58.4, -34.6), 32721);
    assert_eq!(utm_srid(0.0, 0.0), 32631);
}

#[test]
fn test_select_geographic() {
    let extent = Extent::new(8.5, 50.5, 9.5, 51.5);
    let srs = select_working_srs(Some(&extent), &SpatialRef::wgs84());
    assert_eq!(srs.srid, 32632);
    assert_eq!(srs.units, Unit::Meters);
    assert!(!srs.is_geographic());

    let extent = Extent::new(-58.5, -34.7, -58.3, -34.5);
    let srs = select_working_srs(Some(&extent), &SpatialRef::wgs84());
    assert_eq!(srs.srid, 32721);
    assert!(srs.proj.contains("+south"));
}

#[test]
fn test_select_projected() {
    let native = SpatialRef::from_srid(25833).unwrap();
    let extent = Extent::new(400000.0, 5800000.0, 410000.0, 5810000.0);
    let srs = select_working_srs(Some(&extent), &native);
    assert_eq!(srs, native);

    // No unit conversion for projected references in feet
    let native = SpatialRef::from_srid(2263).unwrap();
    let srs = select_working_srs(Some(&extent), &native);
    assert_eq!(srs.srid, 2263);
    assert_eq!(srs.units, Unit::Feet);
}

#[test]
fn test_select_fallback() {
    let srs = select_working_srs(None, &SpatialRef::wgs84());
    assert_eq!(srs.srid, FALLBACK_SRID);
    let srs = select_working_srs(
        Some(&Extent::new(f64::NAN, 0.0, 1.0, 1.0)),
        &SpatialRef::wgs84(),
    );
    assert_eq!(srs.srid, FALLBACK_SRID);
    let srs = select_working_srs(
        Some(&Extent::new(10.0, 0.0, 1.0, 1.0)),
        &SpatialRef::from_srid(3857).unwrap(),
    );
    assert_eq!(srs.srid, FALLBACK_SRID);
    assert_eq!(SpatialRef::fallback().units, Unit::Meters);
}

#[test]
fn test_known_srids() {
    assert_eq!(SpatialRef::from_srid(4326).unwrap(), SpatialRef::wgs84());
    assert!(SpatialRef::from_srid(4258).unwrap().is_geographic());
    assert_eq!(SpatialRef::from_srid(25832).unwrap(), SpatialRef::fallback());
    assert_eq!(
        SpatialRef::from_srid(32760).unwrap().proj,
        "+proj=utm +zone=60 +south +datum=WGS84 +units=m +no_defs"
    );
    assert_eq!(
        SpatialRef::from_srid(9999).err(),
        Some(GridError::UnknownSrid(9999))
    );
    assert_eq!(SpatialRef::from_srid(32661).err(), Some(GridError::UnknownSrid(32661)));
    assert_eq!(SpatialRef::wgs84().to_string(), "EPSG:4326");
}

#[test]
fn test_transform_utm() {
    let utm = SpatialRef::from_srid(32632).unwrap();
    let transformer = Transformer::new(&SpatialRef::wgs84(), &utm).unwrap();
    assert!(!transformer.is_identity());
    let c = transformer.transform_coord(Coord { x: 9.0, y: 51.0 }).unwrap();
    // Central meridian of zone 32
    assert!((c.x - 500000.0).abs() < 0.01, "easting {}", c.x);
    assert!(c.y > 5_600_000.0 && c.y < 5_700_000.0, "northing {}", c.y);

    let back = Transformer::new(&utm, &SpatialRef::wgs84()).unwrap();
    let ll = back.transform_coord(c).unwrap();
    assert!((ll.x - 9.0).abs() < 1e-7);
    assert!((ll.y - 51.0).abs() < 1e-7);
}

#[test]
fn test_transform_identity() {
    let srs = SpatialRef::from_srid(25832).unwrap();
    let transformer = Transformer::new(&srs, &srs.clone()).unwrap();
    assert!(transformer.is_identity());
    let geom = Geometry::Point(point!(x: 1.5, y: 2.5));
    assert_eq!(transformer.transform_geometry(&geom).unwrap(), geom);
}

#[test]
fn test_transform_features() {
    let utm = SpatialRef::from_srid(32632).unwrap();
    let transformer = Transformer::new(&SpatialRef::wgs84(), &utm).unwrap();
    let geoms = vec![
        Geometry::Point(point!(x: 9.0, y: 51.0)),
        Geometry::LineString(LineString::new(vec![])),
        Geometry::Point(point!(x: f64::NAN, y: 51.0)),
        Geometry::Point(point!(x: 9.1, y: 51.1)),
    ];
    let (transformed, failures) = transformer.transform_features(&geoms);
    // empty geometry skipped silently
    assert_eq!(transformed.len(), 2);
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].index, 2);
}
