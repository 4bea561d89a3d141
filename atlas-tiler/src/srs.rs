//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Spatial reference systems and working projection selection

use crate::error::{GridError, GridResult};
use crate::extent::Extent;
use std::fmt;

/// WGS 84 geographic
pub const EPSG_WGS84: i32 = 4326;
/// ETRS89 geographic
pub const EPSG_ETRS89: i32 = 4258;
/// Web Mercator
pub const EPSG_WEB_MERCATOR: i32 = 3857;
/// ETRS89 / UTM zone 32N, used when no zone can be derived from the data
pub const FALLBACK_SRID: i32 = 25832;

/// Grid units
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Unit {
    Meters,
    Degrees,
    Feet,
}

/// Spatial reference system
#[derive(Clone, Debug)]
pub struct SpatialRef {
    /// EPSG code
    pub srid: i32,
    pub units: Unit,
    /// proj4 definition string
    pub proj: String,
}

impl PartialEq for SpatialRef {
    fn eq(&self, other: &SpatialRef) -> bool {
        self.srid == other.srid
    }
}

impl SpatialRef {
    pub fn new(srid: i32, units: Unit, proj: &str) -> SpatialRef {
        SpatialRef {
            srid,
            units,
            proj: proj.to_string(),
        }
    }
    /// Lookup of the built-in definitions
    pub fn from_srid(srid: i32) -> GridResult<SpatialRef> {
        proj_definition(srid)
            .map(|(units, proj)| SpatialRef::new(srid, units, &proj))
            .ok_or(GridError::UnknownSrid(srid))
    }
    pub fn wgs84() -> SpatialRef {
        SpatialRef::new(
            EPSG_WGS84,
            Unit::Degrees,
            "+proj=longlat +datum=WGS84 +no_defs",
        )
    }
    /// Metric reference used for degenerate extents
    pub fn fallback() -> SpatialRef {
        SpatialRef::new(FALLBACK_SRID, Unit::Meters, &etrs89_utm(32))
    }
    /// Angular units (degrees)
    pub fn is_geographic(&self) -> bool {
        self.units == Unit::Degrees
    }
}

impl fmt::Display for SpatialRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EPSG:{}", self.srid)
    }
}

fn wgs84_utm(zone: i32, south: bool) -> String {
    format!(
        "+proj=utm +zone={}{} +datum=WGS84 +units=m +no_defs",
        zone,
        if south { " +south" } else { "" }
    )
}

fn etrs89_utm(zone: i32) -> String {
    format!(
        "+proj=utm +zone={} +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
        zone
    )
}

fn proj_definition(srid: i32) -> Option<(Unit, String)> {
    match srid {
        EPSG_WGS84 => Some((
            Unit::Degrees,
            "+proj=longlat +datum=WGS84 +no_defs".to_string(),
        )),
        EPSG_ETRS89 => Some((
            Unit::Degrees,
            "+proj=longlat +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +no_defs".to_string(),
        )),
        EPSG_WEB_MERCATOR => Some((
            Unit::Meters,
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs"
                .to_string(),
        )),
        // Swiss LV95
        2056 => Some((
            Unit::Meters,
            "+proj=somerc +lat_0=46.9524055555556 +lon_0=7.43958333333333 +k_0=1 +x_0=2600000 +y_0=1200000 +ellps=bessel +towgs84=674.374,15.056,405.346,0,0,0,0 +units=m +no_defs"
                .to_string(),
        )),
        // Gauss-Krueger zone 3
        31467 => Some((
            Unit::Meters,
            "+proj=tmerc +lat_0=0 +lon_0=9 +k=1 +x_0=3500000 +y_0=0 +ellps=bessel +towgs84=598.1,73.7,418.2,0.202,0.045,-2.455,6.7 +units=m +no_defs"
                .to_string(),
        )),
        // NAD83 / New York Long Island (ftUS)
        2263 => Some((
            Unit::Feet,
            "+proj=lcc +lat_0=40.1666666666667 +lon_0=-74 +lat_1=41.0333333333333 +lat_2=40.6666666666667 +x_0=300000 +y_0=0 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=us-ft +no_defs"
                .to_string(),
        )),
        // ETRS89 / UTM zones 28N-38N
        25828..=25838 => Some((Unit::Meters, etrs89_utm(srid - 25800))),
        // WGS 84 / UTM zones
        32601..=32660 => Some((Unit::Meters, wgs84_utm(srid - 32600, false))),
        32701..=32760 => Some((Unit::Meters, wgs84_utm(srid - 32700, true))),
        _ => None,
    }
}

/// UTM zone number (1-60) of a longitude in degrees
pub fn utm_zone(lon: f64) -> i32 {
    let zone = ((lon + 180.0) / 6.0).floor() as i32 + 1;
    zone.max(1).min(60)
}

/// WGS 84 / UTM EPSG code for a position in degrees
pub fn utm_srid(lon: f64, lat: f64) -> i32 {
    let zone = utm_zone(lon);
    if lat >= 0.0 {
        32600 + zone
    } else {
        32700 + zone
    }
}

/// Select a metric spatial reference for tiling data with the given extent.
///
/// Geographic data is tiled in the UTM zone of the extent center, projected
/// data in its own reference. Missing or degenerate extents get the fallback
/// reference.
pub fn select_working_srs(extent: Option<&Extent>, native: &SpatialRef) -> SpatialRef {
    let extent = match extent {
        Some(extent) if !extent.is_degenerate() => extent,
        _ => {
            info!(
                "No usable extent - using fallback reference EPSG:{}",
                FALLBACK_SRID
            );
            return SpatialRef::fallback();
        }
    };
    if !native.is_geographic() {
        if native.units != Unit::Meters {
            // Projected references are used as they are
            warn!(
                "{} is projected in {:?} - grid cells will be sized in these units",
                native, native.units
            );
        }
        return native.clone();
    }
    let (lon, lat) = extent.center();
    if !lon.is_finite() || !lat.is_finite() {
        return SpatialRef::fallback();
    }
    let srid = utm_srid(lon, lat);
    debug!("Center ({}, {}) lies in EPSG:{}", lon, lat, srid);
    SpatialRef::from_srid(srid).unwrap_or_else(|_| SpatialRef::fallback())
}
