//! Core data types for profiles and their boxes.

use geo_types::Polygon;
use serde::{Deserialize, Serialize};

/// Geographic point (lat/lon, WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for GeoPoint {
    /// Convert from a `(lat, lon)` tuple.
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// Profile-level metadata, carried by the first box of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileMeta {
    /// Starting coordinate of the profile
    pub latlon: GeoPoint,
    /// Azimuth of the profile direction in degrees clockwise from north
    pub azimuth: f64,
    /// Total profile length in km (last bin edge minus first)
    pub length: f64,
    /// Box width in km
    pub width: f64,
}

/// A rectangular distance bin along a profile.
///
/// The polygon is oriented with its long axis along the profile azimuth and
/// its corners stored as (lon, lat) pairs.
#[derive(Debug, Clone)]
pub struct ProfileBox {
    /// Box outline with lon/lat corners
    pub poly: Polygon<f64>,
    /// Along-profile length in km
    pub length: f64,
    /// Midpoint of the box in km from the profile's starting coordinate
    pub pos: f64,
    /// Midpoint of the box as a coordinate
    pub latlon: GeoPoint,
    /// Profile metadata, `Some` on the first box only
    pub profile: Option<ProfileMeta>,
}
