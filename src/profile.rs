//! Profile box construction.
//!
//! A profile is a directed path from an origin along a fixed azimuth,
//! partitioned into distance bins. Each bin becomes one rectangular box.

use geo::{Coord, LineString, Polygon};
use tracing::debug;

use crate::error::ProfileError;
use crate::geodesy::direct_geodetic;
use crate::models::{GeoPoint, ProfileBox, ProfileMeta};

/// Default box width in km, wide enough to catch everything near a profile.
pub const LARGE_BOX_WIDTH: f64 = 2000.0;

/// Create a single box starting `offset` km along the profile.
fn build_box(latlon0: GeoPoint, azimuth: f64, length: f64, width: f64, offset: f64) -> ProfileBox {
    let start = direct_geodetic(latlon0, azimuth, offset);

    // Trace the four corners: half a width out to the side, then a closed
    // rectangle whose long axis follows the profile direction.
    let azis = [
        (azimuth - 90.0).rem_euclid(360.0),
        azimuth,
        (azimuth + 90.0).rem_euclid(360.0),
        (azimuth + 180.0).rem_euclid(360.0),
    ];
    let dists = [width / 2.0, length, width, length];

    let mut latlon = start;
    let mut corners = Vec::with_capacity(4);
    for (azi, dist) in azis.iter().zip(dists) {
        latlon = direct_geodetic(latlon, *azi, dist);
        corners.push(Coord {
            x: latlon.lon,
            y: latlon.lat,
        });
    }

    ProfileBox {
        poly: Polygon::new(LineString::new(corners), vec![]),
        length,
        pos: offset + length / 2.0,
        latlon: direct_geodetic(start, azimuth, length / 2.0),
        profile: None,
    }
}

/// Validate distance-bin edges: at least two, finite, strictly increasing.
fn check_bins(bins: &[f64]) -> Result<(), ProfileError> {
    if bins.len() < 2 {
        return Err(ProfileError::InvalidBins(format!(
            "need at least 2 bin edges, got {}",
            bins.len()
        )));
    }
    if let Some(edge) = bins.iter().find(|b| !b.is_finite()) {
        return Err(ProfileError::InvalidBins(format!(
            "bin edges must be finite, got {edge}"
        )));
    }
    for pair in bins.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ProfileError::InvalidBins(format!(
                "bin edges must be strictly increasing, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

/// Create 2D boxes along a profile for distance binning.
///
/// `latlon0` is the starting coordinate, `azimuth` the profile direction in
/// degrees, `bins` the edges of the distance bins in km (e.g. `[0.0, 10.0,
/// 20.0, 30.0]`) and `width` the box width in km (default:
/// [`LARGE_BOX_WIDTH`]).
///
/// One [`ProfileBox`] is returned per adjacent pair of bin edges; the first
/// box also carries the profile metadata. Bins that are too short, not
/// finite or not strictly increasing are rejected, as is a non-positive
/// width.
pub fn get_profile_boxes(
    latlon0: GeoPoint,
    azimuth: f64,
    bins: &[f64],
    width: Option<f64>,
) -> Result<Vec<ProfileBox>, ProfileError> {
    check_bins(bins)?;
    let width = width.unwrap_or(LARGE_BOX_WIDTH);
    if !width.is_finite() || width <= 0.0 {
        return Err(ProfileError::InvalidWidth(width));
    }

    let mut boxes = Vec::with_capacity(bins.len() - 1);
    for i in 0..bins.len() - 1 {
        let length = bins[i + 1] - bins[i];
        let mut bx = build_box(latlon0, azimuth, length, width, bins[i]);
        if i == 0 {
            bx.profile = Some(ProfileMeta {
                latlon: latlon0,
                azimuth,
                length: bins[bins.len() - 1] - bins[0],
                width,
            });
        }
        boxes.push(bx);
    }

    debug!(
        "built {} profile boxes from ({}, {}) along azimuth {}",
        boxes.len(),
        latlon0.lat,
        latlon0.lon,
        azimuth
    );
    Ok(boxes)
}
