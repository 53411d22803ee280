//! Direct and inverse geodetic problems on the WGS84 ellipsoid.

use geo::{Destination, Distance, Geodesic, Point};

use crate::models::GeoPoint;

/// Solve the direct geodetic problem.
///
/// Returns the coordinates reached by travelling `dist` kilometers from
/// `latlon` along `azimuth` (degrees clockwise from north) on a WGS84 globe.
/// Distances are converted to meters at this boundary; out-of-range inputs
/// surface as non-finite coordinates from the underlying solver.
pub fn direct_geodetic(latlon: GeoPoint, azimuth: f64, dist: f64) -> GeoPoint {
    let dest = Geodesic.destination(Point::new(latlon.lon, latlon.lat), azimuth, dist * 1000.0);
    GeoPoint::new(dest.y(), dest.x())
}

/// Geodesic distance between two coordinates in kilometers.
pub fn geodesic_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    Geodesic.distance(Point::new(a.lon, a.lat), Point::new(b.lon, b.lat)) / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_from_equator() {
        // One degree of longitude at the equator is ~111.32 km
        let dest = direct_geodetic(GeoPoint::new(0.0, 0.0), 90.0, 111.32);
        assert!((dest.lon - 1.0).abs() < 1e-3, "got lon {}", dest.lon);
        assert!(dest.lat.abs() < 1e-9, "got lat {}", dest.lat);
    }

    #[test]
    fn test_round_trip() {
        let start = GeoPoint::new(47.4, 8.5);
        let out = direct_geodetic(start, 37.5, 123.4);
        let back = direct_geodetic(out, (37.5 + 180.0) % 360.0, 123.4);
        assert!((back.lat - start.lat).abs() < 1e-6, "got lat {}", back.lat);
        assert!((back.lon - start.lon).abs() < 1e-6, "got lon {}", back.lon);
    }

    #[test]
    fn test_distance_matches_step() {
        let start = GeoPoint::new(-33.9, 18.4);
        let dest = direct_geodetic(start, 254.0, 42.0);
        let d = geodesic_distance(start, dest);
        assert!((d - 42.0).abs() < 1e-6, "got {d}");
    }
}
