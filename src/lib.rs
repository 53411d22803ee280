//! Geoprofile - profile boxes along a great-circle path
//!
//! This library builds rectangular distance-bin polygons along an azimuth
//! from a starting coordinate on the WGS84 ellipsoid, and looks up which
//! box encloses a given coordinate.

pub mod error;
pub mod geodesy;
pub mod locate;
pub mod models;
pub mod profile;

pub use error::ProfileError;
pub use geodesy::{direct_geodetic, geodesic_distance};
pub use locate::{find_box, LocalProjection, ProfileLocator};
pub use models::{GeoPoint, ProfileBox, ProfileMeta};
pub use profile::{get_profile_boxes, LARGE_BOX_WIDTH};
