//! Point-in-box lookup for profile coordinates.
//!
//! Box polygons and query points are reprojected into a local
//! azimuthal-equidistant plane before containment testing, so lookups stay
//! correct near the antimeridian and the poles.

mod index;
mod projection;
mod service;

pub use projection::LocalProjection;
pub use service::{find_box, ProfileLocator};
