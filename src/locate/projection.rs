//! Local projection for distortion-free containment tests.

use geo::{Coord, LineString, Point, Polygon};
use proj::Proj;

use crate::error::ProfileError;
use crate::models::GeoPoint;

/// Azimuthal-equidistant projection centered on a reference coordinate.
///
/// Distances and directions from the center are preserved, so geometries
/// near the center can be compared in plane coordinates (meters).
pub struct LocalProjection {
    proj: Proj,
    center: GeoPoint,
}

impl LocalProjection {
    /// Build an azimuthal-equidistant projection centered at `center`.
    pub fn azimuthal_equidistant(center: GeoPoint) -> Result<Self, ProfileError> {
        let def = format!(
            "+proj=aeqd +lat_0={} +lon_0={} +datum=WGS84 +units=m +no_defs +type=crs",
            center.lat, center.lon
        );
        let proj = Proj::new_known_crs("EPSG:4326", &def, None)
            .map_err(|e| ProfileError::Projection(format!("failed to create projection: {e}")))?;
        Ok(Self { proj, center })
    }

    /// Center coordinate of the projection.
    pub fn center(&self) -> GeoPoint {
        self.center
    }

    /// Project a geographic coordinate into the local plane.
    pub fn project_point(&self, latlon: GeoPoint) -> Result<Point<f64>, ProfileError> {
        let (x, y) = self
            .proj
            .convert((latlon.lon, latlon.lat))
            .map_err(|e| ProfileError::Projection(format!("transformation failed: {e}")))?;
        Ok(Point::new(x, y))
    }

    /// Project a lon/lat polygon into the local plane.
    pub fn project_polygon(&self, poly: &Polygon<f64>) -> Result<Polygon<f64>, ProfileError> {
        let exterior = poly
            .exterior()
            .coords()
            .map(|c| {
                self.proj
                    .convert((c.x, c.y))
                    .map(|(x, y)| Coord { x, y })
                    .map_err(|e| ProfileError::Projection(format!("transformation failed: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Polygon::new(LineString::new(exterior), vec![]))
    }
}
