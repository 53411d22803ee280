//! Box lookup for query coordinates.

use geo::Contains;
use tracing::debug;

use super::index::BoxSpatialIndex;
use super::projection::LocalProjection;
use crate::error::ProfileError;
use crate::models::{GeoPoint, ProfileBox};

/// Projection center for a box list: the midpoint of the middle box.
fn projection_center(boxes: &[ProfileBox]) -> GeoPoint {
    boxes[boxes.len() / 2].latlon
}

/// Return the box which encloses the coordinates.
///
/// Boxes are tested in list order after reprojecting into `projection`, or
/// into a fresh azimuthal-equidistant projection centered on the middle box
/// when none is supplied. Containment is interior-only: a point exactly on
/// the shared edge of two adjacent boxes matches neither. `Ok(None)` means
/// the point lies outside every box and is a normal outcome.
pub fn find_box<'a>(
    latlon: GeoPoint,
    boxes: &'a [ProfileBox],
    projection: Option<&LocalProjection>,
) -> Result<Option<&'a ProfileBox>, ProfileError> {
    if boxes.is_empty() {
        return Ok(None);
    }

    let built;
    let projection = match projection {
        Some(p) => p,
        None => {
            built = LocalProjection::azimuthal_equidistant(projection_center(boxes))?;
            &built
        }
    };

    let p = projection.project_point(latlon)?;
    for bx in boxes {
        let poly = projection.project_polygon(&bx.poly)?;
        if poly.contains(&p) {
            return Ok(Some(bx));
        }
    }
    Ok(None)
}

/// Repeated-lookup service for one list of profile boxes.
///
/// Every box polygon is reprojected once at build time and indexed in an
/// R-tree; queries only project the point. Lookups return the index of the
/// containing box, resolving overlaps to the lowest index.
pub struct ProfileLocator {
    projection: LocalProjection,
    index: BoxSpatialIndex,
}

impl ProfileLocator {
    /// Build a locator with a projection centered on the middle box.
    pub fn new(boxes: &[ProfileBox]) -> Result<Self, ProfileError> {
        if boxes.is_empty() {
            return Err(ProfileError::EmptyProfile);
        }
        let projection = LocalProjection::azimuthal_equidistant(projection_center(boxes))?;
        Self::with_projection(boxes, projection)
    }

    /// Build a locator with a caller-supplied projection.
    pub fn with_projection(
        boxes: &[ProfileBox],
        projection: LocalProjection,
    ) -> Result<Self, ProfileError> {
        let polys = boxes
            .iter()
            .map(|bx| projection.project_polygon(&bx.poly))
            .collect::<Result<Vec<_>, _>>()?;
        let index = BoxSpatialIndex::build(polys);
        debug!("locator indexed {} boxes", index.len());
        Ok(Self { projection, index })
    }

    /// Index of the box containing the coordinates, if any.
    pub fn locate(&self, latlon: GeoPoint) -> Result<Option<usize>, ProfileError> {
        let p = self.projection.project_point(latlon)?;
        Ok(self.index.locate(p))
    }

    /// The projection shared by all lookups.
    pub fn projection(&self) -> &LocalProjection {
        &self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::get_profile_boxes;

    fn equator_boxes() -> Vec<ProfileBox> {
        get_profile_boxes(GeoPoint::new(0.0, 0.0), 90.0, &[0.0, 10.0, 20.0], Some(2000.0))
            .expect("valid bins")
    }

    #[test]
    fn test_find_box_at_midpoint() {
        let boxes = equator_boxes();
        let hit = find_box(boxes[1].latlon, &boxes, None)
            .expect("lookup")
            .expect("midpoint is inside its box");
        assert_eq!(hit.pos, 15.0);
    }

    #[test]
    fn test_find_box_miss() {
        let boxes = equator_boxes();
        // Far beyond the lateral half-width of 1000 km
        let miss = find_box(GeoPoint::new(45.0, 5.0), &boxes, None).expect("lookup");
        assert!(miss.is_none());
        // Empty list is also a plain miss
        assert!(find_box(GeoPoint::new(0.0, 0.0), &[], None)
            .expect("lookup")
            .is_none());
    }

    #[test]
    fn test_locator_agrees_with_find_box() {
        let boxes = equator_boxes();
        let locator = ProfileLocator::new(&boxes).expect("locator");
        assert_eq!(locator.locate(boxes[0].latlon).expect("lookup"), Some(0));
        assert_eq!(locator.locate(boxes[1].latlon).expect("lookup"), Some(1));
        assert_eq!(locator.locate(GeoPoint::new(45.0, 5.0)).expect("lookup"), None);
    }

    #[test]
    fn test_locator_overlap_takes_lower_index() {
        let mut boxes = equator_boxes();
        let duplicates = equator_boxes();
        boxes.extend(duplicates);
        let locator = ProfileLocator::new(&boxes).expect("locator");
        assert_eq!(locator.locate(boxes[0].latlon).expect("lookup"), Some(0));
    }

    #[test]
    fn test_locator_rejects_empty_profile() {
        assert!(matches!(
            ProfileLocator::new(&[]),
            Err(ProfileError::EmptyProfile)
        ));
    }
}
