//! Spatial index over projected box polygons.

use geo::{BoundingRect, Contains, Point, Polygon};
use rstar::{RTree, RTreeObject, AABB};

/// Wrapper for R-tree indexing of a projected box polygon
struct IndexedBox {
    /// Position of the box in the profile's box list
    index: usize,
    poly: Polygon<f64>,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for IndexedBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl IndexedBox {
    fn new(index: usize, poly: Polygon<f64>) -> Option<Self> {
        let rect = poly.bounding_rect()?;
        Some(Self {
            index,
            poly,
            envelope: AABB::from_corners(
                [rect.min().x, rect.min().y],
                [rect.max().x, rect.max().y],
            ),
        })
    }
}

/// R-tree over box polygons sharing one planar coordinate system.
pub(super) struct BoxSpatialIndex {
    tree: RTree<IndexedBox>,
}

impl BoxSpatialIndex {
    /// Build the index from polygons in list order.
    pub fn build(polys: Vec<Polygon<f64>>) -> Self {
        let indexed: Vec<IndexedBox> = polys
            .into_iter()
            .enumerate()
            .filter_map(|(i, p)| IndexedBox::new(i, p))
            .collect();
        Self {
            tree: RTree::bulk_load(indexed),
        }
    }

    /// Lowest box index whose polygon contains the point.
    ///
    /// Containment is interior-only: a point exactly on a box edge matches
    /// neither adjacent box. Where interiors overlap, the lower index wins.
    pub fn locate(&self, point: Point<f64>) -> Option<usize> {
        let query_envelope = AABB::from_point([point.x(), point.y()]);

        // Envelope intersection for candidates, then exact containment
        self.tree
            .locate_in_envelope_intersecting(&query_envelope)
            .filter(|ib| ib.poly.contains(&point))
            .map(|ib| ib.index)
            .min()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }
}
