//! R-tree construction over a snapshot tree.

use hierarchy::{Bounds, HierarchyTree, NodeId};
use log::debug;
use rstar::{AABB, Envelope as _, PointDistance, RTree, RTreeObject};

/// One indexed rectangle, tied back to its tree node.
///
/// The entry does not own the node; `node` is a handle into the snapshot
/// tree the index was built from.
#[derive(Debug, Clone)]
pub struct Entry {
    id: u64,
    envelope: AABB<[f64; 2]>,
    area: f64,
    node: NodeId,
}

impl Entry {
    /// Build-local id, assigned in document traversal order.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Handle of the owning tree node.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Rectangle area, the hit resolver's ranking key.
    #[inline]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Corner-point form `(x_min, y_min, x_max, y_max)`.
    pub fn corners(&self) -> (f64, f64, f64, f64) {
        let lower = self.envelope.lower();
        let upper = self.envelope.upper();
        (lower[0], lower[1], upper[0], upper[1])
    }
}

impl RTreeObject for Entry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

impl PointDistance for Entry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.envelope.distance_2(point)
    }
}

/// A per-snapshot rectangle index.
pub struct SpatialIndex {
    tree: RTree<Entry>,
}

impl SpatialIndex {
    /// Index every node with resolved bounds, one traversal, one entry each.
    ///
    /// Entry ids come from a counter scoped to this call, so a rebuilt index
    /// never carries ids over from a previous snapshot.
    pub fn build(snapshot: &HierarchyTree) -> Self {
        let mut next_id = 0_u64;
        let mut entries = Vec::new();
        for node in snapshot.descendants() {
            let Some(bounds) = snapshot.get(node).and_then(|element| element.bounds) else {
                continue;
            };
            entries.push(Entry {
                id: next_id,
                envelope: envelope_of(bounds),
                area: bounds.area(),
                node,
            });
            next_id += 1;
        }
        debug!(
            "indexed {} of {} snapshot nodes",
            entries.len(),
            snapshot.node_count()
        );
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// All entries whose rectangle contains the point, boundary-inclusive.
    /// Candidate order is unspecified; callers needing determinism rank by
    /// entry id.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<&Entry> {
        self.tree.locate_all_at_point(&[x, y]).collect()
    }

    /// Every entry, in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.tree.iter()
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

fn envelope_of(bounds: Bounds) -> AABB<[f64; 2]> {
    let (x_min, y_min, x_max, y_max) = bounds.corners();
    AABB::from_corners([x_min, y_min], [x_max, y_max])
}
