//! Point-hit resolution.

use crate::index::{Entry, SpatialIndex};
use hierarchy::NodeId;

/// Resolve the most specific element under a point.
///
/// UI hierarchies nest large containers around small controls, so of all the
/// rectangles containing the point the smallest-area one is the element a
/// user would consider "under the cursor". Equal areas tie-break on the
/// lower entry id, i.e. earlier in document order, keeping the result
/// independent of index iteration order.
pub fn resolve(index: &SpatialIndex, x: f64, y: f64) -> Option<NodeId> {
    index
        .query_point(x, y)
        .into_iter()
        .min_by(|left, right| {
            left.area()
                .total_cmp(&right.area())
                .then_with(|| left.id().cmp(&right.id()))
        })
        .map(Entry::node)
}
