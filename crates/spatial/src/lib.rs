//! Spatial index over snapshot element bounds, plus point-hit resolution.
//!
//! Built once per snapshot and discarded on refresh; there is no incremental
//! update path. Queries are boundary-inclusive, and hit resolution picks the
//! smallest-area element under the point, which is how a nested UI tree maps
//! a cursor position to its most specific control without any z-order data.

mod hit;
mod index;

pub use hit::resolve;
pub use index::{Entry, SpatialIndex};
