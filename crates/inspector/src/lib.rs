//! Snapshot façade over the hierarchy, spatial and locator crates.
//!
//! A [`Snapshot`] is one immutable capture of a device's UI: the parsed
//! element tree, the logical viewport it was captured at, and a spatial
//! index over element bounds. The GUI and device driver sit outside this
//! crate; they hand in a page source and a viewport, and get back hit
//! results, locator sets, and panel-ready element data.

mod adapter;
mod overlay;
mod snapshot;

pub use adapter::TreeAdapter;
pub use snapshot::{Snapshot, Viewport};

pub use hierarchy::{Bounds, Element, HierarchyTree, NodeId};
pub use locators::{LocatorKind, LocatorSet, Platform};
pub use spatial::{Entry, SpatialIndex};
