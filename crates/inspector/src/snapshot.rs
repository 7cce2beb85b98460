//! The snapshot value and its query surface.

use crate::adapter::TreeAdapter;
use crate::overlay;
use anyhow::Error;
use hierarchy::{HierarchyTree, NodeId};
use locators::{LocatorSet, Platform};
use log::debug;
use spatial::SpatialIndex;

/// Logical viewport size, in the same units as element bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// One immutable capture of a device's UI hierarchy.
///
/// Capturing builds the tree and the index together; a refresh is a new
/// `Snapshot` replacing the old one, so callers must not hold node handles
/// across a rebuild.
pub struct Snapshot {
    tree: HierarchyTree,
    index: SpatialIndex,
    viewport: Viewport,
    platform: Platform,
}

impl Snapshot {
    /// Parse a page source and index it.
    ///
    /// Tolerant of mangled documents (see [`hierarchy::parse`]); fails only
    /// when no element at all can be recovered.
    pub fn capture(source: &str, viewport: Viewport, platform: Platform) -> Result<Self, Error> {
        let tree = hierarchy::parse(source)?;
        let index = SpatialIndex::build(&tree);
        debug!(
            "captured {:?} snapshot: {} nodes, {} indexed, viewport {}x{}",
            platform,
            tree.node_count(),
            index.len(),
            viewport.width,
            viewport.height
        );
        Ok(Self {
            tree,
            index,
            viewport,
            platform,
        })
    }

    /// The most specific element under a point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<NodeId> {
        spatial::resolve(&self.index, x, y)
    }

    /// Locator set for an element on this snapshot's platform.
    pub fn locators(&self, node: NodeId) -> LocatorSet {
        self.locators_for(node, self.platform)
    }

    /// Locator set for an explicit platform. A dual-device recorder uses
    /// this to emit both platforms' locators for one logical step.
    pub fn locators_for(&self, node: NodeId, platform: Platform) -> LocatorSet {
        locators::synthesize(&TreeAdapter::new(&self.tree), node, platform)
    }

    /// Panel rows: every attribute in document order, plus a synthetic
    /// `text` row when the element has trimmed text content.
    pub fn attribute_rows(&self, node: NodeId) -> Vec<(String, String)> {
        let Some(element) = self.tree.get(node) else {
            return Vec::new();
        };
        let mut rows: Vec<(String, String)> = element
            .attributes()
            .map(|(key, value)| (key.to_owned(), value.to_owned()))
            .collect();
        if let Some(text) = &element.text {
            rows.push(("text".to_owned(), text.clone()));
        }
        rows
    }

    /// Whether the element's bounds center lies within the viewport.
    /// Elements without bounds are never on screen.
    pub fn is_on_screen(&self, node: NodeId) -> bool {
        self.center_of(node).is_some_and(|(center_x, center_y)| {
            center_x >= 0.0
                && center_x <= self.viewport.width
                && center_y >= 0.0
                && center_y <= self.viewport.height
        })
    }

    /// Bounds center, the point a driver taps to activate the element.
    pub fn center_of(&self, node: NodeId) -> Option<(f64, f64)> {
        self.tree
            .get(node)
            .and_then(|element| element.bounds)
            .map(|bounds| bounds.center())
    }

    /// Overlay dump of every positioned element, for the GUI's highlight
    /// layer: `[{x, y, w, h, class, name}, ..]` in document order.
    pub fn overlay_json(&self) -> serde_json::Value {
        overlay::dump(&self.tree)
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    #[inline]
    pub fn tree(&self) -> &HierarchyTree {
        &self.tree
    }

    #[inline]
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn platform(&self) -> Platform {
        self.platform
    }
}
