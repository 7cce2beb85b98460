//! Locator-adapter implementation for the snapshot tree.

use hierarchy::{HierarchyTree, NodeId};
use locators::ElementAdapter;

/// Borrows a [`HierarchyTree`] for locator synthesis.
pub struct TreeAdapter<'tree> {
    tree: &'tree HierarchyTree,
}

impl<'tree> TreeAdapter<'tree> {
    pub fn new(tree: &'tree HierarchyTree) -> Self {
        Self { tree }
    }
}

impl ElementAdapter for TreeAdapter<'_> {
    type Handle = NodeId;

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.tree.parent(element)
    }

    fn tag_name(&self, element: NodeId) -> &str {
        // A foreign handle has no element; an empty tag keeps synthesis
        // total rather than panicking on caller error.
        self.tree
            .get(element)
            .map_or("", |node| node.tag.as_str())
    }

    fn attr(&self, element: NodeId, name: &str) -> Option<&str> {
        self.tree.get(element)?.attr(name)
    }
}
