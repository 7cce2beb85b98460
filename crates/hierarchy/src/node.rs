//! Element data and the arena-backed snapshot tree.

use crate::bounds::Bounds;
use indextree::{Arena, NodeId};
use smallvec::SmallVec;

/// One UI element from a snapshot document.
///
/// Attributes keep document order; the first occurrence of a key wins when a
/// malformed source repeats one. `bounds` is resolved once at parse time and
/// never changes afterwards.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    attributes: SmallVec<(String, String), 8>,
    pub text: Option<String>,
    pub bounds: Option<Bounds>,
}

impl Element {
    pub(crate) fn new(tag: String) -> Self {
        Self {
            tag,
            attributes: SmallVec::new(),
            text: None,
            bounds: None,
        }
    }

    /// Attribute value by key, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub(crate) fn push_attr(&mut self, name: String, value: String) {
        if self.attr(&name).is_none() {
            self.attributes.push((name, value));
        }
    }

    /// Append a raw character-data chunk; trimming happens in
    /// [`finish_text`](Self::finish_text) once the element closes.
    pub(crate) fn append_text(&mut self, chunk: &str) {
        match &mut self.text {
            Some(buffer) => buffer.push_str(chunk),
            None => self.text = Some(chunk.to_owned()),
        }
    }

    pub(crate) fn finish_text(&mut self) {
        if let Some(buffer) = self.text.take() {
            let trimmed = buffer.trim();
            if !trimmed.is_empty() {
                self.text = Some(trimmed.to_owned());
            }
        }
    }
}

/// An immutable-after-parse snapshot tree.
///
/// The arena owns every element top-down from the root; parent links are
/// arena lookups rather than owned back-edges, so walking upward never
/// contends with tree ownership. A refresh builds a whole new tree.
#[derive(Debug)]
pub struct HierarchyTree {
    arena: Arena<Element>,
    root: NodeId,
}

impl HierarchyTree {
    pub(crate) fn new(arena: Arena<Element>, root: NodeId) -> Self {
        Self { arena, root }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Element data for a node, `None` for a handle from another tree.
    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.arena.get(id).map(indextree::Node::get)
    }

    /// Parent handle, `None` at the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(indextree::Node::parent)
    }

    /// Child handles in document order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Every node handle, pre-order from the root (root included).
    pub fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root.descendants(&self.arena)
    }

    /// Handles from `id` up to the root, `id` included.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.ancestors(&self.arena)
    }

    /// Total node count.
    pub fn node_count(&self) -> usize {
        self.arena.count()
    }
}
