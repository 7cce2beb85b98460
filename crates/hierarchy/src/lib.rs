//! UI hierarchy snapshot model and parser.
//!
//! A snapshot document (the XML page source a device driver hands back) is
//! parsed into an arena-backed element tree. Each element keeps its tag, its
//! attributes in document order, its trimmed text content, and — when the
//! source encodes one — a resolved bounding box in logical pixels. The tree
//! is immutable after parsing; a refresh replaces it wholesale.

mod bounds;
mod node;
mod parser;

pub use bounds::Bounds;
pub use node::{Element, HierarchyTree};
pub use parser::parse;

// Node handles are arena indices; upward links are lookups, not owned edges.
pub use indextree::NodeId;
