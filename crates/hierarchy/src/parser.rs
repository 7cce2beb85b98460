//! Tolerant snapshot-document parsing.
//!
//! Device drivers occasionally hand back truncated or otherwise mangled page
//! sources, so the reader is configured to keep going wherever possible:
//! mismatched and unmatched end tags are accepted, attribute checks are off,
//! and a hard reader error drops the unparsed remainder instead of failing
//! the snapshot. The only fatal case is a document with no recoverable
//! element at all.

use crate::bounds;
use crate::node::{Element, HierarchyTree};
use anyhow::{Error, anyhow};
use indextree::{Arena, NodeId};
use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Parse a raw snapshot document into a [`HierarchyTree`].
///
/// Fragments that cannot be parsed are dropped, not surfaced: a reader error
/// ends the document early with whatever tree has been built so far, and
/// elements following the root element's close are ignored. Errors only when
/// not a single element can be recovered.
pub fn parse(source: &str) -> Result<HierarchyTree, Error> {
    let mut reader = Reader::from_str(source);
    // End-tag bookkeeping off: mismatched and unmatched closers flow through
    // as plain events and the stack below absorbs them.
    reader.check_end_names(false);

    let mut arena: Arena<Element> = Arena::new();
    let mut root: Option<NodeId> = None;
    let mut stack: Vec<NodeId> = Vec::new();
    // Depth of a trailing fragment being skipped after the root closed.
    let mut skip_depth = 0_usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if skip_depth > 0 {
                    skip_depth += 1;
                    continue;
                }
                if stack.is_empty() && root.is_some() {
                    warn!(
                        "dropping trailing <{}> after the root element closed",
                        String::from_utf8_lossy(start.name().as_ref())
                    );
                    skip_depth = 1;
                    continue;
                }
                let id = open_element(&mut arena, &start, stack.last().copied());
                if root.is_none() {
                    root = Some(id);
                }
                stack.push(id);
            }
            Ok(Event::Empty(start)) => {
                if skip_depth > 0 {
                    continue;
                }
                if stack.is_empty() && root.is_some() {
                    warn!(
                        "dropping trailing <{}/> after the root element closed",
                        String::from_utf8_lossy(start.name().as_ref())
                    );
                    continue;
                }
                let id = open_element(&mut arena, &start, stack.last().copied());
                if root.is_none() {
                    root = Some(id);
                }
            }
            Ok(Event::End(_)) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                    continue;
                }
                if let Some(id) = stack.pop() {
                    finish_element(&mut arena, id);
                }
            }
            Ok(Event::Text(text)) => {
                if skip_depth > 0 {
                    continue;
                }
                if let Some(&id) = stack.last() {
                    let chunk = text
                        .unescape()
                        .map(std::borrow::Cow::into_owned)
                        .unwrap_or_else(|_| String::from_utf8_lossy(&text).into_owned());
                    if let Some(node) = arena.get_mut(id) {
                        node.get_mut().append_text(&chunk);
                    }
                }
            }
            Ok(Event::Eof) => break,
            // Declarations, comments, processing instructions, doctypes and
            // CDATA carry nothing the hierarchy model keeps.
            Ok(_) => {}
            Err(err) => {
                warn!("snapshot document truncated at byte {}: {err}", reader.buffer_position());
                break;
            }
        }
    }

    // A truncated document leaves elements open; their subtrees are already
    // linked, so just settle their text.
    for id in stack {
        finish_element(&mut arena, id);
    }

    let root = root.ok_or_else(|| anyhow!("no elements recovered from hierarchy document"))?;
    let tree = HierarchyTree::new(arena, root);
    debug!("parsed snapshot with {} nodes", tree.node_count());
    Ok(tree)
}

/// Create an element from a start tag, resolve its bounds, and attach it
/// under `parent`.
fn open_element(arena: &mut Arena<Element>, start: &BytesStart<'_>, parent: Option<NodeId>) -> NodeId {
    let tag = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = Element::new(tag);
    for attr in start.attributes().with_checks(false).flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map(std::borrow::Cow::into_owned)
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        element.push_attr(key, value);
    }
    element.bounds = bounds::resolve(&element);
    let id = arena.new_node(element);
    if let Some(parent) = parent {
        parent.append(id, arena);
    }
    id
}

fn finish_element(arena: &mut Arena<Element>, id: NodeId) {
    if let Some(node) = arena.get_mut(id) {
        node.get_mut().finish_text();
    }
}
