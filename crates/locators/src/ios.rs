//! iOS (XCUITest) locator derivation.

use crate::xpath;
use crate::{ElementAdapter, LocatorKind, LocatorSet, non_blank};

/// XPath anchor attributes, in priority order.
const ANCHORS: [&str; 2] = ["name", "label"];

pub(crate) fn synthesize<A: ElementAdapter>(adapter: &A, element: A::Handle) -> LocatorSet {
    let mut set = LocatorSet::default();
    set.push(LocatorKind::AccessibilityId, accessibility_id(adapter, element));
    set.push(LocatorKind::ClassChain, Some(class_chain(adapter, element)));
    set.push(
        LocatorKind::PredicateString,
        predicate_string(adapter, element),
    );
    set.push(
        LocatorKind::XPath,
        Some(xpath::ancestor_walk(adapter, element, ANCHORS)),
    );
    set
}

/// `name`, falling back to `label`.
fn accessibility_id<A: ElementAdapter>(adapter: &A, element: A::Handle) -> Option<String> {
    non_blank(adapter.attr(element, "name"))
        .or_else(|| non_blank(adapter.attr(element, "label")))
        .map(str::to_owned)
}

/// Class chain: `**/Tag[`key == 'value'`]` for `name` then `label`, bare
/// `**/Tag` when neither identifies the element.
fn class_chain<A: ElementAdapter>(adapter: &A, element: A::Handle) -> String {
    let tag = adapter.tag_name(element);
    if let Some(name) = non_blank(adapter.attr(element, "name")) {
        format!("**/{tag}[`name == '{name}'`]")
    } else if let Some(label) = non_blank(adapter.attr(element, "label")) {
        format!("**/{tag}[`label == '{label}'`]")
    } else {
        format!("**/{tag}")
    }
}

/// First non-blank of `name`, `label`, `value` as `key == 'value'`.
fn predicate_string<A: ElementAdapter>(adapter: &A, element: A::Handle) -> Option<String> {
    ["name", "label", "value"].into_iter().find_map(|key| {
        non_blank(adapter.attr(element, key)).map(|value| format!("{key} == '{value}'"))
    })
}
