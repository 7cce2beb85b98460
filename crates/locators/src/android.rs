//! Android (UiAutomator2) locator derivation.

use crate::xpath;
use crate::{ElementAdapter, LocatorKind, LocatorSet, non_blank};

/// XPath anchor attributes, in priority order.
const ANCHORS: [&str; 2] = ["resource-id", "text"];

/// Every UiSelector expression starts from a fresh builder.
const SELECTOR_BUILDER: &str = "new UiSelector()";

pub(crate) fn synthesize<A: ElementAdapter>(adapter: &A, element: A::Handle) -> LocatorSet {
    let mut set = LocatorSet::default();
    set.push(LocatorKind::ResourceId, resource_id(adapter, element));
    set.push(LocatorKind::UiAutomator, ui_automator(adapter, element));
    set.push(
        LocatorKind::XPath,
        Some(xpath::ancestor_walk(adapter, element, ANCHORS)),
    );
    set
}

/// `resource-id` verbatim.
fn resource_id<A: ElementAdapter>(adapter: &A, element: A::Handle) -> Option<String> {
    non_blank(adapter.attr(element, "resource-id")).map(str::to_owned)
}

/// UiSelector with one predicate: `resourceId`, then `text`, then
/// `className` off the `class` attribute.
fn ui_automator<A: ElementAdapter>(adapter: &A, element: A::Handle) -> Option<String> {
    if let Some(id) = non_blank(adapter.attr(element, "resource-id")) {
        Some(format!("{SELECTOR_BUILDER}.resourceId(\"{id}\")"))
    } else if let Some(text) = non_blank(adapter.attr(element, "text")) {
        Some(format!("{SELECTOR_BUILDER}.text(\"{text}\")"))
    } else {
        non_blank(adapter.attr(element, "class"))
            .map(|class| format!("{SELECTOR_BUILDER}.className(\"{class}\")"))
    }
}
