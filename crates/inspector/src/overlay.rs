//! Element overlay dump for the GUI's highlight layer.

use hierarchy::HierarchyTree;
use serde::Serialize;
use serde_json::Value;

/// One positioned element, shaped for the overlay renderer.
#[derive(Serialize)]
struct OverlayElement<'tree> {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    class: &'tree str,
    name: &'tree str,
}

/// Every element with resolved bounds, in document order.
///
/// `class` falls back to the tag when the attribute is missing or empty;
/// `name` prefers `resource-id`, then `name`, then a `---` placeholder.
pub(crate) fn dump(tree: &HierarchyTree) -> Value {
    let elements: Vec<OverlayElement<'_>> = tree
        .descendants()
        .filter_map(|id| {
            let element = tree.get(id)?;
            let bounds = element.bounds?;
            Some(OverlayElement {
                x: bounds.x,
                y: bounds.y,
                w: bounds.width,
                h: bounds.height,
                class: non_empty(element.attr("class")).unwrap_or(&element.tag),
                name: non_empty(element.attr("resource-id"))
                    .or_else(|| non_empty(element.attr("name")))
                    .unwrap_or("---"),
            })
        })
        .collect();
    serde_json::to_value(elements).unwrap_or(Value::Null)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.is_empty())
}
