//! Anchored ancestor-walk XPath synthesis.

use crate::ElementAdapter;

/// Build an XPath by walking `parent` links upward from the target.
///
/// At each visited node the anchor attributes are tried in order; the first
/// non-blank one turns that node into the path's leftmost segment
/// (`tag[@attr='value']`) and stops the walk. Nodes without an anchor
/// contribute their bare tag and the walk continues, up to the root if no
/// anchor exists anywhere on the chain. The result is the shortest absolute
/// path still pinned to a uniquely-identifying attribute when one exists.
///
/// The predicate embeds the attribute value as-is; only the blank check
/// trims.
pub(crate) fn ancestor_walk<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    anchors: [&str; 2],
) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut current = Some(element);
    while let Some(node) = current {
        let tag = adapter.tag_name(node);
        if let Some(anchored) = anchor_segment(adapter, node, tag, anchors) {
            segments.push(anchored);
            break;
        }
        segments.push(tag.to_owned());
        current = adapter.parent(node);
    }
    segments.reverse();
    format!("//{}", segments.join("/"))
}

fn anchor_segment<A: ElementAdapter>(
    adapter: &A,
    node: A::Handle,
    tag: &str,
    anchors: [&str; 2],
) -> Option<String> {
    for key in anchors {
        if let Some(raw) = adapter.attr(node, key)
            && !raw.trim().is_empty()
        {
            return Some(format!("{tag}[@{key}='{raw}']"));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureTree;

    const IOS_ANCHORS: [&str; 2] = ["name", "label"];
    const ANDROID_ANCHORS: [&str; 2] = ["resource-id", "text"];

    #[test]
    fn anchor_on_the_target_short_circuits_the_whole_chain() {
        let mut tree = FixtureTree::default();
        let root = tree.push("XCUIElementTypeApplication", &[], None);
        let window = tree.push("XCUIElementTypeWindow", &[], Some(root));
        let button = tree.push("XCUIElementTypeButton", &[("name", "submit")], Some(window));

        assert_eq!(
            ancestor_walk(&tree, button, IOS_ANCHORS),
            "//XCUIElementTypeButton[@name='submit']"
        );
    }

    #[test]
    fn anchorless_chain_extends_to_the_root() {
        let mut tree = FixtureTree::default();
        let root = tree.push("XCUIElementTypeApplication", &[], None);
        let window = tree.push("XCUIElementTypeWindow", &[], Some(root));
        let button = tree.push("XCUIElementTypeButton", &[], Some(window));

        assert_eq!(
            ancestor_walk(&tree, button, IOS_ANCHORS),
            "//XCUIElementTypeApplication/XCUIElementTypeWindow/XCUIElementTypeButton"
        );
    }

    #[test]
    fn anchored_ancestor_contributes_exactly_one_segment() {
        // The anchor two levels up becomes the leftmost segment; everything
        // above it is dropped and the anchor's tag appears once.
        let mut tree = FixtureTree::default();
        let root = tree.push("XCUIElementTypeApplication", &[], None);
        let window = tree.push("XCUIElementTypeWindow", &[], Some(root));
        let form = tree.push("XCUIElementTypeOther", &[("name", "login-form")], Some(window));
        let row = tree.push("XCUIElementTypeOther", &[], Some(form));
        let field = tree.push("XCUIElementTypeTextField", &[], Some(row));

        assert_eq!(
            ancestor_walk(&tree, field, IOS_ANCHORS),
            "//XCUIElementTypeOther[@name='login-form']/XCUIElementTypeOther/XCUIElementTypeTextField"
        );
    }

    #[test]
    fn second_anchor_attribute_applies_when_the_first_is_blank() {
        let mut tree = FixtureTree::default();
        let root = tree.push("XCUIElementTypeApplication", &[], None);
        let button = tree.push(
            "XCUIElementTypeButton",
            &[("name", "  "), ("label", "Pay now")],
            Some(root),
        );

        assert_eq!(
            ancestor_walk(&tree, button, IOS_ANCHORS),
            "//XCUIElementTypeButton[@label='Pay now']"
        );
    }

    #[test]
    fn android_anchors_use_resource_id_then_text() {
        let mut tree = FixtureTree::default();
        let root = tree.push("hierarchy", &[], None);
        let frame = tree.push(
            "android.widget.FrameLayout",
            &[("resource-id", "com.example:id/content")],
            Some(root),
        );
        let label = tree.push("android.widget.TextView", &[("text", "Total")], Some(frame));
        let plain = tree.push("android.view.View", &[], Some(label));

        assert_eq!(
            ancestor_walk(&tree, plain, ANDROID_ANCHORS),
            "//android.widget.TextView[@text='Total']/android.view.View"
        );
        assert_eq!(
            ancestor_walk(&tree, frame, ANDROID_ANCHORS),
            "//android.widget.FrameLayout[@resource-id='com.example:id/content']"
        );
    }

    #[test]
    fn predicate_embeds_the_raw_attribute_value() {
        // The blank check trims, the emitted predicate does not.
        let mut tree = FixtureTree::default();
        let button = tree.push("XCUIElementTypeButton", &[("name", " submit ")], None);
        assert_eq!(
            ancestor_walk(&tree, button, IOS_ANCHORS),
            "//XCUIElementTypeButton[@name=' submit ']"
        );
    }
}
