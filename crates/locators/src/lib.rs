//! Locator synthesis — selector strings an automation driver can replay.
//!
//! For a chosen element this module derives the find-by strategies the
//! driver understands: accessibility id, class chain and predicate string on
//! iOS; resource-id and UiSelector expressions on Android; an anchored XPath
//! on both. Each kind is computed independently, and a kind that cannot be
//! derived is represented as an absent value rather than an error —
//! synthesis is pure and total over any element.
//!
//! Tree access goes through [`ElementAdapter`], so this crate carries no
//! dependency on any particular tree representation.

mod android;
mod ios;
mod xpath;

/// An adapter that abstracts tree access for locator synthesis.
/// Implement this for your element tree.
pub trait ElementAdapter {
    type Handle: Copy + Eq;

    /// Parent element if any; `None` at the root terminates ancestor walks.
    fn parent(&self, element: Self::Handle) -> Option<Self::Handle>;

    /// The element's type/tag name as it appears in the source document.
    fn tag_name(&self, element: Self::Handle) -> &str;

    /// Attribute value if the element carries it.
    fn attr(&self, element: Self::Handle, name: &str) -> Option<&str>;
}

/// Target automation platform; selects derivation rules and anchor
/// attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    Ios,
    Android,
}

/// A find-by strategy, named as the driver protocol spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocatorKind {
    AccessibilityId,
    ClassChain,
    PredicateString,
    ResourceId,
    UiAutomator,
    XPath,
}

impl LocatorKind {
    /// The driver-facing strategy name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AccessibilityId => "accessibility id",
            Self::ClassChain => "-ios class chain",
            Self::PredicateString => "-ios predicate string",
            Self::ResourceId => "resource-id",
            Self::UiAutomator => "-android uiautomator",
            Self::XPath => "xpath",
        }
    }
}

/// The locators derived for one element on one platform, in the fixed order
/// an inspector panel lists them. Absent values mean "not derivable for this
/// element", never a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocatorSet {
    entries: Vec<(LocatorKind, Option<String>)>,
}

impl LocatorSet {
    /// Value for a kind; `None` both for absent values and kinds the
    /// platform does not produce.
    pub fn get(&self, kind: LocatorKind) -> Option<&str> {
        self.entries
            .iter()
            .find(|(entry_kind, _)| *entry_kind == kind)
            .and_then(|(_, value)| value.as_deref())
    }

    /// All kinds in panel order, absent values included.
    pub fn iter(&self) -> impl Iterator<Item = (LocatorKind, Option<&str>)> {
        self.entries
            .iter()
            .map(|(kind, value)| (*kind, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, kind: LocatorKind, value: Option<String>) {
        self.entries.push((kind, value));
    }
}

/// Derive the full locator set for an element on a platform.
pub fn synthesize<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    platform: Platform,
) -> LocatorSet {
    match platform {
        Platform::Ios => ios::synthesize(adapter, element),
        Platform::Android => android::synthesize(adapter, element),
    }
}

/// Trimmed attribute value, `None` when missing or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}
