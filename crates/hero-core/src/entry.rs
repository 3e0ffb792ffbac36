//! Transition tags and the element record handed out by registry queries.

use crate::id::{NativeViewId, ViewId};

/// Logical name plus optional group pairing an element across two pages.
///
/// Two elements on different pages participate in the same shared-element
/// transition when their names match. The group disambiguates pages that
/// host multiple alternate transition sets at once (dynamic transitions);
/// `group: None` means "ungrouped".
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionTag {
    /// Transition name matched across the departing and arriving page.
    pub name: String,
    /// Optional grouping key; `None` selects the ungrouped set.
    pub group: Option<String>,
}

impl TransitionTag {
    /// An ungrouped tag.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: None,
        }
    }

    /// A tag belonging to a named group.
    #[must_use]
    pub fn grouped(name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            group: Some(group.into()),
        }
    }

    /// Exact group match. `None` matches only ungrouped tags — it is not a
    /// wildcard.
    #[must_use]
    pub fn matches_group(&self, group: Option<&str>) -> bool {
        self.group.as_deref() == group
    }
}

/// One registered element on a page.
///
/// Queries return owned clones of these; the registry keeps sole ownership
/// of its stored records, so a snapshot never aliases registry state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementEntry {
    /// Framework-level element identity.
    pub view: ViewId,
    /// Resolved platform view identity; never zero.
    pub native: NativeViewId,
    /// Current name/group pairing for this element.
    pub tag: TransitionTag,
}

impl ElementEntry {
    /// Create an entry from already-resolved parts.
    #[must_use]
    pub fn new(view: ViewId, native: NativeViewId, tag: TransitionTag) -> Self {
        Self { view, native, tag }
    }
}
