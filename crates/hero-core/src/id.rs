//! Identifier newtypes for pages, logical views, and native views.

/// Opaque identifier of a page instance.
///
/// Stable for the page's lifetime; assigned by whoever owns page lifecycle
/// (the navigation layer), never interpreted by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageId(pub u64);

impl core::fmt::Display for PageId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "page:{}", self.0)
    }
}

/// Identifier of a UI-framework-level element.
///
/// Unique within a page at a point in time, but virtualized containers reuse
/// these across attach/detach cycles — callers must treat a repeated
/// `ViewId` as "the same slot", not necessarily "the same content".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewId(pub u64);

impl core::fmt::Display for ViewId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "view:{}", self.0)
    }
}

/// Identifier of a platform-rendered view.
///
/// Either platform-supplied or allocated by the registry for platforms that
/// have no stable native identifiers. A stored `NativeViewId` is never zero;
/// "no identifier yet" is expressed as `Option::<NativeViewId>::None` at the
/// API boundary, not as a magic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NativeViewId(pub u64);

impl core::fmt::Display for NativeViewId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "native:{}", self.0)
    }
}
