#![forbid(unsafe_code)]

//! Registry mapping pages to their transition-tagged elements.
//!
//! Composition callbacks [`upsert`](TransitionRegistry::upsert) each tagged
//! element as it attaches to a page; the animation engine calls
//! [`query`](TransitionRegistry::query) or
//! [`query_all`](TransitionRegistry::query_all) immediately before a
//! transition; teardown calls [`remove_view`](TransitionRegistry::remove_view),
//! [`remove_native`](TransitionRegistry::remove_native), or
//! [`remove_page`](TransitionRegistry::remove_page).
//!
//! # Invariants
//!
//! 1. Within one page, each [`ViewId`] maps to at most one [`ElementEntry`];
//!    an upsert for an existing view mutates in place, never duplicates.
//! 2. A stored [`NativeViewId`] is never zero: an upsert without a platform
//!    id resolves to the stored value, or to one greater than the page's
//!    current maximum (`1` on an empty page).
//! 3. Queries return owned snapshots; later registry mutation never alters
//!    data already handed out.
//! 4. No operation panics or returns an error for any input: unknown pages
//!    and elements degrade to empty results and `false`.
//! 5. Retagging an element never removes its stale siblings (see
//!    [`upsert`](TransitionRegistry::upsert)); cleanup is the adapters' job.
//!
//! # Example
//!
//! ```
//! use hero_registry::{PageId, TransitionRegistry, TransitionTag, ViewId};
//!
//! let mut reg = TransitionRegistry::new();
//! let page = PageId(1);
//!
//! // Platform cannot supply a native id: the registry allocates one.
//! let native = reg.upsert(page, ViewId(10), TransitionTag::named("avatar"), None);
//! assert_eq!(native.0, 1);
//!
//! let snapshot = reg.query(page, None);
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot[0].tag.name, "avatar");
//! ```

use ahash::AHashMap;
use hero_core::{
    ElementEntry, NativeViewId, PageId, RegistryEvent, RegistryObserver, TransitionTag, ViewId,
};

/// Elements currently registered for one page, in insertion order.
///
/// Insertion order carries no pairing semantics but keeps fallback native-id
/// allocation deterministic. An empty element list is a valid, inert state;
/// the registry does not auto-prune it.
#[derive(Debug, Default)]
struct PageEntry {
    elements: Vec<ElementEntry>,
}

/// In-memory table of transition-tagged elements, keyed by page.
///
/// Explicitly constructed and injected by the host (no process-wide
/// singleton), so each test or application context owns an isolated
/// instance. Designed for a single-threaded UI-event-driven caller; a
/// multi-threaded host should wrap it in a mutex rather than expect
/// internal locking.
pub struct TransitionRegistry {
    pages: AHashMap<PageId, PageEntry>,
    observer: Option<Box<dyn RegistryObserver>>,
}

impl core::fmt::Debug for TransitionRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TransitionRegistry")
            .field("pages", &self.pages)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionRegistry {
    /// Create an empty registry with no observer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pages: AHashMap::new(),
            observer: None,
        }
    }

    /// Create an empty registry that reports diagnostics to `observer`.
    #[must_use]
    pub fn with_observer(observer: impl RegistryObserver + 'static) -> Self {
        Self {
            pages: AHashMap::new(),
            observer: Some(Box::new(observer)),
        }
    }

    /// Replace the diagnostic observer. Events fired before this call are
    /// not replayed.
    pub fn set_observer(&mut self, observer: impl RegistryObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Snapshot of the page's elements whose group equals `group`.
    ///
    /// `None` selects ungrouped elements only — it is not a wildcard; use
    /// [`query_all`](Self::query_all) to ignore grouping. Unknown pages
    /// yield an empty vector.
    #[must_use]
    pub fn query(&self, page: PageId, group: Option<&str>) -> Vec<ElementEntry> {
        match self.pages.get(&page) {
            Some(entry) => entry
                .elements
                .iter()
                .filter(|e| e.tag.matches_group(group))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    /// Snapshot of every element on the page regardless of group.
    #[must_use]
    pub fn query_all(&self, page: PageId) -> Vec<ElementEntry> {
        self.pages
            .get(&page)
            .map(|entry| entry.elements.clone())
            .unwrap_or_default()
    }

    /// Record or reconcile one tagged element, returning its resolved
    /// native id.
    ///
    /// `native: None` means the platform cannot supply an identifier: for a
    /// new element the registry allocates one greater than the page's
    /// current maximum (`1` on an empty page); for an existing element the
    /// stored id is authoritative and is returned unchanged. A supplied
    /// `NativeViewId(0)` is treated as `None` — zero is the wire-level
    /// "unknown" sentinel and is never persisted.
    ///
    /// For an existing element, a supplied id that disagrees with the
    /// stored one wins: the stored id is overwritten and a
    /// [`RegistryEvent::NativeIdMismatch`] is emitted. A changed name — or
    /// a changed, non-`None` group — overwrites both name and group in
    /// place and emits [`RegistryEvent::Retagged`].
    ///
    /// Retagging never removes sibling entries that shared the previous
    /// name/group. Pruning here runs inside the virtualized attach/detach
    /// window, where overlapping composition callbacks have corrupted state
    /// before; adapters remove orphans explicitly once that window closes.
    pub fn upsert(
        &mut self,
        page: PageId,
        view: ViewId,
        tag: TransitionTag,
        native: Option<NativeViewId>,
    ) -> NativeViewId {
        // Some platforms encode "no identifier" as a zero id rather than
        // omitting it; fold that into the absent case before resolution so
        // zero can never reach storage.
        let native = native.filter(|supplied| supplied.0 != 0);
        let page_entry = self.pages.entry(page).or_default();
        let mut events: Vec<RegistryEvent> = Vec::new();

        let resolved = match page_entry.elements.iter().position(|e| e.view == view) {
            None => {
                let resolved = native.unwrap_or_else(|| next_native_id(&page_entry.elements));
                page_entry
                    .elements
                    .push(ElementEntry::new(view, resolved, tag));
                resolved
            }
            Some(index) => {
                let existing = &mut page_entry.elements[index];
                let resolved = match native {
                    None => existing.native,
                    Some(supplied) if supplied == existing.native => supplied,
                    Some(supplied) => {
                        events.push(RegistryEvent::NativeIdMismatch {
                            page,
                            view,
                            stored: existing.native,
                            supplied,
                        });
                        existing.native = supplied;
                        supplied
                    }
                };
                let renamed = existing.tag.name != tag.name;
                let regrouped = existing.tag.group != tag.group && tag.group.is_some();
                if renamed || regrouped {
                    events.push(RegistryEvent::Retagged {
                        page,
                        view,
                        previous: existing.tag.clone(),
                        current: tag.clone(),
                    });
                    existing.tag = tag;
                }
                resolved
            }
        };

        for event in &events {
            self.notify(event);
        }
        resolved
    }

    /// Remove one element by its logical view id.
    ///
    /// Returns `false` (and does nothing) when the page or element is
    /// unknown.
    pub fn remove_view(&mut self, page: PageId, view: ViewId) -> bool {
        let Some(entry) = self.pages.get_mut(&page) else {
            return false;
        };
        match entry.elements.iter().position(|e| e.view == view) {
            Some(index) => {
                entry.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove one element by its resolved native view id.
    ///
    /// Returns `false` (and does nothing) when the page or element is
    /// unknown.
    pub fn remove_native(&mut self, page: PageId, native: NativeViewId) -> bool {
        let Some(entry) = self.pages.get_mut(&page) else {
            return false;
        };
        match entry.elements.iter().position(|e| e.native == native) {
            Some(index) => {
                entry.elements.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop the whole page and every element registered under it.
    ///
    /// Returns `false` when the page was never seen. A later upsert for the
    /// same id behaves as a fresh page (allocation restarts at `1`).
    pub fn remove_page(&mut self, page: PageId) -> bool {
        self.pages.remove(&page).is_some()
    }

    /// Drop every page. Host teardown helper.
    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// Whether the page has ever been registered (even if now empty).
    #[must_use]
    pub fn contains_page(&self, page: PageId) -> bool {
        self.pages.contains_key(&page)
    }

    /// Number of known pages, including empty ones.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over known page ids (unordered).
    pub fn pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.keys().copied()
    }

    /// Distinct groups present on a page, in first-seen order, including
    /// `None` when ungrouped elements exist.
    ///
    /// ```
    /// use hero_registry::{PageId, TransitionRegistry, TransitionTag, ViewId};
    ///
    /// let mut reg = TransitionRegistry::new();
    /// let page = PageId(1);
    /// reg.upsert(page, ViewId(1), TransitionTag::named("a"), None);
    /// reg.upsert(page, ViewId(2), TransitionTag::grouped("a", "cards"), None);
    ///
    /// assert_eq!(reg.groups(page), vec![None, Some("cards".to_owned())]);
    /// ```
    #[must_use]
    pub fn groups(&self, page: PageId) -> Vec<Option<String>> {
        let mut groups = Vec::new();
        if let Some(entry) = self.pages.get(&page) {
            for element in &entry.elements {
                if !groups.contains(&element.tag.group) {
                    groups.push(element.tag.group.clone());
                }
            }
        }
        groups
    }

    fn notify(&self, event: &RegistryEvent) {
        #[cfg(feature = "tracing")]
        log_event(event);
        if let Some(observer) = &self.observer {
            observer.event(event);
        }
    }
}

/// One greater than the page's current maximum, `1` for an empty page.
/// Saturates at `u64::MAX` instead of wrapping to the forbidden zero.
fn next_native_id(elements: &[ElementEntry]) -> NativeViewId {
    NativeViewId(
        elements
            .iter()
            .map(|e| e.native.0)
            .max()
            .unwrap_or(0)
            .saturating_add(1),
    )
}

#[cfg(feature = "tracing")]
fn log_event(event: &RegistryEvent) {
    match event {
        RegistryEvent::NativeIdMismatch {
            page,
            view,
            stored,
            supplied,
        } => {
            tracing::warn!(
                message = "registry.native_id_mismatch",
                page = %page,
                view = %view,
                stored = stored.0,
                supplied = supplied.0
            );
        }
        RegistryEvent::Retagged {
            page,
            view,
            previous,
            current,
        } => {
            tracing::debug!(
                message = "registry.retagged",
                page = %page,
                view = %view,
                previous_name = %previous.name,
                previous_group = ?previous.group,
                current_name = %current.name,
                current_group = ?current.group
            );
        }
    }
}
