//! Observer channel for non-fatal registry diagnostics.
//!
//! The registry never fails its callers: anomalies are absorbed and
//! surfaced here instead, so hosts can route them to their own telemetry.
//! Implementations must be cheap and must not call back into the registry
//! (events fire from inside mutation paths).

use crate::entry::TransitionTag;
use crate::id::{NativeViewId, PageId, ViewId};

/// A diagnostic event emitted by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RegistryEvent {
    /// A reconciling upsert supplied a native id that disagrees with the
    /// stored one. The registry trusts the fresh value and overwrites;
    /// this event is the only trace of the discrepancy.
    NativeIdMismatch {
        page: PageId,
        view: ViewId,
        stored: NativeViewId,
        supplied: NativeViewId,
    },
    /// An existing element was renamed or regrouped in place. Sibling
    /// entries that shared the previous tag are left registered; adapters
    /// listening for this event are responsible for removing them once
    /// outside the attach/detach window.
    Retagged {
        page: PageId,
        view: ViewId,
        previous: TransitionTag,
        current: TransitionTag,
    },
}

/// Sink for [`RegistryEvent`]s.
///
/// Injected into the registry at construction; `Send` so a multi-threaded
/// host can keep the whole registry behind a mutex.
pub trait RegistryObserver: Send {
    /// Called synchronously from inside the emitting operation.
    fn event(&self, event: &RegistryEvent);
}
