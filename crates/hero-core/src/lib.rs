#![forbid(unsafe_code)]

//! Core vocabulary for hero-transitions.
//!
//! # Role in hero-transitions
//! `hero-core` is the shared-types layer. It owns the identifier newtypes,
//! the transition tag, the element entry handed out by registry queries, and
//! the observer channel for registry diagnostics.
//!
//! # Primary responsibilities
//! - **Identifiers**: [`PageId`], [`ViewId`], [`NativeViewId`] — opaque
//!   newtypes so page, logical-view, and native-view identities cannot be
//!   mixed up at call sites.
//! - **TransitionTag**: the name/group pair that pairs elements across the
//!   departing and arriving pages of a navigation.
//! - **ElementEntry**: the snapshot record a query returns.
//! - **RegistryObserver**: injectable sink for non-fatal registry anomalies.
//!
//! # How it fits in the system
//! The registry (`hero-registry`) stores and mutates these types; platform
//! view adapters produce them as elements attach; the animation engine
//! consumes [`ElementEntry`] snapshots. Nothing here allocates collections
//! or carries policy.

pub mod entry;
pub mod id;
pub mod observer;

pub use entry::{ElementEntry, TransitionTag};
pub use id::{NativeViewId, PageId, ViewId};
pub use observer::{RegistryEvent, RegistryObserver};
