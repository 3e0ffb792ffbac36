#![forbid(unsafe_code)]

//! Transition-mapping registry for shared-element navigation transitions.
//!
//! # Role in hero-transitions
//! `hero-registry` tracks which transition-tagged elements each page
//! currently owns, so the animation engine can pair a native view on the
//! departing page with its counterpart on the arriving page at navigation
//! time.
//!
//! # Primary responsibilities
//! - **TransitionRegistry**: upsert as elements attach, query immediately
//!   before a transition, remove on teardown.
//! - **Native id allocation**: invent stable page-local identifiers on
//!   platforms that cannot supply their own.
//! - **Diagnostics**: surface identifier mismatches and retags through an
//!   injected [`RegistryObserver`] without ever failing a caller.
//!
//! # How it fits in the system
//! UI-composition callbacks produce mutations, the animation engine
//! consumes query snapshots, and platform view adapters drive removal.
//! None of those collaborators live here; this crate is the table between
//! them.

pub mod registry;

pub use hero_core::{
    ElementEntry, NativeViewId, PageId, RegistryEvent, RegistryObserver, TransitionTag, ViewId,
};
pub use registry::TransitionRegistry;
