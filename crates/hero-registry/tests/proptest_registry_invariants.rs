#![forbid(unsafe_code)]

//! Property-based invariant tests for the transition registry.
//!
//! These tests verify structural invariants of `TransitionRegistry` under
//! arbitrary operation sequences:
//!
//! 1. No stored native id is ever zero
//! 2. Logical view ids are unique within a page
//! 3. `query_all` equals the union of `query` over `groups(page)`
//! 4. The id returned by `upsert` is the id a query reports
//! 5. No panics on arbitrary operation sequences
//! 6. Determinism: same operations yield same state
//! 7. Sentinel allocation on a fresh page counts `1, 2, 3, ..`

use hero_registry::{NativeViewId, PageId, TransitionRegistry, TransitionTag, ViewId};
use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

/// Operations that can be applied to a registry.
#[derive(Debug, Clone)]
enum Op {
    Upsert {
        page: u64,
        view: u64,
        name: String,
        group: Option<String>,
        native: Option<u64>,
    },
    RemoveView { page: u64, view: u64 },
    RemoveNative { page: u64, native: u64 },
    RemovePage { page: u64 },
    Query { page: u64, group: Option<String> },
    QueryAll { page: u64 },
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("hero".to_owned()), Just("cover".to_owned()), Just("title".to_owned())]
}

fn group_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("list".to_owned())),
        Just(Some("detail".to_owned())),
    ]
}

/// Supplied native ids, weighted toward small values but covering the zero
/// sentinel and the saturation boundary.
fn native_strategy() -> impl Strategy<Value = Option<u64>> {
    proptest::option::of(prop_oneof![
        6 => 0u64..32,
        1 => Just(u64::MAX - 1),
        1 => Just(u64::MAX),
    ])
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u64..4, 0u64..16, name_strategy(), group_strategy(), native_strategy())
            .prop_map(|(page, view, name, group, native)| Op::Upsert {
                page,
                view,
                name,
                group,
                native,
            }),
        (0u64..4, 0u64..16).prop_map(|(page, view)| Op::RemoveView { page, view }),
        (0u64..4, 1u64..32).prop_map(|(page, native)| Op::RemoveNative { page, native }),
        (0u64..4).prop_map(|page| Op::RemovePage { page }),
        (0u64..4, group_strategy()).prop_map(|(page, group)| Op::Query { page, group }),
        (0u64..4).prop_map(|page| Op::QueryAll { page }),
    ]
}

/// Apply a sequence of operations to a registry.
fn apply_ops(reg: &mut TransitionRegistry, ops: &[Op]) {
    for op in ops {
        match op {
            Op::Upsert {
                page,
                view,
                name,
                group,
                native,
            } => {
                let tag = match group {
                    Some(g) => TransitionTag::grouped(name.clone(), g.clone()),
                    None => TransitionTag::named(name.clone()),
                };
                reg.upsert(PageId(*page), ViewId(*view), tag, native.map(NativeViewId));
            }
            Op::RemoveView { page, view } => {
                reg.remove_view(PageId(*page), ViewId(*view));
            }
            Op::RemoveNative { page, native } => {
                reg.remove_native(PageId(*page), NativeViewId(*native));
            }
            Op::RemovePage { page } => {
                reg.remove_page(PageId(*page));
            }
            Op::Query { page, group } => {
                reg.query(PageId(*page), group.as_deref());
            }
            Op::QueryAll { page } => {
                reg.query_all(PageId(*page));
            }
        }
    }
}

/// Full state dump for determinism comparison.
fn dump(reg: &TransitionRegistry) -> Vec<(u64, Vec<(u64, u64, String, Option<String>)>)> {
    let mut pages: Vec<_> = reg.pages().collect();
    pages.sort_by_key(|p| p.0);
    pages
        .into_iter()
        .map(|page| {
            let entries = reg
                .query_all(page)
                .into_iter()
                .map(|e| (e.view.0, e.native.0, e.tag.name, e.tag.group))
                .collect();
            (page.0, entries)
        })
        .collect()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn no_zero_native_id_is_stored(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut reg = TransitionRegistry::new();
        apply_ops(&mut reg, &ops);
        for page in reg.pages().collect::<Vec<_>>() {
            for entry in reg.query_all(page) {
                prop_assert!(entry.native.0 != 0);
            }
        }
    }

    #[test]
    fn view_ids_unique_per_page(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut reg = TransitionRegistry::new();
        apply_ops(&mut reg, &ops);
        for page in reg.pages().collect::<Vec<_>>() {
            let entries = reg.query_all(page);
            let mut views: Vec<_> = entries.iter().map(|e| e.view).collect();
            views.sort_by_key(|v| v.0);
            views.dedup();
            prop_assert_eq!(views.len(), entries.len());
        }
    }

    #[test]
    fn query_all_is_union_of_groups(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut reg = TransitionRegistry::new();
        apply_ops(&mut reg, &ops);
        for page in reg.pages().collect::<Vec<_>>() {
            let mut union = Vec::new();
            for group in reg.groups(page) {
                union.extend(reg.query(page, group.as_deref()));
            }
            let mut all = reg.query_all(page);
            union.sort_by_key(|e| e.view.0);
            all.sort_by_key(|e| e.view.0);
            prop_assert_eq!(union, all);
        }
    }

    #[test]
    fn upsert_result_matches_query(
        ops in proptest::collection::vec(op_strategy(), 0..64),
        view in 0u64..16,
        native in native_strategy(),
    ) {
        let mut reg = TransitionRegistry::new();
        apply_ops(&mut reg, &ops);

        let page = PageId(0);
        let resolved = reg.upsert(
            page,
            ViewId(view),
            TransitionTag::named("probe"),
            native.map(NativeViewId),
        );
        let stored = reg
            .query_all(page)
            .into_iter()
            .find(|e| e.view == ViewId(view))
            .map(|e| e.native);
        prop_assert_eq!(stored, Some(resolved));
    }

    #[test]
    fn operations_are_deterministic(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut a = TransitionRegistry::new();
        let mut b = TransitionRegistry::new();
        apply_ops(&mut a, &ops);
        apply_ops(&mut b, &ops);
        prop_assert_eq!(dump(&a), dump(&b));
    }

    #[test]
    fn fresh_page_allocation_counts_up(count in 1u64..24) {
        let mut reg = TransitionRegistry::new();
        let page = PageId(0);
        for n in 1..=count {
            let id = reg.upsert(page, ViewId(n), TransitionTag::named("hero"), None);
            prop_assert_eq!(id, NativeViewId(n));
        }
    }
}
