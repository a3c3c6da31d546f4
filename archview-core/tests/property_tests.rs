//! Property tests for engine invariants.
//!
//! Uses proptest to verify:
//! 1. Independence: toggling one panel never changes another
//! 2. Double toggle: toggling twice restores the previous state
//! 3. Global exclusivity: exactly one view is active after any selection sequence
//! 4. Highlight derivation: only the active view's category shows a member label
//! 5. Disclosure survives navigation: selecting views never touches the registry

use archview_core::{Catalog, PanelId, ViewId, ViewerState};
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn panel_ids() -> Vec<PanelId> {
    catalog().panels.keys().cloned().collect()
}

fn view_ids() -> Vec<ViewId> {
    catalog().view_ids().cloned().collect()
}

fn arb_panel() -> impl Strategy<Value = PanelId> {
    prop::sample::select(panel_ids())
}

fn arb_view() -> impl Strategy<Value = ViewId> {
    prop::sample::select(view_ids())
}

fn fresh() -> ViewerState {
    ViewerState::new(catalog()).unwrap()
}

// ── 1 & 2. Disclosure ────────────────────────────────────────────────

proptest! {
    /// For p != q, toggle(p) leaves is_open(q) unchanged.
    #[test]
    fn toggle_is_independent(
        history in prop::collection::vec(arb_panel(), 0..30),
        p in arb_panel(),
        q in arb_panel(),
    ) {
        prop_assume!(p != q);
        let mut state = fresh();
        for id in &history {
            state.toggle_panel(id);
        }
        let before = state.is_panel_open(q.as_str());
        state.toggle_panel(&p);
        prop_assert_eq!(state.is_panel_open(q.as_str()), before);
    }

    /// toggle(p); toggle(p) restores is_open(p).
    #[test]
    fn double_toggle_restores(
        history in prop::collection::vec(arb_panel(), 0..30),
        p in arb_panel(),
    ) {
        let mut state = fresh();
        for id in &history {
            state.toggle_panel(id);
        }
        let before = state.is_panel_open(p.as_str());
        state.toggle_panel(&p);
        prop_assert_ne!(state.is_panel_open(p.as_str()), before);
        state.toggle_panel(&p);
        prop_assert_eq!(state.is_panel_open(p.as_str()), before);
    }
}

// ── 3 & 4. Navigation ────────────────────────────────────────────────

proptest! {
    /// After any sequence of selections exactly one view is active: the last one.
    #[test]
    fn exactly_one_active_view(selections in prop::collection::vec(arb_view(), 0..20)) {
        let mut state = fresh();
        for view in &selections {
            state.select_view(view, &mut ());
        }
        let active: Vec<ViewId> = view_ids()
            .into_iter()
            .filter(|v| state.is_active(v.as_str()))
            .collect();
        prop_assert_eq!(active.len(), 1);
        let expected = selections.last().cloned().unwrap_or_else(|| ViewId::new("guide"));
        prop_assert_eq!(&active[0], &expected);
    }

    /// The active view's category displays that view's label; all others are neutral.
    #[test]
    fn category_label_is_derived(view in arb_view()) {
        let mut state = fresh();
        state.select_view(&view, &mut ());
        let catalog = state.catalog().clone();
        let owner = catalog.category_of(view.as_str()).unwrap();
        for (i, category) in catalog.categories.iter().enumerate() {
            let shown = state.category_display_label(i).unwrap();
            if i == owner {
                let entry = catalog.view_entry(view.as_str()).unwrap();
                prop_assert_eq!(shown, entry.label.as_str());
                prop_assert!(state.is_category_highlighted(i));
            } else {
                prop_assert_eq!(shown, category.label.as_str());
                prop_assert!(!state.is_category_highlighted(i));
            }
        }
    }
}

// ── 5. Cross-cutting ─────────────────────────────────────────────────

proptest! {
    /// Selecting views never alters the disclosure registry.
    #[test]
    fn navigation_preserves_disclosure(
        toggles in prop::collection::vec(arb_panel(), 0..20),
        selections in prop::collection::vec(arb_view(), 1..10),
    ) {
        let mut state = fresh();
        for id in &toggles {
            state.toggle_panel(id);
        }
        let before: Vec<PanelId> = state.registry().open_ids().into_iter().cloned().collect();
        for view in &selections {
            state.select_view(view, &mut ());
        }
        let after: Vec<PanelId> = state.registry().open_ids().into_iter().cloned().collect();
        prop_assert_eq!(before, after);
    }
}
