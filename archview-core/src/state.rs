//! Viewer state: the single store shared by every component of the page.
//!
//! Only two operations write the engine's shared cells: `toggle_panel` (the
//! disclosure registry) and `select_view` (the active view). Everything else
//! is a read accessor or manages the per-category dropdown overlays.
//!
//! Faults (`UnknownPanel`, `UnknownView`) are logged and swallowed: the viewer
//! is a read-mostly documentation tool and never shows an error state.

use std::collections::HashSet;

use crate::catalog::{Accent, Catalog, ViewBody};
use crate::disclosure::{DisclosurePanel, DisclosureRegistry};
use crate::error::NavError;
use crate::ids::{PanelId, ViewId};
use crate::navigation::{NavigationController, ViewChange, ViewListener};
use crate::overlay::{
    Dropdown, InteractionClock, InteractionId, PointerDown, PointerOutcome, Region,
};

/// Catalog, disclosure registry, navigation and dropdowns in one owner.
#[derive(Debug, Clone)]
pub struct ViewerState {
    catalog: Catalog,
    registry: DisclosureRegistry,
    nav: NavigationController,
    dropdowns: Vec<Dropdown>,
    clock: InteractionClock,
}

impl ViewerState {
    /// Start on the catalog's default view.
    pub fn new(catalog: Catalog) -> Result<Self, NavError> {
        let nav = NavigationController::from_catalog(&catalog)?;
        let dropdowns = catalog
            .categories
            .iter()
            .map(|c| Dropdown::new(c.views.len()))
            .collect();
        Ok(Self {
            catalog,
            registry: DisclosureRegistry::new(),
            nav,
            dropdowns,
            clock: InteractionClock::new(),
        })
    }

    /// Start on `initial` if it is a known view, else on the catalog default.
    pub fn with_initial_view(catalog: Catalog, initial: Option<&ViewId>) -> Result<Self, NavError> {
        let mut state = Self::new(catalog)?;
        if let Some(view) = initial {
            if let Err(err) = state.nav.select_view(view, &mut ()) {
                log::warn!("ignoring initial view: {err}");
            }
        }
        Ok(state)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn registry(&self) -> &DisclosureRegistry {
        &self.registry
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    /// Stamp the next UI event.
    pub fn next_interaction(&mut self) -> InteractionId {
        self.clock.tick()
    }

    // ── Disclosure ──────────────────────────────────────────────────────

    /// Flip a panel; unknown ids are logged and ignored.
    pub fn toggle_panel(&mut self, id: &PanelId) {
        if let Err(err) = self.try_toggle_panel(id) {
            log::warn!("toggle ignored: {err}");
        }
    }

    pub fn try_toggle_panel(&mut self, id: &PanelId) -> Result<(), NavError> {
        if !self.catalog.contains_panel(id.as_str()) {
            return Err(NavError::UnknownPanel(id.clone()));
        }
        self.registry.toggle(id);
        Ok(())
    }

    pub fn is_panel_open(&self, id: &str) -> bool {
        self.registry.is_open(id)
    }

    /// Close every open panel.
    pub fn collapse_all(&mut self) {
        let open: Vec<PanelId> = self.registry.open_ids().into_iter().cloned().collect();
        for id in &open {
            self.registry.toggle(id);
        }
    }

    /// Open every panel of the active view that is still closed.
    pub fn expand_active_view(&mut self) {
        let closed: Vec<PanelId> = self
            .active_panels()
            .into_iter()
            .filter(|p| !p.open)
            .map(|p| p.id.clone())
            .collect();
        for id in &closed {
            self.registry.toggle(id);
        }
    }

    /// Panels of the active view with their open state, in display order.
    /// A panel referenced twice is listed once, at its first position.
    pub fn active_panels(&self) -> Vec<DisclosurePanel<'_>> {
        let Some(body) = self.active_body() else {
            return Vec::new();
        };
        let mut seen = HashSet::new();
        body.panel_ids()
            .filter(|id| seen.insert(*id))
            .filter_map(|id| {
                let entry = self.catalog.panel(id.as_str())?;
                Some(DisclosurePanel {
                    id,
                    entry,
                    open: self.registry.is_open(id.as_str()),
                })
            })
            .collect()
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Make `view` active; unknown ids are logged and ignored.
    pub fn select_view(&mut self, view: &ViewId, listener: &mut impl ViewListener) {
        if let Err(err) = self.try_select_view(view, listener) {
            log::warn!("selection ignored: {err}");
        }
    }

    pub fn try_select_view(
        &mut self,
        view: &ViewId,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        self.nav.select_view(view, listener)
    }

    pub fn is_active(&self, view: &str) -> bool {
        self.nav.is_active(view)
    }

    pub fn active_view(&self) -> &ViewId {
        self.nav.active()
    }

    pub fn active_body(&self) -> Option<&ViewBody> {
        self.catalog.body(self.nav.active().as_str())
    }

    /// Label of category `index`'s button, derived from the active view.
    pub fn category_display_label(&self, index: usize) -> Option<&str> {
        self.nav.display_label(index)
    }

    /// Accent of category `index`'s button: the active view's when it owns it.
    pub fn category_display_accent(&self, index: usize) -> Option<Accent> {
        self.nav
            .group(index)
            .map(|g| g.display_accent(self.nav.active()))
    }

    pub fn is_category_highlighted(&self, index: usize) -> bool {
        self.nav.active_category() == index
    }

    pub fn next_view_in_category(&mut self, listener: &mut impl ViewListener) {
        self.close_all_dropdowns();
        log_nav(self.nav.select_next_in_category(listener));
    }

    pub fn prev_view_in_category(&mut self, listener: &mut impl ViewListener) {
        self.close_all_dropdowns();
        log_nav(self.nav.select_prev_in_category(listener));
    }

    pub fn next_category(&mut self, listener: &mut impl ViewListener) {
        self.close_all_dropdowns();
        log_nav(self.nav.select_next_category(listener));
    }

    pub fn prev_category(&mut self, listener: &mut impl ViewListener) {
        self.close_all_dropdowns();
        log_nav(self.nav.select_prev_category(listener));
    }

    // ── Dropdowns ───────────────────────────────────────────────────────

    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn dropdown(&self, index: usize) -> Option<&Dropdown> {
        self.dropdowns.get(index)
    }

    /// Index of the open dropdown, if any.
    pub fn expanded_dropdown(&self) -> Option<usize> {
        self.dropdowns.iter().position(Dropdown::is_expanded)
    }

    /// Open dropdown `index`, closing the others.
    pub fn open_dropdown(&mut self, index: usize, by: InteractionId) {
        if index >= self.dropdowns.len() {
            return;
        }
        let cursor = self.initial_cursor(index);
        for (i, dd) in self.dropdowns.iter_mut().enumerate() {
            if i == index {
                dd.open(by, cursor);
            } else {
                dd.close();
            }
        }
        log::debug!("dropdown {index} opened by interaction {}", by.value());
    }

    /// Trigger action: open if closed, close if open.
    pub fn toggle_dropdown(&mut self, index: usize, by: InteractionId) {
        let cursor = self.initial_cursor(index);
        let Some(dd) = self.dropdowns.get_mut(index) else {
            return;
        };
        if dd.toggle(by, cursor) {
            for (i, other) in self.dropdowns.iter_mut().enumerate() {
                if i != index {
                    other.close();
                }
            }
            log::debug!("dropdown {index} opened by interaction {}", by.value());
        } else {
            log::debug!("dropdown {index} closed");
        }
    }

    pub fn close_dropdown(&mut self, index: usize) {
        if let Some(dd) = self.dropdowns.get_mut(index) {
            if dd.close() {
                log::debug!("dropdown {index} closed");
            }
        }
    }

    pub fn close_all_dropdowns(&mut self) {
        for index in 0..self.dropdowns.len() {
            self.close_dropdown(index);
        }
    }

    /// Report where dropdown `index` and its trigger were drawn.
    pub fn report_dropdown_regions(&mut self, index: usize, menu: Region, trigger: Region) {
        if let Some(dd) = self.dropdowns.get_mut(index) {
            dd.set_regions(menu, trigger);
        }
    }

    /// Offer a pointer press to every armed dropdown. Returns how many it closed.
    pub fn pointer_down(&mut self, event: &PointerDown) -> usize {
        let mut dismissed = 0;
        for (index, dd) in self.dropdowns.iter_mut().enumerate() {
            if dd.pointer_down(event) == PointerOutcome::Dismissed {
                log::debug!(
                    "dropdown {index} dismissed by outside press at ({}, {})",
                    event.x,
                    event.y
                );
                dismissed += 1;
            }
        }
        dismissed
    }

    /// Pick item `item` of dropdown `index`: close it, then select the view.
    pub fn select_from_dropdown(
        &mut self,
        index: usize,
        item: usize,
        listener: &mut impl ViewListener,
    ) {
        let Some(view) = self
            .nav
            .group(index)
            .and_then(|g| g.item(item))
            .map(|v| v.id.clone())
        else {
            log::warn!("dropdown {index} has no item {item}");
            return;
        };
        self.close_dropdown(index);
        self.select_view(&view, listener);
    }

    pub fn dropdown_move_cursor(&mut self, index: usize, delta: isize) {
        if let Some(dd) = self.dropdowns.get_mut(index) {
            dd.move_cursor(delta);
        }
    }

    /// Select the highlighted item of an open dropdown.
    pub fn confirm_dropdown(&mut self, index: usize, listener: &mut impl ViewListener) {
        if let Some(cursor) = self.dropdowns.get(index).and_then(Dropdown::cursor) {
            self.select_from_dropdown(index, cursor, listener);
        }
    }

    /// Highlight the active view when it belongs to this category.
    fn initial_cursor(&self, index: usize) -> usize {
        self.nav
            .group(index)
            .and_then(|g| g.position(self.nav.active().as_str()))
            .unwrap_or(0)
    }
}

fn log_nav(result: Result<ViewChange, NavError>) {
    if let Err(err) = result {
        log::warn!("navigation ignored: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Block;

    fn state() -> ViewerState {
        ViewerState::new(Catalog::builtin().unwrap()).unwrap()
    }

    #[test]
    fn unknown_panel_is_a_noop() {
        let mut s = state();
        let err = s.try_toggle_panel(&PanelId::new("nope")).unwrap_err();
        assert_eq!(err, NavError::UnknownPanel(PanelId::new("nope")));
        s.toggle_panel(&PanelId::new("nope"));
        assert!(!s.registry().has_entry("nope"));
    }

    #[test]
    fn unknown_view_is_a_noop() {
        let mut s = state();
        s.select_view(&ViewId::new("nope"), &mut ());
        assert!(s.is_active("guide"));
    }

    #[test]
    fn initial_view_override() {
        let kpop = ViewId::new("kpop");
        let s = ViewerState::with_initial_view(Catalog::builtin().unwrap(), Some(&kpop)).unwrap();
        assert!(s.is_active("kpop"));
        let zzz = ViewId::new("zzz");
        let s = ViewerState::with_initial_view(Catalog::builtin().unwrap(), Some(&zzz)).unwrap();
        assert!(s.is_active("guide"));
    }

    #[test]
    fn active_panels_follow_view() {
        let mut s = state();
        assert!(s.active_panels().is_empty());
        s.select_view(&ViewId::new("modules"), &mut ());
        let panels = s.active_panels();
        assert_eq!(panels.len(), 9);
        assert_eq!(panels[0].id.as_str(), "um");
        assert!(panels.iter().all(|p| !p.open));
    }

    #[test]
    fn expand_and_collapse_all() {
        let mut s = state();
        s.select_view(&ViewId::new("b2c"), &mut ());
        s.toggle_panel(&PanelId::new("b2c-payment"));
        s.toggle_panel(&PanelId::new("um"));
        s.expand_active_view();
        assert!(s.active_panels().iter().all(|p| p.open));
        // Panels outside the view keep their state.
        assert!(s.is_panel_open("um"));
        s.collapse_all();
        assert_eq!(s.registry().open_count(), 0);
    }

    #[test]
    fn panel_referenced_twice_expands_open() {
        let mut catalog = Catalog::builtin().unwrap();
        let body = catalog.views.get_mut(&ViewId::new("b2c")).unwrap();
        body.blocks.push(Block::Panels {
            panels: vec![PanelId::new("b2c-course")],
        });
        let mut s = ViewerState::new(catalog).unwrap();
        s.select_view(&ViewId::new("b2c"), &mut ());
        assert_eq!(s.active_panels().len(), 5);

        s.expand_active_view();
        assert!(s.is_panel_open("b2c-course"));
        assert!(s.active_panels().iter().all(|p| p.open));
    }

    #[test]
    fn category_accent_follows_active_view() {
        let mut s = state();
        s.select_view(&ViewId::new("kpop"), &mut ());
        assert_eq!(s.category_display_accent(2), Some(Accent::Purple));
        assert_eq!(s.category_display_accent(0), Some(Accent::Amber));
        assert_eq!(s.category_display_accent(9), None);
    }

    #[test]
    fn opening_one_dropdown_closes_the_other() {
        let mut s = state();
        let by = s.next_interaction();
        s.open_dropdown(0, by);
        let by = s.next_interaction();
        s.open_dropdown(2, by);
        assert_eq!(s.expanded_dropdown(), Some(2));
        assert!(!s.dropdown(0).unwrap().is_expanded());
    }

    #[test]
    fn dropdown_cursor_starts_on_active_member() {
        let mut s = state();
        s.select_view(&ViewId::new("kpop"), &mut ());
        let by = s.next_interaction();
        s.open_dropdown(2, by);
        assert_eq!(s.dropdown(2).unwrap().cursor(), Some(2));
        let by = s.next_interaction();
        s.open_dropdown(0, by);
        assert_eq!(s.dropdown(0).unwrap().cursor(), Some(0));
    }

    #[test]
    fn confirm_selects_highlighted_item() {
        let mut s = state();
        let by = s.next_interaction();
        s.open_dropdown(1, by);
        s.dropdown_move_cursor(1, 1);
        s.confirm_dropdown(1, &mut ());
        assert!(s.is_active("modules"));
        assert_eq!(s.expanded_dropdown(), None);
    }

    #[test]
    fn bad_dropdown_item_keeps_dropdown_open() {
        let mut s = state();
        let by = s.next_interaction();
        s.open_dropdown(0, by);
        s.select_from_dropdown(0, 99, &mut ());
        assert!(s.dropdown(0).unwrap().is_expanded());
        assert!(s.is_active("guide"));
    }

    #[test]
    fn out_of_range_dropdown_index_is_ignored() {
        let mut s = state();
        let by = s.next_interaction();
        s.open_dropdown(42, by);
        s.toggle_dropdown(42, by);
        assert_eq!(s.expanded_dropdown(), None);
    }
}
