//! Navigation controller: one active view across every selection group.
//!
//! Exclusivity is global: selecting a view in one category deselects
//! whatever was active in any other. The controller stores only the active
//! `ViewId`; per-category state (highlight, button label) is derived.

use crate::catalog::Catalog;
use crate::error::NavError;
use crate::ids::ViewId;
use crate::selection::SelectionGroup;

/// Receives the id of every successfully selected view.
///
/// The TUI implements this to reset the content scroll and cursor when the
/// body it renders is swapped.
pub trait ViewListener {
    fn view_changed(&mut self, change: &ViewChange);
}

/// A listener that ignores every change.
impl ViewListener for () {
    fn view_changed(&mut self, _change: &ViewChange) {}
}

/// Result of a successful `select_view`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewChange {
    pub previous: ViewId,
    pub current: ViewId,
}

impl ViewChange {
    /// Re-selecting the active view.
    pub fn is_noop(&self) -> bool {
        self.previous == self.current
    }
}

/// Owns the selection groups and the single active view.
#[derive(Debug, Clone)]
pub struct NavigationController {
    groups: Vec<SelectionGroup>,
    active: ViewId,
}

impl NavigationController {
    /// Build from explicit groups. `default` must belong to one of them.
    pub fn new(groups: Vec<SelectionGroup>, default: ViewId) -> Result<Self, NavError> {
        if !groups.iter().any(|g| g.contains(default.as_str())) {
            return Err(NavError::UnknownView(default));
        }
        Ok(Self { groups, active: default })
    }

    /// Build from a validated catalog, starting on its default view.
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, NavError> {
        let groups = catalog.categories.iter().map(SelectionGroup::from).collect();
        Self::new(groups, catalog.default_view.clone())
    }

    pub fn groups(&self) -> &[SelectionGroup] {
        &self.groups
    }

    pub fn group(&self, index: usize) -> Option<&SelectionGroup> {
        self.groups.get(index)
    }

    pub fn active(&self) -> &ViewId {
        &self.active
    }

    pub fn is_active(&self, view: &str) -> bool {
        self.active.as_str() == view
    }

    pub fn is_known(&self, view: &str) -> bool {
        self.active_category_for(view).is_some()
    }

    /// Index of the group that contains `view`.
    pub fn active_category_for(&self, view: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.contains(view))
    }

    /// Index of the group that contains the active view.
    pub fn active_category(&self) -> usize {
        // `active` is only ever set to a member of some group.
        self.active_category_for(self.active.as_str()).unwrap_or(0)
    }

    /// Label a group's button shows right now.
    pub fn display_label(&self, group: usize) -> Option<&str> {
        self.groups.get(group).map(|g| g.display_label(&self.active))
    }

    /// Make `view` the active view and notify `listener`.
    pub fn select_view(
        &mut self,
        view: &ViewId,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        if !self.is_known(view.as_str()) {
            return Err(NavError::UnknownView(view.clone()));
        }
        let previous = std::mem::replace(&mut self.active, view.clone());
        let change = ViewChange {
            previous,
            current: view.clone(),
        };
        log::debug!("active view {} -> {}", change.previous, change.current);
        listener.view_changed(&change);
        Ok(change)
    }

    /// Next view inside the active view's group, wrapping.
    pub fn select_next_in_category(
        &mut self,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        let target = self.step_in_category(true);
        self.select_view(&target, listener)
    }

    /// Previous view inside the active view's group, wrapping.
    pub fn select_prev_in_category(
        &mut self,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        let target = self.step_in_category(false);
        self.select_view(&target, listener)
    }

    /// First view of the next group, wrapping.
    pub fn select_next_category(
        &mut self,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        let len = self.groups.len();
        let target = self.first_of((self.active_category() + 1) % len);
        self.select_view(&target, listener)
    }

    /// First view of the previous group, wrapping.
    pub fn select_prev_category(
        &mut self,
        listener: &mut impl ViewListener,
    ) -> Result<ViewChange, NavError> {
        let len = self.groups.len();
        let target = self.first_of((self.active_category() + len - 1) % len);
        self.select_view(&target, listener)
    }

    fn step_in_category(&self, forward: bool) -> ViewId {
        let group = &self.groups[self.active_category()];
        let next = if forward {
            group.next_after(self.active.as_str())
        } else {
            group.prev_before(self.active.as_str())
        };
        next.map_or_else(|| self.active.clone(), |v| v.id.clone())
    }

    fn first_of(&self, group: usize) -> ViewId {
        self.groups[group]
            .item(0)
            .map_or_else(|| self.active.clone(), |v| v.id.clone())
    }
}
