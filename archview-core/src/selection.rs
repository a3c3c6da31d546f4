//! Selection groups: one exclusive-choice list per catalog category.
//!
//! A group never stores which of its items is active. Whether it is
//! highlighted, and which label it shows, are derived from the navigation
//! controller's single active view every time they are asked for.

use crate::catalog::{Accent, Category, ViewEntry};
use crate::ids::ViewId;

/// One category's worth of selectable views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGroup {
    id: String,
    label: String,
    accent: Accent,
    items: Vec<ViewEntry>,
}

impl SelectionGroup {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        accent: Accent,
        items: Vec<ViewEntry>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            accent,
            items,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Neutral label, shown while none of the group's items is active.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn accent(&self) -> Accent {
        self.accent
    }

    pub fn items(&self) -> &[ViewEntry] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&ViewEntry> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, view: &str) -> bool {
        self.position(view).is_some()
    }

    pub fn position(&self, view: &str) -> Option<usize> {
        self.items.iter().position(|v| v.id.as_str() == view)
    }

    /// Whether the group owns the active view.
    pub fn is_highlighted(&self, active: &ViewId) -> bool {
        self.contains(active.as_str())
    }

    /// The label the group's button shows: the active item's label if the
    /// active view is one of ours, else the neutral label.
    pub fn display_label(&self, active: &ViewId) -> &str {
        match self.position(active.as_str()) {
            Some(i) => &self.items[i].label,
            None => &self.label,
        }
    }

    /// Accent for the button: the active item's when highlighted.
    pub fn display_accent(&self, active: &ViewId) -> Accent {
        match self.position(active.as_str()) {
            Some(i) => self.items[i].accent,
            None => self.accent,
        }
    }

    /// Item after `view`, wrapping. `None` if `view` is not in the group.
    pub fn next_after(&self, view: &str) -> Option<&ViewEntry> {
        let i = self.position(view)?;
        self.items.get((i + 1) % self.items.len())
    }

    /// Item before `view`, wrapping. `None` if `view` is not in the group.
    pub fn prev_before(&self, view: &str) -> Option<&ViewEntry> {
        let i = self.position(view)?;
        let len = self.items.len();
        self.items.get((i + len - 1) % len)
    }
}

impl From<&Category> for SelectionGroup {
    fn from(category: &Category) -> Self {
        Self::new(
            category.id.clone(),
            category.label.clone(),
            category.accent,
            category.views.clone(),
        )
    }
}
