//! Disclosure registry: independent open/closed state per panel.
//!
//! Any number of panels can be open at once. Entries are created lazily on
//! the first toggle and never removed; a missing entry means closed.

use std::collections::HashMap;

use crate::catalog::PanelEntry;
use crate::ids::PanelId;

/// Open/closed flags for every panel that has ever been toggled.
#[derive(Debug, Clone, Default)]
pub struct DisclosureRegistry {
    open: HashMap<PanelId, bool>,
}

impl DisclosureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one panel. Touches no other entry.
    pub fn toggle(&mut self, id: &PanelId) {
        let entry = self.open.entry(id.clone()).or_insert(false);
        *entry = !*entry;
        log::debug!("panel {id} -> {}", if *entry { "open" } else { "closed" });
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open.get(id).copied().unwrap_or(false)
    }

    /// Number of panels currently open.
    pub fn open_count(&self) -> usize {
        self.open.values().filter(|open| **open).count()
    }

    /// Ids of every open panel, sorted.
    pub fn open_ids(&self) -> Vec<&PanelId> {
        let mut ids: Vec<&PanelId> = self
            .open
            .iter()
            .filter_map(|(id, open)| open.then_some(id))
            .collect();
        ids.sort();
        ids
    }

    /// Whether a panel has ever been toggled.
    pub fn has_entry(&self, id: &str) -> bool {
        self.open.contains_key(id)
    }
}

/// A panel as the render surface sees it: catalog content plus its state.
#[derive(Debug, Clone, Copy)]
pub struct DisclosurePanel<'a> {
    pub id: &'a PanelId,
    pub entry: &'a PanelEntry,
    pub open: bool,
}

impl<'a> DisclosurePanel<'a> {
    /// Body lines, present only while the panel is open.
    pub fn visible_items(&self) -> &'a [String] {
        if self.open {
            &self.entry.items
        } else {
            &[]
        }
    }
}
