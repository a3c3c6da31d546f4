//! Content catalog: categories of views, view bodies and disclosure panels.
//!
//! The catalog is static, read-only data. It is stored as TOML: an ordered
//! list of categories (each an ordered list of views), a body per view, and a
//! table of collapsible panels that view bodies reference by id. A built-in
//! catalog with the mzc-lp architecture notes ships inside the crate.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::ids::{PanelId, ViewId};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.toml");

/// Accent color names carried by the content. The TUI maps them to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Gray,
    Slate,
    Indigo,
    Emerald,
    Blue,
    Purple,
    Amber,
}

/// One selectable entry of a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewEntry {
    pub id: ViewId,
    pub label: String,
    #[serde(default)]
    pub accent: Accent,
}

/// A named, ordered group of views (one dropdown in the navigation bar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub accent: Accent,
    pub views: Vec<ViewEntry>,
}

/// A role line in a role table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRow {
    pub role: String,
    pub desc: String,
}

/// A key/value line in a two-column table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRow {
    pub key: String,
    pub value: String,
}

/// A section of a view body, rendered top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Bulleted notes under a heading.
    Notes { title: String, lines: Vec<String> },
    /// Role name and description table.
    Roles { title: String, roles: Vec<RoleRow> },
    /// Two-column key/value table.
    Pairs { title: String, rows: Vec<PairRow> },
    /// Collapsible module cards, by panel id.
    Panels { panels: Vec<PanelId> },
}

/// The body shown while a view is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewBody {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ViewBody {
    /// Panel ids referenced by this body, in display order.
    pub fn panel_ids(&self) -> impl Iterator<Item = &PanelId> {
        self.blocks.iter().flat_map(|block| match block {
            Block::Panels { panels } => panels.as_slice(),
            _ => &[][..],
        })
    }
}

/// A collapsible module card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelEntry {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub accent: Accent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub items: Vec<String>,
}

/// The complete content catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub footer: String,
    pub default_view: ViewId,
    pub categories: Vec<Category>,
    pub views: BTreeMap<ViewId, ViewBody>,
    #[serde(default)]
    pub panels: BTreeMap<PanelId, PanelEntry>,
}

impl Catalog {
    /// The catalog embedded in the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load and validate a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the structural invariants the engine relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }

        let mut owner: HashMap<&ViewId, &str> = HashMap::new();
        for category in &self.categories {
            if category.views.is_empty() {
                return Err(CatalogError::EmptyCategory(category.id.clone()));
            }
            for view in &category.views {
                if let Some(first) = owner.insert(&view.id, category.id.as_str()) {
                    return Err(CatalogError::DuplicateView {
                        view: view.id.clone(),
                        first: first.to_string(),
                        second: category.id.clone(),
                    });
                }
                if !self.views.contains_key(&view.id) {
                    return Err(CatalogError::MissingViewBody(view.id.clone()));
                }
            }
        }

        for (view_id, body) in &self.views {
            if !owner.contains_key(view_id) {
                return Err(CatalogError::OrphanViewBody(view_id.clone()));
            }
            let mut seen: HashSet<&PanelId> = HashSet::new();
            for panel in body.panel_ids() {
                if !self.panels.contains_key(panel) {
                    return Err(CatalogError::UnknownPanelRef {
                        view: view_id.clone(),
                        panel: panel.clone(),
                    });
                }
                if !seen.insert(panel) {
                    return Err(CatalogError::DuplicatePanelRef {
                        view: view_id.clone(),
                        panel: panel.clone(),
                    });
                }
            }
        }

        if !owner.contains_key(&self.default_view) {
            return Err(CatalogError::UnknownDefaultView(self.default_view.clone()));
        }
        Ok(())
    }

    /// Serialize the catalog back to TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// All view ids across all categories, in navigation order.
    pub fn view_ids(&self) -> impl Iterator<Item = &ViewId> {
        self.categories
            .iter()
            .flat_map(|c| c.views.iter().map(|v| &v.id))
    }

    pub fn contains_panel(&self, id: &str) -> bool {
        self.panels.contains_key(id)
    }

    /// Index of the category that lists `id`.
    pub fn category_of(&self, id: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|c| c.views.iter().any(|v| v.id.as_str() == id))
    }

    /// Navigation entry (label, accent) for a view.
    pub fn view_entry(&self, id: &str) -> Option<&ViewEntry> {
        self.categories
            .iter()
            .flat_map(|c| c.views.iter())
            .find(|v| v.id.as_str() == id)
    }

    pub fn body(&self, id: &str) -> Option<&ViewBody> {
        self.views.get(id)
    }

    pub fn panel(&self, id: &str) -> Option<&PanelEntry> {
        self.panels.get(id)
    }

    /// Total number of selectable views.
    pub fn view_count(&self) -> usize {
        self.categories.iter().map(|c| c.views.len()).sum()
    }
}
