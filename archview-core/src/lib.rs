//! archview core: navigation and disclosure engine for the architecture viewer.
//!
//! This crate holds every piece of state the viewer has:
//! - Content catalog (categories, views, disclosure panels) loaded from TOML
//! - Disclosure registry: independent open/closed flags per panel
//! - Selection groups and the navigation controller (one global active view)
//! - Dropdown overlays with outside-interaction dismissal
//! - `ViewerState`, the single store the presentation layer reads and mutates
//!
//! Nothing here knows about terminals. The TUI crate renders from these types
//! and feeds pointer/keyboard interactions back in.

pub mod catalog;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod ids;
pub mod navigation;
pub mod overlay;
pub mod selection;
pub mod state;

pub use catalog::{Accent, Block, Catalog, Category, PanelEntry, ViewBody, ViewEntry};
pub use config::ViewerConfig;
pub use disclosure::{DisclosurePanel, DisclosureRegistry};
pub use error::{CatalogError, ConfigError, NavError};
pub use ids::{PanelId, ViewId};
pub use navigation::{NavigationController, ViewChange, ViewListener};
pub use overlay::{
    Dropdown, InteractionClock, InteractionId, OutsideInteractionMonitor, OverlayState,
    PointerDown, PointerOutcome, Region,
};
pub use selection::SelectionGroup;
pub use state::ViewerState;
