//! Error types for the engine, catalog loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

use crate::ids::{PanelId, ViewId};

/// Faults raised by the mutating operations of the store.
///
/// Both are unreachable when the presentation layer only offers ids taken
/// from the catalog. `ViewerState` logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown view: {0}")]
    UnknownView(ViewId),

    #[error("unknown panel: {0}")]
    UnknownPanel(PanelId),
}

/// Catalog parse and consistency errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("catalog has no categories")]
    NoCategories,

    #[error("category '{0}' has no views")]
    EmptyCategory(String),

    #[error("view '{view}' listed in both '{first}' and '{second}'")]
    DuplicateView {
        view: ViewId,
        first: String,
        second: String,
    },

    #[error("view '{0}' is listed in a category but has no body")]
    MissingViewBody(ViewId),

    #[error("view body '{0}' is not listed in any category")]
    OrphanViewBody(ViewId),

    #[error("view '{view}' references unknown panel '{panel}'")]
    UnknownPanelRef { view: ViewId, panel: PanelId },

    #[error("view '{view}' lists panel '{panel}' more than once")]
    DuplicatePanelRef { view: ViewId, panel: PanelId },

    #[error("default view '{0}' is not in any category")]
    UnknownDefaultView(ViewId),
}

/// Viewer configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid log level '{0}' (expected off, error, warn, info, debug or trace)")]
    InvalidLogLevel(String),
}
