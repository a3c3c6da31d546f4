//! Command-line arguments and how they combine with the config file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use archview_core::{Catalog, ViewId, ViewerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "archview",
    version,
    about = "Terminal viewer for LMS architecture notes"
)]
pub struct Args {
    /// Config file. Defaults to <config dir>/archview/config.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Catalog TOML to show instead of the built-in architecture notes.
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// View to start on (e.g. modules, b2b, rbac).
    #[arg(long)]
    pub view: Option<String>,

    /// Log file. Defaults to ./archview.log.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Do not capture the mouse.
    #[arg(long, default_value_t = false)]
    pub no_mouse: bool,

    /// Validate the catalog, print a summary and exit.
    #[arg(long, default_value_t = false)]
    pub check: bool,
}

/// `<config dir>/archview/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("archview")
        .join("config.toml")
}

/// Load the config file and apply command-line overrides.
///
/// An explicit `--config` must exist; the default location is optional.
pub fn resolve_config(args: &Args, default_path: &Path) -> Result<ViewerConfig> {
    let mut config = match &args.config {
        Some(path) => ViewerConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ViewerConfig::load_optional(default_path)
            .with_context(|| format!("loading config {}", default_path.display()))?,
    };

    if let Some(path) = &args.catalog {
        config.catalog = Some(path.clone());
    }
    if let Some(view) = &args.view {
        config.default_view = Some(ViewId::new(view.as_str()));
    }
    if let Some(path) = &args.log_file {
        config.log_file = path.clone();
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
        config.level_filter()?;
    }
    if args.no_mouse {
        config.mouse = false;
    }
    Ok(config)
}

/// The configured catalog file, or the built-in catalog.
pub fn load_catalog(config: &ViewerConfig) -> Result<Catalog> {
    match &config.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => Catalog::builtin().context("built-in catalog"),
    }
}

/// One line per category for `--check`.
pub fn summary(catalog: &Catalog) -> String {
    let mut out = format!(
        "{}: {} categories, {} views, {} panels (default view: {})\n",
        catalog.title,
        catalog.categories.len(),
        catalog.view_count(),
        catalog.panels.len(),
        catalog.default_view,
    );
    for category in &catalog.categories {
        let views: Vec<&str> = category.views.iter().map(|v| v.id.as_str()).collect();
        out.push_str(&format!("  {} [{}]: {}\n", category.label, category.id, views.join(", ")));
    }
    out
}
