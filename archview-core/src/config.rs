//! Viewer configuration, stored as TOML.
//!
//! Every field is optional in the file. Command-line flags override what is
//! loaded here.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::ids::ViewId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Catalog file to load instead of the built-in one.
    pub catalog: Option<PathBuf>,
    /// View to start on instead of the catalog's default.
    pub default_view: Option<ViewId>,
    /// Capture mouse events (click-to-toggle, outside-click dismissal).
    pub mouse: bool,
    /// Log file path.
    pub log_file: PathBuf,
    /// One of off, error, warn, info, debug, trace.
    pub log_level: String,
    /// Show the key help overlay on start.
    pub help_on_start: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            default_view: None,
            mouse: true,
            log_file: PathBuf::from("archview.log"),
            log_level: "info".into(),
            help_on_start: false,
        }
    }
}

impl ViewerConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load `path` if it exists, else defaults. A present but malformed file
    /// is still an error.
    pub fn load_optional(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = ViewerConfig::from_toml("").unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert!(config.mouse);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn fields_override_defaults() {
        let config = ViewerConfig::from_toml(
            r#"
default_view = "rbac"
mouse = false
log_level = "debug"
catalog = "/tmp/notes.toml"
"#,
        )
        .unwrap();
        assert_eq!(config.default_view, Some(ViewId::new("rbac")));
        assert!(!config.mouse);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.catalog, Some(PathBuf::from("/tmp/notes.toml")));
        assert_eq!(config.log_file, PathBuf::from("archview.log"));
    }

    #[test]
    fn bad_log_level_is_rejected() {
        let err = ViewerConfig::from_toml("log_level = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLogLevel(l) if l == "loud"));
    }

    #[test]
    fn missing_optional_file_is_default() {
        let config = ViewerConfig::load_optional(Path::new("/nonexistent/archview.toml")).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "mouse = maybe").unwrap();
        assert!(matches!(ViewerConfig::load_optional(&path), Err(ConfigError::Parse(_))));
    }
}
