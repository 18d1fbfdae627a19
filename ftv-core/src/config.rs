//! src/config.rs
//! ============================================================================
//! # Config: Tree-View Settings Loader and Saver
//!
//! Manages the user-editable settings of the tree-view engine. Loads and
//! saves settings as TOML from the proper cross-platform config path using
//! the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Synchronous load/save — the engine runs on a single UI thread
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load()?;
//! config.save()?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Main configuration struct for the tree-view engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Include dot-entries in directory listings.
    pub show_hidden: bool,

    /// Two clicks on the same row within this window count as a double-click.
    #[serde(with = "humantime_serde")]
    pub double_click_threshold: Duration,

    /// Pixels moved per scroll-wheel notch.
    pub scroll_step: f64,

    /// Rows jumped by PageUp/PageDown.
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_hidden: true,
            double_click_threshold: Duration::from_millis(350),
            scroll_step: 60.0,
            page_size: 10,
        }
    }
}

impl Config {
    /// Loads config from the TOML file at the XDG-compliant app config dir,
    /// or returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/ftv/config.toml` (Linux),
    /// or equivalent on Windows/macOS.
    pub fn load() -> Result<Self, AppError> {
        let path: PathBuf = Self::config_path()?;
        if path.exists() {
            let text: String =
                std::fs::read_to_string(&path).map_err(|source| AppError::ConfigIo {
                    path: path.clone(),
                    source,
                })?;
            let cfg: Config = toml::from_str(&text)?;
            Ok(cfg)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves config to the TOML file at the XDG-compliant app config dir.
    pub fn save(&self) -> Result<(), AppError> {
        let path: PathBuf = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str: String = toml::to_string_pretty(self)?;
        std::fs::write(&path, toml_str)?;
        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs: ProjectDirs = ProjectDirs::from("io", "ftv", "ftv")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".into()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert!(cfg.show_hidden);
        assert_eq!(cfg.double_click_threshold, Duration::from_millis(350));
        assert_eq!(cfg.scroll_step, 60.0);
        assert_eq!(cfg.page_size, 10);
    }

    #[test]
    fn test_toml_round_trip() {
        let cfg = Config {
            show_hidden: false,
            double_click_threshold: Duration::from_millis(200),
            scroll_step: 40.0,
            page_size: 25,
        };
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert!(!back.show_hidden);
        assert_eq!(back.double_click_threshold, Duration::from_millis(200));
        assert_eq!(back.page_size, 25);
    }
}
