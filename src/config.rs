//! User configuration
//!
//! Read once at startup from `~/.config/cellblocks/config.yaml`. Every field
//! has a default, so a partial file is fine and a missing one means defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_PATH: &str = "~/projects/CellBlocks/data/cellblocks-data.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Card data file; a leading `~` is expanded
    pub data_path: String,
    /// Seconds between modification-time checks of the data file
    pub poll_interval_secs: u64,
    /// Window for two clicks on the same card to count as a double click
    pub double_click_ms: u64,
    /// Open with the preview pane visible
    pub start_with_preview: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: DEFAULT_DATA_PATH.to_string(),
            poll_interval_secs: 10,
            double_click_ms: 500,
            start_with_preview: false,
        }
    }
}

impl AppConfig {
    /// Load config from the default location, or return defaults
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults on any problem
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn data_path(&self) -> PathBuf {
        crate::config_paths::expand_home(&self.data_path)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn double_click_window(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}
