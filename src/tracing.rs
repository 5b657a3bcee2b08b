//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! selection, scroll and mode transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=nav=debug,message=trace` - scoped filtering
//! - `RUST_LOG=cellblocks::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/cellblocks/logs/cellblocks.log` with daily
//! rotation. There is no console output: the terminal belongs to the UI.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, ViewMode};

/// Initialize the file-only tracing subscriber
///
/// Returns an error string when the logs directory cannot be created; the
/// caller decides whether to continue without logging.
pub fn init() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let logs_dir = crate::config_paths::ensure_logs_dir()?;
    let file_appender = tracing_appender::rolling::daily(logs_dir, "cellblocks.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .try_init()
        .map_err(|e| format!("Could not install tracing subscriber: {}", e))
}

/// Lightweight snapshot of navigation state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSnapshot {
    pub mode: ViewMode,
    pub selected: usize,
    pub previewed: usize,
    pub scroll_offset: usize,
    pub visible: usize,
}

impl NavSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            mode: model.nav.mode,
            selected: model.nav.selected,
            previewed: model.nav.previewed,
            scroll_offset: model.nav.scroll_offset,
            visible: model.visible_len(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &NavSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.selected != other.selected {
            changes.push(format!("selected: {} → {}", self.selected, other.selected));
        }
        if self.previewed != other.previewed {
            changes.push(format!("previewed: {} → {}", self.previewed, other.previewed));
        }
        if self.scroll_offset != other.scroll_offset {
            changes.push(format!(
                "scroll: {} → {}",
                self.scroll_offset, other.scroll_offset
            ));
        }
        if self.visible != other.visible {
            changes.push(format!("visible: {} → {}", self.visible, other.visible));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(selected: usize, scroll: usize) -> NavSnapshot {
        NavSnapshot {
            mode: ViewMode::List,
            selected,
            previewed: 0,
            scroll_offset: scroll,
            visible: 10,
        }
    }

    #[test]
    fn test_diff_none_when_equal() {
        assert_eq!(snap(1, 0).diff(&snap(1, 0)), None);
    }

    #[test]
    fn test_diff_lists_changed_fields() {
        let diff = snap(1, 0).diff(&snap(4, 2)).unwrap();
        assert_eq!(diff, "selected: 1 → 4; scroll: 0 → 2");
    }
}
