//! Card data persistence
//!
//! Reads and writes the shared `cellblocks-data.json` document and detects
//! external edits by modification time. Callers run these on background
//! threads; nothing here touches the model.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::model::CardData;

/// Result of one change check
#[derive(Debug, Clone)]
pub enum PollOutcome {
    Unchanged,
    Changed {
        data: CardData,
        modified: SystemTime,
    },
}

/// Parse the data file
pub fn load_data(path: &Path) -> Result<CardData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read data file {}", path.display()))?;
    let data = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))?;
    Ok(data)
}

/// Write the whole document, two-space indented
pub fn save_data(path: &Path, data: &CardData) -> Result<()> {
    let content = serde_json::to_string_pretty(data).context("failed to serialize card data")?;
    fs::write(path, content)
        .with_context(|| format!("failed to write data file {}", path.display()))?;
    Ok(())
}

pub fn file_mod_time(path: &Path) -> Result<SystemTime> {
    let meta =
        fs::metadata(path).with_context(|| format!("failed to stat {}", path.display()))?;
    meta.modified()
        .with_context(|| format!("no modification time for {}", path.display()))
}

/// Reload the file only if it is newer than `since`
///
/// A missing `since` means nothing was loaded yet, so any readable file
/// counts as changed.
pub fn poll_for_change(path: &Path, since: Option<SystemTime>) -> Result<PollOutcome> {
    let modified = file_mod_time(path)?;
    if since.is_some_and(|since| modified <= since) {
        return Ok(PollOutcome::Unchanged);
    }
    let data = load_data(path)?;
    Ok(PollOutcome::Changed { data, modified })
}

/// Status line for an applied reload
pub fn reload_message(previous_count: usize, new_count: usize) -> String {
    if new_count > previous_count {
        format!("{} new card(s) detected!", new_count - previous_count)
    } else if new_count < previous_count {
        format!("Data reloaded ({} card(s) removed)", previous_count - new_count)
    } else {
        "Data reloaded".to_string()
    }
}
