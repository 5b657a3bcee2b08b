//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them; every background one posts exactly one `Msg`
//! back to the inbox.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use crate::model::CardData;

#[derive(Debug, Clone)]
pub enum Cmd {
    /// Request a redraw of the screen
    Redraw,
    /// Read the data file; replies with `AppMsg::DataLoaded`
    LoadData { path: PathBuf },
    /// Write a snapshot of the dataset; replies with `AppMsg::SaveCompleted`
    SaveData {
        path: PathBuf,
        data: CardData,
        card_id: String,
    },
    /// Put text on the clipboard; replies with `AppMsg::CopyCompleted`
    CopyToClipboard { text: String, label: String },
    /// Sleep, then send `AppMsg::PollTick`
    SchedulePoll { delay: Duration },
    /// Check the data file; replies with `AppMsg::FileChanged`
    PollForChange {
        path: PathBuf,
        since: Option<SystemTime>,
        generation: u64,
    },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            // Loading and saving change what the status bar shows
            Cmd::LoadData { .. } => true,
            Cmd::SaveData { .. } => true,
            // Background results trigger their own redraw when they arrive
            Cmd::CopyToClipboard { .. } => false,
            Cmd::SchedulePoll { .. } => false,
            Cmd::PollForChange { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Quit doesn't need redraw - app is exiting
            Cmd::Quit => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_redraw_and_quit() {
        let batch = Cmd::batch(vec![
            Cmd::SchedulePoll {
                delay: Duration::from_secs(1),
            },
            Cmd::Redraw,
        ]);
        assert!(batch.needs_redraw());
        assert!(!Cmd::Quit.needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::Quit]).needs_redraw());
    }
}
