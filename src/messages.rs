//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::time::{Instant, SystemTime};

use crate::model::CardData;
use crate::query::SortKey;
use crate::storage::PollOutcome;

/// Direction for selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// (dx, dy) in grid cells
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Browse-mode navigation (List, Grid, Table)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMsg {
    /// Arrow keys / hjkl; left and right only act in the grid
    Move(Direction),
    PageUp,
    PageDown,
    Home,
    End,
    /// Show the selected card in the preview pane (grid space bar)
    PinPreview,
    /// Scroll the preview pane (positive = down)
    ScrollPreview(i32),
    /// Cycle List → Grid → Table
    CycleView,
    /// Open the selected card in the detail view
    OpenDetail,
    /// Copy the selected card's content
    CopySelected,
}

/// Search box editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchMsg {
    InsertChar(char),
    DeleteBackward,
    /// Clear the search text and every category filter
    ClearFilters,
}

/// Overlays and global toggles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    ToggleHelp,
    TogglePreview,
    /// Close help, leave a secondary screen, or clear the search, in that order
    Escape,
    /// Drop the status message if it has expired
    ExpireMessages(Instant),
}

/// Table column sorting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    SortBy(SortKey),
}

/// Category filter screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMsg {
    Open,
    CursorUp,
    CursorDown,
    Toggle,
    SelectAll,
    ClearAll,
}

/// Card creation screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateMsg {
    Open,
    NextField,
    PrevField,
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    CategoryPrev,
    CategoryNext,
    Submit,
}

/// Detail view and its template form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailMsg {
    Scroll(i32),
    PageUp,
    PageDown,
    ToggleTemplateForm,
    NextField,
    PrevField,
    InsertChar(char),
    DeleteBackward,
    /// Copy the filled template when the form is shown, else the raw content
    Copy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button released
    LeftRelease,
    WheelUp,
    WheelDown,
}

/// A pointer event in terminal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub column: usize,
    pub row: usize,
    /// When the event was read; drives double-click detection
    pub at: Instant,
}

/// Data file contents plus the modification time they were read at
#[derive(Debug, Clone)]
pub struct LoadedData {
    pub data: CardData,
    pub modified: Option<SystemTime>,
}

/// Application-level messages (terminal events, async results)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
    /// Initial load completed (async result)
    DataLoaded(Result<LoadedData, String>),
    /// Save completed (async result) carrying the id of the card just created
    SaveCompleted {
        card_id: String,
        result: Result<Option<SystemTime>, String>,
    },
    /// Time to check the data file for external edits
    PollTick,
    /// Change check completed (async result)
    FileChanged {
        generation: u64,
        result: Result<PollOutcome, String>,
    },
    /// Clipboard copy completed; Ok carries the status text
    CopyCompleted(Result<String, String>),
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Nav(NavMsg),
    Search(SearchMsg),
    Ui(UiMsg),
    Table(TableMsg),
    Filter(FilterMsg),
    Create(CreateMsg),
    Detail(DetailMsg),
    Pointer(PointerEvent),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn move_selection(direction: Direction) -> Self {
        Msg::Nav(NavMsg::Move(direction))
    }

    pub fn resize(width: u16, height: u16) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }

    pub fn search_char(ch: char) -> Self {
        Msg::Search(SearchMsg::InsertChar(ch))
    }
}
