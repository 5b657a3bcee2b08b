//! UI state - overlays, transient messages, secondary screens

use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

use crate::query::SortState;

/// How long reload and save notices stay in the status bar
pub const TRANSIENT_DURATION: Duration = Duration::from_secs(5);

// =============================================================================
// Transient Message
// =============================================================================

/// A status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
    pub expires_at: Instant,
}

impl TransientMessage {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

// =============================================================================
// Secondary screens
// =============================================================================

/// Detail view: the card it was opened on plus its template form
///
/// `values` is keyed by variable name and outlives the card it was typed
/// for, so `{{port}}` filled once is pre-filled on the next card using it.
#[derive(Debug, Clone, Default)]
pub struct DetailState {
    /// Id of the card captured when the view opened
    pub card_id: Option<String>,
    pub variables: Vec<String>,
    pub show_form: bool,
    pub current_field: usize,
    pub values: HashMap<String, String>,
}

impl DetailState {
    /// Capture a card and prepare the form for its variables
    pub fn open(&mut self, card_id: impl Into<String>, variables: Vec<String>) {
        self.card_id = Some(card_id.into());
        self.show_form = !variables.is_empty();
        self.variables = variables;
        self.current_field = 0;
    }

    /// The captured card was edited elsewhere; typed values are kept
    pub fn refresh_variables(&mut self, variables: Vec<String>) {
        if variables.is_empty() {
            self.show_form = false;
        }
        self.current_field = self.current_field.min(variables.len().saturating_sub(1));
        self.variables = variables;
    }

    pub fn close(&mut self) {
        self.card_id = None;
        self.variables.clear();
        self.show_form = false;
        self.current_field = 0;
    }

    pub fn current_variable(&self) -> Option<&str> {
        self.variables.get(self.current_field).map(String::as_str)
    }

    pub fn next_field(&mut self) {
        if !self.variables.is_empty() {
            self.current_field = (self.current_field + 1) % self.variables.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.variables.is_empty() {
            let n = self.variables.len();
            self.current_field = (self.current_field + n - 1) % n;
        }
    }

    /// Mutable value of the focused variable, created on first edit
    pub fn current_value_mut(&mut self) -> Option<&mut String> {
        let name = self.variables.get(self.current_field)?.clone();
        Some(self.values.entry(name).or_default())
    }

    pub fn value_of(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }
}

/// Cursor over the category list
#[derive(Debug, Clone, Default)]
pub struct FilterScreenState {
    pub cursor: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreateField {
    #[default]
    Title,
    Content,
    Category,
}

impl CreateField {
    pub fn next(self) -> Self {
        match self {
            CreateField::Title => CreateField::Content,
            CreateField::Content => CreateField::Category,
            CreateField::Category => CreateField::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CreateField::Title => CreateField::Category,
            CreateField::Content => CreateField::Title,
            CreateField::Category => CreateField::Content,
        }
    }
}

/// New card being typed
#[derive(Debug, Clone, Default)]
pub struct CreateFormState {
    pub title: String,
    pub content: String,
    /// Index into the dataset's category list
    pub category: usize,
    pub field: CreateField,
}

impl CreateFormState {
    /// Text of the focused field; the category field has none
    pub fn current_text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            CreateField::Title => Some(&mut self.title),
            CreateField::Content => Some(&mut self.content),
            CreateField::Category => None,
        }
    }
}

// =============================================================================
// UI state
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub show_help: bool,
    /// Fatal load error; only quitting is possible while set
    pub error: Option<String>,
    pub transient_message: Option<TransientMessage>,
    pub is_loading: bool,
    pub is_saving: bool,
    pub search_query: String,
    pub selected_categories: HashSet<String>,
    pub sort: SortState,
    pub detail: DetailState,
    pub filter: FilterScreenState,
    pub create: CreateFormState,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    pub fn set_transient(&mut self, text: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(text, TRANSIENT_DURATION));
    }

    /// Drop an expired message; returns true if one was removed
    pub fn expire_transient(&mut self, now: Instant) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(|m| m.is_expired_at(now))
        {
            self.transient_message = None;
            true
        } else {
            false
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.search_query.is_empty() || !self.selected_categories.is_empty()
    }
}
