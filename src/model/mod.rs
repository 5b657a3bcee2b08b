//! Application model - the complete state of the browser
//!
//! One owned [`AppModel`] is passed by `&mut` into `update`; nothing else
//! holds state. The visible set is a derived index list that is always
//! rebuilt from the dataset, never edited in place.

pub mod card;
pub mod click;
pub mod navigation;
pub mod ui;

pub use card::{generate_card_id, Card, CardData, Category, CategoryIndex};
pub use click::{ClickOutcome, ClickState};
pub use navigation::{Navigation, ViewMode};
pub use ui::{
    CreateField, CreateFormState, DetailState, FilterScreenState, TransientMessage, UiState,
    TRANSIENT_DURATION,
};

use std::path::PathBuf;
use std::time::SystemTime;

use crate::config::AppConfig;
use crate::query::{self, VisibleQuery};
use crate::view::geometry::{Geometry, LayoutMetrics, ScreenLayout};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    pub data: CardData,
    pub categories: CategoryIndex,
    /// Dataset indices of the cards on screen, in display order
    pub visible: Vec<usize>,
    pub nav: Navigation,
    pub ui: UiState,
    pub click: ClickState,
    pub metrics: LayoutMetrics,
    pub config: AppConfig,
    pub data_path: PathBuf,
    /// Bumped on every local write or applied reload; stale polls are dropped
    pub data_generation: u64,
    /// Modification time of the data file as of the last load or save
    pub last_modified: Option<SystemTime>,
}

impl AppModel {
    pub fn new(config: AppConfig, width: usize, height: usize) -> Self {
        let nav = Navigation::new(width, height, config.start_with_preview);
        Self {
            data: CardData::default(),
            categories: CategoryIndex::default(),
            visible: Vec::new(),
            nav,
            ui: UiState::new(),
            click: ClickState::default(),
            metrics: LayoutMetrics::default(),
            data_path: config.data_path(),
            config,
            data_generation: 0,
            last_modified: None,
        }
    }

    /// Layout of the current (or last) browse geometry at the current size
    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::compute(
            self.metrics,
            self.nav.width,
            self.nav.height,
            self.nav.browse_geometry,
            self.nav.show_preview,
        )
    }

    #[inline]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Card at a visible-set position
    pub fn card_at(&self, index: usize) -> Option<&Card> {
        self.visible.get(index).and_then(|&i| self.data.cards.get(i))
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.card_at(self.nav.selected)
    }

    pub fn previewed_card(&self) -> Option<&Card> {
        self.card_at(self.nav.previewed)
    }

    /// The card the detail view was opened on, looked up by id
    ///
    /// Independent of the visible set, so a reload that reorders or filters
    /// cards cannot swap the card under an open detail view.
    pub fn detail_card(&self) -> Option<&Card> {
        let id = self.ui.detail.card_id.as_deref()?;
        self.data.cards.iter().find(|c| c.id == id)
    }

    /// Visible-set position of a card id
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&i| self.data.cards.get(i).is_some_and(|c| c.id == id))
    }

    /// Categories offered by the filter and create screens, in dataset order
    ///
    /// Hidden categories are listed too: their cards are still browsable,
    /// so "select all" has to keep them visible.
    pub fn listed_categories(&self) -> &[Category] {
        &self.data.categories
    }

    fn compute_visible(&self) -> Vec<usize> {
        let sort = (self.nav.browse_geometry == Geometry::Table)
            .then_some((self.ui.sort, &self.categories));
        query::visible_indices(
            &self.data.cards,
            VisibleQuery {
                search: &self.ui.search_query,
                categories: &self.ui.selected_categories,
                sort,
            },
        )
    }

    /// Rebuild the visible set and clamp the selection by position
    pub fn rebuild_visible(&mut self) {
        self.visible = self.compute_visible();
        let layout = self.layout();
        self.nav.rewindow(self.visible.len(), &layout);
    }

    /// Rebuild the visible set, following the selected card if it survives
    ///
    /// Used when the order changes but the cards do not: sorting and
    /// switching geometry.
    pub fn rebuild_keep_selection(&mut self) {
        let selected_id = self.selected_card().map(|c| c.id.clone());
        let previewed_id = self.previewed_card().map(|c| c.id.clone());
        self.visible = self.compute_visible();
        if let Some(pos) = selected_id.and_then(|id| self.position_of(&id)) {
            self.nav.selected = pos;
        }
        if let Some(pos) = previewed_id.and_then(|id| self.position_of(&id)) {
            self.nav.previewed = pos;
        }
        let layout = self.layout();
        self.nav.rewindow(self.visible.len(), &layout);
    }

    /// Replace the dataset wholesale
    pub fn apply_data(&mut self, data: CardData) {
        self.categories = CategoryIndex::build(&data.categories);
        self.data = data;
        self.ui.filter.cursor = self
            .ui
            .filter
            .cursor
            .min(self.listed_categories().len().saturating_sub(1));
        self.rebuild_visible();
    }

    /// Re-window after the terminal size or preview pane changed
    pub fn relayout(&mut self) {
        let layout = self.layout();
        self.nav.rewindow(self.visible.len(), &layout);
    }

    /// Whether input other than quit is accepted
    pub fn is_blocked(&self) -> bool {
        self.ui.error.is_some()
    }
}
