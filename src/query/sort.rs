//! Table column sorting

use std::cmp::Ordering;

use crate::model::{Card, CategoryIndex};

/// Sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Title,
    Category,
    Created,
    Updated,
}

impl SortKey {
    /// Column for the `1`..`4` keys
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(SortKey::Title),
            '2' => Some(SortKey::Category),
            '3' => Some(SortKey::Created),
            '4' => Some(SortKey::Updated),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Category => "Category",
            SortKey::Created => "Created",
            SortKey::Updated => "Updated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    /// Same column flips direction; a new column starts ascending
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flip();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

fn compare(a: &Card, b: &Card, key: SortKey, categories: &CategoryIndex) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Category => categories
            .name_of(a)
            .to_lowercase()
            .cmp(&categories.name_of(b).to_lowercase()),
        SortKey::Created => a.created_at.cmp(&b.created_at),
        SortKey::Updated => a.updated_at.cmp(&b.updated_at),
    }
}

/// Stable sort of `indices`; equal keys keep dataset order in both directions
pub(super) fn sort_indices(
    indices: &mut [usize],
    cards: &[Card],
    categories: &CategoryIndex,
    state: SortState,
) {
    indices.sort_by(|&a, &b| {
        let ord = compare(&cards[a], &cards[b], state.key, categories);
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// `YYYY-MM-DD` in local time, `N/A` for an unset timestamp
pub fn format_date(millis: i64) -> String {
    if millis == 0 {
        return "N/A".to_string();
    }
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d")
            .to_string(),
        None => "N/A".to_string(),
    }
}
