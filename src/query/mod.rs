//! Visible-set computation
//!
//! `visible_indices` is the single entry point: search, then category filter,
//! then (table only) a stable sort. The result is a list of indices into the
//! dataset's card vector, always rebuilt from scratch.

mod search;
mod sort;

use std::collections::HashSet;

pub use search::{matches_categories, matches_search, normalize_query};
pub use sort::{format_date, SortDirection, SortKey, SortState};

use crate::model::{Card, CategoryIndex};

/// Inputs that decide which cards are visible and in what order
#[derive(Debug, Clone, Copy)]
pub struct VisibleQuery<'a> {
    pub search: &'a str,
    pub categories: &'a HashSet<String>,
    /// Present only when the table geometry is active
    pub sort: Option<(SortState, &'a CategoryIndex)>,
}

/// Indices of visible cards, in display order
pub fn visible_indices(cards: &[Card], query: VisibleQuery<'_>) -> Vec<usize> {
    let needle = normalize_query(query.search);

    let mut indices: Vec<usize> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| matches_search(card, needle.as_deref()))
        .filter(|(_, card)| matches_categories(card, query.categories))
        .map(|(i, _)| i)
        .collect();

    if let Some((state, categories)) = query.sort {
        sort::sort_indices(&mut indices, cards, categories, state);
    }

    indices
}
