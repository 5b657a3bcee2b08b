//! Category filter screen handlers

use crate::commands::Cmd;
use crate::messages::FilterMsg;
use crate::model::{AppModel, ViewMode};

pub fn update_filter(model: &mut AppModel, msg: FilterMsg) -> Option<Cmd> {
    match msg {
        FilterMsg::Open => {
            if !model.nav.mode.is_browse() {
                return None;
            }
            model.ui.filter.cursor = 0;
            model.nav.set_mode(ViewMode::CategoryFilter);
            Some(Cmd::Redraw)
        }
        _ if model.nav.mode != ViewMode::CategoryFilter => None,
        FilterMsg::CursorUp => {
            model.ui.filter.cursor = model.ui.filter.cursor.saturating_sub(1);
            Some(Cmd::Redraw)
        }
        FilterMsg::CursorDown => {
            if model.ui.filter.cursor + 1 < model.listed_categories().len() {
                model.ui.filter.cursor += 1;
            }
            Some(Cmd::Redraw)
        }
        FilterMsg::Toggle => {
            let id = model
                .listed_categories()
                .get(model.ui.filter.cursor)
                .map(|c| c.id.clone())?;
            if !model.ui.selected_categories.remove(&id) {
                model.ui.selected_categories.insert(id);
            }
            refilter(model)
        }
        FilterMsg::SelectAll => {
            let ids: Vec<String> = model
                .listed_categories()
                .iter()
                .map(|c| c.id.clone())
                .collect();
            model.ui.selected_categories.extend(ids);
            refilter(model)
        }
        FilterMsg::ClearAll => {
            model.ui.search_query.clear();
            model.ui.selected_categories.clear();
            refilter(model)
        }
    }
}

fn refilter(model: &mut AppModel) -> Option<Cmd> {
    model.rebuild_visible();
    tracing::debug!(
        "category filter: {} selected, {} visible",
        model.ui.selected_categories.len(),
        model.visible_len()
    );
    Some(Cmd::Redraw)
}
