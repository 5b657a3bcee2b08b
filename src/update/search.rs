//! Search box handlers

use crate::commands::Cmd;
use crate::messages::SearchMsg;
use crate::model::AppModel;

pub fn update_search(model: &mut AppModel, msg: SearchMsg) -> Option<Cmd> {
    if !model.nav.mode.is_browse() {
        return None;
    }

    match msg {
        SearchMsg::InsertChar(ch) => {
            model.ui.search_query.push(ch);
        }
        SearchMsg::DeleteBackward => {
            model.ui.search_query.pop()?;
        }
        SearchMsg::ClearFilters => {
            if !model.ui.has_filters() {
                return None;
            }
            model.ui.search_query.clear();
            model.ui.selected_categories.clear();
        }
    }

    model.rebuild_visible();
    Some(Cmd::Redraw)
}
