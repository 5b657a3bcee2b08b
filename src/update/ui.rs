//! UI message handlers (help overlay, preview pane, escape, status messages)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::{AppModel, ViewMode};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleHelp => {
            model.ui.show_help = !model.ui.show_help;
            Some(Cmd::Redraw)
        }

        UiMsg::TogglePreview => {
            model.nav.show_preview = !model.nav.show_preview;
            if model.nav.show_preview {
                model.nav.pin_preview();
            }
            model.nav.reset_scroll();
            model.relayout();
            Some(Cmd::Redraw)
        }

        UiMsg::Escape => escape(model),

        UiMsg::ExpireMessages(now) => model.ui.expire_transient(now).then_some(Cmd::Redraw),
    }
}

/// Help first, then secondary screens, then the search text
fn escape(model: &mut AppModel) -> Option<Cmd> {
    if model.ui.show_help {
        model.ui.show_help = false;
        return Some(Cmd::Redraw);
    }

    if !model.nav.mode.is_browse() {
        model.nav.detail_scroll = 0;
        model.ui.detail.close();
        if model.nav.set_mode(ViewMode::List) {
            model.nav.reset_scroll();
            model.rebuild_keep_selection();
        } else {
            model.relayout();
        }
        return Some(Cmd::Redraw);
    }

    if !model.ui.search_query.is_empty() {
        model.ui.search_query.clear();
        model.rebuild_visible();
        return Some(Cmd::Redraw);
    }

    None
}
