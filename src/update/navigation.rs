//! Browse-mode navigation handlers (List, Grid, Table)

use crate::commands::Cmd;
use crate::messages::{Direction, NavMsg, TableMsg};
use crate::model::{AppModel, ViewMode};
use crate::template::extract_variables;
use crate::view::geometry::Geometry;

use super::SCROLL_STEP;

/// Handle navigation messages
pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    if !model.nav.mode.is_browse() {
        return None;
    }

    let layout = model.layout();
    let len = model.visible_len();

    match msg {
        NavMsg::Move(direction) => {
            let (dx, dy) = direction.delta();
            match layout.geometry {
                Geometry::Grid => model.nav.move_grid(dx, dy, len, &layout),
                Geometry::List | Geometry::Table => {
                    if matches!(direction, Direction::Left | Direction::Right) {
                        return None;
                    }
                    model.nav.move_linear(dy, len, &layout);
                }
            }
            follow_in_list(model);
        }
        NavMsg::PageUp => {
            model.nav.page_up(len, &layout);
            follow_in_list(model);
        }
        NavMsg::PageDown => {
            model.nav.page_down(len, &layout);
            follow_in_list(model);
        }
        NavMsg::Home => {
            model.nav.home();
            follow_in_list(model);
        }
        NavMsg::End => {
            model.nav.end(len, &layout);
            follow_in_list(model);
        }
        NavMsg::PinPreview => {
            if layout.geometry != Geometry::Grid || !layout.has_preview() {
                return None;
            }
            model.nav.pin_preview();
        }
        NavMsg::ScrollPreview(delta) => {
            if !layout.has_preview() {
                return None;
            }
            model.nav.scroll_preview(delta as isize * SCROLL_STEP as isize);
        }
        NavMsg::CycleView => {
            let next = model.nav.mode.next_browse();
            model.nav.set_mode(next);
            model.nav.reset_scroll();
            model.rebuild_keep_selection();
            tracing::debug!("view mode: {}", next.label());
        }
        NavMsg::OpenDetail => {
            let card = model.selected_card()?;
            let (id, variables) = (card.id.clone(), extract_variables(&card.content));
            model.ui.detail.open(id, variables);
            model.nav.detail_scroll = 0;
            model.nav.set_mode(ViewMode::Detail);
        }
        NavMsg::CopySelected => {
            let card = model.selected_card()?;
            return Some(Cmd::CopyToClipboard {
                text: card.content.clone(),
                label: card.title.clone(),
            });
        }
    }

    Some(Cmd::Redraw)
}

/// Keyboard movement in the list drags the preview along
fn follow_in_list(model: &mut AppModel) {
    if model.nav.mode == ViewMode::List {
        model.nav.pin_preview();
    }
}

/// Handle table messages
pub fn update_table(model: &mut AppModel, msg: TableMsg) -> Option<Cmd> {
    if model.nav.mode != ViewMode::Table {
        return None;
    }
    match msg {
        TableMsg::SortBy(key) => {
            model.ui.sort.select(key);
            model.rebuild_keep_selection();
            tracing::debug!(
                "sort: {} {:?}",
                model.ui.sort.key.label(),
                model.ui.sort.direction
            );
        }
    }
    Some(Cmd::Redraw)
}
