//! Detail view handlers (scrolling, template form, copy)

use crate::commands::Cmd;
use crate::messages::DetailMsg;
use crate::model::{AppModel, ViewMode};
use crate::template::fill_template;

/// Lines moved by PageUp/PageDown in the detail view
const DETAIL_PAGE: isize = 10;

pub fn update_detail(model: &mut AppModel, msg: DetailMsg) -> Option<Cmd> {
    if model.nav.mode != ViewMode::Detail {
        return None;
    }

    let detail = &mut model.ui.detail;
    let form_active = detail.show_form && !detail.variables.is_empty();

    match msg {
        DetailMsg::Scroll(delta) => model.nav.scroll_detail(delta as isize),
        DetailMsg::PageUp => model.nav.scroll_detail(-DETAIL_PAGE),
        DetailMsg::PageDown => model.nav.scroll_detail(DETAIL_PAGE),
        DetailMsg::ToggleTemplateForm => {
            if detail.variables.is_empty() {
                return None;
            }
            detail.show_form = !detail.show_form;
            if detail.show_form {
                detail.current_field = 0;
            }
        }
        DetailMsg::NextField if form_active => detail.next_field(),
        DetailMsg::PrevField if form_active => detail.prev_field(),
        DetailMsg::InsertChar(ch) if form_active => detail.current_value_mut()?.push(ch),
        DetailMsg::DeleteBackward if form_active => {
            detail.current_value_mut()?.pop()?;
        }
        DetailMsg::NextField
        | DetailMsg::PrevField
        | DetailMsg::InsertChar(_)
        | DetailMsg::DeleteBackward => return None,
        DetailMsg::Copy => {
            let card = model.detail_card()?;
            let text = if form_active {
                fill_template(&card.content, &model.ui.detail.values)
            } else {
                card.content.clone()
            };
            return Some(Cmd::CopyToClipboard {
                text,
                label: card.title.clone(),
            });
        }
    }

    Some(Cmd::Redraw)
}
