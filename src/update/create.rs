//! Card creation screen handlers

use crate::commands::Cmd;
use crate::messages::CreateMsg;
use crate::model::{AppModel, Card, CreateField, CreateFormState, ViewMode};

pub fn update_create(model: &mut AppModel, msg: CreateMsg) -> Option<Cmd> {
    match msg {
        CreateMsg::Open => {
            if !model.nav.mode.is_browse() {
                return None;
            }
            model.ui.create = CreateFormState::default();
            model.nav.set_mode(ViewMode::CardCreate);
            Some(Cmd::Redraw)
        }
        _ if model.nav.mode != ViewMode::CardCreate => None,
        CreateMsg::NextField => {
            model.ui.create.field = model.ui.create.field.next();
            Some(Cmd::Redraw)
        }
        CreateMsg::PrevField => {
            model.ui.create.field = model.ui.create.field.prev();
            Some(Cmd::Redraw)
        }
        CreateMsg::InsertChar(ch) => {
            model.ui.create.current_text_mut()?.push(ch);
            Some(Cmd::Redraw)
        }
        CreateMsg::InsertNewline => {
            if model.ui.create.field != CreateField::Content {
                return None;
            }
            model.ui.create.content.push('\n');
            Some(Cmd::Redraw)
        }
        CreateMsg::DeleteBackward => {
            model.ui.create.current_text_mut()?.pop()?;
            Some(Cmd::Redraw)
        }
        CreateMsg::CategoryPrev => {
            if model.ui.create.field != CreateField::Category {
                return None;
            }
            model.ui.create.category = model.ui.create.category.saturating_sub(1);
            Some(Cmd::Redraw)
        }
        CreateMsg::CategoryNext => {
            if model.ui.create.field != CreateField::Category {
                return None;
            }
            if model.ui.create.category + 1 < model.listed_categories().len() {
                model.ui.create.category += 1;
            }
            Some(Cmd::Redraw)
        }
        CreateMsg::Submit => submit(model),
    }
}

/// Append the card in memory and hand a snapshot to the save worker
fn submit(model: &mut AppModel) -> Option<Cmd> {
    if model.ui.is_saving {
        return None;
    }

    let form = &model.ui.create;
    if form.title.trim().is_empty() || form.content.trim().is_empty() {
        model.ui.set_transient("Title and content are required");
        return Some(Cmd::Redraw);
    }

    let category_id = model
        .listed_categories()
        .get(model.ui.create.category)
        .map(|c| c.id.clone())
        .unwrap_or_default();
    let card = Card::new(
        model.ui.create.title.trim(),
        model.ui.create.content.clone(),
        category_id,
    );
    let card_id = card.id.clone();
    tracing::info!("Creating card {} ({})", card.title, card_id);

    model.data.cards.push(card);
    model.data_generation += 1;
    model.rebuild_visible();
    model.ui.is_saving = true;

    Some(Cmd::SaveData {
        path: model.data_path.clone(),
        data: model.data.clone(),
        card_id,
    })
}
