//! Pointer handling using the hit-test system
//!
//! Dispatch depends on the mode first, then on what [`hit_test_ui`] finds
//! under the pointer:
//! - Detail: the wheel scrolls the content
//! - Filter / create screens: the pointer is ignored
//! - Browse modes: clicks select or activate cards, the wheel scrolls the
//!   preview when over it and steps the selection otherwise

use crate::commands::Cmd;
use crate::messages::{PointerEvent, PointerKind};
use crate::model::{AppModel, ClickOutcome, ViewMode};
use crate::view::hit_test::{hit_test_ui, HitTarget};

use super::SCROLL_STEP;

pub fn update_pointer(model: &mut AppModel, event: PointerEvent) -> Option<Cmd> {
    match model.nav.mode {
        ViewMode::Detail => {
            let step = SCROLL_STEP as isize;
            match event.kind {
                PointerKind::WheelUp => model.nav.scroll_detail(-step),
                PointerKind::WheelDown => model.nav.scroll_detail(step),
                PointerKind::LeftRelease => return None,
            }
            Some(Cmd::Redraw)
        }
        ViewMode::CategoryFilter | ViewMode::CardCreate => None,
        ViewMode::List | ViewMode::Grid | ViewMode::Table => match event.kind {
            PointerKind::WheelUp => wheel(model, event, -1),
            PointerKind::WheelDown => wheel(model, event, 1),
            PointerKind::LeftRelease => left_release(model, event),
        },
    }
}

/// Preview scroll when over the preview, otherwise one selection step
///
/// Stepping by wheel never moves the preview. Header and footer rows are
/// dead, as they are for clicks.
fn wheel(model: &mut AppModel, event: PointerEvent, direction: isize) -> Option<Cmd> {
    let layout = model.layout();
    if !layout.content_band().contains(event.column, event.row) {
        return None;
    }
    if layout.is_over_preview(event.column, event.row) {
        model
            .nav
            .scroll_preview(direction * SCROLL_STEP as isize);
    } else {
        let len = model.visible_len();
        model.nav.step(0, direction, len, &layout);
    }
    Some(Cmd::Redraw)
}

fn left_release(model: &mut AppModel, event: PointerEvent) -> Option<Cmd> {
    let layout = model.layout();
    let len = model.visible_len();
    let target = hit_test_ui(
        event.column,
        event.row,
        &layout,
        model.nav.scroll_offset,
        len,
    );

    let Some(HitTarget::Item(index)) = target else {
        return None;
    };

    let window = model.config.double_click_window();
    match model.click.register(index, event.at, window) {
        ClickOutcome::Activate(index) => {
            let card = model.card_at(index)?;
            tracing::debug!("double click on {}", card.id);
            Some(Cmd::CopyToClipboard {
                text: card.content.clone(),
                label: card.title.clone(),
            })
        }
        ClickOutcome::Select(index) => {
            model.nav.selected = index;
            model.nav.pin_preview();
            model.nav.ensure_visible(len, &layout);
            Some(Cmd::Redraw)
        }
    }
}
