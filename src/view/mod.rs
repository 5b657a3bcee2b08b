//! Terminal rendering
//!
//! Everything on screen is drawn from `&AppModel` each frame. Positions come
//! from the same [`ScreenLayout`](geometry::ScreenLayout) that navigation
//! and hit-testing use, so what is drawn where is never decided twice.

mod browse;
mod chrome;
pub mod geometry;
mod screens;
pub mod text;
pub mod theme;

pub use hit_test::{hit_test, hit_test_ui, HitTarget};

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::model::{AppModel, ViewMode};
use geometry::CellRect;

/// Draw one frame
pub fn render(frame: &mut Frame, model: &AppModel) {
    let area = frame.area();

    if let Some(error) = &model.ui.error {
        chrome::render_error(frame, area, error);
        return;
    }
    if model.ui.is_loading {
        chrome::render_loading(frame, area);
        return;
    }

    match model.nav.mode {
        ViewMode::Detail => screens::render_detail(frame, area, model),
        ViewMode::CategoryFilter => screens::render_filter(frame, area, model),
        ViewMode::CardCreate => screens::render_create(frame, area, model),
        ViewMode::List | ViewMode::Grid | ViewMode::Table => {
            let layout = model.layout();
            chrome::render_header(frame, area, model);
            browse::render_items(frame, area, model, &layout);
            browse::render_preview(frame, area, model, &layout);
            chrome::render_footer(frame, area, model, &layout);
        }
    }

    if model.ui.show_help {
        chrome::render_help(frame, area);
    }
}

/// Terminal rect for a layout rect, clipped to the frame
pub(crate) fn to_rect(cell: CellRect, area: Rect) -> Rect {
    let clamp = |v: usize| u16::try_from(v).unwrap_or(u16::MAX);
    Rect::new(
        clamp(cell.x),
        clamp(cell.y),
        clamp(cell.width),
        clamp(cell.height),
    )
    .intersection(area)
}

/// One-row rect at `y`, or `None` when it falls off the frame
pub(crate) fn row_rect(area: Rect, y: usize) -> Option<Rect> {
    let y = u16::try_from(y).ok()?;
    (y >= area.y && y < area.bottom()).then(|| Rect::new(area.x, y, area.width, 1))
}
