//! List, grid and table bodies plus the preview pane
//!
//! Every position is taken from the [`ScreenLayout`]; this module only
//! decides what goes into each cell.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use ratatui::Frame;

use super::geometry::{Geometry, ScreenLayout};
use super::text::{display_width, pad_or_truncate, truncate, wrap_text};
use super::{row_rect, theme, to_rect};
use crate::model::{AppModel, Card};
use crate::query::{format_date, SortKey};

const EMPTY_MESSAGE: &str = "No cards found. Press 'f' to filter by category.";
const NO_PREVIEW: &str = "No card previewed - click a card to preview";

/// Room kept after a list title for the category name
const LIST_CATEGORY_ROOM: usize = 20;
/// Title lines in a grid card; content fills the rest
const GRID_TITLE_LINES: usize = 2;

pub fn render_items(frame: &mut Frame, area: Rect, model: &AppModel, layout: &ScreenLayout) {
    let rect = to_rect(layout.items_rect(), area);
    if model.visible.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_MESSAGE, theme::subtle()));
        frame.render_widget(empty, rect);
        return;
    }

    match layout.geometry {
        Geometry::List => render_list(frame, area, model, layout),
        Geometry::Grid => render_grid(frame, rect, model, layout),
        Geometry::Table => render_table(frame, area, model, layout),
    }
}

// ============================================================================
// List
// ============================================================================

fn render_list(frame: &mut Frame, area: Rect, model: &AppModel, layout: &ScreenLayout) {
    let top = layout.first_item_row();
    for row in 0..layout.rows {
        let index = model.nav.scroll_offset + row;
        let Some(card) = model.card_at(index) else {
            break;
        };
        let Some(rect) = row_rect(area, top + row) else {
            break;
        };
        let line = list_line(model, card, index == model.nav.selected, layout.width);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn list_line<'a>(model: &AppModel, card: &'a Card, selected: bool, width: usize) -> Line<'a> {
    let (name, color) = category_of(model, card);
    let title = truncate(&card.title, width.saturating_sub(LIST_CATEGORY_ROOM).max(1));
    let indicator = if selected { "> " } else { "  " };
    let used = display_width(indicator) + display_width(&title) + 1 + display_width(&name);

    let base = if selected {
        theme::selected()
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(indicator, base),
        Span::styled(title, base),
        Span::styled(" ", base),
        Span::styled(name, theme::category(&color).patch(bg_only(base))),
        Span::styled(" ".repeat(width.saturating_sub(used)), base),
    ])
}

// ============================================================================
// Grid
// ============================================================================

fn render_grid(frame: &mut Frame, items: Rect, model: &AppModel, layout: &ScreenLayout) {
    let cols = layout.cols.max(1);
    let first_row = model.nav.scroll_offset / cols;

    'rows: for row in 0..layout.rows {
        for col in 0..cols {
            let index = (first_row + row) * cols + col;
            let Some(card) = model.card_at(index) else {
                break 'rows;
            };
            let rect = to_rect(layout.grid_cell_rect(row, col), items);
            if rect.width < 2 || rect.height < 2 {
                continue;
            }
            render_grid_card(frame, rect, model, card, index == model.nav.selected, layout);
        }
    }
}

fn render_grid_card(
    frame: &mut Frame,
    rect: Rect,
    model: &AppModel,
    card: &Card,
    selected: bool,
    layout: &ScreenLayout,
) {
    let (_, color) = category_of(model, card);
    let (border_type, style) = if selected {
        (BorderType::Thick, theme::selected())
    } else {
        (BorderType::Rounded, Style::default())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(Style::default().fg(theme::category_color(&color)))
        .padding(Padding::horizontal(1))
        .style(style);

    let text_width = layout.metrics.card_inner_width.saturating_sub(2);
    let height = layout.metrics.card_inner_height;

    let title_style = Style::default()
        .fg(theme::PRIMARY)
        .add_modifier(if selected {
            Modifier::BOLD
        } else {
            Modifier::empty()
        });
    let mut lines: Vec<Line> = wrap_text(&card.title, text_width, GRID_TITLE_LINES.min(height))
        .into_iter()
        .map(|l| Line::from(Span::styled(l, title_style)))
        .collect();

    let remaining = height.saturating_sub(lines.len());
    let body = card.content.replace('\n', " ");
    lines.extend(
        wrap_text(body.trim(), text_width, remaining)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, theme::subtle()))),
    );

    frame.render_widget(Paragraph::new(lines).block(block), rect);
}

// ============================================================================
// Table
// ============================================================================

/// Column widths: title 40%, category 20%, created 20%, updated the rest
fn column_widths(width: usize) -> [usize; 4] {
    let available = width.saturating_sub(4);
    let title = available * 4 / 10;
    let category = available * 2 / 10;
    let created = available * 2 / 10;
    let updated = available.saturating_sub(title + category + created);
    [title.max(20), category.max(10), created.max(10), updated.max(10)]
}

fn render_table(frame: &mut Frame, area: Rect, model: &AppModel, layout: &ScreenLayout) {
    let widths = column_widths(layout.width);
    let sort = model.ui.sort;

    let header_cells: Vec<String> = [
        SortKey::Title,
        SortKey::Category,
        SortKey::Created,
        SortKey::Updated,
    ]
    .iter()
    .zip(widths)
    .map(|(&key, width)| {
        let label = if sort.key == key {
            format!("{} {}", key.label(), sort.direction.arrow())
        } else {
            key.label().to_string()
        };
        pad_or_truncate(&label, width)
    })
    .collect();

    let header_style = Style::default()
        .fg(theme::SECONDARY)
        .add_modifier(Modifier::BOLD);
    if let Some(rect) = row_rect(area, layout.header()) {
        let line = Line::from(Span::styled(
            format!("  {}", header_cells.join(" │ ")),
            header_style,
        ));
        frame.render_widget(Paragraph::new(line), rect);
    }
    if let Some(rect) = row_rect(area, layout.header() + 1) {
        let separator = widths
            .iter()
            .map(|&w| "─".repeat(w))
            .collect::<Vec<_>>()
            .join("─┼─");
        let line = Line::from(Span::styled(format!("  {}", separator), theme::subtle()));
        frame.render_widget(Paragraph::new(line), rect);
    }

    let top = layout.first_item_row();
    for row in 0..layout.rows {
        let index = model.nav.scroll_offset + row;
        let Some(card) = model.card_at(index) else {
            break;
        };
        let Some(rect) = row_rect(area, top + row) else {
            break;
        };
        let line = table_line(model, card, index == model.nav.selected, widths);
        frame.render_widget(Paragraph::new(line), rect);
    }
}

fn table_line(model: &AppModel, card: &Card, selected: bool, widths: [usize; 4]) -> Line<'static> {
    let (name, color) = category_of(model, card);
    let base = if selected {
        theme::selected()
    } else {
        Style::default()
    };
    let sep = || Span::styled(" │ ", base);
    Line::from(vec![
        Span::styled(if selected { "> " } else { "  " }, base),
        Span::styled(pad_or_truncate(&card.title, widths[0]), base),
        sep(),
        Span::styled(
            pad_or_truncate(&name, widths[1]),
            theme::category(&color).patch(bg_only(base)),
        ),
        sep(),
        Span::styled(pad_or_truncate(&format_date(card.created_at), widths[2]), base),
        sep(),
        Span::styled(pad_or_truncate(&format_date(card.updated_at), widths[3]), base),
    ])
}

// ============================================================================
// Preview
// ============================================================================

pub fn render_preview(frame: &mut Frame, area: Rect, model: &AppModel, layout: &ScreenLayout) {
    let Some(cell) = layout.preview_rect() else {
        return;
    };
    let rect = to_rect(cell, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::SECONDARY))
        .padding(Padding::horizontal(1));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let Some(card) = model.previewed_card() else {
        frame.render_widget(
            Paragraph::new(Span::styled(NO_PREVIEW, theme::subtle())),
            inner,
        );
        return;
    };

    let (name, color) = category_of(model, card);
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                card.title.as_str(),
                theme::title().add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(name, theme::category(&color)),
        ]),
        Line::raw(""),
    ];

    let body: Vec<&str> = card.content.lines().collect();
    let total = body.len();
    let room = (inner.height as usize).saturating_sub(lines.len());
    let start = model.nav.preview_scroll.min(total.saturating_sub(1));
    let fits = total.saturating_sub(start) <= room;
    let shown = if fits { room } else { room.saturating_sub(1) };
    let end = (start + shown).min(total);

    lines.extend(
        body[start..end]
            .iter()
            .map(|l| Line::from(Span::styled(*l, Style::default().fg(theme::TEXT)))),
    );

    let mut info = Vec::new();
    if start > 0 {
        info.push(format!("▲ (line {}/{})", start + 1, total));
    }
    if end < total {
        info.push("▼ (Shift+↑↓ to scroll)".to_string());
    }
    if !info.is_empty() {
        lines.push(Line::from(Span::styled(info.join(" "), theme::subtle())));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

// ============================================================================
// Helpers
// ============================================================================

/// Category name and colour for a card, empty when it has none
pub(super) fn category_of(model: &AppModel, card: &Card) -> (String, String) {
    model
        .categories
        .for_card(card)
        .map(|c| (c.name.clone(), c.color.clone()))
        .unwrap_or_default()
}

/// Keep only the background of `style`
fn bg_only(style: Style) -> Style {
    match style.bg {
        Some(bg) => Style::default().bg(bg),
        None => Style::default(),
    }
}
