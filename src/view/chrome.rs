//! Header, footer, help overlay and the whole-screen states

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};
use ratatui::Frame;

use super::geometry::ScreenLayout;
use super::theme;
use super::{row_rect, text};
use crate::model::{AppModel, ViewMode};

/// Below this width the header shows only a filter count
const NARROW_HEADER: usize = 80;

pub fn render_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new(Span::styled("Loading cards...", theme::subtle()));
    frame.render_widget(loading, area);
}

pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let lines = vec![
        Line::from(Span::styled(format!("Error: {}", error), theme::error())),
        Line::raw(""),
        Line::from(Span::styled("Press q to quit.", theme::subtle())),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Title, active filters, counts and the search query; then a rule
pub fn render_header(frame: &mut Frame, area: Rect, model: &AppModel) {
    let mut spans = vec![Span::styled("CellBlocks", theme::title())];

    if let Some(filters) = filter_summary(model) {
        spans.push(Span::styled(format!(" {}", filters), theme::highlight()));
    }
    spans.push(Span::styled(
        format!(" [{}/{}]", model.visible_len(), model.data.cards.len()),
        theme::subtle(),
    ));
    if !model.ui.search_query.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("/{}█", model.ui.search_query),
            theme::highlight(),
        ));
    }

    if let Some(rect) = row_rect(area, 0) {
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
        let mode = Paragraph::new(Span::styled(model.nav.mode.label(), theme::subtle()))
            .alignment(Alignment::Right);
        frame.render_widget(mode, rect);
    }
    if let Some(rect) = row_rect(area, 1) {
        render_rule(frame, rect, Style::default().fg(theme::PRIMARY));
    }
}

/// "Filters: a, b +N" with names sorted, or just a count when narrow
fn filter_summary(model: &AppModel) -> Option<String> {
    let selected = &model.ui.selected_categories;
    if selected.is_empty() {
        return None;
    }
    if model.nav.width < NARROW_HEADER {
        return Some(format!("Filters: {}", selected.len()));
    }

    let mut names: Vec<&str> = selected
        .iter()
        .filter_map(|id| model.categories.get(id))
        .map(|c| c.name.as_str())
        .collect();
    names.sort_unstable();

    let shown = names.len().min(2);
    let remaining = names.len() - shown;
    let joined = names[..shown].join(", ");
    if remaining > 0 {
        Some(format!("Filters: {} +{}", joined, remaining))
    } else {
        Some(format!("Filters: {}", joined))
    }
}

/// Rule above the status row, then the status row
pub fn render_footer(frame: &mut Frame, area: Rect, model: &AppModel, layout: &ScreenLayout) {
    let bottom = layout.content_bottom();
    if let Some(rect) = row_rect(area, bottom) {
        render_rule(frame, rect, theme::subtle());
    }
    if let Some(rect) = row_rect(area, bottom + 1) {
        render_status(frame, rect, model, browse_hints(model));
    }
}

/// Status row: the transient message when there is one, otherwise `hints`
pub fn render_status(frame: &mut Frame, rect: Rect, model: &AppModel, hints: &[(&str, &str)]) {
    let line = if model.ui.is_saving {
        Line::from(Span::styled(" Saving...", theme::highlight()))
    } else if let Some(message) = &model.ui.transient_message {
        Line::from(Span::styled(format!(" {}", message.text), theme::title()))
    } else {
        hint_line(hints)
    };
    frame.render_widget(Paragraph::new(line), rect);
}

pub fn hint_line(hints: &[(&str, &str)]) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(key.to_string(), theme::highlight()));
        spans.push(Span::styled(format!(" {}", desc), theme::subtle()));
    }
    Line::from(spans)
}

/// Fewer hints as the terminal narrows
fn browse_hints(model: &AppModel) -> &'static [(&'static str, &'static str)] {
    let width = model.nav.width;
    if width < 60 {
        &[("n", "new"), ("f", "filter"), ("?", "help"), ("q", "quit")]
    } else if width < 90 {
        &[
            ("Enter", "view"),
            ("n", "new"),
            ("f", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        match model.nav.mode {
            ViewMode::Grid => &[
                ("↑↓←→", "navigate"),
                ("space", "pin"),
                ("Enter", "view"),
                ("c", "copy"),
                ("n", "new"),
                ("f", "filter"),
                ("g", "table"),
                ("?", "help"),
            ],
            ViewMode::Table => &[
                ("↑↓", "navigate"),
                ("1-4", "sort"),
                ("Enter", "view"),
                ("c", "copy"),
                ("n", "new"),
                ("g", "list"),
                ("?", "help"),
            ],
            _ => &[
                ("↑↓", "navigate"),
                ("Enter", "view"),
                ("c", "copy"),
                ("n", "new"),
                ("f", "filter"),
                ("p", "preview"),
                ("g", "grid"),
                ("?", "help"),
            ],
        }
    }
}

pub fn render_rule(frame: &mut Frame, rect: Rect, style: Style) {
    let rule = "─".repeat(rect.width as usize);
    frame.render_widget(Paragraph::new(Span::styled(rule, style)), rect);
}

const HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/k, ↓/j", "Navigate cards"),
            ("←/h, →/l", "Navigate left/right (grid)"),
            ("Shift+↑/↓", "Scroll preview content"),
            ("PgUp/PgDn", "Scroll by page"),
            ("Home/End", "Jump to first/last"),
        ],
    ),
    (
        "View",
        &[
            ("g", "Cycle list → grid → table"),
            ("p", "Toggle preview pane (side by side when wide)"),
            ("Space", "Pin card to preview (grid)"),
            ("1-4", "Sort table by title/category/created/updated"),
        ],
    ),
    (
        "Actions",
        &[
            ("Enter, d", "Open card in detail view"),
            ("c", "Copy card to clipboard"),
            ("n", "Create new card"),
            ("f", "Filter by category"),
            ("type", "Search titles and content"),
            ("/", "Clear search and filters"),
        ],
    ),
    (
        "Detail View",
        &[
            ("↑/↓, k/j", "Scroll content"),
            ("t, Ctrl+T", "Toggle template form"),
            ("Tab", "Next template field"),
            ("Enter, c", "Copy (filled template if editing)"),
        ],
    ),
    (
        "Mouse",
        &[
            ("Click", "Select and preview"),
            ("Double-click", "Copy card to clipboard"),
            ("Wheel", "Scroll preview or move selection"),
        ],
    ),
    (
        "General",
        &[
            ("?", "Toggle this help"),
            ("Esc", "Close help / go back / clear search"),
            ("q, Ctrl+C", "Quit"),
        ],
    ),
];

/// Centered help box over whatever is on screen
pub fn render_help(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled("CellBlocks - Keyboard Shortcuts", theme::title())),
        Line::raw(""),
    ];
    for (section, entries) in HELP {
        lines.push(Line::from(Span::styled(format!("{}:", section), theme::highlight())));
        for (keys, desc) in *entries {
            lines.push(Line::raw(format!("  {} {}", text::pad_or_truncate(keys, 13), desc)));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled("Press ? or Esc to close", theme::subtle())));

    let content_width = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
    let width = (content_width + 6).min(area.width);
    let height = (lines.len() as u16 + 4).min(area.height);
    let rect = Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::PRIMARY))
        .padding(Padding::new(2, 2, 1, 1));
    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
