//! Full-screen modes: card detail, category filter and card creation

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::browse::category_of;
use super::chrome::{render_rule, render_status};
use super::{row_rect, theme};
use crate::model::{AppModel, CreateField};
use crate::template::{fill_template, has_template_variables};

/// Lines of the filled template shown under the form
const FILL_PREVIEW_LINES: usize = 3;
/// Lines of new-card content shown before collapsing
const CREATE_CONTENT_LINES: usize = 10;

// ============================================================================
// Detail
// ============================================================================

pub fn render_detail(frame: &mut Frame, area: Rect, model: &AppModel) {
    let Some(card) = model.detail_card() else {
        let line = Span::styled("No card selected. Press Esc to return.", theme::subtle());
        frame.render_widget(Paragraph::new(line), area);
        return;
    };
    let detail = &model.ui.detail;
    let has_template = has_template_variables(&card.content);
    let form_shown = detail.show_form && has_template && !detail.variables.is_empty();

    let (name, color) = category_of(model, card);
    if let Some(rect) = row_rect(area, 0) {
        let header = Line::from(vec![
            Span::styled(
                card.title.as_str(),
                theme::title().add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(name, theme::category(&color)),
        ]);
        frame.render_widget(Paragraph::new(header), rect);
    }
    if let Some(rect) = row_rect(area, 1) {
        render_rule(frame, rect, theme::subtle());
    }

    // Title, rule and blank above; blank and footer below
    let available = (area.height as usize).saturating_sub(5);
    let form_height = if form_shown {
        (7 + detail.variables.len() * 2).min(available / 2)
    } else {
        0
    };
    let content_height = available - form_height;

    let body: Vec<&str> = card.content.lines().collect();
    let total = body.len();
    let mut lines: Vec<Line> = Vec::new();
    if total <= content_height {
        lines.extend(body.iter().map(|l| Line::raw(*l)));
    } else {
        let shown = content_height.saturating_sub(2).max(1);
        let start = model.nav.detail_scroll.min(total - shown);
        let end = start + shown;
        lines.extend(body[start..end].iter().map(|l| Line::raw(*l)));

        let mut info = Vec::new();
        if start > 0 {
            info.push(format!("▲ Line {}/{}", start + 1, total));
        }
        if end < total {
            info.push("▼ Scroll with ↑↓".to_string());
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(info.join(" "), theme::subtle())));
    }

    if form_shown {
        while lines.len() < content_height {
            lines.push(Line::raw(""));
        }
        lines.extend(template_form(model, &card.content));
    }

    let body_rect = Rect::new(
        area.x,
        area.y.saturating_add(3),
        area.width,
        available.min(u16::MAX as usize) as u16,
    )
    .intersection(area);
    frame.render_widget(Paragraph::new(lines), body_rect);

    let hints: &[(&str, &str)] = if form_shown {
        &[
            ("Tab", "next field"),
            ("Enter", "copy filled"),
            ("Ctrl+T", "hide form"),
            ("Esc", "back"),
        ]
    } else if has_template {
        &[("t", "template form"), ("c", "copy"), ("Esc", "back")]
    } else {
        &[("c", "copy"), ("Esc", "back")]
    };
    if let Some(rect) = row_rect(area, (area.bottom() as usize).saturating_sub(1)) {
        render_status(frame, rect, model, hints);
    }
}

fn template_form<'a>(model: &'a AppModel, content: &str) -> Vec<Line<'a>> {
    let detail = &model.ui.detail;
    let mut lines = vec![
        Line::from(Span::styled("Template Variables:", theme::highlight())),
        Line::raw(""),
    ];

    for (i, name) in detail.variables.iter().enumerate() {
        let active = i == detail.current_field;
        let value = detail.value_of(name);
        if active {
            lines.push(Line::from(Span::styled(
                format!("→ {}:", name),
                theme::highlight(),
            )));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(format!("{}█", value), theme::selected()),
            ]));
        } else {
            lines.push(Line::raw(format!("  {}:", name)));
            let value = if value.is_empty() {
                Span::styled("(enter value)", theme::subtle())
            } else {
                Span::raw(value)
            };
            lines.push(Line::from(vec![Span::raw("  "), value]));
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Preview:", theme::highlight())));
    let filled = fill_template(content, &detail.values);
    let filled_lines: Vec<&str> = filled.lines().collect();
    for line in filled_lines.iter().take(FILL_PREVIEW_LINES) {
        lines.push(Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(theme::TEXT),
        )));
    }
    if filled_lines.len() > FILL_PREVIEW_LINES {
        lines.push(Line::from(Span::styled("...", theme::subtle())));
    }
    lines
}

// ============================================================================
// Category filter
// ============================================================================

pub fn render_filter(frame: &mut Frame, area: Rect, model: &AppModel) {
    let active = model.ui.selected_categories.len();
    let mut lines = vec![
        Line::from(Span::styled("Filter by Category", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(
            "↑↓: Navigate  Space/Enter: Toggle  A: All  C: Clear  Esc: Back",
            theme::subtle(),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("Active filters: {}", active),
            if active > 0 {
                theme::highlight()
            } else {
                theme::subtle()
            },
        )),
        Line::raw(""),
    ];

    let categories = model.listed_categories();
    if categories.is_empty() {
        lines.push(Line::from(Span::styled("No categories", theme::subtle())));
    }

    // Keep the cursor on screen when the list is longer than the terminal
    let room = (area.height as usize).saturating_sub(lines.len() + 1).max(1);
    let cursor = model.ui.filter.cursor;
    let start = (cursor + 1).saturating_sub(room);

    for (i, category) in categories.iter().enumerate().skip(start).take(room) {
        let checked = model.ui.selected_categories.contains(&category.id);
        let checkbox = if checked { "[✓]" } else { "[ ]" };
        let name = Span::styled(category.name.as_str(), theme::category(&category.color));
        let line = if i == cursor {
            Line::from(vec![
                Span::styled("> ", theme::selected()),
                Span::styled(format!("{} ", checkbox), theme::selected()),
                name,
            ])
        } else {
            Line::from(vec![Span::raw(format!("  {} ", checkbox)), name])
        };
        lines.push(line);
    }

    frame.render_widget(Paragraph::new(lines), inset(area));
    if let Some(rect) = row_rect(area, (area.bottom() as usize).saturating_sub(1)) {
        render_status(frame, rect, model, &[("q", "quit"), ("?", "help")]);
    }
}

// ============================================================================
// Card creation
// ============================================================================

pub fn render_create(frame: &mut Frame, area: Rect, model: &AppModel) {
    let form = &model.ui.create;
    let mut lines = vec![
        Line::from(Span::styled("Create New Card", theme::title())),
        Line::raw(""),
        Line::from(Span::styled(
            "Tab: Next field  Ctrl+S: Save  Esc: Cancel",
            theme::subtle(),
        )),
        Line::raw(""),
    ];

    lines.push(field_label("Title:", form.field == CreateField::Title));
    lines.push(field_value(&form.title, "(enter title)", form.field == CreateField::Title));
    lines.push(Line::raw(""));

    let on_content = form.field == CreateField::Content;
    lines.push(field_label("Content:", on_content));
    if form.content.is_empty() {
        lines.push(field_value("", "(enter content)", on_content));
    } else {
        let content_lines: Vec<&str> = form.content.split('\n').collect();
        let last = content_lines.len() - 1;
        for (i, line) in content_lines.iter().enumerate() {
            if i >= CREATE_CONTENT_LINES {
                lines.push(Line::from(Span::styled(
                    format!("  ... ({} more lines)", content_lines.len() - CREATE_CONTENT_LINES),
                    theme::subtle(),
                )));
                break;
            }
            let cursor = on_content && i == last;
            lines.push(field_value(line, "", cursor));
        }
    }
    lines.push(Line::raw(""));

    let on_category = form.field == CreateField::Category;
    lines.push(field_label("Category:", on_category));
    let categories = model.listed_categories();
    match categories.get(form.category) {
        Some(category) => {
            let mut spans = vec![
                Span::raw("  "),
                Span::styled(category.name.as_str(), theme::category(&category.color)),
            ];
            if on_category {
                spans.push(Span::styled(" (↑↓ to change)", theme::selected()));
            }
            lines.push(Line::from(spans));
        }
        None => lines.push(Line::from(Span::styled(
            "  (no category selected)",
            theme::subtle(),
        ))),
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw(""));

    let ready = !form.title.trim().is_empty() && !form.content.trim().is_empty();
    lines.push(if ready {
        Line::from(Span::styled("✓ Ready to save! Press Ctrl+S", theme::highlight()))
    } else {
        Line::from(Span::styled("⚠ Title and content are required", theme::error()))
    });

    frame.render_widget(Paragraph::new(lines), inset(area));
    if let Some(rect) = row_rect(area, (area.bottom() as usize).saturating_sub(1)) {
        render_status(frame, rect, model, &[("Ctrl+S", "save"), ("Esc", "cancel")]);
    }
}

fn field_label(label: &str, active: bool) -> Line<'static> {
    if active {
        Line::from(Span::styled(format!("→ {}", label), theme::highlight()))
    } else {
        Line::raw(label.to_string())
    }
}

fn field_value(value: &str, placeholder: &str, active: bool) -> Line<'static> {
    if active {
        return Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{}█", value), theme::selected()),
        ]);
    }
    if value.is_empty() {
        return Line::from(Span::styled(format!("  {}", placeholder), theme::subtle()));
    }
    Line::raw(format!("  {}", value))
}

/// Two columns of left margin, leaving the status row free
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(2),
        area.y,
        area.width.saturating_sub(2),
        area.height.saturating_sub(1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::{Card, CardData, ViewMode};
    use crate::template::extract_variables;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn screen(model: &AppModel) -> String {
        let backend = TestBackend::new(model.nav.width as u16, model.nav.height as u16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| super::super::render(f, model)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn detail_model(content: &str) -> AppModel {
        let mut model = AppModel::new(AppConfig::default(), 80, 30);
        model.ui.is_loading = false;
        model.apply_data(CardData {
            cards: vec![Card::new("Deploy", content, "")],
            ..CardData::default()
        });
        let id = model.data.cards[0].id.clone();
        model.ui.detail.open(id, extract_variables(content));
        model.nav.set_mode(ViewMode::Detail);
        model
    }

    #[test]
    fn test_detail_shows_filled_preview() {
        let mut m = detail_model("ssh {{host}} -p {{port|22}}");
        m.ui.detail.values.insert("host".into(), "box".into());
        let out = screen(&m);
        assert!(out.contains("Template Variables:"));
        assert!(out.contains("ssh box -p 22"));
    }

    #[test]
    fn test_detail_scroll_indicator() {
        let content = (0..100).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
        let mut m = detail_model(&content);
        m.nav.detail_scroll = 10;
        let out = screen(&m);
        assert!(out.contains("line 10"));
        assert!(!out.contains("line 9 "));
        assert!(out.contains("▲ Line 11/100"));
    }

    #[test]
    fn test_create_shows_validation_hint() {
        let mut m = detail_model("x");
        m.nav.set_mode(ViewMode::CardCreate);
        assert!(screen(&m).contains("Title and content are required"));
        m.ui.create.title = "T".into();
        m.ui.create.content = "C".into();
        assert!(screen(&m).contains("Ready to save"));
    }
}
