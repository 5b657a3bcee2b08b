//! Colour palette and shared styles
//!
//! Category colours come from the data file as `#RRGGBB` strings; anything
//! that does not parse falls back to the subtle gray.

use ratatui::style::{Color, Modifier, Style};

pub const PRIMARY: Color = Color::Rgb(0x00, 0xff, 0x41);
pub const SECONDARY: Color = Color::Rgb(0x00, 0xff, 0xff);
pub const ACCENT: Color = Color::Rgb(0xff, 0x00, 0xff);
pub const YELLOW: Color = Color::Rgb(0xff, 0xff, 0x00);
pub const GRAY: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const SELECTION_BG: Color = Color::Rgb(0x1a, 0x1a, 0x1a);
pub const ERROR: Color = Color::Rgb(0xff, 0x00, 0x00);
pub const TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);

/// Parse `#RRGGBB` (leading `#` optional)
pub fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.trim().trim_start_matches('#');
    if s.len() != 6 || !s.is_ascii() {
        return Err(format!("Invalid color format: {}", s));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|e| e.to_string())
    };
    Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Colour for a category, gray when missing or malformed
pub fn category_color(hex: &str) -> Color {
    if hex.is_empty() {
        return GRAY;
    }
    parse_hex(hex).unwrap_or(GRAY)
}

pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn subtle() -> Style {
    Style::default().fg(GRAY)
}

pub fn highlight() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn selected() -> Style {
    Style::default()
        .bg(SELECTION_BG)
        .fg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR).add_modifier(Modifier::BOLD)
}

pub fn category(hex: &str) -> Style {
    Style::default()
        .fg(category_color(hex))
        .add_modifier(Modifier::BOLD)
}
