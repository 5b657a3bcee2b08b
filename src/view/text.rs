//! Display-width aware text fitting
//!
//! Widths are terminal columns as reported by `unicode-width`, so wide
//! glyphs and emoji take the space they actually occupy.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

#[inline]
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Longest prefix of `s` that fits in `width` columns
fn take_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// Cut `s` to `width` columns, ending in "..." when something was removed
pub fn truncate(s: &str, width: usize) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }
    if width <= ELLIPSIS.len() {
        return take_width(s, width).to_string();
    }
    format!("{}{}", take_width(s, width - ELLIPSIS.len()), ELLIPSIS)
}

/// Exactly `width` columns: truncated with "..." or padded with spaces
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let mut out = truncate(s, width);
    let used = display_width(&out);
    if used < width {
        out.push_str(&" ".repeat(width - used));
    }
    out
}

/// Greedy word wrap into at most `max_lines` lines of `width` columns
///
/// Words longer than a line are truncated on a line of their own. Text past
/// the last line is dropped.
pub fn wrap_text(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 || max_lines == 0 {
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            display_width(word)
        } else {
            display_width(&current) + 1 + display_width(word)
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if current.is_empty() {
            lines.push(truncate(word, width));
        } else {
            lines.push(std::mem::take(&mut current));
            if display_width(word) > width {
                if lines.len() < max_lines {
                    lines.push(truncate(word, width));
                }
            } else {
                current.push_str(word);
            }
        }
        if lines.len() >= max_lines {
            lines.truncate(max_lines);
            return lines;
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines
}
