//! Shared helper functions for the view layer.

use ratatui::style::Color as TuiColor;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use albert::theme::Color;

/// Convert a theme color to a terminal color
#[inline]
pub fn tui_color(color: Color) -> TuiColor {
    TuiColor::Rgb(color.r, color.g, color.b)
}

/// Cut `text` to at most `width` cells, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let cells = ch.width().unwrap_or(0);
        if used + cells > width - 1 {
            break;
        }
        used += cells;
        out.push(ch);
    }
    out.push('…');
    out
}
