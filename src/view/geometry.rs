//! Centralized geometry helpers for rendering and hit-testing
//!
//! This module provides a single source of truth for layout calculations
//! and coordinate transformations shared between the view (rendering) and
//! runtime (input handling) layers. The sizes match the constants in
//! `albert::model` so the editor viewport and the drawn text area agree.
//!
//! All functions here are pure and can be tested without a terminal.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthChar;

use albert::model::{
    AppModel, INFO_BAR_HEIGHT, LINE_NUMBER_GUTTER_CHARS, SIDEBAR_BUTTON_ROWS, SIDEBAR_WIDTH,
};

/// Tab characters are drawn as this many cells
pub const TAB_WIDTH: usize = 4;

/// Screen areas of the main window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Rect,
    /// One row per sidebar button, top to bottom
    pub buttons: Vec<Rect>,
    /// File tree block, including its top border
    pub tree_block: Rect,
    /// File tree rows
    pub tree: Rect,
    pub gutter: Rect,
    pub text: Rect,
    pub info_bar: Rect,
}

/// Compute the layout for a terminal of the given area
pub fn app_layout(area: Rect) -> AppLayout {
    let body_height = area.height.saturating_sub(INFO_BAR_HEIGHT);
    let sidebar_width = SIDEBAR_WIDTH.min(area.width);

    let sidebar = Rect::new(area.x, area.y, sidebar_width, body_height);
    let button_rows = SIDEBAR_BUTTON_ROWS.min(body_height);
    let buttons = (0..button_rows)
        .map(|i| Rect::new(sidebar.x, sidebar.y + i, sidebar.width, 1))
        .collect();

    let tree_block = Rect::new(
        sidebar.x,
        sidebar.y + button_rows,
        sidebar.width,
        body_height - button_rows,
    );
    let tree = Rect::new(
        tree_block.x,
        tree_block.y + 1.min(tree_block.height),
        tree_block.width,
        tree_block.height.saturating_sub(1),
    );

    let editor_x = area.x + sidebar_width;
    let editor_width = area.width - sidebar_width;
    let gutter_width = (LINE_NUMBER_GUTTER_CHARS + 1).min(editor_width);
    let gutter = Rect::new(editor_x, area.y, gutter_width, body_height);
    let text = Rect::new(
        editor_x + gutter_width,
        area.y,
        editor_width - gutter_width,
        body_height,
    );

    let info_bar = Rect::new(
        area.x,
        area.y + body_height,
        area.width,
        area.height - body_height,
    );

    AppLayout {
        sidebar,
        buttons,
        tree_block,
        tree,
        gutter,
        text,
        info_bar,
    }
}

/// Layout for the model's current window size
pub fn layout_for(model: &AppModel) -> AppLayout {
    let (width, height) = model.window_size;
    app_layout(Rect::new(0, 0, width, height))
}

/// Whether a cell lies inside `rect`
pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Cells taken by one character; wide glyphs take two, control chars none
#[inline]
pub fn char_cells(ch: char) -> usize {
    if ch == '\t' {
        TAB_WIDTH
    } else {
        ch.width().unwrap_or(0)
    }
}

/// Expand tab characters to spaces for display
pub fn expand_tabs_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\t' {
            result.push_str(&" ".repeat(TAB_WIDTH));
        } else {
            result.push(ch);
        }
    }
    result
}

/// Screen cells between `from_col` and `to_col` (char columns) of `line`
pub fn visual_width(line: &str, from_col: usize, to_col: usize) -> usize {
    line.chars()
        .skip(from_col)
        .take(to_col.saturating_sub(from_col))
        .map(char_cells)
        .sum()
}

/// Char column under screen offset `cells`, counting from char column `from_col`
pub fn column_at_cells(line: &str, from_col: usize, cells: usize) -> usize {
    let mut used = 0;
    let mut column = from_col;
    for ch in line.chars().skip(from_col) {
        let width = char_cells(ch);
        if used + width > cells {
            break;
        }
        used += width;
        column += 1;
    }
    column
}

/// Rect of `width` x `height` centered in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
