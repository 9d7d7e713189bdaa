//! Text area rendering with line numbers and keyword highlighting
//!
//! Highlighting is recomputed for each visible line on every frame.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use albert::model::{AppModel, FocusTarget};
use albert::syntax::HighlightId;

use super::geometry::{char_cells, expand_tabs_for_display, visual_width, AppLayout};
use super::helpers::tui_color;

pub fn render_editor(model: &AppModel, frame: &mut Frame, layout: &AppLayout) {
    let theme = &model.theme.editor;
    let base = Style::default()
        .fg(tui_color(theme.foreground))
        .bg(tui_color(theme.background));
    let gutter_style = base.fg(tui_color(theme.line_number));
    let current_line = base.bg(tui_color(theme.current_line_background));

    frame.render_widget(Block::default().style(base), layout.gutter);
    frame.render_widget(Block::default().style(base), layout.text);

    let viewport = &model.editor.viewport;
    let cursor = model.editor.cursor;
    let width = layout.text.width as usize;
    let gutter_digits = layout.gutter.width.saturating_sub(1) as usize;

    let mut gutter_lines = Vec::new();
    let mut text_lines = Vec::new();

    for row in 0..layout.text.height as usize {
        let line_idx = viewport.top_line + row;
        let Some(line) = model.document.get_line(line_idx) else {
            break;
        };
        let line_style = if line_idx == cursor.line {
            current_line
        } else {
            base
        };

        gutter_lines.push(Line::styled(
            format!("{:>gutter_digits$} ", line_idx + 1),
            gutter_style,
        ));
        text_lines.push(
            highlighted_line(model, &line, viewport.left_column, width).style(line_style),
        );
    }

    frame.render_widget(Paragraph::new(gutter_lines), layout.gutter);
    frame.render_widget(Paragraph::new(text_lines), layout.text);

    let focused = model.ui.focus == FocusTarget::Editor && !model.ui.has_modal();
    if focused && width > 0 {
        let row = cursor.line.checked_sub(viewport.top_line);
        if let Some(row) = row.filter(|r| *r < layout.text.height as usize) {
            let line = model.document.get_line(cursor.line).unwrap_or_default();
            let x = visual_width(&line, viewport.left_column, cursor.column);
            if x < width {
                frame.set_cursor_position((layout.text.x + x as u16, layout.text.y + row as u16));
            }
        }
    }
}

/// Styled spans for the part of `line` starting at char column `left_column`
fn highlighted_line(model: &AppModel, line: &str, left_column: usize, width: usize) -> Line<'static> {
    let highlights = model.highlighter.highlight_line(line);
    let style_for = |id: Option<HighlightId>| match id {
        Some(id) => Style::default().fg(tui_color(model.theme.highlight_color(id))),
        None => Style::default(),
    };

    let mut spans = Vec::new();
    let mut skip = left_column;
    let mut remaining = width;

    for (text, id) in highlights.segments(line) {
        if remaining == 0 {
            break;
        }
        let mut visible = String::new();
        for ch in text.chars() {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let cells = char_cells(ch);
            if cells > remaining {
                remaining = 0;
                break;
            }
            remaining -= cells;
            visible.push(ch);
        }
        if !visible.is_empty() {
            spans.push(Span::styled(expand_tabs_for_display(&visible), style_for(id)));
        }
    }

    Line::from(spans)
}
