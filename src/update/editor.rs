//! Editor update functions for cursor movement and viewport scrolling.

use crate::commands::Cmd;
use crate::messages::{Direction, EditorMsg};
use crate::model::AppModel;

/// Handle editor messages (cursor movement, viewport scrolling)
pub fn update_editor(model: &mut AppModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor(direction) => {
            match direction {
                Direction::Up => move_vertical(model, -1),
                Direction::Down => move_vertical(model, 1),
                Direction::Left => move_left(model),
                Direction::Right => move_right(model),
            }
            model.ensure_cursor_visible();
        }

        EditorMsg::MoveCursorLineStart => {
            model.editor.cursor.column = 0;
            model.editor.cursor.clear_desired_column();
            model.ensure_cursor_visible();
        }

        EditorMsg::MoveCursorLineEnd => {
            model.editor.cursor.column = model.current_line_length();
            model.editor.cursor.clear_desired_column();
            model.ensure_cursor_visible();
        }

        EditorMsg::MoveCursorDocumentStart => {
            model.set_cursor_from_offset(0);
            model.ensure_cursor_visible();
        }

        EditorMsg::MoveCursorDocumentEnd => {
            let end = model.document.buffer.len_chars();
            model.set_cursor_from_offset(end);
            model.ensure_cursor_visible();
        }

        EditorMsg::PageUp => {
            let page = model.editor.viewport.visible_lines.max(1) as isize;
            move_vertical(model, -page);
            model.ensure_cursor_visible();
        }

        EditorMsg::PageDown => {
            let page = model.editor.viewport.visible_lines.max(1) as isize;
            move_vertical(model, page);
            model.ensure_cursor_visible();
        }

        EditorMsg::SetCursorPosition { line, column } => {
            model.editor.cursor.line = line;
            model.editor.cursor.column = column;
            model.editor.cursor.clear_desired_column();
            model.editor.clamp_to(&model.document);
            model.ensure_cursor_visible();
        }

        EditorMsg::Scroll(delta) => {
            let viewport = &mut model.editor.viewport;
            let max_top = model
                .document
                .line_count()
                .saturating_sub(viewport.visible_lines);
            let top = viewport.top_line as i64 + delta as i64;
            viewport.top_line = top.clamp(0, max_top as i64) as usize;
        }
    }

    Some(Cmd::Redraw)
}

fn move_left(model: &mut AppModel) {
    let cursor = &mut model.editor.cursor;
    if cursor.column > 0 {
        cursor.column -= 1;
    } else if cursor.line > 0 {
        cursor.line -= 1;
        cursor.column = model.document.line_length(cursor.line);
    }
    cursor.clear_desired_column();
}

fn move_right(model: &mut AppModel) {
    let line_len = model.current_line_length();
    let last_line = model.document.line_count().saturating_sub(1);
    let cursor = &mut model.editor.cursor;
    if cursor.column < line_len {
        cursor.column += 1;
    } else if cursor.line < last_line {
        cursor.line += 1;
        cursor.column = 0;
    }
    cursor.clear_desired_column();
}

/// Move by `delta` lines, keeping the desired column across short lines
fn move_vertical(model: &mut AppModel, delta: isize) {
    let last_line = model.document.line_count().saturating_sub(1) as isize;
    let cursor = &mut model.editor.cursor;
    let target = (cursor.line as isize + delta).clamp(0, last_line) as usize;
    if target == cursor.line {
        return;
    }
    cursor.remember_column();
    let desired = cursor.desired_column.unwrap_or(cursor.column);
    cursor.line = target;
    cursor.column = desired.min(model.document.line_length(target));
}
