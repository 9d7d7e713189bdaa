//! Document update functions for text editing

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

const TAB_SPACES: &str = "    ";

/// Handle document messages (text editing)
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::InsertChar(ch) => {
            let mut buf = [0u8; 4];
            insert_text(model, ch.encode_utf8(&mut buf));
        }

        DocumentMsg::InsertNewline => insert_text(model, "\n"),

        DocumentMsg::InsertTab => insert_text(model, TAB_SPACES),

        DocumentMsg::DeleteBackward => {
            let offset = model.cursor_offset();
            if offset == 0 {
                return None;
            }
            // A CRLF pair goes away as one line break
            let start = if offset >= 2 && model.document.buffer.slice(offset - 2..offset) == "\r\n"
            {
                offset - 2
            } else {
                offset - 1
            };
            model.document.remove(start, offset);
            model.set_cursor_from_offset(start);
            model.ensure_cursor_visible();
        }

        DocumentMsg::DeleteForward => {
            let offset = model.cursor_offset();
            let len = model.document.buffer.len_chars();
            if offset >= len {
                return None;
            }
            let end = if offset + 2 <= len && model.document.buffer.slice(offset..offset + 2) == "\r\n"
            {
                offset + 2
            } else {
                offset + 1
            };
            model.document.remove(offset, end);
            model.ensure_cursor_visible();
        }
    }

    Some(Cmd::Redraw)
}

fn insert_text(model: &mut AppModel, text: &str) {
    let offset = model.cursor_offset();
    model.document.insert(offset, text);
    model.set_cursor_from_offset(offset + text.chars().count());
    model.ensure_cursor_visible();
}
