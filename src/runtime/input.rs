//! Keyboard and mouse input mapping
//!
//! Turns crossterm events into messages. Nothing here touches the model
//! except to read which pane has focus and where things are drawn.
//!
//! Routing order for keys:
//! - an open modal takes every key
//! - registered key chords (see `albert::commands::COMMANDS`)
//! - the focused pane (sidebar tree or editor)

use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use albert::commands::{command_for_chord, sidebar_buttons, Key, KeyChord};
use albert::messages::{Direction, DocumentMsg, EditorMsg, ModalMsg, Msg, UiMsg, WorkspaceMsg};
use albert::model::{AppModel, FocusTarget, ModalState};

use crate::view::geometry::{column_at_cells, contains, layout_for};

/// Lines scrolled per mouse wheel notch
const WHEEL_LINES: i32 = 3;

/// Map a key press to a message, if it means anything in the current state
pub fn handle_key(model: &AppModel, event: KeyEvent) -> Option<Msg> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    if let Some(modal) = &model.ui.active_modal {
        return modal_key(modal, event).map(Msg::modal);
    }

    if let Some(id) = chord_for(event).and_then(command_for_chord) {
        return Some(Msg::command(id));
    }

    match model.ui.focus {
        FocusTarget::Sidebar => sidebar_key(event),
        FocusTarget::Editor => editor_key(event),
    }
}

/// Backend-independent chord for a key event, if it could be a binding
fn chord_for(event: KeyEvent) -> Option<KeyChord> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let key = match event.code {
        KeyCode::Char(c) if ctrl || alt => Key::Char(c.to_ascii_lowercase()),
        KeyCode::F(n) => Key::F(n),
        _ => return None,
    };
    Some(KeyChord { key, ctrl, alt })
}

fn modal_key(modal: &ModalState, event: KeyEvent) -> Option<ModalMsg> {
    match event.code {
        KeyCode::Esc => return Some(ModalMsg::Close),
        KeyCode::Enter => return Some(ModalMsg::Confirm),
        _ => {}
    }

    match modal {
        ModalState::Prompt(_) => match event.code {
            KeyCode::Backspace => Some(ModalMsg::DeleteBackward),
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ModalMsg::InsertChar(c))
            }
            _ => None,
        },
        ModalState::Notification(_) | ModalState::ContextMenu(_) => match event.code {
            KeyCode::Up => Some(ModalMsg::SelectPrevious),
            KeyCode::Down => Some(ModalMsg::SelectNext),
            _ => None,
        },
    }
}

fn sidebar_key(event: KeyEvent) -> Option<Msg> {
    let msg = match event.code {
        KeyCode::Up => Msg::Workspace(WorkspaceMsg::SelectPrevious),
        KeyCode::Down => Msg::Workspace(WorkspaceMsg::SelectNext),
        KeyCode::Enter => Msg::Workspace(WorkspaceMsg::OpenOrToggle),
        KeyCode::Char('m') => Msg::Workspace(WorkspaceMsg::OpenContextMenu),
        KeyCode::F(10) if event.modifiers.contains(KeyModifiers::SHIFT) => {
            Msg::Workspace(WorkspaceMsg::OpenContextMenu)
        }
        KeyCode::Char('r') => Msg::Workspace(WorkspaceMsg::Reload),
        KeyCode::Esc | KeyCode::Tab => Msg::Ui(UiMsg::FocusEditor),
        _ => return None,
    };
    Some(msg)
}

fn editor_key(event: KeyEvent) -> Option<Msg> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let msg = match event.code {
        KeyCode::Up => Msg::move_cursor(Direction::Up),
        KeyCode::Down => Msg::move_cursor(Direction::Down),
        KeyCode::Left => Msg::move_cursor(Direction::Left),
        KeyCode::Right => Msg::move_cursor(Direction::Right),
        KeyCode::Home if ctrl => Msg::Editor(EditorMsg::MoveCursorDocumentStart),
        KeyCode::End if ctrl => Msg::Editor(EditorMsg::MoveCursorDocumentEnd),
        KeyCode::Home => Msg::Editor(EditorMsg::MoveCursorLineStart),
        KeyCode::End => Msg::Editor(EditorMsg::MoveCursorLineEnd),
        KeyCode::PageUp => Msg::Editor(EditorMsg::PageUp),
        KeyCode::PageDown => Msg::Editor(EditorMsg::PageDown),
        KeyCode::Enter => Msg::Document(DocumentMsg::InsertNewline),
        KeyCode::Backspace => Msg::Document(DocumentMsg::DeleteBackward),
        KeyCode::Delete => Msg::Document(DocumentMsg::DeleteForward),
        KeyCode::Tab => Msg::Document(DocumentMsg::InsertTab),
        KeyCode::Char(c) if !ctrl => Msg::insert_char(c),
        _ => return None,
    };
    Some(msg)
}

/// Map a mouse event to messages
///
/// `double_click` is decided by the caller, which tracks click timing.
pub fn handle_mouse(model: &AppModel, event: MouseEvent, double_click: bool) -> Vec<Msg> {
    if model.ui.has_modal() {
        return Vec::new();
    }

    let layout = layout_for(model);
    let (x, y) = (event.column, event.row);

    match event.kind {
        MouseEventKind::Down(button) => {
            if button == MouseButton::Left {
                let clicked = sidebar_buttons()
                    .zip(&layout.buttons)
                    .find(|(_, rect)| contains(**rect, x, y));
                if let Some((def, _)) = clicked {
                    return vec![Msg::command(def.id)];
                }
            }

            if contains(layout.tree, x, y) {
                return tree_click(model, y - layout.tree.y, button, double_click);
            }

            if button == MouseButton::Left && contains(layout.text, x, y) {
                let viewport = &model.editor.viewport;
                let last_line = model.document.line_count().saturating_sub(1);
                let line = (viewport.top_line + (y - layout.text.y) as usize).min(last_line);
                let text = model.document.get_line(line).unwrap_or_default();
                let column = column_at_cells(&text, viewport.left_column, (x - layout.text.x) as usize);
                return vec![
                    Msg::Ui(UiMsg::FocusEditor),
                    Msg::Editor(EditorMsg::SetCursorPosition { line, column }),
                ];
            }

            Vec::new()
        }
        MouseEventKind::ScrollUp if contains(layout.text, x, y) => {
            vec![Msg::Editor(EditorMsg::Scroll(-WHEEL_LINES))]
        }
        MouseEventKind::ScrollDown if contains(layout.text, x, y) => {
            vec![Msg::Editor(EditorMsg::Scroll(WHEEL_LINES))]
        }
        _ => Vec::new(),
    }
}

fn tree_click(model: &AppModel, row: u16, button: MouseButton, double_click: bool) -> Vec<Msg> {
    let Some(workspace) = &model.workspace else {
        return Vec::new();
    };
    let index = workspace.scroll_offset + row as usize;
    if index >= workspace.visible_item_count() {
        return Vec::new();
    }

    let mut msgs = vec![Msg::Workspace(WorkspaceMsg::SelectRow(index))];
    match button {
        MouseButton::Right => msgs.push(Msg::Workspace(WorkspaceMsg::OpenContextMenu)),
        MouseButton::Left if double_click => msgs.push(Msg::Workspace(WorkspaceMsg::OpenOrToggle)),
        _ => {}
    }
    msgs
}
