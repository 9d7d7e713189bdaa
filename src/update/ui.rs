//! UI update functions (focus, modals)

use crate::commands::Cmd;
use crate::messages::{ModalMsg, UiMsg, WorkspaceMsg};
use crate::model::{AppModel, ContextAction, FocusTarget, ModalState};

use super::app::prompt_confirmed;
use super::workspace::update_workspace;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::FocusEditor => {
            model.ui.focus = FocusTarget::Editor;
            Some(Cmd::Redraw)
        }

        UiMsg::Modal(msg) => update_modal(model, msg),
    }
}

/// Handle modal messages
fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    match msg {
        ModalMsg::Close => {
            model.ui.close_modal();
            return Some(Cmd::Redraw);
        }
        ModalMsg::Confirm => return confirm_modal(model),
        _ => {}
    }

    match (model.ui.active_modal.as_mut()?, msg) {
        (ModalState::Prompt(prompt), ModalMsg::InsertChar(ch)) => prompt.input.push(ch),
        (ModalState::Prompt(prompt), ModalMsg::DeleteBackward) => {
            prompt.input.pop();
        }

        (ModalState::Notification(note), ModalMsg::SelectPrevious) => {
            note.scroll = note.scroll.saturating_sub(1);
        }
        (ModalState::Notification(note), ModalMsg::SelectNext) => {
            let last = note.body.lines().count().saturating_sub(1);
            note.scroll = (note.scroll + 1).min(last);
        }

        (ModalState::ContextMenu(menu), ModalMsg::SelectPrevious) => {
            let len = ContextAction::ALL.len();
            menu.selected_index = (menu.selected_index + len - 1) % len;
        }
        (ModalState::ContextMenu(menu), ModalMsg::SelectNext) => {
            menu.selected_index = (menu.selected_index + 1) % ContextAction::ALL.len();
        }

        // Keys that mean nothing to the active modal
        _ => return None,
    }
    Some(Cmd::Redraw)
}

/// Enter on the active modal: it closes, then its action runs
fn confirm_modal(model: &mut AppModel) -> Option<Cmd> {
    match model.ui.active_modal.take()? {
        ModalState::Prompt(prompt) => prompt_confirmed(model, prompt.purpose, prompt.input),
        ModalState::Notification(_) => Some(Cmd::Redraw),
        ModalState::ContextMenu(menu) => {
            let action = menu.selected_action();
            let target = menu.target;
            let msg = match action {
                ContextAction::Open => WorkspaceMsg::OpenFile(target),
                ContextAction::CopyPath => WorkspaceMsg::CopyPath(target),
                ContextAction::Properties => WorkspaceMsg::ShowProperties(target),
            };
            update_workspace(model, msg).or(Some(Cmd::Redraw))
        }
    }
}
