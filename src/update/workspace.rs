//! Workspace update functions (file tree navigation and context actions)

use std::path::PathBuf;

use crate::commands::Cmd;
use crate::messages::WorkspaceMsg;
use crate::model::{tree_rows, AppModel, ContextMenuState, FocusTarget, ModalState};
use crate::util::FileProperties;

/// Handle workspace messages
pub fn update_workspace(model: &mut AppModel, msg: WorkspaceMsg) -> Option<Cmd> {
    let rows = tree_rows(model.window_size.1);

    match msg {
        WorkspaceMsg::SelectPrevious | WorkspaceMsg::SelectNext => {
            let delta = if msg == WorkspaceMsg::SelectPrevious {
                -1
            } else {
                1
            };
            let workspace = model.workspace.as_mut()?;
            workspace.select_adjacent(delta);
            workspace.ensure_selection_visible(rows);
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::SelectRow(index) => {
            let workspace = model.workspace.as_mut()?;
            let path = workspace.visible_items().get(index)?.node.path.clone();
            workspace.selected_item = Some(path);
            workspace.ensure_selection_visible(rows);
            model.ui.focus = FocusTarget::Sidebar;
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::OpenOrToggle => {
            let workspace = model.workspace.as_mut()?;
            let node = workspace.selected_node()?;
            let (path, is_dir) = (node.path.clone(), node.is_dir);
            if is_dir {
                workspace.toggle_folder(&path);
                workspace.ensure_selection_visible(rows);
                Some(Cmd::Redraw)
            } else {
                open_file(model, path)
            }
        }

        WorkspaceMsg::OpenFile(path) => open_file(model, path),

        WorkspaceMsg::Reload => {
            if let Err(e) = model.reload_workspace() {
                tracing::error!("Reload failed: {}", e);
                model.ui.notify_error(e.title(), e.details());
            } else {
                model.ui.set_status("Folder reloaded");
            }
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::OpenContextMenu => {
            let target = model.workspace.as_ref()?.selected_node()?.path.clone();
            model.ui.open_modal(ModalState::ContextMenu(ContextMenuState {
                target,
                selected_index: 0,
            }));
            Some(Cmd::Redraw)
        }

        WorkspaceMsg::CopyPath(path) => {
            let text = path.to_string_lossy().into_owned();
            model.ui.set_status(format!("Copied: {}", text));
            Some(Cmd::batch(vec![Cmd::CopyToClipboard(text), Cmd::Redraw]))
        }

        WorkspaceMsg::ShowProperties(path) => {
            match FileProperties::read(&path) {
                Ok(props) => model.ui.notify("File Properties", props.describe()),
                Err(e) => {
                    tracing::warn!("Properties of {}: {}", path.display(), e);
                    model.ui.notify_error(e.title(), e.details());
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Load a file from the tree; directories are ignored
fn open_file(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    if path.is_dir() {
        return None;
    }
    if let Err(e) = model.open_file(&path) {
        tracing::error!("Failed to open {}: {}", path.display(), e);
        model.ui.notify_error(e.title(), e.details());
    }
    Some(Cmd::Redraw)
}
