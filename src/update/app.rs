//! App message handlers (commands, file operations, side-effect results)
//!
//! Multi-step actions are chains of modals: each step opens the next prompt
//! or path choice, and the last step does the work. Path choices go through
//! a native dialog when configured, with a typed prompt as the fallback.

use std::path::{Path, PathBuf};

use crate::commands::{Cmd, CommandId, ProcessAction};
use crate::config::DialogMode;
use crate::messages::AppMsg;
use crate::model::{AppModel, DialogRequest, FocusTarget, PromptPurpose, PromptState};
use crate::util::{create_folder, create_new_file};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::ExecuteCommand(id) => execute_command(model, id),

        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::DialogResult { request, path } => match path {
            Some(path) => path_chosen(model, request, path),
            None => {
                model.ui.set_status("Cancelled");
                Some(Cmd::Redraw)
            }
        },

        AppMsg::DialogUnavailable(request) => {
            tracing::info!("No native dialog for {:?}, using a prompt", request);
            open_path_prompt(model, request);
            Some(Cmd::Redraw)
        }

        AppMsg::ProcessFinished { action, result } => {
            match result {
                Ok(output) => {
                    let body = if output.trim().is_empty() {
                        "(no output)".to_string()
                    } else {
                        output
                    };
                    model.ui.notify(action.output_title(), body);
                    model.ui.set_status("Done");
                }
                Err(e) => {
                    tracing::error!("{:?} failed: {}", action, e);
                    model.ui.notify_error(action.error_title(), e.details());
                    model.ui.set_status(e.to_string());
                }
            }
            Some(Cmd::Redraw)
        }
    }
}

/// Run a command from the registry
pub fn execute_command(model: &mut AppModel, id: CommandId) -> Option<Cmd> {
    tracing::debug!("Executing command {:?}", id);

    match id {
        CommandId::OpenFolder => request_path(model, DialogRequest::OpenFolder),

        CommandId::NewFile => {
            model.ui.open_prompt(PromptState::new(
                PromptPurpose::NewFileName,
                "Create a file",
                "Enter a file name:",
            ));
            Some(Cmd::Redraw)
        }

        CommandId::NewFolder => request_path(model, DialogRequest::NewFolderParent),

        CommandId::SaveFile => match model.document.file_path.clone() {
            Some(path) => save_document(model, path),
            None => request_path(model, DialogRequest::SaveFileAs),
        },

        CommandId::SaveFileAs => request_path(model, DialogRequest::SaveFileAs),

        CommandId::RunCode => {
            let Some(path) = model.document.file_path.clone() else {
                model.ui.set_status("No file to run - save the buffer first");
                return Some(Cmd::Redraw);
            };
            // The child runs inside the file's folder, so a relative path would resolve twice
            let path = std::path::absolute(&path).unwrap_or(path);
            let mut request = model.config.interpreter.request_with(path.as_os_str());
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                request = request.current_dir(dir);
            }
            model.ui.set_status(format!("Running {}", request.display()));
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::RunProcess {
                    action: ProcessAction::Run,
                    request,
                },
            ]))
        }

        CommandId::InstallPackage => {
            model.ui.open_prompt(PromptState::new(
                PromptPurpose::PackageName,
                "Install Package",
                "Enter package name:",
            ));
            Some(Cmd::Redraw)
        }

        CommandId::OpenDocs => {
            let url = model.config.docs_url.clone();
            model.ui.set_status(format!("Opening {}", url));
            Some(Cmd::batch(vec![Cmd::OpenUrl(url), Cmd::Redraw]))
        }

        CommandId::ToggleFocus => {
            model.ui.focus = match model.ui.focus {
                FocusTarget::Editor if model.workspace.is_some() => FocusTarget::Sidebar,
                FocusTarget::Editor => {
                    model.ui.set_status("Open a folder first");
                    FocusTarget::Editor
                }
                FocusTarget::Sidebar => FocusTarget::Editor,
            };
            Some(Cmd::Redraw)
        }

        CommandId::Quit => Some(Cmd::Quit),
    }
}

/// Ask for a path: native dialog or typed prompt, per config
pub(super) fn request_path(model: &mut AppModel, request: DialogRequest) -> Option<Cmd> {
    match model.config.dialogs {
        DialogMode::Native => Some(Cmd::ShowDialog(request)),
        DialogMode::Prompt => {
            open_path_prompt(model, request);
            Some(Cmd::Redraw)
        }
    }
}

fn open_path_prompt(model: &mut AppModel, request: DialogRequest) {
    let base = model
        .workspace
        .as_ref()
        .map(|ws| ws.root.clone())
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_default();

    let (label, initial) = match &request {
        DialogRequest::OpenFolder => ("Folder path:", base),
        DialogRequest::SaveFileAs => (
            "File path:",
            model
                .document
                .file_path
                .clone()
                .unwrap_or_else(|| base.join("untitled.py")),
        ),
        DialogRequest::NewFileDirectory { .. } => (
            "Directory:",
            model
                .workspace
                .as_ref()
                .map(|ws| ws.selected_directory())
                .unwrap_or(base),
        ),
        DialogRequest::NewFolderParent => ("Parent folder:", base),
    };

    let title = request.title();
    model.ui.open_prompt(
        PromptState::new(PromptPurpose::Dialog(request), title, label)
            .with_input(initial.to_string_lossy()),
    );
}

/// The last step of every path choice
pub(super) fn path_chosen(model: &mut AppModel, request: DialogRequest, path: PathBuf) -> Option<Cmd> {
    match request {
        DialogRequest::OpenFolder => {
            if let Err(e) = model.open_workspace(&path) {
                tracing::error!("Open folder failed: {}", e);
                model.ui.notify_error(e.title(), e.details());
            }
            Some(Cmd::Redraw)
        }

        DialogRequest::SaveFileAs => save_document(model, path),

        DialogRequest::NewFileDirectory { name, extension } => {
            match create_new_file(&path, &name, &extension) {
                Ok(created) => {
                    model.ui.set_status(format!("Created {}", created.display()));
                    reload_after_create(model, &path);
                }
                Err(e) => {
                    tracing::error!("New file failed: {}", e);
                    model.ui.notify_error(e.title(), e.details());
                }
            }
            Some(Cmd::Redraw)
        }

        DialogRequest::NewFolderParent => {
            model.ui.open_prompt(PromptState::new(
                PromptPurpose::NewFolderName { parent: path },
                "New Folder",
                "Enter folder name:",
            ));
            Some(Cmd::Redraw)
        }
    }
}

/// A prompt was confirmed with `input`
pub(super) fn prompt_confirmed(
    model: &mut AppModel,
    purpose: PromptPurpose,
    input: String,
) -> Option<Cmd> {
    match purpose {
        PromptPurpose::Dialog(request) => {
            let typed = input.trim();
            if typed.is_empty() {
                model.ui.set_status("Cancelled");
                return Some(Cmd::Redraw);
            }
            path_chosen(model, request, PathBuf::from(typed))
        }

        PromptPurpose::NewFileName => {
            let name = input.trim();
            if name.is_empty() {
                model.ui.set_status("File name is empty");
                return Some(Cmd::Redraw);
            }
            model.ui.open_prompt(PromptState::new(
                PromptPurpose::NewFileExtension {
                    name: name.to_string(),
                },
                "Create a file",
                "Extension of the file:",
            ));
            Some(Cmd::Redraw)
        }

        PromptPurpose::NewFileExtension { name } => request_path(
            model,
            DialogRequest::NewFileDirectory {
                name,
                extension: input.trim().to_string(),
            },
        ),

        PromptPurpose::NewFolderName { parent } => {
            match create_folder(&parent, input.trim()) {
                Ok(created) => {
                    model.ui.set_status(format!("Created {}", created.display()));
                    reload_after_create(model, &parent);
                }
                Err(e) => {
                    tracing::error!("New folder failed: {}", e);
                    model.ui.notify_error(e.title(), e.details());
                }
            }
            Some(Cmd::Redraw)
        }

        PromptPurpose::PackageName => {
            let package = input.trim();
            if package.is_empty() {
                return Some(Cmd::Redraw);
            }
            let mut request = model.config.package_manager.request_with(package);
            if let Some(workspace) = &model.workspace {
                request = request.current_dir(&workspace.root);
            }
            model.ui.set_status(format!("Running {}", request.display()));
            Some(Cmd::batch(vec![
                Cmd::Redraw,
                Cmd::RunProcess {
                    action: ProcessAction::Install,
                    request,
                },
            ]))
        }
    }
}

fn save_document(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    match model.document.save_to(path) {
        Ok(()) => {
            if let Some(path) = &model.document.file_path {
                tracing::info!("Saved {}", path.display());
                model.ui.set_status(format!("Saved: {}", path.display()));
            }
            // A save-as inside the workspace adds a file to the tree
            let inside_workspace = match (&model.workspace, &model.document.file_path) {
                (Some(ws), Some(path)) => is_inside(path, &ws.root),
                _ => false,
            };
            if inside_workspace {
                if let Err(e) = model.reload_workspace() {
                    tracing::warn!("Reload after save failed: {}", e);
                }
            }
        }
        Err(e) => {
            tracing::error!("Save failed: {}", e);
            model.ui.notify_error(e.title(), e.details());
        }
    }
    Some(Cmd::Redraw)
}

/// Refresh the sidebar after creating something inside `dir`.
///
/// The open workspace is reloaded; without one, `dir` becomes the workspace.
fn reload_after_create(model: &mut AppModel, dir: &Path) {
    let result = if model.workspace.is_some() {
        model.reload_workspace()
    } else {
        model.open_workspace(dir)
    };
    if let Err(e) = result {
        tracing::error!("Refreshing the file tree failed: {}", e);
        model.ui.notify_error(e.title(), e.details());
    }
}

fn is_inside(path: &Path, root: &Path) -> bool {
    let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    path.starts_with(root)
}
