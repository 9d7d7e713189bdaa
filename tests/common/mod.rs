//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use albert::config::{DialogMode, EditorConfig};
use albert::messages::{ModalMsg, Msg};
use albert::model::{AppModel, Document, ModalState, NotificationLevel};
use albert::update::update;

/// Config that never asks for native dialogs
pub fn prompt_config() -> EditorConfig {
    EditorConfig {
        dialogs: DialogMode::Prompt,
        ..EditorConfig::default()
    }
}

/// Create a test model with given text and cursor position
pub fn test_model(text: &str, line: usize, column: usize) -> AppModel {
    let mut model = AppModel::new(100, 30, prompt_config(), None);
    model.document = Document::with_text(text);
    model.editor.cursor.line = line;
    model.editor.cursor.column = column;
    model
}

/// Model with `root` opened as workspace
pub fn workspace_model(root: &Path) -> AppModel {
    AppModel::new(100, 30, prompt_config(), Some(root.to_path_buf()))
}

/// Write `content` to `dir/relative`, creating parent folders
pub fn write_file(dir: &Path, relative: &str, content: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// Type `text` into the active prompt
pub fn type_into_prompt(model: &mut AppModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::modal(ModalMsg::InsertChar(ch)));
    }
}

/// Replace the active prompt's input with `text`
pub fn set_prompt_input(model: &mut AppModel, text: &str) {
    match &mut model.ui.active_modal {
        Some(ModalState::Prompt(prompt)) => prompt.input = text.to_string(),
        other => panic!("expected a prompt, got {:?}", other),
    }
}

/// Title of the active prompt
pub fn prompt_title(model: &AppModel) -> String {
    match &model.ui.active_modal {
        Some(ModalState::Prompt(prompt)) => prompt.title.clone(),
        other => panic!("expected a prompt, got {:?}", other),
    }
}

/// Title, body and level of the active notification
pub fn notification(model: &AppModel) -> (String, String, NotificationLevel) {
    match &model.ui.active_modal {
        Some(ModalState::Notification(note)) => (note.title.clone(), note.body.clone(), note.level),
        other => panic!("expected a notification, got {:?}", other),
    }
}

/// Sorted names of the children of the node at `path`
pub fn child_names(model: &AppModel, path: &Path) -> Vec<String> {
    let workspace = model.workspace.as_ref().expect("workspace open");
    let node = workspace.tree.find(path).expect("node in tree");
    let mut names: Vec<String> = node.children.iter().map(|c| c.name.clone()).collect();
    names.sort();
    names
}
