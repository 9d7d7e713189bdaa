//! UI state - focus, status line, modals, and other UI concerns

use std::path::PathBuf;

// ============================================================================
// Path choices
// ============================================================================

/// A path the user has to pick, either through a native dialog or a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogRequest {
    /// Folder to open as workspace
    OpenFolder,
    /// Target path for "Save As"
    SaveFileAs,
    /// Directory that receives a new file (name and extension already known)
    NewFileDirectory { name: String, extension: String },
    /// Parent directory of a new folder
    NewFolderParent,
}

impl DialogRequest {
    /// Window title for the dialog
    pub fn title(&self) -> &'static str {
        match self {
            DialogRequest::OpenFolder => "Select Folder",
            DialogRequest::SaveFileAs => "Save File As",
            DialogRequest::NewFileDirectory { .. } => "Select Directory",
            DialogRequest::NewFolderParent => "Select Folder",
        }
    }

    /// True for directory pickers, false for the save-file dialog
    pub fn picks_folder(&self) -> bool {
        !matches!(self, DialogRequest::SaveFileAs)
    }
}

// ============================================================================
// Modal System
// ============================================================================

/// What a prompt's text is used for once confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPurpose {
    /// Typed replacement for a native dialog
    Dialog(DialogRequest),
    /// First step of "New File"
    NewFileName,
    /// Second step of "New File"
    NewFileExtension { name: String },
    /// Name of a new folder inside `parent`
    NewFolderName { parent: PathBuf },
    /// Package for "Install Package"
    PackageName,
}

/// Single-line text input modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    pub purpose: PromptPurpose,
    pub title: String,
    pub label: String,
    pub input: String,
}

impl PromptState {
    pub fn new(purpose: PromptPurpose, title: &str, label: &str) -> Self {
        Self {
            purpose,
            title: title.to_string(),
            label: label.to_string(),
            input: String::new(),
        }
    }

    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = input.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Message box with a scrollable body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationState {
    pub title: String,
    pub body: String,
    pub level: NotificationLevel,
    /// First body line shown
    pub scroll: usize,
}

/// Entries of the file tree context menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    Open,
    CopyPath,
    Properties,
}

impl ContextAction {
    pub const ALL: [ContextAction; 3] = [
        ContextAction::Open,
        ContextAction::CopyPath,
        ContextAction::Properties,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ContextAction::Open => "Open",
            ContextAction::CopyPath => "Copy Path",
            ContextAction::Properties => "File Properties",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMenuState {
    /// Tree entry the menu was opened on
    pub target: PathBuf,
    pub selected_index: usize,
}

impl ContextMenuState {
    pub fn selected_action(&self) -> ContextAction {
        ContextAction::ALL[self.selected_index.min(ContextAction::ALL.len() - 1)]
    }
}

/// Union of all modal states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Prompt(PromptState),
    Notification(NotificationState),
    ContextMenu(ContextMenuState),
}

// ============================================================================
// UI State
// ============================================================================

/// Which pane receives keyboard input when no modal is open
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusTarget {
    Sidebar,
    #[default]
    Editor,
}

/// UI state - focus, status message and the active modal
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Transient message shown next to the language in the info bar
    pub status_message: String,
    pub focus: FocusTarget,
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::default()
        }
    }

    /// Check if a modal is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    pub fn open_prompt(&mut self, prompt: PromptState) {
        self.open_modal(ModalState::Prompt(prompt));
    }

    /// Show an information message box
    pub fn notify(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.open_notification(title.into(), body.into(), NotificationLevel::Info);
    }

    /// Show an error message box
    pub fn notify_error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.open_notification(title.into(), body.into(), NotificationLevel::Error);
    }

    fn open_notification(&mut self, title: String, body: String, level: NotificationLevel) {
        self.open_modal(ModalState::Notification(NotificationState {
            title,
            body,
            level,
            scroll: 0,
        }));
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_replaces_modal() {
        let mut ui = UiState::new();
        ui.open_prompt(PromptState::new(
            PromptPurpose::PackageName,
            "Install Package",
            "Enter package name:",
        ));
        ui.notify_error("Install Error", "boom");

        match &ui.active_modal {
            Some(ModalState::Notification(n)) => {
                assert_eq!(n.level, NotificationLevel::Error);
                assert_eq!(n.body, "boom");
            }
            other => panic!("unexpected modal {:?}", other),
        }
    }

    #[test]
    fn test_context_menu_selection_is_clamped() {
        let menu = ContextMenuState {
            target: PathBuf::from("/tmp/a.py"),
            selected_index: 10,
        };
        assert_eq!(menu.selected_action(), ContextAction::Properties);
    }

    #[test]
    fn test_dialog_kinds() {
        assert!(DialogRequest::OpenFolder.picks_folder());
        assert!(!DialogRequest::SaveFileAs.picks_folder());
    }
}
