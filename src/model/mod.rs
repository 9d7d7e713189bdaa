//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod editor;
pub mod ui;
pub mod workspace;

pub use document::Document;
pub use editor::{Cursor, EditorState, Viewport};
pub use ui::{
    ContextAction, ContextMenuState, DialogRequest, FocusTarget, ModalState, NotificationLevel,
    NotificationState, PromptPurpose, PromptState, UiState,
};
pub use workspace::{build_tree, DisplayNode, VisibleItem, Workspace};

use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::error::Result;
use crate::syntax::{Highlighter, KEYWORD};
use crate::theme::{load_theme, Theme};

/// Layout constant - width of the sidebar (buttons and file tree) in columns
pub const SIDEBAR_WIDTH: u16 = 30;
/// Layout constant - one row per sidebar button
pub const SIDEBAR_BUTTON_ROWS: u16 = 4;
/// Layout constant - height of the info bar at the bottom
pub const INFO_BAR_HEIGHT: u16 = 1;
/// Layout constant - width of line number gutter in characters (e.g., " 123 ")
pub const LINE_NUMBER_GUTTER_CHARS: u16 = 5;

/// Rows available to the file tree for a given window height
pub fn tree_rows(window_height: u16) -> usize {
    // Buttons, then a border line above the tree
    window_height
        .saturating_sub(INFO_BAR_HEIGHT)
        .saturating_sub(SIDEBAR_BUTTON_ROWS + 1) as usize
}

fn text_area_size(width: u16, height: u16) -> (usize, usize) {
    let columns = width
        .saturating_sub(SIDEBAR_WIDTH)
        .saturating_sub(LINE_NUMBER_GUTTER_CHARS + 1);
    let lines = height.saturating_sub(INFO_BAR_HEIGHT);
    (lines as usize, columns as usize)
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The one text buffer
    pub document: Document,
    /// Cursor and viewport over `document`
    pub editor: EditorState,
    /// Opened folder; the tree stays hidden until one is open
    pub workspace: Option<Workspace>,
    /// UI state (focus, status message, modals)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Keyword rules, built once from the config
    pub highlighter: Highlighter,
    /// Terminal dimensions in cells
    pub window_size: (u16, u16),
}

impl AppModel {
    /// Create the model and open `startup_path` (a folder or a file) if given
    pub fn new(width: u16, height: u16, config: EditorConfig, startup_path: Option<PathBuf>) -> Self {
        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                config.theme,
                e
            );
            Theme::default()
        });
        let highlighter = Highlighter::new(config.keyword_list(), KEYWORD);

        let (lines, columns) = text_area_size(width, height);
        let mut model = Self {
            document: Document::new(),
            editor: EditorState::with_viewport(lines, columns),
            workspace: None,
            ui: UiState::with_status("New file"),
            theme,
            config,
            highlighter,
            window_size: (width, height),
        };

        if let Some(path) = startup_path {
            let result = if path.is_dir() {
                model.open_workspace(&path)
            } else {
                model.open_file(&path)
            };
            if let Err(e) = result {
                tracing::error!("Startup path {}: {}", path.display(), e);
                model.ui.notify_error(e.title(), e.details());
            }
        }

        model
    }

    /// Update viewport dimensions after a terminal resize
    pub fn resize(&mut self, width: u16, height: u16) {
        self.window_size = (width, height);
        let (lines, columns) = text_area_size(width, height);
        self.editor.resize_viewport(lines, columns);
        self.editor.ensure_cursor_visible(&self.document);
        if let Some(workspace) = &mut self.workspace {
            workspace.ensure_selection_visible(tree_rows(height));
        }
    }

    /// Replace the buffer with the contents of `path`
    ///
    /// On failure the current buffer is kept.
    pub fn open_file(&mut self, path: &Path) -> Result<()> {
        let document = Document::from_file(path.to_path_buf())?;
        tracing::info!("Opened {}", path.display());
        self.document = document;
        self.editor.reset();
        self.ui.focus = FocusTarget::Editor;
        self.ui.set_status(format!("Loaded: {}", path.display()));
        Ok(())
    }

    /// Mirror `root` in the sidebar, replacing any open workspace
    ///
    /// On failure the previous workspace (and its tree) is kept.
    pub fn open_workspace(&mut self, root: &Path) -> Result<()> {
        let workspace = Workspace::open(root.to_path_buf())?;
        tracing::info!(
            "Opened workspace {} ({} entries)",
            workspace.root.display(),
            workspace.tree.node_count() - 1
        );
        self.ui.set_status(format!("Opened folder: {}", workspace.root.display()));
        self.workspace = Some(workspace);
        self.ui.focus = FocusTarget::Sidebar;
        Ok(())
    }

    /// Rebuild the tree of the open workspace; no-op without one
    pub fn reload_workspace(&mut self) -> Result<()> {
        match &mut self.workspace {
            Some(workspace) => workspace.reload(),
            None => Ok(()),
        }
    }

    /// Text for the info bar, e.g. "Language: Python"
    pub fn language_label(&self) -> String {
        format!("Language: {}", self.document.language.display_name())
    }

    /// Get the buffer offset for the current cursor position
    pub fn cursor_offset(&self) -> usize {
        self.editor.cursor_offset(&self.document)
    }

    /// Move the cursor to a buffer offset
    pub fn set_cursor_from_offset(&mut self, offset: usize) {
        self.editor.set_cursor_from_offset(&self.document, offset);
    }

    /// Ensure cursor is visible in viewport (minimal scroll)
    pub fn ensure_cursor_visible(&mut self) {
        self.editor.ensure_cursor_visible(&self.document);
    }

    /// Get the current line length
    pub fn current_line_length(&self) -> usize {
        self.document.line_length(self.editor.cursor.line)
    }
}
