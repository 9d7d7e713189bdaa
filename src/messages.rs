//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::commands::{CommandId, ProcessAction};
use crate::error::Result;
use crate::model::DialogRequest;

/// Direction for cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Editor-specific messages (cursor movement, viewport scrolling)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to start of line (Home key)
    MoveCursorLineStart,
    /// Move cursor to end of line (End key)
    MoveCursorLineEnd,
    /// Move cursor to start of document (Ctrl+Home)
    MoveCursorDocumentStart,
    /// Move cursor to end of document (Ctrl+End)
    MoveCursorDocumentEnd,
    PageUp,
    PageDown,
    /// Set cursor to specific position (from mouse click)
    SetCursorPosition { line: usize, column: usize },
    /// Scroll viewport vertically (positive = down, negative = up)
    Scroll(i32),
}

/// Document-specific messages (text editing)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert a character at cursor
    InsertChar(char),
    /// Insert a newline at cursor
    InsertNewline,
    /// Insert four spaces (Tab key)
    InsertTab,
    /// Delete character before cursor (Backspace)
    DeleteBackward,
    /// Delete character at cursor (Delete)
    DeleteForward,
}

/// File tree messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceMsg {
    SelectPrevious,
    SelectNext,
    /// Select a row by its index among the visible rows (mouse click)
    SelectRow(usize),
    /// Enter on the selection: toggle a folder, open a file
    OpenOrToggle,
    /// Load a file from the tree into the editor
    OpenFile(PathBuf),
    /// Rebuild the tree from disk
    Reload,
    /// Show the Open / Copy Path / Properties menu for the selection
    OpenContextMenu,
    CopyPath(PathBuf),
    ShowProperties(PathBuf),
}

/// Modal-specific messages (prompt, notification, context menu)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMsg {
    /// Close the currently active modal
    Close,
    /// Insert character into prompt input
    InsertChar(char),
    /// Delete character from prompt input (backspace)
    DeleteBackward,
    /// Move up (context menu entry, notification scroll)
    SelectPrevious,
    /// Move down
    SelectNext,
    /// Confirm the modal action (Enter)
    Confirm,
}

/// UI-specific messages (focus, modals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    FocusEditor,
    /// Modal messages
    Modal(ModalMsg),
}

/// Application-level messages (commands, window events, side-effect results)
#[derive(Debug)]
pub enum AppMsg {
    /// Run a registered command (key binding or sidebar button)
    ExecuteCommand(CommandId),
    /// Terminal resized
    Resize(u16, u16),
    /// A native dialog returned a path (or None if cancelled)
    DialogResult {
        request: DialogRequest,
        path: Option<PathBuf>,
    },
    /// No native dialog could be shown; ask in a prompt instead
    DialogUnavailable(DialogRequest),
    /// A Run or Install child process exited (or failed to start)
    ProcessFinished {
        action: ProcessAction,
        result: Result<String>,
    },
}

/// Top-level message type
#[derive(Debug)]
pub enum Msg {
    /// Editor messages (cursor, viewport)
    Editor(EditorMsg),
    /// Document messages (text editing)
    Document(DocumentMsg),
    /// File tree messages
    Workspace(WorkspaceMsg),
    /// UI messages (focus, modals)
    Ui(UiMsg),
    /// App messages (commands, window, side-effect results)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a cursor movement message
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor(direction))
    }

    /// Create an insert character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Document(DocumentMsg::InsertChar(ch))
    }

    pub fn command(id: CommandId) -> Self {
        Msg::App(AppMsg::ExecuteCommand(id))
    }

    pub fn modal(msg: ModalMsg) -> Self {
        Msg::Ui(UiMsg::Modal(msg))
    }
}
