//! Command types for the Elm-style architecture
//!
//! [`CommandId`] and the [`COMMANDS`] table name every user-facing action,
//! with the label used on sidebar buttons and the key chord that triggers
//! it. [`Cmd`] represents side effects that should be performed after an
//! update.

use crate::model::DialogRequest;
use crate::process::ProcessRequest;

// ============================================================================
// Command Registry
// ============================================================================

/// Identifies an action that can be triggered by a key or a sidebar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Workspace
    OpenFolder,
    NewFile,
    NewFolder,

    // File operations
    SaveFile,
    SaveFileAs,

    // Python
    RunCode,
    InstallPackage,
    OpenDocs,

    // UI
    ToggleFocus,

    // Application
    Quit,
}

/// Key names that can appear in a chord
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    F(u8),
}

/// A key plus modifiers, independent of the terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyChord {
    pub const fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: true,
            alt: false,
        }
    }

    pub const fn alt(c: char) -> Self {
        Self {
            key: Key::Char(c),
            ctrl: false,
            alt: true,
        }
    }

    pub const fn function(n: u8) -> Self {
        Self {
            key: Key::F(n),
            ctrl: false,
            alt: false,
        }
    }

    /// Human readable form, e.g. "Ctrl+O"
    pub fn label(&self) -> String {
        let mut label = String::new();
        if self.ctrl {
            label.push_str("Ctrl+");
        }
        if self.alt {
            label.push_str("Alt+");
        }
        match self.key {
            Key::Char(c) => label.extend(c.to_uppercase()),
            Key::F(n) => label.push_str(&format!("F{}", n)),
        }
        label
    }
}

/// A command definition
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    pub label: &'static str,
    pub keybinding: Option<KeyChord>,
    /// Shown as a button at the top of the sidebar
    pub button: bool,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::OpenFolder,
        label: "Open Folder",
        keybinding: Some(KeyChord::ctrl('o')),
        button: true,
    },
    CommandDef {
        id: CommandId::NewFile,
        label: "New File",
        keybinding: Some(KeyChord::ctrl('n')),
        button: true,
    },
    CommandDef {
        id: CommandId::NewFolder,
        label: "New Folder",
        keybinding: Some(KeyChord::ctrl('d')),
        button: true,
    },
    CommandDef {
        id: CommandId::RunCode,
        label: "Run Code",
        keybinding: Some(KeyChord::function(5)),
        button: true,
    },
    CommandDef {
        id: CommandId::SaveFile,
        label: "Save",
        keybinding: Some(KeyChord::ctrl('s')),
        button: false,
    },
    CommandDef {
        id: CommandId::SaveFileAs,
        label: "Save As...",
        keybinding: Some(KeyChord::alt('s')),
        button: false,
    },
    CommandDef {
        id: CommandId::InstallPackage,
        label: "Install Package",
        keybinding: Some(KeyChord::ctrl('p')),
        button: false,
    },
    CommandDef {
        id: CommandId::OpenDocs,
        label: "Python Docs",
        keybinding: Some(KeyChord::function(1)),
        button: false,
    },
    CommandDef {
        id: CommandId::ToggleFocus,
        label: "Toggle Sidebar Focus",
        keybinding: Some(KeyChord::ctrl('e')),
        button: false,
    },
    CommandDef {
        id: CommandId::Quit,
        label: "Quit",
        keybinding: Some(KeyChord::ctrl('q')),
        button: false,
    },
];

/// Find the command bound to a key chord
pub fn command_for_chord(chord: KeyChord) -> Option<CommandId> {
    COMMANDS
        .iter()
        .find(|c| c.keybinding == Some(chord))
        .map(|c| c.id)
}

/// Commands shown as sidebar buttons, top to bottom
pub fn sidebar_buttons() -> impl Iterator<Item = &'static CommandDef> {
    COMMANDS.iter().filter(|c| c.button)
}

// ============================================================================
// Side effects
// ============================================================================

/// Which action started a child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessAction {
    Run,
    Install,
}

impl ProcessAction {
    /// Title of the message box for a successful run
    pub fn output_title(self) -> &'static str {
        match self {
            ProcessAction::Run => "Run Output",
            ProcessAction::Install => "Install Output",
        }
    }

    /// Title of the message box for a failed run
    pub fn error_title(self) -> &'static str {
        match self {
            ProcessAction::Run => "Run Error",
            ProcessAction::Install => "Install Error",
        }
    }
}

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a full redraw of the UI
    Redraw,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Ask for a path with a native dialog
    /// Sends `AppMsg::DialogResult` or `AppMsg::DialogUnavailable`
    ShowDialog(DialogRequest),
    /// Run a child process to completion
    /// Sends `AppMsg::ProcessFinished`
    RunProcess {
        action: ProcessAction,
        request: ProcessRequest,
    },
    /// Open a URL with the default handler (fire-and-forget)
    OpenUrl(String),
    /// Put text on the system clipboard
    CopyToClipboard(String),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            // Their results come back as messages, which redraw
            Cmd::ShowDialog(_) => false,
            Cmd::RunProcess { .. } => false,
            Cmd::OpenUrl(_) => false,
            Cmd::CopyToClipboard(_) => false,
            Cmd::Quit => false,
        }
    }

    /// Check if this command (or any batched command) quits
    pub fn is_quit(&self) -> bool {
        match self {
            Cmd::Quit => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::is_quit),
            _ => false,
        }
    }
}
