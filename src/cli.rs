//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a folder as workspace, or a single file
//! - Forcing typed prompts instead of native file dialogs
//! - Mirroring logs to stderr

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DialogMode, EditorConfig};

/// A minimal Python-oriented code editor
#[derive(Parser, Debug)]
#[command(name = "albert", version, about = "A minimal code editor with a file tree")]
pub struct CliArgs {
    /// Folder to open as workspace, or file to edit
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Type paths into the window instead of using native file dialogs
    #[arg(long)]
    pub prompt_dialogs: bool,

    /// Also write logs to stderr
    #[arg(long)]
    pub log_stderr: bool,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty buffer
    Empty,
    /// Open a single file
    File(PathBuf),
    /// Open a directory as workspace
    Workspace(PathBuf),
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What to open
    pub mode: StartupMode,
    /// Overrides the configured dialog mode when set
    pub prompt_dialogs: bool,
    pub log_stderr: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> StartupConfig {
        let mode = match self.path {
            None => StartupMode::Empty,
            Some(path) if path.is_dir() => StartupMode::Workspace(path),
            Some(path) => StartupMode::File(path),
        };

        StartupConfig {
            mode,
            prompt_dialogs: self.prompt_dialogs,
            log_stderr: self.log_stderr,
        }
    }
}

impl StartupConfig {
    /// Path handed to the model at startup
    pub fn startup_path(&self) -> Option<PathBuf> {
        match &self.mode {
            StartupMode::Empty => None,
            StartupMode::File(path) | StartupMode::Workspace(path) => Some(path.clone()),
        }
    }

    /// Apply command-line overrides to the loaded config
    pub fn apply_to(&self, config: &mut EditorConfig) {
        if self.prompt_dialogs {
            config.dialogs = DialogMode::Prompt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_args_gives_empty_mode() {
        let args = CliArgs::parse_from(["albert"]);
        let config = args.into_config();
        assert_eq!(config.mode, StartupMode::Empty);
        assert_eq!(config.startup_path(), None);
    }

    #[test]
    fn test_directory_gives_workspace_mode() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs {
            path: Some(dir.path().to_path_buf()),
            prompt_dialogs: false,
            log_stderr: false,
        };
        let config = args.into_config();
        assert_eq!(config.mode, StartupMode::Workspace(dir.path().to_path_buf()));
    }

    #[test]
    fn test_single_file() {
        let args = CliArgs::parse_from(["albert", "script.py"]);
        let config = args.into_config();
        assert_eq!(config.mode, StartupMode::File(PathBuf::from("script.py")));
    }

    #[test]
    fn test_prompt_dialogs_override() {
        let args = CliArgs::parse_from(["albert", "--prompt-dialogs", "--log-stderr"]);
        let startup = args.into_config();
        assert!(startup.log_stderr);

        let mut config = EditorConfig::default();
        assert_eq!(config.dialogs, DialogMode::Native);
        startup.apply_to(&mut config);
        assert_eq!(config.dialogs, DialogMode::Prompt);
    }
}
