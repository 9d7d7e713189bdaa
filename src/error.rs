//! Error taxonomy for editor actions
//!
//! Errors are caught where the user action was triggered and surfaced as a
//! modal notification. None of them end the process.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used by the model and runtime layers
pub type Result<T> = std::result::Result<T, EditorError>;

#[derive(Debug, Error)]
pub enum EditorError {
    /// A path could not be opened for reading (e.g. unreadable directory)
    #[error("cannot access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A read, write or create failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An external command exited unsuccessfully
    #[error("{program} failed ({})", describe_exit(.code))]
    Process {
        program: String,
        /// Exit code, `None` when the child was killed by a signal
        code: Option<i32>,
        /// Captured stdout and stderr, in write order
        output: String,
    },

    /// An external command could not be started at all
    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}

impl EditorError {
    pub fn access(path: &Path, source: std::io::Error) -> Self {
        Self::Access {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Short title for the notification modal
    pub fn title(&self) -> &'static str {
        match self {
            Self::Access { .. } => "Access Error",
            Self::Io { .. } => "File Error",
            Self::Process { .. } | Self::Spawn { .. } => "Process Error",
        }
    }

    /// Body text for the notification modal
    ///
    /// Process failures show the captured output, since that is what the
    /// user needs to read.
    pub fn details(&self) -> String {
        match self {
            Self::Process { output, .. } if !output.trim().is_empty() => {
                format!("{}\n\n{}", self, output.trim_end())
            }
            _ => self.to_string(),
        }
    }
}
