//! albert - Elm-style terminal code editor
//!
//! This crate provides the core types and logic for a small Python-oriented
//! editor: one text buffer with keyword highlighting, a file tree for an
//! opened folder, and Run / Install actions that call out to the configured
//! interpreter and package manager.
//!
//! The terminal front end lives in the binary; everything here is testable
//! without a terminal.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod process;
pub mod syntax;
pub mod theme;
pub mod tracing;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
