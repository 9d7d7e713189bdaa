//! Runtime module - terminal integration
//!
//! - `app` - event loop and command execution
//! - `input` - keyboard/mouse event to message mapping
//! - `terminal` - raw mode setup and guaranteed restore

pub mod app;
pub mod input;
pub mod terminal;

pub use app::App;
