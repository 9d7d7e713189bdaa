//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Side effects
//! (dialogs, child processes, clipboard, browser) are returned as [`Cmd`]s
//! and their outcomes come back as messages.

mod app;
mod document;
mod editor;
mod ui;
mod workspace;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use document::update_document;
pub use editor::update_editor;
pub use ui::update_ui;
pub use workspace::update_workspace;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    match msg {
        Msg::Editor(m) => editor::update_editor(model, m),
        Msg::Document(m) => document::update_document(model, m),
        Msg::Workspace(m) => workspace::update_workspace(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Get a display name for a message type
///
/// Process results are reduced to ok/err so captured output stays out of
/// the log line.
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::AppMsg;

    match msg {
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Workspace(m) => format!("Workspace::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(AppMsg::ProcessFinished { action, result }) => format!(
            "App::ProcessFinished({:?}, {})",
            action,
            if result.is_ok() { "ok" } else { "err" }
        ),
        Msg::App(m) => format!("App::{:?}", m),
    }
}
