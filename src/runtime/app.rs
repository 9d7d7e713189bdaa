//! Application runtime - terminal event loop and side effects
//!
//! Reads crossterm events, feeds messages through `update`, and executes the
//! returned commands. Native dialogs and child processes block the loop
//! until they return; their results re-enter `update` as messages.

use std::collections::VecDeque;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;

use albert::commands::Cmd;
use albert::config::EditorConfig;
use albert::messages::{AppMsg, Msg};
use albert::model::{AppModel, DialogRequest};
use albert::process::run_captured;
use albert::update::update;

use super::input::{handle_key, handle_mouse};
use super::terminal::TerminalGuard;
use crate::view;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// Two clicks on the same cell within this window form a double click
const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(400);

pub struct App {
    model: AppModel,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Kept alive so copied text stays available on X11/Wayland
    clipboard: Option<arboard::Clipboard>,
    last_click: Option<(Instant, u16, u16)>,
    needs_redraw: bool,
    should_quit: bool,
    // Dropped last: restores the terminal after everything else is gone
    _guard: TerminalGuard,
}

impl App {
    pub fn new(config: EditorConfig, startup_path: Option<PathBuf>) -> Result<Self> {
        let guard = TerminalGuard::new()?;
        guard.install_panic_hook();

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let (width, height) = ratatui::crossterm::terminal::size()?;
        let model = AppModel::new(width, height, config, startup_path);

        Ok(Self {
            model,
            terminal,
            clipboard: None,
            last_click: None,
            needs_redraw: true,
            should_quit: false,
            _guard: guard,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("Editor started");

        while !self.should_quit {
            if self.needs_redraw {
                let model = &self.model;
                self.terminal.draw(|frame| view::render(model, frame))?;
                self.needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                self.handle_event(event);
            }
        }

        tracing::info!("Editor exiting");
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(msg) = handle_key(&self.model, key) {
                    self.dispatch(msg);
                }
            }
            Event::Mouse(mouse) => {
                let double_click = self.track_click(&mouse);
                for msg in handle_mouse(&self.model, mouse, double_click) {
                    self.dispatch(msg);
                }
            }
            Event::Resize(width, height) => self.dispatch(Msg::App(AppMsg::Resize(width, height))),
            _ => {}
        }
    }

    /// Record a left click and report whether it completes a double click
    fn track_click(&mut self, mouse: &MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        let now = Instant::now();
        let double = matches!(
            self.last_click,
            Some((at, col, row))
                if col == mouse.column && row == mouse.row && now.duration_since(at) < DOUBLE_CLICK_WINDOW
        );
        self.last_click = if double {
            None
        } else {
            Some((now, mouse.column, mouse.row))
        };
        double
    }

    /// Run a message and every message its commands produce synchronously
    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.needs_redraw |= cmd.needs_redraw();
                self.should_quit |= cmd.is_quit();
                self.process_cmd(cmd, &mut queue);
            }
        }
    }

    fn process_cmd(&mut self, cmd: Cmd, queue: &mut VecDeque<Msg>) {
        match cmd {
            Cmd::None | Cmd::Redraw | Cmd::Quit => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, queue);
                }
            }

            Cmd::ShowDialog(request) => {
                if !has_desktop_session() {
                    tracing::info!("No desktop session, asking for {:?} in a prompt", request);
                    queue.push_back(Msg::App(AppMsg::DialogUnavailable(request)));
                    return;
                }
                let start_dir = self.dialog_start_dir(&request);
                let path = show_native_dialog(&request, start_dir);
                queue.push_back(Msg::App(AppMsg::DialogResult { request, path }));
            }

            Cmd::RunProcess { action, request } => {
                // Show the "Running" status before the child blocks the loop
                self.flush_frame();
                let result = run_captured(&request);
                queue.push_back(Msg::App(AppMsg::ProcessFinished { action, result }));
            }

            Cmd::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::error!("Failed to open {}: {}", url, e);
                    self.model.ui.set_status(format!("Could not open {}", url));
                    self.needs_redraw = true;
                }
            }

            Cmd::CopyToClipboard(text) => {
                if self.clipboard.is_none() {
                    self.clipboard = arboard::Clipboard::new()
                        .map_err(|e| tracing::warn!("Clipboard unavailable: {}", e))
                        .ok();
                }
                let copied = self
                    .clipboard
                    .as_mut()
                    .is_some_and(|clipboard| clipboard.set_text(text).is_ok());
                if !copied {
                    self.model.ui.set_status("Clipboard unavailable");
                    self.needs_redraw = true;
                }
            }
        }
    }

    fn flush_frame(&mut self) {
        let model = &self.model;
        match self.terminal.draw(|frame| view::render(model, frame)) {
            Ok(_) => self.needs_redraw = false,
            Err(e) => tracing::warn!("Failed to draw before blocking: {}", e),
        }
    }

    fn dialog_start_dir(&self, request: &DialogRequest) -> Option<PathBuf> {
        match request {
            DialogRequest::SaveFileAs => self
                .model
                .document
                .file_path
                .as_ref()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .or_else(|| self.model.workspace.as_ref().map(|w| w.root.clone())),
            _ => self.model.workspace.as_ref().map(|w| w.root.clone()),
        }
    }
}

/// Block on a native file dialog for `request`
fn show_native_dialog(request: &DialogRequest, start_dir: Option<PathBuf>) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title(request.title());
    if let Some(dir) = start_dir {
        dialog = dialog.set_directory(dir);
    }

    if request.picks_folder() {
        dialog.pick_folder()
    } else {
        dialog
            .add_filter("Python Files", &["py"])
            .add_filter("All Files", &["*"])
            .save_file()
    }
}

/// Whether a native dialog can be shown at all
fn has_desktop_session() -> bool {
    if cfg!(any(target_os = "windows", target_os = "macos")) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|var| std::env::var_os(var).is_some_and(|v| !v.is_empty()))
}
