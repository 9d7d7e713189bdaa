//! View module - draws the model into a ratatui frame
//!
//! Rendering is a pure function of the model. Layout lives in `geometry`,
//! shared with the runtime's mouse handling.

pub mod editor;
pub mod geometry;
pub mod helpers;
pub mod modal;
pub mod sidebar;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use albert::model::AppModel;

pub use geometry::{app_layout, layout_for, AppLayout};

use helpers::tui_color;

/// Draw the whole window
pub fn render(model: &AppModel, frame: &mut Frame) {
    let layout = app_layout(frame.area());

    sidebar::render_sidebar(model, frame, &layout);
    editor::render_editor(model, frame, &layout);
    render_info_bar(model, frame, &layout);
    modal::render_modal(model, frame);
}

/// Bottom line: language on the left, status and file name after it
fn render_info_bar(model: &AppModel, frame: &mut Frame, layout: &AppLayout) {
    let theme = &model.theme.info_bar;
    let base = Style::default().bg(tui_color(theme.background));
    let language = Style::default().fg(tui_color(theme.foreground));
    let muted = Style::default().fg(tui_color(model.theme.editor.foreground));

    let modified = if model.document.is_modified { " ●" } else { "" };
    let mut spans = vec![
        Span::styled(model.language_label(), language),
        Span::styled(format!("  {}{}", model.document.display_name(), modified), muted),
    ];
    if !model.ui.status_message.is_empty() {
        spans.push(Span::styled(format!("  |  {}", model.ui.status_message), muted));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(base), layout.info_bar);
}

#[cfg(test)]
mod tests {
    use super::*;
    use albert::config::EditorConfig;
    use albert::messages::Msg;
    use albert::update::update;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn draw(model: &AppModel) -> Buffer {
        let (width, height) = model.window_size;
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(model, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_info_bar_shows_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.py");
        std::fs::write(&path, "def main():\n    return 1\n").unwrap();

        let model = AppModel::new(100, 20, EditorConfig::default(), Some(path));
        let buffer = draw(&model);
        assert!(row_text(&buffer, 19).starts_with("Language: Python"));
    }

    #[test]
    fn test_buttons_and_text_are_drawn() {
        let mut model = AppModel::new(100, 20, EditorConfig::default(), None);
        for ch in "if x".chars() {
            update(&mut model, Msg::insert_char(ch));
        }
        let buffer = draw(&model);
        assert!(row_text(&buffer, 0).contains("Open Folder"));
        assert!(row_text(&buffer, 3).contains("Run Code"));
        assert!(row_text(&buffer, 0).contains("if x"));
    }

    #[test]
    fn test_keyword_cells_use_keyword_color() {
        let mut model = AppModel::new(100, 20, EditorConfig::default(), None);
        for ch in "def f".chars() {
            update(&mut model, Msg::insert_char(ch));
        }
        let buffer = draw(&model);
        let layout = app_layout(buffer.area);
        let keyword = tui_color(model.theme.highlight_color(albert::syntax::KEYWORD));
        let x = layout.text.x;
        assert_eq!(buffer[(x, 0)].fg, keyword);
        assert_ne!(buffer[(x + 4, 0)].fg, keyword);
    }

    #[test]
    fn test_tree_rows_are_drawn() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.py"), "").unwrap();

        let model = AppModel::new(100, 20, EditorConfig::default(), Some(dir.path().to_path_buf()));
        let buffer = draw(&model);
        let layout = app_layout(buffer.area);
        let rows: Vec<String> = (layout.tree.y..layout.tree.y + 3)
            .map(|y| row_text(&buffer, y))
            .collect();
        assert!(rows.iter().any(|r| r.contains("a.py")), "{:?}", rows);
    }
}
