//! Modal rendering: prompts, message boxes and the tree context menu

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use albert::model::{
    AppModel, ContextAction, ContextMenuState, ModalState, NotificationLevel, NotificationState,
    PromptState,
};

use super::geometry::centered_rect;
use super::helpers::{truncate_to_width, tui_color};

const PROMPT_WIDTH: u16 = 60;
const NOTIFICATION_WIDTH: u16 = 80;
const MENU_WIDTH: u16 = 24;

pub fn render_modal(model: &AppModel, frame: &mut Frame) {
    let Some(modal) = &model.ui.active_modal else {
        return;
    };
    let area = frame.area();

    match modal {
        ModalState::Prompt(prompt) => render_prompt(model, frame, area, prompt),
        ModalState::Notification(note) => render_notification(model, frame, area, note),
        ModalState::ContextMenu(menu) => render_context_menu(model, frame, area, menu),
    }
}

fn modal_block(model: &AppModel, title: &str, error: bool) -> Block<'static> {
    let theme = &model.theme.overlay;
    let border = if error { theme.error } else { theme.border };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(tui_color(border)))
        .style(
            Style::default()
                .fg(tui_color(theme.foreground))
                .bg(tui_color(theme.background)),
        )
}

fn render_prompt(model: &AppModel, frame: &mut Frame, area: Rect, prompt: &PromptState) {
    let theme = &model.theme.overlay;
    let rect = centered_rect(area, PROMPT_WIDTH, 5);
    let block = modal_block(model, &prompt.title, false);
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    // Keep the end of long input (and the cursor) in view
    let field_width = inner.width.saturating_sub(1) as usize;
    let chars: Vec<char> = prompt.input.chars().collect();
    let start = chars.len().saturating_sub(field_width);
    let shown: String = chars[start..].iter().collect();

    let input_style = Style::default().bg(tui_color(theme.input_background));
    let lines = vec![
        Line::from(prompt.label.clone()),
        Line::from(Span::styled(
            format!("{:<width$}", shown, width = inner.width as usize),
            input_style,
        )),
        Line::styled(
            "Enter to confirm, Esc to cancel",
            Style::default().add_modifier(Modifier::DIM),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    if inner.height > 1 {
        let x = inner.x + (chars.len() - start) as u16;
        frame.set_cursor_position((x, inner.y + 1));
    }
}

fn render_notification(model: &AppModel, frame: &mut Frame, area: Rect, note: &NotificationState) {
    let body_lines = note.body.lines().count().max(1) as u16;
    let height = (body_lines + 3).min(area.height.saturating_sub(2)).max(5);
    let rect = centered_rect(area, NOTIFICATION_WIDTH, height);
    let is_error = note.level == NotificationLevel::Error;
    let block = modal_block(model, &note.title, is_error);
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let body_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(1));
    let footer_area = Rect::new(inner.x, inner.y + body_area.height, inner.width, 1.min(inner.height));

    frame.render_widget(
        Paragraph::new(note.body.as_str())
            .wrap(Wrap { trim: false })
            .scroll((note.scroll as u16, 0)),
        body_area,
    );
    frame.render_widget(
        Paragraph::new("Enter/Esc to close, ↑/↓ to scroll")
            .style(Style::default().add_modifier(Modifier::DIM)),
        footer_area,
    );
}

fn render_context_menu(model: &AppModel, frame: &mut Frame, area: Rect, menu: &ContextMenuState) {
    let theme = &model.theme.overlay;
    let rect = centered_rect(area, MENU_WIDTH, ContextAction::ALL.len() as u16 + 2);
    let name = menu
        .target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let block = modal_block(
        model,
        &truncate_to_width(&name, MENU_WIDTH.saturating_sub(4) as usize),
        false,
    );
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let selected = Style::default()
        .fg(tui_color(theme.background))
        .bg(tui_color(theme.border))
        .add_modifier(Modifier::BOLD);
    let lines: Vec<Line> = ContextAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let text = format!(" {:<width$}", action.label(), width = inner.width.saturating_sub(1) as usize);
            if i == menu.selected_index {
                Line::from(Span::styled(text, selected))
            } else {
                Line::from(text)
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
