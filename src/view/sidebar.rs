//! Sidebar rendering: action buttons and the file tree

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use albert::commands::sidebar_buttons;
use albert::model::{AppModel, FocusTarget};

use super::geometry::AppLayout;
use super::helpers::{truncate_to_width, tui_color};

const INDENT: usize = 2;

pub fn render_sidebar(model: &AppModel, frame: &mut Frame, layout: &AppLayout) {
    let theme = &model.theme.sidebar;
    let base = Style::default()
        .fg(tui_color(theme.foreground))
        .bg(tui_color(theme.background));
    frame.render_widget(Block::default().style(base), layout.sidebar);

    let button_style = Style::default()
        .fg(tui_color(theme.button_foreground))
        .bg(tui_color(theme.button_background))
        .add_modifier(Modifier::BOLD);
    for (def, rect) in sidebar_buttons().zip(&layout.buttons) {
        let key = def.keybinding.map(|k| k.label()).unwrap_or_default();
        let label = format!("{} ({})", def.label, key);
        frame.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(button_style),
            *rect,
        );
    }

    render_tree(model, frame, layout, base);
}

fn render_tree(model: &AppModel, frame: &mut Frame, layout: &AppLayout, base: Style) {
    let theme = &model.theme.sidebar;
    let width = layout.tree.width as usize;

    let Some(workspace) = &model.workspace else {
        let hint = Paragraph::new("No folder open")
            .style(base.add_modifier(Modifier::DIM))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP).style(base));
        frame.render_widget(hint, layout.tree_block);
        return;
    };

    let title = truncate_to_width(&workspace.tree.name, width.saturating_sub(2));
    frame.render_widget(
        Block::default()
            .borders(Borders::TOP)
            .title(title)
            .style(base),
        layout.tree_block,
    );

    let focused = model.ui.focus == FocusTarget::Sidebar && !model.ui.has_modal();
    let mut selection = Style::default().bg(tui_color(theme.selection_background));
    if focused {
        selection = selection.add_modifier(Modifier::BOLD);
    }

    let lines: Vec<Line> = workspace
        .visible_items()
        .into_iter()
        .skip(workspace.scroll_offset)
        .take(layout.tree.height as usize)
        .map(|item| {
            let marker = match (item.node.is_dir, item.is_expanded) {
                (true, true) => "▾ ",
                (true, false) => "▸ ",
                (false, _) => "  ",
            };
            let text = format!(
                "{}{}{}",
                " ".repeat(item.depth * INDENT),
                marker,
                item.node.name
            );
            let text = truncate_to_width(&text, width);
            let is_selected = workspace.selected_item.as_ref() == Some(&item.node.path);
            if is_selected {
                // Pad so the highlight spans the row
                Line::from(Span::styled(format!("{:<width$}", text), selection))
            } else {
                Line::from(text)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(base), layout.tree);
}
