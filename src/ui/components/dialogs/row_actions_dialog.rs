use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, List, ListItem, Paragraph},
    Frame,
};

use super::common::{self, shortcuts};
use crate::ui::layout::LayoutManager;

/// Action menu for a single table row. One entry today, rendered as a list
/// so more row operations can slot in without reshaping the dialog.
pub fn render_row_actions_dialog(f: &mut Frame, area: Rect, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(40, 8, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(" Actions ", Color::Cyan);
    f.render_widget(block, dialog_area);

    let content_area = dialog_area.inner(Margin {
        horizontal: 1,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(content_area);

    let heading = Paragraph::new(title.to_string()).style(Style::default().fg(Color::Gray));
    f.render_widget(heading, chunks[0]);

    let entries = vec![ListItem::new("View")];
    let menu = List::new(entries).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ratatui::widgets::ListState::default();
    state.select(Some(0));
    f.render_stateful_widget(menu, chunks[1], &mut state);

    let instructions = common::create_instructions_paragraph(&[
        ("Enter", Color::Green, " Open"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);
    f.render_widget(instructions, chunks[2]);
}
