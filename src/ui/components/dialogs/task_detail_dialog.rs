use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{self, shortcuts};
use crate::api::Task;
use crate::config::DisplayConfig;
use crate::icons::IconService;
use crate::ui::components::badge::{priority_badge, status_badge, type_badge};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_timestamp;

/// Detail overlay for one task. Renders the snapshot the server returned for
/// this row; the snapshot is dropped when the overlay closes.
pub fn render_task_detail_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    task: &Task,
    display_config: &DisplayConfig,
) {
    let dialog_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, dialog_area);

    let title = format!(" Task #{} ", task.id);
    let block = common::create_dialog_block(&title, Color::Cyan);
    f.render_widget(block, dialog_area);

    let content_area = dialog_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title
            Constraint::Length(2), // badges
            Constraint::Length(2), // timestamps
            Constraint::Min(1),    // body
            Constraint::Length(1), // instructions
        ])
        .split(content_area);

    let heading = Paragraph::new(Line::from(Span::styled(
        task.title.clone(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(heading, chunks[0]);

    let badges = Paragraph::new(Line::from(vec![
        type_badge(task.kind, icons),
        Span::raw(" "),
        status_badge(task.status),
        Span::raw("  "),
        priority_badge(task.priority),
        Span::raw("  "),
        Span::styled(task.team.clone(), Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(badges, chunks[1]);

    let created = format_timestamp(&task.created_at, &display_config.date_format, &display_config.time_format);
    let updated = format_timestamp(&task.updated_at, &display_config.date_format, &display_config.time_format);
    let timestamps = Paragraph::new(Line::from(vec![
        Span::styled("Created ", Style::default().fg(Color::Gray)),
        Span::raw(created),
        Span::styled("  Updated ", Style::default().fg(Color::Gray)),
        Span::raw(updated),
    ]));
    f.render_widget(timestamps, chunks[2]);

    let body = if task.body.is_empty() {
        Paragraph::new(Span::styled("No description.", Style::default().fg(Color::DarkGray)))
    } else {
        Paragraph::new(task.body.clone())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
    };
    f.render_widget(body, chunks[3]);

    let instructions = common::create_instructions_paragraph(&[
        ("Esc", Color::Red, " Close"),
        shortcuts::SEPARATOR,
        ("q", Color::Red, " Close"),
    ]);
    f.render_widget(instructions, chunks[4]);
}
