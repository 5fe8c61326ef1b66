use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Shared body for the info and error dialogs: a bordered message with
/// scrolling once the text outgrows the visible area. Returns the viewport
/// height so page scrolling can step by it.
fn render_message_dialog(
    f: &mut Frame,
    dialog_area: Rect,
    title: String,
    border_color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    f.render_widget(Clear, dialog_area);

    let instructions = "Press any key to continue • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let total_lines = lines.len();
    let visible_height = content_area.height as usize;

    let message_text = if total_lines > visible_height {
        let max_scroll = total_lines.saturating_sub(visible_height);
        let clamped_offset = scroll_offset.min(max_scroll);

        *scrollbar_state = scrollbar_state
            .content_length(total_lines)
            .viewport_content_length(visible_height)
            .position(clamped_offset);

        lines
            .iter()
            .skip(clamped_offset)
            .take(visible_height)
            .copied()
            .collect::<Vec<&str>>()
            .join("\n")
    } else {
        message.to_string()
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left)
        .wrap(ratatui::widgets::Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }

    visible_height
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    let title = format!("{} Info", icons.info());
    render_message_dialog(f, dialog_area, title, Color::Blue, message, scroll_offset, scrollbar_state)
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect_lines(70, 12, area);
    let title = format!("{} Error", icons.error());
    render_message_dialog(f, dialog_area, title, Color::Red, message, scroll_offset, scrollbar_state)
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let help_content = r"
TASKDECK - Terminal Admin Dashboard
===================================

NAVIGATION
----------
1-5         Jump to a destination (Dashboard, Tasks, Users, Profile, Account)
s or /      Open the command search overlay
j/k         Move through table rows (down/up)
Esc         Cancel action or close dialogs

TASK TABLE
----------
Space       Toggle selection on the current row
a           Toggle selection on every row
Enter       Open the row action menu
r           Reload the task list from the server

USERS
-----
n           Open the user creation form
Tab         Next form field
Ctrl+U      Toggle visibility of the focused password field

GENERAL CONTROLS
----------------
?           Toggle this help panel
G           Show application logs
i           Change icon theme
q           Quit application
Ctrl+C      Quit application

OVERLAY SCROLLING
-----------------
j/k         Scroll content down/up
PageUp/Down Page through content
Home/End    Jump to top or bottom

Press 'Esc' or '?' to close this help panel
";

    let help_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, help_area);

    let margin_x = 2;
    let margin_y = 1;
    let help_content_area = Rect::new(
        help_area.x + margin_x,
        help_area.y + margin_y,
        help_area.width.saturating_sub(margin_x * 2),
        help_area.height.saturating_sub(margin_y * 2),
    );

    let lines: Vec<&str> = help_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = help_content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let help_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help - Press 'Esc' or '?' to close")
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, help_content_area, scrollbar_state);
    }

    visible_height
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let margin_x = 2;
    let margin_y = 1;
    let logs_content_area = Rect::new(
        logs_area.x + margin_x,
        logs_area.y + margin_y,
        logs_area.width.saturating_sub(margin_x * 2),
        logs_area.height.saturating_sub(margin_y * 2),
    );

    let logs = logger.get_logs();
    let logs_content = if logs.is_empty() {
        "No logs recorded yet".to_string()
    } else {
        logs.join("\n")
    };

    let lines: Vec<&str> = logs_content.lines().collect();
    let total_lines = lines.len();
    let visible_height = logs_content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let logs_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<&str>>()
        .join("\n");

    let logs_paragraph = Paragraph::new(logs_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Logs - Press 'Esc', 'G' or 'q' to close")
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(logs_paragraph, logs_content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, logs_content_area, scrollbar_state);
    }

    visible_height
}
