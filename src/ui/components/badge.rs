use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

use crate::api::{TaskPriority, TaskStatus, TaskType};
use crate::icons::IconService;

/// Single lookup for status presentation. Covers every variant, including
/// values the server may add later, which fall back to a plain badge.
#[must_use]
pub fn status_badge(status: TaskStatus) -> Span<'static> {
    let (color, bold) = match status {
        TaskStatus::Done => (Color::Green, true),
        TaskStatus::InProgress => (Color::Blue, true),
        TaskStatus::Todo => (Color::Yellow, true),
        TaskStatus::Backlog => (Color::DarkGray, false),
        TaskStatus::Canceled => (Color::Red, false),
        TaskStatus::Unknown => (Color::White, false),
    };

    let mut style = Style::default().fg(color);
    if bold {
        style = style.add_modifier(Modifier::BOLD);
    }

    Span::styled(status.as_str(), style)
}

/// Priority badge. HIGH is red, MEDIUM yellow, LOW green, anything else plain.
#[must_use]
pub fn priority_badge(priority: TaskPriority) -> Span<'static> {
    let style = match priority {
        TaskPriority::High => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        TaskPriority::Medium => Style::default().fg(Color::Yellow),
        TaskPriority::Low => Style::default().fg(Color::Green),
        TaskPriority::Unknown => Style::default().fg(Color::White),
    };

    Span::styled(priority.as_str(), style)
}

/// Type marker paired with the icon set currently in effect.
#[must_use]
pub fn type_badge(kind: TaskType, icons: &IconService) -> Span<'static> {
    let color = match kind {
        TaskType::Bug => Color::Red,
        TaskType::Feature => Color::Blue,
        TaskType::Documentation => Color::Yellow,
        TaskType::Unknown => Color::White,
    };

    Span::styled(icons.task_type_icon(kind).to_string(), Style::default().fg(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_gets_a_badge() {
        for status in [
            TaskStatus::Done,
            TaskStatus::InProgress,
            TaskStatus::Todo,
            TaskStatus::Backlog,
            TaskStatus::Canceled,
            TaskStatus::Unknown,
        ] {
            assert!(!status_badge(status).content.is_empty());
        }
    }

    #[test]
    fn high_priority_is_red_and_bold() {
        let badge = priority_badge(TaskPriority::High);
        assert_eq!(badge.style.fg, Some(Color::Red));
        assert!(badge.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn todo_status_is_yellow() {
        assert_eq!(status_badge(TaskStatus::Todo).style.fg, Some(Color::Yellow));
    }

    #[test]
    fn unknown_values_fall_back_to_plain() {
        assert_eq!(status_badge(TaskStatus::Unknown).style.fg, Some(Color::White));
        assert_eq!(priority_badge(TaskPriority::Unknown).style.fg, Some(Color::White));
    }

    #[test]
    fn low_priority_is_green() {
        assert_eq!(priority_badge(TaskPriority::Low).style.fg, Some(Color::Green));
    }

    #[test]
    fn type_markers_follow_the_palette() {
        let icons = IconService::default();
        assert_eq!(type_badge(TaskType::Bug, &icons).style.fg, Some(Color::Red));
        assert_eq!(type_badge(TaskType::Feature, &icons).style.fg, Some(Color::Blue));
        assert_eq!(type_badge(TaskType::Documentation, &icons).style.fg, Some(Color::Yellow));
    }
}
