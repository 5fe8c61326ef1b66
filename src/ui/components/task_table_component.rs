use std::collections::HashSet;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::api::Task;
use crate::icons::IconService;
use crate::ui::components::badge::{priority_badge, status_badge, type_badge};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

/// The task table: one row per task with a selection checkbox, type marker,
/// title, status and priority badges. Selection is plain UI state and never
/// leaves this component.
pub struct TaskTableComponent {
    pub tasks: Vec<Task>,
    pub selected_ids: HashSet<i64>,
    pub cursor: usize,
    pub table_state: TableState,
    pub icons: IconService,
    pub loading: bool,
}

impl Default for TaskTableComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskTableComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_ids: HashSet::new(),
            cursor: 0,
            table_state: TableState::default(),
            icons: IconService::default(),
            loading: false,
        }
    }

    pub fn update_data(&mut self, tasks: Vec<Task>, icons: IconService, loading: bool) {
        // Selections for rows that disappeared are dropped
        let ids: HashSet<i64> = tasks.iter().map(|t| t.id).collect();
        self.selected_ids.retain(|id| ids.contains(id));

        self.tasks = tasks;
        self.icons = icons;
        self.loading = loading;
        self.update_table_state();
    }

    fn update_table_state(&mut self) {
        if self.tasks.is_empty() {
            self.cursor = 0;
            self.table_state.select(None);
        } else {
            if self.cursor >= self.tasks.len() {
                self.cursor = self.tasks.len() - 1;
            }
            self.table_state.select(Some(self.cursor));
        }
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        self.tasks.get(self.cursor)
    }

    pub fn all_selected(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|t| self.selected_ids.contains(&t.id))
    }

    fn toggle_all(&mut self) {
        if self.all_selected() {
            self.selected_ids.clear();
        } else {
            self.selected_ids = self.tasks.iter().map(|t| t.id).collect();
        }
    }

    fn build_row<'a>(&'a self, task: &'a Task) -> Row<'a> {
        let checkbox = if self.selected_ids.contains(&task.id) {
            self.icons.selected()
        } else {
            self.icons.unselected()
        };

        Row::new(vec![
            Cell::from(checkbox),
            Cell::from(type_badge(task.kind, &self.icons)),
            Cell::from(Span::raw(task.title.as_str())),
            Cell::from(status_badge(task.status)),
            Cell::from(priority_badge(task.priority)),
            Cell::from(Span::styled(task.team.as_str(), Style::default().fg(Color::DarkGray))),
        ])
    }
}

impl Component for TaskTableComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousRow,
            KeyCode::Down | KeyCode::Char('j') => Action::NextRow,
            KeyCode::Char(' ') => match self.cursor_task() {
                Some(task) => Action::ToggleRowSelected(task.id),
                None => Action::None,
            },
            KeyCode::Char('a') => Action::ToggleAllRows,
            KeyCode::Enter => match self.cursor_task() {
                Some(task) => Action::ShowDialog(DialogType::RowActions {
                    task_id: task.id,
                    title: task.title.clone(),
                }),
                None => Action::None,
            },
            KeyCode::Char('r') => Action::ReloadTasks,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextRow => {
                if !self.tasks.is_empty() {
                    self.cursor = (self.cursor + 1) % self.tasks.len();
                    self.update_table_state();
                }
                Action::None
            }
            Action::PreviousRow => {
                if !self.tasks.is_empty() {
                    self.cursor = if self.cursor == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.cursor - 1
                    };
                    self.update_table_state();
                }
                Action::None
            }
            Action::ToggleRowSelected(id) => {
                if !self.selected_ids.remove(&id) {
                    self.selected_ids.insert(id);
                }
                Action::None
            }
            Action::ToggleAllRows => {
                self.toggle_all();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!("Tasks ({})", self.tasks.len());

        if self.tasks.is_empty() {
            let message = if self.loading {
                "Loading tasks..."
            } else {
                "No tasks. Press 'r' to reload."
            };
            let empty = Table::new(
                vec![Row::new(vec![Cell::from(message)])],
                [Constraint::Min(0)],
            )
            .block(Block::default().borders(Borders::ALL).title(title));

            f.render_widget(empty, rect);
            return;
        }

        let header_checkbox = if self.all_selected() {
            self.icons.selected()
        } else {
            self.icons.unselected()
        };

        let header = Row::new(vec![
            Cell::from(header_checkbox),
            Cell::from("Type"),
            Cell::from("Title"),
            Cell::from("Status"),
            Cell::from("Priority"),
            Cell::from("Team"),
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self.tasks.iter().map(|task| self.build_row(task)).collect();

        let widths = [
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(20),
            Constraint::Length(12),
            Constraint::Length(8),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut table_state = self.table_state.clone();
        f.render_stateful_widget(table, rect, &mut table_state);
        self.table_state = table_state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TaskPriority, TaskStatus, TaskType};

    fn task(id: i64, title: &str) -> Task {
        Task {
            id,
            title: title.to_string(),
            kind: TaskType::Bug,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            team: "core".to_string(),
            body: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn table_with(count: i64) -> TaskTableComponent {
        let mut component = TaskTableComponent::new();
        let tasks = (1..=count).map(|id| task(id, &format!("Task {id}"))).collect();
        component.update_data(tasks, IconService::default(), false);
        component
    }

    #[test]
    fn toggle_all_selects_every_row() {
        let mut table = table_with(3);
        table.update(Action::ToggleAllRows);
        assert_eq!(table.selected_ids.len(), 3);
        assert!(table.all_selected());
    }

    #[test]
    fn deselect_one_after_select_all_leaves_rest() {
        let mut table = table_with(4);
        table.update(Action::ToggleAllRows);
        table.update(Action::ToggleRowSelected(2));
        assert_eq!(table.selected_ids.len(), 3);
        assert!(!table.selected_ids.contains(&2));
        assert!(!table.all_selected());
    }

    #[test]
    fn toggle_all_clears_when_everything_selected() {
        let mut table = table_with(2);
        table.update(Action::ToggleAllRows);
        table.update(Action::ToggleAllRows);
        assert!(table.selected_ids.is_empty());
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut table = table_with(2);
        table.update(Action::PreviousRow);
        assert_eq!(table.cursor, 1);
        table.update(Action::NextRow);
        assert_eq!(table.cursor, 0);
    }

    #[test]
    fn stale_selection_dropped_on_reload() {
        let mut table = table_with(3);
        table.update(Action::ToggleRowSelected(3));
        table.update_data(
            vec![task(1, "Task 1"), task(2, "Task 2")],
            IconService::default(),
            false,
        );
        assert!(table.selected_ids.is_empty());
    }
}
