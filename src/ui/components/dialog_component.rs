//! Modal dialog component for overlays on top of the main layout.
//!
//! One component owns whichever overlay is open: the row action menu, the
//! task detail view, the user-creation form, the command search, and the
//! system dialogs (info, error, help, logs).

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

use crate::config::DisplayConfig;
use crate::constants::{SEARCH_EMPTY_STATE, SEARCH_PLACEHOLDER};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::routes::{filter_destinations, Route};
use crate::ui::components::dialogs::{
    row_actions_dialog, system_dialogs, task_detail_dialog, user_form, UserFormState,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub icons: IconService,
    pub logger: Logger,
    pub display_config: DisplayConfig,

    // Command search state
    pub search_query: String,
    pub search_results: Vec<&'static str>,
    pub search_cursor: usize,

    // User-creation form state
    pub form: UserFormState,

    // Scrolling support for long content dialogs. The viewport height is
    // recorded at render time so PageUp/PageDown step by one screenful.
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    pub viewport_height: usize,
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogComponent {
    pub fn new() -> Self {
        Self {
            dialog_type: None,
            icons: IconService::default(),
            logger: Logger::new(),
            display_config: DisplayConfig::default(),
            search_query: String::new(),
            search_results: filter_destinations(""),
            search_cursor: 0,
            form: UserFormState::default(),
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            viewport_height: 0,
        }
    }

    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    pub fn update_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.search_query.clear();
        self.search_results = filter_destinations("");
        self.search_cursor = 0;
        self.form.reset();
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::new(0);
        self.viewport_height = 0;
    }

    /// Re-run the destination filter after every keystroke.
    fn refresh_search_results(&mut self) {
        self.search_results = filter_destinations(&self.search_query);
        if self.search_cursor >= self.search_results.len() {
            self.search_cursor = 0;
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::HideDialog,
            KeyCode::Enter => match self.search_results.get(self.search_cursor) {
                Some(name) => match Route::from_name(name) {
                    Some(route) => {
                        self.logger.log(format!("Search: navigating to {name}"));
                        Action::Navigate(route)
                    }
                    None => Action::None,
                },
                None => Action::None,
            },
            KeyCode::Down | KeyCode::Tab => {
                if !self.search_results.is_empty() {
                    self.search_cursor = (self.search_cursor + 1) % self.search_results.len();
                }
                Action::None
            }
            KeyCode::Up | KeyCode::BackTab => {
                if !self.search_results.is_empty() {
                    self.search_cursor = if self.search_cursor == 0 {
                        self.search_results.len() - 1
                    } else {
                        self.search_cursor - 1
                    };
                }
                Action::None
            }
            KeyCode::Char(c) => {
                self.search_query.push(c);
                self.refresh_search_results();
                Action::None
            }
            KeyCode::Backspace => {
                self.search_query.pop();
                self.refresh_search_results();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn scroll_to(&mut self, offset: usize) {
        self.scroll_offset = offset;
        self.scrollbar_state = self.scrollbar_state.position(offset);
    }

    fn handle_scrollable_key(&mut self, key: KeyEvent, dismiss_on_other: bool) -> Action {
        // Before the first render the viewport height is unknown; paging
        // then moves a single line. Offsets are clamped at render time.
        let page = self.viewport_height.max(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_to(self.scroll_offset.saturating_sub(1)),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_to(self.scroll_offset.saturating_add(1)),
            KeyCode::PageUp => self.scroll_to(self.scroll_offset.saturating_sub(page)),
            KeyCode::PageDown => self.scroll_to(self.scroll_offset.saturating_add(page)),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(usize::MAX),
            _ if dismiss_on_other => return Action::HideDialog,
            _ => {}
        }
        Action::None
    }

    fn render_search_dialog(&mut self, f: &mut Frame, area: Rect) {
        use ratatui::{
            layout::{Constraint, Layout, Margin},
            style::{Color, Modifier, Style},
            widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
        };

        use crate::ui::layout::LayoutManager;

        let popup_area = LayoutManager::centered_rect(60, 60, area);
        f.render_widget(Clear, popup_area);

        let title = format!(" {} Search ", self.icons.search());
        let main_block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(main_block, popup_area);

        let content_area = popup_area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        let layout = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(content_area);

        let query_display = if self.search_query.is_empty() {
            SEARCH_PLACEHOLDER.to_string()
        } else {
            self.search_query.clone()
        };
        let query_style = if self.search_query.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let input_paragraph = Paragraph::new(query_display).style(query_style).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Query")
                .style(Style::default().fg(Color::Gray)),
        );
        f.render_widget(input_paragraph, layout[0]);

        f.set_cursor_position((
            layout[0].x + 1 + self.search_query.chars().count() as u16,
            layout[0].y + 1,
        ));

        if self.search_results.is_empty() {
            let empty = Paragraph::new(SEARCH_EMPTY_STATE)
                .style(Style::default().fg(Color::DarkGray))
                .block(Block::default().borders(Borders::ALL).title("Go to"));
            f.render_widget(empty, layout[1]);
            return;
        }

        let go_to = self.icons.go_to();
        let items: Vec<ListItem> = self
            .search_results
            .iter()
            .map(|name| ListItem::new(format!("{go_to} {name}")))
            .collect();

        let results_list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Go to"))
            .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

        let mut list_state = ListState::default();
        list_state.select(Some(self.search_cursor));
        f.render_stateful_widget(results_list, layout[1], &mut list_state);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match &self.dialog_type {
            None => Action::None,
            Some(DialogType::Info(_)) | Some(DialogType::Error(_)) => self.handle_scrollable_key(key, true),
            Some(DialogType::Help) => match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Action::HideDialog,
                _ => self.handle_scrollable_key(key, false),
            },
            Some(DialogType::Logs) => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => self.handle_scrollable_key(key, false),
            },
            Some(DialogType::RowActions { task_id, .. }) => {
                let task_id = *task_id;
                match key.code {
                    KeyCode::Esc | KeyCode::Char('q') => Action::HideDialog,
                    // The menu has a single entry, so Enter always opens it
                    KeyCode::Enter => Action::ViewTask(task_id),
                    _ => Action::None,
                }
            }
            Some(DialogType::TaskDetail(task)) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => Action::DismissTaskDetail(task.id),
                _ => Action::None,
            },
            Some(DialogType::Search) => self.handle_search_key(key),
            Some(DialogType::UserCreation) => self.form.handle_key(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                match &dialog_type {
                    DialogType::Search => {
                        self.search_query.clear();
                        self.search_results = filter_destinations("");
                        self.search_cursor = 0;
                    }
                    DialogType::UserCreation => self.form.reset(),
                    _ => {}
                }
                self.scroll_offset = 0;
                self.scrollbar_state = ScrollbarState::new(0);
                self.viewport_height = 0;
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            Action::Navigate(_) | Action::ViewTask(_) | Action::DismissTaskDetail(_) => {
                // These originate inside a dialog; the overlay closes and the
                // action continues up to the app
                self.clear_dialog();
                action
            }
            Action::RegistrationSucceeded => {
                self.clear_dialog();
                action
            }
            Action::RegistrationFailed(message) => {
                if matches!(self.dialog_type, Some(DialogType::UserCreation)) {
                    self.form.registration_failed(message);
                    Action::None
                } else {
                    Action::RegistrationFailed(message)
                }
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        match dialog_type {
            DialogType::RowActions { title, .. } => {
                row_actions_dialog::render_row_actions_dialog(f, rect, &title);
            }
            DialogType::TaskDetail(task) => {
                task_detail_dialog::render_task_detail_dialog(f, rect, &self.icons, &task, &self.display_config);
            }
            DialogType::UserCreation => {
                user_form::render_user_form_dialog(f, rect, &self.form);
            }
            DialogType::Search => self.render_search_dialog(f, rect),
            DialogType::Info(message) => {
                self.viewport_height = system_dialogs::render_info_dialog(
                    f,
                    rect,
                    &self.icons,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Error(message) => {
                self.viewport_height = system_dialogs::render_error_dialog(
                    f,
                    rect,
                    &self.icons,
                    &message,
                    self.scroll_offset,
                    &mut self.scrollbar_state,
                );
            }
            DialogType::Help => {
                self.viewport_height =
                    system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state);
            }
            DialogType::Logs => {
                let logger = self.logger.clone();
                self.viewport_height =
                    system_dialogs::render_logs_dialog(f, rect, &logger, self.scroll_offset, &mut self.scrollbar_state);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn open_search() -> DialogComponent {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Search));
        dialog
    }

    #[test]
    fn empty_query_lists_every_destination() {
        let dialog = open_search();
        assert_eq!(dialog.search_results.len(), 5);
    }

    #[test]
    fn query_narrows_results() {
        let mut dialog = open_search();
        dialog.handle_key_events(key(KeyCode::Char('t')));
        dialog.handle_key_events(key(KeyCode::Char('a')));
        assert_eq!(dialog.search_results, vec!["Tasks"]);
    }

    #[test]
    fn no_match_yields_empty_results() {
        let mut dialog = open_search();
        for c in "zzz".chars() {
            dialog.handle_key_events(key(KeyCode::Char(c)));
        }
        assert!(dialog.search_results.is_empty());
    }

    #[test]
    fn backspace_restores_wider_results() {
        let mut dialog = open_search();
        dialog.handle_key_events(key(KeyCode::Char('t')));
        dialog.handle_key_events(key(KeyCode::Char('a')));
        dialog.handle_key_events(key(KeyCode::Backspace));
        dialog.handle_key_events(key(KeyCode::Backspace));
        assert_eq!(dialog.search_results.len(), 5);
    }

    #[test]
    fn enter_navigates_to_selected_destination() {
        let mut dialog = open_search();
        dialog.handle_key_events(key(KeyCode::Char('u')));
        let action = dialog.handle_key_events(key(KeyCode::Enter));
        assert!(matches!(action, Action::Navigate(Route::Users)));
    }

    #[test]
    fn detail_dismissal_reports_the_row() {
        use crate::api::{Task, TaskPriority, TaskStatus, TaskType};

        let task = Task {
            id: 7,
            title: "t".to_string(),
            kind: TaskType::Bug,
            status: TaskStatus::Todo,
            priority: TaskPriority::High,
            team: String::new(),
            body: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::TaskDetail(task)));

        let action = dialog.handle_key_events(key(KeyCode::Esc));
        assert!(matches!(action, Action::DismissTaskDetail(7)));
    }

    #[test]
    fn registration_failure_keeps_form_open() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::UserCreation));

        let action = dialog.update(Action::RegistrationFailed("Email taken".to_string()));
        assert!(matches!(action, Action::None));
        assert!(dialog.is_visible());
        assert_eq!(dialog.form.error_banner.as_deref(), Some("Email taken"));
    }

    #[test]
    fn page_scroll_steps_by_rendered_height() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::Help));

        // Nothing rendered yet, so a page is a single line
        dialog.handle_key_events(key(KeyCode::PageDown));
        assert_eq!(dialog.scroll_offset, 1);

        dialog.viewport_height = 15;
        dialog.handle_key_events(key(KeyCode::PageDown));
        assert_eq!(dialog.scroll_offset, 16);
        dialog.handle_key_events(key(KeyCode::Char('j')));
        assert_eq!(dialog.scroll_offset, 17);
        dialog.handle_key_events(key(KeyCode::PageUp));
        assert_eq!(dialog.scroll_offset, 2);
        dialog.handle_key_events(key(KeyCode::Home));
        assert_eq!(dialog.scroll_offset, 0);
    }

    #[test]
    fn registration_success_closes_form() {
        let mut dialog = DialogComponent::new();
        dialog.update(Action::ShowDialog(DialogType::UserCreation));

        let action = dialog.update(Action::RegistrationSucceeded);
        assert!(matches!(action, Action::RegistrationSucceeded));
        assert!(!dialog.is_visible());
    }
}
