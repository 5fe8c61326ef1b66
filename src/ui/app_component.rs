use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tokio::sync::mpsc;

use crate::api::{ApiClient, Task};
use crate::config::Config;
use crate::constants::{ERROR_TASK_DETAIL_PREFIX, ERROR_TASK_LIST_PREFIX, SUCCESS_USER_CREATED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::routes::Route;
use crate::ui::components::{DialogComponent, NavbarComponent, TaskTableComponent};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    request_manager::RequestManager,
    Component,
};
use crate::ui::layout::LayoutManager;

/// What the app knows about one row's detail request. A row with no entry
/// is idle; the entry is removed again when the overlay is dismissed.
#[derive(Debug, Clone)]
pub enum DetailState {
    Fetching,
    Shown,
    Failed(String),
}

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub tasks: Vec<Task>,
    pub details: HashMap<i64, DetailState>,
    pub loading: bool,
}

pub struct AppComponent {
    // Component composition
    navbar: NavbarComponent,
    table: TaskTableComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    api_client: ApiClient,
    request_manager: RequestManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    icons: IconService,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(api_client: ApiClient, config: &Config) -> Self {
        let (request_manager, background_action_rx) = RequestManager::new();
        let logger = Logger::new();
        let icons = IconService::new(config.ui.icon_theme);

        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());
        dialog.update_display_config(config.display.clone());

        let state = AppState {
            loading: true,
            ..Default::default()
        };

        Self {
            navbar: NavbarComponent::new(),
            table: TaskTableComponent::new(),
            dialog,
            state,
            api_client,
            request_manager,
            background_action_rx,
            logger,
            icons,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the first task-list fetch on startup
    pub fn trigger_initial_load(&mut self) {
        self.logger.log("App: fetching initial task list".to_string());
        self.state.loading = true;
        self.request_manager.spawn_list_fetch(self.api_client.clone());
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        self.navbar.update_data(self.state.route, self.icons.clone());
        self.table
            .update_data(self.state.tasks.clone(), self.icons.clone(), self.state.loading);
        self.dialog.update_icons(self.icons.clone());
        self.dialog.set_logger(self.logger.clone());

        // Rows go back to idle once their overlay is gone: a Shown entry is
        // only valid while its detail dialog is the open one (another dialog
        // may displace it), a Failed entry only while any dialog is up
        let dialog_visible = self.dialog.is_visible();
        let shown_task = match &self.dialog.dialog_type {
            Some(DialogType::TaskDetail(task)) => Some(task.id),
            _ => None,
        };
        self.state.details.retain(|id, detail| match detail {
            DetailState::Fetching => true,
            DetailState::Shown => shown_task == Some(*id),
            DetailState::Failed(_) => dialog_visible,
        });
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('n') => Action::ShowDialog(DialogType::UserCreation),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Esc => {
                if self.dialog.is_visible() {
                    Action::HideDialog
                } else {
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(route) => {
                self.logger.log(format!("Navigation: {}", route.title()));
                self.state.route = route;
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icons: theme switched to {:?}", self.icons.theme()));
                Action::None
            }
            Action::ReloadTasks => {
                self.logger.log("Tasks: reloading list".to_string());
                self.state.loading = true;
                self.request_manager.spawn_list_fetch(self.api_client.clone());
                Action::None
            }
            Action::TasksLoaded(tasks) => {
                self.logger.log(format!("Tasks: loaded {} rows", tasks.len()));
                self.state.loading = false;
                self.state.tasks = tasks;
                Action::None
            }
            Action::TasksLoadFailed(message) => {
                self.logger.log(format!("Tasks: load failed: {message}"));
                self.state.loading = false;
                Action::ShowDialog(DialogType::Error(format!("{ERROR_TASK_LIST_PREFIX}: {message}")))
            }
            Action::ViewTask(task_id) => {
                if matches!(self.state.details.get(&task_id), Some(DetailState::Fetching)) {
                    self.logger.log(format!("Detail: fetch for row {task_id} already running"));
                    return Action::None;
                }
                self.logger.log(format!("Detail: fetching row {task_id}"));
                self.state.details.insert(task_id, DetailState::Fetching);
                self.request_manager.spawn_detail_fetch(self.api_client.clone(), task_id);
                Action::None
            }
            Action::TaskDetailLoaded { id, task } => {
                self.logger.log(format!("Detail: row {id} loaded"));
                self.state.details.insert(id, DetailState::Shown);
                Action::ShowDialog(DialogType::TaskDetail(task))
            }
            Action::TaskDetailFailed { id, message } => {
                self.logger.log(format!("Detail: row {id} failed: {message}"));
                self.state.details.insert(id, DetailState::Failed(message.clone()));
                Action::ShowDialog(DialogType::Error(format!("{ERROR_TASK_DETAIL_PREFIX}: {message}")))
            }
            Action::DismissTaskDetail(id) => {
                self.logger.log(format!("Detail: row {id} dismissed"));
                self.state.details.remove(&id);
                self.request_manager.cancel_detail_fetch(id);
                Action::None
            }
            Action::RegisterUser(request) => {
                self.logger.log(format!("Users: registering '{}'", request.username));
                self.request_manager.spawn_registration(self.api_client.clone(), request);
                Action::None
            }
            Action::RegistrationSucceeded => {
                self.logger.log("Users: registration succeeded".to_string());
                // The dialog already closed itself; the list is re-fetched so
                // the table reflects the new server state
                self.state.loading = true;
                self.request_manager.spawn_list_fetch(self.api_client.clone());
                Action::ShowDialog(DialogType::Info(SUCCESS_USER_CREATED.to_string()))
            }
            Action::RegistrationFailed(message) => {
                // Normally consumed by the open form; reaching here means the
                // form is gone, so fall back to the standard error overlay
                self.logger.log(format!("Users: registration failed: {message}"));
                Action::ShowDialog(DialogType::Error(message))
            }
            // ShowDialog, HideDialog and anything component-level pass through
            _ => action,
        }
    }

    /// Process background actions from the request manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        self.request_manager.cleanup_finished();
        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    let navbar_action = self.navbar.handle_key_events(key);

                    if !matches!(navbar_action, Action::None) {
                        navbar_action
                    } else if self.state.route.shows_tasks() {
                        let table_action = self.table.handle_key_events(key);

                        if !matches!(table_action, Action::None) {
                            table_action
                        } else {
                            self.handle_global_key(key)
                        }
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
        self.sync_component_data();
    }

    /// Apply an action that arrived outside the key path, such as a finished
    /// background request.
    pub fn handle_event_action(&mut self, action: Action) {
        self.dispatch(action);
        self.sync_component_data();
    }

    /// Send one action through the component chain, then apply app-level
    /// handling. ShowDialog produced at the app level still has to reach the
    /// dialog component, hence the second pass.
    pub fn dispatch(&mut self, action: Action) {
        let action = self.dialog.update(action);
        let action = self.table.update(action);
        let action = self.handle_app_action(action);

        if let Action::ShowDialog(dialog_type) = action {
            self.dialog.update(Action::ShowDialog(dialog_type));
        }
    }

    fn render_placeholder_page(&self, f: &mut Frame, rect: Rect, route: Route) {
        let (text, hint) = match route {
            Route::Users => ("User management", "Press 'n' to create a user"),
            Route::Profile => ("Profile", "Nothing to configure here yet"),
            Route::Account => ("Account", "Nothing to configure here yet"),
            _ => ("", ""),
        };

        let body = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(text, Style::default().fg(Color::White))),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(route.title()));

        f.render_widget(body, rect);
    }

    fn render_loading_indicator(&self, f: &mut Frame, rect: Rect) {
        use ratatui::widgets::Clear;

        let popup_area = LayoutManager::centered_rect_lines(30, 3, rect);

        let content = Paragraph::new(Line::from(Span::styled(
            "Loading tasks...",
            Style::default().fg(Color::Yellow),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(Style::default().fg(Color::Yellow)));

        f.render_widget(Clear, popup_area);
        f.render_widget(content, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_global_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);

        self.navbar.render(f, chunks[0]);

        if self.state.route.shows_tasks() {
            self.table.render(f, chunks[1]);
        } else {
            self.render_placeholder_page(f, chunks[1], self.state.route);
        }

        if self.state.loading && !self.state.tasks.is_empty() {
            self.render_loading_indicator(f, rect);
        }

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiConfig, TaskPriority, TaskStatus, TaskType};

    fn app() -> AppComponent {
        let client = ApiClient::new(ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            token: "test-token".to_string(),
            timeout_secs: 5,
        })
        .unwrap();
        AppComponent::new(client, &Config::default())
    }

    fn sample_task(id: i64) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            kind: TaskType::Feature,
            status: TaskStatus::InProgress,
            priority: TaskPriority::Medium,
            team: "core".to_string(),
            body: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[tokio::test]
    async fn tasks_loaded_replaces_state() {
        let mut app = app();
        app.dispatch(Action::TasksLoaded(vec![sample_task(1), sample_task(2)]));
        assert_eq!(app.state.tasks.len(), 2);
        assert!(!app.state.loading);
    }

    #[tokio::test]
    async fn detail_success_opens_overlay_and_marks_row() {
        let mut app = app();
        app.dispatch(Action::TaskDetailLoaded {
            id: 42,
            task: sample_task(42),
        });
        assert!(matches!(app.state.details.get(&42), Some(DetailState::Shown)));
        assert!(app.dialog.is_visible());
    }

    #[tokio::test]
    async fn detail_failure_surfaces_error_overlay() {
        let mut app = app();
        app.dispatch(Action::TaskDetailFailed {
            id: 42,
            message: "boom".to_string(),
        });
        assert!(matches!(app.state.details.get(&42), Some(DetailState::Failed(_))));
        assert!(app.dialog.is_visible());
    }

    #[tokio::test]
    async fn dismissing_detail_resets_row() {
        let mut app = app();
        app.dispatch(Action::TaskDetailLoaded {
            id: 7,
            task: sample_task(7),
        });
        app.dispatch(Action::DismissTaskDetail(7));
        assert!(app.state.details.get(&7).is_none());
    }

    #[tokio::test]
    async fn displacing_the_detail_overlay_resets_the_row() {
        let mut app = app();
        app.handle_event_action(Action::TaskDetailLoaded {
            id: 9,
            task: sample_task(9),
        });
        assert!(matches!(app.state.details.get(&9), Some(DetailState::Shown)));

        // A background failure replaces the detail overlay with an error
        // dialog; the row must not stay stuck in Shown
        app.handle_event_action(Action::TasksLoadFailed("boom".to_string()));
        assert!(app.state.details.get(&9).is_none());
        assert!(app.dialog.is_visible());
    }

    #[tokio::test]
    async fn registration_success_shows_info_and_refetches() {
        let mut app = app();
        app.dispatch(Action::RegistrationSucceeded);
        assert!(app.state.loading);
        assert!(app.dialog.is_visible());
    }

    #[tokio::test]
    async fn navigate_switches_route() {
        let mut app = app();
        app.dispatch(Action::Navigate(Route::Users));
        assert_eq!(app.state.route, Route::Users);
    }
}
