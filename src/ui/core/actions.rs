use crate::api::{RegisterRequest, Task};
use crate::routes::Route;

/// Messages flowing through the component hierarchy. Key handlers produce
/// them, background requests report through them, and the app component
/// consumes whatever the child components leave untouched.
#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    NextRow,
    PreviousRow,

    // Table selection (purely local UI state)
    ToggleRowSelected(i64),
    ToggleAllRows,

    // Task list
    ReloadTasks,
    TasksLoaded(Vec<Task>),
    TasksLoadFailed(String),

    // Row detail workflow
    ViewTask(i64),
    TaskDetailLoaded { id: i64, task: Task },
    TaskDetailFailed { id: i64, message: String },
    DismissTaskDetail(i64),

    // User registration workflow
    RegisterUser(RegisterRequest),
    RegistrationSucceeded,
    RegistrationFailed(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

/// The modal surfaces the dialog component can present.
#[derive(Debug, Clone)]
pub enum DialogType {
    /// Per-row action menu (single "View" entry).
    RowActions { task_id: i64, title: String },
    /// Detail overlay holding the fetched snapshot; discarded on close.
    TaskDetail(Task),
    UserCreation,
    Search,
    Error(String),
    Info(String),
    Help,
    Logs,
}
