//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Notification Messages
pub const SUCCESS_USER_CREATED: &str = "User created successfully.";
pub const ERROR_USER_CREATE_FALLBACK: &str = "Failed to create user. Please try again.";
pub const ERROR_TASK_LIST_PREFIX: &str = "Failed to load tasks";
pub const ERROR_TASK_DETAIL_PREFIX: &str = "Failed to load task details";

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const SEARCH_EMPTY_STATE: &str = "No results found.";
pub const SEARCH_PLACEHOLDER: &str = "Type a command or search...";

// UI Layout Constants
/// Height of the navigation bar in rows, borders included
pub const NAVBAR_HEIGHT: u16 = 3;
/// Maximum request timeout accepted by config validation, in seconds
pub const API_TIMEOUT_MAX_SECS: u64 = 300;
