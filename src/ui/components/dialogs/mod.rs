//! Dialog components module

pub mod common;
pub mod row_actions_dialog;
pub mod system_dialogs;
pub mod task_detail_dialog;
pub mod user_form;

pub use user_form::{FormField, UserFormState};
