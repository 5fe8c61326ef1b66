//! Reusable UI components

pub mod badge;
pub mod dialog_component;
pub mod dialogs;
pub mod navbar_component;
pub mod task_table_component;

pub use dialog_component::DialogComponent;
pub use navbar_component::NavbarComponent;
pub use task_table_component::TaskTableComponent;
