//! Core UI building blocks.
//!
//! Components implement the [`Component`] trait, communicate through
//! [`Action`] values, and hand long-running API calls to the
//! [`RequestManager`], which reports back over an action channel.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod request_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use request_manager::RequestManager;
