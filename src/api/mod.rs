//! API client and data models for the remote task-management backend.

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, ApiConfig};
pub use error::ApiError;
pub use models::{DataEnvelope, RegisterRequest, Task, TaskPriority, TaskStatus, TaskType};
