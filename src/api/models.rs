//! Wire types for the task-management API.
//!
//! Everything here mirrors the JSON the backend produces. Enumerated fields
//! keep their wire spelling (`IN_PROGRESS`, `HIGH`, ...) and deserialize any
//! value outside the known set into an `Unknown` fallback variant so a new
//! backend value can never break rendering.

use serde::{Deserialize, Serialize};

/// Envelope the API wraps successful payloads in: `{ "data": ... }`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error body the API may attach to a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

/// A task as returned by `/api/tasks` endpoints.
///
/// The free-text body travels under the wire name `task`; timestamps are
/// RFC 3339 strings and stay strings until display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: TaskType,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default)]
    pub team: String,
    #[serde(rename = "task", default)]
    pub body: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: String,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

/// Task type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    Bug,
    Feature,
    Documentation,
    #[serde(other)]
    Unknown,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Bug => "Bug",
            TaskType::Feature => "Feature",
            TaskType::Documentation => "Documentation",
            TaskType::Unknown => "Unknown",
        }
    }
}

/// Task status enumeration, wire spellings preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Done,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "TODO")]
    Todo,
    Backlog,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Done => "Done",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Todo => "TODO",
            TaskStatus::Backlog => "Backlog",
            TaskStatus::Canceled => "Canceled",
            TaskStatus::Unknown => "Unknown",
        }
    }
}

/// Task priority enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "LOW")]
    Low,
    #[serde(other)]
    Unknown,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "HIGH",
            TaskPriority::Medium => "MEDIUM",
            TaskPriority::Low => "LOW",
            TaskPriority::Unknown => "Unknown",
        }
    }
}

/// Request body for `POST /api/auth/register`.
///
/// The confirmation field of the user form is deliberately absent: it is a
/// client-side invariant and never transmitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}
