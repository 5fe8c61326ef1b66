//! Taskdeck - a terminal admin dashboard for a task-management backend
//!
//! This library provides a terminal-based rendition of an admin dashboard:
//! a task table with per-row detail overlays, a user-creation form, and a
//! command-style search over the navigable destinations. All data comes from
//! a REST backend through an authorized HTTP client.
//!
//! # Modules
//!
//! * [`api`] - HTTP client, data models, and API error handling
//! * [`config`] - Application configuration management
//! * [`routes`] - Navigation destinations and the search index over them
//! * [`token`] - Bearer-token storage and lookup
//! * [`ui`] - Terminal user interface components and rendering
//! * [`validation`] - Field rules for the user-creation form

/// HTTP client and data models for the task-management API
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Navigation destinations and command-search filtering
pub mod routes;

/// Bearer-token storage
pub mod token;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

/// Validation rules for the user-creation form
pub mod validation;
