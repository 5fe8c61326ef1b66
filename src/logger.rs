//! Logging: an in-memory activity feed for the logs dialog plus an optional
//! file dispatcher for the `log` facade.
//!
//! The TUI owns the terminal, so the `log` macros must never write to
//! stdout; when logging is enabled they go to a file via fern.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::{Local, Utc};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared activity log that can be cloned across components and rendered in
/// the logs dialog.
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Install a fern file dispatcher for the `log` facade. No-op when logging
/// is disabled in the config.
pub fn init_file_logging(config: &LoggingConfig, path: &Path) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory: {}", parent.display()))?;
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(path).with_context(|| format!("failed to open log file: {}", path.display()))?)
        .apply()
        .context("failed to install logger")?;

    Ok(())
}
