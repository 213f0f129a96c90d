//! Logging setup
//!
//! All logging goes through the `log` facade. [`init`] installs a `fern`
//! dispatch that always feeds the in-memory [`Logger`] (shown in the log
//! panel) and, when enabled in the config, appends to a log file in the
//! data directory.

use crate::config::LoggingConfig;
use crate::constants::{LOG_BUFFER_CAPACITY, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_BUFFER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Add an already formatted line, evicting the oldest past capacity
    pub fn push(&self, line: String) {
        let mut logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        if logs.len() == self.capacity {
            logs.pop_front();
        }
        logs.push_back(line);
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        let logs = self.logs.lock().unwrap_or_else(PoisonError::into_inner);
        logs.iter().rev().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all logs
    pub fn clear(&self) {
        self.logs.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the dispatch without installing it
///
/// `log_file` adds a file chain; pass `None` to keep logs in memory only.
pub fn build_dispatch(config: &LoggingConfig, logger: &Logger, log_file: Option<&Path>) -> Result<fern::Dispatch> {
    let buffer = logger.clone();
    let mut dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}",
                Local::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                message
            ))
        })
        .level(config.level_filter()?)
        .chain(fern::Output::call(move |record| buffer.push(record.args().to_string())));

    if let Some(path) = log_file {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.chain(file);
    }

    Ok(dispatch)
}

/// Install the global logger. Can only succeed once per process.
pub fn init(config: &LoggingConfig, logger: &Logger) -> Result<()> {
    let log_file = if config.enabled { Some(get_log_file_path()?) } else { None };

    build_dispatch(config, logger, log_file.as_deref())?
        .apply()
        .context("A global logger is already installed")?;

    if let Some(path) = log_file {
        log::info!("Logging to {}", path.display());
    }
    Ok(())
}

/// Location of the log file when file logging is enabled
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join("confirmist").join(LOG_FILE_NAME))
}
