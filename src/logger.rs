//! Custom logging module.
//!
//! This module provides a logger that captures log entries into a bounded
//! buffer shared with the application state, so the log panel can show them
//! without writing to the terminal the UI is drawn on.

use crate::error::{AppError, AppResult};
use crate::state::HistoryRing;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Arc, Mutex};

/// Number of formatted entries kept for the log panel.
pub const LOG_CAPACITY: usize = 200;

/// Formatted log lines, oldest first.
pub type LogBuffer = Arc<Mutex<HistoryRing<String>>>;

/// Return an empty buffer with the default capacity.
///
pub fn new_buffer() -> LogBuffer {
    Arc::new(Mutex::new(HistoryRing::new(LOG_CAPACITY)))
}

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {:<5} {}", timestamp, level_str, record.args())
}

/// Logger that captures records into a [`LogBuffer`].
///
pub struct CaptureLogger {
    level: LevelFilter,
    buffer: LogBuffer,
}

impl CaptureLogger {
    pub fn new(level: LevelFilter, buffer: LogBuffer) -> Self {
        CaptureLogger { level, buffer }
    }
}

impl Log for CaptureLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned buffer only loses log lines
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install the capture logger as the global logger and return its buffer.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let buffer = new_buffer();
    let logger = CaptureLogger::new(level, buffer.clone());
    log::set_logger(Box::leak(Box::new(logger))).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level);
    Ok(buffer)
}
