//! Console Logger
//!
//! `log` backend for the browser: every record goes to the devtools console at
//! the matching level and is also kept in a bounded ring buffer so the page can
//! show recent activity without devtools open.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use wasm_bindgen::JsValue;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Fixed-capacity buffer that drops the oldest line when full
#[derive(Debug)]
pub struct RingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub struct ConsoleLogger {
    level: LevelFilter,
    buffer: Mutex<RingBuffer>,
}

impl ConsoleLogger {
    fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RingBuffer::new(capacity)),
        }
    }
}

/// `"HH:MM:SS.mmm LEVEL [target] message"`
pub fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "{} {:<5} [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(&now, record);
        let js = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&js),
            Level::Warn => web_sys::console::warn_1(&js),
            Level::Info => web_sys::console::info_1(&js),
            Level::Debug => web_sys::console::debug_1(&js),
            Level::Trace => web_sys::console::log_1(&js),
        }
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// Install the logger. Fails if another logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Recent log lines, oldest first. Empty before `init`.
pub fn recent_lines() -> Vec<String> {
    LOGGER
        .get()
        .and_then(|logger| logger.buffer.lock().ok().map(|b| b.lines()))
        .unwrap_or_default()
}
