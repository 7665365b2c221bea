//! Console Logger
//!
//! A `log` backend for the frontend. Lines are timestamped and written to the
//! browser console on wasm32, and to stderr everywhere else (native tests).

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger writing one formatted line per record
pub struct ConsoleLogger {
    level: LevelFilter,
    app_name: &'static str,
}

impl ConsoleLogger {
    pub const fn new(app_name: &'static str, level: LevelFilter) -> Self {
        Self { level, app_name }
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f").to_string();
        let line = format_line(
            &timestamp,
            self.app_name,
            record.level(),
            record.target(),
            &record.args().to_string(),
        );
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Format a single log line: `[time] app LEVEL target: message`
pub fn format_line(timestamp: &str, app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!("[{}] {} {:<5} {}: {}", timestamp, app_name, level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the logger globally. Fails if another logger was already set.
pub fn init_logger(app_name: &'static str, level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = Box::new(ConsoleLogger::new(app_name, level));
    log::set_boxed_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
