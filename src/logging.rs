//! Console Logger
//!
//! Routes `log` records to the browser console as `[TARGET] message`.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let msg = wasm_bindgen::JsValue::from(line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

fn format_line(target: &str, message: &str) -> String {
    // Module paths are noise in the console; keep short custom targets only.
    if target.contains("::") || target == env!("CARGO_CRATE_NAME") {
        message.to_string()
    } else {
        format!("[{}] {}", target, message)
    }
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_target_is_prefixed() {
        assert_eq!(format_line("PERSIST", "hydrated 2 tasks"), "[PERSIST] hydrated 2 tasks");
    }

    #[test]
    fn test_module_target_is_dropped() {
        assert_eq!(format_line("get_done_ui::storage", "oops"), "oops");
    }
}
