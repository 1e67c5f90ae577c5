//! One-line JSON event logging.
//!
//! Every event is a flat object carrying `ts`, `level` and `event`, with the
//! caller's fields merged in. In the browser the line goes to the console
//! method matching its level; elsewhere it is printed to stdout.

use serde_json::{Map, Number, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logger {
    min_level: LogLevel,
}

impl Logger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn event(&self, level: LogLevel, event: &str, fields: Value) {
        if let Some(line) = self.render(level, event, fields, now_unix_millis()) {
            emit(level, line);
        }
    }

    fn render(&self, level: LogLevel, event: &str, fields: Value, ts: u64) -> Option<String> {
        if level < self.min_level {
            return None;
        }

        let mut payload = Map::new();
        payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
        payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
        payload.insert("event".to_string(), Value::String(event.to_string()));

        if let Value::Object(extra) = fields {
            for (key, value) in extra {
                payload.insert(key, value);
            }
        }

        Some(Value::Object(payload).to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: String) {
    match level {
        LogLevel::Debug => gloo_console::debug!(line),
        LogLevel::Info => gloo_console::info!(line),
        LogLevel::Warn => gloo_console::warn!(line),
        LogLevel::Error => gloo_console::error!(line),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: String) {
    println!("{line}");
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    // Date.now() is a non-negative integral millisecond count.
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(line: &str) -> Value {
        serde_json::from_str(line).expect("log line is valid JSON")
    }

    #[test]
    fn events_below_min_level_are_dropped() {
        let logger = Logger::new(LogLevel::Info);

        assert!(logger
            .render(LogLevel::Debug, "scroll_listener_acquired", json!({}), 1)
            .is_none());
        assert!(logger
            .render(LogLevel::Info, "page_mounted", json!({}), 1)
            .is_some());
        assert!(logger
            .render(LogLevel::Error, "mount_failed", json!({}), 1)
            .is_some());
    }

    #[test]
    fn fields_are_merged_into_the_top_level_object() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .render(
                LogLevel::Info,
                "theme_toggled",
                json!({ "from": "dark", "to": "light" }),
                1_700_000_000_000,
            )
            .expect("info passes a debug logger");

        assert_eq!(
            parse(&line),
            json!({
                "ts": 1_700_000_000_000u64,
                "level": "info",
                "event": "theme_toggled",
                "from": "dark",
                "to": "light",
            })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let logger = Logger::new(LogLevel::Debug);
        let line = logger
            .render(LogLevel::Warn, "scroll_listener_failed", json!("oops"), 5)
            .expect("warn passes a debug logger");

        let value = parse(&line);
        assert_eq!(value["event"], "scroll_listener_failed");
        assert_eq!(value.as_object().map(Map::len), Some(3));
    }

    #[test]
    fn levels_round_trip_through_their_names() {
        for level in [LogLevel::Debug, LogLevel::Info, LogLevel::Warn, LogLevel::Error] {
            assert_eq!(LogLevel::from_str(level.as_str()), Some(level));
        }
        assert_eq!(LogLevel::from_str("trace"), None);
    }
}
