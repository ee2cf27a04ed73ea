//! Application Config
//!
//! Storage keys, expiry window and display limits. Provided via context.

use chrono::Duration;
use log::LevelFilter;

/// App-wide settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Storage key for the serialized task list
    pub todos_key: String,
    /// Storage key for the last write time (epoch millis, decimal)
    pub timestamp_key: String,
    /// Age after which a stored snapshot is discarded
    pub ttl: Duration,
    /// Characters shown in a list card before the ellipsis
    pub preview_chars: usize,
    /// Branding used by header and footer
    pub app_name: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            todos_key: "todos".to_string(),
            timestamp_key: "timestamp".to_string(),
            ttl: Duration::minutes(15),
            preview_chars: 50,
            app_name: "Get Done App".to_string(),
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    pub fn ttl_millis(&self) -> i64 {
        self.ttl.num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.todos_key, "todos");
        assert_eq!(config.timestamp_key, "timestamp");
        assert_eq!(config.ttl_millis(), 15 * 60 * 1000);
        assert_eq!(config.preview_chars, 50);
    }
}
