use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// How history entries are presented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// chrono format string for entry timestamps.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Show timestamps in the local timezone instead of UTC (default: true).
    #[serde(default = "default_local_time")]
    pub local_time: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            local_time: default_local_time(),
        }
    }
}

impl DisplayConfig {
    /// Format a timestamp with `date_format`.
    ///
    /// An unusable format falls back to the default one instead of failing.
    pub fn format_timestamp(&self, timestamp: DateTime<Utc>) -> String {
        let format = if is_valid_date_format(&self.date_format) {
            self.date_format.clone()
        } else {
            default_date_format()
        };
        if self.local_time {
            timestamp.with_timezone(&Local).format(&format).to_string()
        } else {
            timestamp.format(&format).to_string()
        }
    }
}

/// Whether chrono can format with `format` (every specifier is known).
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Event loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Input poll interval in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}

fn default_date_format() -> String {
    "%b %-d, %Y %-I:%M %p".to_string()
}

fn default_local_time() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    100
}
