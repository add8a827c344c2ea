//! Application configuration.
//!
//! Read from `config.toml`; every field is optional and falls back to the
//! defaults below.

use std::path::PathBuf;
use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};

use crate::services::countdown::{
    CountdownError, CountdownSettings, DisplayFormat, Result, MAX_DURATION_HOURS,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Refresh cadence of every ticker, in milliseconds
    pub tick_interval_ms: u64,
    pub display_format: DisplayFormat,
    /// Window the progress ring is measured against
    pub progress_window_hours: i64,
    /// Event catalog; the built-in sample catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1_000,
            display_format: DisplayFormat::Compact,
            progress_window_hours: MAX_DURATION_HOURS,
            catalog_path: None,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_interval_ms == 0 {
            return Err(CountdownError::InvalidSetting {
                field: "tick_interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        self.countdown_settings().map(|_| ())
    }

    pub fn tick_interval(&self) -> StdDuration {
        StdDuration::from_millis(self.tick_interval_ms)
    }

    pub fn countdown_settings(&self) -> Result<CountdownSettings> {
        CountdownSettings::default()
            .with_format(self.display_format)
            .with_progress_window_hours(self.progress_window_hours)
    }
}
