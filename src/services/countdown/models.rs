use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::error::{CountdownError, Result};
use super::format::DisplayFormat;

/// Text shown once the end time has been reached.
pub const ENDED_TEXT: &str = "Ended";

/// Neutral text rendered when no snapshot could be produced.
pub const PLACEHOLDER_TEXT: &str = "—";

/// Reference window progress is measured against.
pub const MAX_DURATION_HOURS: i64 = 24;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Transient result of one countdown calculation. Recomputed every tick
/// and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountdownSnapshot {
    /// Milliseconds until the end time; 0 once ended.
    pub remaining_millis: u64,
    pub display_text: String,
    /// Elapsed share of the progress window, in [0, 1].
    pub progress_fraction: f64,
    /// Less than one hour remaining.
    pub is_urgent: bool,
    pub is_ended: bool,
}

impl CountdownSnapshot {
    pub fn ended() -> Self {
        Self {
            remaining_millis: 0,
            display_text: ENDED_TEXT.to_string(),
            progress_fraction: 0.0,
            is_urgent: false,
            is_ended: true,
        }
    }

    pub fn remaining(&self) -> RemainingTime {
        RemainingTime::from_millis(self.remaining_millis)
    }

    /// Progress as a whole percentage, for bar widths.
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Display text for a snapshot that may have failed to compute.
pub fn display_text_or_placeholder<E>(result: &std::result::Result<CountdownSnapshot, E>) -> &str {
    match result {
        Ok(snapshot) => &snapshot.display_text,
        Err(_) => PLACEHOLDER_TEXT,
    }
}

/// Whole hours, minutes and seconds of a non-negative duration. There is
/// no days component; long durations are expressed in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            hours: millis / MILLIS_PER_HOUR,
            minutes: (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE,
            seconds: (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

/// Knobs for a countdown calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountdownSettings {
    pub format: DisplayFormat,
    /// Window progress is measured against. Events that run longer than
    /// this show no progress until they enter the window.
    #[serde(with = "window_hours")]
    pub progress_window: Duration,
}

impl Default for CountdownSettings {
    fn default() -> Self {
        Self {
            format: DisplayFormat::default(),
            progress_window: Duration::hours(MAX_DURATION_HOURS),
        }
    }
}

impl CountdownSettings {
    pub fn with_format(mut self, format: DisplayFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_progress_window_hours(mut self, hours: i64) -> Result<Self> {
        if hours <= 0 {
            return Err(CountdownError::InvalidSetting {
                field: "progress_window_hours",
                reason: format!("must be positive, got {hours}"),
            });
        }
        self.progress_window = Duration::try_hours(hours).ok_or_else(|| {
            CountdownError::InvalidSetting {
                field: "progress_window_hours",
                reason: format!("{hours} hours is out of range"),
            }
        })?;
        Ok(self)
    }
}

mod window_hours {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(value.num_hours())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let hours = i64::deserialize(deserializer)?;
        if hours <= 0 {
            return Err(serde::de::Error::custom("progress window must be positive"));
        }
        Duration::try_hours(hours)
            .ok_or_else(|| serde::de::Error::custom("progress window is out of range"))
    }
}
