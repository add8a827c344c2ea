//! Presentations of a remaining duration.
//!
//! All formats read the same decomposed [`RemainingTime`]; only the text
//! differs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CountdownError;
use super::models::{RemainingTime, ENDED_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
    /// `"2h 15m"`, `"45m 0s"`, `"5s"`
    Compact,
    /// Zero-padded `"02:15:00"`
    Clock,
    /// Total minutes with seconds, `"135m 0s"`
    Minutes,
}

impl Default for DisplayFormat {
    fn default() -> Self {
        Self::Compact
    }
}

impl DisplayFormat {
    pub fn render(&self, remaining: RemainingTime) -> String {
        match self {
            DisplayFormat::Compact => format_compact(remaining),
            DisplayFormat::Clock => format_clock(remaining),
            DisplayFormat::Minutes => format_minutes(remaining),
        }
    }

    /// Text for an already-ended countdown. Identical across formats.
    pub fn render_ended(&self) -> String {
        ENDED_TEXT.to_string()
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DisplayFormat::Compact => "compact",
            DisplayFormat::Clock => "clock",
            DisplayFormat::Minutes => "minutes",
        };
        f.write_str(name)
    }
}

impl FromStr for DisplayFormat {
    type Err = CountdownError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(DisplayFormat::Compact),
            "clock" | "hms" => Ok(DisplayFormat::Clock),
            "minutes" => Ok(DisplayFormat::Minutes),
            other => Err(CountdownError::InvalidSetting {
                field: "display_format",
                reason: format!("unknown format '{other}'"),
            }),
        }
    }
}

fn format_compact(remaining: RemainingTime) -> String {
    let RemainingTime {
        hours,
        minutes,
        seconds,
    } = remaining;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

// Hours are not wrapped at 24.
fn format_clock(remaining: RemainingTime) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        remaining.hours, remaining.minutes, remaining.seconds
    )
}

fn format_minutes(remaining: RemainingTime) -> String {
    format!("{}m {}s", remaining.total_minutes(), remaining.seconds)
}
