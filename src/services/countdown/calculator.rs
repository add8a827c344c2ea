//! Countdown calculation from a fixed end time.

use chrono::{DateTime, Utc};

use super::error::{timestamp_from_millis, Result};
use super::models::{CountdownSettings, CountdownSnapshot, RemainingTime};

/// Snapshot of the countdown towards `ends_at` as seen at `now`, using the
/// compact format and the 24 hour progress window.
pub fn compute_countdown(now: DateTime<Utc>, ends_at: DateTime<Utc>) -> CountdownSnapshot {
    compute_countdown_with(now, ends_at, &CountdownSettings::default())
}

/// Same as [`compute_countdown`] with explicit format and progress window.
///
/// `ends_at <= now` is ended. Progress is the elapsed share of the window
/// ending at `ends_at`, so an event longer than the window reports 0 until
/// fewer than `progress_window` remain.
pub fn compute_countdown_with(
    now: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    settings: &CountdownSettings,
) -> CountdownSnapshot {
    let distance = ends_at.signed_duration_since(now);
    let distance_millis = distance.num_milliseconds();
    if distance_millis <= 0 {
        return CountdownSnapshot::ended();
    }

    let remaining_millis = distance_millis as u64;
    let remaining = RemainingTime::from_millis(remaining_millis);

    let window_millis = settings.progress_window.num_milliseconds().max(1);
    let elapsed_millis = (window_millis - distance_millis).max(0);
    let progress_fraction = (elapsed_millis as f64 / window_millis as f64).clamp(0.0, 1.0);

    CountdownSnapshot {
        remaining_millis,
        display_text: settings.format.render(remaining),
        progress_fraction,
        is_urgent: remaining.hours == 0,
        is_ended: false,
    }
}

/// Countdown from raw epoch milliseconds, failing on unrepresentable
/// instants instead of producing garbage text.
pub fn compute_countdown_from_millis(now_millis: i64, ends_at_millis: i64) -> Result<CountdownSnapshot> {
    let now = timestamp_from_millis(now_millis)?;
    let ends_at = timestamp_from_millis(ends_at_millis)?;
    Ok(compute_countdown(now, ends_at))
}
