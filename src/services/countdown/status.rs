use chrono::{DateTime, Utc};

use crate::models::flash_event::FlashStatus;

/// Reconcile a producer-declared status with the live clock.
///
/// Reaching `ends_at` always yields [`FlashStatus::Ended`]. Before that the
/// declared status is kept verbatim: `EndingSoon` is never derived from the
/// remaining time, so a `Live` event stays `Live` even while its countdown
/// is urgent.
pub fn classify_status(now: DateTime<Utc>, ends_at: DateTime<Utc>, declared: FlashStatus) -> FlashStatus {
    if ends_at.signed_duration_since(now).num_milliseconds() <= 0 {
        FlashStatus::Ended
    } else {
        declared
    }
}
