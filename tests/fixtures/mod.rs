// Test fixtures - reusable test data
// Provides consistent instants and events across all test files

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use flash_countdown::{FlashEvent, FlashStatus, TriggerType};

/// Sample instants for testing
pub mod times {
    use super::*;

    /// Returns Mar 14, 2026 at 09:00 UTC
    pub fn launch_morning() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    /// Returns Dec 31, 2026 at 23:59:58 UTC, two seconds before the year rolls over
    pub fn new_years_eve() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 58).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn live_in(name: &str, remaining: Duration) -> FlashEvent {
        FlashEvent::new(name.to_lowercase().replace(' ', "-"), name, FlashStatus::Live, times::launch_morning() + remaining)
    }

    /// Emergency event declared live with thirty minutes left
    pub fn server_down() -> FlashEvent {
        let mut event = live_in("Emergency Server Down", Duration::minutes(30));
        event.trigger_type = TriggerType::Emergency;
        event.category = "Technical".to_string();
        event.joined = true;
        event
    }

    /// Event declared ending-soon that still has most of a day left
    pub fn mislabelled_ending_soon() -> FlashEvent {
        FlashEvent::new(
            "long-tail",
            "Long Tail Retro",
            FlashStatus::EndingSoon,
            times::launch_morning() + Duration::hours(20),
        )
    }
}
