// Property-based tests for countdown snapshots
// Random instants and offsets exercise the calculator's invariants

use chrono::{DateTime, Duration, TimeZone, Utc};
use flash_countdown::services::countdown::{classify_status, compute_countdown};
use flash_countdown::FlashStatus;
use proptest::prelude::*;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
}

fn any_declared() -> impl Strategy<Value = FlashStatus> {
    prop_oneof![
        Just(FlashStatus::Live),
        Just(FlashStatus::Active),
        Just(FlashStatus::EndingSoon),
        Just(FlashStatus::Ended),
    ]
}

proptest! {
    /// Property: any end time at or before now is ended with zero progress
    #[test]
    fn prop_past_end_times_are_ended(offset_ms in 0i64..(30 * DAY_MILLIS)) {
        let now = base();
        let snapshot = compute_countdown(now, now - Duration::milliseconds(offset_ms));

        prop_assert!(snapshot.is_ended);
        prop_assert_eq!(snapshot.remaining_millis, 0);
        prop_assert_eq!(snapshot.display_text.as_str(), "Ended");
        prop_assert_eq!(snapshot.progress_fraction, 0.0);
        prop_assert!(!snapshot.is_urgent);
    }

    /// Property: remaining time never grows and progress never shrinks as now advances
    #[test]
    fn prop_monotonic_until_end(
        total_ms in 1i64..(3 * DAY_MILLIS),
        first_ms in 0i64..(3 * DAY_MILLIS),
        step_ms in 0i64..(3 * DAY_MILLIS),
    ) {
        let first_ms = first_ms % total_ms;
        let step_ms = step_ms % (total_ms - first_ms);
        let ends_at = base() + Duration::milliseconds(total_ms);
        let earlier = base() + Duration::milliseconds(first_ms);
        let later = earlier + Duration::milliseconds(step_ms);

        let a = compute_countdown(earlier, ends_at);
        let b = compute_countdown(later, ends_at);

        prop_assert!(b.remaining_millis <= a.remaining_millis);
        prop_assert!(b.progress_fraction >= a.progress_fraction);
    }

    /// Property: progress always lies in [0, 1]
    #[test]
    fn prop_progress_is_clamped(offset_ms in -(30 * DAY_MILLIS)..(30 * DAY_MILLIS)) {
        let now = base();
        let snapshot = compute_countdown(now, now + Duration::milliseconds(offset_ms));
        prop_assert!((0.0..=1.0).contains(&snapshot.progress_fraction));
    }

    /// Property: urgent exactly when under an hour is left
    #[test]
    fn prop_urgent_iff_under_an_hour(offset_ms in 1i64..(2 * DAY_MILLIS)) {
        let now = base();
        let snapshot = compute_countdown(now, now + Duration::milliseconds(offset_ms));
        prop_assert_eq!(snapshot.is_urgent, offset_ms < 60 * 60 * 1000);
    }

    /// Property: ended exactly when the end time has been reached
    #[test]
    fn prop_ended_iff_end_reached(offset_ms in -DAY_MILLIS..DAY_MILLIS) {
        let now = base();
        let snapshot = compute_countdown(now, now + Duration::milliseconds(offset_ms));
        prop_assert_eq!(snapshot.is_ended, offset_ms <= 0);
        prop_assert_eq!(snapshot.remaining_millis == 0, offset_ms <= 0);
    }

    /// Property: classifier agrees with the calculator on "ended" and keeps declared otherwise
    #[test]
    fn prop_classifier_agrees_with_calculator(
        offset_ms in -DAY_MILLIS..DAY_MILLIS,
        declared in any_declared(),
    ) {
        let now = base();
        let ends_at = now + Duration::milliseconds(offset_ms);
        let status = classify_status(now, ends_at, declared);

        if compute_countdown(now, ends_at).is_ended {
            prop_assert_eq!(status, FlashStatus::Ended);
        } else {
            prop_assert_eq!(status, declared);
        }
    }
}
