// Countdown calculator and status classifier through the crate root

use chrono::Duration;
use flash_countdown::services::countdown::{
    compute_countdown_from_millis, display_text_or_placeholder, timestamp_from_millis_f64,
    CountdownError, PLACEHOLDER_TEXT,
};
use flash_countdown::{classify_status, compute_countdown, FlashStatus};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::fixtures::{events, times};

#[test_case(Duration::hours(1), "1h 0m", false ; "exactly one hour")]
#[test_case(Duration::minutes(59) + Duration::seconds(59), "59m 59s", true ; "one second under an hour")]
#[test_case(Duration::seconds(5), "5s", true ; "five seconds")]
#[test_case(Duration::hours(2) + Duration::minutes(15), "2h 15m", false ; "two hours fifteen")]
#[test_case(Duration::minutes(45), "45m 0s", true ; "forty five minutes")]
#[test_case(Duration::hours(30) + Duration::minutes(1), "30h 1m", false ; "more than a day")]
fn display_text_and_urgency(remaining: Duration, text: &str, urgent: bool) {
    let now = times::launch_morning();
    let snapshot = compute_countdown(now, now + remaining);

    assert_eq!(snapshot.display_text, text);
    assert_eq!(snapshot.is_urgent, urgent);
    assert!(!snapshot.is_ended);
}

#[test]
fn snapshot_is_a_pure_function_of_its_inputs() {
    let now = times::new_years_eve();
    let ends_at = now + Duration::minutes(17);

    assert_eq!(compute_countdown(now, ends_at), compute_countdown(now, ends_at));
}

#[test]
fn snapshot_across_year_boundary() {
    let now = times::new_years_eve();
    let snapshot = compute_countdown(now, now + Duration::seconds(4));
    assert_eq!(snapshot.display_text, "4s");
    assert_eq!(snapshot.remaining_millis, 4_000);
}

#[test]
fn live_event_stays_live_while_urgent() {
    let now = times::launch_morning();
    let event = events::server_down();

    assert!(event.snapshot(now).is_urgent);
    assert_eq!(event.effective_status(now), FlashStatus::Live);
    assert_eq!(
        classify_status(now, event.ends_at, event.declared_status),
        FlashStatus::Live
    );
}

#[test]
fn ending_soon_is_taken_from_the_producer() {
    let now = times::launch_morning();
    let event = events::mislabelled_ending_soon();

    assert!(!event.snapshot(now).is_urgent);
    assert_eq!(event.effective_status(now), FlashStatus::EndingSoon);
    assert_eq!(event.effective_status(event.ends_at), FlashStatus::Ended);
}

#[test]
fn invalid_timestamps_fall_back_to_placeholder() {
    let result = timestamp_from_millis_f64(f64::NAN)
        .map(|ends_at| compute_countdown(times::launch_morning(), ends_at));
    assert!(matches!(result, Err(CountdownError::InvalidTimestamp(_))));
    assert_eq!(display_text_or_placeholder(&result), PLACEHOLDER_TEXT);

    let overflow = compute_countdown_from_millis(i64::MAX, 0);
    assert_eq!(display_text_or_placeholder(&overflow), "—");
}
