// Board grouping driven by the sample catalog

use chrono::Duration;
use flash_countdown::services::board::{FlashBoard, StatusFilter};
use flash_countdown::services::catalog::sample_catalog;
use flash_countdown::services::countdown::{ProgressRing, RingSize};
use flash_countdown::{FlashEventId, FlashStatus};
use pretty_assertions::assert_eq;

use super::fixtures::times;

fn names(events: &[&flash_countdown::FlashEvent]) -> Vec<String> {
    events.iter().map(|event| event.name.clone()).collect()
}

#[test]
fn sample_board_sections() {
    let now = times::launch_morning();
    let board = FlashBoard::new(sample_catalog(now));
    let sections = board.partition(now);

    assert_eq!(
        names(&sections.active),
        vec![
            "Emergency: Server Down",
            "Hackathon Finals",
            "Product Launch Sprint",
            "Design Jam Session",
            "Startup Office Hours",
        ]
    );
    assert_eq!(names(&sections.ended), vec!["Marketing Blitz"]);
}

#[test]
fn events_move_to_ended_as_time_passes() {
    let now = times::launch_morning();
    let board = FlashBoard::new(sample_catalog(now));
    let later = now + Duration::hours(1);

    let sections = board.partition(later);
    assert_eq!(
        names(&sections.ended),
        vec!["Hackathon Finals", "Emergency: Server Down", "Marketing Blitz"]
    );

    let server_down = board.find(&FlashEventId::from("6")).unwrap();
    assert_eq!(server_down.declared_status, FlashStatus::Live);
    assert_eq!(server_down.effective_status(later), FlashStatus::Ended);
}

#[test]
fn filter_chips_and_search_combine() {
    let now = times::launch_morning();
    let board = FlashBoard::new(sample_catalog(now));

    let live = board.filter(now, StatusFilter::Live, "");
    assert_eq!(names(&live), vec!["Emergency: Server Down", "Product Launch Sprint"]);

    let technical = board.filter(now, StatusFilter::All, "technical");
    assert_eq!(names(&technical), vec!["Emergency: Server Down"]);
}

#[test]
fn progress_ring_follows_snapshot() {
    let now = times::launch_morning();
    let board = FlashBoard::new(sample_catalog(now));

    for (event, snapshot) in board.snapshots(now) {
        let ring = ProgressRing::for_snapshot(RingSize::Lg, &snapshot);
        assert!(ring.dash_offset >= 0.0, "event {}", event.id);
        assert!(ring.dash_offset <= ring.circumference, "event {}", event.id);
        if snapshot.is_ended {
            assert_eq!(ring.dash_offset, ring.circumference);
        }
    }
}
