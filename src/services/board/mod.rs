//! Lists of flash events grouped and filtered by effective status.
//!
//! Grouping always goes through the live status, never the declared one,
//! so an event drops into "Recently Ended" the moment its clock runs out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::flash_event::{FlashEvent, FlashEventId, FlashStatus};
use crate::services::countdown::CountdownSnapshot;

/// Filter chips above the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatusFilter {
    #[default]
    All,
    Live,
    EndingSoon,
    Active,
    Ended,
    Joined,
}

impl StatusFilter {
    pub const ALL_CHIPS: [StatusFilter; 6] = [
        StatusFilter::All,
        StatusFilter::Live,
        StatusFilter::EndingSoon,
        StatusFilter::Active,
        StatusFilter::Ended,
        StatusFilter::Joined,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Live => "Live",
            StatusFilter::EndingSoon => "Ending Soon",
            StatusFilter::Active => "Active",
            StatusFilter::Ended => "Ended",
            StatusFilter::Joined => "Joined",
        }
    }

    pub fn matches(&self, event: &FlashEvent, now: DateTime<Utc>) -> bool {
        let status = event.effective_status(now);
        match self {
            StatusFilter::All => true,
            StatusFilter::Live => status == FlashStatus::Live,
            StatusFilter::EndingSoon => status == FlashStatus::EndingSoon,
            StatusFilter::Active => status == FlashStatus::Active,
            StatusFilter::Ended => status == FlashStatus::Ended,
            StatusFilter::Joined => event.joined && !status.is_ended(),
        }
    }
}

/// The two sections of the flash list.
#[derive(Debug, Default)]
pub struct BoardSections<'a> {
    /// Running events, soonest to end first.
    pub active: Vec<&'a FlashEvent>,
    /// Ended events, most recently ended first.
    pub ended: Vec<&'a FlashEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct FlashBoard {
    events: Vec<FlashEvent>,
}

impl FlashBoard {
    pub fn new(events: Vec<FlashEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[FlashEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn find(&self, id: &FlashEventId) -> Option<&FlashEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn partition(&self, now: DateTime<Utc>) -> BoardSections<'_> {
        let (mut ended, mut active): (Vec<&FlashEvent>, Vec<&FlashEvent>) =
            self.events.iter().partition(|event| event.has_ended(now));

        active.sort_by_key(|event| event.ends_at);
        ended.sort_by(|a, b| b.ends_at.cmp(&a.ends_at));
        BoardSections { active, ended }
    }

    /// Events matching a chip and a free-text query, soonest to end first.
    pub fn filter(&self, now: DateTime<Utc>, filter: StatusFilter, query: &str) -> Vec<&FlashEvent> {
        let mut matches: Vec<&FlashEvent> = self
            .events
            .iter()
            .filter(|event| filter.matches(event, now) && event.matches_query(query))
            .collect();
        matches.sort_by_key(|event| event.ends_at);
        matches
    }

    /// Number of events behind each chip, in chip order.
    pub fn chip_counts(&self, now: DateTime<Utc>) -> Vec<(StatusFilter, usize)> {
        StatusFilter::ALL_CHIPS
            .iter()
            .map(|chip| {
                let count = self.events.iter().filter(|event| chip.matches(event, now)).count();
                (*chip, count)
            })
            .collect()
    }

    /// Snapshot every event in board order.
    pub fn snapshots(&self, now: DateTime<Utc>) -> Vec<(&FlashEvent, CountdownSnapshot)> {
        self.events
            .iter()
            .map(|event| (event, event.snapshot(now)))
            .collect()
    }

    /// Running event with the least time left.
    pub fn next_to_end(&self, now: DateTime<Utc>) -> Option<&FlashEvent> {
        self.events
            .iter()
            .filter(|event| !event.has_ended(now))
            .min_by_key(|event| event.ends_at)
    }

    /// Flip membership. Returns the new state, or `None` when the event is
    /// unknown or already ended.
    pub fn toggle_joined(&mut self, id: &FlashEventId, now: DateTime<Utc>) -> Option<bool> {
        let event = self.events.iter_mut().find(|event| &event.id == id)?;
        if event.has_ended(now) {
            log::info!("Ignoring join toggle for ended flash event {}", event.id);
            return None;
        }
        event.joined = !event.joined;
        log::debug!("Flash event {} joined = {}", event.id, event.joined);
        Some(event.joined)
    }
}
