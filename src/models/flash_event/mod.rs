// Flash event model
// Time-boxed community events with a hard end timestamp

mod palette;

pub use palette::{RgbaColor, TriggerPalette};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::countdown::{classify_status, compute_countdown, CountdownSnapshot};

/// Lifecycle classification shown on badges.
///
/// Producers assign a declared status when the event is created; the
/// countdown layer derives an effective status from it (see
/// [`FlashEvent::effective_status`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlashStatus {
    Live,
    Active,
    EndingSoon,
    Ended,
}

impl Default for FlashStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl FlashStatus {
    pub fn badge_label(&self) -> &'static str {
        match self {
            FlashStatus::Live => "LIVE",
            FlashStatus::Active => "ACTIVE",
            FlashStatus::EndingSoon => "ENDING SOON",
            FlashStatus::Ended => "ENDED",
        }
    }

    pub fn is_ended(&self) -> bool {
        matches!(self, FlashStatus::Ended)
    }
}

/// What kind of happening spawned the flash community.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerType {
    Event,
    Meetup,
    Discussion,
    Emergency,
}

impl Default for TriggerType {
    fn default() -> Self {
        Self::Event
    }
}

impl TriggerType {
    pub fn label(&self) -> &'static str {
        match self {
            TriggerType::Event => "EVENT",
            TriggerType::Meetup => "MEETUP",
            TriggerType::Discussion => "DISCUSSION",
            TriggerType::Emergency => "EMERGENCY",
        }
    }

    /// Two-stop gradient used for timers and card accents.
    pub fn palette(&self) -> TriggerPalette {
        match self {
            TriggerType::Event => TriggerPalette::new(
                RgbaColor::new(0x00, 0xD4, 0xFF, 255),
                RgbaColor::new(0x00, 0x88, 0xFF, 255),
            ),
            TriggerType::Meetup => TriggerPalette::new(
                RgbaColor::new(0x00, 0xFF, 0x88, 255),
                RgbaColor::new(0x00, 0xCC, 0x66, 255),
            ),
            TriggerType::Discussion => TriggerPalette::new(
                RgbaColor::new(0xB8, 0x4C, 0xFF, 255),
                RgbaColor::new(0x8B, 0x3D, 0xFF, 255),
            ),
            TriggerType::Emergency => TriggerPalette::new(
                RgbaColor::new(0xFF, 0x00, 0x55, 255),
                RgbaColor::new(0xFF, 0x33, 0x66, 255),
            ),
        }
    }
}

/// Stable identifier for a flash event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlashEventId(pub String);

impl From<&str> for FlashEventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for FlashEventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A flash community as the presentation layer knows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashEvent {
    pub id: FlashEventId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "status")]
    pub declared_status: FlashStatus,
    pub ends_at: DateTime<Utc>,
    #[serde(default)]
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub joined: bool,
}

impl FlashEvent {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        declared_status: FlashStatus,
        ends_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: FlashEventId(id.into()),
            name: name.into(),
            description: String::new(),
            category: String::new(),
            participant_count: 0,
            icon: String::new(),
            declared_status,
            ends_at,
            trigger_type: TriggerType::default(),
            joined: false,
        }
    }

    /// Countdown snapshot for this event at `now`.
    pub fn snapshot(&self, now: DateTime<Utc>) -> CountdownSnapshot {
        compute_countdown(now, self.ends_at)
    }

    /// Declared status reconciled with the live clock.
    pub fn effective_status(&self, now: DateTime<Utc>) -> FlashStatus {
        classify_status(now, self.ends_at, self.declared_status)
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.effective_status(now).is_ended()
    }

    /// Case-insensitive match against name and category.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.category.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap()
    }

    #[test]
    fn status_serializes_kebab_case() {
        let json = serde_json::to_string(&FlashStatus::EndingSoon).unwrap();
        assert_eq!(json, "\"ending-soon\"");

        let parsed: FlashStatus = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(parsed, FlashStatus::Live);
    }

    #[test]
    fn badge_labels_are_uppercase() {
        assert_eq!(FlashStatus::EndingSoon.badge_label(), "ENDING SOON");
        assert_eq!(FlashStatus::Ended.badge_label(), "ENDED");
    }

    #[test]
    fn trigger_palette_matches_hex_values() {
        let palette = TriggerType::Emergency.palette();
        assert_eq!(palette.primary, RgbaColor::from_hex_str("#FF0055").unwrap());
        assert_eq!(palette.secondary, RgbaColor::from_hex_str("#FF3366").unwrap());
    }

    #[test]
    fn effective_status_overrides_declared_once_past_end() {
        let now = base_time();
        let event = FlashEvent::new("1", "Launch", FlashStatus::Live, now - Duration::minutes(1));
        assert_eq!(event.effective_status(now), FlashStatus::Ended);
        assert!(event.has_ended(now));
    }

    #[test]
    fn query_matches_name_or_category() {
        let mut event = FlashEvent::new("2", "Design Jam Session", FlashStatus::Active, base_time());
        event.category = "Design".into();

        assert!(event.matches_query("jam"));
        assert!(event.matches_query("DESIGN"));
        assert!(event.matches_query("  "));
        assert!(!event.matches_query("marketing"));
    }
}
