use chrono::{DateTime, Duration, Utc};

use crate::models::flash_event::{FlashEvent, FlashStatus, TriggerType};

struct SampleEvent {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    participant_count: u32,
    icon: &'static str,
    status: FlashStatus,
    ends_in_minutes: i64,
    trigger_type: TriggerType,
    joined: bool,
}

const SAMPLE_EVENTS: [SampleEvent; 6] = [
    SampleEvent {
        id: "1",
        name: "Product Launch Sprint",
        description: "Join us for an intensive 24-hour product launch collaboration with founders worldwide",
        category: "Product",
        participant_count: 234,
        icon: "🚀",
        status: FlashStatus::Live,
        ends_in_minutes: 2 * 60 + 15,
        trigger_type: TriggerType::Event,
        joined: true,
    },
    SampleEvent {
        id: "2",
        name: "Design Jam Session",
        description: "Create, share, and get feedback on your designs in real-time",
        category: "Design",
        participant_count: 167,
        icon: "🎨",
        status: FlashStatus::Active,
        ends_in_minutes: 5 * 60 + 42,
        trigger_type: TriggerType::Meetup,
        joined: false,
    },
    SampleEvent {
        id: "3",
        name: "Hackathon Finals",
        description: "Watch the final presentations and vote for your favorite projects",
        category: "Development",
        participant_count: 892,
        icon: "💻",
        status: FlashStatus::EndingSoon,
        ends_in_minutes: 45,
        trigger_type: TriggerType::Event,
        joined: true,
    },
    SampleEvent {
        id: "4",
        name: "Marketing Blitz",
        description: "Rapid-fire marketing campaign brainstorming and execution",
        category: "Marketing",
        participant_count: 0,
        icon: "📢",
        status: FlashStatus::Ended,
        ends_in_minutes: -2 * 60,
        trigger_type: TriggerType::Discussion,
        joined: false,
    },
    SampleEvent {
        id: "5",
        name: "Startup Office Hours",
        description: "Get advice from successful founders and investors in a live Q&A",
        category: "Entrepreneurship",
        participant_count: 445,
        icon: "💡",
        status: FlashStatus::Active,
        ends_in_minutes: 8 * 60,
        trigger_type: TriggerType::Discussion,
        joined: false,
    },
    SampleEvent {
        id: "6",
        name: "Emergency: Server Down",
        description: "Critical incident response - all hands on deck to restore services",
        category: "Technical",
        participant_count: 56,
        icon: "🚨",
        status: FlashStatus::Live,
        ends_in_minutes: 30,
        trigger_type: TriggerType::Emergency,
        joined: true,
    },
];

/// Built-in demo events, with end times relative to `now`.
pub fn sample_catalog(now: DateTime<Utc>) -> Vec<FlashEvent> {
    SAMPLE_EVENTS
        .iter()
        .map(|sample| FlashEvent {
            id: sample.id.into(),
            name: sample.name.to_string(),
            description: sample.description.to_string(),
            category: sample.category.to_string(),
            participant_count: sample.participant_count,
            icon: sample.icon.to_string(),
            declared_status: sample.status,
            ends_at: now + Duration::minutes(sample.ends_in_minutes),
            trigger_type: sample.trigger_type,
            joined: sample.joined,
        })
        .collect()
}
