//! Flash event catalogs.
//!
//! Catalogs are TOML files with one `[[events]]` table per event. End times
//! are either absolute (`ends_at`, RFC 3339) or relative to load time
//! (`ends_in_minutes`, negative for events that already ended).

mod sample;

pub use sample::sample_catalog;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::flash_event::{FlashEvent, FlashEventId, FlashStatus, TriggerType};
use crate::services::countdown::{parse_timestamp, CountdownError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub events: Vec<CatalogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub icon: String,
    pub status: FlashStatus,
    #[serde(default)]
    pub ends_at: Option<String>,
    #[serde(default)]
    pub ends_in_minutes: Option<i64>,
    #[serde(default)]
    pub trigger_type: TriggerType,
    #[serde(default)]
    pub joined: bool,
}

impl CatalogEntry {
    /// Turn the entry into an event, anchoring relative end times at `now`.
    pub fn resolve(&self, now: DateTime<Utc>) -> std::result::Result<FlashEvent, CountdownError> {
        let ends_at = match (&self.ends_at, self.ends_in_minutes) {
            (Some(absolute), None) => parse_timestamp(absolute)?,
            (None, Some(minutes)) => Duration::try_minutes(minutes)
                .and_then(|offset| now.checked_add_signed(offset))
                .ok_or_else(|| {
                    CountdownError::InvalidTimestamp(format!(
                        "event '{}' ends {minutes} minutes from now, which is out of range",
                        self.id
                    ))
                })?,
            (Some(_), Some(_)) => {
                return Err(CountdownError::InvalidTimestamp(format!(
                    "event '{}' sets both ends_at and ends_in_minutes",
                    self.id
                )))
            }
            (None, None) => {
                return Err(CountdownError::InvalidTimestamp(format!(
                    "event '{}' has no end time",
                    self.id
                )))
            }
        };

        Ok(FlashEvent {
            id: FlashEventId(self.id.clone()),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            participant_count: self.participant_count,
            icon: self.icon.clone(),
            declared_status: self.status,
            ends_at,
            trigger_type: self.trigger_type,
            joined: self.joined,
        })
    }
}

/// Parse catalog text into events.
pub fn parse_catalog(data: &str, now: DateTime<Utc>) -> Result<Vec<FlashEvent>> {
    let file: CatalogFile = toml::from_str(data).context("failed to parse event catalog")?;

    let mut seen = HashSet::new();
    let mut events = Vec::with_capacity(file.events.len());
    for entry in &file.events {
        if !seen.insert(entry.id.as_str()) {
            bail!("duplicate event id '{}' in catalog", entry.id);
        }
        let event = entry
            .resolve(now)
            .with_context(|| format!("invalid catalog entry '{}'", entry.id))?;
        events.push(event);
    }

    log::debug!("Parsed {} flash events from catalog", events.len());
    Ok(events)
}

pub fn load_catalog(path: &Path, now: DateTime<Utc>) -> Result<Vec<FlashEvent>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read event catalog from {}", path.display()))?;
    parse_catalog(&data, now).with_context(|| format!("failed to load {}", path.display()))
}
