// src/models/event.rs

//! Event records and their timestamp accessors.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::locale::Locale;

/// Approval status of an event, as labelled by the content API.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Pending,
    DeptHeadApproved,
    SuperDeptHeadApproved,
    Rejected,
}

/// An event as returned by the content API.
///
/// Timestamps arrive as strings on the wire and are parsed lazily through
/// [`start_instant`](Self::start_instant) / [`end_instant`](Self::end_instant);
/// a missing or unparsable `eventdate` means "date to be announced" and keeps
/// the event out of every temporal bucket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventRecord {
    /// Unique event identifier
    pub id: i64,

    /// Event name (Chinese)
    pub name: String,

    /// English event name, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_en: Option<String>,

    /// Event description (Chinese)
    #[serde(default)]
    pub description: String,

    /// English description, when one exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,

    /// Start of the event, absent when the date is still to be announced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eventdate: Option<String>,

    /// Explicit end of the event, absent for point-in-time events
    #[serde(
        default,
        rename = "eventEndTime",
        skip_serializing_if = "Option::is_none"
    )]
    pub event_end_time: Option<String>,

    /// Identifier of the owning department
    pub department_in_charge: i64,

    /// Approval status label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
}

impl EventRecord {
    /// Load event records from a JSON file (an API response capture).
    pub fn load_all(path: impl AsRef<Path>) -> Result<Vec<Self>> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Locale-resolved display name.
    pub fn display_name(&self, locale: Locale) -> &str {
        locale.resolve_field(Some(&self.name), self.name_en.as_deref())
    }

    /// Locale-resolved description.
    pub fn display_description(&self, locale: Locale) -> &str {
        locale.resolve_field(Some(&self.description), self.description_en.as_deref())
    }

    /// Parsed start instant, `None` when absent or unparsable.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        self.eventdate.as_deref().and_then(parse_instant)
    }

    /// Parsed explicit end instant, `None` when absent or unparsable.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        self.event_end_time.as_deref().and_then(parse_instant)
    }
}

/// Parse an API timestamp.
///
/// The API emits RFC 3339 date-times; older records carry a naive
/// `YYYY-MM-DDTHH:MM:SS` form, which is taken as UTC.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}
