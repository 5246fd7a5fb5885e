// src/view/schedule.rs

//! Temporal classification of events.
//!
//! Partitions a flat event list into upcoming/ongoing/past buckets relative
//! to a caller-supplied instant. The instant is always injected, never read
//! from the system clock, so classification stays reproducible.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::models::EventRecord;

/// Assumed duration, in hours, of an event that declares no end time.
///
/// A point-in-time event stays "ongoing" for this window after its start.
pub const DEFAULT_EVENT_WINDOW_HOURS: i64 = 2;

/// Which temporal bucket an event falls into, relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalBucket {
    Upcoming,
    Ongoing,
    Past,
}

/// Events partitioned by temporal bucket.
///
/// Upcoming and ongoing are sorted soonest-first, past most-recent-first.
/// Events with no (or an unparsable) start timestamp appear in no bucket.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct EventBuckets {
    pub upcoming: Vec<EventRecord>,
    pub ongoing: Vec<EventRecord>,
    pub past: Vec<EventRecord>,
}

impl EventBuckets {
    /// Total number of classified events.
    pub fn len(&self) -> usize {
        self.upcoming.len() + self.ongoing.len() + self.past.len()
    }

    /// True when no event landed in any bucket.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify a single event against `now`.
///
/// Returns `None` for events without a parseable start. Both classification
/// boundaries are inclusive: an event starting exactly at `now`, or whose
/// effective end equals `now`, is ongoing.
pub fn classify_event(record: &EventRecord, now: DateTime<Utc>) -> Option<TemporalBucket> {
    let start = record.start_instant()?;
    Some(bucket_for(start, effective_end(record, start), now))
}

fn bucket_for(start: DateTime<Utc>, end: DateTime<Utc>, now: DateTime<Utc>) -> TemporalBucket {
    if start <= now && now <= end {
        TemporalBucket::Ongoing
    } else if start > now {
        TemporalBucket::Upcoming
    } else {
        TemporalBucket::Past
    }
}

/// Partition and sort events relative to `now`.
///
/// Pure function of `(records, now)`: calling twice with the same inputs
/// yields identical output. Sorting is stable, so events sharing a start
/// instant keep their input order.
pub fn classify_events(records: &[EventRecord], now: DateTime<Utc>) -> EventBuckets {
    let mut upcoming: Vec<(DateTime<Utc>, EventRecord)> = Vec::new();
    let mut ongoing: Vec<(DateTime<Utc>, EventRecord)> = Vec::new();
    let mut past: Vec<(DateTime<Utc>, EventRecord)> = Vec::new();

    for record in records {
        let Some(start) = record.start_instant() else {
            continue; // date to be announced
        };
        let keyed = (start, record.clone());
        match bucket_for(start, effective_end(record, start), now) {
            TemporalBucket::Upcoming => upcoming.push(keyed),
            TemporalBucket::Ongoing => ongoing.push(keyed),
            TemporalBucket::Past => past.push(keyed),
        }
    }

    // Soonest first for upcoming/ongoing, most recent first for past.
    upcoming.sort_by_key(|(start, _)| *start);
    ongoing.sort_by_key(|(start, _)| *start);
    past.sort_by(|(a, _), (b, _)| b.cmp(a));

    EventBuckets {
        upcoming: upcoming.into_iter().map(|(_, record)| record).collect(),
        ongoing: ongoing.into_iter().map(|(_, record)| record).collect(),
        past: past.into_iter().map(|(_, record)| record).collect(),
    }
}

/// Effective end instant: the explicit end when present and parseable,
/// otherwise `start` plus the default window.
fn effective_end(record: &EventRecord, start: DateTime<Utc>) -> DateTime<Utc> {
    record
        .end_instant()
        .unwrap_or(start + Duration::hours(DEFAULT_EVENT_WINDOW_HOURS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;

    fn make_event(id: i64, start: Option<&str>, end: Option<&str>) -> EventRecord {
        EventRecord {
            id,
            name: format!("Event {id}"),
            name_en: None,
            description: String::new(),
            description_en: None,
            eventdate: start.map(str::to_string),
            event_end_time: end.map(str::to_string),
            department_in_charge: 1,
            status: Some(EventStatus::SuperDeptHeadApproved),
        }
    }

    fn instant(raw: &str) -> DateTime<Utc> {
        raw.parse::<DateTime<Utc>>().unwrap()
    }

    fn ids(bucket: &[EventRecord]) -> Vec<i64> {
        bucket.iter().map(|event| event.id).collect()
    }

    #[test]
    fn test_default_window_keeps_event_ongoing() {
        // Started an hour ago, no declared end: still inside the 2h window.
        let now = instant("2025-06-01T12:00:00Z");
        let event = make_event(1, Some("2025-06-01T11:00:00"), None);
        assert_eq!(classify_event(&event, now), Some(TemporalBucket::Ongoing));
    }

    #[test]
    fn test_upcoming_and_past() {
        let now = instant("2025-06-01T12:00:00Z");
        let upcoming = make_event(1, Some("2025-06-02T09:00:00"), None);
        let past = make_event(2, Some("2025-05-01T09:00:00"), None);
        assert_eq!(
            classify_event(&upcoming, now),
            Some(TemporalBucket::Upcoming)
        );
        assert_eq!(classify_event(&past, now), Some(TemporalBucket::Past));
    }

    #[test]
    fn test_explicit_end_overrides_window() {
        let now = instant("2025-06-01T15:00:00Z");
        // Three hours in, but the declared end is an hour away.
        let event = make_event(
            1,
            Some("2025-06-01T12:00:00"),
            Some("2025-06-01T16:00:00"),
        );
        assert_eq!(classify_event(&event, now), Some(TemporalBucket::Ongoing));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let start = "2025-06-01T12:00:00";
        let event = make_event(1, Some(start), None);

        // start == now
        assert_eq!(
            classify_event(&event, instant("2025-06-01T12:00:00Z")),
            Some(TemporalBucket::Ongoing)
        );
        // effective end == now
        assert_eq!(
            classify_event(&event, instant("2025-06-01T14:00:00Z")),
            Some(TemporalBucket::Ongoing)
        );
        // one second either side
        assert_eq!(
            classify_event(&event, instant("2025-06-01T11:59:59Z")),
            Some(TemporalBucket::Upcoming)
        );
        assert_eq!(
            classify_event(&event, instant("2025-06-01T14:00:01Z")),
            Some(TemporalBucket::Past)
        );
    }

    #[test]
    fn test_missing_and_unparsable_starts_excluded() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, None, None),
            make_event(2, Some("TBA"), None),
            make_event(3, Some("2025-06-01T11:30:00"), None),
        ];

        let buckets = classify_events(&records, now);
        assert_eq!(buckets.len(), 1);
        assert_eq!(ids(&buckets.ongoing), vec![3]);
    }

    #[test]
    fn test_buckets_partition_classifiable_records() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, Some("2025-06-01T11:00:00"), None),
            make_event(2, Some("2025-06-02T09:00:00"), None),
            make_event(3, Some("2025-05-01T09:00:00"), None),
            make_event(4, None, None),
        ];

        let buckets = classify_events(&records, now);
        assert_eq!(ids(&buckets.ongoing), vec![1]);
        assert_eq!(ids(&buckets.upcoming), vec![2]);
        assert_eq!(ids(&buckets.past), vec![3]);
        assert_eq!(buckets.len(), 3);
    }

    #[test]
    fn test_upcoming_sorted_soonest_first() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, Some("2025-06-05T09:00:00"), None),
            make_event(2, Some("2025-06-02T09:00:00"), None),
            make_event(3, Some("2025-06-03T09:00:00"), None),
        ];

        let buckets = classify_events(&records, now);
        assert_eq!(ids(&buckets.upcoming), vec![2, 3, 1]);
    }

    #[test]
    fn test_past_sorted_most_recent_first() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, Some("2025-03-01T09:00:00"), None),
            make_event(2, Some("2025-05-01T09:00:00"), None),
            make_event(3, Some("2025-04-01T09:00:00"), None),
        ];

        let buckets = classify_events(&records, now);
        assert_eq!(ids(&buckets.past), vec![2, 3, 1]);
    }

    #[test]
    fn test_equal_starts_keep_input_order() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, Some("2025-06-02T09:00:00"), None),
            make_event(2, Some("2025-06-02T09:00:00"), None),
            make_event(3, Some("2025-05-02T09:00:00"), None),
            make_event(4, Some("2025-05-02T09:00:00"), None),
        ];

        let buckets = classify_events(&records, now);
        assert_eq!(ids(&buckets.upcoming), vec![1, 2]);
        assert_eq!(ids(&buckets.past), vec![3, 4]);
    }

    #[test]
    fn test_unparsable_end_degrades_to_default_window() {
        let now = instant("2025-06-01T13:00:00Z");
        let event = make_event(1, Some("2025-06-01T12:00:00"), Some("whenever"));
        assert_eq!(classify_event(&event, now), Some(TemporalBucket::Ongoing));
    }

    #[test]
    fn test_same_inputs_same_output() {
        let now = instant("2025-06-01T12:00:00Z");
        let records = vec![
            make_event(1, Some("2025-06-01T11:00:00"), None),
            make_event(2, Some("2025-06-02T09:00:00"), None),
        ];

        assert_eq!(classify_events(&records, now), classify_events(&records, now));
    }
}
