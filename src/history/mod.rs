//! Completed-session history
//!
//! Every finished countdown is recorded as a single epoch-millisecond
//! timestamp. Records are immutable and insertion-ordered; the only derived
//! view is "sessions completed today", a pure filter against local midnight
//! recomputed on every render.

pub mod store;

pub use store::{HistoryStore, StoreError};

use chrono::{DateTime, Local, TimeZone};

/// One completed focus session, stamped at completion time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionRecord(i64);

impl SessionRecord {
    /// Record a session completed right now
    pub fn now() -> Self {
        Self(Local::now().timestamp_millis())
    }

    /// Record with an explicit epoch-millisecond timestamp
    pub fn at_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Completion time in epoch milliseconds
    pub fn timestamp_millis(self) -> i64 {
        self.0
    }
}

/// Ordered list of completed sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionHistory {
    records: Vec<SessionRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the persisted flat list of timestamps
    pub fn from_millis(millis: Vec<i64>) -> Self {
        Self {
            records: millis.into_iter().map(SessionRecord::at_millis).collect(),
        }
    }

    /// The persisted form: a flat list of epoch-millisecond integers
    pub fn to_millis(&self) -> Vec<i64> {
        self.records.iter().map(|r| r.timestamp_millis()).collect()
    }

    /// Append a completed session
    pub fn push(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Count records at or after the given cutoff
    pub fn count_since(&self, cutoff_millis: i64) -> usize {
        self.records
            .iter()
            .filter(|r| r.timestamp_millis() >= cutoff_millis)
            .count()
    }

    /// Sessions completed today, relative to the given "now"
    pub fn count_today_at(&self, now: DateTime<Local>) -> usize {
        self.count_since(start_of_local_day_millis(now))
    }

    /// Sessions completed since local midnight
    pub fn count_today(&self) -> usize {
        self.count_today_at(Local::now())
    }
}

/// Epoch milliseconds of the most recent local midnight (00:00:00)
pub fn start_of_local_day_millis(now: DateTime<Local>) -> i64 {
    let midnight = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| Local.from_local_datetime(&naive).earliest());

    match midnight {
        Some(dt) => dt.timestamp_millis(),
        // Midnight skipped by a DST gap; nothing today can predate now
        None => now.timestamp_millis(),
    }
}

/// Caption for the dot display ("3 sessions today")
pub fn session_count_caption(count: usize) -> String {
    match count {
        0 => "No sessions completed today".to_string(),
        1 => "1 session today".to_string(),
        n => format!("{} sessions today", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_empty_history() {
        let history = SessionHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.count_today(), 0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut history = SessionHistory::new();
        history.push(SessionRecord::at_millis(100));
        history.push(SessionRecord::at_millis(50));
        assert_eq!(history.to_millis(), vec![100, 50]);
    }

    #[test]
    fn test_millis_round_trip() {
        let history = SessionHistory::from_millis(vec![1, 2, 3]);
        assert_eq!(history.to_millis(), vec![1, 2, 3]);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn test_count_today_splits_on_local_midnight() {
        // Records at [yesterday 23:59, today 00:00, today 10:00] count 2
        let now = local(2026, 1, 15, 12, 0);
        let mut history = SessionHistory::new();
        history.push(SessionRecord::at_millis(
            local(2026, 1, 14, 23, 59).timestamp_millis(),
        ));
        history.push(SessionRecord::at_millis(
            local(2026, 1, 15, 0, 0).timestamp_millis(),
        ));
        history.push(SessionRecord::at_millis(
            local(2026, 1, 15, 10, 0).timestamp_millis(),
        ));

        assert_eq!(history.count_today_at(now), 2);
    }

    #[test]
    fn test_count_since_is_inclusive() {
        let mut history = SessionHistory::new();
        history.push(SessionRecord::at_millis(1000));
        assert_eq!(history.count_since(1000), 1);
        assert_eq!(history.count_since(1001), 0);
    }

    #[test]
    fn test_start_of_local_day() {
        let now = local(2026, 1, 15, 18, 30);
        let midnight = local(2026, 1, 15, 0, 0);
        assert_eq!(start_of_local_day_millis(now), midnight.timestamp_millis());
    }

    #[test]
    fn test_session_count_caption() {
        assert_eq!(session_count_caption(0), "No sessions completed today");
        assert_eq!(session_count_caption(1), "1 session today");
        assert_eq!(session_count_caption(4), "4 sessions today");
    }
}
