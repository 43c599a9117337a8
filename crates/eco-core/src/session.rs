use chrono::{Local, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::ComparisonRequest;

/// Timestamp format for session records (local wall clock, second precision).
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

/// One completed comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub timestamp: String,
    pub label: String,
}

impl SessionRecord {
    /// Stamp a record for `request` with the current local time.
    #[must_use]
    pub fn now(request: &ComparisonRequest) -> Self {
        Self::at(Local::now().time(), request)
    }

    #[must_use]
    pub fn at(time: NaiveTime, request: &ComparisonRequest) -> Self {
        Self {
            timestamp: time.format(TIMESTAMP_FORMAT).to_string(),
            label: request.label(),
        }
    }
}

impl std::fmt::Display for SessionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.label)
    }
}

/// Append-only, insertion-ordered log of completed comparisons.
///
/// Lives for one interactive session (or process). Records are never mutated
/// or removed; appends go through `&mut self`, so a single writer is enforced
/// by the borrow checker.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionLog {
    records: Vec<SessionRecord>,
}

impl SessionLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a SessionLog {
    type Item = &'a SessionRecord;
    type IntoIter = std::slice::Iter<'a, SessionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn time(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn record_formats_time_and_label() {
        let request = ComparisonRequest::new("Bamboo Fiber", "Cotton");
        let record = SessionRecord::at(time(9, 5, 7), &request);
        assert_eq!(record.timestamp, "09:05:07");
        assert_eq!(record.label, "Bamboo Fiber vs Cotton");
        assert_eq!(record.to_string(), "[09:05:07] Bamboo Fiber vs Cotton");
    }

    #[test]
    fn now_uses_second_precision() {
        let record = SessionRecord::now(&ComparisonRequest::new("Glass", "PET"));
        assert_eq!(record.timestamp.len(), 8);
        assert_eq!(record.timestamp.matches(':').count(), 2);
    }

    #[test]
    fn log_preserves_insertion_order() {
        let mut log = SessionLog::new();
        assert!(log.is_empty());

        log.append(SessionRecord::at(time(10, 0, 0), &ComparisonRequest::new("A", "B")));
        log.append(SessionRecord::at(time(9, 0, 0), &ComparisonRequest::new("C", "D")));

        let labels: Vec<&str> = log.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["A vs B", "C vs D"]);
        assert_eq!(log.len(), 2);
    }
}
