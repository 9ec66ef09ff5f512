//! Per-process delivery history.
//!
//! Every `deliver` call is recorded against the owning process, including
//! discarded deliveries — `Inert` and `Ignored` must stay distinguishable
//! for observability. The log is immutable: `record` returns a new log with
//! the entry appended.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Unique identity of a started process.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ProcessId(Uuid);

impl ProcessId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The comparable, serializable discriminant of a delivery outcome.
///
/// [`DeliveryOutcome`](crate::DeliveryOutcome) carries the fault value and
/// is therefore not `PartialEq`; `Disposition` is what gets logged and
/// asserted on.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Disposition {
    /// The process was already terminated; the envelope had no effect.
    Inert,
    /// The envelope's kind was not in the accept set; it was dropped.
    Ignored,
    /// The event matched and the process suspended on a new accept set.
    Suspended,
    /// The event matched and the process ran to completion.
    Completed,
    /// The event matched and the body faulted while resuming.
    Faulted,
}

/// Record of a single delivery.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Position in the delivery order, starting at 0.
    pub sequence: usize,
    /// Name of the delivered event's kind.
    pub kind: String,
    /// What became of the delivery.
    pub disposition: Disposition,
    /// When the delivery happened.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of deliveries to one process.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use eventide::engine::{DeliveryLog, DeliveryRecord, Disposition};
///
/// let log = DeliveryLog::new();
/// let log = log.record(DeliveryRecord {
///     sequence: 0,
///     kind: "Knock".to_string(),
///     disposition: Disposition::Suspended,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(log.records().len(), 1);
/// assert_eq!(log.count(Disposition::Suspended), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeliveryLog {
    records: Vec<DeliveryRecord>,
}

impl Default for DeliveryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a delivery, returning a new log.
    pub fn record(&self, record: DeliveryRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// All recorded deliveries in order.
    pub fn records(&self) -> &[DeliveryRecord] {
        &self.records
    }

    /// The most recent delivery, if any.
    pub fn last(&self) -> Option<&DeliveryRecord> {
        self.records.last()
    }

    /// How many deliveries ended with the given disposition.
    pub fn count(&self, disposition: Disposition) -> usize {
        self.records
            .iter()
            .filter(|r| r.disposition == disposition)
            .count()
    }

    /// Wall-clock span from first to last recorded delivery.
    ///
    /// Returns `None` when no deliveries have been recorded; with a single
    /// record the span is zero.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sequence: usize, kind: &str, disposition: Disposition) -> DeliveryRecord {
        DeliveryRecord {
            sequence,
            kind: kind.to_string(),
            disposition,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn record_returns_new_log() {
        let log = DeliveryLog::new();
        let extended = log.record(record(0, "Open", Disposition::Suspended));

        assert_eq!(log.records().len(), 0);
        assert_eq!(extended.records().len(), 1);
    }

    #[test]
    fn records_keep_delivery_order() {
        let log = DeliveryLog::new()
            .record(record(0, "Knock", Disposition::Suspended))
            .record(record(1, "Open", Disposition::Suspended))
            .record(record(2, "Knock", Disposition::Ignored));

        let kinds: Vec<&str> = log.records().iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Knock", "Open", "Knock"]);
        assert_eq!(log.last().unwrap().sequence, 2);
    }

    #[test]
    fn count_by_disposition() {
        let log = DeliveryLog::new()
            .record(record(0, "Knock", Disposition::Suspended))
            .record(record(1, "Close", Disposition::Ignored))
            .record(record(2, "Open", Disposition::Suspended));

        assert_eq!(log.count(Disposition::Suspended), 2);
        assert_eq!(log.count(Disposition::Ignored), 1);
        assert_eq!(log.count(Disposition::Faulted), 0);
    }

    #[test]
    fn duration_requires_records() {
        let log = DeliveryLog::new();
        assert!(log.duration().is_none());

        let log = log.record(record(0, "Open", Disposition::Suspended));
        assert!(log.duration().is_some());
    }

    #[test]
    fn log_serializes_round_trip() {
        let log = DeliveryLog::new().record(record(0, "Open", Disposition::Completed));

        let json = serde_json::to_string(&log).unwrap();
        let restored: DeliveryLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.records().len(), 1);
        assert_eq!(restored.records()[0].kind, "Open");
        assert_eq!(restored.records()[0].disposition, Disposition::Completed);
    }

    #[test]
    fn process_ids_are_unique() {
        assert_ne!(ProcessId::new(), ProcessId::new());
    }
}
