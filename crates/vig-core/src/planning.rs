use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled inspection-day entry, owned by the planning service.
///
/// Read-only input on this side. The planning service guarantees at most one
/// record per inspector and calendar day; nothing here enforces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningRecord {
    /// Record id, handed to the document-collection screen on navigation.
    pub id: i64,
    /// Raw date string as received: ISO date (`2024-03-05`) or date-time
    /// (`2024-03-05T08:00:00Z`). Kept raw so a malformed value degrades to
    /// "no calendar date" instead of a deserialization failure.
    pub date: String,
    /// Inspected employer, when the service includes it.
    #[serde(default)]
    pub employer_id: Option<i64>,
    /// Number of documents already uploaded against this entry.
    #[serde(default)]
    pub document_count: u32,
}

impl PlanningRecord {
    /// Calendar date of this record, time-of-day ignored.
    ///
    /// Returns `None` when the date string does not parse; such records are
    /// excluded from calendar matching rather than reported as errors.
    #[must_use]
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        let date_part = self
            .date
            .split_once('T')
            .map_or(self.date.as_str(), |(date, _)| date);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

/// An inspector entry from the supervisor's calendar listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inspector {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Inspector {
    /// `"First Last"`, trimmed when either part is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
