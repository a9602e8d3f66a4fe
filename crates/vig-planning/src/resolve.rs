//! Resolving one calendar day to its planning record.

use chrono::NaiveDate;
use vig_core::PlanningRecord;

use crate::calendar::MonthCursor;

/// Find the planning record for `day` of the cursor's month, time-of-day
/// ignored.
///
/// Returns `None` when nothing is planned that day (the caller performs no
/// navigation) or when the cursor/day pair is not a real calendar date.
///
/// The planning service is assumed to hold at most one record per inspector
/// and calendar day. If that invariant is ever violated upstream, which of
/// the matching records is returned is unspecified; callers must not rely
/// on a deterministic pick.
#[must_use]
pub fn resolve_day(
    records: &[PlanningRecord],
    cursor: MonthCursor,
    day: u32,
) -> Option<&PlanningRecord> {
    let target = NaiveDate::from_ymd_opt(cursor.year, cursor.month, day)?;
    records
        .iter()
        .find(|record| record.calendar_date() == Some(target))
}
