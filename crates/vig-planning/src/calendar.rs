//! Month-grid aggregation over planning records.
//!
//! Calendar arithmetic delegates entirely to chrono (weekday, days in
//! month, leap years). Weeks are Monday-first.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use vig_core::PlanningRecord;

/// The month a calendar screen is looking at. Mutated only by explicit
/// next/previous navigation; wraps year boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    /// 1..=12
    pub month: u32,
    pub year: i32,
}

impl MonthCursor {
    /// Cursor on the current local month.
    #[must_use]
    pub fn current() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    /// December wraps to January of the next year.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.month == 12 {
            Self {
                month: 1,
                year: self.year + 1,
            }
        } else {
            Self {
                month: self.month + 1,
                year: self.year,
            }
        }
    }

    /// January wraps to December of the previous year.
    #[must_use]
    pub const fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                month: 12,
                year: self.year - 1,
            }
        } else {
            Self {
                month: self.month - 1,
                year: self.year,
            }
        }
    }

    /// First day of the month, `None` for an out-of-range cursor.
    #[must_use]
    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month (leap years included), 0 for an
    /// out-of-range cursor.
    #[must_use]
    pub fn days_in_month(self) -> u32 {
        self.first_day()
            .and_then(|first| first.checked_add_months(chrono::Months::new(1)))
            .and_then(|next_first| next_first.pred_opt())
            .map_or(0, |last| last.day())
    }

    /// Monday-first offset of day 1: 0 when the month starts on a Monday,
    /// 6 on a Sunday.
    #[must_use]
    pub fn first_weekday_offset(self) -> u32 {
        self.first_day()
            .map_or(0, |first| first.weekday().num_days_from_monday())
    }

    /// Human label, e.g. `"March 2024"`.
    #[must_use]
    pub fn label(self) -> String {
        self.first_day()
            .map_or_else(String::new, |first| first.format("%B %Y").to_string())
    }
}

/// Derived status of one numbered calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Idle,
    Planned,
    Completed,
    Weekend,
}

/// One cell of the month grid: leading padding before day 1, or a numbered
/// day with its classification. Recomputed on every month change, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarSlot {
    Padding,
    Day { number: u32, status: DayStatus },
}

/// Compute the Monday-first month grid for `cursor`.
///
/// Emits `first_weekday_offset` padding slots, then one slot per day.
/// Classification precedence per day: completed (any matching record with
/// `document_count > 0`), planned (any matching record), weekend
/// (Saturday/Sunday), idle. Records whose date fails to parse never match;
/// malformed input is excluded, not an error.
#[must_use]
pub fn month_grid(records: &[PlanningRecord], cursor: MonthCursor) -> Vec<CalendarSlot> {
    let Some(first) = cursor.first_day() else {
        return Vec::new();
    };

    let offset = cursor.first_weekday_offset() as usize;
    let days = cursor.days_in_month();

    let mut slots = Vec::with_capacity(offset + days as usize);
    slots.extend(std::iter::repeat_n(CalendarSlot::Padding, offset));

    for number in 1..=days {
        // `number` stays within the month, so the date always exists.
        let Some(date) = first.with_day(number) else {
            continue;
        };
        slots.push(CalendarSlot::Day {
            number,
            status: classify(records, date),
        });
    }
    slots
}

fn classify(records: &[PlanningRecord], date: NaiveDate) -> DayStatus {
    let mut planned = false;
    for record in records {
        if record.calendar_date() == Some(date) {
            if record.document_count > 0 {
                return DayStatus::Completed;
            }
            planned = true;
        }
    }
    if planned {
        DayStatus::Planned
    } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        DayStatus::Weekend
    } else {
        DayStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn record(date: &str, document_count: u32) -> PlanningRecord {
        PlanningRecord {
            id: 1,
            date: date.to_string(),
            employer_id: None,
            document_count,
        }
    }

    fn status_of(slots: &[CalendarSlot], day: u32) -> DayStatus {
        slots
            .iter()
            .find_map(|slot| match slot {
                CalendarSlot::Day { number, status } if *number == day => Some(*status),
                _ => None,
            })
            .unwrap_or_else(|| panic!("day {day} missing from grid"))
    }

    #[rstest]
    #[case::january(MonthCursor { month: 1, year: 2024 }, 31)]
    #[case::leap_february(MonthCursor { month: 2, year: 2024 }, 29)]
    #[case::plain_february(MonthCursor { month: 2, year: 2023 }, 28)]
    #[case::century_non_leap(MonthCursor { month: 2, year: 1900 }, 28)]
    #[case::century_leap(MonthCursor { month: 2, year: 2000 }, 29)]
    #[case::april(MonthCursor { month: 4, year: 2024 }, 30)]
    fn days_in_month_matches_the_calendar(#[case] cursor: MonthCursor, #[case] expected: u32) {
        assert_eq!(cursor.days_in_month(), expected);
    }

    #[test]
    fn grid_length_is_offset_plus_days_for_every_month() {
        for year in [1999, 2000, 2023, 2024] {
            for month in 1..=12 {
                let cursor = MonthCursor { month, year };
                let offset = cursor.first_weekday_offset();
                assert!(offset <= 6, "offset out of range for {cursor:?}");
                let grid = month_grid(&[], cursor);
                assert_eq!(
                    grid.len() as u32,
                    offset + cursor.days_in_month(),
                    "wrong slot count for {cursor:?}",
                );
                assert!(
                    grid.iter().take(offset as usize).all(|slot| matches!(slot, CalendarSlot::Padding)),
                    "padding must lead the grid for {cursor:?}",
                );
            }
        }
    }

    #[test]
    fn march_2024_starts_on_friday() {
        // 2024-03-01 is a Friday: four leading padding slots Monday-first.
        let cursor = MonthCursor { month: 3, year: 2024 };
        assert_eq!(cursor.first_weekday_offset(), 4);
    }

    #[test]
    fn record_without_documents_marks_day_planned() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("2024-03-05", 0)], cursor);
        assert_eq!(status_of(&grid, 5), DayStatus::Planned);
    }

    #[test]
    fn record_with_documents_marks_day_completed() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("2024-03-05", 2)], cursor);
        assert_eq!(status_of(&grid, 5), DayStatus::Completed);
    }

    #[test]
    fn completed_wins_over_planned_on_the_same_day() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(
            &[record("2024-03-05", 0), record("2024-03-05", 3)],
            cursor,
        );
        assert_eq!(status_of(&grid, 5), DayStatus::Completed);
    }

    #[test]
    fn planned_weekend_day_is_planned_not_weekend() {
        // 2024-03-09 is a Saturday.
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("2024-03-09", 0)], cursor);
        assert_eq!(status_of(&grid, 9), DayStatus::Planned);
    }

    #[test]
    fn unplanned_weekends_are_weekend_never_idle() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[], cursor);
        for slot in &grid {
            if let CalendarSlot::Day { number, status } = slot {
                let date = NaiveDate::from_ymd_opt(2024, 3, *number).unwrap();
                if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
                    assert_eq!(*status, DayStatus::Weekend, "day {number}");
                } else {
                    assert_eq!(*status, DayStatus::Idle, "day {number}");
                }
            }
        }
    }

    #[test]
    fn date_time_record_matches_its_calendar_day() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("2024-03-05T09:15:00Z", 0)], cursor);
        assert_eq!(status_of(&grid, 5), DayStatus::Planned);
    }

    #[test]
    fn malformed_record_dates_are_excluded() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("garbage", 5)], cursor);
        assert!(grid.iter().all(|slot| !matches!(
            slot,
            CalendarSlot::Day { status: DayStatus::Completed | DayStatus::Planned, .. }
        )));
    }

    #[test]
    fn records_from_other_months_do_not_match() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        let grid = month_grid(&[record("2024-04-05", 2), record("2023-03-05", 2)], cursor);
        assert_eq!(status_of(&grid, 5), DayStatus::Idle);
    }

    #[rstest]
    #[case::december_wraps(MonthCursor { month: 12, year: 2023 }, MonthCursor { month: 1, year: 2024 })]
    #[case::mid_year(MonthCursor { month: 6, year: 2024 }, MonthCursor { month: 7, year: 2024 })]
    fn next_wraps_year_boundaries(#[case] cursor: MonthCursor, #[case] expected: MonthCursor) {
        assert_eq!(cursor.next(), expected);
    }

    #[rstest]
    #[case::january_wraps(MonthCursor { month: 1, year: 2024 }, MonthCursor { month: 12, year: 2023 })]
    #[case::mid_year(MonthCursor { month: 7, year: 2024 }, MonthCursor { month: 6, year: 2024 })]
    fn previous_wraps_year_boundaries(#[case] cursor: MonthCursor, #[case] expected: MonthCursor) {
        assert_eq!(cursor.previous(), expected);
    }

    #[test]
    fn navigation_is_inverse_for_every_month() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let cursor = MonthCursor { month, year };
                assert_eq!(cursor.previous().next(), cursor);
                assert_eq!(cursor.next().previous(), cursor);
            }
        }
    }

    #[test]
    fn label_names_month_and_year() {
        let cursor = MonthCursor { month: 3, year: 2024 };
        assert_eq!(cursor.label(), "March 2024");
    }

    #[test]
    fn out_of_range_cursor_yields_empty_grid() {
        let cursor = MonthCursor { month: 13, year: 2024 };
        assert!(month_grid(&[], cursor).is_empty());
        assert_eq!(cursor.days_in_month(), 0);
    }
}
