//! Text rendering of a month grid.

use vig_planning::{CalendarSlot, DayStatus, MonthCursor};

const WEEKDAY_HEADER: &str = "Mon  Tue  Wed  Thu  Fri  Sat  Sun";
const CELL_WIDTH: usize = 5;

/// Render a Monday-first month grid.
///
/// Each cell is the day number plus a status marker: `*` completed,
/// `+` planned, `.` weekend, nothing for idle. Padding cells are blank.
#[must_use]
pub fn render_month_grid(cursor: MonthCursor, slots: &[CalendarSlot]) -> String {
    let mut lines = vec![center(&cursor.label()), WEEKDAY_HEADER.to_string()];

    for week in slots.chunks(7) {
        let row = week
            .iter()
            .map(|slot| cell(*slot))
            .collect::<String>()
            .trim_end()
            .to_string();
        lines.push(row);
    }

    lines.push(String::new());
    lines.push("*  completed   +  planned   .  weekend".to_string());
    lines.join("\n")
}

fn cell(slot: CalendarSlot) -> String {
    match slot {
        CalendarSlot::Padding => " ".repeat(CELL_WIDTH),
        CalendarSlot::Day { number, status } => {
            let marker = match status {
                DayStatus::Completed => '*',
                DayStatus::Planned => '+',
                DayStatus::Weekend => '.',
                DayStatus::Idle => ' ',
            };
            format!("{number:>3}{marker} ")
        }
    }
}

fn center(text: &str) -> String {
    let width = WEEKDAY_HEADER.len();
    if text.len() >= width {
        return text.to_string();
    }
    let pad = (width - text.len()) / 2;
    format!("{}{text}", " ".repeat(pad))
}
