//! Monthly payment due dates.

use chrono::{Datelike, NaiveDate};

use super::month::MonthKey;

/// Next due date for a monthly due day, relative to `today`.
///
/// The due day of the current month is returned while it has not passed
/// (today counts as not passed), otherwise the due day of the next month.
/// Due days beyond the end of a short month are clamped to its last day.
#[must_use]
pub fn next_due_date(due_day: u32, today: NaiveDate) -> NaiveDate {
    let this_month = MonthKey::of(today);
    let candidate = due_in(this_month, due_day);
    if candidate >= today {
        candidate
    } else {
        due_in(this_month.next(), due_day)
    }
}

fn due_in(month: MonthKey, due_day: u32) -> NaiveDate {
    let last = month.last_day();
    let day = due_day.clamp(1, last.day());
    month.first_day().with_day(day).unwrap_or(last)
}

/// Human label for a due day, e.g. `5th of each month`.
#[must_use]
pub fn format_due_day(due_day: u32) -> String {
    let suffix = match (due_day % 10, due_day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{due_day}{suffix} of each month")
}
