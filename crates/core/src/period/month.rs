//! Month keys and month ranges.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month, stored as its first day.
///
/// Ordering follows the calendar. Serialized as the first-of-month date
/// (`2026-01-01`), which is how expected entries and balance payments key
/// their month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "NaiveDate", into = "NaiveDate")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self(
            date.checked_sub_days(Days::new(u64::from(date.day0())))
                .unwrap_or(date),
        )
    }

    /// Creates a month from a year and a 1-based month number.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Parses `YYYY-MM` or any `YYYY-MM-DD` date inside the month.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(Self::of(date));
        }
        let (year, month) = s.split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// First day of the month.
    #[must_use]
    pub const fn first_day(self) -> NaiveDate {
        self.0
    }

    /// Last day of the month.
    #[must_use]
    pub fn last_day(self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.0)
    }

    /// Calendar year.
    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// 1-based month number.
    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// The following month.
    #[must_use]
    pub fn next(self) -> Self {
        self.0.checked_add_months(Months::new(1)).map_or(self, Self)
    }

    /// The preceding month.
    #[must_use]
    pub fn prev(self) -> Self {
        self.0.checked_sub_months(Months::new(1)).map_or(self, Self)
    }

    /// Returns true if `date` falls within this month.
    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    /// `YYYY-MM` key used for grouping.
    #[must_use]
    pub fn key(self) -> String {
        self.0.format("%Y-%m").to_string()
    }

    /// Short chart label: `Jan` within `current_year`, `Jan '25` otherwise.
    #[must_use]
    pub fn label(self, current_year: i32) -> String {
        if self.year() == current_year {
            self.0.format("%b").to_string()
        } else {
            self.0.format("%b '%y").to_string()
        }
    }

    /// Report period label, e.g. `Mar 2026`.
    #[must_use]
    pub fn long_label(self) -> String {
        self.0.format("%b %Y").to_string()
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

impl From<NaiveDate> for MonthKey {
    fn from(date: NaiveDate) -> Self {
        Self::of(date)
    }
}

impl From<MonthKey> for NaiveDate {
    fn from(month: MonthKey) -> Self {
        month.0
    }
}

/// Every month touched by the inclusive range `start..=end`.
///
/// A range from Jan 15 to Mar 3 yields Jan, Feb and Mar. Returns an empty list
/// when `end` falls in a month before `start`.
#[must_use]
pub fn months_in_range(start: NaiveDate, end: NaiveDate) -> Vec<MonthKey> {
    let last = MonthKey::of(end);
    let mut current = MonthKey::of(start);
    let mut months = Vec::new();
    while current <= last {
        months.push(current);
        let next = current.next();
        if next == current {
            break;
        }
        current = next;
    }
    months
}

/// Display format for dates, e.g. `5 Jan 2026`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %b %Y").to_string()
}
