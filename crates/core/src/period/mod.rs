//! Calendar months, payment due dates and date display.

pub mod due;
pub mod month;

pub use due::{format_due_day, next_due_date};
pub use month::{MonthKey, format_date, months_in_range};
