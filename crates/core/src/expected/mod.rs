//! Expected expenses: per-category templates and the monthly entries
//! materialized from them over a unit's contract period.

pub mod book;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use book::{ExpectedEntryBook, UpsertOutcome};
pub use error::ExpectedExpenseError;
pub use service::ExpectedExpenseService;
pub use types::{EntryKey, ExpectedEntry, ExpectedTemplate, PlannedEntry, TemplateChange};
