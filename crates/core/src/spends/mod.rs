//! A user's spending across every unit they belong to.
//!
//! Each unit is computed in its own currency. Totals are plain sums labelled
//! with the first unit's currency; nothing is converted.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::SpendsService;
pub use types::{SpendFigures, SpendsSummary, UnitSpends};
