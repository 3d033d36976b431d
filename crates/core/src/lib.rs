//! Core business logic for Coliving.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every calculation works on in-memory records: the store loads a
//! [`unit::UnitSnapshot`] and hands it to the services here.
//!
//! # Modules
//!
//! - `member` - Contribution configs, roles and member validation
//! - `allocation` - Share fractions, expected amounts and the monthly total chain
//! - `expected` - Expected-expense templates and per-month entries
//! - `expense` - Expenses, balance payments and their validation
//! - `balance` - Per-member monthly balances, wallet and trends
//! - `spends` - Cross-unit spend summaries for a user
//! - `contribution` - Ad-hoc contribution requests
//! - `reports` - Unit reports, charts and CSV export
//! - `unit` - Units, contracts and due dates
//! - `period` - Month keys and date helpers

pub mod allocation;
pub mod balance;
pub mod contribution;
pub mod error;
pub mod expected;
pub mod expense;
pub mod member;
pub mod period;
pub mod reports;
pub mod spends;
pub mod unit;

#[cfg(test)]
mod fixtures;
