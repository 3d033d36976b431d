//! `SeaORM` entity definitions.
//!
//! Enumerations are stored as text tags and parsed by the mappers, so rows
//! written by older clients (legacy roles, missing contribution fields) still
//! load.

pub mod balance_payments;
pub mod contribution_payments;
pub mod contributions;
pub mod expected_expense_entries;
pub mod expected_expenses;
pub mod expenses;
pub mod unit_members;
pub mod units;
