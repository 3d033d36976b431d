//! Unit error types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Unit validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    /// Name is blank.
    #[error("Unit name is required")]
    EmptyName,

    /// Rent below zero.
    #[error("Monthly rent cannot be negative, got {0}")]
    NegativeRent(Decimal),

    /// Payment due day outside `1..=31`.
    #[error("Payment due day must be between 1 and 31, got {0}")]
    InvalidDueDay(u32),

    /// Contract ends before it starts.
    #[error("Contract expiry {end} is before its start {start}")]
    ContractEndsBeforeStart {
        /// Contract start.
        start: NaiveDate,
        /// Contract expiry.
        end: NaiveDate,
    },
}
