//! Member error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Member settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MemberError {
    /// Share percentage outside `0..=100`.
    #[error("Share percentage must be between 0 and 100, got {0}")]
    InvalidSharePercentage(Decimal),

    /// Fixed amount below zero.
    #[error("Fixed amount cannot be negative, got {0}")]
    NegativeFixedAmount(Decimal),

    /// Unknown contribution type tag.
    #[error("Unknown contribution type: {0}")]
    UnknownContributionType(String),

    /// Unknown contribution period tag.
    #[error("Unknown contribution period: {0}")]
    UnknownContributionPeriod(String),
}
