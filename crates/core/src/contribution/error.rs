//! Contribution error types.

use coliving_shared::types::UserId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Contribution errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContributionError {
    /// Amount under 0.01.
    #[error("Contribution amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Reason is blank.
    #[error("Contribution reason is required")]
    EmptyReason,

    /// Request is already collected.
    #[error("Contribution is already collected")]
    AlreadyCollected,

    /// User already paid this request.
    #[error("User {0} has already paid this contribution")]
    AlreadyPaid(UserId),

    /// Unknown status tag.
    #[error("Unknown contribution status: {0}")]
    UnknownStatus(String),
}
