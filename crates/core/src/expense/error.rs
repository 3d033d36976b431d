//! Expense and balance payment error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Expense validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpenseError {
    /// Amount below the smallest accepted value (0.01).
    #[error("Expense amount must be at least 0.01, got {0}")]
    AmountTooSmall(Decimal),

    /// No payer selected.
    #[error("Expense payer is required")]
    MissingPayer,

    /// Unknown category tag.
    #[error("Unknown expense category: {0}")]
    UnknownCategory(String),

    /// Unknown payment mode tag.
    #[error("Unknown payment mode: {0}")]
    UnknownPaymentMode(String),
}

/// Balance payment validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BalancePaymentError {
    /// Amount is zero or negative.
    #[error("Balance payment amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Paying yourself.
    #[error("Balance payment sender and recipient must differ")]
    SelfPayment,
}
