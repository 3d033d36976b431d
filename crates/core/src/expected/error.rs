//! Expected expense error types.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::expense::ExpenseCategory;

/// Expected expense errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpectedExpenseError {
    /// Generation needs both contract dates.
    #[error("Contract start and expiry dates are required")]
    MissingContractPeriod,

    /// Template or entry amount below zero.
    #[error("Expected amount for {category} cannot be negative, got {amount}")]
    NegativeAmount {
        /// Category being set.
        category: ExpenseCategory,
        /// Rejected amount.
        amount: Decimal,
    },
}
