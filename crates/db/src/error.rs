//! Record store errors.

use coliving_core::contribution::ContributionError;
use coliving_core::expected::ExpectedExpenseError;
use coliving_core::expense::{BalancePaymentError, ExpenseError};
use coliving_core::member::MemberError;
use coliving_core::unit::UnitError;
use coliving_shared::AppError;
use sea_orm::DbErr;
use uuid::Uuid;

/// Error types for record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Record not found.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Kind of record.
        entity: &'static str,
        /// Requested ID.
        id: Uuid,
    },

    /// Write would duplicate an existing record.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// A stored row holds a value the domain does not recognise.
    #[error("Invalid {entity} record {id}: {reason}")]
    InvalidRecord {
        /// Kind of record.
        entity: &'static str,
        /// Row ID.
        id: Uuid,
        /// What was wrong.
        reason: String,
    },

    /// Unit input rejected.
    #[error(transparent)]
    Unit(#[from] UnitError),

    /// Member input rejected.
    #[error(transparent)]
    Member(#[from] MemberError),

    /// Expense input rejected.
    #[error(transparent)]
    Expense(#[from] ExpenseError),

    /// Balance payment input rejected.
    #[error(transparent)]
    BalancePayment(#[from] BalancePaymentError),

    /// Expected expense input rejected.
    #[error(transparent)]
    ExpectedExpense(#[from] ExpectedExpenseError),

    /// Contribution input rejected.
    #[error(transparent)]
    Contribution(#[from] ContributionError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl StoreError {
    pub(crate) const fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Conflict(msg) => Self::Conflict(msg),
            StoreError::InvalidRecord { .. } => Self::Internal(err.to_string()),
            StoreError::Unit(e) => e.into(),
            StoreError::Member(e) => e.into(),
            StoreError::Expense(e) => e.into(),
            StoreError::BalancePayment(e) => e.into(),
            StoreError::ExpectedExpense(e) => e.into(),
            StoreError::Contribution(e) => e.into(),
            StoreError::Database(e) => Self::Database(e.to_string()),
        }
    }
}
