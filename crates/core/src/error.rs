//! Conversions from domain errors into [`AppError`].

use coliving_shared::AppError;

use crate::contribution::ContributionError;
use crate::expected::ExpectedExpenseError;
use crate::expense::{BalancePaymentError, ExpenseError};
use crate::member::MemberError;
use crate::reports::ReportError;
use crate::unit::UnitError;

macro_rules! validation_error {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for AppError {
                fn from(err: $ty) -> Self {
                    Self::Validation(err.to_string())
                }
            }
        )+
    };
}

validation_error!(
    MemberError,
    ExpenseError,
    BalancePaymentError,
    ExpectedExpenseError,
    UnitError,
);

impl From<ContributionError> for AppError {
    fn from(err: ContributionError) -> Self {
        match err {
            ContributionError::AlreadyPaid(_) => Self::Conflict(err.to_string()),
            ContributionError::AlreadyCollected => Self::BusinessRule(err.to_string()),
            _ => Self::Validation(err.to_string()),
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        Self::Internal(err.to_string())
    }
}
