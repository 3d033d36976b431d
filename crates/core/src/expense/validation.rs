//! Validation of expense and balance payment input.

use chrono::NaiveDate;
use coliving_shared::types::UserId;
use rust_decimal::Decimal;

use super::error::{BalancePaymentError, ExpenseError};
use super::types::{ExpenseCategory, PaymentMode};
use crate::period::MonthKey;

const MIN_EXPENSE_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// An expense as submitted, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    /// Category.
    pub category: ExpenseCategory,
    /// Amount.
    pub amount: Decimal,
    /// Who paid, if selected.
    pub paid_by: Option<UserId>,
    /// Expense date.
    pub date: NaiveDate,
    /// Note.
    pub notes: Option<String>,
    /// Payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// Receipt location.
    pub receipt_url: Option<String>,
}

/// Checks an expense before it is stored and returns the payer.
///
/// # Errors
///
/// Returns `ExpenseError::AmountTooSmall` for amounts under 0.01 and
/// `ExpenseError::MissingPayer` when no payer was selected.
pub fn validate_expense(input: &NewExpense) -> Result<UserId, ExpenseError> {
    if input.amount < MIN_EXPENSE_AMOUNT {
        return Err(ExpenseError::AmountTooSmall(input.amount));
    }
    input.paid_by.ok_or(ExpenseError::MissingPayer)
}

/// A balance payment as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBalancePayment {
    /// Paying member.
    pub from_user: UserId,
    /// Receiving member, `None` for a direct payment.
    pub to_user: Option<UserId>,
    /// Amount.
    pub amount: Decimal,
    /// Month being settled.
    pub for_month: MonthKey,
    /// Payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// Note.
    pub notes: Option<String>,
}

/// Checks a balance payment before it is stored.
///
/// # Errors
///
/// Returns `BalancePaymentError::NonPositiveAmount` for amounts `<= 0` and
/// `BalancePaymentError::SelfPayment` when a member pays themselves.
pub fn validate_balance_payment(input: &NewBalancePayment) -> Result<(), BalancePaymentError> {
    if input.amount <= Decimal::ZERO {
        return Err(BalancePaymentError::NonPositiveAmount(input.amount));
    }
    if input.to_user == Some(input.from_user) {
        return Err(BalancePaymentError::SelfPayment);
    }
    Ok(())
}
