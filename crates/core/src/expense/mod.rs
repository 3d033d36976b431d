//! Expenses and balance payments.

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{BalancePaymentError, ExpenseError};
pub use types::{BalancePayment, Expense, ExpenseCategory, PaymentMode};
pub use validation::{
    NewBalancePayment, NewExpense, validate_balance_payment, validate_expense,
};
