//! Expense, category and payment data types.

use chrono::{DateTime, NaiveDate, Utc};
use coliving_shared::types::{BalancePaymentId, ExpenseId, UnitId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ExpenseError;
use crate::period::MonthKey;

/// Expense category. The set and its order are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    /// Rent.
    Rent,
    /// Utilities (stored as `pub`, shown as `PUB`).
    #[serde(rename = "pub")]
    Utilities,
    /// Cleaning.
    Cleaning,
    /// Groceries and household provisions.
    Provisions,
    /// Anything else.
    Other,
}

impl ExpenseCategory {
    /// Every category in display order.
    pub const ALL: [Self; 5] = [
        Self::Rent,
        Self::Utilities,
        Self::Cleaning,
        Self::Provisions,
        Self::Other,
    ];

    /// Position in [`ALL`](Self::ALL).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Rent => 0,
            Self::Utilities => 1,
            Self::Cleaning => 2,
            Self::Provisions => 3,
            Self::Other => 4,
        }
    }

    /// Stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rent => "rent",
            Self::Utilities => "pub",
            Self::Cleaning => "cleaning",
            Self::Provisions => "provisions",
            Self::Other => "other",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rent => "Rent",
            Self::Utilities => "PUB",
            Self::Cleaning => "Cleaning",
            Self::Provisions => "Provisions",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ExpenseError::UnknownCategory(s.to_string()))
    }
}

/// How money changed hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    /// Bank transfer.
    BankTransfer,
    /// `PayNow`.
    Paynow,
    /// Cash.
    Cash,
    /// Credit card.
    CreditCard,
    /// `GrabPay`.
    Grabpay,
    /// `PayLah!`.
    Paylah,
    /// Anything else.
    Other,
}

impl PaymentMode {
    /// Every mode in display order.
    pub const ALL: [Self; 7] = [
        Self::BankTransfer,
        Self::Paynow,
        Self::Cash,
        Self::CreditCard,
        Self::Grabpay,
        Self::Paylah,
        Self::Other,
    ];

    /// Stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::Paynow => "paynow",
            Self::Cash => "cash",
            Self::CreditCard => "credit_card",
            Self::Grabpay => "grabpay",
            Self::Paylah => "paylah",
            Self::Other => "other",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank transfer",
            Self::Paynow => "PayNow",
            Self::Cash => "Cash",
            Self::CreditCard => "Credit card",
            Self::Grabpay => "GrabPay",
            Self::Paylah => "PayLah!",
            Self::Other => "Other",
        }
    }
}

impl std::str::FromStr for PaymentMode {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| ExpenseError::UnknownPaymentMode(s.to_string()))
    }
}

/// A logged expense. Expenses are never edited, only deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Unit the expense belongs to.
    pub unit_id: UnitId,
    /// Category.
    pub category: ExpenseCategory,
    /// Amount in the unit's currency.
    pub amount: Decimal,
    /// Who paid.
    pub paid_by: UserId,
    /// Payer's profile name, when known.
    pub payer_name: Option<String>,
    /// Date the expense was incurred.
    pub date: NaiveDate,
    /// Free-form note.
    pub notes: Option<String>,
    /// How it was paid.
    pub payment_mode: Option<PaymentMode>,
    /// Uploaded receipt location.
    pub receipt_url: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Returns true if the expense is dated within `month`.
    #[must_use]
    pub fn is_in(&self, month: MonthKey) -> bool {
        month.contains(self.date)
    }
}

/// A payment a member made towards their balance for a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancePayment {
    /// Payment ID.
    pub id: BalancePaymentId,
    /// Unit the payment belongs to.
    pub unit_id: UnitId,
    /// Paying member.
    pub from_user: UserId,
    /// Receiving member, `None` when paid directly to the landlord or a
    /// supplier.
    pub to_user: Option<UserId>,
    /// Amount paid.
    pub amount: Decimal,
    /// Month the payment settles.
    pub for_month: MonthKey,
    /// How it was paid.
    pub payment_mode: Option<PaymentMode>,
    /// Free-form note.
    pub notes: Option<String>,
    /// When the payment was recorded.
    pub paid_at: DateTime<Utc>,
}
