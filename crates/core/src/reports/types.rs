//! Report data types.

use chrono::NaiveDate;
use coliving_shared::types::Currency;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::expense::{ExpenseCategory, PaymentMode};
use crate::member::MemberRole;
use crate::period::MonthKey;

/// Spend in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    /// Category.
    pub category: ExpenseCategory,
    /// Sum of expenses.
    pub amount: Decimal,
}

/// A member's line in the tenant contributions table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TenantRow {
    /// Member name.
    pub name: String,
    /// Role.
    pub role: MemberRole,
    /// Contribution label such as `60%` or `400 /mo`.
    pub contribution: String,
    /// Expected against the month's expense total.
    pub expected: Decimal,
    /// Expenses the member paid in the month.
    pub paid: Decimal,
    /// `paid - expected`.
    pub balance: Decimal,
}

/// A line in the expense details table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRow {
    /// Expense date.
    pub date: NaiveDate,
    /// Category.
    pub category: ExpenseCategory,
    /// Amount.
    pub amount: Decimal,
    /// Payer name, empty when unknown.
    pub paid_by: String,
    /// Payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// Notes, empty when none.
    pub notes: String,
}

/// Everything in a monthly unit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitMonthReport {
    /// Unit name.
    pub unit_name: String,
    /// Month covered.
    pub month: MonthKey,
    /// Display currency.
    pub currency: Currency,
    /// Spend per category, in category order.
    pub categories: Vec<CategoryAmount>,
    /// Sum of the month's expenses.
    pub total: Decimal,
    /// One row per member.
    pub tenants: Vec<TenantRow>,
    /// The month's expenses, oldest first.
    pub expenses: Vec<ExpenseRow>,
}

impl UnitMonthReport {
    /// Title line, e.g. `Unit Report — Joo Chiat 12 — Mar 2026`.
    #[must_use]
    pub fn title(&self) -> String {
        format!(
            "Unit Report \u{2014} {} \u{2014} {}",
            self.unit_name,
            self.month.long_label()
        )
    }
}
