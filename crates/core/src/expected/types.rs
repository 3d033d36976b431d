//! Expected expense data types.

use coliving_shared::types::{ExpectedEntryId, ExpectedExpenseId, UnitId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expense::ExpenseCategory;
use crate::period::MonthKey;

/// Planned amount for one category, applied to every contract month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedTemplate {
    /// Template row ID.
    pub id: ExpectedExpenseId,
    /// Owning unit.
    pub unit_id: UnitId,
    /// Category.
    pub category: ExpenseCategory,
    /// Planned monthly amount.
    pub amount: Decimal,
}

/// Materialized planned amount for a month and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedEntry {
    /// Entry ID.
    pub id: ExpectedEntryId,
    /// Owning unit.
    pub unit_id: UnitId,
    /// Month the amount is planned for.
    pub month: MonthKey,
    /// Category.
    pub category: ExpenseCategory,
    /// Planned amount.
    pub amount: Decimal,
}

impl ExpectedEntry {
    /// Upsert key of this entry.
    #[must_use]
    pub const fn key(&self) -> EntryKey {
        EntryKey {
            unit_id: self.unit_id,
            month: self.month,
            category: self.category,
        }
    }
}

/// Uniqueness key of an expected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryKey {
    /// Owning unit.
    pub unit_id: UnitId,
    /// Month.
    pub month: MonthKey,
    /// Category.
    pub category: ExpenseCategory,
}

/// An entry produced by generation, before it is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedEntry {
    /// Upsert key.
    pub key: EntryKey,
    /// Amount to store.
    pub amount: Decimal,
}

/// Write needed to bring the stored template in line with submitted amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateChange {
    /// Existing template row gets a new amount.
    Update {
        /// Row to update.
        id: ExpectedExpenseId,
        /// New amount.
        amount: Decimal,
    },
    /// Category has no template row yet.
    Insert {
        /// Category.
        category: ExpenseCategory,
        /// Amount.
        amount: Decimal,
    },
}
