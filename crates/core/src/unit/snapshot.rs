//! Immutable view of everything stored for one unit.

use serde::{Deserialize, Serialize};

use super::types::Unit;
use crate::expected::{ExpectedEntry, ExpectedTemplate};
use crate::expense::{BalancePayment, Expense};
use crate::member::Member;

/// A unit together with its members, expenses, balance payments and
/// expected expenses, as fetched from the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitSnapshot {
    /// The unit.
    pub unit: Unit,
    /// Members in join order.
    pub members: Vec<Member>,
    /// All expenses of the unit.
    pub expenses: Vec<Expense>,
    /// All balance payments of the unit.
    pub balance_payments: Vec<BalancePayment>,
    /// Per-category templates.
    pub templates: Vec<ExpectedTemplate>,
    /// Materialized monthly entries.
    pub expected_entries: Vec<ExpectedEntry>,
}

impl UnitSnapshot {
    /// Snapshot of a unit with nothing recorded yet.
    #[must_use]
    pub const fn empty(unit: Unit) -> Self {
        Self {
            unit,
            members: Vec::new(),
            expenses: Vec::new(),
            balance_payments: Vec::new(),
            templates: Vec::new(),
            expected_entries: Vec::new(),
        }
    }
}
