//! Resolution of the monthly total that share members split.

use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::AllocationEngine;
use crate::expected::{ExpectedEntry, ExpectedExpenseService};
use crate::period::MonthKey;
use crate::unit::Unit;

/// What the expected-entry step of the chain needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedEntriesView {
    /// Unit has both contract dates.
    pub has_contract_period: bool,
    /// Unit has at least one materialized entry.
    pub unit_has_entries: bool,
    /// Sum of entries for the target month.
    pub month_total: Decimal,
}

impl ExpectedEntriesView {
    /// Builds the view for `month` from a unit and its entries.
    #[must_use]
    pub fn for_month(unit: &Unit, entries: &[ExpectedEntry], month: MonthKey) -> Self {
        Self {
            has_contract_period: unit.contract_period().is_some(),
            unit_has_entries: !entries.is_empty(),
            month_total: ExpectedExpenseService::month_total(entries, month),
        }
    }
}

/// Which step of the chain produced a total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalSource {
    /// Materialized expected entries for the month.
    ExpectedEntries,
    /// Members' contributions against the reference rent.
    Contributions,
    /// Expenses actually logged in the month.
    ActualExpenses,
}

/// A resolved monthly total and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedTotal {
    /// The total.
    pub amount: Decimal,
    /// Chain step that produced it.
    pub source: TotalSource,
}

impl AllocationEngine {
    /// Picks the monthly total share members split, first match wins:
    ///
    /// 1. the month's expected-entry sum, when the unit has a contract
    ///    period, has entries, and the sum is positive;
    /// 2. `expected_from_contributions`, when positive;
    /// 3. `actual_expenses`, whatever its value.
    #[must_use]
    pub fn resolve_monthly_total(
        expected_entries: ExpectedEntriesView,
        expected_from_contributions: Decimal,
        actual_expenses: Decimal,
    ) -> ResolvedTotal {
        if expected_entries.has_contract_period
            && expected_entries.unit_has_entries
            && expected_entries.month_total > Decimal::ZERO
        {
            return ResolvedTotal {
                amount: expected_entries.month_total,
                source: TotalSource::ExpectedEntries,
            };
        }
        if expected_from_contributions > Decimal::ZERO {
            return ResolvedTotal {
                amount: expected_from_contributions,
                source: TotalSource::Contributions,
            };
        }
        ResolvedTotal {
            amount: actual_expenses,
            source: TotalSource::ActualExpenses,
        }
    }
}
