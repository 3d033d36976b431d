//! Month-on-month spend by category.

use rust_decimal::Decimal;
use serde::Serialize;

use super::service::ReportService;
use crate::expected::ExpectedExpenseService;
use crate::period::MonthKey;
use crate::unit::UnitSnapshot;

const RECENT_MONTHS: usize = 6;

/// One month of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRow {
    /// Month.
    pub month: MonthKey,
    /// Axis label: `Mar`, or `Mar '25` outside the current year.
    pub label: String,
    /// Planned amount per category, when plotted from expected entries.
    pub expected: Option<[Decimal; 5]>,
    /// Actual spend per category.
    pub actual: [Decimal; 5],
}

impl ChartRow {
    /// Sum of actual spend.
    #[must_use]
    pub fn actual_total(&self) -> Decimal {
        self.actual.iter().copied().sum()
    }
}

/// Chart rows, oldest month first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOnMonthChart {
    /// Rows plotted.
    pub rows: Vec<ChartRow>,
    /// Rows follow the contract period and carry expected amounts.
    pub from_expected_entries: bool,
}

impl MonthOnMonthChart {
    /// Builds the chart relative to `current`.
    ///
    /// With a contract period and materialized entries, one row per contract
    /// month with planned and actual amounts. Otherwise the six months up to
    /// and including `current`, actuals only.
    #[must_use]
    pub fn build(snapshot: &UnitSnapshot, current: MonthKey) -> Self {
        let contract_months = snapshot.unit.contract_months();
        let current_year = current.year();
        let actual = |month: MonthKey| -> [Decimal; 5] {
            let mut amounts = [Decimal::ZERO; 5];
            for c in ReportService::category_breakdown(&snapshot.expenses, month) {
                amounts[c.category.index()] = c.amount;
            }
            amounts
        };

        if !contract_months.is_empty() && !snapshot.expected_entries.is_empty() {
            let rows = contract_months
                .into_iter()
                .map(|month| ChartRow {
                    month,
                    label: month.label(current_year),
                    expected: Some(ExpectedExpenseService::month_amounts(
                        &snapshot.expected_entries,
                        month,
                    )),
                    actual: actual(month),
                })
                .collect();
            return Self {
                rows,
                from_expected_entries: true,
            };
        }

        let mut months = Vec::with_capacity(RECENT_MONTHS);
        let mut month = current;
        for _ in 0..RECENT_MONTHS {
            months.push(month);
            month = month.prev();
        }
        months.reverse();

        Self {
            rows: months
                .into_iter()
                .map(|month| ChartRow {
                    month,
                    label: month.label(current_year),
                    expected: None,
                    actual: actual(month),
                })
                .collect(),
            from_expected_entries: false,
        }
    }
}
