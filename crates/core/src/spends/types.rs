//! Spends data types.

use coliving_shared::types::{Currency, UnitId};
use rust_decimal::Decimal;
use serde::Serialize;

/// Paid, expected and balance for one window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SpendFigures {
    /// What the user paid.
    pub paid: Decimal,
    /// What the user was expected to pay.
    pub expected: Decimal,
    /// `paid - expected`.
    pub balance: Decimal,
}

impl SpendFigures {
    /// Figures with the balance derived.
    #[must_use]
    pub fn new(paid: Decimal, expected: Decimal) -> Self {
        Self {
            paid,
            expected,
            balance: paid - expected,
        }
    }
}

impl std::ops::Add for SpendFigures {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            paid: self.paid + rhs.paid,
            expected: self.expected + rhs.expected,
            balance: self.balance + rhs.balance,
        }
    }
}

impl std::iter::Sum for SpendFigures {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, f| acc + f)
    }
}

/// A user's figures for one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitSpends {
    /// Unit ID.
    pub unit_id: UnitId,
    /// Unit name.
    pub unit_name: String,
    /// Unit currency.
    pub currency: Currency,
    /// Every expense ever logged in the unit.
    pub total_expenses: Decimal,
    /// Over the unit's whole history.
    pub all_time: SpendFigures,
    /// Restricted to the current month.
    pub this_month: SpendFigures,
}

/// A user's figures across all their units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpendsSummary {
    /// Per unit, in membership order.
    pub units: Vec<UnitSpends>,
    /// Sum of all-time figures.
    pub all_time: SpendFigures,
    /// Sum of this month's figures.
    pub this_month: SpendFigures,
    /// Currency used to label the sums: the first unit's, or the caller's
    /// fallback when there are none.
    pub currency: Currency,
    /// More than one currency was summed without conversion.
    pub mixed_currencies: bool,
}
