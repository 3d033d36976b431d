//! Spends aggregation.

use coliving_shared::config::EndDatePolicy;
use coliving_shared::types::{Currency, UserId};
use rust_decimal::Decimal;

use super::types::{SpendFigures, SpendsSummary, UnitSpends};
use crate::allocation::AllocationEngine;
use crate::balance::BalanceService;
use crate::period::MonthKey;
use crate::unit::UnitSnapshot;

/// Spends logic.
pub struct SpendsService;

impl SpendsService {
    /// The user's figures for one unit, or `None` if they are not a member.
    ///
    /// The expected amount is measured against the unit's actual spend in
    /// each window. Paid counts the user's expenses and balance payments.
    /// `policy` selects the members that split `this_month`; the all-time
    /// window spans every month and splits over the full member list.
    #[must_use]
    pub fn unit_spends(
        snapshot: &UnitSnapshot,
        user_id: UserId,
        this_month: MonthKey,
        policy: EndDatePolicy,
    ) -> Option<UnitSpends> {
        let member = snapshot.members.iter().find(|m| m.user_id == user_id)?;
        let rent = snapshot.unit.monthly_rent;
        let members = snapshot.members.as_slice();

        let total_expenses: Decimal = snapshot.expenses.iter().map(|e| e.amount).sum();
        let paid_all_time: Decimal = snapshot
            .expenses
            .iter()
            .filter(|e| e.paid_by == user_id)
            .map(|e| e.amount)
            .chain(
                snapshot
                    .balance_payments
                    .iter()
                    .filter(|p| p.from_user == user_id)
                    .map(|p| p.amount),
            )
            .sum();
        let expected_all_time =
            AllocationEngine::expected_amount(member, members, total_expenses, rent);

        let pool = BalanceService::pool(members, this_month, policy);
        let month_total = BalanceService::month_expense_total(&snapshot.expenses, this_month);
        let paid_this_month = BalanceService::paid_in_month(
            user_id,
            &snapshot.expenses,
            &snapshot.balance_payments,
            this_month,
        );
        let expected_this_month =
            BalanceService::pooled_expected(member, &pool, month_total, rent);

        Some(UnitSpends {
            unit_id: snapshot.unit.id,
            unit_name: snapshot.unit.name.clone(),
            currency: snapshot.unit.currency(),
            total_expenses,
            all_time: SpendFigures::new(paid_all_time, expected_all_time),
            this_month: SpendFigures::new(paid_this_month, expected_this_month),
        })
    }

    /// Sums the user's figures over `snapshots`, skipping units they are not
    /// a member of.
    ///
    /// Totals are in the first unit's currency, or `fallback_currency` when
    /// the user belongs to none.
    #[must_use]
    pub fn summarize(
        snapshots: &[UnitSnapshot],
        user_id: UserId,
        this_month: MonthKey,
        policy: EndDatePolicy,
        fallback_currency: Currency,
    ) -> SpendsSummary {
        let units: Vec<UnitSpends> = snapshots
            .iter()
            .filter_map(|s| Self::unit_spends(s, user_id, this_month, policy))
            .collect();

        let currency = units.first().map_or(fallback_currency, |u| u.currency);
        let mixed_currencies = units.iter().any(|u| u.currency != currency);

        SpendsSummary {
            all_time: units.iter().map(|u| u.all_time).sum(),
            this_month: units.iter().map(|u| u.this_month).sum(),
            units,
            currency,
            mixed_currencies,
        }
    }
}
