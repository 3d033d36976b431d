//! Balance computation over a unit snapshot.

use coliving_shared::config::EndDatePolicy;
use coliving_shared::types::UserId;
use rust_decimal::Decimal;

use super::types::{
    BalanceStatus, MemberBalance, MonthBalanceSheet, MonthTrend, PaymentHistoryItem,
    PaymentRecipient, WalletSummary,
};
use crate::allocation::{AllocationEngine, ExpectedEntriesView};
use crate::expense::{BalancePayment, Expense};
use crate::member::Member;
use crate::period::MonthKey;
use crate::unit::UnitSnapshot;

/// Balance logic.
pub struct BalanceService;

impl BalanceService {
    /// Sum of expenses dated in `month`.
    #[must_use]
    pub fn month_expense_total(expenses: &[Expense], month: MonthKey) -> Decimal {
        expenses
            .iter()
            .filter(|e| e.is_in(month))
            .map(|e| e.amount)
            .sum()
    }

    /// Sum of balance payments made for `month`.
    #[must_use]
    pub fn month_payment_total(payments: &[BalancePayment], month: MonthKey) -> Decimal {
        payments
            .iter()
            .filter(|p| p.for_month == month)
            .map(|p| p.amount)
            .sum()
    }

    /// What `user_id` paid towards `month`: their expenses dated in the month
    /// plus their balance payments for it.
    #[must_use]
    pub fn paid_in_month(
        user_id: UserId,
        expenses: &[Expense],
        payments: &[BalancePayment],
        month: MonthKey,
    ) -> Decimal {
        let from_expenses: Decimal = expenses
            .iter()
            .filter(|e| e.paid_by == user_id && e.is_in(month))
            .map(|e| e.amount)
            .sum();
        let from_payments: Decimal = payments
            .iter()
            .filter(|p| p.from_user == user_id && p.for_month == month)
            .map(|p| p.amount)
            .sum();
        from_expenses + from_payments
    }

    /// Members that take part in the allocation for `month`.
    #[must_use]
    pub fn pool(members: &[Member], month: MonthKey, policy: EndDatePolicy) -> Vec<&Member> {
        members
            .iter()
            .filter(|m| match policy {
                EndDatePolicy::Ignore => true,
                EndDatePolicy::ExcludeExpired => !m.contribution_ended_before(month.first_day()),
            })
            .collect()
    }

    /// Expected amount for `member` when `pool` splits `total`. Members
    /// outside the pool are expected to pay nothing.
    #[must_use]
    pub fn pooled_expected(
        member: &Member,
        pool: &[&Member],
        total: Decimal,
        rent: Decimal,
    ) -> Decimal {
        if pool.iter().any(|p| p.id == member.id) {
            AllocationEngine::expected_amount(&member, pool, total, rent)
        } else {
            Decimal::ZERO
        }
    }

    /// Balance sheet for `month`.
    ///
    /// The total share members split is resolved through the fallback chain.
    /// Members outside the pool still get a row with nothing expected, so
    /// whatever they paid shows up as owed to them.
    #[must_use]
    pub fn month_balances(
        snapshot: &UnitSnapshot,
        month: MonthKey,
        policy: EndDatePolicy,
    ) -> MonthBalanceSheet {
        let rent = snapshot.unit.monthly_rent;
        let pool = Self::pool(&snapshot.members, month, policy);

        let actual = Self::month_expense_total(&snapshot.expenses, month);
        let view = ExpectedEntriesView::for_month(&snapshot.unit, &snapshot.expected_entries, month);
        let from_contributions = AllocationEngine::expected_from_contributions(&pool, rent);
        let total = AllocationEngine::resolve_monthly_total(view, from_contributions, actual);

        let members: Vec<MemberBalance> = snapshot
            .members
            .iter()
            .map(|member| {
                let in_pool = pool.iter().any(|p| p.id == member.id);
                let expected = Self::pooled_expected(member, &pool, total.amount, rent);
                let paid = Self::paid_in_month(
                    member.user_id,
                    &snapshot.expenses,
                    &snapshot.balance_payments,
                    month,
                );
                let balance = AllocationEngine::balance(paid, expected);
                MemberBalance {
                    member_id: member.id,
                    user_id: member.user_id,
                    name: member.name().to_string(),
                    role: member.role,
                    in_pool,
                    expected,
                    paid,
                    balance,
                    status: BalanceStatus::from_balance(balance),
                }
            })
            .collect();

        let master_expected: Decimal = snapshot
            .members
            .iter()
            .zip(&members)
            .filter(|(member, _)| member.is_master_tenant())
            .map(|(_, row)| row.expected)
            .sum();
        let amount_received =
            Self::month_payment_total(&snapshot.balance_payments, month) + master_expected;

        MonthBalanceSheet {
            month,
            total,
            members,
            wallet: WalletSummary {
                amount_received,
                month_expenses: actual,
                wallet_balance: amount_received - actual,
            },
        }
    }

    /// Percent change from `last` to `this`, rounded to 2 places. 0 when
    /// `last` is not positive.
    #[must_use]
    pub fn trend(this: Decimal, last: Decimal) -> Decimal {
        if last <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        ((this - last) / last * Decimal::ONE_HUNDRED).round_dp(2)
    }

    /// Spend in `month` compared with the month before.
    #[must_use]
    pub fn month_trend(expenses: &[Expense], month: MonthKey) -> MonthTrend {
        let this_month = Self::month_expense_total(expenses, month);
        let last_month = Self::month_expense_total(expenses, month.prev());
        MonthTrend {
            this_month,
            last_month,
            percent_change: Self::trend(this_month, last_month),
        }
    }

    /// Balance payments made by `user_id`, newest month first, then newest
    /// recording first.
    #[must_use]
    pub fn payment_history(
        payments: &[BalancePayment],
        members: &[Member],
        user_id: UserId,
    ) -> Vec<PaymentHistoryItem> {
        let mut mine: Vec<&BalancePayment> =
            payments.iter().filter(|p| p.from_user == user_id).collect();
        mine.sort_by(|a, b| {
            b.for_month
                .cmp(&a.for_month)
                .then_with(|| b.paid_at.cmp(&a.paid_at))
        });

        mine.into_iter()
            .map(|p| PaymentHistoryItem {
                id: p.id,
                amount: p.amount,
                for_month: p.for_month,
                recipient: Self::recipient(p.to_user, members),
                payment_mode: p.payment_mode,
                paid_at: p.paid_at,
            })
            .collect()
    }

    fn recipient(to_user: Option<UserId>, members: &[Member]) -> PaymentRecipient {
        let Some(to_user) = to_user else {
            return PaymentRecipient::Direct;
        };
        members
            .iter()
            .find(|m| m.user_id == to_user)
            .and_then(|m| m.display_name.clone())
            .filter(|name| !name.is_empty())
            .map_or(PaymentRecipient::MasterTenant, PaymentRecipient::Member)
    }
}
