//! Tests for monthly balances and dashboard figures.

use chrono::{TimeZone, Utc};
use coliving_shared::config::EndDatePolicy;
use rust_decimal_macros::dec;

use super::*;
use crate::allocation::TotalSource;
use crate::expense::ExpenseCategory;
use crate::fixtures::{date, entry, expense, member, month, payment, snapshot, unit};
use crate::member::{ContributionConfig, MemberRole};
use crate::unit::UnitSnapshot;

/// Master tenant A on 60% of rent, co-tenant B on a fixed 200/month.
/// A paid March rent of 1000, B sent A 150 for March.
fn march_snapshot() -> UnitSnapshot {
    let u = unit(dec!(1000));
    let a = member(&u, "Aisha", MemberRole::MasterTenant, ContributionConfig::share(dec!(60)));
    let b = member(&u, "Ben", MemberRole::CoTenant, ContributionConfig::fixed_monthly(dec!(200)));
    let mut snap = snapshot(u, vec![a, b]);
    let (a, b) = (&snap.members[0], &snap.members[1]);
    snap.expenses = vec![
        expense(&snap.unit, a, ExpenseCategory::Rent, dec!(1000), date(2026, 3, 1)),
        expense(&snap.unit, b, ExpenseCategory::Provisions, dec!(40), date(2026, 2, 27)),
    ];
    snap.balance_payments = vec![
        payment(&snap.unit, b, Some(a), dec!(150), month(2026, 3)),
        payment(&snap.unit, b, Some(a), dec!(70), month(2026, 2)),
    ];
    snap
}

#[test]
fn test_balances_against_contribution_total() {
    let snap = march_snapshot();
    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);

    assert_eq!(sheet.total.amount, dec!(800));
    assert_eq!(sheet.total.source, TotalSource::Contributions);

    let a = &sheet.members[0];
    assert_eq!(a.expected, dec!(480));
    assert_eq!(a.paid, dec!(1000));
    assert_eq!(a.balance, dec!(520));
    assert_eq!(a.status, BalanceStatus::Owed);
    assert_eq!(a.suggested_payment(), dec!(0));

    let b = &sheet.members[1];
    assert_eq!(b.expected, dec!(200));
    assert_eq!(b.paid, dec!(150));
    assert_eq!(b.balance, dec!(-50));
    assert_eq!(b.status, BalanceStatus::Owes);
    assert_eq!(b.suggested_payment(), dec!(50));
    assert_eq!(sheet.for_user(b.user_id), Some(b));
}

#[test]
fn test_wallet() {
    let snap = march_snapshot();
    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);
    assert_eq!(
        sheet.wallet,
        WalletSummary {
            amount_received: dec!(630),
            month_expenses: dec!(1000),
            wallet_balance: dec!(-370),
        }
    );
}

#[test]
fn test_balances_use_expected_entries_with_contract() {
    let mut snap = march_snapshot();
    snap.unit.contract_start = Some(date(2026, 1, 1));
    snap.unit.contract_end = Some(date(2026, 12, 31));
    snap.expected_entries = vec![
        entry(&snap.unit, month(2026, 3), ExpenseCategory::Rent, dec!(1200)),
        entry(&snap.unit, month(2026, 3), ExpenseCategory::Utilities, dec!(100)),
        entry(&snap.unit, month(2026, 4), ExpenseCategory::Rent, dec!(5000)),
    ];

    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);
    assert_eq!(sheet.total.amount, dec!(1300));
    assert_eq!(sheet.total.source, TotalSource::ExpectedEntries);
    assert_eq!(sheet.members[0].expected, dec!(780));
    assert_eq!(sheet.members[1].expected, dec!(200));
}

#[test]
fn test_entries_for_other_months_fall_through() {
    let mut snap = march_snapshot();
    snap.unit.contract_start = Some(date(2026, 1, 1));
    snap.unit.contract_end = Some(date(2026, 12, 31));
    snap.expected_entries = vec![entry(&snap.unit, month(2026, 2), ExpenseCategory::Rent, dec!(1200))];

    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);
    assert_eq!(sheet.total.source, TotalSource::Contributions);
}

#[test]
fn test_zero_contributions_fall_back_to_actual_spend() {
    let mut snap = march_snapshot();
    snap.members[0].contribution = ContributionConfig::share(dec!(50));
    snap.members[1].contribution = ContributionConfig::share(dec!(50));
    snap.unit.monthly_rent = dec!(0);

    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);
    assert_eq!(sheet.total.amount, dec!(1000));
    assert_eq!(sheet.total.source, TotalSource::ActualExpenses);
    assert_eq!(sheet.members[0].expected, dec!(500));
    assert_eq!(sheet.members[1].balance, dec!(-350));
}

#[test]
fn test_end_date_ignored_by_default() {
    let mut snap = march_snapshot();
    snap.members[1].contribution_end_date = Some(date(2026, 2, 28));

    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::Ignore);
    assert!(sheet.members[1].in_pool);
    assert_eq!(sheet.members[1].expected, dec!(200));
}

#[test]
fn test_expired_members_leave_the_pool() {
    let mut snap = march_snapshot();
    snap.members[1].contribution_end_date = Some(date(2026, 2, 28));

    let sheet = BalanceService::month_balances(&snap, month(2026, 3), EndDatePolicy::ExcludeExpired);
    assert_eq!(sheet.total.amount, dec!(600));
    assert_eq!(sheet.members[0].expected, dec!(360));

    let b = &sheet.members[1];
    assert!(!b.in_pool);
    assert_eq!(b.expected, dec!(0));
    assert_eq!(b.balance, dec!(150));
    assert_eq!(b.status, BalanceStatus::Owed);

    // Still active in February.
    let feb = BalanceService::month_balances(&snap, month(2026, 2), EndDatePolicy::ExcludeExpired);
    assert!(feb.members[1].in_pool);
}

#[test]
fn test_fixed_member_overpaid_is_owed() {
    let u = unit(dec!(1000));
    let m = member(&u, "Chen", MemberRole::CoTenant, ContributionConfig::fixed_monthly(dec!(250)));
    let mut snap = snapshot(u, vec![m]);
    snap.expenses = vec![expense(&snap.unit, &snap.members[0], ExpenseCategory::Cleaning, dec!(300), date(2026, 5, 9))];

    let sheet = BalanceService::month_balances(&snap, month(2026, 5), EndDatePolicy::Ignore);
    assert_eq!(sheet.members[0].balance, dec!(50));

    snap.expenses[0].amount = dec!(100);
    let sheet = BalanceService::month_balances(&snap, month(2026, 5), EndDatePolicy::Ignore);
    assert_eq!(sheet.members[0].balance, dec!(-150));
}

#[test]
fn test_paid_in_month_counts_expenses_and_payments() {
    let snap = march_snapshot();
    let b = snap.members[1].user_id;
    assert_eq!(
        BalanceService::paid_in_month(b, &snap.expenses, &snap.balance_payments, month(2026, 2)),
        dec!(110)
    );
    assert_eq!(
        BalanceService::month_payment_total(&snap.balance_payments, month(2026, 3)),
        dec!(150)
    );
}

#[test]
fn test_trend() {
    assert_eq!(BalanceService::trend(dec!(1200), dec!(1000)), dec!(20));
    assert_eq!(BalanceService::trend(dec!(500), dec!(1000)), dec!(-50));
    assert_eq!(BalanceService::trend(dec!(500), dec!(0)), dec!(0));
    assert_eq!(BalanceService::trend(dec!(100), dec!(300)), dec!(-66.67));

    let snap = march_snapshot();
    let trend = BalanceService::month_trend(&snap.expenses, month(2026, 3));
    assert_eq!(trend.this_month, dec!(1000));
    assert_eq!(trend.last_month, dec!(40));
    assert_eq!(trend.percent_change, dec!(2400));
}

#[test]
fn test_payment_history_order_and_recipients() {
    let mut snap = march_snapshot();
    let (a, b) = (snap.members[0].clone(), snap.members[1].clone());
    let mut direct = payment(&snap.unit, &b, None, dec!(10), month(2026, 3));
    direct.paid_at = Utc.with_ymd_and_hms(2026, 3, 20, 0, 0, 0).unwrap();
    snap.balance_payments.push(direct);
    snap.balance_payments.push(payment(&snap.unit, &a, None, dec!(5), month(2026, 3)));

    let history = BalanceService::payment_history(&snap.balance_payments, &snap.members, b.user_id);
    let summary: Vec<_> = history
        .iter()
        .map(|h| (h.for_month, h.amount, h.recipient.label().to_string()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (month(2026, 3), dec!(10), "Direct".to_string()),
            (month(2026, 3), dec!(150), "Aisha".to_string()),
            (month(2026, 2), dec!(70), "Aisha".to_string()),
        ]
    );

    snap.members[0].display_name = None;
    let history = BalanceService::payment_history(&snap.balance_payments, &snap.members, b.user_id);
    assert_eq!(history[1].recipient, PaymentRecipient::MasterTenant);
}
