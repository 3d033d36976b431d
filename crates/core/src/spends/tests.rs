//! Tests for multi-unit spends.

use coliving_shared::config::EndDatePolicy;
use coliving_shared::types::{Currency, UserId};
use rust_decimal_macros::dec;

use super::*;
use crate::balance::BalanceService;
use crate::expense::ExpenseCategory;
use crate::fixtures::{date, expense, member, month, payment, snapshot, unit};
use crate::member::{ContributionConfig, Member, MemberRole};
use crate::reports::ReportService;
use crate::unit::UnitSnapshot;

/// Two-person unit where `user` holds `contribution`.
fn unit_for(user: UserId, country: &str, contribution: ContributionConfig) -> UnitSnapshot {
    let mut u = unit(dec!(1000));
    u.country = Some(country.to_string());
    let me = Member {
        user_id: user,
        ..member(&u, "Me", MemberRole::CoTenant, contribution)
    };
    let other = member(&u, "Other", MemberRole::MasterTenant, ContributionConfig::share(dec!(50)));
    snapshot(u, vec![me, other])
}

fn march_spends(snap: &UnitSnapshot, user: UserId) -> Option<UnitSpends> {
    SpendsService::unit_spends(snap, user, month(2026, 3), EndDatePolicy::Ignore)
}

fn march_summary(snaps: &[UnitSnapshot], user: UserId) -> SpendsSummary {
    SpendsService::summarize(snaps, user, month(2026, 3), EndDatePolicy::Ignore, Currency::Sgd)
}

#[test]
fn test_unit_spends_all_time_and_this_month() {
    let user = UserId::new();
    let mut snap = unit_for(user, "SG", ContributionConfig::share(dec!(50)));
    let (me, other) = (snap.members[0].clone(), snap.members[1].clone());
    snap.expenses = vec![
        expense(&snap.unit, &other, ExpenseCategory::Rent, dec!(1000), date(2026, 2, 1)),
        expense(&snap.unit, &me, ExpenseCategory::Provisions, dec!(200), date(2026, 3, 3)),
        expense(&snap.unit, &other, ExpenseCategory::Rent, dec!(1000), date(2026, 3, 1)),
    ];
    snap.balance_payments = vec![payment(&snap.unit, &me, Some(&other), dec!(300), month(2026, 3))];

    let spends = march_spends(&snap, user).unwrap();
    assert_eq!(spends.total_expenses, dec!(2200));
    assert_eq!(spends.all_time, SpendFigures::new(dec!(500), dec!(1100)));
    assert_eq!(spends.all_time.balance, dec!(-600));
    assert_eq!(spends.this_month, SpendFigures::new(dec!(500), dec!(600)));
    assert_eq!(spends.currency, Currency::Sgd);
}

#[test]
fn test_fixed_member_expected_ignores_spend() {
    let user = UserId::new();
    let mut snap = unit_for(user, "SG", ContributionConfig::fixed_yearly(dec!(2400)));
    let other = snap.members[1].clone();
    snap.expenses = vec![expense(&snap.unit, &other, ExpenseCategory::Rent, dec!(5000), date(2026, 3, 1))];

    let spends = march_spends(&snap, user).unwrap();
    assert_eq!(spends.all_time.expected, dec!(200));
    assert_eq!(spends.this_month.expected, dec!(200));
}

#[test]
fn test_expired_member_expects_nothing_in_every_view() {
    let user = UserId::new();
    let mut snap = unit_for(user, "SG", ContributionConfig::fixed_monthly(dec!(400)));
    snap.members[0].contribution_end_date = Some(date(2026, 1, 31));
    let other = snap.members[1].clone();
    snap.expenses = vec![expense(&snap.unit, &other, ExpenseCategory::Rent, dec!(1000), date(2026, 3, 1))];
    let march = month(2026, 3);

    for (policy, expected) in [
        (EndDatePolicy::Ignore, dec!(400)),
        (EndDatePolicy::ExcludeExpired, dec!(0)),
    ] {
        let sheet = BalanceService::month_balances(&snap, march, policy);
        let spends = SpendsService::unit_spends(&snap, user, march, policy).unwrap();
        let report = ReportService::unit_month_report(&snap, march, policy);

        assert_eq!(sheet.for_user(user).unwrap().expected, expected, "{policy:?}");
        assert_eq!(spends.this_month.expected, expected, "{policy:?}");
        assert_eq!(report.tenants[0].expected, expected, "{policy:?}");
        assert_eq!(report.tenants[0].balance, -expected, "{policy:?}");
    }
}

#[test]
fn test_member_active_in_month_keeps_expectation() {
    let user = UserId::new();
    let mut snap = unit_for(user, "SG", ContributionConfig::fixed_monthly(dec!(400)));
    snap.members[0].contribution_end_date = Some(date(2026, 3, 15));

    let spends =
        SpendsService::unit_spends(&snap, user, month(2026, 3), EndDatePolicy::ExcludeExpired)
            .unwrap();
    assert_eq!(spends.this_month.expected, dec!(400));
}

#[test]
fn test_non_member_unit_is_skipped() {
    let user = UserId::new();
    let snap = unit_for(UserId::new(), "SG", ContributionConfig::share(dec!(50)));
    assert!(march_spends(&snap, user).is_none());

    let summary = march_summary(&[snap], user);
    assert!(summary.units.is_empty());
    assert_eq!(summary.currency, Currency::Sgd);
    assert!(!summary.mixed_currencies);
    assert_eq!(summary.all_time, SpendFigures::default());
}

#[test]
fn test_summary_without_units_uses_fallback_currency() {
    let user = UserId::new();
    let snap = unit_for(UserId::new(), "MY", ContributionConfig::share(dec!(50)));

    let summary = SpendsService::summarize(
        &[snap],
        user,
        month(2026, 3),
        EndDatePolicy::Ignore,
        Currency::Usd,
    );
    assert!(summary.units.is_empty());
    assert_eq!(summary.currency, Currency::Usd);
    assert!(!summary.mixed_currencies);
}

#[test]
fn test_summary_sums_units_in_first_currency() {
    let user = UserId::new();
    let mut my = unit_for(user, "MY", ContributionConfig::fixed_monthly(dec!(300)));
    let mut sg = unit_for(user, "SG", ContributionConfig::fixed_monthly(dec!(400)));
    let me_my = my.members[0].clone();
    let me_sg = sg.members[0].clone();
    my.expenses = vec![expense(&my.unit, &me_my, ExpenseCategory::Other, dec!(100), date(2026, 3, 2))];
    sg.expenses = vec![expense(&sg.unit, &me_sg, ExpenseCategory::Other, dec!(50), date(2026, 1, 2))];

    let summary = march_summary(&[my, sg], user);
    assert_eq!(summary.units.len(), 2);
    assert_eq!(summary.currency, Currency::Myr);
    assert!(summary.mixed_currencies);
    assert_eq!(summary.all_time, SpendFigures::new(dec!(150), dec!(700)));
    assert_eq!(summary.this_month, SpendFigures::new(dec!(100), dec!(700)));
}

#[test]
fn test_same_currency_is_not_mixed() {
    let user = UserId::new();
    let a = unit_for(user, "DE", ContributionConfig::share(dec!(50)));
    let b = unit_for(user, "FR", ContributionConfig::share(dec!(50)));
    let summary = march_summary(&[a, b], user);
    assert_eq!(summary.currency, Currency::Eur);
    assert!(!summary.mixed_currencies);
}
