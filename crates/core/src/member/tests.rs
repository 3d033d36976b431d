//! Tests for the member contribution model.

use chrono::{NaiveDate, TimeZone, Utc};
use coliving_shared::types::{Currency, MemberId, UnitId, UserId};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn raw(
    kind: Option<&str>,
    share: Option<Decimal>,
    fixed: Option<Decimal>,
    period: Option<&str>,
) -> RawContribution {
    RawContribution {
        contribution_type: kind.map(str::to_string),
        share_percentage: share,
        fixed_amount: fixed,
        contribution_period: period.map(str::to_string),
    }
}

fn member(name: Option<&str>, role: MemberRole, end: Option<NaiveDate>) -> Member {
    Member {
        id: MemberId::new(),
        unit_id: UnitId::new(),
        user_id: UserId::new(),
        display_name: name.map(str::to_string),
        role,
        contribution: ContributionConfig::share(dec!(50)),
        contribution_end_date: end,
        joined_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

#[rstest]
#[case(raw(None, Some(dec!(60)), None, None), ContributionConfig::share(dec!(60)))]
#[case(raw(Some(""), None, None, None), ContributionConfig::share(dec!(0)))]
#[case(raw(Some("share"), None, Some(dec!(400)), None), ContributionConfig::share(dec!(0)))]
#[case(raw(Some("fixed"), Some(dec!(60)), Some(dec!(400)), None), ContributionConfig::fixed_monthly(dec!(400)))]
#[case(raw(Some("fixed"), None, None, Some("yearly")), ContributionConfig::fixed_yearly(dec!(0)))]
#[case(raw(Some("fixed"), None, Some(dec!(1200)), Some("yearly")), ContributionConfig::fixed_yearly(dec!(1200)))]
#[case(raw(Some("fixed"), None, Some(dec!(10)), Some("weekly")), ContributionConfig::fixed_monthly(dec!(10)))]
fn test_normalize_fills_defaults(#[case] input: RawContribution, #[case] expected: ContributionConfig) {
    assert_eq!(input.normalize(), expected);
}

#[test]
fn test_parse_rejects_unknown_tags() {
    assert_eq!(
        raw(Some("percent"), None, None, None).parse(),
        Err(MemberError::UnknownContributionType("percent".into()))
    );
    assert_eq!(
        raw(Some("fixed"), None, Some(dec!(1)), Some("weekly")).parse(),
        Err(MemberError::UnknownContributionPeriod("weekly".into()))
    );
}

#[test]
fn test_raw_round_trip_clears_inactive_group() {
    let config = ContributionConfig::fixed_yearly(dec!(1200));
    let stored = RawContribution::from_config(&config);
    assert_eq!(stored.share_percentage, None);
    assert_eq!(stored.contribution_period.as_deref(), Some("yearly"));
    assert_eq!(stored.normalize(), config);
}

#[rstest]
#[case(ContributionConfig::share(dec!(60)), dec!(1000), dec!(600))]
#[case(ContributionConfig::share(dec!(0)), dec!(1000), dec!(0))]
#[case(ContributionConfig::fixed_monthly(dec!(400)), dec!(1000), dec!(400))]
#[case(ContributionConfig::fixed_yearly(dec!(1200)), dec!(1000), dec!(100))]
#[case(ContributionConfig::fixed_monthly(dec!(-50)), dec!(1000), dec!(-50))]
fn test_monthly_implied_amount(
    #[case] config: ContributionConfig,
    #[case] rent: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(config.monthly_implied_amount(rent), expected);
}

#[test]
fn test_labels() {
    let end = NaiveDate::from_ymd_opt(2026, 6, 30);
    let share = ContributionConfig::share(dec!(60));
    let fixed = ContributionConfig::fixed_monthly(dec!(400));
    let yearly = ContributionConfig::fixed_yearly(dec!(1200.50));

    assert_eq!(share.label(Currency::Sgd, None, false), "60%");
    assert_eq!(fixed.label(Currency::Usd, None, false), "$400.00/mo");
    assert_eq!(
        fixed.label(Currency::Usd, end, false),
        "$400.00/mo until 30 Jun 2026"
    );
    assert_eq!(fixed.label(Currency::Usd, end, true), "$400.00/mo");
    assert_eq!(yearly.label(Currency::Sgd, None, true), "SGD 1,200.50/yr");

    assert_eq!(share.report_label(), "60%");
    assert_eq!(fixed.report_label(), "400 /mo");
    assert_eq!(ContributionConfig::fixed_monthly(dec!(400.00)).report_label(), "400 /mo");
    assert_eq!(yearly.report_label(), "1200.5 /yr");
}

#[rstest]
#[case("master_tenant", MemberRole::MasterTenant)]
#[case("owner", MemberRole::MasterTenant)]
#[case("co_tenant", MemberRole::CoTenant)]
#[case("renter", MemberRole::CoTenant)]
#[case("", MemberRole::CoTenant)]
fn test_role_mapping(#[case] stored: &str, #[case] expected: MemberRole) {
    assert_eq!(MemberRole::from_str_lossy(stored), expected);
}

#[test]
fn test_member_name_and_end_date() {
    let end = NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    let m = member(None, MemberRole::MasterTenant, Some(end));
    assert_eq!(m.name(), "Unknown");
    assert!(m.is_master_tenant());
    assert!(m.contribution_ended_before(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap()));
    assert!(!m.contribution_ended_before(end));

    let named = member(Some("Ana"), MemberRole::CoTenant, None);
    assert_eq!(named.name(), "Ana");
    assert!(!named.contribution_ended_before(end));
}

#[rstest]
#[case(dec!(0))]
#[case(dec!(100))]
#[case(dec!(33.33))]
fn test_validate_share_in_range(#[case] pct: Decimal) {
    let update = MemberUpdate {
        contribution: raw(Some("share"), Some(pct), None, None),
        contribution_end_date: NaiveDate::from_ymd_opt(2026, 1, 1),
    };
    let (config, end) = validate_member_update(&update).unwrap();
    assert_eq!(config, ContributionConfig::share(pct));
    assert_eq!(end, None, "end date is dropped for share contributions");
}

#[rstest]
#[case(dec!(-0.01))]
#[case(dec!(100.01))]
fn test_validate_share_out_of_range(#[case] pct: Decimal) {
    let update = MemberUpdate {
        contribution: raw(Some("share"), Some(pct), None, None),
        contribution_end_date: None,
    };
    assert_eq!(
        validate_member_update(&update),
        Err(MemberError::InvalidSharePercentage(pct))
    );
}

#[test]
fn test_validate_fixed_keeps_end_date() {
    let end = NaiveDate::from_ymd_opt(2026, 12, 31);
    let update = MemberUpdate {
        contribution: raw(Some("fixed"), None, Some(dec!(400)), Some("monthly")),
        contribution_end_date: end,
    };
    let (config, kept) = validate_member_update(&update).unwrap();
    assert_eq!(config, ContributionConfig::fixed_monthly(dec!(400)));
    assert_eq!(kept, end);
}

#[test]
fn test_validate_fixed_negative() {
    let update = MemberUpdate {
        contribution: raw(Some("fixed"), None, Some(dec!(-1)), None),
        contribution_end_date: None,
    };
    assert_eq!(
        validate_member_update(&update),
        Err(MemberError::NegativeFixedAmount(dec!(-1)))
    );
}

proptest! {
    /// A yearly contribution is worth one twelfth of the same monthly amount.
    #[test]
    fn prop_yearly_is_twelfth_of_monthly(amount in 0i64..10_000_000) {
        let amount = Decimal::from(amount);
        let yearly = ContributionConfig::fixed_yearly(amount * dec!(12));
        let monthly = ContributionConfig::fixed_monthly(amount);
        prop_assert_eq!(
            yearly.monthly_implied_amount(dec!(1000)),
            monthly.monthly_implied_amount(dec!(1000))
        );
    }

    /// Fixed contributions do not depend on the reference rent.
    #[test]
    fn prop_fixed_ignores_rent(amount in 0i64..1_000_000, rent in 0i64..1_000_000) {
        let config = ContributionConfig::fixed_monthly(Decimal::from(amount));
        prop_assert_eq!(config.monthly_implied_amount(Decimal::from(rent)), Decimal::from(amount));
    }
}
