//! Tests for expected expense generation.

use chrono::{NaiveDate, Utc};
use coliving_shared::types::{ExpectedExpenseId, UnitId};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::expense::ExpenseCategory;
use crate::period::MonthKey;
use crate::unit::Unit;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn unit(start: Option<NaiveDate>, end: Option<NaiveDate>, rent: Decimal) -> Unit {
    Unit {
        id: UnitId::new(),
        name: "Unit".into(),
        address: None,
        country: Some("SG".into()),
        monthly_rent: rent,
        contract_start: start,
        contract_end: end,
        payment_due_day: None,
        created_by: None,
        created_at: Utc::now(),
    }
}

fn template(unit_id: UnitId, category: ExpenseCategory, amount: Decimal) -> ExpectedTemplate {
    ExpectedTemplate {
        id: ExpectedExpenseId::new(),
        unit_id,
        category,
        amount,
    }
}

#[test]
fn test_generation_requires_contract_period() {
    let u = unit(Some(date(2026, 1, 1)), None, dec!(1000));
    assert_eq!(
        ExpectedExpenseService::plan(&u, &[]),
        Err(ExpectedExpenseError::MissingContractPeriod)
    );
    assert_eq!(
        ExpectedExpenseError::MissingContractPeriod.to_string(),
        "Contract start and expiry dates are required"
    );
}

#[test]
fn test_generation_covers_every_touched_month() {
    let u = unit(Some(date(2026, 1, 15)), Some(date(2026, 3, 3)), dec!(1000));
    let plan = ExpectedExpenseService::plan(&u, &[]).unwrap();

    assert_eq!(plan.len(), 15);
    let months: Vec<MonthKey> = plan.iter().map(|p| p.key.month).collect();
    assert_eq!(months[0], MonthKey::new(2026, 1).unwrap());
    assert_eq!(months[14], MonthKey::new(2026, 3).unwrap());
    assert!(plan.iter().all(|p| p.key.unit_id == u.id));
}

#[test]
fn test_generation_uses_template_and_rent_fallback() {
    let u = unit(Some(date(2026, 1, 1)), Some(date(2026, 1, 31)), dec!(2400));
    let templates = [
        template(u.id, ExpenseCategory::Utilities, dec!(120)),
        template(u.id, ExpenseCategory::Cleaning, dec!(80)),
    ];
    let plan = ExpectedExpenseService::plan(&u, &templates).unwrap();
    let amounts: Vec<(ExpenseCategory, Decimal)> =
        plan.iter().map(|p| (p.key.category, p.amount)).collect();

    assert_eq!(
        amounts,
        vec![
            (ExpenseCategory::Rent, dec!(2400)),
            (ExpenseCategory::Utilities, dec!(120)),
            (ExpenseCategory::Cleaning, dec!(80)),
            (ExpenseCategory::Provisions, dec!(0)),
            (ExpenseCategory::Other, dec!(0)),
        ]
    );
}

#[test]
fn test_rent_template_wins_unless_zero() {
    let unit_id = UnitId::new();
    let set = [template(unit_id, ExpenseCategory::Rent, dec!(1800))];
    let zero = [template(unit_id, ExpenseCategory::Rent, dec!(0))];

    assert_eq!(
        ExpectedExpenseService::template_amount(&set, ExpenseCategory::Rent, dec!(2000)),
        dec!(1800)
    );
    assert_eq!(
        ExpectedExpenseService::template_amount(&zero, ExpenseCategory::Rent, dec!(2000)),
        dec!(2000)
    );
    assert_eq!(
        ExpectedExpenseService::template_amount(&[], ExpenseCategory::Other, dec!(2000)),
        dec!(0)
    );
}

#[test]
fn test_regeneration_does_not_duplicate() {
    let u = unit(Some(date(2025, 11, 20)), Some(date(2026, 4, 2)), dec!(1000));
    let plan = ExpectedExpenseService::plan(&u, &[]).unwrap();

    let mut book = ExpectedEntryBook::new();
    let first = book.upsert(&plan);
    assert_eq!(first, UpsertOutcome { inserted: 30, updated: 0 });
    let count = book.len();

    let second = book.upsert(&plan);
    assert_eq!(second, UpsertOutcome { inserted: 0, updated: 30 });
    assert_eq!(book.len(), count);
}

#[test]
fn test_regeneration_overwrites_amounts_and_keeps_ids() {
    let u = unit(Some(date(2026, 1, 1)), Some(date(2026, 2, 28)), dec!(1000));
    let mut book = ExpectedEntryBook::new();
    book.upsert(&ExpectedExpenseService::plan(&u, &[]).unwrap());
    let ids: Vec<_> = book.iter().map(|e| e.id).collect();

    let templates = [template(u.id, ExpenseCategory::Rent, dec!(1500))];
    book.upsert(&ExpectedExpenseService::plan(&u, &templates).unwrap());

    assert_eq!(book.iter().map(|e| e.id).collect::<Vec<_>>(), ids);
    let entries = book.into_entries();
    let jan = MonthKey::new(2026, 1).unwrap();
    assert_eq!(ExpectedExpenseService::month_total(&entries, jan), dec!(1500));
}

#[test]
fn test_extending_contract_fills_gaps() {
    let mut u = unit(Some(date(2026, 1, 1)), Some(date(2026, 2, 1)), dec!(1000));
    let mut book = ExpectedEntryBook::new();
    book.upsert(&ExpectedExpenseService::plan(&u, &[]).unwrap());
    assert_eq!(book.len(), 10);

    u.contract_end = Some(date(2026, 4, 30));
    let outcome = book.upsert(&ExpectedExpenseService::plan(&u, &[]).unwrap());
    assert_eq!(outcome, UpsertOutcome { inserted: 10, updated: 10 });
    assert_eq!(book.len(), 20);
}

#[test]
fn test_edit_and_delete_month() {
    let u = unit(Some(date(2026, 1, 1)), Some(date(2026, 3, 31)), dec!(1000));
    let mut book = ExpectedEntryBook::new();
    book.upsert(&ExpectedExpenseService::plan(&u, &[]).unwrap());

    let feb = MonthKey::new(2026, 2).unwrap();
    let target = book
        .iter()
        .find(|e| e.month == feb && e.category == ExpenseCategory::Utilities)
        .map(|e| e.id)
        .unwrap();
    assert!(book.set_amount(target, dec!(95.40)));
    assert!(!book.set_amount(coliving_shared::types::ExpectedEntryId::new(), dec!(1)));

    let entries: Vec<ExpectedEntry> = book.iter().cloned().collect();
    assert_eq!(
        ExpectedExpenseService::month_amounts(&entries, feb),
        [dec!(1000), dec!(95.40), dec!(0), dec!(0), dec!(0)]
    );

    assert_eq!(book.delete_month(u.id, feb), 5);
    assert_eq!(book.delete_month(u.id, feb), 0);
    assert_eq!(book.delete_month(UnitId::new(), MonthKey::new(2026, 1).unwrap()), 0);
    assert_eq!(book.len(), 10);
}

#[test]
fn test_template_changes_update_or_insert() {
    let unit_id = UnitId::new();
    let rent = template(unit_id, ExpenseCategory::Rent, dec!(1000));
    let changes = ExpectedExpenseService::template_changes(
        std::slice::from_ref(&rent),
        &[
            (ExpenseCategory::Rent, dec!(1100)),
            (ExpenseCategory::Utilities, dec!(90)),
        ],
    )
    .unwrap();

    assert_eq!(
        changes,
        vec![
            TemplateChange::Update {
                id: rent.id,
                amount: dec!(1100)
            },
            TemplateChange::Insert {
                category: ExpenseCategory::Utilities,
                amount: dec!(90)
            },
        ]
    );
}

#[test]
fn test_template_changes_reject_negative() {
    let result = ExpectedExpenseService::template_changes(
        &[],
        &[
            (ExpenseCategory::Rent, dec!(1000)),
            (ExpenseCategory::Other, dec!(-5)),
        ],
    );
    assert_eq!(
        result,
        Err(ExpectedExpenseError::NegativeAmount {
            category: ExpenseCategory::Other,
            amount: dec!(-5)
        })
    );
}

proptest! {
    /// Generating twice over the same contract leaves the entry count unchanged
    /// and equal to five entries per touched month.
    #[test]
    fn prop_generation_is_idempotent(
        start_offset in 0u64..1_500,
        length in 0u64..900,
        rent in 0i64..20_000,
    ) {
        let start = date(2024, 1, 1) + chrono::Days::new(start_offset);
        let end = start + chrono::Days::new(length);
        let u = unit(Some(start), Some(end), Decimal::from(rent));
        let plan = ExpectedExpenseService::plan(&u, &[]).unwrap();

        let mut book = ExpectedEntryBook::new();
        book.upsert(&plan);
        let before = book.len();
        book.upsert(&plan);

        prop_assert_eq!(book.len(), before);
        prop_assert_eq!(before, crate::period::months_in_range(start, end).len() * 5);
    }
}
