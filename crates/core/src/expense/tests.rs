//! Tests for expenses and balance payments.

use chrono::{NaiveDate, Utc};
use coliving_shared::types::{ExpenseId, UnitId, UserId};
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::period::MonthKey;

fn new_expense(amount: Decimal, paid_by: Option<UserId>) -> NewExpense {
    NewExpense {
        category: ExpenseCategory::Provisions,
        amount,
        paid_by,
        date: NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
        notes: None,
        payment_mode: Some(PaymentMode::Paynow),
        receipt_url: None,
    }
}

#[rstest]
#[case("rent", ExpenseCategory::Rent)]
#[case("pub", ExpenseCategory::Utilities)]
#[case("cleaning", ExpenseCategory::Cleaning)]
#[case("provisions", ExpenseCategory::Provisions)]
#[case("other", ExpenseCategory::Other)]
fn test_category_tags(#[case] tag: &str, #[case] category: ExpenseCategory) {
    assert_eq!(tag.parse::<ExpenseCategory>().unwrap(), category);
    assert_eq!(category.as_str(), tag);
    assert_eq!(ExpenseCategory::ALL[category.index()], category);
}

#[test]
fn test_category_serde_uses_stored_tag() {
    let json = serde_json::to_string(&ExpenseCategory::Utilities).unwrap();
    assert_eq!(json, "\"pub\"");
    assert_eq!(ExpenseCategory::Utilities.label(), "PUB");
    assert!("utilities".parse::<ExpenseCategory>().is_err());
}

#[rstest]
#[case("bank_transfer", "Bank transfer")]
#[case("paynow", "PayNow")]
#[case("cash", "Cash")]
#[case("credit_card", "Credit card")]
#[case("grabpay", "GrabPay")]
#[case("paylah", "PayLah!")]
#[case("other", "Other")]
fn test_payment_mode_labels(#[case] tag: &str, #[case] label: &str) {
    let mode: PaymentMode = tag.parse().unwrap();
    assert_eq!(mode.label(), label);
    assert_eq!(mode.as_str(), tag);
}

#[test]
fn test_unknown_payment_mode() {
    assert_eq!(
        "venmo".parse::<PaymentMode>(),
        Err(ExpenseError::UnknownPaymentMode("venmo".into()))
    );
}

#[test]
fn test_expense_is_in_month() {
    let expense = Expense {
        id: ExpenseId::new(),
        unit_id: UnitId::new(),
        category: ExpenseCategory::Rent,
        amount: dec!(1000),
        paid_by: UserId::new(),
        payer_name: None,
        date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        notes: None,
        payment_mode: None,
        receipt_url: None,
        created_at: Utc::now(),
    };
    assert!(expense.is_in(MonthKey::new(2026, 2).unwrap()));
    assert!(!expense.is_in(MonthKey::new(2026, 3).unwrap()));
}

#[rstest]
#[case(dec!(0.01))]
#[case(dec!(12.5))]
#[case(dec!(100000))]
fn test_validate_expense_accepts(#[case] amount: Decimal) {
    let payer = UserId::new();
    assert_eq!(validate_expense(&new_expense(amount, Some(payer))), Ok(payer));
}

#[rstest]
#[case(dec!(0))]
#[case(dec!(0.009))]
#[case(dec!(-5))]
fn test_validate_expense_rejects_small_amounts(#[case] amount: Decimal) {
    assert_eq!(
        validate_expense(&new_expense(amount, Some(UserId::new()))),
        Err(ExpenseError::AmountTooSmall(amount))
    );
}

#[test]
fn test_validate_expense_requires_payer() {
    assert_eq!(
        validate_expense(&new_expense(dec!(10), None)),
        Err(ExpenseError::MissingPayer)
    );
}

fn payment(amount: Decimal, from: UserId, to: Option<UserId>) -> NewBalancePayment {
    NewBalancePayment {
        from_user: from,
        to_user: to,
        amount,
        for_month: MonthKey::new(2026, 3).unwrap(),
        payment_mode: Some(PaymentMode::BankTransfer),
        notes: None,
    }
}

#[test]
fn test_validate_balance_payment() {
    let from = UserId::new();
    assert!(validate_balance_payment(&payment(dec!(50), from, None)).is_ok());
    assert!(validate_balance_payment(&payment(dec!(0.01), from, Some(UserId::new()))).is_ok());
    assert_eq!(
        validate_balance_payment(&payment(dec!(0), from, None)),
        Err(BalancePaymentError::NonPositiveAmount(dec!(0)))
    );
    assert_eq!(
        validate_balance_payment(&payment(dec!(10), from, Some(from))),
        Err(BalancePaymentError::SelfPayment)
    );
}
