//! Builders for test snapshots.

use chrono::{NaiveDate, TimeZone, Utc};
use coliving_shared::types::{BalancePaymentId, ExpectedEntryId, ExpenseId, MemberId, UnitId, UserId};
use rust_decimal::Decimal;

use crate::expected::ExpectedEntry;
use crate::expense::{BalancePayment, Expense, ExpenseCategory, PaymentMode};
use crate::member::{ContributionConfig, Member, MemberRole};
use crate::period::MonthKey;
use crate::unit::{Unit, UnitSnapshot};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

pub fn unit(rent: Decimal) -> Unit {
    Unit {
        id: UnitId::new(),
        name: "Joo Chiat 12".into(),
        address: None,
        country: Some("SG".into()),
        monthly_rent: rent,
        contract_start: None,
        contract_end: None,
        payment_due_day: Some(5),
        created_by: None,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn member(
    unit: &Unit,
    name: &str,
    role: MemberRole,
    contribution: ContributionConfig,
) -> Member {
    Member {
        id: MemberId::new(),
        unit_id: unit.id,
        user_id: UserId::new(),
        display_name: Some(name.to_string()),
        role,
        contribution,
        contribution_end_date: None,
        joined_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn expense(
    unit: &Unit,
    payer: &Member,
    category: ExpenseCategory,
    amount: Decimal,
    on: NaiveDate,
) -> Expense {
    Expense {
        id: ExpenseId::new(),
        unit_id: unit.id,
        category,
        amount,
        paid_by: payer.user_id,
        payer_name: payer.display_name.clone(),
        date: on,
        notes: None,
        payment_mode: Some(PaymentMode::Paynow),
        receipt_url: None,
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn payment(
    unit: &Unit,
    from: &Member,
    to: Option<&Member>,
    amount: Decimal,
    for_month: MonthKey,
) -> BalancePayment {
    BalancePayment {
        id: BalancePaymentId::new(),
        unit_id: unit.id,
        from_user: from.user_id,
        to_user: to.map(|m| m.user_id),
        amount,
        for_month,
        payment_mode: Some(PaymentMode::BankTransfer),
        notes: None,
        paid_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
    }
}

pub fn entry(unit: &Unit, month: MonthKey, category: ExpenseCategory, amount: Decimal) -> ExpectedEntry {
    ExpectedEntry {
        id: ExpectedEntryId::new(),
        unit_id: unit.id,
        month,
        category,
        amount,
    }
}

pub fn snapshot(unit: Unit, members: Vec<Member>) -> UnitSnapshot {
    UnitSnapshot {
        members,
        ..UnitSnapshot::empty(unit)
    }
}
