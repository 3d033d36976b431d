//! Conversions from stored rows to domain records.
//!
//! Contribution fields are normalized here, once, so everything downstream
//! works with a complete `ContributionConfig`.

use std::collections::HashMap;

use chrono::Utc;
use coliving_core::contribution::{Contribution, ContributionPayment};
use coliving_core::expected::{ExpectedEntry, ExpectedTemplate};
use coliving_core::expense::{BalancePayment, Expense, ExpenseCategory, PaymentMode};
use coliving_core::member::{Member, MemberRole, RawContribution};
use coliving_core::period::MonthKey;
use coliving_core::unit::Unit;
use coliving_shared::types::UserId;
use uuid::Uuid;

use crate::entities::{
    balance_payments, contribution_payments, contributions, expected_expense_entries,
    expected_expenses, expenses, unit_members, units,
};
use crate::error::StoreError;

/// Display names keyed by user, taken from member rows.
pub type NameDirectory = HashMap<UserId, String>;

/// Builds a [`NameDirectory`] from members that have a display name.
#[must_use]
pub fn name_directory(members: &[Member]) -> NameDirectory {
    members
        .iter()
        .filter_map(|m| {
            m.display_name
                .as_ref()
                .filter(|n| !n.is_empty())
                .map(|n| (m.user_id, n.clone()))
        })
        .collect()
}

fn invalid(entity: &'static str, id: Uuid, reason: impl ToString) -> StoreError {
    StoreError::InvalidRecord {
        entity,
        id,
        reason: reason.to_string(),
    }
}

fn category(entity: &'static str, id: Uuid, tag: &str) -> Result<ExpenseCategory, StoreError> {
    tag.parse().map_err(|e| invalid(entity, id, e))
}

/// Unknown payment modes load as `Other` rather than failing the row.
fn payment_mode(tag: Option<&str>) -> Option<PaymentMode> {
    tag.filter(|t| !t.is_empty())
        .map(|t| t.parse().unwrap_or(PaymentMode::Other))
}

/// Maps a unit row.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` for a negative due day.
pub fn unit(model: units::Model) -> Result<Unit, StoreError> {
    let payment_due_day = model
        .payment_due_day
        .map(u32::try_from)
        .transpose()
        .map_err(|e| invalid("Unit", model.id, e))?;
    Ok(Unit {
        id: model.id.into(),
        name: model.name,
        address: model.address,
        country: model.country,
        monthly_rent: model.monthly_rent,
        contract_start: model.contract_start,
        contract_end: model.contract_end,
        payment_due_day,
        created_by: model.created_by.map(Into::into),
        created_at: model.created_at.with_timezone(&Utc),
    })
}

/// Maps a member row, filling contribution defaults.
#[must_use]
pub fn member(model: unit_members::Model) -> Member {
    let raw = RawContribution {
        contribution_type: model.contribution_type,
        share_percentage: model.share_percentage,
        fixed_amount: model.fixed_amount,
        contribution_period: model.contribution_period,
    };
    Member {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        user_id: model.user_id.into(),
        display_name: model.display_name,
        role: MemberRole::from_str_lossy(&model.role),
        contribution: raw.normalize(),
        contribution_end_date: model.contribution_end_date,
        joined_at: model.joined_at.with_timezone(&Utc),
    }
}

/// Maps an expense row; the payer name comes from `names`.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` for an unknown category.
pub fn expense(model: expenses::Model, names: &NameDirectory) -> Result<Expense, StoreError> {
    let paid_by = UserId::from(model.paid_by);
    Ok(Expense {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        category: category("Expense", model.id, &model.category)?,
        amount: model.amount,
        paid_by,
        payer_name: names.get(&paid_by).cloned(),
        date: model.date,
        notes: model.notes,
        payment_mode: payment_mode(model.payment_mode.as_deref()),
        receipt_url: model.receipt_url,
        created_at: model.created_at.with_timezone(&Utc),
    })
}

/// Maps a balance payment row.
#[must_use]
pub fn balance_payment(model: balance_payments::Model) -> BalancePayment {
    BalancePayment {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        from_user: model.from_user.into(),
        to_user: model.to_user.map(Into::into),
        amount: model.amount,
        for_month: MonthKey::of(model.for_month),
        payment_mode: payment_mode(model.payment_mode.as_deref()),
        notes: model.notes,
        paid_at: model.paid_at.with_timezone(&Utc),
    }
}

/// Maps a template row.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` for an unknown category.
pub fn template(model: expected_expenses::Model) -> Result<ExpectedTemplate, StoreError> {
    Ok(ExpectedTemplate {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        category: category("Expected expense", model.id, &model.category)?,
        amount: model.amount,
    })
}

/// Maps an expected entry row.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` for an unknown category.
pub fn entry(model: expected_expense_entries::Model) -> Result<ExpectedEntry, StoreError> {
    Ok(ExpectedEntry {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        month: MonthKey::of(model.month),
        category: category("Expected entry", model.id, &model.category)?,
        amount: model.amount,
    })
}

/// Maps a contribution row with its payment rows.
///
/// # Errors
///
/// Returns `StoreError::InvalidRecord` for an unknown status.
pub fn contribution(
    model: contributions::Model,
    payments: Vec<contribution_payments::Model>,
    names: &NameDirectory,
) -> Result<Contribution, StoreError> {
    let requested_by = UserId::from(model.requested_by);
    let status = model
        .status
        .parse()
        .map_err(|e| invalid("Contribution", model.id, e))?;
    let mut payments: Vec<ContributionPayment> = payments
        .into_iter()
        .map(|p| {
            let user_id = UserId::from(p.user_id);
            ContributionPayment {
                id: p.id.into(),
                contribution_id: p.contribution_id.into(),
                user_id,
                payer_name: names.get(&user_id).cloned(),
                amount: p.amount,
                paid_at: p.paid_at.with_timezone(&Utc),
                payment_mode: payment_mode(p.payment_mode.as_deref()),
                receipt_url: p.receipt_url,
            }
        })
        .collect();
    payments.sort_by_key(|p| p.paid_at);

    Ok(Contribution {
        id: model.id.into(),
        unit_id: model.unit_id.into(),
        amount: model.amount,
        reason: model.reason,
        requested_by,
        requester_name: names.get(&requested_by).cloned(),
        status,
        created_at: model.created_at.with_timezone(&Utc),
        payments,
    })
}
