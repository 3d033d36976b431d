//! Unit data types.

use chrono::{DateTime, NaiveDate, Utc};
use coliving_shared::types::{Currency, UnitId, UserId, currency_for_country};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::UnitError;
use crate::period::{MonthKey, format_due_day, months_in_range, next_due_date};

/// A shared dwelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unit ID.
    pub id: UnitId,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: Option<String>,
    /// Country code or name; selects the display currency.
    pub country: Option<String>,
    /// Rent per month. Reference value for share contributions.
    pub monthly_rent: Decimal,
    /// Contract start date.
    pub contract_start: Option<NaiveDate>,
    /// Contract expiry date.
    pub contract_end: Option<NaiveDate>,
    /// Day of month payments are due.
    pub payment_due_day: Option<u32>,
    /// Creating user.
    pub created_by: Option<UserId>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Unit {
    /// Display currency derived from the country, SGD when unknown.
    #[must_use]
    pub fn currency(&self) -> Currency {
        currency_for_country(self.country.as_deref())
    }

    /// Contract start and end, when both are set.
    #[must_use]
    pub fn contract_period(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.contract_start.zip(self.contract_end)
    }

    /// Every month touched by the contract; empty without a contract period.
    #[must_use]
    pub fn contract_months(&self) -> Vec<MonthKey> {
        self.contract_period()
            .map(|(start, end)| months_in_range(start, end))
            .unwrap_or_default()
    }

    /// Next payment due date, when a due day is configured.
    #[must_use]
    pub fn next_due_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        self.payment_due_day.map(|day| next_due_date(day, today))
    }

    /// Due day label such as `5th of each month`.
    #[must_use]
    pub fn due_label(&self) -> Option<String> {
        self.payment_due_day.map(format_due_day)
    }
}

/// Unit fields as submitted on create or edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUnit {
    /// Name.
    pub name: String,
    /// Address.
    pub address: Option<String>,
    /// Country code.
    pub country: Option<String>,
    /// Rent per month.
    pub monthly_rent: Decimal,
    /// Contract start.
    pub contract_start: Option<NaiveDate>,
    /// Contract expiry.
    pub contract_end: Option<NaiveDate>,
    /// Payment due day.
    pub payment_due_day: Option<u32>,
}

/// Checks unit fields before they are stored.
///
/// # Errors
///
/// Returns a `UnitError` for a blank name, negative rent, a due day outside
/// `1..=31` or a contract that expires before it starts.
pub fn validate_unit(input: &NewUnit) -> Result<(), UnitError> {
    if input.name.trim().is_empty() {
        return Err(UnitError::EmptyName);
    }
    if input.monthly_rent < Decimal::ZERO {
        return Err(UnitError::NegativeRent(input.monthly_rent));
    }
    if let Some(day) = input.payment_due_day
        && !(1..=31).contains(&day)
    {
        return Err(UnitError::InvalidDueDay(day));
    }
    if let (Some(start), Some(end)) = (input.contract_start, input.contract_end)
        && end < start
    {
        return Err(UnitError::ContractEndsBeforeStart { start, end });
    }
    Ok(())
}
