//! Expected expense generation and template maintenance.

use chrono::NaiveDate;
use coliving_shared::types::UnitId;
use rust_decimal::Decimal;

use super::error::ExpectedExpenseError;
use super::types::{EntryKey, ExpectedEntry, ExpectedTemplate, PlannedEntry, TemplateChange};
use crate::expense::ExpenseCategory;
use crate::period::{MonthKey, months_in_range};
use crate::unit::Unit;

/// Expected expense logic. Produces plans; writing them is the store's job.
pub struct ExpectedExpenseService;

impl ExpectedExpenseService {
    /// Amount generation uses for a category.
    ///
    /// The template amount when present, else 0. Rent falls back to the
    /// unit's monthly rent when the template has no rent or a zero rent.
    #[must_use]
    pub fn template_amount(
        templates: &[ExpectedTemplate],
        category: ExpenseCategory,
        monthly_rent: Decimal,
    ) -> Decimal {
        let amount = templates
            .iter()
            .find(|t| t.category == category)
            .map(|t| t.amount);
        match (category, amount) {
            (ExpenseCategory::Rent, None) => monthly_rent,
            (ExpenseCategory::Rent, Some(rent)) if rent.is_zero() => monthly_rent,
            (_, amount) => amount.unwrap_or_default(),
        }
    }

    /// Plans one entry per category for every month touched by
    /// `start..=end`.
    #[must_use]
    pub fn plan_range(
        unit_id: UnitId,
        start: NaiveDate,
        end: NaiveDate,
        monthly_rent: Decimal,
        templates: &[ExpectedTemplate],
    ) -> Vec<PlannedEntry> {
        let amounts = ExpenseCategory::ALL
            .map(|category| Self::template_amount(templates, category, monthly_rent));

        months_in_range(start, end)
            .into_iter()
            .flat_map(|month| {
                ExpenseCategory::ALL.into_iter().map(move |category| PlannedEntry {
                    key: EntryKey {
                        unit_id,
                        month,
                        category,
                    },
                    amount: amounts[category.index()],
                })
            })
            .collect()
    }

    /// Plans entries for the unit's contract period.
    ///
    /// # Errors
    ///
    /// Returns `ExpectedExpenseError::MissingContractPeriod` unless both
    /// contract dates are set.
    pub fn plan(
        unit: &Unit,
        templates: &[ExpectedTemplate],
    ) -> Result<Vec<PlannedEntry>, ExpectedExpenseError> {
        let (start, end) = unit
            .contract_period()
            .ok_or(ExpectedExpenseError::MissingContractPeriod)?;
        Ok(Self::plan_range(
            unit.id,
            start,
            end,
            unit.monthly_rent,
            templates,
        ))
    }

    /// Sum of the entries planned for `month`.
    #[must_use]
    pub fn month_total(entries: &[ExpectedEntry], month: MonthKey) -> Decimal {
        entries
            .iter()
            .filter(|e| e.month == month)
            .map(|e| e.amount)
            .sum()
    }

    /// Planned amount per category for `month`, in category order.
    #[must_use]
    pub fn month_amounts(entries: &[ExpectedEntry], month: MonthKey) -> [Decimal; 5] {
        let mut amounts = [Decimal::ZERO; 5];
        for entry in entries.iter().filter(|e| e.month == month) {
            amounts[entry.category.index()] += entry.amount;
        }
        amounts
    }

    /// Checks an amount entered for a template or an entry.
    ///
    /// # Errors
    ///
    /// Returns `ExpectedExpenseError::NegativeAmount` for amounts below zero.
    pub fn validate_amount(
        category: ExpenseCategory,
        amount: Decimal,
    ) -> Result<(), ExpectedExpenseError> {
        if amount < Decimal::ZERO {
            return Err(ExpectedExpenseError::NegativeAmount { category, amount });
        }
        Ok(())
    }

    /// Works out the writes that save submitted template amounts: categories
    /// with a row are updated, the rest inserted.
    ///
    /// # Errors
    ///
    /// Returns `ExpectedExpenseError::NegativeAmount` if any submitted amount
    /// is negative; nothing is planned in that case.
    pub fn template_changes(
        existing: &[ExpectedTemplate],
        submitted: &[(ExpenseCategory, Decimal)],
    ) -> Result<Vec<TemplateChange>, ExpectedExpenseError> {
        submitted
            .iter()
            .map(|&(category, amount)| {
                Self::validate_amount(category, amount)?;
                Ok(existing.iter().find(|t| t.category == category).map_or(
                    TemplateChange::Insert { category, amount },
                    |t| TemplateChange::Update { id: t.id, amount },
                ))
            })
            .collect()
    }
}
