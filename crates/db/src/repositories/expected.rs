//! Expected expense repository: per-category templates and the monthly
//! entries generated from them.

use coliving_core::expected::{
    ExpectedEntry, ExpectedExpenseService, ExpectedTemplate, PlannedEntry, TemplateChange,
};
use coliving_core::expense::ExpenseCategory;
use coliving_core::period::MonthKey;
use coliving_shared::types::{ExpectedEntryId, UnitId};
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::{expected_expense_entries, expected_expenses, units};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers;

/// Result of saving templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateSaveOutcome {
    /// Existing templates updated.
    pub updated: usize,
    /// Templates created.
    pub inserted: usize,
}

fn entry_row(plan: &PlannedEntry) -> expected_expense_entries::ActiveModel {
    expected_expense_entries::ActiveModel {
        id: Set(Uuid::now_v7()),
        unit_id: Set(plan.key.unit_id.into_inner()),
        month: Set(plan.key.month.first_day()),
        category: Set(plan.key.category.as_str().to_string()),
        amount: Set(plan.amount),
    }
}

/// Expected expense repository.
#[derive(Debug, Clone)]
pub struct ExpectedExpenseRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl ExpectedExpenseRepository {
    /// Creates a new expected expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    /// Lists a unit's templates.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be mapped.
    pub async fn templates(&self, unit_id: UnitId) -> Result<Vec<ExpectedTemplate>, StoreError> {
        expected_expenses::Entity::find()
            .filter(expected_expenses::Column::UnitId.eq(unit_id.into_inner()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(mappers::template)
            .collect()
    }

    /// Lists a unit's materialized entries, by month.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be mapped.
    pub async fn entries(&self, unit_id: UnitId) -> Result<Vec<ExpectedEntry>, StoreError> {
        expected_expense_entries::Entity::find()
            .filter(expected_expense_entries::Column::UnitId.eq(unit_id.into_inner()))
            .order_by_asc(expected_expense_entries::Column::Month)
            .all(&self.db)
            .await?
            .into_iter()
            .map(mappers::entry)
            .collect()
    }

    /// Saves template amounts: existing categories are updated, new ones
    /// inserted.
    ///
    /// # Errors
    ///
    /// Returns an error if an amount is negative or the database operation
    /// fails.
    pub async fn save_templates(
        &self,
        unit_id: UnitId,
        submitted: &[(ExpenseCategory, Decimal)],
    ) -> Result<TemplateSaveOutcome, StoreError> {
        let existing = self.templates(unit_id).await?;
        let changes = ExpectedExpenseService::template_changes(&existing, submitted)?;

        let mut outcome = TemplateSaveOutcome::default();
        for change in changes {
            match change {
                TemplateChange::Update { id, amount } => {
                    expected_expenses::Entity::update_many()
                        .col_expr(expected_expenses::Column::Amount, Expr::value(amount))
                        .filter(expected_expenses::Column::Id.eq(id.into_inner()))
                        .exec(&self.db)
                        .await?;
                    outcome.updated += 1;
                }
                TemplateChange::Insert { category, amount } => {
                    expected_expenses::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        unit_id: Set(unit_id.into_inner()),
                        category: Set(category.as_str().to_string()),
                        amount: Set(amount),
                    }
                    .insert(&self.db)
                    .await?;
                    outcome.inserted += 1;
                }
            }
        }

        info!(
            %unit_id,
            updated = outcome.updated,
            inserted = outcome.inserted,
            "expected expense templates saved"
        );
        self.events.publish(StoreEvent::ExpectedExpensesChanged(unit_id));
        Ok(outcome)
    }

    /// Materializes one entry per contract month and category from the
    /// templates, upserting on `(unit_id, month, category)`. Running it twice
    /// leaves the same set of keys. Returns the number of entries written.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not found, lacks contract dates or the
    /// database operation fails.
    pub async fn generate(&self, unit_id: UnitId) -> Result<usize, StoreError> {
        let id = unit_id.into_inner();
        let (unit, templates) = tokio::try_join!(
            async {
                units::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or(StoreError::not_found("Unit", id))
                    .and_then(mappers::unit)
            },
            self.templates(unit_id),
        )?;

        let planned = ExpectedExpenseService::plan(&unit, &templates)?;
        if planned.is_empty() {
            return Ok(0);
        }

        expected_expense_entries::Entity::insert_many(planned.iter().map(entry_row))
            .on_conflict(
                OnConflict::columns([
                    expected_expense_entries::Column::UnitId,
                    expected_expense_entries::Column::Month,
                    expected_expense_entries::Column::Category,
                ])
                .update_column(expected_expense_entries::Column::Amount)
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await?;

        info!(%unit_id, entries = planned.len(), "expected expenses generated");
        self.events.publish(StoreEvent::ExpectedExpensesChanged(unit_id));
        Ok(planned.len())
    }

    /// Changes the amount of one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative, the entry is not found or
    /// the database operation fails.
    pub async fn set_entry_amount(
        &self,
        entry_id: ExpectedEntryId,
        amount: Decimal,
    ) -> Result<ExpectedEntry, StoreError> {
        let id = entry_id.into_inner();
        let model = expected_expense_entries::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Expected entry", id))?;
        let entry = mappers::entry(model.clone())?;
        ExpectedExpenseService::validate_amount(entry.category, amount)?;

        let mut active: expected_expense_entries::ActiveModel = model.into();
        active.amount = Set(amount);
        let updated = mappers::entry(active.update(&self.db).await?)?;

        debug!(%entry_id, %amount, "expected entry updated");
        self.events
            .publish(StoreEvent::ExpectedExpensesChanged(updated.unit_id));
        Ok(updated)
    }

    /// Deletes every entry of `month`. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_month(&self, unit_id: UnitId, month: MonthKey) -> Result<u64, StoreError> {
        let result = expected_expense_entries::Entity::delete_many()
            .filter(expected_expense_entries::Column::UnitId.eq(unit_id.into_inner()))
            .filter(expected_expense_entries::Column::Month.eq(month.first_day()))
            .exec(&self.db)
            .await?;
        info!(%unit_id, %month, deleted = result.rows_affected, "expected month deleted");
        self.events.publish(StoreEvent::ExpectedExpensesChanged(unit_id));
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use coliving_core::expected::EntryKey;
    use rust_decimal_macros::dec;
    use sea_orm::ActiveValue;

    use super::*;

    #[test]
    fn test_entry_row_stores_first_of_month_and_tag() {
        let unit_id = UnitId::new();
        let plan = PlannedEntry {
            key: EntryKey {
                unit_id,
                month: MonthKey::new(2026, 4).unwrap(),
                category: ExpenseCategory::Utilities,
            },
            amount: dec!(180),
        };
        let row = entry_row(&plan);
        assert_eq!(row.unit_id, ActiveValue::Set(unit_id.into_inner()));
        assert_eq!(
            row.month,
            ActiveValue::Set(NaiveDate::from_ymd_opt(2026, 4, 1).unwrap())
        );
        assert_eq!(row.category, ActiveValue::Set("pub".to_string()));
        assert_eq!(row.amount, ActiveValue::Set(dec!(180)));
    }
}
