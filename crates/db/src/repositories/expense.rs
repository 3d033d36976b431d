//! Expense repository.

use chrono::Utc;
use coliving_core::expense::{Expense, NewExpense, validate_expense};
use coliving_core::period::MonthKey;
use coliving_shared::types::{ExpenseId, UnitId};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::{expenses, unit_members};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers::{self, NameDirectory};

/// Expense repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    async fn names(&self, unit_id: UnitId) -> Result<NameDirectory, StoreError> {
        let members: Vec<_> = unit_members::Entity::find()
            .filter(unit_members::Column::UnitId.eq(unit_id.into_inner()))
            .all(&self.db)
            .await?
            .into_iter()
            .map(mappers::member)
            .collect();
        Ok(mappers::name_directory(&members))
    }

    /// Records an expense.
    ///
    /// Member names are read before the insert, so once the row is written
    /// nothing else can fail.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is below 0.01, the payer is missing or
    /// the database operation fails.
    pub async fn create(&self, unit_id: UnitId, input: NewExpense) -> Result<Expense, StoreError> {
        let paid_by = validate_expense(&input)?;
        let names = self.names(unit_id).await?;

        let model = expenses::ActiveModel {
            id: Set(Uuid::now_v7()),
            unit_id: Set(unit_id.into_inner()),
            category: Set(input.category.as_str().to_string()),
            amount: Set(input.amount),
            paid_by: Set(paid_by.into_inner()),
            date: Set(input.date),
            notes: Set(input.notes.filter(|n| !n.trim().is_empty())),
            payment_mode: Set(input.payment_mode.map(|m| m.as_str().to_string())),
            receipt_url: Set(input.receipt_url),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        info!(
            %unit_id,
            category = input.category.as_str(),
            amount = %input.amount,
            "expense recorded"
        );
        self.events.publish(StoreEvent::ExpensesChanged(unit_id));
        mappers::expense(model, &names)
    }

    /// Lists a unit's expenses, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be mapped.
    pub async fn list(&self, unit_id: UnitId) -> Result<Vec<Expense>, StoreError> {
        let (rows, names) = tokio::try_join!(
            async {
                expenses::Entity::find()
                    .filter(expenses::Column::UnitId.eq(unit_id.into_inner()))
                    .order_by_desc(expenses::Column::Date)
                    .order_by_desc(expenses::Column::CreatedAt)
                    .all(&self.db)
                    .await
                    .map_err(StoreError::from)
            },
            self.names(unit_id),
        )?;
        rows.into_iter()
            .map(|row| mappers::expense(row, &names))
            .collect()
    }

    /// Lists a unit's expenses dated within `month`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be mapped.
    pub async fn list_for_month(
        &self,
        unit_id: UnitId,
        month: MonthKey,
    ) -> Result<Vec<Expense>, StoreError> {
        let names = self.names(unit_id).await?;
        let rows = expenses::Entity::find()
            .filter(expenses::Column::UnitId.eq(unit_id.into_inner()))
            .filter(expenses::Column::Date.between(month.first_day(), month.last_day()))
            .order_by_asc(expenses::Column::Date)
            .all(&self.db)
            .await?;
        debug!(%unit_id, %month, rows = rows.len(), "month expenses loaded");
        rows.into_iter()
            .map(|row| mappers::expense(row, &names))
            .collect()
    }

    /// Deletes one expense.
    ///
    /// # Errors
    ///
    /// Returns an error if the expense is not found or the database operation
    /// fails.
    pub async fn delete(&self, expense_id: ExpenseId) -> Result<(), StoreError> {
        let id = expense_id.into_inner();
        let model = expenses::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Expense", id))?;
        expenses::Entity::delete_by_id(id).exec(&self.db).await?;
        info!(%expense_id, unit_id = %model.unit_id, "expense deleted");
        self.events
            .publish(StoreEvent::ExpensesChanged(model.unit_id.into()));
        Ok(())
    }

    /// Deletes several expenses of a unit at once. Returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub async fn delete_many(
        &self,
        unit_id: UnitId,
        expense_ids: &[ExpenseId],
    ) -> Result<u64, StoreError> {
        if expense_ids.is_empty() {
            return Ok(0);
        }
        let ids: Vec<Uuid> = expense_ids.iter().map(|id| id.into_inner()).collect();
        let result = expenses::Entity::delete_many()
            .filter(expenses::Column::UnitId.eq(unit_id.into_inner()))
            .filter(expenses::Column::Id.is_in(ids))
            .exec(&self.db)
            .await?;
        info!(%unit_id, deleted = result.rows_affected, "expenses deleted");
        self.events.publish(StoreEvent::ExpensesChanged(unit_id));
        Ok(result.rows_affected)
    }
}
