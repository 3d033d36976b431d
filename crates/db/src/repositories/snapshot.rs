//! Snapshot loading.
//!
//! A unit snapshot is read with independent queries issued concurrently.
//! There is no read transaction; a write landing between the queries shows up
//! in some collections and not others.

use coliving_core::unit::UnitSnapshot;
use coliving_shared::types::{UnitId, UserId};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use crate::entities::{
    balance_payments, expected_expense_entries, expected_expenses, expenses, unit_members, units,
};
use crate::error::StoreError;
use crate::mappers;

/// Loads [`UnitSnapshot`]s.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    db: DatabaseConnection,
}

impl SnapshotRepository {
    /// Creates a new snapshot repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a unit with its members, expenses, balance payments, templates
    /// and expected entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not found, a query fails or a row
    /// cannot be mapped.
    pub async fn unit_snapshot(&self, unit_id: UnitId) -> Result<UnitSnapshot, StoreError> {
        let id = unit_id.into_inner();
        let (unit, members, expense_rows, payments, templates, entries) = tokio::try_join!(
            units::Entity::find_by_id(id).one(&self.db),
            unit_members::Entity::find()
                .filter(unit_members::Column::UnitId.eq(id))
                .order_by_asc(unit_members::Column::JoinedAt)
                .all(&self.db),
            expenses::Entity::find()
                .filter(expenses::Column::UnitId.eq(id))
                .order_by_desc(expenses::Column::Date)
                .all(&self.db),
            balance_payments::Entity::find()
                .filter(balance_payments::Column::UnitId.eq(id))
                .order_by_desc(balance_payments::Column::ForMonth)
                .all(&self.db),
            expected_expenses::Entity::find()
                .filter(expected_expenses::Column::UnitId.eq(id))
                .all(&self.db),
            expected_expense_entries::Entity::find()
                .filter(expected_expense_entries::Column::UnitId.eq(id))
                .order_by_asc(expected_expense_entries::Column::Month)
                .all(&self.db),
        )?;

        let unit = mappers::unit(unit.ok_or(StoreError::not_found("Unit", id))?)?;
        let members: Vec<_> = members.into_iter().map(mappers::member).collect();
        let names = mappers::name_directory(&members);

        let snapshot = UnitSnapshot {
            unit,
            expenses: expense_rows
                .into_iter()
                .map(|row| mappers::expense(row, &names))
                .collect::<Result<_, _>>()?,
            balance_payments: payments.into_iter().map(mappers::balance_payment).collect(),
            templates: templates
                .into_iter()
                .map(mappers::template)
                .collect::<Result<_, _>>()?,
            expected_entries: entries
                .into_iter()
                .map(mappers::entry)
                .collect::<Result<_, _>>()?,
            members,
        };

        debug!(
            %unit_id,
            members = snapshot.members.len(),
            expenses = snapshot.expenses.len(),
            entries = snapshot.expected_entries.len(),
            "unit snapshot loaded"
        );
        Ok(snapshot)
    }

    /// Loads a snapshot of every unit `user_id` belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails or a row cannot be mapped.
    pub async fn user_snapshots(&self, user_id: UserId) -> Result<Vec<UnitSnapshot>, StoreError> {
        let memberships = unit_members::Entity::find()
            .filter(unit_members::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(unit_members::Column::JoinedAt)
            .all(&self.db)
            .await?;

        let mut snapshots = Vec::with_capacity(memberships.len());
        for membership in memberships {
            snapshots.push(self.unit_snapshot(membership.unit_id.into()).await?);
        }
        Ok(snapshots)
    }
}
