//! Balance payment repository.

use chrono::Utc;
use coliving_core::expense::{BalancePayment, NewBalancePayment, validate_balance_payment};
use coliving_shared::types::{BalancePaymentId, UnitId};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use uuid::Uuid;

use crate::entities::balance_payments;
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers;

/// Balance payment repository.
#[derive(Debug, Clone)]
pub struct BalancePaymentRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl BalancePaymentRepository {
    /// Creates a new balance payment repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    /// Records a payment towards a member's monthly share.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, sender and recipient
    /// are the same user or the database operation fails.
    pub async fn create(
        &self,
        unit_id: UnitId,
        input: NewBalancePayment,
    ) -> Result<BalancePayment, StoreError> {
        validate_balance_payment(&input)?;

        let model = balance_payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            unit_id: Set(unit_id.into_inner()),
            from_user: Set(input.from_user.into_inner()),
            to_user: Set(input.to_user.map(|u| u.into_inner())),
            amount: Set(input.amount),
            for_month: Set(input.for_month.first_day()),
            payment_mode: Set(input.payment_mode.map(|m| m.as_str().to_string())),
            notes: Set(input.notes.filter(|n| !n.trim().is_empty())),
            paid_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        info!(
            %unit_id,
            from_user = %input.from_user,
            month = %input.for_month,
            amount = %input.amount,
            "balance payment recorded"
        );
        self.events.publish(StoreEvent::BalancePaymentsChanged(unit_id));
        Ok(mappers::balance_payment(model))
    }

    /// Lists a unit's balance payments, newest month first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self, unit_id: UnitId) -> Result<Vec<BalancePayment>, StoreError> {
        let rows = balance_payments::Entity::find()
            .filter(balance_payments::Column::UnitId.eq(unit_id.into_inner()))
            .order_by_desc(balance_payments::Column::ForMonth)
            .order_by_desc(balance_payments::Column::PaidAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(mappers::balance_payment).collect())
    }

    /// Deletes a balance payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment is not found or the database operation
    /// fails.
    pub async fn delete(&self, payment_id: BalancePaymentId) -> Result<(), StoreError> {
        let id = payment_id.into_inner();
        let model = balance_payments::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Balance payment", id))?;
        balance_payments::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        info!(%payment_id, unit_id = %model.unit_id, "balance payment deleted");
        self.events
            .publish(StoreEvent::BalancePaymentsChanged(model.unit_id.into()));
        Ok(())
    }
}
