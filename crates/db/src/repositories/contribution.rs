//! Contribution repository: ad-hoc requests and the payments against them.

use chrono::Utc;
use coliving_core::contribution::{
    Contribution, ContributionService, ContributionStatus, NewContribution, NewContributionPayment,
};
use coliving_shared::types::{ContributionId, UnitId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{contribution_payments, contributions, unit_members};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers::{self, NameDirectory};

/// Contribution repository.
#[derive(Debug, Clone)]
pub struct ContributionRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl ContributionRepository {
    /// Creates a new contribution repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    async fn names(&self, unit_id: Uuid) -> Result<NameDirectory, StoreError> {
        let members: Vec<_> = unit_members::Entity::find()
            .filter(unit_members::Column::UnitId.eq(unit_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(mappers::member)
            .collect();
        Ok(mappers::name_directory(&members))
    }

    /// Opens a contribution request in `pending` status.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is not positive, the reason is blank or
    /// the database operation fails.
    pub async fn create(&self, input: NewContribution) -> Result<Contribution, StoreError> {
        ContributionService::validate_new(&input)?;
        let names = self.names(input.unit_id.into_inner()).await?;

        let model = contributions::ActiveModel {
            id: Set(Uuid::now_v7()),
            unit_id: Set(input.unit_id.into_inner()),
            amount: Set(input.amount),
            reason: Set(input.reason.trim().to_string()),
            requested_by: Set(input.requested_by.into_inner()),
            status: Set(ContributionStatus::Pending.as_str().to_string()),
            created_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        info!(unit_id = %input.unit_id, amount = %input.amount, "contribution requested");
        self.events
            .publish(StoreEvent::ContributionsChanged(input.unit_id));
        mappers::contribution(model, Vec::new(), &names)
    }

    /// Loads a contribution row, its payment rows and the unit's names.
    async fn load(
        &self,
        id: Uuid,
    ) -> Result<
        (
            contributions::Model,
            Vec<contribution_payments::Model>,
            NameDirectory,
        ),
        StoreError,
    > {
        let (model, payments) = contributions::Entity::find_by_id(id)
            .find_with_related(contribution_payments::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::not_found("Contribution", id))?;
        let names = self.names(model.unit_id).await?;
        Ok((model, payments, names))
    }

    /// Gets a contribution with its payments.
    ///
    /// # Errors
    ///
    /// Returns an error if the contribution is not found or the query fails.
    pub async fn get(&self, contribution_id: ContributionId) -> Result<Contribution, StoreError> {
        let (model, payments, names) = self.load(contribution_id.into_inner()).await?;
        mappers::contribution(model, payments, &names)
    }

    /// Lists a unit's contributions with payments, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be mapped.
    pub async fn list(&self, unit_id: UnitId) -> Result<Vec<Contribution>, StoreError> {
        let id = unit_id.into_inner();
        let (rows, names) = tokio::try_join!(
            async {
                contributions::Entity::find()
                    .filter(contributions::Column::UnitId.eq(id))
                    .order_by_desc(contributions::Column::CreatedAt)
                    .order_by_desc(contributions::Column::Id)
                    .find_with_related(contribution_payments::Entity)
                    .all(&self.db)
                    .await
                    .map_err(StoreError::from)
            },
            self.names(id),
        )?;
        rows.into_iter()
            .map(|(model, payments)| mappers::contribution(model, payments, &names))
            .collect()
    }

    /// Records a member's payment. Status is left as it is.
    ///
    /// Returns the request as it stands after the payment, built from rows
    /// read before the insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is already collected, the user has
    /// already paid, the amount is not positive or the database operation
    /// fails.
    pub async fn record_payment(
        &self,
        contribution_id: ContributionId,
        payment: NewContributionPayment,
    ) -> Result<Contribution, StoreError> {
        let (model, mut payments, names) = self.load(contribution_id.into_inner()).await?;
        let current = mappers::contribution(model.clone(), payments.clone(), &names)?;
        ContributionService::validate_payment(&current, &payment)?;

        let inserted = contribution_payments::ActiveModel {
            id: Set(Uuid::now_v7()),
            contribution_id: Set(contribution_id.into_inner()),
            user_id: Set(payment.user_id.into_inner()),
            amount: Set(payment.amount),
            paid_at: Set(Utc::now().into()),
            payment_mode: Set(payment.payment_mode.map(|m| m.as_str().to_string())),
            receipt_url: Set(payment.receipt_url),
        }
        .insert(&self.db)
        .await?;

        info!(
            %contribution_id,
            user_id = %payment.user_id,
            amount = %payment.amount,
            "contribution payment recorded"
        );
        self.events
            .publish(StoreEvent::ContributionsChanged(current.unit_id));
        payments.push(inserted);
        mappers::contribution(model, payments, &names)
    }

    /// Sets the collection status.
    ///
    /// # Errors
    ///
    /// Returns an error if the contribution is not found or the database
    /// operation fails.
    pub async fn set_status(
        &self,
        contribution_id: ContributionId,
        status: ContributionStatus,
    ) -> Result<Contribution, StoreError> {
        let (model, payments, names) = self.load(contribution_id.into_inner()).await?;
        let mut active = model.into_active_model();
        active.status = Set(status.as_str().to_string());
        let updated = active.update(&self.db).await?;

        info!(%contribution_id, status = status.as_str(), "contribution status changed");
        self.events
            .publish(StoreEvent::ContributionsChanged(updated.unit_id.into()));
        mappers::contribution(updated, payments, &names)
    }
}
