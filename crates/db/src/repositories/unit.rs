//! Unit repository.

use chrono::Utc;
use coliving_core::member::{ContributionConfig, MemberRole, RawContribution};
use coliving_core::unit::{NewUnit, Unit, validate_unit};
use coliving_shared::types::{UnitId, UserId};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::{unit_members, units};
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers;

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn due_day_column(day: Option<u32>) -> Option<i32> {
    day.and_then(|d| i32::try_from(d).ok())
}

/// Unit repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UnitRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl UnitRepository {
    /// Creates a new unit repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    /// Creates a unit and enrols its creator as master tenant on a 100% share.
    ///
    /// The unit and the membership are separate writes.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the database operation fails.
    pub async fn create(
        &self,
        input: NewUnit,
        created_by: UserId,
        creator_name: Option<String>,
    ) -> Result<Unit, StoreError> {
        validate_unit(&input)?;

        let now = Utc::now().into();
        let unit_id = Uuid::now_v7();
        let model = units::ActiveModel {
            id: Set(unit_id),
            name: Set(input.name.trim().to_string()),
            address: Set(blank_to_none(input.address)),
            country: Set(blank_to_none(input.country)),
            monthly_rent: Set(input.monthly_rent),
            contract_start: Set(input.contract_start),
            contract_end: Set(input.contract_end),
            payment_due_day: Set(due_day_column(input.payment_due_day)),
            created_by: Set(Some(created_by.into_inner())),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        let raw = RawContribution::from_config(&ContributionConfig::share(Decimal::ONE_HUNDRED));
        unit_members::ActiveModel {
            id: Set(Uuid::now_v7()),
            unit_id: Set(unit_id),
            user_id: Set(created_by.into_inner()),
            display_name: Set(creator_name),
            role: Set(MemberRole::MasterTenant.as_str().to_string()),
            contribution_type: Set(raw.contribution_type),
            share_percentage: Set(raw.share_percentage),
            fixed_amount: Set(raw.fixed_amount),
            contribution_period: Set(raw.contribution_period),
            contribution_end_date: Set(None),
            joined_at: Set(now),
        }
        .insert(&self.db)
        .await?;

        info!(%unit_id, %created_by, "unit created");
        let id = UnitId::from_uuid(unit_id);
        self.events.publish(StoreEvent::UnitChanged(id));
        self.events.publish(StoreEvent::MembersChanged(id));
        mappers::unit(model)
    }

    /// Gets a unit by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not found or the query fails.
    pub async fn get(&self, unit_id: UnitId) -> Result<Unit, StoreError> {
        let id = unit_id.into_inner();
        let model = units::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Unit", id))?;
        mappers::unit(model)
    }

    /// Lists the units `user_id` is a member of, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Unit>, StoreError> {
        units::Entity::find()
            .inner_join(unit_members::Entity)
            .filter(unit_members::Column::UserId.eq(user_id.into_inner()))
            .order_by_asc(units::Column::CreatedAt)
            .all(&self.db)
            .await?
            .into_iter()
            .map(mappers::unit)
            .collect()
    }

    /// Replaces a unit's editable fields.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the unit is not found or the
    /// database operation fails.
    pub async fn update(&self, unit_id: UnitId, input: NewUnit) -> Result<Unit, StoreError> {
        validate_unit(&input)?;

        let id = unit_id.into_inner();
        let mut model = units::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Unit", id))?
            .into_active_model();

        model.name = Set(input.name.trim().to_string());
        model.address = Set(blank_to_none(input.address));
        model.country = Set(blank_to_none(input.country));
        model.monthly_rent = Set(input.monthly_rent);
        model.contract_start = Set(input.contract_start);
        model.contract_end = Set(input.contract_end);
        model.payment_due_day = Set(due_day_column(input.payment_due_day));
        model.updated_at = Set(Utc::now().into());

        let updated = model.update(&self.db).await?;
        info!(%unit_id, "unit updated");
        self.events.publish(StoreEvent::UnitChanged(unit_id));
        mappers::unit(updated)
    }

    /// Sets or clears the payment due day.
    ///
    /// # Errors
    ///
    /// Returns an error if the day is outside `1..=31`, the unit is not found
    /// or the database operation fails.
    pub async fn set_payment_due_day(
        &self,
        unit_id: UnitId,
        day: Option<u32>,
    ) -> Result<Unit, StoreError> {
        let unit = self.get(unit_id).await?;
        let input = NewUnit {
            name: unit.name,
            address: unit.address,
            country: unit.country,
            monthly_rent: unit.monthly_rent,
            contract_start: unit.contract_start,
            contract_end: unit.contract_end,
            payment_due_day: day,
        };
        self.update(unit_id, input).await
    }

    /// Deletes a unit and, through cascades, everything recorded for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit is not found or the database operation
    /// fails.
    pub async fn delete(&self, unit_id: UnitId) -> Result<(), StoreError> {
        let id = unit_id.into_inner();
        let result = units::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::not_found("Unit", id));
        }
        info!(%unit_id, "unit deleted");
        self.events.publish(StoreEvent::UnitChanged(unit_id));
        Ok(())
    }
}
