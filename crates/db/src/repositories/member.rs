//! Member repository.

use chrono::Utc;
use coliving_core::member::{Member, MemberRole, MemberUpdate, RawContribution, validate_member_update};
use coliving_shared::types::{MemberId, UnitId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use tracing::info;
use uuid::Uuid;

use crate::entities::unit_members;
use crate::error::StoreError;
use crate::events::{EventBus, StoreEvent};
use crate::mappers;

/// Input for adding a member to a unit.
#[derive(Debug, Clone)]
pub struct NewMemberInput {
    /// Unit joined.
    pub unit_id: UnitId,
    /// Joining user.
    pub user_id: UserId,
    /// Profile name.
    pub display_name: Option<String>,
    /// Role.
    pub role: MemberRole,
    /// Contribution settings.
    pub contribution: MemberUpdate,
}

/// Member repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: DatabaseConnection,
    events: EventBus,
}

impl MemberRepository {
    /// Creates a new member repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, events: EventBus) -> Self {
        Self { db, events }
    }

    /// Adds a member.
    ///
    /// # Errors
    ///
    /// Returns an error if the contribution is invalid, the user already
    /// belongs to the unit or the database operation fails.
    pub async fn add(&self, input: NewMemberInput) -> Result<Member, StoreError> {
        let (config, end_date) = validate_member_update(&input.contribution)?;

        let existing = unit_members::Entity::find()
            .filter(unit_members::Column::UnitId.eq(input.unit_id.into_inner()))
            .filter(unit_members::Column::UserId.eq(input.user_id.into_inner()))
            .count(&self.db)
            .await?;
        if existing > 0 {
            return Err(StoreError::Conflict(format!(
                "User {} is already a member of unit {}",
                input.user_id, input.unit_id
            )));
        }

        let raw = RawContribution::from_config(&config);
        let model = unit_members::ActiveModel {
            id: Set(Uuid::now_v7()),
            unit_id: Set(input.unit_id.into_inner()),
            user_id: Set(input.user_id.into_inner()),
            display_name: Set(input.display_name),
            role: Set(input.role.as_str().to_string()),
            contribution_type: Set(raw.contribution_type),
            share_percentage: Set(raw.share_percentage),
            fixed_amount: Set(raw.fixed_amount),
            contribution_period: Set(raw.contribution_period),
            contribution_end_date: Set(end_date),
            joined_at: Set(Utc::now().into()),
        }
        .insert(&self.db)
        .await?;

        info!(unit_id = %input.unit_id, user_id = %input.user_id, role = input.role.as_str(), "member added");
        self.events.publish(StoreEvent::MembersChanged(input.unit_id));
        Ok(mappers::member(model))
    }

    /// Lists a unit's members in join order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self, unit_id: UnitId) -> Result<Vec<Member>, StoreError> {
        let rows = unit_members::Entity::find()
            .filter(unit_members::Column::UnitId.eq(unit_id.into_inner()))
            .order_by_asc(unit_members::Column::JoinedAt)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(mappers::member).collect())
    }

    async fn find(&self, member_id: MemberId) -> Result<unit_members::Model, StoreError> {
        let id = member_id.into_inner();
        unit_members::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(StoreError::not_found("Member", id))
    }

    /// Replaces a member's contribution settings.
    ///
    /// Both field groups are rewritten so the inactive one is cleared. An
    /// end date submitted with a share contribution is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid, the member is not found
    /// or the database operation fails.
    pub async fn update_contribution(
        &self,
        member_id: MemberId,
        update: &MemberUpdate,
    ) -> Result<Member, StoreError> {
        let (config, end_date) = validate_member_update(update)?;
        let raw = RawContribution::from_config(&config);

        let mut model = self.find(member_id).await?.into_active_model();
        model.contribution_type = Set(raw.contribution_type);
        model.share_percentage = Set(raw.share_percentage);
        model.fixed_amount = Set(raw.fixed_amount);
        model.contribution_period = Set(raw.contribution_period);
        model.contribution_end_date = Set(end_date);
        let updated = mappers::member(model.update(&self.db).await?);

        info!(
            %member_id,
            unit_id = %updated.unit_id,
            contribution = config.type_tag(),
            "member contribution updated"
        );
        self.events.publish(StoreEvent::MembersChanged(updated.unit_id));
        Ok(updated)
    }

    /// Changes a member's role.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is not found or the database operation
    /// fails.
    pub async fn set_role(&self, member_id: MemberId, role: MemberRole) -> Result<Member, StoreError> {
        let mut model = self.find(member_id).await?.into_active_model();
        model.role = Set(role.as_str().to_string());
        let updated = mappers::member(model.update(&self.db).await?);
        self.events.publish(StoreEvent::MembersChanged(updated.unit_id));
        Ok(updated)
    }

    /// Removes a member from their unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the member is not found or the database operation
    /// fails.
    pub async fn remove(&self, member_id: MemberId) -> Result<(), StoreError> {
        let model = self.find(member_id).await?;
        unit_members::Entity::delete_by_id(model.id)
            .exec(&self.db)
            .await?;
        info!(%member_id, unit_id = %model.unit_id, "member removed");
        self.events
            .publish(StoreEvent::MembersChanged(model.unit_id.into()));
        Ok(())
    }
}
