//! Contribution data types.

use chrono::{DateTime, Utc};
use coliving_shared::types::{ContributionId, ContributionPaymentId, UnitId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ContributionError;
use crate::expense::PaymentMode;

/// Collection status. Set by hand, never derived from payments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionStatus {
    /// Newly requested.
    #[default]
    Pending,
    /// Some members paid.
    PartiallyCollected,
    /// Done.
    Collected,
}

impl ContributionStatus {
    /// Stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PartiallyCollected => "partially_collected",
            Self::Collected => "collected",
        }
    }

    /// Badge label; anything not collected shows as pending.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collected => "Collected",
            Self::Pending | Self::PartiallyCollected => "Pending",
        }
    }
}

impl std::str::FromStr for ContributionStatus {
    type Err = ContributionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "partially_collected" => Ok(Self::PartiallyCollected),
            "collected" => Ok(Self::Collected),
            other => Err(ContributionError::UnknownStatus(other.to_string())),
        }
    }
}

/// A member's payment against a contribution request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionPayment {
    /// Payment ID.
    pub id: ContributionPaymentId,
    /// Request paid.
    pub contribution_id: ContributionId,
    /// Paying user.
    pub user_id: UserId,
    /// Payer's profile name, when known.
    pub payer_name: Option<String>,
    /// Amount paid.
    pub amount: Decimal,
    /// When it was paid.
    pub paid_at: DateTime<Utc>,
    /// How it was paid.
    pub payment_mode: Option<PaymentMode>,
    /// Receipt location.
    pub receipt_url: Option<String>,
}

/// A request for every member to chip in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    /// Request ID.
    pub id: ContributionId,
    /// Owning unit.
    pub unit_id: UnitId,
    /// Total amount requested.
    pub amount: Decimal,
    /// What it is for.
    pub reason: String,
    /// Requesting user.
    pub requested_by: UserId,
    /// Requester's profile name, when known.
    pub requester_name: Option<String>,
    /// Collection status.
    pub status: ContributionStatus,
    /// When it was requested.
    pub created_at: DateTime<Utc>,
    /// Payments received so far.
    pub payments: Vec<ContributionPayment>,
}

/// A contribution request as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContribution {
    /// Owning unit.
    pub unit_id: UnitId,
    /// Amount.
    pub amount: Decimal,
    /// Reason.
    pub reason: String,
    /// Requesting user.
    pub requested_by: UserId,
}

/// A payment as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContributionPayment {
    /// Paying user.
    pub user_id: UserId,
    /// Amount.
    pub amount: Decimal,
    /// Payment mode.
    pub payment_mode: Option<PaymentMode>,
    /// Receipt location.
    pub receipt_url: Option<String>,
}

/// How far along collection is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContributionProgress {
    /// Number of payments recorded.
    pub paid_count: usize,
    /// Members in the unit.
    pub member_count: usize,
    /// `paid_count / member_count * 100`, 0 without members.
    pub percent: Decimal,
}
