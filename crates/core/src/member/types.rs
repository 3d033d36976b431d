//! Member and contribution data types.

use chrono::{DateTime, NaiveDate, Utc};
use coliving_shared::types::{Currency, MemberId, UnitId, UserId, format_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::MemberError;
use crate::period::format_date;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Billing period of a fixed contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionPeriod {
    /// Amount is due every month.
    #[default]
    Monthly,
    /// Amount covers a whole year.
    Yearly,
}

impl ContributionPeriod {
    /// Stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Short suffix used in labels (`mo` / `yr`).
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "mo",
            Self::Yearly => "yr",
        }
    }
}

impl std::str::FromStr for ContributionPeriod {
    type Err = MemberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(MemberError::UnknownContributionPeriod(other.to_string())),
        }
    }
}

/// How a member contributes to the unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContributionConfig {
    /// A self-declared percentage of the unit's rent and of pooled totals.
    Share {
        /// Percentage, nominally `0..=100`.
        percentage: Decimal,
    },
    /// A fixed amount per period.
    Fixed {
        /// Amount per period.
        amount: Decimal,
        /// Period the amount covers.
        period: ContributionPeriod,
    },
}

impl Default for ContributionConfig {
    fn default() -> Self {
        Self::Share {
            percentage: Decimal::ZERO,
        }
    }
}

impl ContributionConfig {
    /// Creates a share contribution.
    #[must_use]
    pub const fn share(percentage: Decimal) -> Self {
        Self::Share { percentage }
    }

    /// Creates a monthly fixed contribution.
    #[must_use]
    pub const fn fixed_monthly(amount: Decimal) -> Self {
        Self::Fixed {
            amount,
            period: ContributionPeriod::Monthly,
        }
    }

    /// Creates a yearly fixed contribution.
    #[must_use]
    pub const fn fixed_yearly(amount: Decimal) -> Self {
        Self::Fixed {
            amount,
            period: ContributionPeriod::Yearly,
        }
    }

    /// Returns true for fixed contributions.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed { .. })
    }

    /// Stored type tag (`share` / `fixed`).
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Share { .. } => "share",
            Self::Fixed { .. } => "fixed",
        }
    }

    /// Normalized monthly equivalent of this contribution.
    ///
    /// Share: `percentage / 100 * reference_rent`. Fixed: the amount, divided
    /// by 12 for yearly contributions.
    #[must_use]
    pub fn monthly_implied_amount(&self, reference_rent: Decimal) -> Decimal {
        match *self {
            Self::Share { percentage } => percentage / Decimal::ONE_HUNDRED * reference_rent,
            Self::Fixed {
                amount,
                period: ContributionPeriod::Monthly,
            } => amount,
            Self::Fixed {
                amount,
                period: ContributionPeriod::Yearly,
            } => amount / MONTHS_PER_YEAR,
        }
    }

    /// Display label: `60%` or `$400.00/mo`, with ` until 5 Jan 2026` appended
    /// when an end date is given and `short` is false.
    #[must_use]
    pub fn label(&self, currency: Currency, end_date: Option<NaiveDate>, short: bool) -> String {
        let base = match *self {
            Self::Share { percentage } => format!("{}%", percentage.normalize()),
            Self::Fixed { amount, period } => {
                format!("{}/{}", format_money(amount, currency), period.suffix())
            }
        };
        match end_date {
            Some(end) if !short => format!("{base} until {}", format_date(end)),
            _ => base,
        }
    }

    /// Label used in exported reports: `60%` or `400 /mo`.
    #[must_use]
    pub fn report_label(&self) -> String {
        match *self {
            Self::Share { percentage } => format!("{}%", percentage.normalize()),
            Self::Fixed { amount, period } => {
                format!("{} /{}", amount.normalize(), period.suffix())
            }
        }
    }
}

/// Contribution fields as stored: a type tag plus two nullable field groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContribution {
    /// `share` or `fixed`; missing means `share`.
    pub contribution_type: Option<String>,
    /// Percentage for share contributions.
    pub share_percentage: Option<Decimal>,
    /// Amount for fixed contributions.
    pub fixed_amount: Option<Decimal>,
    /// `monthly` or `yearly`; missing means `monthly`.
    pub contribution_period: Option<String>,
}

impl RawContribution {
    /// Fills defaults and selects the active field group.
    ///
    /// Missing or empty type means share, missing numbers are 0 and any
    /// period other than `yearly` is monthly. Never fails.
    #[must_use]
    pub fn normalize(&self) -> ContributionConfig {
        match self.contribution_type.as_deref() {
            Some("fixed") => ContributionConfig::Fixed {
                amount: self.fixed_amount.unwrap_or_default(),
                period: match self.contribution_period.as_deref() {
                    Some("yearly") => ContributionPeriod::Yearly,
                    _ => ContributionPeriod::Monthly,
                },
            },
            _ => ContributionConfig::Share {
                percentage: self.share_percentage.unwrap_or_default(),
            },
        }
    }

    /// Strict variant of [`normalize`](Self::normalize) used on write paths:
    /// unknown tags are rejected instead of defaulted.
    ///
    /// # Errors
    ///
    /// Returns `MemberError::UnknownContributionType` or
    /// `MemberError::UnknownContributionPeriod` for unrecognised tags.
    pub fn parse(&self) -> Result<ContributionConfig, MemberError> {
        match self.contribution_type.as_deref() {
            None | Some("" | "share" | "fixed") => {}
            Some(other) => return Err(MemberError::UnknownContributionType(other.to_string())),
        }
        if let Some(period) = self.contribution_period.as_deref().filter(|p| !p.is_empty()) {
            period.parse::<ContributionPeriod>()?;
        }
        Ok(self.normalize())
    }

    /// Flattens a config back into the stored shape. The inactive field group
    /// is cleared.
    #[must_use]
    pub fn from_config(config: &ContributionConfig) -> Self {
        match *config {
            ContributionConfig::Share { percentage } => Self {
                contribution_type: Some("share".to_string()),
                share_percentage: Some(percentage),
                fixed_amount: None,
                contribution_period: None,
            },
            ContributionConfig::Fixed { amount, period } => Self {
                contribution_type: Some("fixed".to_string()),
                share_percentage: None,
                fixed_amount: Some(amount),
                contribution_period: Some(period.as_str().to_string()),
            },
        }
    }
}

/// Role of a member within a unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    /// Collects payments and holds the lease.
    MasterTenant,
    /// Everyone else.
    #[default]
    CoTenant,
}

impl MemberRole {
    /// Maps a stored role tag. `owner` is a legacy alias of master tenant;
    /// anything unrecognised (including legacy `renter`) is a co-tenant.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "master_tenant" | "owner" => Self::MasterTenant,
            _ => Self::CoTenant,
        }
    }

    /// Stored tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MasterTenant => "master_tenant",
            Self::CoTenant => "co_tenant",
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MasterTenant => "Master tenant",
            Self::CoTenant => "Co-tenant",
        }
    }
}

/// A user's membership of a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Membership ID.
    pub id: MemberId,
    /// Unit the membership belongs to.
    pub unit_id: UnitId,
    /// Member's user identity.
    pub user_id: UserId,
    /// Profile name, when known.
    pub display_name: Option<String>,
    /// Role within the unit.
    pub role: MemberRole,
    /// Contribution scheme.
    pub contribution: ContributionConfig,
    /// Last day the contribution applies, if set.
    pub contribution_end_date: Option<NaiveDate>,
    /// When the member joined.
    pub joined_at: DateTime<Utc>,
}

impl Member {
    /// Profile name or `Unknown`.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    /// Returns true for master tenants.
    #[must_use]
    pub fn is_master_tenant(&self) -> bool {
        self.role == MemberRole::MasterTenant
    }

    /// Returns true if the contribution ended before `date`.
    #[must_use]
    pub fn contribution_ended_before(&self, date: NaiveDate) -> bool {
        self.contribution_end_date.is_some_and(|end| end < date)
    }
}

/// Anything that carries a contribution config.
///
/// The allocation functions are generic over this so they work on full
/// member records and on bare configs alike.
pub trait Contributor {
    /// The contribution scheme.
    fn contribution(&self) -> &ContributionConfig;
}

impl Contributor for ContributionConfig {
    fn contribution(&self) -> &ContributionConfig {
        self
    }
}

impl Contributor for Member {
    fn contribution(&self) -> &ContributionConfig {
        &self.contribution
    }
}

impl<T: Contributor + ?Sized> Contributor for &T {
    fn contribution(&self) -> &ContributionConfig {
        (**self).contribution()
    }
}
