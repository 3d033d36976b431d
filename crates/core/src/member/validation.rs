//! Validation of member contribution settings before they are stored.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::error::MemberError;
use super::types::{ContributionConfig, RawContribution};

/// Contribution settings submitted for a member.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberUpdate {
    /// Contribution fields as entered.
    pub contribution: RawContribution,
    /// Requested end date.
    pub contribution_end_date: Option<NaiveDate>,
}

/// Validates a member update and returns the config and end date to store.
///
/// Share percentages must lie in `0..=100`, fixed amounts must not be
/// negative. The end date is only kept for fixed contributions.
///
/// # Errors
///
/// Returns a `MemberError` describing the first rule violated.
pub fn validate_member_update(
    update: &MemberUpdate,
) -> Result<(ContributionConfig, Option<NaiveDate>), MemberError> {
    let config = update.contribution.parse()?;
    match config {
        ContributionConfig::Share { percentage } => {
            if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
                return Err(MemberError::InvalidSharePercentage(percentage));
            }
            Ok((config, None))
        }
        ContributionConfig::Fixed { amount, .. } => {
            if amount < Decimal::ZERO {
                return Err(MemberError::NegativeFixedAmount(amount));
            }
            Ok((config, update.contribution_end_date))
        }
    }
}
