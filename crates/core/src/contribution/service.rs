//! Contribution progress and payment rules.

use coliving_shared::types::UserId;
use rust_decimal::Decimal;

use super::error::ContributionError;
use super::types::{
    Contribution, ContributionProgress, ContributionStatus, NewContribution, NewContributionPayment,
};

const MIN_AMOUNT: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Contribution logic.
pub struct ContributionService;

impl ContributionService {
    /// Share of members who have paid.
    #[must_use]
    pub fn progress(contribution: &Contribution, member_count: usize) -> ContributionProgress {
        let paid_count = contribution.payments.len();
        let percent = if member_count == 0 {
            Decimal::ZERO
        } else {
            Decimal::from(paid_count) / Decimal::from(member_count) * Decimal::ONE_HUNDRED
        };
        ContributionProgress {
            paid_count,
            member_count,
            percent,
        }
    }

    /// Amount each member is asked for, `None` without members.
    #[must_use]
    pub fn suggested_share(contribution: &Contribution, member_count: usize) -> Option<Decimal> {
        (member_count > 0).then(|| contribution.amount / Decimal::from(member_count))
    }

    /// Returns true if `user_id` already paid.
    #[must_use]
    pub fn has_paid(contribution: &Contribution, user_id: UserId) -> bool {
        contribution.payments.iter().any(|p| p.user_id == user_id)
    }

    /// Checks a new request.
    ///
    /// # Errors
    ///
    /// Returns `ContributionError::NonPositiveAmount` for amounts under 0.01
    /// and `ContributionError::EmptyReason` for a blank reason.
    pub fn validate_new(input: &NewContribution) -> Result<(), ContributionError> {
        if input.amount < MIN_AMOUNT {
            return Err(ContributionError::NonPositiveAmount(input.amount));
        }
        if input.reason.trim().is_empty() {
            return Err(ContributionError::EmptyReason);
        }
        Ok(())
    }

    /// Checks that a payment may be recorded: the request is still open and
    /// the payer has not paid yet. Status is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ContributionError::AlreadyCollected`,
    /// `ContributionError::AlreadyPaid` or
    /// `ContributionError::NonPositiveAmount`.
    pub fn validate_payment(
        contribution: &Contribution,
        payment: &NewContributionPayment,
    ) -> Result<(), ContributionError> {
        if contribution.status == ContributionStatus::Collected {
            return Err(ContributionError::AlreadyCollected);
        }
        if Self::has_paid(contribution, payment.user_id) {
            return Err(ContributionError::AlreadyPaid(payment.user_id));
        }
        if payment.amount <= Decimal::ZERO {
            return Err(ContributionError::NonPositiveAmount(payment.amount));
        }
        Ok(())
    }
}
