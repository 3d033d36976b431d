//! Share fractions and expected amounts.

use rust_decimal::Decimal;

use crate::member::{ContributionConfig, Contributor};

/// Allocation arithmetic.
pub struct AllocationEngine;

impl AllocationEngine {
    /// A member's normalized monthly contribution, independent of everyone
    /// else.
    #[must_use]
    pub fn monthly_implied_amount<C: Contributor>(member: &C, reference_rent: Decimal) -> Decimal {
        member.contribution().monthly_implied_amount(reference_rent)
    }

    /// Fraction of a pooled amount attributed to `member`.
    ///
    /// Share members return their own percentage / 100, never rebalanced
    /// against the group. Fixed members get their implied amount over the sum
    /// of every member's implied amount (share members included), or 0 when
    /// that sum is not positive.
    #[must_use]
    pub fn share_fraction<C: Contributor>(
        member: &C,
        all_members: &[C],
        reference_rent: Decimal,
    ) -> Decimal {
        match *member.contribution() {
            ContributionConfig::Share { percentage } => percentage / Decimal::ONE_HUNDRED,
            ContributionConfig::Fixed { .. } => {
                let total: Decimal = all_members
                    .iter()
                    .map(|m| Self::monthly_implied_amount(m, reference_rent))
                    .sum();
                if total <= Decimal::ZERO {
                    return Decimal::ZERO;
                }
                Self::monthly_implied_amount(member, reference_rent) / total
            }
        }
    }

    /// Amount `member` is expected to contribute towards `monthly_total`.
    ///
    /// Fixed members owe their implied amount whatever the total. Share
    /// members owe their fraction of `monthly_total`.
    #[must_use]
    pub fn expected_amount<C: Contributor>(
        member: &C,
        all_members: &[C],
        monthly_total: Decimal,
        reference_rent: Decimal,
    ) -> Decimal {
        if member.contribution().is_fixed() {
            return Self::monthly_implied_amount(member, reference_rent);
        }
        Self::share_fraction(member, all_members, reference_rent) * monthly_total
    }

    /// Sum of every member's expected amount against the reference rent.
    ///
    /// Second step of the monthly total fallback chain.
    #[must_use]
    pub fn expected_from_contributions<C: Contributor>(
        all_members: &[C],
        reference_rent: Decimal,
    ) -> Decimal {
        all_members
            .iter()
            .map(|m| Self::expected_amount(m, all_members, reference_rent, reference_rent))
            .sum()
    }

    /// `paid - expected`. Positive means the member is owed money.
    #[must_use]
    pub fn balance(paid: Decimal, expected: Decimal) -> Decimal {
        paid - expected
    }
}
