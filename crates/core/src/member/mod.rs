//! Unit members and their contribution schemes.
//!
//! A member either declares a percentage of the unit's rent (`Share`) or a
//! fixed amount per month or year (`Fixed`). Stored rows carry both field
//! groups as nullable columns; [`RawContribution::normalize`] turns them into
//! a [`ContributionConfig`] once, at the boundary.

pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::MemberError;
pub use types::{
    ContributionConfig, ContributionPeriod, Contributor, Member, MemberRole, RawContribution,
};
pub use validation::{MemberUpdate, validate_member_update};
