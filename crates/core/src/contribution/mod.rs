//! Ad-hoc contribution requests: one member asks everyone to chip in.

pub mod error;
pub mod service;
pub mod types;


pub use error::ContributionError;
pub use service::ContributionService;
pub use types::{
    Contribution, ContributionPayment, ContributionProgress, ContributionStatus, NewContribution,
    NewContributionPayment,
};
