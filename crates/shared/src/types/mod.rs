//! Common types used across the application.

pub mod country;
pub mod id;
pub mod money;

pub use country::{COUNTRIES, Country, country_by_code, currency_for_country};
pub use id::*;
pub use money::{Currency, Money, format_money};
