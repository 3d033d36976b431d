//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Writes validate with the core rules first and publish a `StoreEvent` once
//! they succeed.

pub mod balance_payment;
pub mod contribution;
pub mod expected;
pub mod expense;
pub mod member;
pub mod snapshot;
pub mod unit;

pub use balance_payment::BalancePaymentRepository;
pub use contribution::ContributionRepository;
pub use expected::{ExpectedExpenseRepository, TemplateSaveOutcome};
pub use expense::ExpenseRepository;
pub use member::{MemberRepository, NewMemberInput};
pub use snapshot::SnapshotRepository;
pub use unit::UnitRepository;
