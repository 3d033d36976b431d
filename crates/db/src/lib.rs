//! Record store for Coliving.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repositories that validate with `coliving-core` before writing
//! - Snapshot loading for the core services
//! - Change events published after writes
//! - Database migrations

pub mod entities;
pub mod error;
pub mod events;
pub mod mappers;
pub mod migration;
pub mod repositories;

pub use error::StoreError;
pub use events::{EventBus, StoreEvent};
pub use repositories::{
    BalancePaymentRepository, ContributionRepository, ExpectedExpenseRepository,
    ExpenseRepository, MemberRepository, SnapshotRepository, UnitRepository,
};

use std::time::Duration;

use coliving_shared::config::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool sized from `config`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    Database::connect(options).await
}

/// Every repository, sharing one connection pool and one event bus.
#[derive(Debug, Clone)]
pub struct Store {
    /// Units.
    pub units: UnitRepository,
    /// Members.
    pub members: MemberRepository,
    /// Expenses.
    pub expenses: ExpenseRepository,
    /// Balance payments.
    pub balance_payments: BalancePaymentRepository,
    /// Expected expense templates and entries.
    pub expected: ExpectedExpenseRepository,
    /// Contributions.
    pub contributions: ContributionRepository,
    /// Snapshot loading.
    pub snapshots: SnapshotRepository,
    events: EventBus,
}

impl Store {
    /// Wires every repository to `db` and a fresh event bus.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        let events = EventBus::default();
        Self {
            units: UnitRepository::new(db.clone(), events.clone()),
            members: MemberRepository::new(db.clone(), events.clone()),
            expenses: ExpenseRepository::new(db.clone(), events.clone()),
            balance_payments: BalancePaymentRepository::new(db.clone(), events.clone()),
            expected: ExpectedExpenseRepository::new(db.clone(), events.clone()),
            contributions: ContributionRepository::new(db.clone(), events.clone()),
            snapshots: SnapshotRepository::new(db),
            events,
        }
    }

    /// Subscribes to change events from every repository.
    #[must_use]
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
