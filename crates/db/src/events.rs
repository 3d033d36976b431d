//! Change notifications.
//!
//! Repositories publish a [`StoreEvent`] after every successful write so
//! readers holding derived figures know which unit to reload.

use coliving_shared::types::UnitId;
use tokio::sync::broadcast;

const DEFAULT_CAPACITY: usize = 64;

/// What changed in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// Unit fields changed, or the unit was created or deleted.
    UnitChanged(UnitId),
    /// Membership or contribution settings changed.
    MembersChanged(UnitId),
    /// An expense was added or removed.
    ExpensesChanged(UnitId),
    /// Templates or materialized entries changed.
    ExpectedExpensesChanged(UnitId),
    /// A balance payment was recorded.
    BalancePaymentsChanged(UnitId),
    /// A contribution request or payment changed.
    ContributionsChanged(UnitId),
}

impl StoreEvent {
    /// Unit affected by the change.
    #[must_use]
    pub const fn unit_id(self) -> UnitId {
        match self {
            Self::UnitChanged(id)
            | Self::MembersChanged(id)
            | Self::ExpensesChanged(id)
            | Self::ExpectedExpensesChanged(id)
            | Self::BalancePaymentsChanged(id)
            | Self::ContributionsChanged(id) => id,
        }
    }
}

/// Broadcast channel for [`StoreEvent`]s.
///
/// Cloning shares the channel. Publishing without subscribers is fine.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    /// Creates a bus buffering up to `capacity` events per slow receiver.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Subscribes to events published from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event.
    pub fn publish(&self, event: StoreEvent) {
        match self.sender.send(event) {
            Ok(receivers) => tracing::trace!(?event, receivers, "store event published"),
            Err(_) => tracing::trace!(?event, "store event dropped, no subscribers"),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
