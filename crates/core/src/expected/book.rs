//! In-memory set of expected entries with upsert semantics.

use std::collections::BTreeMap;

use coliving_shared::types::{ExpectedEntryId, UnitId};
use rust_decimal::Decimal;

use super::types::{EntryKey, ExpectedEntry, PlannedEntry};
use crate::period::MonthKey;

/// Expected entries keyed by (unit, month, category).
///
/// Mirrors the store's unique key so plans can be merged and inspected
/// without a database.
#[derive(Debug, Clone, Default)]
pub struct ExpectedEntryBook {
    entries: BTreeMap<EntryKey, ExpectedEntry>,
}

/// Counts from an upsert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpsertOutcome {
    /// Keys that were new.
    pub inserted: usize,
    /// Keys that already existed and were overwritten.
    pub updated: usize,
}

impl ExpectedEntryBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads stored entries. Later duplicates of a key replace earlier ones.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = ExpectedEntry>) -> Self {
        Self {
            entries: entries.into_iter().map(|e| (e.key(), e)).collect(),
        }
    }

    /// Inserts planned entries, overwriting the amount of existing keys.
    /// Existing entries keep their IDs.
    pub fn upsert(&mut self, planned: &[PlannedEntry]) -> UpsertOutcome {
        let mut outcome = UpsertOutcome::default();
        for plan in planned {
            if let Some(entry) = self.entries.get_mut(&plan.key) {
                entry.amount = plan.amount;
                outcome.updated += 1;
            } else {
                self.entries.insert(
                    plan.key,
                    ExpectedEntry {
                        id: ExpectedEntryId::new(),
                        unit_id: plan.key.unit_id,
                        month: plan.key.month,
                        category: plan.key.category,
                        amount: plan.amount,
                    },
                );
                outcome.inserted += 1;
            }
        }
        outcome
    }

    /// Sets the amount of the entry with `id`. Returns false if absent.
    pub fn set_amount(&mut self, id: ExpectedEntryId, amount: Decimal) -> bool {
        if let Some(entry) = self.entries.values_mut().find(|e| e.id == id) {
            entry.amount = amount;
            true
        } else {
            false
        }
    }

    /// Removes every entry of `unit_id` for `month`. Returns how many went.
    pub fn delete_month(&mut self, unit_id: UnitId, month: MonthKey) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|key, _| !(key.unit_id == unit_id && key.month == month));
        before - self.entries.len()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the book holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &ExpectedEntry> {
        self.entries.values()
    }

    /// Consumes the book, returning entries in key order.
    #[must_use]
    pub fn into_entries(self) -> Vec<ExpectedEntry> {
        self.entries.into_values().collect()
    }
}
