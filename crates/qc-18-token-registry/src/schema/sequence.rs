//! Persisted monotonic id allocator.

use super::collections::Item;
use crate::domain::errors::StoreError;
use crate::ports::outbound::KeyValueStore;

/// Monotonic counter stored as an `Item<u64>`. Missing reads as 0.
///
/// The value lives in the transaction's store, never in process memory, so
/// a discarded transaction also discards its allocations.
#[derive(Debug, Clone)]
pub struct Sequence {
    item: Item<u64>,
}

impl Sequence {
    pub(crate) fn new(item: Item<u64>) -> Self {
        Self { item }
    }

    pub fn name(&self) -> &'static str {
        self.item.name()
    }

    /// Current value without advancing.
    pub fn peek(&self, store: &dyn KeyValueStore) -> Result<u64, StoreError> {
        Ok(self.item.get(store)?.unwrap_or(0))
    }

    /// Return the current value and persist value + 1.
    ///
    /// If the write fails no id is handed out.
    pub fn next(&self, store: &mut dyn KeyValueStore) -> Result<u64, StoreError> {
        let current = self.peek(&*store)?;
        let advanced = current
            .checked_add(1)
            .ok_or(StoreError::SequenceOverflow {
                collection: self.item.name(),
            })?;
        self.item.set(store, &advanced)?;
        Ok(current)
    }

    /// Overwrite the counter. Genesis import only.
    pub fn set(&self, store: &mut dyn KeyValueStore, value: u64) -> Result<(), StoreError> {
        self.item.set(store, &value)
    }
}
