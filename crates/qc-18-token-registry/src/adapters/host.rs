//! # In-Memory Ledger Host
//!
//! Test harness standing in for the Ledger Host: it owns the committed
//! store and event log, and runs each operation as one transaction.
//!
//! ```text
//! execute(op)
//!   ├── BufferedKVStore over the committed store
//!   ├── fresh EventManager
//!   ├── op(&mut TxContext)
//!   ├── Ok  → commit writes, append events
//!   └── Err → discard writes and events
//! ```

use super::buffered::BufferedKVStore;
use super::memory::InMemoryKVStore;
use crate::domain::errors::RegistryError;
use crate::events::{Event, EventManager};
use crate::service::TxContext;
use tracing::warn;

#[derive(Debug, Default)]
pub struct InMemoryLedgerHost {
    store: InMemoryKVStore,
    events: Vec<Event>,
}

impl InMemoryLedgerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing committed store.
    pub fn with_store(store: InMemoryKVStore) -> Self {
        Self {
            store,
            events: Vec::new(),
        }
    }

    /// Run `op` as one all-or-nothing transaction.
    pub fn execute<T, F>(&mut self, op: F) -> Result<T, RegistryError>
    where
        F: FnOnce(&mut TxContext<'_>) -> Result<T, RegistryError>,
    {
        let mut buffered = BufferedKVStore::new(&mut self.store);
        let mut events = EventManager::new();

        let result = {
            let mut ctx = TxContext::new(&mut buffered, &mut events);
            op(&mut ctx)
        };

        match result {
            Ok(value) => {
                buffered.commit()?;
                self.events.extend(events.into_events());
                Ok(value)
            }
            Err(e) => {
                buffered.discard();
                warn!(error = %e, "[qc-18] Transaction rolled back");
                Err(e)
            }
        }
    }

    /// Committed state.
    pub fn store(&self) -> &InMemoryKVStore {
        &self.store
    }

    /// Events of every committed transaction, in order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Drain the event log.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
