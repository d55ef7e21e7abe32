use crate::events::{Event, EventManager};
use crate::ports::outbound::KeyValueStore;

/// Transaction scope supplied by the Ledger Host.
///
/// The registry reads and writes only through `store` and emits only into
/// `events`. Committing or discarding both is the host's job.
pub struct TxContext<'a> {
    pub store: &'a mut dyn KeyValueStore,
    pub events: &'a mut EventManager,
}

impl<'a> TxContext<'a> {
    pub fn new(store: &'a mut dyn KeyValueStore, events: &'a mut EventManager) -> Self {
        Self { store, events }
    }

    pub fn emit(&mut self, event: impl Into<Event>) {
        self.events.emit(event);
    }
}
