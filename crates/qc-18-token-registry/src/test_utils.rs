use crate::adapters::{
    HexAddressCodec, InMemoryKVStore, InMemoryLedgerHost, StoreBackedAssetLedger,
};
use crate::domain::errors::StoreError;
use crate::domain::messages::{MsgCreateToken, MsgDeleteToken, MsgUpdateToken};
use crate::domain::value_objects::RegistryConfig;
use crate::ports::outbound::{BatchOperation, KeyValueStore, KvIter};
use crate::service::TokenRegistry;

pub const CREATOR: &str = "0x5369676e6572416464725f5f5f5f5f5f5f5f5f5f";
pub const OTHER: &str = "0x556e617574686f72697a6564416464725f5f5f5f";

pub type TestRegistry = TokenRegistry<StoreBackedAssetLedger, HexAddressCodec>;

pub fn make_registry() -> TestRegistry {
    make_registry_with(StoreBackedAssetLedger::new())
}

pub fn make_registry_with(ledger: StoreBackedAssetLedger) -> TestRegistry {
    TokenRegistry::new(RegistryConfig::default(), ledger, HexAddressCodec::new()).unwrap()
}

pub fn make_host() -> InMemoryLedgerHost {
    InMemoryLedgerHost::new()
}

pub fn create_msg(symbol: &str, supply: &str) -> MsgCreateToken {
    MsgCreateToken::new(CREATOR, format!("{} token", symbol), symbol, "6", supply, "")
}

pub fn update_msg(creator: &str, id: u64, symbol: &str) -> MsgUpdateToken {
    MsgUpdateToken::new(creator, id, "Renamed", symbol, "8", "42", "updated")
}

pub fn delete_msg(creator: &str, id: u64) -> MsgDeleteToken {
    MsgDeleteToken::new(creator, id)
}

/// Store whose scans yield `ok_entries` pairs and then an I/O error.
pub struct FailingScanStore {
    pub inner: InMemoryKVStore,
    pub ok_entries: usize,
}

impl KeyValueStore for FailingScanStore {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        self.inner.get(key)
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError> {
        self.inner.delete(key)
    }

    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError> {
        self.inner.atomic_batch_write(operations)
    }

    fn exists(&self, key: &[u8]) -> Result<bool, StoreError> {
        self.inner.exists(key)
    }

    fn range_from<'a>(&'a self, prefix: &[u8], start: &[u8]) -> Result<KvIter<'a>, StoreError> {
        let healthy = self.inner.range_from(prefix, start)?.take(self.ok_entries);
        let failure = std::iter::once(Err(StoreError::IOError {
            message: "scan interrupted".to_string(),
        }));
        Ok(Box::new(healthy.chain(failure)))
    }
}
