//! # Outbound Ports (Driven Ports)
//!
//! Dependencies the Token Registry requires from its host.
//!
//! - `KeyValueStore`: the host's transaction-scoped raw store
//! - `AssetLedger`: fungible balances, touched only on token creation
//! - `AddressCodec`: account reference validation

use crate::domain::entities::Coin;
use crate::domain::errors::{AddressError, LedgerError, StoreError};
use primitive_types::U256;

/// A raw key-value pair.
pub type KvPair = (Vec<u8>, Vec<u8>);

/// Lazy, ascending iterator over raw pairs.
///
/// A store that fails mid-scan yields an `Err` instead of ending early.
pub type KvIter<'a> = Box<dyn Iterator<Item = Result<KvPair, StoreError>> + 'a>;

/// Abstract interface for ordered key-value store operations.
///
/// Production: the Ledger Host's transaction-scoped store
/// Testing: `InMemoryKVStore`, `BufferedKVStore` (adapters)
pub trait KeyValueStore: Send + Sync {
    /// Get a value by key.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;

    /// Put a single key-value pair.
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&mut self, key: &[u8]) -> Result<(), StoreError>;

    /// Execute an atomic batch write.
    ///
    /// Either ALL operations in the batch are applied, or NONE are.
    fn atomic_batch_write(&mut self, operations: Vec<BatchOperation>) -> Result<(), StoreError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StoreError>;

    /// Iterate keys under `prefix` that are `>= start`, in ascending byte
    /// order. A `start` below `prefix` behaves like `prefix`.
    fn range_from<'a>(&'a self, prefix: &[u8], start: &[u8]) -> Result<KvIter<'a>, StoreError>;

    /// Iterate every key under `prefix`.
    fn prefix_iter<'a>(&'a self, prefix: &[u8]) -> Result<KvIter<'a>, StoreError> {
        self.range_from(prefix, prefix)
    }
}

/// Batch operation for atomic writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOperation {
    /// Put a key-value pair.
    Put { key: Vec<u8>, value: Vec<u8> },
    /// Delete a key.
    Delete { key: Vec<u8> },
}

impl BatchOperation {
    /// Create a Put operation.
    pub fn put(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a Delete operation.
    pub fn delete(key: impl Into<Vec<u8>>) -> Self {
        BatchOperation::Delete { key: key.into() }
    }
}

/// Fungible asset ledger.
///
/// Every call receives the same transaction-scoped store the registry
/// writes to, so a host rollback undoes ledger effects too.
pub trait AssetLedger: Send + Sync {
    /// Create `coins` and credit them to the module account of `module`.
    fn mint_coins(
        &self,
        store: &mut dyn KeyValueStore,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError>;

    /// Move `coins` from the module account of `module` to `recipient`.
    fn send_coins_from_module_to_account(
        &self,
        store: &mut dyn KeyValueStore,
        module: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError>;

    /// Balance of `account` in `denom`. Unknown accounts hold zero.
    fn balance(
        &self,
        store: &dyn KeyValueStore,
        account: &str,
        denom: &str,
    ) -> Result<U256, LedgerError>;
}

/// Converts between textual account references and raw address bytes.
pub trait AddressCodec: Send + Sync {
    /// Parse and validate a textual account reference.
    fn string_to_bytes(&self, text: &str) -> Result<Vec<u8>, AddressError>;

    /// Render raw address bytes.
    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, AddressError>;
}
