//! # Adapters Layer
//!
//! Implementations of the outbound ports plus the in-memory host harness.
//!
//! - `memory`: `InMemoryKVStore`, ordered in-memory store
//! - `buffered`: `BufferedKVStore`, transaction write buffer
//! - `ledger`: `StoreBackedAssetLedger`
//! - `address`: `HexAddressCodec`
//! - `host`: `InMemoryLedgerHost`

pub mod address;
pub mod buffered;
pub mod host;
pub mod ledger;
pub mod memory;

pub use address::{HexAddressCodec, ADDRESS_LEN};
pub use buffered::BufferedKVStore;
pub use host::InMemoryLedgerHost;
pub use ledger::{module_account, StoreBackedAssetLedger};
pub use memory::InMemoryKVStore;
