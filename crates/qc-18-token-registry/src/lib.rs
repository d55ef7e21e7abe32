//! # QC-18 Token Registry
//!
//! Schema-managed registry of user-created tokens with ownership-gated
//! mutation and initial supply minting.
//!
//! **Subsystem ID:** 18
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! - Allocate unique, never-reused token ids from a persisted sequence
//! - Let only a token's creator update or delete it
//! - Keep symbols unique and mint each new token's supply to its creator
//! - Export and import the complete registry state deterministically
//!
//! ## Request Flow
//!
//! ```text
//! Ledger Host (auth, commit/rollback)
//!        │ TxContext { store, events }
//!        ▼
//! ┌────────────────┐   ┌──────────────┐   ┌──────────────┐
//! │ TokenRegistry  │──▶│ Schema Store │──▶│ KeyValueStore│
//! │ business rules │   │ Map/Item/Seq │   │ (host-owned) │
//! └───────┬────────┘   └──────────────┘   └──────────────┘
//!         │ create only
//!         ▼
//!   AssetLedger: mint → send to creator
//! ```
//!
//! ## Invariants
//!
//! | Rule | Enforcement |
//! |------|-------------|
//! | Ids unique and monotonic | `Sequence` in the transaction store |
//! | Symbols unique | `find_token_by_symbol` before create |
//! | Owner-only mutation | stored `creator` vs caller |
//! | All-or-nothing | host discards store writes and events on `Err` |
//! | Collision-free keys | `SchemaBuilder::build` rejects overlapping prefixes |
//!
//! ## Module Structure
//!
//! ```text
//! qc-18-token-registry/
//! ├── domain/     # Token, Params, GenesisState, messages, errors
//! ├── schema/     # Map, Item, Sequence, pagination, SchemaBuilder
//! ├── ports/      # TokenMsgServer, TokenQueryServer, KeyValueStore, AssetLedger
//! ├── adapters/   # in-memory store, buffered store, ledger, host harness
//! ├── events/     # Event, EventManager, typed payloads
//! └── service/    # TokenRegistry
//! ```

#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod events;
pub mod ports;
pub mod schema;
pub mod service;
pub mod telemetry;

#[cfg(test)]
mod test_utils;

// Re-exports
pub use adapters::{
    BufferedKVStore, HexAddressCodec, InMemoryKVStore, InMemoryLedgerHost, StoreBackedAssetLedger,
};
pub use domain::{
    Coin, GenesisState, LedgerError, MsgCreateToken, MsgCreateTokenResponse, MsgDeleteToken,
    MsgUpdateParams, MsgUpdateToken, Params, RegistryConfig, RegistryError, RegistryErrorKind,
    RegistryErrorPayload, SchemaError, StoreError, Token, TokenPage,
};
pub use events::{Event, EventManager};
pub use ports::{
    AddressCodec, AssetLedger, BatchOperation, KeyValueStore, TokenMsgServer, TokenQueryServer,
};
pub use schema::{PageRequest, PageResponse};
pub use service::{TokenRegistry, TxContext};
pub use telemetry::{init_logging, TelemetryConfig, TelemetryError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
