//! # Domain Errors
//!
//! Error types for the Token Registry subsystem.
//!
//! ## Layers
//!
//! - `StoreError`: raw key-value store and value codec failures
//! - `SchemaError`: collection layout problems detected at construction
//! - `LedgerError`: failures reported by the Asset Ledger
//! - `RegistryError`: everything the registry returns to the Ledger Host
//!
//! None of these are retried inside the registry. The host decides.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Key-value store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// I/O error during read/write.
    #[error("KV store I/O error: {message}")]
    IOError { message: String },

    /// Stored bytes could not be decoded (or a value could not be encoded).
    #[error("KV store codec error in {collection}: {message}")]
    Codec {
        collection: &'static str,
        message: String,
    },

    /// A key did not have the layout its collection expects.
    #[error("Malformed key in {collection}: {message}")]
    MalformedKey {
        collection: &'static str,
        message: String,
    },

    /// Sequence counter cannot be advanced further.
    #[error("Sequence {collection} exhausted")]
    SequenceOverflow { collection: &'static str },
}

/// Collection layout errors raised by `SchemaBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Two collections would share keys.
    #[error("Collection prefixes overlap: {first} ({first_prefix}) and {second} ({second_prefix})")]
    OverlappingPrefix {
        first: &'static str,
        first_prefix: String,
        second: &'static str,
        second_prefix: String,
    },

    /// The same collection name was registered twice.
    #[error("Duplicate collection name: {name}")]
    DuplicateName { name: &'static str },

    /// A collection was registered without a prefix.
    #[error("Empty prefix for collection {name}")]
    EmptyPrefix { name: &'static str },
}

/// Errors reported by the Asset Ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Module account does not hold enough of a denomination.
    #[error("Insufficient funds in {account}: required {required}{denom}, available {available}{denom}")]
    InsufficientFunds {
        account: String,
        denom: String,
        required: String,
        available: String,
    },

    /// Minting was refused by the ledger.
    #[error("Failed to mint coins: {0}")]
    MintFailed(String),

    /// Transfer was refused by the ledger.
    #[error("Failed to send coins: {0}")]
    SendFailed(String),

    /// Balance arithmetic overflowed.
    #[error("Balance overflow for {denom}")]
    Overflow { denom: String },

    /// The ledger's own storage failed.
    #[error("Ledger storage error: {0}")]
    Store(#[from] StoreError),
}

/// Account reference rejected by an `AddressCodec`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("empty address string is not allowed")]
    Empty,

    #[error("missing 0x prefix")]
    MissingPrefix,

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

/// Errors returned by registry operations.
///
/// Each variant maps to one [`RegistryErrorKind`] so the Ledger Host can
/// tell failure classes apart without parsing messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Malformed account reference.
    #[error("Invalid address {address:?}: {reason}")]
    InvalidAddress { address: String, reason: String },

    /// Supply is not a non-negative integer string.
    #[error("Invalid total supply: {value:?}")]
    InvalidAmount { value: String },

    /// Symbol cannot be used as a ledger denomination.
    #[error("Invalid token symbol for denom: {denom:?}")]
    InvalidDenom { denom: String },

    /// Symbol already taken by another token.
    #[error("Token with symbol {symbol} already exists")]
    AlreadyExists { symbol: String },

    /// Unknown token id or symbol.
    #[error("Key {key} doesn't exist")]
    NotFound { key: String },

    /// Caller is not the stored creator (or not the params authority).
    #[error("Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Request is well-formed but not acceptable.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Genesis document violates its invariants.
    #[error("Invalid genesis state: {0}")]
    InvalidGenesis(String),

    /// Wrapped Asset Ledger failure.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Wrapped Schema Store failure. Fatal for the transaction.
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// Collection layout error at construction.
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl RegistryError {
    /// Error class, stable across message wording changes.
    pub fn kind(&self) -> RegistryErrorKind {
        match self {
            Self::InvalidAddress { .. } => RegistryErrorKind::InvalidAddress,
            Self::InvalidAmount { .. } => RegistryErrorKind::InvalidAmount,
            Self::InvalidDenom { .. } => RegistryErrorKind::InvalidDenom,
            Self::AlreadyExists { .. } => RegistryErrorKind::AlreadyExists,
            Self::NotFound { .. } => RegistryErrorKind::NotFound,
            Self::Unauthorized { .. } => RegistryErrorKind::Unauthorized,
            Self::InvalidRequest(_) => RegistryErrorKind::InvalidRequest,
            Self::InvalidGenesis(_) => RegistryErrorKind::InvalidGenesis,
            Self::Ledger(_) => RegistryErrorKind::LedgerError,
            Self::Storage(_) => RegistryErrorKind::StorageError,
            Self::Schema(_) => RegistryErrorKind::SchemaError,
        }
    }

    pub(crate) fn not_found_id(id: u64) -> Self {
        Self::NotFound {
            key: id.to_string(),
        }
    }
}

/// Error type enumeration for the host boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryErrorKind {
    InvalidAddress,
    InvalidAmount,
    InvalidDenom,
    AlreadyExists,
    NotFound,
    Unauthorized,
    InvalidRequest,
    InvalidGenesis,
    LedgerError,
    StorageError,
    SchemaError,
}

/// Serializable registry error handed back to the Ledger Host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryErrorPayload {
    pub error_type: RegistryErrorKind,
    pub message: String,
}

impl From<&RegistryError> for RegistryErrorPayload {
    fn from(err: &RegistryError) -> Self {
        Self {
            error_type: err.kind(),
            message: err.to_string(),
        }
    }
}

impl From<RegistryError> for RegistryErrorPayload {
    fn from(err: RegistryError) -> Self {
        Self::from(&err)
    }
}
