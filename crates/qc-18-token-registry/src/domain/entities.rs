//! # Domain Entities
//!
//! Core records held by the Token Registry.
//!
//! - `Token`: one registry entry, keyed by its sequence-assigned id
//! - `Params`: module-wide singleton, changed only by the params authority
//! - `Coin`: amount of one denomination handed to the Asset Ledger

use super::errors::RegistryError;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Upper bound accepted for `Params::max_metadata_len` (1 MiB).
pub const MAX_METADATA_LEN_CEILING: u32 = 1024 * 1024;

/// A token registered by an account.
///
/// `total_supply` is kept exactly as submitted. Create and update reject
/// anything that is not a non-negative integer; genesis import stores it
/// verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Unique id, allocated from the token sequence.
    pub id: u64,
    /// Account that created the token. Only it may update or delete.
    pub creator: String,
    pub name: String,
    /// Ledger denomination of the minted supply.
    pub symbol: String,
    pub decimals: String,
    /// Decimal integer string.
    pub total_supply: String,
    pub metadata: String,
}

/// Module parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Params {
    /// Longest accepted metadata string in bytes (0 = unbounded).
    pub max_metadata_len: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            max_metadata_len: 4096,
        }
    }
}

impl Params {
    /// Validate parameter bounds.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.max_metadata_len > MAX_METADATA_LEN_CEILING {
            return Err(RegistryError::InvalidRequest(format!(
                "max_metadata_len {} exceeds {}",
                self.max_metadata_len, MAX_METADATA_LEN_CEILING
            )));
        }
        Ok(())
    }

    /// Reject metadata longer than `max_metadata_len`.
    pub fn check_metadata(&self, metadata: &str) -> Result<(), RegistryError> {
        let limit = self.max_metadata_len as usize;
        if limit != 0 && metadata.len() > limit {
            return Err(RegistryError::InvalidRequest(format!(
                "metadata is {} bytes, limit is {}",
                metadata.len(),
                limit
            )));
        }
        Ok(())
    }
}

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    pub denom: String,
    pub amount: U256,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: U256) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Build a coin set, dropping zero amounts.
///
/// Mirrors how the ledger treats coin sets: a zero coin is not a coin, so a
/// zero-supply token mints nothing.
pub fn coins(items: impl IntoIterator<Item = Coin>) -> Vec<Coin> {
    items.into_iter().filter(|c| !c.amount.is_zero()).collect()
}
