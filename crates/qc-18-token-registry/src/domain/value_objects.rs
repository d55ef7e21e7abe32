//! # Value Objects
//!
//! Configuration, store key prefixes and the small validation rules shared
//! by the registry and its adapters.

use super::errors::RegistryError;
use primitive_types::U256;
use std::env;

/// Default governance account allowed to change module params.
pub const DEFAULT_AUTHORITY: &str = "0x10d07200000000000000000000000000000000aa";

/// Key prefixes for the registry's collections.
///
/// Each is appended to `RegistryConfig::store_prefix`, so the full keys are
/// e.g. `token/t:{id_be}`. Token ids are encoded big-endian so store order
/// is ascending id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Params singleton: `p:` -> Params
    Params,
    /// Token records: `t:{id}` -> Token
    Token,
    /// Token id sequence: `s:` -> u64
    TokenSequence,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Params => b"p:",
            KeyPrefix::Token => b"t:",
            KeyPrefix::TokenSequence => b"s:",
        }
    }

    /// Human-readable collection name.
    pub fn name(&self) -> &'static str {
        match self {
            KeyPrefix::Params => "params",
            KeyPrefix::Token => "tokens",
            KeyPrefix::TokenSequence => "token_seq",
        }
    }
}

/// Configuration for the Token Registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Module name; also the module account that receives minted supply.
    pub module_name: String,
    /// Account allowed to update params.
    pub authority: String,
    /// Namespace prepended to every registry key.
    pub store_prefix: Vec<u8>,
    /// Page size used when a request asks for 0 items.
    pub default_page_limit: u64,
    /// Largest page size served; larger requests are clamped.
    pub max_page_limit: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            module_name: "token".to_string(),
            authority: DEFAULT_AUTHORITY.to_string(),
            store_prefix: b"token/".to_vec(),
            default_page_limit: 100,
            max_page_limit: 1000,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_TOKEN_MODULE_NAME`: module name (default: token)
    /// - `QC_TOKEN_AUTHORITY`: params authority (default: [`DEFAULT_AUTHORITY`])
    /// - `QC_TOKEN_STORE_PREFIX`: key namespace (default: token/)
    /// - `QC_TOKEN_DEFAULT_PAGE_LIMIT`: default page size (default: 100)
    /// - `QC_TOKEN_MAX_PAGE_LIMIT`: page size cap (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            module_name: env::var("QC_TOKEN_MODULE_NAME").unwrap_or(defaults.module_name),
            authority: env::var("QC_TOKEN_AUTHORITY").unwrap_or(defaults.authority),
            store_prefix: env::var("QC_TOKEN_STORE_PREFIX")
                .map(String::into_bytes)
                .unwrap_or(defaults.store_prefix),
            default_page_limit: env::var("QC_TOKEN_DEFAULT_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_page_limit),
            max_page_limit: env::var("QC_TOKEN_MAX_PAGE_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_page_limit),
        }
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn with_store_prefix(mut self, prefix: impl Into<Vec<u8>>) -> Self {
        self.store_prefix = prefix.into();
        self
    }

    /// Set default and maximum page sizes.
    pub fn with_page_limits(mut self, default_limit: u64, max_limit: u64) -> Self {
        self.default_page_limit = default_limit;
        self.max_page_limit = max_limit;
        self
    }

    /// Resolve a requested page size against the configured limits.
    pub fn effective_page_limit(&self, requested: u64) -> u64 {
        let limit = if requested == 0 {
            self.default_page_limit
        } else {
            requested
        };
        limit.clamp(1, self.max_page_limit.max(1))
    }
}

/// Parse a supply string as a non-negative 256-bit integer.
///
/// Only ASCII digits are accepted; signs, whitespace and the empty string
/// are rejected.
pub fn parse_amount(value: &str) -> Result<U256, RegistryError> {
    let invalid = || RegistryError::InvalidAmount {
        value: value.to_string(),
    };

    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    U256::from_dec_str(value).map_err(|_| invalid())
}

/// Ledger denomination rule: `[a-zA-Z][a-zA-Z0-9/:._-]{2,127}`.
pub fn is_valid_denom(denom: &str) -> bool {
    let bytes = denom.as_bytes();
    if !(3..=128).contains(&bytes.len()) {
        return false;
    }
    bytes[0].is_ascii_alphabetic()
        && bytes[1..]
            .iter()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b':' | b'.' | b'_' | b'-'))
}
