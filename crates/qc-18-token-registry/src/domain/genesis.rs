//! # Genesis State
//!
//! The full exportable/importable snapshot of the registry:
//! params, every token in ascending id order, and the sequence value.
//!
//! Import is trusted: `TokenRegistry::init_genesis` writes whatever it is
//! given. `validate` is for the host to call before handing a document over.

use super::entities::{Params, Token};
use super::errors::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisState {
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub token_list: Vec<Token>,
    /// Next id the sequence will hand out.
    #[serde(default)]
    pub token_count: u64,
}

impl GenesisState {
    /// Check id uniqueness, `id < token_count`, then params.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen = HashSet::with_capacity(self.token_list.len());
        for token in &self.token_list {
            if !seen.insert(token.id) {
                return Err(RegistryError::InvalidGenesis(format!(
                    "duplicated id {} for token",
                    token.id
                )));
            }
            if token.id >= self.token_count {
                return Err(RegistryError::InvalidGenesis(format!(
                    "token id {} should be lower than token count {}",
                    token.id, self.token_count
                )));
            }
        }
        self.params.validate()
    }

    /// Encode as a pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RegistryError::InvalidGenesis(format!("encode: {}", e)))
    }

    /// Decode a JSON document. Missing sections take their defaults.
    pub fn from_json(document: &str) -> Result<Self, RegistryError> {
        serde_json::from_str(document)
            .map_err(|e| RegistryError::InvalidGenesis(format!("decode: {}", e)))
    }
}
