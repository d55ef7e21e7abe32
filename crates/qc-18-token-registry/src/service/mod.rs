//! # Token Registry Service
//!
//! `TokenRegistry` ties the schema collections to the outbound ports and
//! implements both inbound ports.
//!
//! ## Submodules
//!
//! - `msg_server`: create / update / delete / update_params
//! - `query`: get / get by symbol / list / params
//! - `genesis`: export and import of full state
//! - `bridge`: mint-and-send on creation

mod bridge;
mod context;
mod genesis;
mod msg_server;
mod query;


pub use context::TxContext;

use crate::domain::entities::{Params, Token};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::{KeyPrefix, RegistryConfig};
use crate::ports::outbound::{AddressCodec, AssetLedger, KeyValueStore};
use crate::schema::{Item, Map, Schema, SchemaBuilder, Sequence};
use tracing::{debug, info};

/// The token registry.
///
/// Holds no state of its own beyond configuration and collection handles;
/// all data lives in the store passed to each call.
pub struct TokenRegistry<L: AssetLedger, A: AddressCodec> {
    config: RegistryConfig,
    schema: Schema,
    tokens: Map<u64, Token>,
    token_seq: Sequence,
    params: Item<Params>,
    ledger: L,
    address_codec: A,
}

impl<L: AssetLedger, A: AddressCodec> TokenRegistry<L, A> {
    /// Build the registry and validate its collection layout.
    ///
    /// Fails with `Schema` on overlapping prefixes and with
    /// `InvalidAddress` if the configured authority is malformed.
    pub fn new(config: RegistryConfig, ledger: L, address_codec: A) -> Result<Self, RegistryError> {
        address_codec
            .string_to_bytes(&config.authority)
            .map_err(|e| RegistryError::InvalidAddress {
                address: config.authority.clone(),
                reason: e.to_string(),
            })?;

        let mut builder = SchemaBuilder::new(config.store_prefix.clone());
        let params = builder.item(KeyPrefix::Params.name(), KeyPrefix::Params.as_bytes());
        let tokens = builder.map(KeyPrefix::Token.name(), KeyPrefix::Token.as_bytes());
        let token_seq = builder.sequence(
            KeyPrefix::TokenSequence.name(),
            KeyPrefix::TokenSequence.as_bytes(),
        );
        let schema = builder.build()?;

        info!(
            module = %config.module_name,
            collections = schema.collections().len(),
            "[qc-18] Token registry initialized"
        );

        Ok(Self {
            config,
            schema,
            tokens,
            token_seq,
            params,
            ledger,
            address_codec,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Module account name passed to the ledger.
    pub fn module_name(&self) -> &str {
        &self.config.module_name
    }

    pub fn authority(&self) -> &str {
        &self.config.authority
    }

    /// Token by id, `None` if absent.
    pub fn token(&self, store: &dyn KeyValueStore, id: u64) -> Result<Option<Token>, RegistryError> {
        Ok(self.tokens.get(store, &id)?)
    }

    pub fn has_token(&self, store: &dyn KeyValueStore, id: u64) -> Result<bool, RegistryError> {
        Ok(self.tokens.has(store, &id)?)
    }

    /// Visit tokens in ascending id order until `f` returns `Ok(true)`.
    pub fn iterate_tokens<F>(&self, store: &dyn KeyValueStore, f: F) -> Result<(), RegistryError>
    where
        F: FnMut(u64, Token) -> Result<bool, RegistryError>,
    {
        self.tokens.walk(store, f)
    }

    /// Token whose symbol equals `symbol` exactly.
    ///
    /// Linear scan, stops at the first match. Every symbol lookup goes
    /// through here.
    pub fn find_token_by_symbol(
        &self,
        store: &dyn KeyValueStore,
        symbol: &str,
    ) -> Result<Option<Token>, RegistryError> {
        let mut found = None;
        self.iterate_tokens(store, |_, token| {
            if token.symbol == symbol {
                found = Some(token);
                return Ok(true);
            }
            Ok(false)
        })?;

        debug!(symbol, found = found.is_some(), "[qc-18] Symbol lookup");
        Ok(found)
    }

    /// Stored params, or the defaults if never set.
    pub fn load_params(&self, store: &dyn KeyValueStore) -> Result<Params, RegistryError> {
        Ok(self.params.get(store)?.unwrap_or_default())
    }

    /// Next id the sequence will allocate.
    pub fn token_count(&self, store: &dyn KeyValueStore) -> Result<u64, RegistryError> {
        Ok(self.token_seq.peek(store)?)
    }

    fn validate_address(&self, address: &str) -> Result<(), RegistryError> {
        self.address_codec
            .string_to_bytes(address)
            .map(|_| ())
            .map_err(|e| RegistryError::InvalidAddress {
                address: address.to_string(),
                reason: e.to_string(),
            })
    }

    /// Load a token and check `caller` is its creator.
    fn owned_token(
        &self,
        store: &dyn KeyValueStore,
        id: u64,
        caller: &str,
    ) -> Result<Token, RegistryError> {
        let token = self
            .token(store, id)?
            .ok_or_else(|| RegistryError::not_found_id(id))?;
        if token.creator != caller {
            return Err(RegistryError::Unauthorized {
                reason: "incorrect owner".to_string(),
            });
        }
        Ok(token)
    }
}
