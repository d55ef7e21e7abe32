//! Genesis import and export.
//!
//! Both walk the collections directly. Import performs no uniqueness or
//! ownership checks; the document is trusted (see `GenesisState::validate`).

use super::TokenRegistry;
use crate::domain::genesis::GenesisState;
use crate::domain::errors::RegistryError;
use crate::ports::outbound::{AddressCodec, AssetLedger, KeyValueStore};
use tracing::info;

impl<L: AssetLedger, A: AddressCodec> TokenRegistry<L, A> {
    /// Write every token, then the sequence, then params.
    pub fn init_genesis(
        &self,
        store: &mut dyn KeyValueStore,
        genesis: &GenesisState,
    ) -> Result<(), RegistryError> {
        for token in &genesis.token_list {
            self.tokens.set(store, &token.id, token)?;
        }
        self.token_seq.set(store, genesis.token_count)?;
        self.params.set(store, &genesis.params)?;

        info!(
            tokens = genesis.token_list.len(),
            token_count = genesis.token_count,
            "[qc-18] Genesis imported"
        );
        Ok(())
    }

    /// Snapshot params, all tokens in ascending id order, and the sequence.
    /// Reads only.
    pub fn export_genesis(&self, store: &dyn KeyValueStore) -> Result<GenesisState, RegistryError> {
        let params = self.load_params(store)?;

        let mut token_list = Vec::new();
        self.iterate_tokens(store, |_, token| {
            token_list.push(token);
            Ok(false)
        })?;

        let token_count = self.token_seq.peek(store)?;

        Ok(GenesisState {
            params,
            token_list,
            token_count,
        })
    }
}
