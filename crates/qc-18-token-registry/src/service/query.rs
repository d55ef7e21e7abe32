use super::TokenRegistry;
use crate::domain::entities::{Params, Token};
use crate::domain::errors::RegistryError;
use crate::domain::messages::TokenPage;
use crate::ports::inbound::TokenQueryServer;
use crate::ports::outbound::{AddressCodec, AssetLedger, KeyValueStore};
use crate::schema::{paginate, PageRequest};
use tracing::debug;

impl<L: AssetLedger, A: AddressCodec> TokenQueryServer for TokenRegistry<L, A> {
    fn get_token(&self, store: &dyn KeyValueStore, id: u64) -> Result<Token, RegistryError> {
        self.token(store, id)?
            .ok_or_else(|| RegistryError::not_found_id(id))
    }

    fn get_token_by_symbol(
        &self,
        store: &dyn KeyValueStore,
        symbol: &str,
    ) -> Result<Token, RegistryError> {
        self.find_token_by_symbol(store, symbol)?
            .ok_or_else(|| RegistryError::NotFound {
                key: symbol.to_string(),
            })
    }

    fn list_tokens(
        &self,
        store: &dyn KeyValueStore,
        request: &PageRequest,
    ) -> Result<TokenPage, RegistryError> {
        let limit = self.config.effective_page_limit(request.limit);
        let (entries, pagination) = paginate(&self.tokens, store, request, limit)?;

        debug!(
            returned = entries.len(),
            limit,
            has_next = pagination.next_key.is_some(),
            "[qc-18] Listed tokens"
        );

        Ok(TokenPage {
            tokens: entries.into_iter().map(|(_, token)| token).collect(),
            pagination,
        })
    }

    fn params(&self, store: &dyn KeyValueStore) -> Result<Params, RegistryError> {
        self.load_params(store)
    }
}
