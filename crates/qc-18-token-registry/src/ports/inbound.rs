//! # Inbound Ports (Driving Ports)
//!
//! The API the Ledger Host calls. Authentication has already happened by
//! the time a message arrives here; the registry enforces business rules
//! only.

use super::outbound::KeyValueStore;
use crate::domain::entities::{Params, Token};
use crate::domain::errors::RegistryError;
use crate::domain::messages::{
    MsgCreateToken, MsgCreateTokenResponse, MsgDeleteToken, MsgUpdateParams, MsgUpdateToken,
    TokenPage,
};
use crate::schema::PageRequest;
use crate::service::TxContext;

/// State-changing operations. Each runs inside one host transaction.
pub trait TokenMsgServer {
    /// Register a token and mint its supply to the creator.
    fn create_token(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgCreateToken,
    ) -> Result<MsgCreateTokenResponse, RegistryError>;

    /// Replace a token's fields. Creator only.
    fn update_token(&self, ctx: &mut TxContext<'_>, msg: MsgUpdateToken)
        -> Result<(), RegistryError>;

    /// Remove a token permanently. Creator only.
    fn delete_token(&self, ctx: &mut TxContext<'_>, msg: MsgDeleteToken)
        -> Result<(), RegistryError>;

    /// Replace module params. Params authority only.
    fn update_params(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgUpdateParams,
    ) -> Result<(), RegistryError>;
}

/// Read-only queries.
pub trait TokenQueryServer {
    fn get_token(&self, store: &dyn KeyValueStore, id: u64) -> Result<Token, RegistryError>;

    fn get_token_by_symbol(
        &self,
        store: &dyn KeyValueStore,
        symbol: &str,
    ) -> Result<Token, RegistryError>;

    /// List tokens in ascending id order.
    fn list_tokens(
        &self,
        store: &dyn KeyValueStore,
        request: &PageRequest,
    ) -> Result<TokenPage, RegistryError>;

    fn params(&self, store: &dyn KeyValueStore) -> Result<Params, RegistryError>;
}
