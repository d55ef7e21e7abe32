//! Ledger Bridge: mint a new token's supply and hand it to the creator.

use super::TokenRegistry;
use crate::domain::entities::{coins, Coin, Token};
use crate::domain::errors::RegistryError;
use crate::domain::value_objects::is_valid_denom;
use crate::ports::outbound::{AddressCodec, AssetLedger, KeyValueStore};
use primitive_types::U256;
use tracing::debug;

impl<L: AssetLedger, A: AddressCodec> TokenRegistry<L, A> {
    /// Mint `amount` of `token.symbol` to the module account, then send it
    /// to `token.creator`.
    ///
    /// Writes go through `store`, so a failure here is undone together
    /// with the token record when the host discards the transaction.
    pub(crate) fn mint_and_send(
        &self,
        store: &mut dyn KeyValueStore,
        token: &Token,
        amount: U256,
    ) -> Result<(), RegistryError> {
        if !is_valid_denom(&token.symbol) {
            return Err(RegistryError::InvalidDenom {
                denom: token.symbol.clone(),
            });
        }

        let minted = coins([Coin::new(token.symbol.clone(), amount)]);
        let module = self.module_name();

        self.ledger.mint_coins(store, module, &minted)?;
        self.ledger
            .send_coins_from_module_to_account(store, module, &token.creator, &minted)?;

        debug!(
            token_id = token.id,
            denom = %token.symbol,
            amount = %amount,
            recipient = %token.creator,
            "[qc-18] Initial supply delivered"
        );
        Ok(())
    }
}
