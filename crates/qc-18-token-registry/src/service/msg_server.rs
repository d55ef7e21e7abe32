use super::{TokenRegistry, TxContext};
use crate::domain::entities::Token;
use crate::domain::errors::RegistryError;
use crate::domain::messages::{
    MsgCreateToken, MsgCreateTokenResponse, MsgDeleteToken, MsgUpdateParams, MsgUpdateToken,
};
use crate::domain::value_objects::parse_amount;
use crate::events::{
    ParamsUpdatedPayload, TokenCreatedPayload, TokenDeletedPayload, TokenUpdatedPayload,
};
use crate::ports::inbound::TokenMsgServer;
use crate::ports::outbound::{AddressCodec, AssetLedger};
use tracing::{info, warn};

impl<L: AssetLedger, A: AddressCodec> TokenMsgServer for TokenRegistry<L, A> {
    fn create_token(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgCreateToken,
    ) -> Result<MsgCreateTokenResponse, RegistryError> {
        self.validate_address(&msg.creator)?;

        let params = self.load_params(&*ctx.store)?;
        params.check_metadata(&msg.metadata)?;

        if self.find_token_by_symbol(&*ctx.store, &msg.symbol)?.is_some() {
            warn!(symbol = %msg.symbol, "[qc-18] Rejected duplicate symbol");
            return Err(RegistryError::AlreadyExists { symbol: msg.symbol });
        }

        let amount = parse_amount(&msg.total_supply)?;

        let id = self.token_seq.next(ctx.store)?;
        let token = Token {
            id,
            creator: msg.creator,
            name: msg.name,
            symbol: msg.symbol,
            decimals: msg.decimals,
            total_supply: msg.total_supply,
            metadata: msg.metadata,
        };
        self.tokens.set(ctx.store, &id, &token)?;

        self.mint_and_send(ctx.store, &token, amount)?;

        ctx.emit(TokenCreatedPayload::from(&token));

        info!(
            token_id = id,
            symbol = %token.symbol,
            creator = %token.creator,
            total_supply = %token.total_supply,
            "[qc-18] Token created"
        );
        Ok(MsgCreateTokenResponse { id })
    }

    fn update_token(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgUpdateToken,
    ) -> Result<(), RegistryError> {
        self.validate_address(&msg.creator)?;
        if let Err(e) = self.owned_token(&*ctx.store, msg.id, &msg.creator) {
            warn!(token_id = msg.id, error = %e, "[qc-18] Update rejected");
            return Err(e);
        }

        self.load_params(&*ctx.store)?.check_metadata(&msg.metadata)?;
        parse_amount(&msg.total_supply)?;

        // id and creator are unchanged by construction
        let token = msg.to_token();
        self.tokens.set(ctx.store, &token.id, &token)?;

        ctx.emit(TokenUpdatedPayload::from(&token));

        info!(token_id = token.id, creator = %token.creator, "[qc-18] Token updated");
        Ok(())
    }

    fn delete_token(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgDeleteToken,
    ) -> Result<(), RegistryError> {
        self.validate_address(&msg.creator)?;
        if let Err(e) = self.owned_token(&*ctx.store, msg.id, &msg.creator) {
            warn!(token_id = msg.id, error = %e, "[qc-18] Delete rejected");
            return Err(e);
        }

        self.tokens.remove(ctx.store, &msg.id)?;

        ctx.emit(TokenDeletedPayload {
            token_id: msg.id,
            creator: msg.creator.clone(),
        });

        info!(token_id = msg.id, creator = %msg.creator, "[qc-18] Token deleted");
        Ok(())
    }

    fn update_params(
        &self,
        ctx: &mut TxContext<'_>,
        msg: MsgUpdateParams,
    ) -> Result<(), RegistryError> {
        if msg.authority != self.config.authority {
            warn!(authority = %msg.authority, "[qc-18] Params update rejected");
            return Err(RegistryError::Unauthorized {
                reason: format!(
                    "invalid authority; expected {}, got {}",
                    self.config.authority, msg.authority
                ),
            });
        }
        msg.params.validate()?;

        self.params.set(ctx.store, &msg.params)?;

        info!(
            max_metadata_len = msg.params.max_metadata_len,
            "[qc-18] Params updated"
        );
        ctx.emit(ParamsUpdatedPayload {
            authority: msg.authority,
            params: msg.params,
        });
        Ok(())
    }
}
