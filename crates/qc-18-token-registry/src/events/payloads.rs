use super::manager::Event;
use crate::domain::entities::{Params, Token};
use serde::{Deserialize, Serialize};

pub const EVENT_CREATE_TOKEN: &str = "create_token";
pub const EVENT_UPDATE_TOKEN: &str = "update_token";
pub const EVENT_DELETE_TOKEN: &str = "delete_token";
pub const EVENT_UPDATE_PARAMS: &str = "update_params";

pub const ATTR_TOKEN_ID: &str = "token_id";
pub const ATTR_CREATOR: &str = "creator";
pub const ATTR_TOKEN_NAME: &str = "token_name";
pub const ATTR_TOKEN_SYMBOL: &str = "token_symbol";
pub const ATTR_DECIMALS: &str = "decimals";
pub const ATTR_TOTAL_SUPPLY: &str = "total_supply";
pub const ATTR_METADATA: &str = "metadata";
pub const ATTR_AUTHORITY: &str = "authority";
pub const ATTR_MAX_METADATA_LEN: &str = "max_metadata_len";

/// Emitted after a token is persisted and its supply minted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCreatedPayload {
    pub token_id: u64,
    pub token_name: String,
    pub token_symbol: String,
    pub creator: String,
    pub total_supply: String,
}

impl From<&Token> for TokenCreatedPayload {
    fn from(token: &Token) -> Self {
        Self {
            token_id: token.id,
            token_name: token.name.clone(),
            token_symbol: token.symbol.clone(),
            creator: token.creator.clone(),
            total_supply: token.total_supply.clone(),
        }
    }
}

impl From<TokenCreatedPayload> for Event {
    fn from(p: TokenCreatedPayload) -> Self {
        Event::new(EVENT_CREATE_TOKEN)
            .with(ATTR_TOKEN_ID, p.token_id.to_string())
            .with(ATTR_TOKEN_NAME, p.token_name)
            .with(ATTR_TOKEN_SYMBOL, p.token_symbol)
            .with(ATTR_CREATOR, p.creator)
            .with(ATTR_TOTAL_SUPPLY, p.total_supply)
    }
}

/// Emitted after a token's fields are replaced. Carries the new values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUpdatedPayload {
    pub token_id: u64,
    pub creator: String,
    pub token_name: String,
    pub token_symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub metadata: String,
}

impl From<&Token> for TokenUpdatedPayload {
    fn from(token: &Token) -> Self {
        Self {
            token_id: token.id,
            creator: token.creator.clone(),
            token_name: token.name.clone(),
            token_symbol: token.symbol.clone(),
            decimals: token.decimals.clone(),
            total_supply: token.total_supply.clone(),
            metadata: token.metadata.clone(),
        }
    }
}

impl From<TokenUpdatedPayload> for Event {
    fn from(p: TokenUpdatedPayload) -> Self {
        Event::new(EVENT_UPDATE_TOKEN)
            .with(ATTR_TOKEN_ID, p.token_id.to_string())
            .with(ATTR_CREATOR, p.creator)
            .with(ATTR_TOKEN_NAME, p.token_name)
            .with(ATTR_TOKEN_SYMBOL, p.token_symbol)
            .with(ATTR_DECIMALS, p.decimals)
            .with(ATTR_TOTAL_SUPPLY, p.total_supply)
            .with(ATTR_METADATA, p.metadata)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDeletedPayload {
    pub token_id: u64,
    pub creator: String,
}

impl From<TokenDeletedPayload> for Event {
    fn from(p: TokenDeletedPayload) -> Self {
        Event::new(EVENT_DELETE_TOKEN)
            .with(ATTR_TOKEN_ID, p.token_id.to_string())
            .with(ATTR_CREATOR, p.creator)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsUpdatedPayload {
    pub authority: String,
    pub params: Params,
}

impl From<ParamsUpdatedPayload> for Event {
    fn from(p: ParamsUpdatedPayload) -> Self {
        Event::new(EVENT_UPDATE_PARAMS)
            .with(ATTR_AUTHORITY, p.authority)
            .with(ATTR_MAX_METADATA_LEN, p.params.max_metadata_len.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_event_attribute_order() {
        let token = Token {
            id: 7,
            creator: "0xabc".into(),
            name: "Gold".into(),
            symbol: "GLD".into(),
            total_supply: "100".into(),
            ..Token::default()
        };

        let event: Event = TokenCreatedPayload::from(&token).into();
        assert_eq!(event.kind, EVENT_CREATE_TOKEN);
        let keys: Vec<&str> = event.attributes.iter().map(|a| a.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![ATTR_TOKEN_ID, ATTR_TOKEN_NAME, ATTR_TOKEN_SYMBOL, ATTR_CREATOR, ATTR_TOTAL_SUPPLY]
        );
        assert_eq!(event.attribute(ATTR_TOKEN_ID), Some("7"));
    }

    #[test]
    fn test_delete_event() {
        let event: Event = TokenDeletedPayload {
            token_id: 1,
            creator: "0xabc".into(),
        }
        .into();
        assert_eq!(event.kind, EVENT_DELETE_TOKEN);
        assert_eq!(event.attribute(ATTR_CREATOR), Some("0xabc"));
    }
}
