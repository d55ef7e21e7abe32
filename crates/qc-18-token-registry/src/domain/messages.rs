//! # Request / Response Messages
//!
//! Shapes of the operations the Ledger Host routes to the registry.
//! Wire encoding is the host's concern; these only derive serde so the host
//! can pick one.

use super::entities::{Params, Token};
use crate::schema::PageResponse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateToken {
    pub creator: String,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub metadata: String,
}

impl MsgCreateToken {
    pub fn new(
        creator: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: impl Into<String>,
        total_supply: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            name: name.into(),
            symbol: symbol.into(),
            decimals: decimals.into(),
            total_supply: total_supply.into(),
            metadata: metadata.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgCreateTokenResponse {
    pub id: u64,
}

/// Full replacement of a token's mutable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateToken {
    pub creator: String,
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: String,
    pub total_supply: String,
    pub metadata: String,
}

impl MsgUpdateToken {
    pub fn new(
        creator: impl Into<String>,
        id: u64,
        name: impl Into<String>,
        symbol: impl Into<String>,
        decimals: impl Into<String>,
        total_supply: impl Into<String>,
        metadata: impl Into<String>,
    ) -> Self {
        Self {
            creator: creator.into(),
            id,
            name: name.into(),
            symbol: symbol.into(),
            decimals: decimals.into(),
            total_supply: total_supply.into(),
            metadata: metadata.into(),
        }
    }

    /// The record this update would store.
    pub(crate) fn to_token(&self) -> Token {
        Token {
            id: self.id,
            creator: self.creator.clone(),
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals.clone(),
            total_supply: self.total_supply.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgDeleteToken {
    pub creator: String,
    pub id: u64,
}

impl MsgDeleteToken {
    pub fn new(creator: impl Into<String>, id: u64) -> Self {
        Self {
            creator: creator.into(),
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgUpdateParams {
    pub authority: String,
    pub params: Params,
}

/// One page of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPage {
    pub tokens: Vec<Token>,
    pub pagination: PageResponse,
}
