//! # Store-Backed Asset Ledger
//!
//! Minimal fungible ledger keeping balances in the same store the registry
//! writes to, under its own `bank/` namespace:
//!
//! - `bank/b:{account}/{denom}` -> balance
//! - `bank/s:{denom}` -> total supply
//!
//! Amounts are decimal strings. Module accounts are named `module:{name}`.

use crate::domain::entities::Coin;
use crate::domain::errors::{LedgerError, StoreError};
use crate::ports::outbound::{AssetLedger, KeyValueStore};
use primitive_types::U256;
use tracing::{debug, warn};

const BALANCE_PREFIX: &str = "bank/b:";
const SUPPLY_PREFIX: &str = "bank/s:";

/// Account holding a module's minted coins until they are sent on.
pub fn module_account(module: &str) -> String {
    format!("module:{}", module)
}

/// `AssetLedger` over a `KeyValueStore`, with failure injection for tests.
#[derive(Debug, Default, Clone)]
pub struct StoreBackedAssetLedger {
    fail_mint: bool,
    fail_send: bool,
}

impl StoreBackedAssetLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every mint.
    pub fn failing_mint(mut self) -> Self {
        self.fail_mint = true;
        self
    }

    /// Refuse every send.
    pub fn failing_send(mut self) -> Self {
        self.fail_send = true;
        self
    }

    /// Total minted amount of `denom`.
    pub fn supply(&self, store: &dyn KeyValueStore, denom: &str) -> Result<U256, LedgerError> {
        read_amount(store, &supply_key(denom))
    }

    fn credit(
        &self,
        store: &mut dyn KeyValueStore,
        account: &str,
        coin: &Coin,
    ) -> Result<(), LedgerError> {
        let key = balance_key(account, &coin.denom);
        let current = read_amount(&*store, &key)?;
        let updated = current
            .checked_add(coin.amount)
            .ok_or_else(|| LedgerError::Overflow {
                denom: coin.denom.clone(),
            })?;
        write_amount(store, &key, updated)
    }

    fn debit(
        &self,
        store: &mut dyn KeyValueStore,
        account: &str,
        coin: &Coin,
    ) -> Result<(), LedgerError> {
        let key = balance_key(account, &coin.denom);
        let current = read_amount(&*store, &key)?;
        if current < coin.amount {
            return Err(LedgerError::InsufficientFunds {
                account: account.to_string(),
                denom: coin.denom.clone(),
                required: coin.amount.to_string(),
                available: current.to_string(),
            });
        }
        write_amount(store, &key, current - coin.amount)
    }
}

impl AssetLedger for StoreBackedAssetLedger {
    fn mint_coins(
        &self,
        store: &mut dyn KeyValueStore,
        module: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError> {
        if self.fail_mint {
            warn!(module, "[qc-18] Ledger refused mint");
            return Err(LedgerError::MintFailed("minting disabled".to_string()));
        }

        let account = module_account(module);
        for coin in coins {
            self.credit(store, &account, coin)?;

            let key = supply_key(&coin.denom);
            let supply = read_amount(&*store, &key)?;
            let supply = supply
                .checked_add(coin.amount)
                .ok_or_else(|| LedgerError::Overflow {
                    denom: coin.denom.clone(),
                })?;
            write_amount(store, &key, supply)?;

            debug!(
                denom = %coin.denom,
                amount = %coin.amount,
                account = %account,
                "[qc-18] Minted coins"
            );
        }
        Ok(())
    }

    fn send_coins_from_module_to_account(
        &self,
        store: &mut dyn KeyValueStore,
        module: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> Result<(), LedgerError> {
        if self.fail_send {
            warn!(module, recipient, "[qc-18] Ledger refused send");
            return Err(LedgerError::SendFailed("transfers disabled".to_string()));
        }

        let account = module_account(module);
        for coin in coins {
            self.debit(store, &account, coin)?;
            self.credit(store, recipient, coin)?;

            debug!(
                denom = %coin.denom,
                amount = %coin.amount,
                from = %account,
                to = recipient,
                "[qc-18] Sent coins"
            );
        }
        Ok(())
    }

    fn balance(
        &self,
        store: &dyn KeyValueStore,
        account: &str,
        denom: &str,
    ) -> Result<U256, LedgerError> {
        read_amount(store, &balance_key(account, denom))
    }
}

fn balance_key(account: &str, denom: &str) -> Vec<u8> {
    format!("{}{}/{}", BALANCE_PREFIX, account, denom).into_bytes()
}

fn supply_key(denom: &str) -> Vec<u8> {
    format!("{}{}", SUPPLY_PREFIX, denom).into_bytes()
}

fn read_amount(store: &dyn KeyValueStore, key: &[u8]) -> Result<U256, LedgerError> {
    let Some(bytes) = store.get(key)? else {
        return Ok(U256::zero());
    };
    let text = std::str::from_utf8(&bytes).map_err(|e| StoreError::Codec {
        collection: "bank",
        message: e.to_string(),
    })?;
    U256::from_dec_str(text).map_err(|e| {
        StoreError::Codec {
            collection: "bank",
            message: format!("{:?}", e),
        }
        .into()
    })
}

fn write_amount(store: &mut dyn KeyValueStore, key: &[u8], amount: U256) -> Result<(), LedgerError> {
    store.put(key, amount.to_string().as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryKVStore;

    const ALICE: &str = "0x00000000000000000000000000000000000000a1";

    fn gld(amount: u64) -> Vec<Coin> {
        vec![Coin::new("GLD", U256::from(amount))]
    }

    #[test]
    fn test_mint_then_send() {
        let mut store = InMemoryKVStore::new();
        let ledger = StoreBackedAssetLedger::new();

        ledger.mint_coins(&mut store, "token", &gld(100)).unwrap();
        assert_eq!(
            ledger.balance(&store, &module_account("token"), "GLD").unwrap(),
            U256::from(100u64)
        );

        ledger
            .send_coins_from_module_to_account(&mut store, "token", ALICE, &gld(100))
            .unwrap();
        assert_eq!(ledger.balance(&store, ALICE, "GLD").unwrap(), U256::from(100u64));
        assert!(ledger
            .balance(&store, &module_account("token"), "GLD")
            .unwrap()
            .is_zero());
        assert_eq!(ledger.supply(&store, "GLD").unwrap(), U256::from(100u64));
    }

    #[test]
    fn test_send_more_than_minted() {
        let mut store = InMemoryKVStore::new();
        let ledger = StoreBackedAssetLedger::new();
        ledger.mint_coins(&mut store, "token", &gld(5)).unwrap();

        let err = ledger
            .send_coins_from_module_to_account(&mut store, "token", ALICE, &gld(6))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    }

    #[test]
    fn test_failure_injection() {
        let mut store = InMemoryKVStore::new();

        let err = StoreBackedAssetLedger::new()
            .failing_mint()
            .mint_coins(&mut store, "token", &gld(1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::MintFailed(_)));

        let err = StoreBackedAssetLedger::new()
            .failing_send()
            .send_coins_from_module_to_account(&mut store, "token", ALICE, &gld(1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::SendFailed(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_supply_overflow() {
        let mut store = InMemoryKVStore::new();
        let ledger = StoreBackedAssetLedger::new();
        let max = vec![Coin::new("GLD", U256::MAX)];

        ledger.mint_coins(&mut store, "token", &max).unwrap();
        let err = ledger.mint_coins(&mut store, "token", &gld(1)).unwrap_err();
        assert!(matches!(err, LedgerError::Overflow { .. }));
    }
}
