//! End-to-end registry flows through the in-memory Ledger Host.

use qc_18_token_registry::{
    adapters::module_account, AssetLedger, HexAddressCodec, InMemoryLedgerHost, MsgCreateToken,
    MsgDeleteToken, MsgUpdateParams, MsgUpdateToken, PageRequest, Params, RegistryConfig,
    RegistryErrorKind, StoreBackedAssetLedger, TokenMsgServer, TokenQueryServer, TokenRegistry,
};
use primitive_types::U256;

// =============================================================================
// HELPERS
// =============================================================================

const ALICE: &str = "0x00000000000000000000000000000000000a11ce";
const BOB: &str = "0x0000000000000000000000000000000000000b0b";

type Registry = TokenRegistry<StoreBackedAssetLedger, HexAddressCodec>;

fn registry() -> Registry {
    registry_with(StoreBackedAssetLedger::new())
}

fn registry_with(ledger: StoreBackedAssetLedger) -> Registry {
    TokenRegistry::new(RegistryConfig::default(), ledger, HexAddressCodec::new()).unwrap()
}

fn create(
    host: &mut InMemoryLedgerHost,
    registry: &Registry,
    creator: &str,
    symbol: &str,
    supply: &str,
) -> Result<u64, RegistryErrorKind> {
    let msg = MsgCreateToken::new(creator, symbol, symbol, "18", supply, "");
    host.execute(|ctx| registry.create_token(ctx, msg))
        .map(|resp| resp.id)
        .map_err(|e| e.kind())
}

fn delete(
    host: &mut InMemoryLedgerHost,
    registry: &Registry,
    creator: &str,
    id: u64,
) -> Result<(), RegistryErrorKind> {
    host.execute(|ctx| registry.delete_token(ctx, MsgDeleteToken::new(creator, id)))
        .map_err(|e| e.kind())
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_five_creates_get_ids_zero_to_four() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();

    let ids: Vec<u64> = ["AAA", "BBB", "CCC", "DDD", "EEE"]
        .iter()
        .map(|s| create(&mut host, &registry, ALICE, s, "1").unwrap())
        .collect();

    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_symbol_lifecycle() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();

    assert_eq!(create(&mut host, &registry, ALICE, "GLD", "100"), Ok(0));
    assert_eq!(
        create(&mut host, &registry, BOB, "GLD", "5"),
        Err(RegistryErrorKind::AlreadyExists)
    );

    assert_eq!(delete(&mut host, &registry, ALICE, 0), Ok(()));
    assert_eq!(
        registry.get_token(host.store(), 0).unwrap_err().kind(),
        RegistryErrorKind::NotFound
    );
    assert_eq!(
        registry
            .get_token_by_symbol(host.store(), "GLD")
            .unwrap_err()
            .kind(),
        RegistryErrorKind::NotFound
    );

    // Symbol is free again; id is not reused
    assert_eq!(create(&mut host, &registry, BOB, "GLD", "5"), Ok(1));
    assert_eq!(
        registry.get_token_by_symbol(host.store(), "GLD").unwrap().creator,
        BOB
    );
}

#[test]
fn test_supply_inputs() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();

    assert_eq!(create(&mut host, &registry, ALICE, "AAA", "100"), Ok(0));
    assert_eq!(create(&mut host, &registry, ALICE, "BBB", "0"), Ok(1));
    assert_eq!(
        create(&mut host, &registry, ALICE, "CCC", "-5"),
        Err(RegistryErrorKind::InvalidAmount)
    );

    let ledger = registry.ledger();
    assert_eq!(
        ledger.balance(host.store(), ALICE, "AAA").unwrap(),
        U256::from(100u64)
    );
    assert!(ledger.balance(host.store(), ALICE, "BBB").unwrap().is_zero());
}

#[test]
fn test_large_supply_minted_exactly() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    let supply = "115792089237316195423570985008687907853269984665640564039457584007913129639935";

    create(&mut host, &registry, ALICE, "MAX", supply).unwrap();

    assert_eq!(
        registry.ledger().balance(host.store(), ALICE, "MAX").unwrap(),
        U256::MAX
    );
}

#[test]
fn test_paging_skips_deleted() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    for symbol in ["AAA", "BBB", "CCC"] {
        create(&mut host, &registry, ALICE, symbol, "1").unwrap();
    }
    delete(&mut host, &registry, ALICE, 1).unwrap();

    let page = registry
        .list_tokens(host.store(), &PageRequest::with_limit(2))
        .unwrap();
    let ids: Vec<u64> = page.tokens.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![0, 2]);
    assert!(page.pagination.next_key.is_none());
}

#[test]
fn test_paging_by_cursor_covers_everything_once() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    let symbols: Vec<String> = (0..7).map(|i| format!("TK{}", i)).collect();
    for symbol in &symbols {
        create(&mut host, &registry, ALICE, symbol, "1").unwrap();
    }

    let mut seen = Vec::new();
    let mut request = PageRequest::with_limit(3);
    loop {
        let page = registry.list_tokens(host.store(), &request).unwrap();
        seen.extend(page.tokens.iter().map(|t| t.id));
        match page.pagination.next_key {
            Some(key) => request = PageRequest::after(key, 3),
            None => break,
        }
    }

    assert_eq!(seen, (0..7).collect::<Vec<u64>>());
}

#[test]
fn test_cursor_stable_across_appends() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    for symbol in ["AAA", "BBB", "CCC", "DDD"] {
        create(&mut host, &registry, ALICE, symbol, "1").unwrap();
    }

    let first = registry
        .list_tokens(host.store(), &PageRequest::with_limit(2))
        .unwrap();
    let cursor = first.pagination.next_key.clone().unwrap();

    // New tokens land after the cursor
    for symbol in ["EEE", "FFF"] {
        create(&mut host, &registry, BOB, symbol, "1").unwrap();
    }

    let mut seen: Vec<u64> = first.tokens.iter().map(|t| t.id).collect();
    let mut request = PageRequest::after(cursor, 2);
    loop {
        let page = registry.list_tokens(host.store(), &request).unwrap();
        seen.extend(page.tokens.iter().map(|t| t.id));
        match page.pagination.next_key {
            Some(key) => request = PageRequest::after(key, 2),
            None => break,
        }
    }

    assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_offset_paging_counts_total() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    for symbol in ["AAA", "BBB", "CCC", "DDD"] {
        create(&mut host, &registry, ALICE, symbol, "1").unwrap();
    }

    let request = PageRequest {
        offset: 2,
        limit: 10,
        count_total: true,
        ..PageRequest::default()
    };
    let page = registry.list_tokens(host.store(), &request).unwrap();
    let ids: Vec<u64> = page.tokens.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(page.pagination.total, Some(4));

    let both = PageRequest {
        key: Some(vec![0; 8]),
        offset: 1,
        ..PageRequest::default()
    };
    assert_eq!(
        registry.list_tokens(host.store(), &both).unwrap_err().kind(),
        RegistryErrorKind::InvalidRequest
    );
}

#[test]
fn test_only_owner_mutates() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    create(&mut host, &registry, ALICE, "GLD", "1").unwrap();

    let update = MsgUpdateToken::new(BOB, 0, "Stolen", "GLD", "18", "1", "");
    let err = host
        .execute(|ctx| registry.update_token(ctx, update))
        .unwrap_err();
    assert_eq!(err.kind(), RegistryErrorKind::Unauthorized);
    assert_eq!(
        delete(&mut host, &registry, BOB, 0),
        Err(RegistryErrorKind::Unauthorized)
    );
    assert_eq!(
        delete(&mut host, &registry, ALICE, 99),
        Err(RegistryErrorKind::NotFound)
    );

    assert_eq!(registry.get_token(host.store(), 0).unwrap().name, "GLD");
}

#[test]
fn test_mint_failure_leaves_no_trace() {
    let registry = registry_with(StoreBackedAssetLedger::new().failing_mint());
    let mut host = InMemoryLedgerHost::new();

    assert_eq!(
        create(&mut host, &registry, ALICE, "GLD", "100"),
        Err(RegistryErrorKind::LedgerError)
    );
    assert!(!registry.has_token(host.store(), 0).unwrap());
    assert_eq!(registry.token_count(host.store()).unwrap(), 0);
    assert!(host.events().is_empty());
    assert!(registry
        .ledger()
        .balance(host.store(), &module_account("token"), "GLD")
        .unwrap()
        .is_zero());
}

#[test]
fn test_params_authority() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();
    let params = Params {
        max_metadata_len: 3,
    };

    let err = host
        .execute(|ctx| {
            registry.update_params(
                ctx,
                MsgUpdateParams {
                    authority: ALICE.to_string(),
                    params: params.clone(),
                },
            )
        })
        .unwrap_err();
    assert_eq!(err.kind(), RegistryErrorKind::Unauthorized);

    let authority = registry.authority().to_string();
    host.execute(|ctx| {
        registry.update_params(
            ctx,
            MsgUpdateParams {
                authority,
                params: params.clone(),
            },
        )
    })
    .unwrap();

    // New metadata limit applies to later creates
    let msg = MsgCreateToken::new(ALICE, "Gold", "GLD", "18", "1", "abcd");
    let err = host
        .execute(|ctx| registry.create_token(ctx, msg))
        .unwrap_err();
    assert_eq!(err.kind(), RegistryErrorKind::InvalidRequest);
}

#[test]
fn test_events_in_commit_order() {
    let registry = registry();
    let mut host = InMemoryLedgerHost::new();

    create(&mut host, &registry, ALICE, "GLD", "1").unwrap();
    let _ = create(&mut host, &registry, ALICE, "GLD", "1");
    delete(&mut host, &registry, ALICE, 0).unwrap();

    let kinds: Vec<&str> = host.events().iter().map(|e| e.kind.as_str()).collect();
    assert_eq!(kinds, vec!["create_token", "delete_token"]);
    assert!(host
        .events()
        .iter()
        .all(|e| e.attribute("token_id") == Some("0") && e.attribute("creator") == Some(ALICE)));
}
