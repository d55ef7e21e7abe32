//! Property tests: id allocation and the genesis round-trip law.

use proptest::prelude::*;
use qc_18_token_registry::{
    GenesisState, HexAddressCodec, InMemoryKVStore, InMemoryLedgerHost, KeyValueStore,
    MsgCreateToken, MsgDeleteToken, RegistryConfig, StoreBackedAssetLedger, TokenMsgServer,
    TokenRegistry,
};

const ALICE: &str = "0x00000000000000000000000000000000000a11ce";

type Registry = TokenRegistry<StoreBackedAssetLedger, HexAddressCodec>;

fn registry() -> Registry {
    TokenRegistry::new(
        RegistryConfig::default(),
        StoreBackedAssetLedger::new(),
        HexAddressCodec::new(),
    )
    .unwrap()
}

fn registry_keys(store: &InMemoryKVStore) -> Vec<(Vec<u8>, Vec<u8>)> {
    store
        .prefix_iter(b"token/")
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap()
}

#[derive(Debug, Clone)]
enum Op {
    Create { symbol: u8, supply: u64 },
    Delete { id: u64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12, 0u64..1_000).prop_map(|(symbol, supply)| Op::Create { symbol, supply }),
        (0u64..16).prop_map(|id| Op::Delete { id }),
    ]
}

fn apply(host: &mut InMemoryLedgerHost, registry: &Registry, op: &Op) -> Option<u64> {
    match op {
        Op::Create { symbol, supply } => {
            let msg = MsgCreateToken::new(
                ALICE,
                "t",
                format!("SYM{}", symbol),
                "0",
                supply.to_string(),
                "",
            );
            host.execute(|ctx| registry.create_token(ctx, msg))
                .ok()
                .map(|resp| resp.id)
        }
        Op::Delete { id } => {
            let _ = host.execute(|ctx| registry.delete_token(ctx, MsgDeleteToken::new(ALICE, *id)));
            None
        }
    }
}

proptest! {
    #[test]
    fn prop_ids_strictly_increase_and_never_repeat(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let registry = registry();
        let mut host = InMemoryLedgerHost::new();

        let mut allocated = Vec::new();
        for op in &ops {
            if let Some(id) = apply(&mut host, &registry, op) {
                allocated.push(id);
            }
        }

        for pair in allocated.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        // Failed creates never consume an id
        let expected: Vec<u64> = (0..allocated.len() as u64).collect();
        prop_assert_eq!(&allocated, &expected);
        prop_assert_eq!(registry.token_count(host.store()).unwrap(), allocated.len() as u64);
    }

    #[test]
    fn prop_export_import_is_lossless(ops in prop::collection::vec(op_strategy(), 0..30)) {
        let registry = registry();
        let mut source = InMemoryLedgerHost::new();
        source.execute(|ctx| registry.init_genesis(ctx.store, &GenesisState::default())).unwrap();
        for op in &ops {
            apply(&mut source, &registry, op);
        }

        let exported = registry.export_genesis(source.store()).unwrap();
        prop_assert!(exported.validate().is_ok());

        let mut target = InMemoryLedgerHost::new();
        target.execute(|ctx| registry.init_genesis(ctx.store, &exported)).unwrap();

        prop_assert_eq!(registry_keys(target.store()), registry_keys(source.store()));
    }
}
