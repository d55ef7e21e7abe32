//! # Schema Store
//!
//! Typed, namespaced access to the host's raw key-value store.
//!
//! ## Collections
//!
//! | Type | Shape | Notes |
//! |------|-------|-------|
//! | `Map<K, V>` | `prefix ++ key -> V` | ordered iteration, paging |
//! | `Item<V>` | `prefix -> V` | singleton |
//! | `Sequence` | `prefix -> u64` | monotonic allocator |
//!
//! Every collection is declared through a `SchemaBuilder`, which prepends
//! the module namespace and refuses layouts where one collection's prefix
//! is a prefix of another's. Values are bincode-encoded.

mod codec;
pub mod collections;
pub mod keys;
pub mod pagination;
pub mod sequence;

pub use collections::{Item, Map};
pub use keys::KeyCodec;
pub use pagination::{paginate, PageRequest, PageResponse};
pub use sequence::Sequence;

use crate::domain::errors::SchemaError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

/// A registered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub name: &'static str,
    /// Full prefix, namespace included.
    pub prefix: Vec<u8>,
}

/// Declares collections under one namespace.
#[derive(Debug)]
pub struct SchemaBuilder {
    namespace: Vec<u8>,
    collections: Vec<CollectionInfo>,
    empty: Vec<&'static str>,
}

impl SchemaBuilder {
    pub fn new(namespace: impl Into<Vec<u8>>) -> Self {
        Self {
            namespace: namespace.into(),
            collections: Vec::new(),
            empty: Vec::new(),
        }
    }

    fn register(&mut self, name: &'static str, prefix: &[u8]) -> Vec<u8> {
        if prefix.is_empty() {
            self.empty.push(name);
        }
        let mut full = self.namespace.clone();
        full.extend_from_slice(prefix);
        self.collections.push(CollectionInfo {
            name,
            prefix: full.clone(),
        });
        full
    }

    pub fn map<K, V>(&mut self, name: &'static str, prefix: &[u8]) -> Map<K, V>
    where
        K: KeyCodec,
        V: Serialize + DeserializeOwned,
    {
        Map::new(name, self.register(name, prefix))
    }

    pub fn item<V>(&mut self, name: &'static str, prefix: &[u8]) -> Item<V>
    where
        V: Serialize + DeserializeOwned,
    {
        Item::new(name, self.register(name, prefix))
    }

    pub fn sequence(&mut self, name: &'static str, prefix: &[u8]) -> Sequence {
        Sequence::new(Item::new(name, self.register(name, prefix)))
    }

    /// Validate the layout.
    ///
    /// Fails on an empty prefix, a repeated name, or two prefixes where one
    /// starts with the other.
    pub fn build(self) -> Result<Schema, SchemaError> {
        if let Some(&name) = self.empty.first() {
            return Err(SchemaError::EmptyPrefix { name });
        }

        let mut names = HashSet::new();
        for info in &self.collections {
            if !names.insert(info.name) {
                return Err(SchemaError::DuplicateName { name: info.name });
            }
        }

        for (i, first) in self.collections.iter().enumerate() {
            for second in &self.collections[i + 1..] {
                if first.prefix.starts_with(&second.prefix)
                    || second.prefix.starts_with(&first.prefix)
                {
                    return Err(SchemaError::OverlappingPrefix {
                        first: first.name,
                        first_prefix: String::from_utf8_lossy(&first.prefix).into_owned(),
                        second: second.name,
                        second_prefix: String::from_utf8_lossy(&second.prefix).into_owned(),
                    });
                }
            }
        }

        Ok(Schema {
            namespace: self.namespace,
            collections: self.collections,
        })
    }
}

/// A validated collection layout.
#[derive(Debug, Clone)]
pub struct Schema {
    namespace: Vec<u8>,
    collections: Vec<CollectionInfo>,
}

impl Schema {
    pub fn namespace(&self) -> &[u8] {
        &self.namespace
    }

    pub fn collections(&self) -> &[CollectionInfo] {
        &self.collections
    }
}
