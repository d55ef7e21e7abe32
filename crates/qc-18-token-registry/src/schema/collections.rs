//! Typed collections over the raw `KeyValueStore`.
//!
//! A collection is only a prefix plus codecs; it holds no data and no store
//! handle. Every call takes the host's transaction-scoped store.

use super::codec::{decode, encode};
use super::keys::KeyCodec;
use crate::domain::errors::StoreError;
use crate::ports::outbound::{KeyValueStore, KvIter};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::marker::PhantomData;

/// Keyed collection `K -> V` under one prefix.
pub struct Map<K, V> {
    name: &'static str,
    prefix: Vec<u8>,
    _marker: PhantomData<fn() -> (K, V)>,
}

impl<K, V> Clone for Map<K, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            prefix: self.prefix.clone(),
            _marker: PhantomData,
        }
    }
}

impl<K, V> fmt::Debug for Map<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("name", &self.name)
            .field("prefix", &String::from_utf8_lossy(&self.prefix))
            .finish()
    }
}

impl<K, V> Map<K, V>
where
    K: KeyCodec,
    V: Serialize + DeserializeOwned,
{
    pub(crate) fn new(name: &'static str, prefix: Vec<u8>) -> Self {
        Self {
            name,
            prefix,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    fn full_key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = Vec::with_capacity(self.prefix.len() + suffix.len());
        key.extend_from_slice(&self.prefix);
        key.extend_from_slice(suffix);
        key
    }

    pub fn get(&self, store: &dyn KeyValueStore, key: &K) -> Result<Option<V>, StoreError> {
        match store.get(&self.full_key(&key.encode_key()))? {
            Some(bytes) => decode(self.name, &bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn set(&self, store: &mut dyn KeyValueStore, key: &K, value: &V) -> Result<(), StoreError> {
        let bytes = encode(self.name, value)?;
        store.put(&self.full_key(&key.encode_key()), &bytes)
    }

    pub fn remove(&self, store: &mut dyn KeyValueStore, key: &K) -> Result<(), StoreError> {
        store.delete(&self.full_key(&key.encode_key()))
    }

    pub fn has(&self, store: &dyn KeyValueStore, key: &K) -> Result<bool, StoreError> {
        store.exists(&self.full_key(&key.encode_key()))
    }

    /// Raw `(key suffix, value bytes)` pairs from `start` (a key suffix)
    /// onwards, ascending. Nothing is decoded.
    pub fn iter_raw_from<'a>(
        &self,
        store: &'a dyn KeyValueStore,
        start: Option<&[u8]>,
    ) -> Result<KvIter<'a>, StoreError> {
        let start_key = match start {
            Some(suffix) => self.full_key(suffix),
            None => self.prefix.clone(),
        };
        let prefix_len = self.prefix.len();

        let iter = store
            .range_from(&self.prefix, &start_key)?
            .map(move |entry| {
                entry.map(|(key, value)| (key[prefix_len..].to_vec(), value))
            });
        Ok(Box::new(iter))
    }

    /// Decode one raw entry produced by `iter_raw_from`.
    pub fn decode_entry(&self, suffix: &[u8], value: &[u8]) -> Result<(K, V), StoreError> {
        let key = K::decode_key(suffix).map_err(|message| StoreError::MalformedKey {
            collection: self.name,
            message,
        })?;
        Ok((key, decode(self.name, value)?))
    }

    /// Lazy typed iteration in ascending key order, optionally from `start`.
    pub fn iter<'a>(
        &'a self,
        store: &'a dyn KeyValueStore,
        start: Option<&K>,
    ) -> Result<impl Iterator<Item = Result<(K, V), StoreError>> + 'a, StoreError> {
        let start = start.map(KeyCodec::encode_key);
        let raw = self.iter_raw_from(store, start.as_deref())?;
        Ok(raw.map(move |entry| {
            entry.and_then(|(suffix, value)| self.decode_entry(&suffix, &value))
        }))
    }

    /// Visit entries in key order until `f` returns `Ok(true)` or an error.
    pub fn walk<E, F>(&self, store: &dyn KeyValueStore, mut f: F) -> Result<(), E>
    where
        E: From<StoreError>,
        F: FnMut(K, V) -> Result<bool, E>,
    {
        for entry in self.iter(store, None)? {
            let (key, value) = entry?;
            if f(key, value)? {
                break;
            }
        }
        Ok(())
    }
}

/// Singleton value under one key.
pub struct Item<V> {
    name: &'static str,
    key: Vec<u8>,
    _marker: PhantomData<fn() -> V>,
}

impl<V> Clone for Item<V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            key: self.key.clone(),
            _marker: PhantomData,
        }
    }
}

impl<V> fmt::Debug for Item<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("name", &self.name)
            .field("key", &String::from_utf8_lossy(&self.key))
            .finish()
    }
}

impl<V> Item<V>
where
    V: Serialize + DeserializeOwned,
{
    pub(crate) fn new(name: &'static str, key: Vec<u8>) -> Self {
        Self {
            name,
            key,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get(&self, store: &dyn KeyValueStore) -> Result<Option<V>, StoreError> {
        match store.get(&self.key)? {
            Some(bytes) => decode(self.name, &bytes).map(Some),
            None => Ok(None),
        }
    }

    pub fn set(&self, store: &mut dyn KeyValueStore, value: &V) -> Result<(), StoreError> {
        let bytes = encode(self.name, value)?;
        store.put(&self.key, &bytes)
    }

    pub fn remove(&self, store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
        store.delete(&self.key)
    }

    pub fn has(&self, store: &dyn KeyValueStore) -> Result<bool, StoreError> {
        store.exists(&self.key)
    }
}
