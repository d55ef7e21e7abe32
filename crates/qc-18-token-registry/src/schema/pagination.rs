//! # Query Paginator
//!
//! Cursor or offset paging over a `Map` in ascending key order.
//!
//! - `key` set: resume at that raw key suffix (the `next_key` of the
//!   previous page)
//! - otherwise: skip `offset` entries
//!
//! `next_key` is the key suffix of the first entry after the page, absent
//! when the collection is exhausted. `total` is only computed for
//! offset-based requests with `count_total`.
//!
//! Appends never disturb a cursor. Deleting entries at or before the
//! cursor between pages may skip or repeat entries.

use super::collections::Map;
use super::keys::KeyCodec;
use crate::domain::errors::RegistryError;
use crate::ports::outbound::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Raw key suffix to resume from. Mutually exclusive with `offset`.
    pub key: Option<Vec<u8>>,
    pub offset: u64,
    /// 0 means the configured default.
    pub limit: u64,
    pub count_total: bool,
}

impl PageRequest {
    pub fn with_limit(limit: u64) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Continue from a previous page's `next_key`.
    pub fn after(key: Vec<u8>, limit: u64) -> Self {
        Self {
            key: Some(key),
            limit,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResponse {
    pub next_key: Option<Vec<u8>>,
    pub total: Option<u64>,
}

/// Collect one page of `map`.
///
/// `limit` is the already-resolved page size (see
/// `RegistryConfig::effective_page_limit`).
pub fn paginate<K, V>(
    map: &Map<K, V>,
    store: &dyn KeyValueStore,
    request: &PageRequest,
    limit: u64,
) -> Result<(Vec<(K, V)>, PageResponse), RegistryError>
where
    K: KeyCodec,
    V: Serialize + DeserializeOwned,
{
    if request.key.is_some() && request.offset > 0 {
        return Err(RegistryError::InvalidRequest(
            "either offset or key is expected, got both".to_string(),
        ));
    }

    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    let mut items = Vec::new();
    let mut next_key = None;

    if let Some(key) = &request.key {
        let mut raw = map.iter_raw_from(store, Some(key.as_slice()))?;
        for entry in raw.by_ref().take(limit) {
            let (suffix, value) = entry?;
            items.push(map.decode_entry(&suffix, &value)?);
        }
        next_key = raw.next().transpose()?.map(|(suffix, _)| suffix);

        return Ok((
            items,
            PageResponse {
                next_key,
                total: None,
            },
        ));
    }

    let offset = request.offset;
    let mut count: u64 = 0;
    for entry in map.iter_raw_from(store, None)? {
        let (suffix, value) = entry?;
        count += 1;
        if count <= offset {
            continue;
        }
        if items.len() < limit {
            items.push(map.decode_entry(&suffix, &value)?);
            continue;
        }
        if next_key.is_none() {
            next_key = Some(suffix);
            if !request.count_total {
                break;
            }
        }
    }

    Ok((
        items,
        PageResponse {
            next_key,
            total: request.count_total.then_some(count),
        },
    ))
}
