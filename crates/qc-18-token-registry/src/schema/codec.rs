//! Value encoding for stored records (bincode).

use crate::domain::errors::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) fn encode<V: Serialize>(collection: &'static str, value: &V) -> Result<Vec<u8>, StoreError> {
    bincode::serialize(value).map_err(|e| StoreError::Codec {
        collection,
        message: e.to_string(),
    })
}

pub(crate) fn decode<V: DeserializeOwned>(
    collection: &'static str,
    bytes: &[u8],
) -> Result<V, StoreError> {
    bincode::deserialize(bytes).map_err(|e| StoreError::Codec {
        collection,
        message: e.to_string(),
    })
}
