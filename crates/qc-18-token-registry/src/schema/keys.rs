//! Key codecs for `Map` collections.
//!
//! Encodings must preserve order: byte order of encoded keys equals the
//! natural order of the keys, so store iteration is key order.

/// Encode/decode a map key to/from its raw suffix.
pub trait KeyCodec: Sized {
    fn encode_key(&self) -> Vec<u8>;

    fn decode_key(bytes: &[u8]) -> Result<Self, String>;
}

/// Big-endian, fixed 8 bytes.
impl KeyCodec for u64 {
    fn encode_key(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }

    fn decode_key(bytes: &[u8]) -> Result<Self, String> {
        let raw: [u8; 8] = bytes
            .try_into()
            .map_err(|_| format!("expected 8 bytes, got {}", bytes.len()))?;
        Ok(u64::from_be_bytes(raw))
    }
}

/// Raw UTF-8.
impl KeyCodec for String {
    fn encode_key(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn decode_key(bytes: &[u8]) -> Result<Self, String> {
        String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
    }
}
