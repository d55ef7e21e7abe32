//! Hex account references: `0x` followed by 40 hex digits (20 bytes).

use crate::domain::errors::AddressError;
use crate::ports::outbound::AddressCodec;

/// Address length in bytes.
pub const ADDRESS_LEN: usize = 20;

#[derive(Debug, Default, Clone, Copy)]
pub struct HexAddressCodec;

impl HexAddressCodec {
    pub fn new() -> Self {
        Self
    }
}

impl AddressCodec for HexAddressCodec {
    fn string_to_bytes(&self, text: &str) -> Result<Vec<u8>, AddressError> {
        if text.trim().is_empty() {
            return Err(AddressError::Empty);
        }
        let digits = text.strip_prefix("0x").ok_or(AddressError::MissingPrefix)?;
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: digits.len() / 2,
            });
        }
        hex::decode(digits).map_err(|e| AddressError::InvalidHex(e.to_string()))
    }

    fn bytes_to_string(&self, bytes: &[u8]) -> Result<String, AddressError> {
        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength {
                expected: ADDRESS_LEN,
                actual: bytes.len(),
            });
        }
        Ok(format!("0x{}", hex::encode(bytes)))
    }
}
