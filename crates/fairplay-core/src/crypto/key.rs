//! Per-round secret key.

use super::traits::EntropySource;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key length in bytes (256 bits)
pub const KEY_LEN: usize = 32;

/// 256-bit HMAC key, drawn fresh for every round
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "super::hex32")] [u8; KEY_LEN]);

impl SecretKey {
    /// Draw a new key from `entropy`
    pub fn generate<E: EntropySource + ?Sized>(entropy: &mut E) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        entropy.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex string (either case)
    pub fn from_hex(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_LEN] = bytes.try_into().map_err(|v: Vec<u8>| {
            GameError::InvalidKey(format!("expected {} bytes, got {}", KEY_LEN, v.len()))
        })?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Lowercase hex form, as disclosed to the player
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

// Debug prints a 4-byte prefix only
impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SeededEntropy;

    #[test]
    fn test_hex_roundtrip_any_case() {
        let key = SecretKey::generate(&mut SeededEntropy::new(3)).unwrap();
        let upper = key.to_hex().to_uppercase();

        assert_eq!(SecretKey::from_hex(&upper).unwrap(), key);
    }

    #[test]
    fn test_from_hex_rejects_wrong_length() {
        assert!(matches!(
            SecretKey::from_hex("abcd"),
            Err(GameError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_from_hex_rejects_non_hex() {
        let bad = "zz".repeat(KEY_LEN);
        assert!(matches!(
            SecretKey::from_hex(&bad),
            Err(GameError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_bytes([0xab; KEY_LEN]);
        let printed = format!("{:?}", key);

        assert_eq!(printed, "SecretKey(abababab..)");
    }

    #[test]
    fn test_fresh_keys_differ() {
        let mut entropy = SeededEntropy::new(11);
        let a = SecretKey::generate(&mut entropy).unwrap();
        let b = SecretKey::generate(&mut entropy).unwrap();

        assert_ne!(a, b);
    }
}
