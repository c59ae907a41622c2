//! Commitment for the commit-reveal scheme.

use super::hasher::HmacSha256;
use super::key::SecretKey;
use super::traits::KeyedHasher;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Commitment = HMAC(key, move label)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "super::hex32")] [u8; 32]);

impl Commitment {
    /// Commit to `label` under `key`
    pub fn new<H: KeyedHasher + ?Sized>(hasher: &H, key: &SecretKey, label: &str) -> Result<Self> {
        Ok(Self(hasher.digest(key.as_bytes(), label.as_bytes())?))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that `key` and `label` produce this commitment
    pub fn verify<H: KeyedHasher + ?Sized>(
        &self,
        hasher: &H,
        key: &SecretKey,
        label: &str,
    ) -> Result<bool> {
        hasher.verify(key.as_bytes(), label.as_bytes(), &self.0)
    }
}

impl FromStr for Commitment {
    type Err = GameError;

    /// Hex digits in either case
    fn from_str(s: &str) -> Result<Self> {
        let bytes = hex::decode(s.trim()).map_err(|e| GameError::InvalidKey(e.to_string()))?;
        let bytes: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            GameError::InvalidKey(format!("commitment must be 32 bytes, got {}", v.len()))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Check a published disclosure from its hex parts.
///
/// This is what an auditor runs after a round: parse the commitment shown
/// before the move, then recompute the HMAC with the disclosed key.
pub fn verify_disclosure(commitment_hex: &str, key_hex: &str, label: &str) -> Result<bool> {
    let commitment: Commitment = commitment_hex.parse()?;
    let key = SecretKey::from_hex(key_hex)?;
    commitment.verify(&HmacSha256, &key, label)
}
