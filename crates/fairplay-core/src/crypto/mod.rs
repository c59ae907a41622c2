//! Cryptographic primitives for the fairness protocol.
//!
//! This module provides:
//! - SecretKey and Commitment for the commit-reveal scheme
//! - EntropySource and KeyedHasher capabilities with their default providers

mod commitment;
mod entropy;
mod hasher;
mod key;
mod traits;

pub use commitment::{verify_disclosure, Commitment};
pub use entropy::{OsEntropy, SeededEntropy};
pub use hasher::HmacSha256;
pub use key::{SecretKey, KEY_LEN};
pub use traits::{EntropySource, KeyedHasher};

/// Hex (de)serialization for 32-byte values
mod hex32 {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        let bytes = hex::decode(&hex_str).map_err(serde::de::Error::custom)?;
        if bytes.len() != 32 {
            return Err(serde::de::Error::custom("expected 32 bytes"));
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(arr)
    }
}
