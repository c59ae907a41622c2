//! HMAC-SHA256 keyed hasher.

use super::traits::KeyedHasher;
use crate::error::{GameError, Result};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256Mac = Hmac<Sha256>;

/// HMAC-SHA256 provider
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    fn keyed(key: &[u8]) -> Result<HmacSha256Mac> {
        HmacSha256Mac::new_from_slice(key).map_err(|e| GameError::InvalidKey(e.to_string()))
    }
}

impl KeyedHasher for HmacSha256 {
    fn digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32]> {
        let mut mac = Self::keyed(key)?;
        mac.update(message);
        Ok(mac.finalize().into_bytes().into())
    }

    /// Constant-time comparison
    fn verify(&self, key: &[u8], message: &[u8], expected: &[u8]) -> Result<bool> {
        let mut mac = Self::keyed(key)?;
        mac.update(message);
        Ok(mac.verify_slice(expected).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231, test case 2
    const KEY: &[u8] = b"Jefe";
    const DATA: &[u8] = b"what do ya want for nothing?";
    const TAG: &str = "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";

    #[test]
    fn test_rfc4231_vector() {
        let tag = HmacSha256.digest(KEY, DATA).unwrap();
        assert_eq!(hex::encode(tag), TAG);
    }

    #[test]
    fn test_verify_accepts_matching_tag() {
        let tag = hex::decode(TAG).unwrap();
        assert!(HmacSha256.verify(KEY, DATA, &tag).unwrap());
    }

    #[test]
    fn test_verify_rejects_other_message() {
        let tag = hex::decode(TAG).unwrap();
        assert!(!HmacSha256.verify(KEY, b"what do ya want for something?", &tag).unwrap());
    }

    #[test]
    fn test_verify_rejects_truncated_tag() {
        let tag = hex::decode(TAG).unwrap();
        assert!(!HmacSha256.verify(KEY, DATA, &tag[..16]).unwrap());
    }
}
