//! Capability traits for randomness and keyed hashing.
//!
//! The protocol never calls a random number generator or a MAC directly.
//! It goes through these traits so production code can use the operating
//! system CSPRNG while tests substitute a seeded source.

use crate::error::Result;

/// Source of secret random bytes
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes or fail. Implementations must
    /// never fall back to a weaker generator.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()>;

    /// Draw an index uniformly from `[0, n)`.
    ///
    /// Rejection sampling over `u64` keeps the draw unbiased for any `n`.
    fn index_below(&mut self, n: usize) -> Result<usize> {
        debug_assert!(n > 0, "cannot draw from an empty range");
        let n = n as u64;
        // 2^64 mod n: values below this would over-represent small residues
        let threshold = n.wrapping_neg() % n;
        loop {
            let mut buf = [0u8; 8];
            self.fill_bytes(&mut buf)?;
            let value = u64::from_le_bytes(buf);
            if value >= threshold {
                return Ok((value % n) as usize);
            }
        }
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        (**self).fill_bytes(dest)
    }

    fn index_below(&mut self, n: usize) -> Result<usize> {
        (**self).index_below(n)
    }
}

/// Keyed hash-MAC provider producing 32-byte tags
pub trait KeyedHasher {
    /// Compute the tag of `message` under `key`
    fn digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32]>;

    /// Check `expected` against the tag of `message` under `key`
    fn verify(&self, key: &[u8], message: &[u8], expected: &[u8]) -> Result<bool> {
        Ok(self.digest(key, message)?.as_slice() == expected)
    }
}

impl<H: KeyedHasher + ?Sized> KeyedHasher for &H {
    fn digest(&self, key: &[u8], message: &[u8]) -> Result<[u8; 32]> {
        (**self).digest(key, message)
    }

    fn verify(&self, key: &[u8], message: &[u8], expected: &[u8]) -> Result<bool> {
        (**self).verify(key, message, expected)
    }
}
