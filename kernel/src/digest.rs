//! Canonical hashing of kernel results.
//!
//! A result is hashed by its IEEE-754 bit pattern, not its decimal
//! rendering, so `0.0` and `-0.0` (and distinct NaN payloads) get distinct
//! digests. Two runs agree on a digest only if they produced bit-identical
//! sums.
//!
//! Algorithm: SHA-256 over `domain || data`, rendered `"sha256:<hex>"`.

use sha2::{Digest, Sha256};

/// Domain prefix for summation result hashing. Null-terminated.
pub const DOMAIN_SUM_RESULT: &[u8] = b"CSUM::SUM_RESULT::V1\0";

/// A SHA-256 digest rendered as `"sha256:<lowercase hex>"`.
///
/// Only [`canonical_hash`] constructs one, so the prefix and the 64 hex
/// digits are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash(String);

impl ContentHash {
    /// The full string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the canonical hash of a byte slice with domain separation.
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
}

/// Little-endian bytes of a result's bit pattern.
#[must_use]
pub fn result_bytes(value: f64) -> [u8; 8] {
    value.to_bits().to_le_bytes()
}

/// Digest of a summation result under [`DOMAIN_SUM_RESULT`].
#[must_use]
pub fn result_digest(value: f64) -> ContentHash {
    canonical_hash(DOMAIN_SUM_RESULT, &result_bytes(value))
}
