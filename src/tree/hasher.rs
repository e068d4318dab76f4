//! Digest computation for tree nodes using SHA-256

use crate::types::Digest;
use sha2::{Digest as _, Sha256};

/// Compute the SHA-256 digest of arbitrary data
///
/// Deterministic and total: defined for every byte sequence, including the
/// empty one. Always produces a 32-byte digest.
pub fn compute_digest(data: &[u8]) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(data);
    Digest::new(hasher.finalize().to_vec())
}
