//! Core types for the hash tree.

use std::fmt;

/// A content digest: the output of the tree's hash function.
///
/// Every SHA-256 digest is 32 bytes. The only zero-length digest in the system
/// is the padding sentinel's contribution (see `tree::node::Element::Empty`),
/// which is spliced verbatim into its parent's hash input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Digest(Vec<u8>);

impl Digest {
    pub fn new(bytes: Vec<u8>) -> Self {
        Digest(bytes)
    }

    /// The zero-length digest used by the padding sentinel.
    pub fn empty() -> Self {
        Digest(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Digest {
    /// Lowercase hex, no separators.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
