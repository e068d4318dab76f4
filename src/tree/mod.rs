//! Binary Merkle Tree
//!
//! Represents an ordered block sequence as a binary hash tree, where each
//! parent digest is the hash of its children's digests concatenated left to
//! right.

pub mod builder;
pub mod hasher;
pub mod node;
pub mod printer;
