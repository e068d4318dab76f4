//! Hashtree: Merkle Tree Construction
//!
//! Builds a binary hash tree over an ordered list of data blocks, producing a
//! single SHA-256 root digest that commits to all input data.

pub mod cli;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;
