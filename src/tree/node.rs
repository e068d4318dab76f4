//! Tree node types: leaves, internal nodes, and the padding sentinel

use crate::tree::hasher;
use crate::types::Digest;

/// A leaf holding a raw data block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    payload: Vec<u8>,
}

impl Leaf {
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Render the payload as text for display
    pub fn payload_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }

    pub fn digest(&self) -> Digest {
        hasher::compute_digest(&self.payload)
    }
}

/// An internal tree node with exactly two children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    left: Element,
    right: Element,
}

impl Node {
    pub fn new(left: Element, right: Element) -> Self {
        Self { left, right }
    }

    pub fn left(&self) -> &Element {
        &self.left
    }

    pub fn right(&self) -> &Element {
        &self.right
    }

    /// Digest = SHA-256(left digest || right digest), concatenated left to
    /// right with no separator.
    pub fn digest(&self) -> Digest {
        let left = self.left.digest();
        let right = self.right.digest();
        let mut input = Vec::with_capacity(left.len() + right.len());
        input.extend_from_slice(left.as_bytes());
        input.extend_from_slice(right.as_bytes());
        hasher::compute_digest(&input)
    }
}

/// A tree element: anything that can produce a digest
///
/// `Empty` is the padding sentinel used as a right child when a level has an
/// odd node count. Its digest is the zero-length byte sequence, spliced
/// verbatim into the parent's hash input rather than hashed first. The
/// reference scheme defines it this way; every root digest that touches a
/// padding slot depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Node(Box<Node>),
    Leaf(Leaf),
    Empty,
}

impl Element {
    pub fn digest(&self) -> Digest {
        match self {
            Element::Node(node) => node.digest(),
            Element::Leaf(leaf) => leaf.digest(),
            Element::Empty => Digest::empty(),
        }
    }
}

impl From<Leaf> for Element {
    fn from(leaf: Leaf) -> Self {
        Element::Leaf(leaf)
    }
}

impl From<Node> for Element {
    fn from(node: Node) -> Self {
        Element::Node(Box::new(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_digest_hashes_payload() {
        let leaf = Leaf::new("a");
        assert_eq!(leaf.digest(), hasher::compute_digest(b"a"));
    }

    #[test]
    fn test_empty_digest_is_zero_length() {
        // The sentinel contributes raw empty bytes, not SHA-256("").
        assert!(Element::Empty.digest().is_empty());
        assert_ne!(Element::Empty.digest(), hasher::compute_digest(b""));
    }

    #[test]
    fn test_node_digest_concatenates_children() {
        let node = Node::new(Leaf::new("a").into(), Leaf::new("b").into());

        let mut input = Vec::new();
        input.extend_from_slice(hasher::compute_digest(b"a").as_bytes());
        input.extend_from_slice(hasher::compute_digest(b"b").as_bytes());

        assert_eq!(node.digest(), hasher::compute_digest(&input));
    }

    #[test]
    fn test_node_with_empty_right_hashes_left_digest_only() {
        // H(left_digest || "") == H(left_digest)
        let node = Node::new(Leaf::new("a").into(), Element::Empty);
        let left_digest = hasher::compute_digest(b"a");
        assert_eq!(node.digest(), hasher::compute_digest(left_digest.as_bytes()));
    }

    #[test]
    fn test_node_digest_is_order_sensitive() {
        let ab = Node::new(Leaf::new("a").into(), Leaf::new("b").into());
        let ba = Node::new(Leaf::new("b").into(), Leaf::new("a").into());
        assert_ne!(ab.digest(), ba.digest());
    }
}
