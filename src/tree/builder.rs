//! Tree builder: recursive pairing reduction to a single root

use crate::error::TreeError;
use crate::tree::node::{Element, Node};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Build a Merkle tree from an ordered sequence of elements
///
/// Scans each level left to right in steps of two, pairing adjacent elements
/// into parent nodes; an unpaired trailing element is paired with the `Empty`
/// sentinel. Levels are reduced until exactly one node remains.
///
/// Element order is strictly positional and preserved through every level, so
/// the same input sequence always produces a bit-identical root digest.
///
/// A single-element input still goes through one pairing pass, yielding a node
/// whose right child is the sentinel. An empty input is rejected outright.
#[instrument(skip(elements), fields(element_count = elements.len()))]
pub fn build_tree(elements: Vec<Element>) -> Result<Node, TreeError> {
    if elements.is_empty() {
        return Err(TreeError::EmptyInput);
    }

    let start = Instant::now();
    let mut level = elements;
    let mut depth = 0usize;

    loop {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        let mut children = level.into_iter();

        while let Some(left) = children.next() {
            let right = children.next().unwrap_or(Element::Empty);
            next.push(Node::new(left, right));
        }

        depth += 1;
        debug!(level = depth, node_count = next.len(), "Paired level");

        if next.len() == 1 {
            let root = next.remove(0);
            info!(
                levels = depth,
                root = %root.digest(),
                duration_us = start.elapsed().as_micros() as u64,
                "Tree build completed"
            );
            return Ok(root);
        }

        level = next.into_iter().map(Element::from).collect();
    }
}
