//! Tree rendering as a lazy sequence of formatted lines
//!
//! Formatting is decoupled from I/O: callers route the lines to any sink.
//! Each node line shows its level, indentation proportional to the level, and
//! the node's hex digest; leaf lines additionally show the raw payload.
//! Padding sentinels produce no output.

use crate::tree::node::{Element, Leaf, Node};

/// Render a tree as formatted lines, root first
///
/// Pre-order: a node's own line, then its left subtree, then its right
/// subtree, with children one level deeper than their parent.
pub fn lines(root: &Node) -> Lines<'_> {
    Lines {
        stack: vec![Frame::Node(root, 0)],
    }
}

enum Frame<'a> {
    Node(&'a Node, usize),
    Leaf(&'a Leaf, usize),
}

/// Lazy line iterator over a borrowed tree
pub struct Lines<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> Lines<'a> {
    fn push_child(&mut self, child: &'a Element, level: usize) {
        match child {
            Element::Node(node) => self.stack.push(Frame::Node(node, level)),
            Element::Leaf(leaf) => self.stack.push(Frame::Leaf(leaf, level)),
            Element::Empty => {}
        }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.stack.pop()? {
            Frame::Node(node, level) => {
                // Right pushed first so the left subtree pops first.
                self.push_child(node.right(), level + 1);
                self.push_child(node.left(), level + 1);
                Some(format!(
                    "({}) {} {}",
                    level,
                    " ".repeat(level),
                    node.digest()
                ))
            }
            Frame::Leaf(leaf, level) => Some(format!(
                "({}) {} {} (data: {})",
                level,
                " ".repeat(level),
                leaf.digest(),
                leaf.payload_text()
            )),
        }
    }
}
