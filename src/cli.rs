//! CLI definitions and command execution for hashtree.

use crate::error::CliError;
use crate::tree::builder::build_tree;
use crate::tree::node::{Element, Leaf};
use crate::tree::printer;
use clap::Parser;
use tracing::info;

/// Reference scenario blocks used when no blocks are supplied.
const DEFAULT_BLOCKS: [&str; 4] = ["a", "b", "c", "d"];

/// Hashtree CLI - Merkle tree construction over ordered data blocks
#[derive(Parser)]
#[command(name = "hashtree")]
#[command(about = "Builds a binary Merkle tree over data blocks and prints it with SHA-256 digests")]
pub struct Cli {
    /// Data blocks, in order (defaults to the blocks a b c d)
    pub blocks: Vec<String>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

/// Build the tree from the CLI's blocks and render it
///
/// Returns the full rendered tree as one string; the caller decides the sink.
pub fn run(cli: &Cli) -> Result<String, CliError> {
    let blocks: Vec<&str> = if cli.blocks.is_empty() {
        DEFAULT_BLOCKS.to_vec()
    } else {
        cli.blocks.iter().map(String::as_str).collect()
    };

    info!(block_count = blocks.len(), "Building tree");

    let elements: Vec<Element> = blocks
        .into_iter()
        .map(|block| Leaf::new(block).into())
        .collect();

    let root = build_tree(elements)?;

    let rendered: Vec<String> = printer::lines(&root).collect();
    Ok(rendered.join("\n"))
}

/// Map an error to a user-facing message
pub fn map_error(error: &CliError) -> String {
    format!("Error: {}", error)
}
