//! Error types for the hash tree system.

use thiserror::Error;

/// Tree-construction errors
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("Cannot build a tree from an empty block sequence")]
    EmptyInput,
}

/// CLI-surface errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tree error: {0}")]
    TreeError(#[from] TreeError),
}
