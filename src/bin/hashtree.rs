//! Hashtree CLI Binary
//!
//! Builds a Merkle tree over the supplied data blocks and prints the tree
//! structure with each node's digest.

use clap::Parser;
use hashtree::cli::{self, Cli};
use hashtree::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Hashtree CLI starting");

    match cli::run(&cli) {
        Ok(output) => {
            info!("Tree rendered successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Tree construction failed: {}", e);
            eprintln!("{}", cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI arguments
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    // If --verbose is not set, disable logging
    if !cli.verbose {
        let mut config = LoggingConfig::default();
        config.level = "off".to_string();
        return config;
    }

    let mut config = LoggingConfig::default();

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
