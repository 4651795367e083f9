//! # joltcount
//!
//! Command-line front end for the joltcount counting engine.
//!
//! Reads newline-delimited adapter joltage ratings from a text file and
//! answers two questions about the resulting chain:
//! - `tally`: how many 1-jolt and 3-jolt steps the chain contains
//! - `arrangements`: how many distinct valid orderings the chain admits
//!
//! ```text
//! ┌────────────────────────────────────────────┐
//! │            apps/joltcount (THE BINARY)     │
//! │                                            │
//! │   CLI (clap) ──► file reader ──► output    │
//! │                      │                     │
//! │                      ▼                     │
//! │             ┌─────────────────┐            │
//! │             │ joltcount-core  │            │
//! │             │  (THE LOGIC)    │            │
//! │             └─────────────────┘            │
//! └────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! joltcount tally -f ratings.txt
//! joltcount arrangements -f ratings.txt
//! joltcount solve -f ratings.txt --json
//! ```

mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing — JOLTCOUNT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("JOLTCOUNT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let default_filter = if cli.verbose {
        "joltcount=debug"
    } else {
        "joltcount=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
