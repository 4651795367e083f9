//! # joltcount CLI Module
//!
//! ## Available Commands
//!
//! - `tally` - Count 1-jolt and 3-jolt steps and their product
//! - `arrangements` - Count distinct valid adapter orderings
//! - `levels` - Show the derived level sequence with per-level reach
//! - `solve` - Run both counts over one input file

mod commands;

use clap::{Parser, Subcommand};
use joltcount_core::ChainError;
use std::path::PathBuf;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// joltcount - adapter-chain arrangement counter
///
/// Derives the joltage level chain from a file of adapter ratings, tallies
/// the step sizes, and counts the distinct valid arrangements.
#[derive(Parser, Debug)]
#[command(name = "joltcount")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long = "json", global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count 1-jolt and 3-jolt steps and report their product
    Tally {
        /// Path to the newline-delimited ratings file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Count the distinct valid arrangements of the chain
    Arrangements {
        /// Path to the newline-delimited ratings file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the derived level sequence, gaps, and per-level reach
    Levels {
        /// Path to the newline-delimited ratings file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Run both the tally and the arrangement count
    Solve {
        /// Path to the newline-delimited ratings file
        #[arg(short, long)]
        file: PathBuf,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), ChainError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Tally { file } => commands::cmd_tally(&file, json_mode),
        Commands::Arrangements { file } => commands::cmd_arrangements(&file, json_mode),
        Commands::Levels { file } => commands::cmd_levels(&file, json_mode),
        Commands::Solve { file } => commands::cmd_solve(&file, json_mode),
    }
}
