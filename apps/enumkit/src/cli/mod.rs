//! # enumkit CLI Module
//!
//! This module implements the CLI interface for enumkit.
//!
//! ## Available Commands
//!
//! - `lines` - List the lines of a file with their indices
//! - `pairs` - Collect `key=value` lines into an ordered mapping
//! - `grid` - Walk a delimited table cell by cell, row-major

mod commands;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};
use enumkit_core::EnumError;
use std::io::Write;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// enumkit - lazy enumeration over text files
///
/// Splits files into lines on any line-break convention, turns key/value
/// files into mappings, and walks tables with their coordinates.
#[derive(Parser, Debug)]
#[command(name = "enumkit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the lines of a file with their indices
    Lines {
        /// Path to the input file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Collect `key<separator>value` lines into an ordered mapping
    Pairs {
        /// Path to the input file
        #[arg(short, long)]
        file: PathBuf,

        /// Separator between key and value
        #[arg(short, long, default_value = "=", value_parser = NonEmptyStringValueParser::new())]
        separator: String,
    },

    /// Walk a delimited table row-major, printing each cell's coordinates
    Grid {
        /// Path to the input file
        #[arg(short, long)]
        file: PathBuf,

        /// Delimiter between cells of a row
        #[arg(short, long, default_value = ",", value_parser = NonEmptyStringValueParser::new())]
        delimiter: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments, writing results to `out`.
pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<(), EnumError> {
    let json_mode = cli.json_mode;

    match cli.command {
        Commands::Lines { file } => cmd_lines(&file, json_mode, out),
        Commands::Pairs { file, separator } => cmd_pairs(&file, &separator, json_mode, out),
        Commands::Grid { file, delimiter } => cmd_grid(&file, &delimiter, json_mode, out),
    }
}
