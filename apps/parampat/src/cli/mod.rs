//! # parampat CLI Module
//!
//! This module implements the CLI interface for parampat.
//!
//! ## Available Commands
//!
//! - `describe` - Rebuild a pattern from its description and render it
//! - `check` - Check one value against a pattern
//! - `validate` - Check every parameter in a TOML parameter file
//! - `default-pattern` - Show the default pattern of a value shape

mod commands;

use crate::error::CliError;
use clap::{Parser, Subcommand, ValueEnum};
use parampat_core::OutputStyle;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// parampat - typed parameter patterns
///
/// Validates parameter strings against pattern descriptions and explains
/// what an acceptable value looks like.
#[derive(Parser, Debug)]
#[command(name = "parampat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print results only, without headings
    #[arg(short, long, global = true)]
    pub quiet: bool,

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
    /// Rebuild a pattern from its Machine description and render it
    Describe {
        /// Machine description, e.g. "[Integer range 0...10 (inclusive)]"
        description: String,

        /// Rendering style (machine, text, latex)
        #[arg(short, long, default_value = "text")]
        style: OutputStyle,
    },

    /// Check a value against a pattern (fails if it does not match)
    Check {
        /// Machine description of the pattern
        description: String,

        /// Value to check
        value: String,
    },

    /// Check every parameter in a TOML parameter file
    Validate {
        /// Path to the parameter file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Show the default pattern for a value shape
    DefaultPattern {
        /// Value shape
        shape: Shape,

        /// Rendering style (machine, text, latex)
        #[arg(short, long, default_value = "machine")]
        style: OutputStyle,
    },
}

/// Value shapes with a built-in default pattern.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `i64`
    Int,
    /// `f64`
    Double,
    /// `bool`
    Bool,
    /// `String`
    String,
    /// `Vec<i64>`
    IntList,
    /// `Vec<Vec<i64>>`
    IntListList,
    /// `BTreeMap<String, i64>`
    StringIntMap,
    /// `Complex<f64>`
    Complex,
    /// `[f64; 3]`
    Point3,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), CliError> {
    let output = Output {
        json_mode: cli.json_mode,
        quiet: cli.quiet,
    };

    match cli.command {
        Commands::Describe { description, style } => cmd_describe(output, &description, style),
        Commands::Check { description, value } => cmd_check(output, &description, &value),
        Commands::Validate { file } => cmd_validate(output, &file),
        Commands::DefaultPattern { shape, style } => cmd_default_pattern(output, shape, style),
    }
}

// =============================================================================
// TESTS
// =============================================================================
