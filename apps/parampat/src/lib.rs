//! # parampat
//!
//! Library half of the parampat binary: the CLI surface, parameter files
//! and the binary's error type. Split out so integration tests can drive
//! the commands without spawning a process.

pub mod cli;
pub mod config;
pub mod error;

pub use error::CliError;
