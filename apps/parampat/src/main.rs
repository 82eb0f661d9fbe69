//! # parampat
//!
//! Command line front end for the parampat pattern engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │            apps/parampat (THE BINARY)          │
//! │                                               │
//! │  ┌─────────────┐        ┌─────────────────┐   │
//! │  │   CLI       │        │ Parameter files │   │
//! │  │  (clap)     │        │     (toml)      │   │
//! │  └──────┬──────┘        └────────┬────────┘   │
//! │         └───────────┬────────────┘            │
//! │                     ▼                         │
//! │             ┌───────────────┐                 │
//! │             │ parampat-core │                 │
//! │             │  (THE LOGIC)  │                 │
//! │             └───────────────┘                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! parampat describe "[Integer range 0...10 (inclusive)]" --style text
//! parampat check "[List of <[Bool]> of length 0...2 (inclusive)]" "true, false"
//! parampat validate --file params.toml
//! parampat default-pattern int-list-list
//! ```

use clap::Parser;
use parampat::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = cli::Cli::parse();

    // PARAMPAT_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("PARAMPAT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "parampat=debug"
    } else {
        "parampat=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
