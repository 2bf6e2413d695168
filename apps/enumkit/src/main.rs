//! # enumkit
//!
//! Command-line front end for `enumkit-core`.
//!
//! ## Usage
//!
//! ```bash
//! # Lines with their indices (LF, CRLF and CR all recognized)
//! enumkit lines -f notes.txt
//!
//! # key=value file to an ordered mapping, as JSON
//! enumkit --json-mode pairs -f settings.env
//!
//! # Walk a CSV-like table row-major
//! enumkit grid -f table.csv -d ';'
//! ```
//!
//! ## Logging
//!
//! `RUST_LOG` overrides the filter; `ENUMKIT_LOG_FORMAT=json` switches to
//! machine-parseable log lines. Logs go to stderr, results to stdout.

use clap::Parser;
use enumkit::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments first so --verbose can raise the default level
    let cli = cli::Cli::parse();

    let log_format = std::env::var("ENUMKIT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let default_filter = if cli.verbose {
        "enumkit=debug"
    } else {
        "enumkit=info"
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

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = cli::execute(cli, &mut out) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}
