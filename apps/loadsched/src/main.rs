//! # loadsched - Load Shedding Schedule Tool
//!
//! Answers "when is my power scheduled to be cut".
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/loadsched (THE BINARY)               │
//! │                                                          │
//! │  ┌─────────────┐   ┌──────────────┐   ┌──────────────┐   │
//! │  │    CLI      │   │ Status Lookup│   │    Config    │   │
//! │  │   (clap)    │   │  (reqwest)   │   │    (toml)    │   │
//! │  └──────┬──────┘   └──────┬───────┘   └──────┬───────┘   │
//! │         └─────────────────┼──────────────────┘           │
//! │                           ▼                              │
//! │                  ┌────────────────┐                      │
//! │                  │ loadsched-core │                      │
//! │                  │  (THE MODEL)   │                      │
//! │                  └────────────────┘                      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Today's slots for the live stage, groups 4 and 12
//! loadsched -f schedule.txt -g 4 -g 12
//!
//! # Day 17 at stage 3
//! loadsched -d 17 -s 3
//!
//! # Everything in the file
//! loadsched print-schedule
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing. LOADSCHED_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries the schedule.
    let log_format = std::env::var("LOADSCHED_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "loadsched=warn,loadsched_core=warn".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Parse CLI arguments
    let cli = loadsched::cli::Cli::parse();

    // Execute command
    let mut stdout = std::io::stdout().lock();
    if let Err(e) = loadsched::cli::execute(cli, &mut stdout).await {
        tracing::error!("Error: {}", e);
        // Printed regardless of RUST_LOG.
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
