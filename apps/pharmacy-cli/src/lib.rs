//! # Pharmacy CLI
//!
//! Command-line front end for the medicine, customer and order stores.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CLI Startup                                      │
//! │                                                                         │
//! │  1. Parse Arguments (clap) ──────────────────────────────────────────► │
//! │     • bad flags exit here with clap's usage message                    │
//! │                                                                         │
//! │  2. Initialize Tracing ──────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, stderr                       │
//! │     • Default: warn,pharmacy=info; override with RUST_LOG              │
//! │                                                                         │
//! │  3. Resolve Configuration ───────────────────────────────────────────► │
//! │     • --data-dir > PHARMACY_DATA_DIR > pharmacy.toml > platform dir   │
//! │                                                                         │
//! │  4. Open Stores ─────────────────────────────────────────────────────► │
//! │     • Pharmacy::open loads all three backing files                     │
//! │                                                                         │
//! │  5. Run Command, print result to stdout ─────────────────────────────► │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use pharmacy_store::Pharmacy;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub use commands::{Cli, Command};
pub use error::{CliError, CliResult, ErrorCode};
pub use output::OutputFormat;

/// Resolves configuration, opens the stores and runs the command.
///
/// Returns the text to print on success.
pub fn run(cli: Cli) -> CliResult<String> {
    let mut config = config::resolve(cli.data_dir, cli.config)?;

    if let Some(policy) = cli.command.reference_override() {
        debug!(%policy, "Reference policy overridden by flag");
        config = config.references(policy);
    }

    let mut pharmacy = Pharmacy::open(&config)?;

    let skipped = pharmacy.skipped_lines();
    if skipped > 0 {
        warn!(skipped, "Some records could not be read and were skipped");
    }

    commands::execute(&mut pharmacy, cli.command, cli.format)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every load, save and add
/// - `RUST_LOG=pharmacy_store=warn` - Only skipped lines and failures
/// - Default: `warn,pharmacy=info`
///
/// Logs go to stderr so stdout stays clean for `--format json`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,pharmacy=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
