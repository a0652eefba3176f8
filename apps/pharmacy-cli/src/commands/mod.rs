//! # Commands
//!
//! Argument definitions and dispatch.
//!
//! ## Command Tree
//! ```text
//! pharmacy [--data-dir DIR] [--config FILE] [--format text|json]
//!   ├── medicine list
//!   ├── medicine add   --id --name --quantity --price
//!   ├── customer list
//!   ├── customer add   --id --name [--contact]
//!   ├── order list
//!   ├── order choices
//!   ├── order add      --order-id --customer-id --medicine-id --quantity
//!   │                  [--enforce-references]
//!   └── summary
//! ```
//!
//! Field values are taken as plain strings and handed to the forms in
//! `pharmacy-core`, so a bad number is reported the same way whichever
//! front end typed it.

pub mod customer;
pub mod medicine;
pub mod order;
pub mod summary;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pharmacy_store::{Pharmacy, ReferencePolicy};

use crate::error::CliResult;
use crate::output::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "pharmacy")]
#[command(author, version, about = "Medicine, customer and order records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding Medicine.txt, Customer.txt and Order.txt
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Store configuration file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage medicines
    Medicine {
        #[command(subcommand)]
        action: medicine::MedicineAction,
    },

    /// Manage customers
    Customer {
        #[command(subcommand)]
        action: customer::CustomerAction,
    },

    /// Manage orders
    Order {
        #[command(subcommand)]
        action: order::OrderAction,
    },

    /// Record counts and total stock value
    Summary,
}

impl Command {
    /// Reference policy this command asks for, if it overrides the config.
    pub fn reference_override(&self) -> Option<ReferencePolicy> {
        match self {
            Command::Order {
                action: order::OrderAction::Add(args),
            } if args.enforce_references => Some(ReferencePolicy::Enforce),
            _ => None,
        }
    }
}

/// Runs one command and returns what to print.
pub fn execute(
    pharmacy: &mut Pharmacy,
    command: Command,
    format: OutputFormat,
) -> CliResult<String> {
    match command {
        Command::Medicine { action } => medicine::run(pharmacy, action, format),
        Command::Customer { action } => customer::run(pharmacy, action, format),
        Command::Order { action } => order::run(pharmacy, action, format),
        Command::Summary => summary::run(pharmacy, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pharmacy", "medicine", "list", "--format", "json", "--data-dir", "/tmp/x",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Command::Medicine { .. }));
    }

    #[test]
    fn test_enforce_flag_overrides_policy() {
        let cli = Cli::try_parse_from([
            "pharmacy", "order", "add", "--order-id", "100", "--customer-id", "10",
            "--medicine-id", "1", "--quantity", "3", "--enforce-references",
        ])
        .unwrap();
        assert_eq!(cli.command.reference_override(), Some(ReferencePolicy::Enforce));

        let cli = Cli::try_parse_from(["pharmacy", "summary"]).unwrap();
        assert_eq!(cli.command.reference_override(), None);
    }

    #[test]
    fn test_field_values_stay_text() {
        let cli = Cli::try_parse_from([
            "pharmacy", "medicine", "add", "--id", "1", "--name", "Aspirin",
            "--quantity", "lots", "--price", "-1",
        ])
        .unwrap();

        match cli.command {
            Command::Medicine {
                action: medicine::MedicineAction::Add(args),
            } => {
                assert_eq!(args.quantity, "lots");
                assert_eq!(args.price, "-1");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
