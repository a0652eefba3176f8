//! `pharmacy` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use pharmacy_cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    pharmacy_cli::init_tracing();

    match pharmacy_cli::run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            match format {
                OutputFormat::Json => eprintln!("{}", e.to_json()),
                OutputFormat::Text => eprintln!("error: {}", e),
            }
            ExitCode::from(e.exit_code())
        }
    }
}
