//! # Checkout CLI Entry Point
//!
//! ```bash
//! # Price a basket with the default catalog and rules from pricing.toml
//! checkout atv atv atv vga
//!
//! # Explicit config, JSON receipt
//! checkout --config ./pricing.toml --json ipd ipd ipd ipd
//!
//! # Show the catalog
//! checkout --list-products
//! ```
//!
//! The actual work is in lib.rs for testability.

use std::process::ExitCode;

use checkout_cli::error::exit_code;
use checkout_cli::Cli;
use clap::Parser;

fn main() -> ExitCode {
    checkout_cli::init_tracing();

    let cli = Cli::parse();

    match checkout_cli::run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::from(exit_code::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
