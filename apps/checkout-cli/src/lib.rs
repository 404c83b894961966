//! # Checkout CLI Library
//!
//! The orchestration layer around `checkout-core`. Kept separate from
//! `main.rs` so everything except argument parsing and process exit is
//! testable.
//!
//! ## Module Organization
//! ```text
//! checkout_cli/
//! ├── lib.rs      ◄─── You are here (run, tracing setup)
//! ├── cli.rs      ◄─── clap argument definitions
//! ├── config.rs   ◄─── PricingConfig: TOML file + env overrides
//! ├── output.rs   ◄─── receipt / catalog / rule rendering
//! └── error.rs    ◄─── CliError + exit codes
//! ```
//!
//! ## Run Sequence
//! ```text
//! load config ──► build catalog + rules ──► Checkout::new
//!      │                  │                       │
//!   CliError::Config*   InvalidRule /          scan each SKU
//!                       DuplicateSku /         (UnknownSku aborts)
//!                       Validation                │
//!                                                 ▼
//!                                         receipt → table | JSON
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;

use tracing::info;
use tracing_subscriber::EnvFilter;

use checkout_core::Checkout;

pub use cli::Cli;
pub use config::PricingConfig;
pub use error::{CliError, CliResult};

/// Runs one invocation and returns what should be printed on stdout.
pub fn run(cli: &Cli) -> CliResult<String> {
    let config = PricingConfig::load(cli.config.as_deref())?;
    price_basket(&config, &cli.skus, cli.json, cli.list_products)
}

/// Builds a session from `config`, scans `skus` in order and renders the
/// receipt.
pub fn price_basket(
    config: &PricingConfig,
    skus: &[String],
    json: bool,
    list_products: bool,
) -> CliResult<String> {
    let (catalog, rules) = config.build()?;
    let mut checkout = Checkout::new(catalog, rules);

    if list_products {
        return Ok(format!(
            "{}\n{}",
            output::catalog_table(checkout.catalog()),
            output::rules_table(checkout.catalog(), checkout.rules())
        ));
    }

    for sku in skus {
        checkout.scan(sku)?;
    }

    let receipt = checkout.receipt();
    info!(
        items = skus.len(),
        lines = receipt.lines.len(),
        total = %receipt.total,
        "Basket priced"
    );

    if json {
        output::receipt_json(&receipt)
    } else {
        Ok(output::receipt_table(&receipt))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every scan and rule index build
/// - `RUST_LOG=checkout_core=trace` - Show each rule application
/// - Default: warnings, plus info from the CLI itself
///
/// Logs go to stderr so receipts on stdout stay machine-readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,checkout_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
