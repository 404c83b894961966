//! Command line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Price a basket of SKUs against the configured catalog and pricing rules.
#[derive(Debug, Clone, Parser)]
#[command(name = "checkout", version, about)]
pub struct Cli {
    /// Pricing config file (TOML)
    #[arg(short, long, env = "CHECKOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the receipt as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the catalog and the pricing rules, then exit
    #[arg(long, conflicts_with = "skus")]
    pub list_products: bool,

    /// SKUs to scan, in order (repeat a SKU to scan it again)
    pub skus: Vec<String>,
}
