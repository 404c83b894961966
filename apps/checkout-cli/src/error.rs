//! # CLI Error Type
//!
//! Everything that can stop the `checkout` binary, with one exit code per
//! category so scripts can tell a bad basket from a bad config.
//!
//! ```text
//! ConfigNotFound / ConfigRead / ConfigParse ──► exit 2
//! Core(UnknownSku)                         ──► exit 3
//! Core(Validation | DuplicateSku | InvalidRule | InvalidSku) ──► exit 4
//! Render                                   ──► exit 1
//! ```

use std::path::PathBuf;

use checkout_core::CoreError;
use thiserror::Error;

pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const CONFIG_ERROR: u8 = 2;
    pub const UNKNOWN_SKU: u8 = 3;
    pub const INVALID_PRICING_SETUP: u8 = 4;
}

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing engine rejected a product, rule or scan.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to render receipt: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Core(CoreError::UnknownSku { .. }) => exit_code::UNKNOWN_SKU,
            CliError::Core(_) => exit_code::INVALID_PRICING_SETUP,
            CliError::ConfigNotFound(_)
            | CliError::ConfigRead { .. }
            | CliError::ConfigParse(_) => exit_code::CONFIG_ERROR,
            CliError::Render(_) => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
