//! # Advisor Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  toml / serde_json / io errors ──┐                                     │
//! │                                  ├──► AdvisorError ──► anyhow (main)    │
//! │  CoreError (smartshop-core) ─────┘                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use smartshop_core::CoreError;
use thiserror::Error;

/// Errors raised while loading inputs or running a command.
#[derive(Debug, Error)]
pub enum AdvisorError {
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config values are present but unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for `AdvisorConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Catalog file is not a valid product list.
    #[error("Failed to parse catalog {}: {source}", path.display())]
    CatalogParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pricing, planning or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with AdvisorError.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
