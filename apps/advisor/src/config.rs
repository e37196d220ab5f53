//! # Advisor Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --steps 4 --coins 12000 --parallel                                 │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SMARTSHOP_STEP_LIMIT=4                                             │
//! │     SMARTSHOP_COINS=12000                                              │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/advisor/advisor.toml (Linux)                             │
//! │     ~/Library/Application Support/com.smartshop.advisor/advisor.toml   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     5-step lookahead, 50000 coins, no search limits                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [search]
//! step_limit = 5
//! max_nodes = 2000000      # optional
//! time_budget_ms = 1500    # optional
//! parallel = true
//!
//! [wallet]
//! coins = 50000.0
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use smartshop_core::validation::{validate_coins, validate_step_limit};
use smartshop_core::{Coins, CoreError, SearchConfig, SearchLimits, DEFAULT_STEP_LIMIT};

use crate::error::{AdvisorError, AdvisorResult};

// =============================================================================
// Search Settings
// =============================================================================

/// How recommendations are searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Purchases to look ahead.
    #[serde(default = "default_step_limit")]
    pub step_limit: usize,

    /// Stop after visiting this many decision-tree nodes.
    #[serde(default)]
    pub max_nodes: Option<u64>,

    /// Stop after this many milliseconds.
    #[serde(default)]
    pub time_budget_ms: Option<u64>,

    /// Explore root branches on all cores.
    #[serde(default)]
    pub parallel: bool,
}

fn default_step_limit() -> usize {
    DEFAULT_STEP_LIMIT
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            step_limit: default_step_limit(),
            max_nodes: None,
            time_budget_ms: None,
            parallel: false,
        }
    }
}

impl SearchSettings {
    /// Converts to the core's search configuration.
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig {
            step_limit: self.step_limit,
            limits: SearchLimits {
                max_nodes: self.max_nodes,
                time_budget: self.time_budget_ms.map(Duration::from_millis),
            },
            parallel: self.parallel,
        }
    }
}

// =============================================================================
// Wallet Settings
// =============================================================================

/// Balance used when no `--coins` flag is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletSettings {
    /// Starting coins of a new player.
    #[serde(default = "default_coins")]
    pub coins: f64,
}

fn default_coins() -> f64 {
    50000.0
}

impl Default for WalletSettings {
    fn default() -> Self {
        WalletSettings {
            coins: default_coins(),
        }
    }
}

// =============================================================================
// Logging Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            level: default_log_level(),
        }
    }
}

// =============================================================================
// Main Advisor Configuration
// =============================================================================

/// Complete advisor configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub search: SearchSettings,

    #[serde(default)]
    pub wallet: WalletSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AdvisorConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`advisor.toml`)
    /// 3. Environment variables
    ///
    /// An explicit `config_path` must exist; the default location may be
    /// absent.
    pub fn load(config_path: Option<PathBuf>) -> AdvisorResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AdvisorError::ConfigNotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> AdvisorResult<Self> {
        info!(?path, "Loading advisor config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AdvisorResult<()> {
        validate_step_limit(self.search.step_limit).map_err(CoreError::from)?;
        validate_coins("wallet.coins", Coins::new(self.wallet.coins)).map_err(CoreError::from)?;

        if self.search.max_nodes == Some(0) {
            return Err(AdvisorError::InvalidConfig(
                "search.max_nodes must be greater than 0".into(),
            ));
        }

        if self.logging.level.trim().is_empty() {
            return Err(AdvisorError::InvalidConfig(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(())
    }

    /// Applies `SMARTSHOP_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (the environment in production).
    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(steps) = lookup("SMARTSHOP_STEP_LIMIT") {
            match steps.parse::<usize>() {
                Ok(n) => {
                    debug!(step_limit = n, "Overriding step limit from environment");
                    self.search.step_limit = n;
                }
                Err(_) => warn!(value = %steps, "Ignoring invalid SMARTSHOP_STEP_LIMIT"),
            }
        }

        if let Some(nodes) = lookup("SMARTSHOP_MAX_NODES") {
            match nodes.parse::<u64>() {
                Ok(n) => self.search.max_nodes = Some(n),
                Err(_) => warn!(value = %nodes, "Ignoring invalid SMARTSHOP_MAX_NODES"),
            }
        }

        if let Some(ms) = lookup("SMARTSHOP_TIME_BUDGET_MS") {
            match ms.parse::<u64>() {
                Ok(n) => self.search.time_budget_ms = Some(n),
                Err(_) => warn!(value = %ms, "Ignoring invalid SMARTSHOP_TIME_BUDGET_MS"),
            }
        }

        if let Some(parallel) = lookup("SMARTSHOP_PARALLEL") {
            match parallel.to_lowercase().as_str() {
                "1" | "true" | "yes" => self.search.parallel = true,
                "0" | "false" | "no" => self.search.parallel = false,
                _ => warn!(value = %parallel, "Ignoring invalid SMARTSHOP_PARALLEL"),
            }
        }

        if let Some(coins) = lookup("SMARTSHOP_COINS") {
            match coins.parse::<f64>() {
                Ok(c) => self.wallet.coins = c,
                Err(_) => warn!(value = %coins, "Ignoring invalid SMARTSHOP_COINS"),
            }
        }

        if let Some(level) = lookup("SMARTSHOP_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "smartshop", "advisor")
            .map(|dirs| dirs.config_dir().join("advisor.toml"))
    }
}
