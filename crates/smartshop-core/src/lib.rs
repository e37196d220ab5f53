//! # smartshop-core: Demand Pricing and Purchase Planning
//!
//! This crate is the **heart** of the SmartShop advisor. It contains the
//! pricing rule and the plan search engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     SmartShop Advisor Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Surrounding storefront / advisor CLI             │   │
//! │  │    catalog snapshot ──► coin balance ──► render plan           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ in-process call                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ smartshop-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  pricing  │  │  planner  │  │ purchase  │  │ validation│  │   │
//! │  │   │ next price│  │ best plan │  │ real buy  │  │   rules   │  │   │
//! │  │   │ trajectory│  │  search   │  │  receipt  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ProductSnapshot, PlanStep, Plan, ...)
//! - [`coins`] - Coins type for prices and wallets
//! - [`pricing`] - Demand-driven price update rule
//! - [`planner`] - Bounded-lookahead plan search
//! - [`purchase`] - Applying one real purchase to a product
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use smartshop_core::{find_best_plan, Coins, ProductSnapshot};
//!
//! let products = vec![
//!     ProductSnapshot::new("a", "Widget", Coins::new(100.0), 2, 10),
//!     ProductSnapshot::new("b", "Gadget", Coins::new(90.0), 1, 50),
//! ];
//!
//! let plan = find_best_plan(&products, Coins::new(200.0), 2).unwrap();
//! assert_eq!(plan.total_points(), 60);
//! assert_eq!(plan.steps[0].product_name, "Gadget");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod coins;
pub mod error;
pub mod planner;
pub mod pricing;
pub mod purchase;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use coins::Coins;
pub use error::{CoreError, CoreResult, ValidationError};
pub use planner::{find_best_plan, search, SearchConfig, SearchLimits};
pub use pricing::{compute_next_price, price_trajectory};
pub use purchase::{apply_purchase, PurchaseReceipt};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of purchases a plan looks ahead when the caller does not say.
pub const DEFAULT_STEP_LIMIT: usize = 5;

/// Upper bound on the lookahead depth.
///
/// ## Why a cap?
/// The search is exponential in the step limit: a catalog of 5 products
/// already has 5^8 = 390,625 leaves at depth 8. Larger requests are rejected
/// rather than silently truncated.
pub const MAX_STEP_LIMIT: usize = 8;

/// Maximum length of a product display name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
