//! # Error Types
//!
//! Domain-specific error types for smartshop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  smartshop-core errors (this file)                                     │
//! │  ├── CoreError        - Purchase rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  advisor errors (app crate)                                            │
//! │  └── AdvisorError     - Config / catalog loading failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AdvisorError → anyhow (main)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! A search that finds nothing affordable returns an empty plan. Only
//! malformed input (negative budget, oversized step limit, NaN prices)
//! fails fast.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the supplied catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product has no stock left for a real purchase.
    ///
    /// ## When This Occurs
    /// - Buying a product whose stock reached zero
    /// - Buying more units than remain
    #[error("Insufficient stock for {product}: available {available}, requested {requested}")]
    InsufficientStock {
        product: String,
        available: i64,
        requested: i64,
    },

    /// Wallet cannot cover the current price.
    ///
    /// ## User Workflow
    /// ```text
    /// Buy "DSA Book" (price 4000.00)
    ///      │
    ///      ▼
    /// Check wallet: 3500.00
    ///      │
    ///      ▼
    /// InsufficientCoins { product: "DSA Book", required: 4000.0, available: 3500.0 }
    /// ```
    #[error("Insufficient coins for {product}: required {required:.2}, available {available:.2}")]
    InsufficientCoins {
        product: String,
        required: f64,
        available: f64,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before any search or purchase logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Duplicate value (e.g., two products with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product: "Servo Motor".to_string(),
            available: 0,
            requested: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Servo Motor: available 0, requested 1"
        );

        let err = CoreError::InsufficientCoins {
            product: "DSA Book".to_string(),
            required: 4000.0,
            available: 3500.5,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient coins for DSA Book: required 4000.00, available 3500.50"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NotFinite {
            field: "coin_budget".to_string(),
        };
        assert_eq!(err.to_string(), "coin_budget must be a finite number");

        let err = ValidationError::OutOfRange {
            field: "step_limit".to_string(),
            min: 0,
            max: 8,
        };
        assert_eq!(err.to_string(), "step_limit must be between 0 and 8");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
