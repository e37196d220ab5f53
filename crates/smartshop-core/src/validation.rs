//! # Validation Module
//!
//! Input validation for the planner and the purchase rule.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Advisor CLI / storefront                                     │
//! │  ├── Type validation (argument parsing, deserialization)               │
//! │  └── Out-of-stock pre-filter                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Budget finite and non-negative                                    │
//! │  ├── Step limit within MAX_STEP_LIMIT                                  │
//! │  ├── Search input: prices only                                         │
//! │  └── Loaded catalog: names, prices, unique ids                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Planner / purchase rule (assumes valid input)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::coins::Coins;
use crate::error::ValidationError;
use crate::types::ProductSnapshot;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_STEP_LIMIT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a non-negative, finite coin amount.
///
/// ## Example
/// ```rust
/// use smartshop_core::{validation::validate_coins, Coins};
///
/// assert!(validate_coins("coin_budget", Coins::new(50000.0)).is_ok());
/// assert!(validate_coins("coin_budget", Coins::zero()).is_ok());
/// assert!(validate_coins("coin_budget", Coins::new(-1.0)).is_err());
/// assert!(validate_coins("coin_budget", Coins::new(f64::NAN)).is_err());
/// ```
pub fn validate_coins(field: &str, amount: Coins) -> ValidationResult<()> {
    if !amount.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if amount.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates the lookahead depth of a search.
///
/// ## Rules
/// - Zero is allowed (yields an empty plan)
/// - Must not exceed MAX_STEP_LIMIT
pub fn validate_step_limit(step_limit: usize) -> ValidationResult<()> {
    if step_limit > MAX_STEP_LIMIT {
        return Err(ValidationError::OutOfRange {
            field: "step_limit".to_string(),
            min: 0,
            max: MAX_STEP_LIMIT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product display name.
///
/// ## Rules
/// - Must not be empty
/// - At most MAX_PRODUCT_NAME_LEN characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates one product snapshot.
///
/// Stock is not checked: zero or negative stock is a legal
/// snapshot that simply can never be bought.
pub fn validate_product(product: &ProductSnapshot) -> ValidationResult<()> {
    if product.id.as_str().trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }
    validate_product_name(&product.name)?;
    validate_coins("price", product.price)?;
    Ok(())
}

/// Validates the prices of a search input.
///
/// Names and ids are display data for the planner, so only the numbers it
/// computes with are checked.
pub fn validate_prices(products: &[ProductSnapshot]) -> ValidationResult<()> {
    products
        .iter()
        .try_for_each(|product| validate_coins("price", product.price))
}

/// Validates a whole catalog snapshot, including id uniqueness.
///
/// ## Example
/// ```rust
/// use smartshop_core::{validation::validate_catalog, Coins, ProductSnapshot};
///
/// let twice = vec![
///     ProductSnapshot::new("1", "Apple", Coins::new(200.0), 100, 2),
///     ProductSnapshot::new("1", "Pear", Coins::new(150.0), 10, 1),
/// ];
/// assert!(validate_catalog(&twice).is_err());
/// ```
pub fn validate_catalog(products: &[ProductSnapshot]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        validate_product(product)?;
        if !seen.insert(&product.id) {
            return Err(ValidationError::Duplicate {
                field: "product id".to_string(),
                value: product.id.to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_coins() {
        assert!(validate_coins("budget", Coins::new(0.0)).is_ok());
        assert!(validate_coins("budget", Coins::new(1099.5)).is_ok());

        assert!(matches!(
            validate_coins("budget", Coins::new(-0.01)),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_coins("budget", Coins::new(f64::INFINITY)),
            Err(ValidationError::NotFinite { .. })
        ));
    }

    #[test]
    fn test_validate_step_limit() {
        assert!(validate_step_limit(0).is_ok());
        assert!(validate_step_limit(5).is_ok());
        assert!(validate_step_limit(MAX_STEP_LIMIT).is_ok());
        assert!(validate_step_limit(MAX_STEP_LIMIT + 1).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("iPhone 15 Pro").is_ok());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(MAX_PRODUCT_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = ProductSnapshot::new("1", "Servo Motor", Coins::new(1200.0), 0, 10);
        assert!(validate_product(&ok).is_ok());

        let negative = ProductSnapshot::new("1", "Servo Motor", Coins::new(-1.0), 5, 10);
        assert!(validate_product(&negative).is_err());

        let no_id = ProductSnapshot::new("", "Servo Motor", Coins::new(1.0), 5, 10);
        assert!(validate_product(&no_id).is_err());
    }

    #[test]
    fn test_validate_catalog() {
        let catalog = vec![
            ProductSnapshot::new("1", "Apple (Fruit)", Coins::new(200.0), 100, 2),
            ProductSnapshot::new("2", "DSA Book", Coins::new(4000.0), 20, 30),
        ];
        assert!(validate_catalog(&catalog).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }
}
