//! # Catalog Snapshots
//!
//! Loads the product list the advisor plans against.
//!
//! ## Catalog File Format
//! ```text
//! [
//!   { "id": 1, "name": "iPhone 15 Pro", "price": 80000.0, "stock": 5, "points": 500 },
//!   { "id": "servo", "name": "Servo Motor", "price": 1200, "stock": 50, "points": 10,
//!     "description": "ignored" }
//! ]
//! ```
//!
//! Ids may be numbers or strings. Unknown fields are ignored so a storefront
//! export can be fed in directly.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};
use uuid::Uuid;

use smartshop_core::validation::validate_catalog;
use smartshop_core::{Coins, CoreError, ProductSnapshot};

use crate::error::{AdvisorError, AdvisorResult};

// =============================================================================
// File Records
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordId {
    Number(i64),
    Text(String),
}

impl RecordId {
    fn into_string(self) -> String {
        match self {
            RecordId::Number(n) => n.to_string(),
            RecordId::Text(s) => s,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    id: RecordId,
    name: String,
    price: f64,
    stock: i64,
    points: u32,
}

impl From<ProductRecord> for ProductSnapshot {
    fn from(record: ProductRecord) -> Self {
        ProductSnapshot::new(
            record.id.into_string(),
            record.name,
            Coins::new(record.price),
            record.stock,
            record.points,
        )
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Parses a catalog from JSON text and validates it.
pub fn parse_catalog(path: &Path, contents: &str) -> AdvisorResult<Vec<ProductSnapshot>> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(contents).map_err(|source| AdvisorError::CatalogParse {
            path: path.to_path_buf(),
            source,
        })?;

    let catalog: Vec<ProductSnapshot> = records.into_iter().map(Into::into).collect();
    validate_catalog(&catalog).map_err(CoreError::from)?;

    Ok(catalog)
}

/// Reads a JSON catalog file.
pub fn load_catalog(path: &Path) -> AdvisorResult<Vec<ProductSnapshot>> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(path, &contents)?;
    info!(?path, products = catalog.len(), "Loaded catalog");
    Ok(catalog)
}

/// The five products every new store starts with.
pub fn seed_catalog() -> Vec<ProductSnapshot> {
    [
        ("iPhone 15 Pro", 80000.0, 5, 500),
        ("Samsung S24 Ultra", 75000.0, 6, 450),
        ("Servo Motor", 1200.0, 50, 10),
        ("DSA Book", 4000.0, 20, 30),
        ("Apple (Fruit)", 200.0, 100, 2),
    ]
    .into_iter()
    .map(|(name, price, stock, points)| {
        ProductSnapshot::new(
            Uuid::new_v4().to_string(),
            name,
            Coins::new(price),
            stock,
            points,
        )
    })
    .collect()
}

/// Loads `path` when given, otherwise the seed catalog.
pub fn load_or_seed(path: Option<&Path>) -> AdvisorResult<Vec<ProductSnapshot>> {
    match path {
        Some(path) => load_catalog(path),
        None => {
            debug!("No catalog given, using seed catalog");
            Ok(seed_catalog())
        }
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Products that still have stock.
pub fn purchasable(catalog: &[ProductSnapshot]) -> Vec<ProductSnapshot> {
    catalog.iter().filter(|p| p.in_stock()).cloned().collect()
}

/// Finds a product by exact id or case-insensitive name.
pub fn find_product<'a>(
    catalog: &'a [ProductSnapshot],
    key: &str,
) -> Result<&'a ProductSnapshot, CoreError> {
    let key = key.trim();
    catalog
        .iter()
        .find(|p| p.id.as_str() == key)
        .or_else(|| catalog.iter().find(|p| p.name.eq_ignore_ascii_case(key)))
        .ok_or_else(|| CoreError::ProductNotFound(key.to_string()))
}
