//! # Real Purchases
//!
//! Applies one actual purchase to a product snapshot and a wallet.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Player clicks "Buy" on DSA Book (price 4000.00, stock 20)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  apply_purchase() ← THIS MODULE                                        │
//! │       │                                                                 │
//! │       ├── stock <= 0?        → InsufficientStock                        │
//! │       ├── wallet < price?    → InsufficientCoins                        │
//! │       │                                                                 │
//! │       └── OK → PurchaseReceipt                                         │
//! │              price paid      4000.00                                    │
//! │              new price       4200.00  (same rule as the planner)        │
//! │              new stock       19                                         │
//! │              history point   (product, 4200.00, now)                    │
//! │                                                                         │
//! │  The storefront persists the receipt. Nothing here touches storage.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::coins::Coins;
use crate::error::{CoreError, CoreResult};
use crate::pricing::compute_next_price;
use crate::types::{PriceHistoryPoint, ProductSnapshot};
use crate::validation::{validate_coins, validate_product};

/// Everything that changed because of one real purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseReceipt {
    /// The product after the purchase: raised price, one unit less.
    pub product: ProductSnapshot,
    /// What the buyer paid (the price before the purchase).
    pub price_paid: Coins,
    /// The buyer's wallet after paying.
    pub coins_remaining: Coins,
    /// Points the buyer earned.
    pub points_gained: u32,
    /// New price to append to the product's price history.
    pub history_point: PriceHistoryPoint,
}

/// Buys one unit of `product` with `wallet`, stamping history with the
/// current time.
pub fn apply_purchase(product: &ProductSnapshot, wallet: Coins) -> CoreResult<PurchaseReceipt> {
    apply_purchase_at(product, wallet, Utc::now())
}

/// Buys one unit of `product` with `wallet`, stamping history with
/// `recorded_at`.
///
/// ## Example
/// ```rust
/// use chrono::Utc;
/// use smartshop_core::{purchase::apply_purchase_at, Coins, ProductSnapshot};
///
/// let widget = ProductSnapshot::new("w", "Widget", Coins::new(100.0), 4, 5);
/// let receipt = apply_purchase_at(&widget, Coins::new(300.0), Utc::now()).unwrap();
///
/// assert_eq!(receipt.price_paid, Coins::new(100.0));
/// assert_eq!(receipt.product.price, Coins::new(125.0));
/// assert_eq!(receipt.product.stock, 3);
/// assert_eq!(receipt.coins_remaining, Coins::new(200.0));
/// ```
pub fn apply_purchase_at(
    product: &ProductSnapshot,
    wallet: Coins,
    recorded_at: DateTime<Utc>,
) -> CoreResult<PurchaseReceipt> {
    validate_product(product)?;
    validate_coins("wallet", wallet)?;

    if !product.in_stock() {
        return Err(CoreError::InsufficientStock {
            product: product.name.clone(),
            available: product.stock.max(0),
            requested: 1,
        });
    }

    if !wallet.covers(product.price) {
        return Err(CoreError::InsufficientCoins {
            product: product.name.clone(),
            required: product.price.amount(),
            available: wallet.amount(),
        });
    }

    let new_price = compute_next_price(product.price, product.stock, 1);
    let updated = ProductSnapshot {
        price: new_price,
        stock: product.stock - 1,
        ..product.clone()
    };

    tracing::debug!(
        product = %product.id,
        paid = product.price.amount(),
        new_price = new_price.amount(),
        stock_left = updated.stock,
        "Applied purchase"
    );

    Ok(PurchaseReceipt {
        history_point: PriceHistoryPoint {
            product_id: product.id.clone(),
            price: new_price,
            recorded_at,
        },
        price_paid: product.price,
        coins_remaining: wallet - product.price,
        points_gained: product.points,
        product: updated,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
