//! # Demand Pricing
//!
//! The price update rule shared by simulated and real purchases.
//!
//! ## The Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  new_price = current_price × (1 + quantity / stock_before)              │
//! │                                                                         │
//! │  stock_before = 4, qty = 1:   100.00 → 125.00   (+25%)                  │
//! │  stock_before = 2, qty = 1:   100.00 → 150.00   (+50%)                  │
//! │  stock_before = 1, qty = 1:   100.00 → 200.00   (+100%)                 │
//! │                                                                         │
//! │  stock_before <= 0 or qty <= 0:  price unchanged                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices only ever go up. The scarcer the product, the bigger the jump.
//! No rounding happens here; callers round for display.

use crate::coins::Coins;

/// Computes the price after `quantity` units were bought from `stock_before`.
///
/// ## Example
/// ```rust
/// use smartshop_core::{compute_next_price, Coins};
///
/// let next = compute_next_price(Coins::new(100.0), 4, 1);
/// assert_eq!(next, Coins::new(125.0));
///
/// // No stock: nothing to measure demand against
/// assert_eq!(compute_next_price(Coins::new(100.0), 0, 1), Coins::new(100.0));
///
/// // Nothing bought: no demand
/// assert_eq!(compute_next_price(Coins::new(100.0), 4, -1), Coins::new(100.0));
/// ```
pub fn compute_next_price(current_price: Coins, stock_before: i64, quantity: i64) -> Coins {
    if stock_before <= 0 || quantity <= 0 {
        return current_price;
    }

    let demand_factor = quantity as f64 / stock_before as f64;
    current_price * (1.0 + demand_factor)
}

/// Returns the price after each of `purchases` consecutive single-unit buys.
///
/// Stops early once stock runs out, so the result has
/// `min(purchases, max(stock, 0))` entries. This is exactly the sequence a
/// storefront records as price history when the purchases really happen.
///
/// ## Example
/// ```rust
/// use smartshop_core::{price_trajectory, Coins};
///
/// let prices = price_trajectory(Coins::new(100.0), 2, 5);
/// assert_eq!(prices, vec![Coins::new(150.0), Coins::new(300.0)]);
/// ```
pub fn price_trajectory(price: Coins, stock: i64, purchases: usize) -> Vec<Coins> {
    let available = usize::try_from(stock.max(0)).unwrap_or(usize::MAX);
    let count = purchases.min(available);

    let mut prices = Vec::with_capacity(count);
    let mut current = price;
    let mut remaining = stock;
    for _ in 0..count {
        current = compute_next_price(current, remaining, 1);
        remaining -= 1;
        prices.push(current);
    }
    prices
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_widget_scenario() {
        assert_eq!(compute_next_price(Coins::new(100.0), 4, 1), Coins::new(125.0));
    }

    #[test]
    fn test_zero_or_negative_stock_keeps_price() {
        let price = Coins::new(80000.0);
        assert_eq!(compute_next_price(price, 0, 1), price);
        assert_eq!(compute_next_price(price, -3, 1), price);
    }

    #[test]
    fn test_non_positive_quantity_keeps_price() {
        let price = Coins::new(100.0);
        assert_eq!(compute_next_price(price, 4, 0), price);
        assert_eq!(compute_next_price(price, 4, -1), price);
        assert_eq!(compute_next_price(price, 4, -8), price);
    }

    #[test]
    fn test_larger_quantity_raises_more() {
        let price = Coins::new(100.0);
        assert_eq!(compute_next_price(price, 4, 2), Coins::new(150.0));
        assert!(compute_next_price(price, 4, 2) > compute_next_price(price, 4, 1));
    }

    #[test]
    fn test_trajectory_stops_at_stock() {
        let prices = price_trajectory(Coins::new(100.0), 4, 10);
        assert_eq!(prices.len(), 4);
        assert_eq!(prices[0], Coins::new(125.0));
        assert_eq!(prices[3].rounded(), Coins::new(500.0));

        assert!(price_trajectory(Coins::new(100.0), 0, 3).is_empty());
        assert!(price_trajectory(Coins::new(100.0), 5, 0).is_empty());
    }

    proptest! {
        #[test]
        fn prop_price_strictly_increases_with_stock(
            price in 0.01f64..1_000_000.0,
            stock in 1i64..10_000,
            qty in 1i64..100,
        ) {
            let next = compute_next_price(Coins::new(price), stock, qty);
            prop_assert!(next > Coins::new(price));
        }

        #[test]
        fn prop_price_unchanged_without_stock(
            price in 0.0f64..1_000_000.0,
            stock in -100i64..=0,
            qty in 1i64..100,
        ) {
            prop_assert_eq!(compute_next_price(Coins::new(price), stock, qty), Coins::new(price));
        }

        #[test]
        fn prop_price_never_decreases(
            price in 0.0f64..1_000_000.0,
            stock in -100i64..10_000,
            qty in -100i64..100,
        ) {
            let next = compute_next_price(Coins::new(price), stock, qty);
            prop_assert!(next >= Coins::new(price), "price decreased: {} -> {}", price, next);
        }

        #[test]
        fn prop_scarcer_stock_means_higher_price(
            price in 0.01f64..1_000_000.0,
            stock in 1i64..10_000,
        ) {
            let scarce = compute_next_price(Coins::new(price), stock, 1);
            let plentiful = compute_next_price(Coins::new(price), stock + 1, 1);
            prop_assert!(scarce > plentiful);
        }

        #[test]
        fn prop_trajectory_matches_step_by_step_updates(
            price in 0.01f64..100_000.0,
            stock in 0i64..20,
            purchases in 0usize..25,
        ) {
            let trajectory = price_trajectory(Coins::new(price), stock, purchases);

            let mut current = Coins::new(price);
            let mut remaining = stock;
            let mut replayed = Vec::new();
            while remaining > 0 && replayed.len() < purchases {
                current = compute_next_price(current, remaining, 1);
                remaining -= 1;
                replayed.push(current);
            }

            prop_assert_eq!(trajectory, replayed);
        }
    }
}
