//! # Coins Module
//!
//! Provides the `Coins` type for prices and wallet balances.
//!
//! ## Why a Real Number?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DEMAND PRICING IS MULTIPLICATIVE                                       │
//! │                                                                         │
//! │  Every purchase multiplies the price by (1 + 1/stock):                  │
//! │    100.00 → 125.00 → 166.67 → 250.00 → 500.00   (stock 4,3,2,1)         │
//! │                                                                         │
//! │  Truncating to whole cents after every step would drift away from      │
//! │  the exact trajectory. Prices stay in f64 through the whole plan and   │
//! │  are only rounded when displayed.                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use smartshop_core::coins::Coins;
//!
//! let wallet = Coins::new(200.0);
//! let price = Coins::new(90.0);
//!
//! assert!(wallet.covers(price));
//! assert_eq!((wallet - price).amount(), 110.0);
//! assert_eq!(format!("{}", price), "90.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Coins Type
// =============================================================================

/// An amount of in-game currency: a product price or a wallet balance.
///
/// ## Where Coins Are Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ProductSnapshot.price ──┬──► compute_next_price ──► next price         │
/// │                          │                                              │
/// │                          └──► PlanStep.cost ──► Plan.total_cost        │
/// │                                                                         │
/// │  coin budget ──► SimulationState.coins ──► "can I afford this?"        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coins(f64);

impl Coins {
    /// Creates a coin amount.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Coins(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero coins.
    #[inline]
    pub const fn zero() -> Self {
        Coins(0.0)
    }

    /// Checks if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Checks that the value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns true if this balance is enough to pay `price`.
    ///
    /// ## Example
    /// ```rust
    /// use smartshop_core::coins::Coins;
    ///
    /// let wallet = Coins::new(100.0);
    /// assert!(wallet.covers(Coins::new(100.0)));
    /// assert!(!wallet.covers(Coins::new(100.01)));
    /// ```
    #[inline]
    pub fn covers(&self, price: Coins) -> bool {
        self.0 >= price.0
    }

    /// Rounds to two decimal places for display and export.
    ///
    /// Never applied inside the pricing rule itself.
    pub fn rounded(&self) -> Coins {
        Coins((self.0 * 100.0).round() / 100.0)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with two decimals, e.g. `166.67`.
impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Default for Coins {
    fn default() -> Self {
        Coins::zero()
    }
}

impl Add for Coins {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Coins(self.0 + other.0)
    }
}

impl Sub for Coins {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Coins(self.0 - other.0)
    }
}

/// Scaling by a demand factor.
impl Mul<f64> for Coins {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Coins(self.0 * factor)
    }
}

impl Sum for Coins {
    fn sum<I: Iterator<Item = Coins>>(iter: I) -> Self {
        iter.fold(Coins::zero(), |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Coins> for Coins {
    fn sum<I: Iterator<Item = &'a Coins>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coins::new(125.0)), "125.00");
        assert_eq!(format!("{}", Coins::new(166.666_666)), "166.67");
        assert_eq!(format!("{}", Coins::zero()), "0.00");
        assert_eq!(format!("{}", Coins::new(-5.5)), "-5.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Coins::new(1000.0);
        let b = Coins::new(250.5);

        assert_eq!((a + b).amount(), 1250.5);
        assert_eq!((a - b).amount(), 749.5);
        assert_eq!((b * 2.0).amount(), 501.0);
    }

    #[test]
    fn test_covers_is_inclusive() {
        let wallet = Coins::new(90.0);
        assert!(wallet.covers(Coins::new(90.0)));
        assert!(wallet.covers(Coins::zero()));
        assert!(!wallet.covers(Coins::new(90.000_001)));
    }

    #[test]
    fn test_sum() {
        let costs = [Coins::new(90.0), Coins::new(100.0), Coins::new(10.25)];
        let total: Coins = costs.iter().sum();
        assert_eq!(total.amount(), 200.25);
    }

    #[test]
    fn test_rounded() {
        assert_eq!(Coins::new(166.666_666).rounded().amount(), 166.67);
        assert_eq!(Coins::new(125.0).rounded().amount(), 125.0);
    }

    #[test]
    fn test_checks() {
        assert!(Coins::zero().is_zero());
        assert!(Coins::new(-1.0).is_negative());
        assert!(!Coins::new(f64::NAN).is_finite());
        assert!(!Coins::new(f64::INFINITY).is_finite());
        assert!(Coins::new(1.0).is_finite());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Coins::new(125.5)).unwrap();
        assert_eq!(json, "125.5");
        let back: Coins = serde_json::from_str("80000.0").unwrap();
        assert_eq!(back, Coins::new(80000.0));
    }
}
