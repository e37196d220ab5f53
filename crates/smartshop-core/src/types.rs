//! # Domain Types
//!
//! Core domain types exchanged between the storefront and the planner.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ProductSnapshot │   │    PlanStep     │   │  SearchOutcome  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (opaque)    │   │  step (1-based) │   │  plan           │       │
//! │  │  name           │   │  product_name   │   │  total_points   │       │
//! │  │  price (Coins)  │   │  cost (Coins)   │   │  nodes_explored │       │
//! │  │  stock          │   │  points         │   │  completion     │       │
//! │  │  points         │   └────────┬────────┘   └─────────────────┘       │
//! │  └─────────────────┘            │ Vec                                   │
//! │                        ┌────────▼────────┐   ┌──────────────────┐       │
//! │                        │      Plan       │   │ PriceHistoryPoint│       │
//! │                        └─────────────────┘   └──────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A `ProductSnapshot` is a frozen copy of catalog state handed to the core.
//! The planner derives hypothetical prices from it but never writes back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::coins::Coins;

// =============================================================================
// Product Id
// =============================================================================

/// Opaque product identifier assigned by the surrounding storefront.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductId(String);

impl ProductId {
    /// Returns the identifier as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// A purchasable product as seen at the moment a plan is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductSnapshot {
    /// Storefront identifier.
    pub id: ProductId,

    /// Display name, copied into every plan step.
    pub name: String,

    /// Current unit price.
    pub price: Coins,

    /// Units left. Zero or below means the product cannot be bought.
    #[ts(type = "number")]
    pub stock: i64,

    /// Points awarded per unit. Constant for the whole plan.
    pub points: u32,
}

impl ProductSnapshot {
    /// Builds a snapshot.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Coins,
        stock: i64,
        points: u32,
    ) -> Self {
        ProductSnapshot {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            points,
        }
    }

    /// Checks if at least one unit is left.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Plan
// =============================================================================

/// One simulated purchase inside a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PlanStep {
    /// Position in the plan, starting at 1.
    pub step: u32,
    /// Name of the product bought at this step.
    pub product_name: String,
    /// Coins spent (the simulated price at this step).
    pub cost: Coins,
    /// Points gained.
    pub points: u32,
}

/// An ordered purchase recommendation.
///
/// ## Invariants
/// - `steps[i].step == i + 1`
/// - Length never exceeds the step limit the plan was searched with
/// - Sum of costs never exceeds the coin budget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Plan {
    pub steps: Vec<PlanStep>,
}

impl Plan {
    /// The empty plan (nothing affordable, or a step limit of zero).
    pub fn empty() -> Self {
        Plan { steps: Vec::new() }
    }

    /// Number of purchases in the plan.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Checks if the plan recommends nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Points collected by following the whole plan.
    pub fn total_points(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.points)).sum()
    }

    /// Coins spent by following the whole plan.
    pub fn total_cost(&self) -> Coins {
        self.steps.iter().map(|s| s.cost).sum()
    }
}

// =============================================================================
// Search Outcome
// =============================================================================

/// Whether the search visited the whole decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SearchCompletion {
    /// Every branch was explored; the plan is the global best.
    #[default]
    Complete,
    /// The node budget ran out; the plan is the best found so far.
    NodeBudgetExhausted,
    /// The time budget ran out; the plan is the best found so far.
    TimeBudgetExhausted,
}

impl SearchCompletion {
    /// Returns true if the plan is only a best-so-far result.
    pub fn is_partial(&self) -> bool {
        !matches!(self, SearchCompletion::Complete)
    }
}

impl fmt::Display for SearchCompletion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchCompletion::Complete => write!(f, "complete"),
            SearchCompletion::NodeBudgetExhausted => write!(f, "partial (node budget exhausted)"),
            SearchCompletion::TimeBudgetExhausted => write!(f, "partial (time budget exhausted)"),
        }
    }
}

/// Full result of a plan search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    /// Best plan found.
    pub plan: Plan,
    /// Points of `plan`.
    #[ts(type = "number")]
    pub total_points: u64,
    /// Decision-tree nodes visited.
    #[ts(type = "number")]
    pub nodes_explored: u64,
    /// Complete or partial.
    pub completion: SearchCompletion,
}

// =============================================================================
// Price History
// =============================================================================

/// A price recorded after a real purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceHistoryPoint {
    pub product_id: ProductId,
    pub price: Coins,
    #[ts(as = "String")]
    pub recorded_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn step(n: u32, name: &str, cost: f64, points: u32) -> PlanStep {
        PlanStep {
            step: n,
            product_name: name.to_string(),
            cost: Coins::new(cost),
            points,
        }
    }

    #[test]
    fn test_snapshot_availability() {
        let p = ProductSnapshot::new("1", "DSA Book", Coins::new(4000.0), 20, 30);
        assert!(p.in_stock());

        let sold_out = ProductSnapshot::new("2", "Servo Motor", Coins::new(1.0), 0, 10);
        assert!(!sold_out.in_stock());
    }

    #[test]
    fn test_plan_totals() {
        let plan = Plan {
            steps: vec![step(1, "B", 90.0, 50), step(2, "A", 100.0, 10)],
        };
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.total_points(), 60);
        assert_eq!(plan.total_cost(), Coins::new(190.0));

        let empty = Plan::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.total_points(), 0);
        assert_eq!(empty.total_cost(), Coins::zero());
    }

    #[test]
    fn test_plan_step_json_shape() {
        let json = serde_json::to_value(step(1, "Apple (Fruit)", 200.0, 2)).unwrap();
        assert_eq!(json["step"], 1);
        assert_eq!(json["productName"], "Apple (Fruit)");
        assert_eq!(json["cost"], 200.0);
        assert_eq!(json["points"], 2);
    }

    #[test]
    fn test_completion_flags() {
        assert!(!SearchCompletion::Complete.is_partial());
        assert!(SearchCompletion::NodeBudgetExhausted.is_partial());
        assert!(SearchCompletion::TimeBudgetExhausted.is_partial());
        assert_eq!(SearchCompletion::default(), SearchCompletion::Complete);
    }

    #[test]
    fn test_product_id_conversions() {
        let id: ProductId = "sku-7".into();
        assert_eq!(id.as_str(), "sku-7");
        assert_eq!(id.to_string(), "sku-7");
        assert_eq!(ProductId::from(String::from("sku-7")), id);
    }
}
