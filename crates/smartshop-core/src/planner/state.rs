//! # Simulation State
//!
//! Per-branch state of the plan search, stored as arena-indexed snapshots.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PriceArena (built once per search, shared read-only by all branches)  │
//! │                                                                         │
//! │   entry 0  "Gadget"  50 pts   prices: [ 90.00 ]                         │
//! │   entry 1  "Widget"  10 pts   prices: [100.00, 150.00]                  │
//! │                                  ▲                                      │
//! │                                  │ prices[units already bought]         │
//! │  SimulationState (one per branch)                                       │
//! │   coins = 110.00   points = 50   bought = [(0, 1)]                      │
//! │   path  = Arc ──► (entry 0, 90.00) ──► None                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Because a product's price after `k` simulated buys depends only on its
//! starting price, starting stock and `k`, the whole ladder can be computed
//! up front. A branch then only remembers how many units of each product it
//! bought, which is at most `step_limit` pairs, and shares its path prefix
//! with its siblings through `Arc`.

use std::sync::Arc;

use crate::coins::Coins;
use crate::pricing::price_trajectory;
use crate::types::{Plan, PlanStep, ProductSnapshot};

// =============================================================================
// Price Arena
// =============================================================================

/// A product as the search sees it.
#[derive(Debug)]
pub(crate) struct LadderEntry<'a> {
    pub name: &'a str,
    pub points: u32,
    /// `prices[k]` is what the `(k + 1)`-th simulated unit costs.
    pub prices: Vec<Coins>,
}

/// Precomputed price ladders in exploration order.
#[derive(Debug)]
pub(crate) struct PriceArena<'a> {
    entries: Vec<LadderEntry<'a>>,
}

impl<'a> PriceArena<'a> {
    /// Builds ladders for every in-stock product, deep enough for `depth`
    /// purchases.
    ///
    /// Entries are ordered by points, highest first. The sort is stable so
    /// equal-point products keep their catalog order.
    pub fn build(products: &'a [ProductSnapshot], depth: usize) -> Self {
        let mut ordered: Vec<&ProductSnapshot> =
            products.iter().filter(|p| p.in_stock()).collect();
        ordered.sort_by(|a, b| b.points.cmp(&a.points));

        let entries = ordered
            .into_iter()
            .map(|product| {
                let mut prices = Vec::with_capacity(depth);
                if depth > 0 {
                    prices.push(product.price);
                    prices.extend(price_trajectory(product.price, product.stock, depth - 1));
                    let available = usize::try_from(product.stock).unwrap_or(usize::MAX);
                    prices.truncate(available);
                }
                LadderEntry {
                    name: &product.name,
                    points: product.points,
                    prices,
                }
            })
            .collect();

        PriceArena { entries }
    }

    #[inline]
    pub fn entry(&self, index: usize) -> &LadderEntry<'a> {
        &self.entries[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

// =============================================================================
// Simulation State
// =============================================================================

/// One purchase on a branch's path, linked to the purchases before it.
#[derive(Debug)]
struct PathNode {
    entry: usize,
    cost: Coins,
    parent: Option<Arc<PathNode>>,
}

/// The hypothetical world at one node of the decision tree.
///
/// Deriving a child never touches the parent, so sibling branches (possibly
/// on different threads) cannot observe each other's purchases.
#[derive(Debug, Clone)]
pub(crate) struct SimulationState {
    pub coins: Coins,
    pub points: u64,
    pub depth: usize,
    /// `(arena entry, units bought)`, one pair per distinct product bought.
    bought: Vec<(usize, usize)>,
    path: Option<Arc<PathNode>>,
}

impl SimulationState {
    /// The root state: full budget, nothing bought.
    pub fn initial(coins: Coins) -> Self {
        SimulationState {
            coins,
            points: 0,
            depth: 0,
            bought: Vec::new(),
            path: None,
        }
    }

    fn units_bought(&self, entry: usize) -> usize {
        self.bought
            .iter()
            .find(|(e, _)| *e == entry)
            .map_or(0, |(_, units)| *units)
    }

    /// Simulated price of the next unit, or `None` when simulated stock is gone.
    pub fn next_price(&self, arena: &PriceArena<'_>, entry: usize) -> Option<Coins> {
        arena.entry(entry).prices.get(self.units_bought(entry)).copied()
    }

    /// Products that are in simulated stock and affordable, in exploration
    /// order, with the price each would cost.
    pub fn candidates(&self, arena: &PriceArena<'_>) -> Vec<(usize, Coins)> {
        (0..arena.len())
            .filter_map(|entry| {
                self.next_price(arena, entry)
                    .filter(|price| self.coins.covers(*price))
                    .map(|price| (entry, price))
            })
            .collect()
    }

    /// Derives the state after buying one unit of `entry` at `price`.
    pub fn derive(&self, arena: &PriceArena<'_>, entry: usize, price: Coins) -> Self {
        let mut bought = self.bought.clone();
        match bought.iter_mut().find(|(e, _)| *e == entry) {
            Some((_, units)) => *units += 1,
            None => bought.push((entry, 1)),
        }

        SimulationState {
            coins: self.coins - price,
            points: self.points + u64::from(arena.entry(entry).points),
            depth: self.depth + 1,
            bought,
            path: Some(Arc::new(PathNode {
                entry,
                cost: price,
                parent: self.path.clone(),
            })),
        }
    }

    /// Materializes the purchases on this branch as a plan.
    pub fn to_plan(&self, arena: &PriceArena<'_>) -> Plan {
        let mut reversed = Vec::with_capacity(self.depth);
        let mut cursor = self.path.as_deref();
        while let Some(node) = cursor {
            reversed.push((node.entry, node.cost));
            cursor = node.parent.as_deref();
        }

        let steps = reversed
            .into_iter()
            .rev()
            .enumerate()
            .map(|(i, (entry, cost))| {
                let product = arena.entry(entry);
                PlanStep {
                    step: (i + 1) as u32,
                    product_name: product.name.to_string(),
                    cost,
                    points: product.points,
                }
            })
            .collect();

        Plan { steps }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
