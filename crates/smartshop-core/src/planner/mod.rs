//! # Plan Search
//!
//! Finds the purchase sequence that collects the most points within a coin
//! budget, where every purchase raises the price of what was bought.
//!
//! ## Why Exhaustive?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Budget 100, two steps                                                  │
//! │    H: price 70, 10 pts          L: price 45, 6 pts (stock 10)           │
//! │                                                                         │
//! │  Greedy by points:  H (70) ──► 30 left, nothing affordable  = 10 pts   │
//! │  Exhaustive:        L (45) ──► L (49.50)                    = 12 pts   │
//! │                                                                         │
//! │  A cheaper, lower-point first step can unlock a better continuation,   │
//! │  so every affordable product is tried at every step.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Search Shape
//! Depth-first over a tree whose depth is the step limit and whose branching
//! factor is the number of affordable in-stock products. Each call returns
//! the best leaf of its own subtree and the parent keeps the first maximum in
//! branch order, so there is no shared "best so far". Root subtrees may run
//! on the rayon pool; merging in branch order keeps the answer identical to
//! the sequential search.
//!
//! ## Example
//! ```rust
//! use smartshop_core::{search, Coins, ProductSnapshot, SearchConfig};
//!
//! let products = vec![ProductSnapshot::new("1", "Apple (Fruit)", Coins::new(200.0), 100, 2)];
//! let config = SearchConfig::with_step_limit(3);
//!
//! let outcome = search(&products, Coins::new(1000.0), &config).unwrap();
//! assert_eq!(outcome.plan.len(), 3);
//! assert_eq!(outcome.total_points, 6);
//! assert!(!outcome.completion.is_partial());
//! ```

mod budget;
mod state;

use std::time::Duration;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coins::Coins;
use crate::error::CoreResult;
use crate::types::{Plan, ProductSnapshot, SearchOutcome};
use crate::validation::{validate_coins, validate_prices, validate_step_limit};
use crate::DEFAULT_STEP_LIMIT;

use budget::SearchBudget;
use state::{PriceArena, SimulationState};

// =============================================================================
// Configuration
// =============================================================================

/// Optional guards against the exponential cost of deep searches.
///
/// When a guard trips, the search returns the best plan found so far and
/// flags the outcome as partial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum decision-tree nodes to visit.
    pub max_nodes: Option<u64>,
    /// Maximum wall-clock time to spend.
    pub time_budget: Option<Duration>,
}

impl SearchLimits {
    /// No limits: always explore the full tree.
    pub fn unlimited() -> Self {
        Self::default()
    }
}

/// How a search is run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of purchases to look ahead (at most `MAX_STEP_LIMIT`).
    pub step_limit: usize,
    /// Node and time guards.
    pub limits: SearchLimits,
    /// Explore root subtrees on the rayon pool.
    pub parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            step_limit: DEFAULT_STEP_LIMIT,
            limits: SearchLimits::unlimited(),
            parallel: false,
        }
    }
}

impl SearchConfig {
    /// Sequential, unlimited search with the given lookahead.
    pub fn with_step_limit(step_limit: usize) -> Self {
        SearchConfig {
            step_limit,
            ..Self::default()
        }
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Returns the plan of at most `step_limit` purchases with the most points.
///
/// Empty catalogs, a zero budget with nothing free, and a step limit of zero
/// all give an empty plan. Negative or non-finite budgets and step limits
/// above `MAX_STEP_LIMIT` are rejected.
///
/// ## Example
/// ```rust
/// use smartshop_core::{find_best_plan, Coins};
///
/// let plan = find_best_plan(&[], Coins::new(1000.0), 5).unwrap();
/// assert!(plan.is_empty());
/// ```
pub fn find_best_plan(
    products: &[ProductSnapshot],
    coin_budget: Coins,
    step_limit: usize,
) -> CoreResult<Plan> {
    let outcome = search(products, coin_budget, &SearchConfig::with_step_limit(step_limit))?;
    Ok(outcome.plan)
}

/// Runs a plan search and reports how it went.
///
/// ## Flow
/// ```text
/// validate inputs
///      │
///      ▼
/// build price ladders (one per in-stock product)
///      │
///      ▼
/// explore tree ──► best leaf per subtree ──► first maximum wins
///      │
///      ▼
/// SearchOutcome { plan, total_points, nodes_explored, completion }
/// ```
pub fn search(
    products: &[ProductSnapshot],
    coin_budget: Coins,
    config: &SearchConfig,
) -> CoreResult<SearchOutcome> {
    validate_coins("coin_budget", coin_budget)?;
    validate_step_limit(config.step_limit)?;
    validate_prices(products)?;

    debug!(
        products = products.len(),
        coin_budget = coin_budget.amount(),
        step_limit = config.step_limit,
        parallel = config.parallel,
        "Starting plan search"
    );

    let arena = PriceArena::build(products, config.step_limit);
    let budget = SearchBudget::start(&config.limits);
    let root = SimulationState::initial(coin_budget);

    let best = if config.parallel {
        explore_parallel(&arena, &budget, root, config.step_limit)
    } else {
        explore(&arena, &budget, root, config.step_limit)
    };

    let outcome = SearchOutcome {
        plan: best.to_plan(&arena),
        total_points: best.points,
        nodes_explored: budget.nodes(),
        completion: budget.completion(),
    };

    if outcome.completion.is_partial() {
        warn!(
            nodes = outcome.nodes_explored,
            completion = %outcome.completion,
            "Plan search stopped early; returning best plan found so far"
        );
    }
    debug!(
        nodes = outcome.nodes_explored,
        points = outcome.total_points,
        steps = outcome.plan.len(),
        "Plan search finished"
    );

    Ok(outcome)
}

// =============================================================================
// Tree Exploration
// =============================================================================

/// Returns the best leaf below `state`.
///
/// A node is a leaf when the step limit is reached, nothing is affordable,
/// or the budget refuses to expand it.
fn explore(
    arena: &PriceArena<'_>,
    budget: &SearchBudget,
    state: SimulationState,
    step_limit: usize,
) -> SimulationState {
    if !budget.enter() || state.depth == step_limit {
        return state;
    }

    let mut best: Option<SimulationState> = None;
    for (entry, price) in state.candidates(arena) {
        let leaf = explore(arena, budget, state.derive(arena, entry, price), step_limit);
        best = Some(keep_first_max(best, leaf));
    }

    best.unwrap_or(state)
}

/// Same as [`explore`], with the root's subtrees spread over the rayon pool.
fn explore_parallel(
    arena: &PriceArena<'_>,
    budget: &SearchBudget,
    state: SimulationState,
    step_limit: usize,
) -> SimulationState {
    if !budget.enter() || state.depth == step_limit {
        return state;
    }

    let subtrees: Vec<SimulationState> = state
        .candidates(arena)
        .into_par_iter()
        .map(|(entry, price)| explore(arena, budget, state.derive(arena, entry, price), step_limit))
        .collect();

    subtrees
        .into_iter()
        .fold(None, |best, leaf| Some(keep_first_max(best, leaf)))
        .unwrap_or(state)
}

/// Ties keep the earlier branch.
fn keep_first_max(best: Option<SimulationState>, candidate: SimulationState) -> SimulationState {
    match best {
        Some(best) if best.points >= candidate.points => best,
        _ => candidate,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
