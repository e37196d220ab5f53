//! Node and time budget shared by every worker of one search.

use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::time::Instant;

use super::SearchLimits;
use crate::types::SearchCompletion;

/// The wall clock is only read every this many nodes.
const DEADLINE_CHECK_INTERVAL: u64 = 256;

const RUNNING: u8 = 0;
const NODES_EXHAUSTED: u8 = 1;
const TIME_EXHAUSTED: u8 = 2;

/// Counts visited nodes and decides when the search must stop expanding.
///
/// Once stopped, every further node is treated as a leaf, so the fold still
/// returns the best plan among what was explored.
#[derive(Debug)]
pub(crate) struct SearchBudget {
    nodes: AtomicU64,
    max_nodes: Option<u64>,
    deadline: Option<Instant>,
    state: AtomicU8,
}

impl SearchBudget {
    /// Starts the clock for `limits`.
    pub fn start(limits: &SearchLimits) -> Self {
        SearchBudget {
            nodes: AtomicU64::new(0),
            max_nodes: limits.max_nodes,
            deadline: limits.time_budget.map(|budget| Instant::now() + budget),
            state: AtomicU8::new(RUNNING),
        }
    }

    /// Claims one node. Returns false if the node must not be expanded.
    pub fn enter(&self) -> bool {
        if self.state.load(Ordering::Relaxed) != RUNNING {
            return false;
        }

        let visited = self.nodes.fetch_add(1, Ordering::Relaxed) + 1;

        if let Some(max) = self.max_nodes {
            if visited > max {
                self.nodes.fetch_sub(1, Ordering::Relaxed);
                self.halt(NODES_EXHAUSTED);
                return false;
            }
        }

        if let Some(deadline) = self.deadline {
            if visited % DEADLINE_CHECK_INTERVAL == 1 && Instant::now() >= deadline {
                self.nodes.fetch_sub(1, Ordering::Relaxed);
                self.halt(TIME_EXHAUSTED);
                return false;
            }
        }

        true
    }

    // First reason wins.
    fn halt(&self, reason: u8) {
        let _ = self
            .state
            .compare_exchange(RUNNING, reason, Ordering::Relaxed, Ordering::Relaxed);
    }

    /// Nodes that were expanded or evaluated as leaves.
    pub fn nodes(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }

    pub fn completion(&self) -> SearchCompletion {
        match self.state.load(Ordering::Relaxed) {
            NODES_EXHAUSTED => SearchCompletion::NodeBudgetExhausted,
            TIME_EXHAUSTED => SearchCompletion::TimeBudgetExhausted,
            _ => SearchCompletion::Complete,
        }
    }
}
