//! Greedy Purchase Strategy
//!
//! Buys catalog rows in descending score-per-cost order, taking every row
//! that still fits in the remaining budget. Useful for:
//! - Fast initial stocking of large rosters
//! - Baseline comparisons (the exact strategy can never do worse)
//!
//! The pass commits early, so a high-ratio expensive item can block a
//! cheaper combination with a higher total. It is not optimal.

use fleet_core::{ratio_order, CatalogItem, Purchase, PurchaseStrategy};
use tracing::debug;


/// Greedy best-ratio purchase strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl PurchaseStrategy for GreedyStrategy {
    fn select(&self, budget: u64, items: &[CatalogItem]) -> Purchase {
        let mut remaining = budget;
        let mut bought = Vec::new();

        for idx in ratio_order(items) {
            let item = &items[idx];
            if item.cost <= remaining {
                remaining -= item.cost;
                bought.push(item.clone());
            }
        }

        debug!(
            budget,
            bought = bought.len(),
            residual = remaining,
            "Greedy selection"
        );

        Purchase {
            items: bought,
            residual: remaining,
        }
    }

    fn name(&self) -> &str {
        "greedy"
    }
}
