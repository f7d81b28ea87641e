//! Exact Purchase Strategy
//!
//! Solves "maximize total score with total cost within budget" exactly as a
//! 0/1 knapsack: every catalog row is either bought once or not at all, the
//! same rule the greedy strategy follows, so the exact result is never worse.
//!
//! Cost is O(rows x budget). Before building the table all costs and the
//! budget are divided by the greatest common divisor of the affordable
//! costs, which shrinks the table dramatically for round catalog prices.
//! With coprime costs the table still has one cell per budget unit, so
//! callers must bound the budget (the tournament config caps it).

use fleet_core::{CatalogItem, Purchase, PurchaseStrategy};
use tracing::debug;


/// Dynamic-programming purchase strategy with a proven-optimal result.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStrategy;

impl ExactStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl PurchaseStrategy for ExactStrategy {
    fn select(&self, budget: u64, items: &[CatalogItem]) -> Purchase {
        let rows: Vec<usize> = (0..items.len())
            .filter(|&idx| items[idx].cost <= budget)
            .collect();
        if rows.is_empty() {
            return Purchase::empty(budget);
        }

        let unit = rows
            .iter()
            .fold(0, |acc, &idx| gcd(acc, items[idx].cost))
            .max(1);
        let capacity = (budget / unit) as usize;
        let weights: Vec<usize> = rows
            .iter()
            .map(|&idx| (items[idx].cost / unit) as usize)
            .collect();

        // best[b]: highest score reachable with scaled budget at most b
        // take[r][b]: row r is part of that optimum after rows 0..=r
        let mut best = vec![0u64; capacity + 1];
        let mut take = vec![vec![false; capacity + 1]; rows.len()];

        for (r, &idx) in rows.iter().enumerate() {
            let weight = weights[r];
            let score = items[idx].score;
            // Descending so each row is counted at most once
            for b in (weight..=capacity).rev() {
                let candidate = best[b - weight] + score;
                if candidate > best[b] {
                    best[b] = candidate;
                    take[r][b] = true;
                }
            }
        }

        let mut b = capacity;
        let mut chosen = Vec::new();
        for r in (0..rows.len()).rev() {
            if take[r][b] {
                chosen.push(rows[r]);
                b -= weights[r];
            }
        }
        chosen.reverse();

        let bought: Vec<CatalogItem> = chosen.iter().map(|&idx| items[idx].clone()).collect();
        let spent: u64 = bought.iter().map(|item| item.cost).sum();

        debug!(
            budget,
            unit,
            cells = capacity + 1,
            rows = rows.len(),
            score = best[capacity],
            "Exact selection"
        );

        Purchase {
            items: bought,
            residual: budget - spent,
        }
    }

    fn name(&self) -> &str {
        "exact"
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
