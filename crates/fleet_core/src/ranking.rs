//! Score-per-cost ranking shared by every purchase path
//!
//! Ratios are compared by cross-multiplication in `u128`, so no floating
//! point rounding can reorder two items. Equal ratios keep catalog order.

use std::cmp::Ordering;

use crate::types::CatalogItem;

/// Order two items by score-per-cost, best ratio first.
pub fn compare_ratio(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    let lhs = a.score as u128 * b.cost as u128;
    let rhs = b.score as u128 * a.cost as u128;
    rhs.cmp(&lhs)
}

/// Indices of `items` sorted by descending ratio.
///
/// The sort is stable, so ties keep catalog order.
pub fn ratio_order(items: &[CatalogItem]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&i, &j| compare_ratio(&items[i], &items[j]));
    order
}

/// Best-ratio item whose cost fits in `budget`, if any.
pub fn best_affordable(budget: u64, items: &[CatalogItem]) -> Option<&CatalogItem> {
    // min_by keeps the first of several equal elements
    items
        .iter()
        .filter(|item| item.cost <= budget)
        .min_by(|a, b| compare_ratio(a, b))
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
