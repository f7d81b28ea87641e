//! Catalog items and purchase results

use serde::{Deserialize, Serialize};

/// A purchasable vehicle from a sponsor's catalog.
///
/// Cost and score are abstract integer points; the core never deduplicates
/// items that share a model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Model identifier (not necessarily unique within a catalog)
    pub model: String,
    /// Purchase cost
    pub cost: u64,
    /// Efficiency score contributed to the owning team
    pub score: u64,
}

impl CatalogItem {
    pub fn new(model: impl Into<String>, cost: u64, score: u64) -> Self {
        Self {
            model: model.into(),
            cost,
            score,
        }
    }
}

/// Outcome of running a purchase strategy against one budget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Purchase {
    /// Items bought, in the order the strategy committed to them
    pub items: Vec<CatalogItem>,
    /// Budget left over after paying for `items`
    pub residual: u64,
}

impl Purchase {
    /// A purchase of nothing, keeping the whole budget
    pub fn empty(budget: u64) -> Self {
        Self {
            items: Vec::new(),
            residual: budget,
        }
    }

    pub fn total_cost(&self) -> u64 {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn total_score(&self) -> u64 {
        self.items.iter().map(|item| item.score).sum()
    }

    pub fn models(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.model.as_str()).collect()
    }
}
