//! Sponsor catalogs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::types::CatalogItem;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog row {make} {model} has zero cost")]
    ZeroCost { make: String, model: String },
}

/// Supplies the purchasable items for a sponsor.
///
/// Implementations must behave as a pure function of the sponsor for the
/// duration of a tournament: repeated calls return the same items in the
/// same order.
pub trait CatalogSource {
    /// Items the sponsor's team may buy. An unknown sponsor yields no items.
    fn items_for(&self, sponsor: &str) -> Vec<CatalogItem>;

    /// Every sponsor that has at least one row, in first-seen order
    fn sponsors(&self) -> Vec<String>;
}

/// One tabular catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRow {
    pub make: String,
    pub model: String,
    pub cost: u64,
    pub score: u64,
}

impl CatalogRow {
    pub fn new(make: impl Into<String>, model: impl Into<String>, cost: u64, score: u64) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            cost,
            score,
        }
    }
}

/// Catalog held in memory, grouped by sponsor
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    order: Vec<String>,
    by_sponsor: HashMap<String, Vec<CatalogItem>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows, rejecting any row that costs nothing
    pub fn from_rows(rows: impl IntoIterator<Item = CatalogRow>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for row in rows {
            catalog.insert(row)?;
        }
        Ok(catalog)
    }

    /// Load a JSON array of rows from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            sponsors = catalog.order.len(),
            items = catalog.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let rows: Vec<CatalogRow> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    pub fn insert(&mut self, row: CatalogRow) -> Result<(), CatalogError> {
        if row.cost == 0 {
            return Err(CatalogError::ZeroCost {
                make: row.make,
                model: row.model,
            });
        }

        if !self.by_sponsor.contains_key(&row.make) {
            self.order.push(row.make.clone());
        }
        self.by_sponsor
            .entry(row.make)
            .or_default()
            .push(CatalogItem::new(row.model, row.cost, row.score));
        Ok(())
    }

    /// Total number of rows across all sponsors
    pub fn len(&self) -> usize {
        self.by_sponsor.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl CatalogSource for MemoryCatalog {
    fn items_for(&self, sponsor: &str) -> Vec<CatalogItem> {
        self.by_sponsor.get(sponsor).cloned().unwrap_or_default()
    }

    fn sponsors(&self) -> Vec<String> {
        self.order.clone()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
