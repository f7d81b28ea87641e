//! Competing teams and their match records

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::types::{CatalogItem, Purchase};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team {sponsor} cannot afford {cost} with budget {budget}")]
    Unaffordable {
        sponsor: String,
        cost: u64,
        budget: u64,
    },

    #[error("Team {sponsor} has been eliminated")]
    Eliminated { sponsor: String },
}

/// Win/loss history for one team
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub wins: u32,
    pub losses: u32,
    /// Winning score of every match this team won, in round order
    pub scores: Vec<u64>,
    /// Number of items acquired over the whole tournament
    pub items_used: u32,
}

/// One sponsor-backed competitor.
///
/// The budget only moves through [`Team::commit`], [`Team::buy`] and
/// [`Team::record_win`], so it can never go below zero. Elimination is
/// one-way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    sponsor: String,
    budget: u64,
    inventory: Vec<CatalogItem>,
    active: bool,
    record: MatchRecord,
}

impl Team {
    pub fn new(sponsor: impl Into<String>, budget: u64) -> Self {
        Self {
            sponsor: sponsor.into(),
            budget,
            inventory: Vec::new(),
            active: true,
            record: MatchRecord::default(),
        }
    }

    pub fn sponsor(&self) -> &str {
        &self.sponsor
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    pub fn inventory(&self) -> &[CatalogItem] {
        &self.inventory
    }

    pub fn inventory_models(&self) -> Vec<&str> {
        self.inventory.iter().map(|item| item.model.as_str()).collect()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    /// Sum of the scores of everything the team owns
    pub fn total_score(&self) -> u64 {
        self.inventory.iter().map(|item| item.score).sum()
    }

    /// Commit a whole strategy purchase.
    ///
    /// Nothing is committed unless the full cost fits in the current budget.
    pub fn commit(&mut self, purchase: Purchase) -> Result<(), TeamError> {
        self.ensure_active()?;
        let cost = purchase.total_cost();
        if cost > self.budget {
            return Err(TeamError::Unaffordable {
                sponsor: self.sponsor.clone(),
                cost,
                budget: self.budget,
            });
        }

        self.budget -= cost;
        let bought = u32::try_from(purchase.items.len()).unwrap_or(u32::MAX);
        self.record.items_used = self.record.items_used.saturating_add(bought);
        self.inventory.extend(purchase.items);
        Ok(())
    }

    /// Buy a single item
    pub fn buy(&mut self, item: CatalogItem) -> Result<(), TeamError> {
        self.commit(Purchase {
            items: vec![item],
            residual: 0,
        })
    }

    /// Credit a match win: one more win, the winning score logged and the
    /// prize added to the budget.
    pub fn record_win(&mut self, score: u64, prize: u64) -> Result<(), TeamError> {
        self.ensure_active()?;
        self.record.wins += 1;
        self.record.scores.push(score);
        self.budget = self.budget.saturating_add(prize);
        Ok(())
    }

    /// Credit a match loss and eliminate the team
    pub fn record_loss(&mut self) -> Result<(), TeamError> {
        self.ensure_active()?;
        self.record.losses += 1;
        self.active = false;
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), TeamError> {
        if self.active {
            Ok(())
        } else {
            Err(TeamError::Eliminated {
                sponsor: self.sponsor.clone(),
            })
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Team {} | Budget: ${} | Active: {} | Inventory: [{}]",
            self.sponsor,
            self.budget,
            self.active,
            self.inventory_models().join(", ")
        )
    }
}

#[cfg(test)]
#[path = "team_tests.rs"]
mod team_tests;
