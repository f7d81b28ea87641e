//! Sponsor and budget allocation

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::config::{BudgetRange, ConfigError};

/// A sponsor and its starting budget, one per roster slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub sponsor: String,
    pub budget: u64,
}

/// Assigns a unique sponsor and a budget to every roster slot
#[derive(Debug, Clone)]
pub struct SponsorAllocator {
    roster_size: usize,
    budget: BudgetRange,
}

impl SponsorAllocator {
    pub fn new(roster_size: usize, budget: BudgetRange) -> Self {
        Self {
            roster_size,
            budget,
        }
    }

    /// Produce `roster_size` allocations.
    ///
    /// `forced` sponsors take the first slots in the order given; the rest
    /// are drawn without replacement from `pool` minus the forced ones.
    /// A `fixed_budget` replaces the random draw and must lie inside the
    /// configured range.
    pub fn allocate<R: Rng + ?Sized>(
        &self,
        pool: &[String],
        forced: &[String],
        fixed_budget: Option<u64>,
        rng: &mut R,
    ) -> Result<Vec<Allocation>, ConfigError> {
        // Public fields can bypass `BudgetRange::new`
        self.budget.validate()?;

        if forced.len() > self.roster_size {
            return Err(ConfigError::TooManySponsors {
                given: forced.len(),
                roster_size: self.roster_size,
            });
        }

        let mut taken = HashSet::new();
        for sponsor in forced {
            if !taken.insert(sponsor.as_str()) {
                return Err(ConfigError::DuplicateSponsor(sponsor.clone()));
            }
        }

        if let Some(budget) = fixed_budget {
            if !self.budget.contains(budget) {
                return Err(ConfigError::BudgetOutOfRange {
                    budget,
                    low: self.budget.low,
                    high: self.budget.high,
                });
            }
        }

        let mut remaining: Vec<&String> = Vec::new();
        for sponsor in pool {
            if taken.insert(sponsor.as_str()) {
                remaining.push(sponsor);
            }
        }

        let needed = self.roster_size - forced.len();
        if remaining.len() < needed {
            return Err(ConfigError::InsufficientSponsors {
                needed,
                available: remaining.len(),
            });
        }

        let drawn: Vec<String> = remaining
            .choose_multiple(rng, needed)
            .map(|sponsor| (*sponsor).clone())
            .collect();

        let allocations: Vec<Allocation> = forced
            .iter()
            .cloned()
            .chain(drawn)
            .map(|sponsor| {
                let budget = fixed_budget.unwrap_or_else(|| self.sample_budget(rng));
                Allocation { sponsor, budget }
            })
            .collect();

        debug!(
            slots = allocations.len(),
            forced = forced.len(),
            "Allocated sponsors"
        );
        Ok(allocations)
    }

    /// Draw uniformly from `low, low + incr, ...` not exceeding `high`.
    /// The range must already be validated.
    fn sample_budget<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        self.budget.low + self.budget.incr * rng.gen_range(0..self.budget.steps())
    }
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod allocator_tests;
