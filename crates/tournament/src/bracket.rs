//! Single-elimination bracket for stocking teams and playing rounds
//!
//! The bracket moves through `Seeded -> Stocked -> InRound -> Champion`.
//! Each round pairs surviving teams by position (`[0, 1], [2, 3], ...`).
//! The higher total inventory score wins and a tie goes to the first team
//! of the pair. The winner collects the prize and immediately buys the
//! single best-ratio item it can afford.

use fleet_core::{best_affordable, CatalogItem, CatalogSource, PurchaseStrategy, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info, warn};

use crate::config::{roster_size, ConfigError};
use crate::error::TournamentError;

/// Lifecycle of a bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BracketState {
    /// Roster assigned, nothing bought yet
    Seeded,
    /// Every team has made its initial purchase
    Stocked,
    /// The given round (1-indexed) has been played and more remain
    InRound { round: u32 },
    /// One team left; terminal
    Champion,
}

impl fmt::Display for BracketState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketState::Seeded => write!(f, "seeded"),
            BracketState::Stocked => write!(f, "stocked"),
            BracketState::InRound { round } => write!(f, "in round {}", round),
            BracketState::Champion => write!(f, "finished"),
        }
    }
}

/// Audit entry for one resolved match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub round: u32,
    pub winner: String,
    pub loser: String,
    pub winner_score: u64,
    pub loser_score: u64,
    /// Item the winner bought with its prize, if it could afford one
    pub bonus_item: Option<CatalogItem>,
}

/// Runs a power-of-two roster down to one champion
#[derive(Debug, Clone)]
pub struct Bracket {
    teams: Vec<Team>,
    /// Indices into `teams` still in play, in bracket order
    alive: Vec<usize>,
    state: BracketState,
    prize: u64,
    round: u32,
    matches: Vec<MatchOutcome>,
}

impl Bracket {
    /// Seed a bracket. The roster must be a non-empty power of two with
    /// unique sponsors.
    pub fn new(teams: Vec<Team>, prize: u64) -> Result<Self, TournamentError> {
        roster_size(teams.len() as i64)?;

        let mut seen = HashSet::new();
        for team in &teams {
            if !seen.insert(team.sponsor()) {
                return Err(ConfigError::DuplicateSponsor(team.sponsor().to_string()).into());
            }
        }

        let alive = (0..teams.len()).collect();
        Ok(Self {
            teams,
            alive,
            state: BracketState::Seeded,
            prize,
            round: 0,
            matches: Vec::new(),
        })
    }

    pub fn state(&self) -> BracketState {
        self.state
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, sponsor: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.sponsor() == sponsor)
    }

    /// Teams still in play, in bracket order
    pub fn alive(&self) -> Vec<&Team> {
        self.alive.iter().map(|&idx| &self.teams[idx]).collect()
    }

    pub fn prize(&self) -> u64 {
        self.prize
    }

    /// Every match played so far, in order
    pub fn matches(&self) -> &[MatchOutcome] {
        &self.matches
    }

    /// Rounds needed to finish: log2 of the roster size
    pub fn total_rounds(&self) -> u32 {
        self.teams.len().trailing_zeros()
    }

    pub fn rounds_played(&self) -> u32 {
        self.round
    }

    /// Initial purchase for every team.
    pub fn stock(
        &mut self,
        strategy: &dyn PurchaseStrategy,
        catalog: &dyn CatalogSource,
    ) -> Result<(), TournamentError> {
        if self.state != BracketState::Seeded {
            return Err(self.unexpected("seeded"));
        }

        for team in &mut self.teams {
            let items = catalog.items_for(team.sponsor());
            if items.is_empty() {
                warn!(sponsor = team.sponsor(), "Sponsor has an empty catalog");
            }
            let purchase = strategy.select(team.budget(), &items);
            debug!(
                sponsor = team.sponsor(),
                strategy = strategy.name(),
                items = ?purchase.models(),
                score = purchase.total_score(),
                residual = purchase.residual,
                "Initial purchase"
            );
            team.commit(purchase)?;
        }

        self.state = BracketState::Stocked;
        info!(teams = self.teams.len(), strategy = strategy.name(), "Teams stocked");
        Ok(())
    }

    /// Play one round and return its matches.
    ///
    /// A one-team roster finishes without playing anything.
    pub fn play_round(
        &mut self,
        catalog: &dyn CatalogSource,
    ) -> Result<Vec<MatchOutcome>, TournamentError> {
        match self.state {
            BracketState::Stocked | BracketState::InRound { .. } => {}
            BracketState::Champion => return Err(TournamentError::AlreadyConcluded),
            BracketState::Seeded => return Err(self.unexpected("stocked")),
        }

        let mut outcomes = Vec::with_capacity(self.alive.len() / 2);
        if self.alive.len() > 1 {
            self.round += 1;
            let pairings: Vec<(usize, usize)> = self
                .alive
                .chunks_exact(2)
                .map(|pair| (pair[0], pair[1]))
                .collect();

            let mut winners = Vec::with_capacity(pairings.len());
            for (first, second) in pairings {
                let (winner, outcome) = self.resolve_match(first, second, catalog)?;
                winners.push(winner);
                outcomes.push(outcome);
            }
            self.alive = winners;
            self.matches.extend(outcomes.iter().cloned());
            debug!(round = self.round, remaining = self.alive.len(), "Round complete");
        }

        if self.alive.len() == 1 {
            self.state = BracketState::Champion;
            let champion = &self.teams[self.alive[0]];
            info!(
                sponsor = champion.sponsor(),
                score = champion.total_score(),
                budget = champion.budget(),
                "Champion decided"
            );
        } else {
            self.state = BracketState::InRound { round: self.round };
        }

        Ok(outcomes)
    }

    /// Play every remaining round and return the champion.
    ///
    /// A finished bracket cannot be run again; use [`Bracket::champion`].
    pub fn run(&mut self, catalog: &dyn CatalogSource) -> Result<&Team, TournamentError> {
        if self.state == BracketState::Champion {
            return Err(TournamentError::AlreadyConcluded);
        }
        while self.state != BracketState::Champion {
            self.play_round(catalog)?;
        }
        self.champion()
    }

    pub fn champion(&self) -> Result<&Team, TournamentError> {
        if self.state != BracketState::Champion {
            return Err(TournamentError::NoChampion);
        }
        Ok(&self.teams[self.alive[0]])
    }

    fn resolve_match(
        &mut self,
        first: usize,
        second: usize,
        catalog: &dyn CatalogSource,
    ) -> Result<(usize, MatchOutcome), TournamentError> {
        let first_score = self.teams[first].total_score();
        let second_score = self.teams[second].total_score();

        // Ties go to the first team of the pairing
        let (winner, loser, winner_score, loser_score) = if first_score >= second_score {
            (first, second, first_score, second_score)
        } else {
            (second, first, second_score, first_score)
        };

        self.teams[loser].record_loss()?;
        self.teams[winner].record_win(winner_score, self.prize)?;

        let team = &mut self.teams[winner];
        let items = catalog.items_for(team.sponsor());
        let bonus_item = best_affordable(team.budget(), &items).cloned();
        if let Some(item) = &bonus_item {
            team.buy(item.clone())?;
        }

        let outcome = MatchOutcome {
            round: self.round,
            winner: self.teams[winner].sponsor().to_string(),
            loser: self.teams[loser].sponsor().to_string(),
            winner_score,
            loser_score,
            bonus_item,
        };
        debug!(
            round = outcome.round,
            winner = %outcome.winner,
            loser = %outcome.loser,
            winner_score,
            loser_score,
            bonus = ?outcome.bonus_item.as_ref().map(|item| &item.model),
            "Match resolved"
        );
        Ok((winner, outcome))
    }

    fn unexpected(&self, expected: &'static str) -> TournamentError {
        TournamentError::InvalidState {
            expected,
            found: self.state,
        }
    }
}

#[cfg(test)]
#[path = "bracket_tests.rs"]
mod bracket_tests;
