//! Tournament facade: sponsors, teams, stocking and the event itself

use fleet_core::{CatalogSource, MemoryCatalog, PurchaseStrategy, Team};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use tracing::info;

use crate::allocator::{Allocation, SponsorAllocator};
use crate::bracket::{Bracket, BracketState, MatchOutcome};
use crate::config::{StrategyKind, TournamentConfig};
use crate::error::TournamentError;

/// One complete competition over a single catalog
pub struct Tournament {
    config: TournamentConfig,
    catalog: Box<dyn CatalogSource>,
    strategy: Box<dyn PurchaseStrategy>,
    allocations: Vec<Allocation>,
    bracket: Option<Bracket>,
    rng: StdRng,
}

impl Tournament {
    /// Create a tournament over an already loaded catalog
    pub fn new(config: TournamentConfig, catalog: impl CatalogSource + 'static) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            strategy: config.strategy.build(),
            config,
            catalog: Box::new(catalog),
            allocations: Vec::new(),
            bracket: None,
            rng,
        }
    }

    /// Create a tournament, loading the catalog named by the config
    pub fn from_config(config: TournamentConfig) -> Result<Self, TournamentError> {
        let catalog = MemoryCatalog::load(&config.catalog_path)?;
        Ok(Self::new(config, catalog))
    }

    /// Swap the purchase strategy before any team has been stocked
    pub fn set_strategy(&mut self, kind: StrategyKind) -> Result<(), TournamentError> {
        if let Some(bracket) = &self.bracket {
            if bracket.state() != BracketState::Seeded {
                return Err(TournamentError::InvalidState {
                    expected: "seeded",
                    found: bracket.state(),
                });
            }
        }
        self.config.strategy = kind;
        self.strategy = kind.build();
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn roster_size(&self) -> usize {
        self.config.teams
    }

    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    pub fn config(&self) -> &TournamentConfig {
        &self.config
    }

    pub fn allocations(&self) -> &[Allocation] {
        &self.allocations
    }

    pub fn bracket(&self) -> Option<&Bracket> {
        self.bracket.as_ref()
    }

    pub fn teams(&self) -> &[Team] {
        self.bracket.as_ref().map(Bracket::teams).unwrap_or(&[])
    }

    pub fn matches(&self) -> &[MatchOutcome] {
        self.bracket.as_ref().map(Bracket::matches).unwrap_or(&[])
    }

    /// Draw a sponsor and budget for every roster slot.
    ///
    /// Drawing again replaces the previous allocation, as long as teams
    /// have not been built from it yet.
    pub fn generate_sponsors(
        &mut self,
        forced: &[String],
        fixed_budget: Option<u64>,
    ) -> Result<&[Allocation], TournamentError> {
        if let Some(bracket) = &self.bracket {
            return Err(TournamentError::InvalidState {
                expected: "no teams",
                found: bracket.state(),
            });
        }

        let allocator = SponsorAllocator::new(self.config.teams, self.config.budget);
        let pool = self.catalog.sponsors();
        self.allocations = allocator.allocate(&pool, forced, fixed_budget, &mut self.rng)?;
        Ok(&self.allocations)
    }

    /// Build one team per allocation and seed the bracket
    pub fn generate_teams(&mut self) -> Result<&[Team], TournamentError> {
        if self.allocations.is_empty() {
            return Err(TournamentError::SponsorsNotGenerated);
        }
        if let Some(bracket) = &self.bracket {
            return Err(TournamentError::InvalidState {
                expected: "no teams",
                found: bracket.state(),
            });
        }

        let teams = self
            .allocations
            .iter()
            .map(|allocation| Team::new(allocation.sponsor.clone(), allocation.budget))
            .collect();
        let bracket = self.bracket.insert(Bracket::new(teams, self.config.prize)?);
        Ok(bracket.teams())
    }

    /// Initial purchase for every team with the configured strategy
    pub fn buy_items(&mut self) -> Result<(), TournamentError> {
        let bracket = self
            .bracket
            .as_mut()
            .ok_or(TournamentError::TeamsNotGenerated)?;
        bracket.stock(self.strategy.as_ref(), self.catalog.as_ref())
    }

    /// Play the bracket to the end
    pub fn hold_event(&mut self) -> Result<&Team, TournamentError> {
        let bracket = self
            .bracket
            .as_mut()
            .ok_or(TournamentError::TeamsNotGenerated)?;
        let champion = bracket.run(self.catalog.as_ref())?;
        info!(
            tournament = %self.config.name,
            champion = champion.sponsor(),
            score = champion.total_score(),
            "Tournament finished"
        );
        Ok(champion)
    }

    /// Every step with default sponsor draws
    pub fn run(&mut self) -> Result<&Team, TournamentError> {
        self.generate_sponsors(&[], None)?;
        self.generate_teams()?;
        self.buy_items()?;
        self.hold_event()
    }

    pub fn champion(&self) -> Result<&Team, TournamentError> {
        self.bracket
            .as_ref()
            .ok_or(TournamentError::NoChampion)?
            .champion()
    }

    /// Total inventory score of the champion
    pub fn champion_score(&self) -> Result<u64, TournamentError> {
        Ok(self.champion()?.total_score())
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} teams)", self.config.name, self.config.teams)
    }
}

impl fmt::Debug for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tournament")
            .field("name", &self.config.name)
            .field("teams", &self.config.teams)
            .field("strategy", &self.strategy.name())
            .field("state", &self.bracket.as_ref().map(Bracket::state))
            .finish()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
