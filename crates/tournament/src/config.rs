//! Tournament configuration

use exact_strategy::ExactStrategy;
use fleet_core::PurchaseStrategy;
use greedy_strategy::GreedyStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Roster size used when the config does not name one
pub const DEFAULT_TEAMS: usize = 16;

/// Highest budget a range may reach. The exact strategy keeps a table with
/// one cell per row per budget unit, so this bounds its memory.
pub const MAX_BUDGET: u64 = 1_000_000;

/// Configuration errors. Every variant is fatal and raised before any
/// tournament state exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("The number of teams must be an integer, got {0}")]
    NotAnInteger(String),

    #[error("Number of teams must be positive and non-zero, got {0}")]
    NotPositive(i64),

    #[error("Number of teams must be a power of two, got {0}")]
    NotPowerOfTwo(i64),

    #[error("Budget range is invalid: low {low}, high {high}, increment {incr}")]
    InvalidBudgetRange { low: u64, high: u64, incr: u64 },

    #[error("Budget {high} exceeds the maximum of {max}")]
    BudgetTooLarge { high: u64, max: u64 },

    #[error("Fixed budget {budget} is outside [{low}, {high}]")]
    BudgetOutOfRange { budget: u64, low: u64, high: u64 },

    #[error("{given} sponsors requested for a roster of {roster_size}")]
    TooManySponsors { given: usize, roster_size: usize },

    #[error("Sponsor {0} appears more than once")]
    DuplicateSponsor(String),

    #[error("Need {needed} more sponsors but only {available} are available")]
    InsufficientSponsors { needed: usize, available: usize },

    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Seed must be a non-negative integer, got {0}")]
    InvalidSeed(String),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Validate a requested roster size
pub fn roster_size(teams: i64) -> Result<usize, ConfigError> {
    if teams <= 0 {
        return Err(ConfigError::NotPositive(teams));
    }
    if !(teams as u64).is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo(teams));
    }
    Ok(teams as usize)
}

/// Validate a roster size read from an untyped config value
pub fn roster_size_from_value(value: &toml::Value) -> Result<usize, ConfigError> {
    match value {
        toml::Value::Integer(teams) => roster_size(*teams),
        other => Err(ConfigError::NotAnInteger(other.to_string())),
    }
}

/// Parse an RNG seed given on the command line
pub fn parse_seed(value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(value.to_string()))
}

/// Range budgets are drawn from: `low, low + incr, ...` up to `high`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub low: u64,
    pub high: u64,
    pub incr: u64,
}

impl BudgetRange {
    pub fn new(low: u64, high: u64, incr: u64) -> Result<Self, ConfigError> {
        let range = Self { low, high, incr };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.low > self.high || self.incr == 0 {
            return Err(ConfigError::InvalidBudgetRange {
                low: self.low,
                high: self.high,
                incr: self.incr,
            });
        }
        if self.high > MAX_BUDGET {
            return Err(ConfigError::BudgetTooLarge {
                high: self.high,
                max: MAX_BUDGET,
            });
        }
        Ok(())
    }

    pub fn contains(&self, budget: u64) -> bool {
        (self.low..=self.high).contains(&budget)
    }

    /// Number of distinct budgets that can be drawn
    pub fn steps(&self) -> u64 {
        (self.high - self.low) / self.incr + 1
    }
}

/// Which purchase strategy stocks the teams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Greedy,
    Exact,
}

impl StrategyKind {
    pub fn build(self) -> Box<dyn PurchaseStrategy> {
        match self {
            StrategyKind::Greedy => Box::new(GreedyStrategy::new()),
            StrategyKind::Exact => Box::new(ExactStrategy::new()),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "greedy" => Ok(StrategyKind::Greedy),
            "exact" | "dp" => Ok(StrategyKind::Exact),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Greedy => write!(f, "greedy"),
            StrategyKind::Exact => write!(f, "exact"),
        }
    }
}

/// Validated tournament configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentConfig {
    /// Competition name
    pub name: String,
    /// JSON catalog the sponsors' items are read from
    pub catalog_path: PathBuf,
    /// Roster size, always a power of two
    pub teams: usize,
    pub budget: BudgetRange,
    pub strategy: StrategyKind,
    /// Budget bonus credited to every match winner
    pub prize: u64,
    /// RNG seed for reproducible draws (None = OS entropy)
    pub seed: Option<u64>,
}

/// On-disk shape, before validation
#[derive(Debug, Deserialize)]
struct RawConfig {
    name: String,
    catalog_path: PathBuf,
    #[serde(default)]
    teams: Option<toml::Value>,
    budget: BudgetRange,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    prize: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
}

impl TournamentConfig {
    /// Build a config in code. The prize defaults to the top of the budget range.
    pub fn new(
        name: impl Into<String>,
        catalog_path: impl Into<PathBuf>,
        teams: i64,
        budget: BudgetRange,
    ) -> Result<Self, ConfigError> {
        budget.validate()?;
        Ok(Self {
            name: name.into(),
            catalog_path: catalog_path.into(),
            teams: roster_size(teams)?,
            budget,
            strategy: StrategyKind::default(),
            prize: budget.high,
            seed: None,
        })
    }

    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_prize(mut self, prize: u64) -> Self {
        self.prize = prize;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load from a TOML file. A relative `catalog_path` is resolved against
    /// the directory holding the config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        let mut config = Self::from_toml_str(&contents)?;
        if config.catalog_path.is_relative() {
            if let Some(dir) = path.parent() {
                config.catalog_path = dir.join(&config.catalog_path);
            }
        }
        Ok(config)
    }

    /// Parse and validate a TOML document (useful for testing)
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let teams = match &raw.teams {
            Some(value) => roster_size_from_value(value)?,
            None => DEFAULT_TEAMS,
        };
        raw.budget.validate()?;
        let strategy = match raw.strategy.as_deref() {
            Some(name) => name.parse()?,
            None => StrategyKind::default(),
        };

        Ok(Self {
            name: raw.name,
            catalog_path: raw.catalog_path,
            teams,
            budget: raw.budget,
            strategy,
            prize: raw.prize.unwrap_or(raw.budget.high),
            seed: raw.seed,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
