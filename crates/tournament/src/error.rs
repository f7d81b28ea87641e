//! Tournament state errors

use fleet_core::{CatalogError, TeamError};
use thiserror::Error;

use crate::bracket::BracketState;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Team(#[from] TeamError),

    #[error("Tournament has no champion yet")]
    NoChampion,

    #[error("Bracket has already produced a champion")]
    AlreadyConcluded,

    #[error("Bracket is {found}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        found: BracketState,
    },

    #[error("Sponsors must be generated before teams")]
    SponsorsNotGenerated,

    #[error("Teams have not been generated")]
    TeamsNotGenerated,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),
}
