//! Ranking finished tournaments against each other

use crate::error::TournamentError;
use crate::runner::Tournament;

/// The tournament whose champion scored at least as high as the other's.
///
/// Ties favor `left`. Both tournaments must have a champion.
pub fn better_of<'a>(
    left: &'a Tournament,
    right: &'a Tournament,
) -> Result<&'a Tournament, TournamentError> {
    if left.at_least(right)? {
        Ok(left)
    } else {
        Ok(right)
    }
}

impl Tournament {
    /// Whether this champion's total score is `>=` the other champion's
    pub fn at_least(&self, other: &Tournament) -> Result<bool, TournamentError> {
        Ok(self.champion_score()? >= other.champion_score()?)
    }
}
