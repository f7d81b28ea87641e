//! Tournament results storage and reporting

use fleet_core::Team;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bracket::MatchOutcome;
use crate::error::TournamentError;
use crate::runner::Tournament;

/// Snapshot of a finished tournament
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name of the tournament
    pub name: String,
    /// Strategy used for the initial purchases
    pub strategy: String,
    pub prize: u64,
    pub champion: String,
    pub champion_score: u64,
    /// Every team in roster order, in its final state
    pub teams: Vec<Team>,
    /// All matches in the order they were played
    pub matches: Vec<MatchOutcome>,
}

impl TournamentResults {
    pub fn from_tournament(tournament: &Tournament) -> Result<Self, TournamentError> {
        let champion = tournament.champion()?;
        Ok(Self {
            name: tournament.name().to_string(),
            strategy: tournament.strategy_name().to_string(),
            prize: tournament.config().prize,
            champion: champion.sponsor().to_string(),
            champion_score: champion.total_score(),
            teams: tournament.teams().to_vec(),
            matches: tournament.matches().to_vec(),
        })
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn rounds(&self) -> u32 {
        self.matches.iter().map(|m| m.round).max().unwrap_or(0)
    }

    /// Win/loss strip: one row per sponsor, one column per round.
    ///
    /// `W` and `L` mark the result of that round; `-` means the team was
    /// already out.
    pub fn win_record(&self) -> String {
        let rounds = self.rounds();
        let mut strip = String::new();

        strip.push_str(&format!("{:<20}", "Sponsor"));
        for round in 1..=rounds {
            strip.push_str(&format!(" {:<3}", format!("R{}", round)));
        }
        strip.push('\n');
        strip.push_str(&"-".repeat(20 + 4 * rounds as usize));
        strip.push('\n');

        for team in &self.teams {
            strip.push_str(&format!("{:<20}", team.sponsor()));
            for round in 1..=rounds {
                let mark = self
                    .matches
                    .iter()
                    .filter(|m| m.round == round)
                    .find_map(|m| {
                        if m.winner == team.sponsor() {
                            Some("W")
                        } else if m.loser == team.sponsor() {
                            Some("L")
                        } else {
                            None
                        }
                    })
                    .unwrap_or("-");
                strip.push_str(&format!(" {:<3}", mark));
            }
            strip.push('\n');
        }

        strip
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!(
            "Strategy: {}, prize {} per win, {} teams\n",
            self.strategy,
            self.prize,
            self.teams.len()
        ));
        report.push_str(&format!(
            "Champion: {} (score {})\n\n",
            self.champion, self.champion_score
        ));

        report.push_str("Matches:\n");
        report.push_str(&format!(
            "{:<6} {:<20} {:<20} {:>7}-{:<7} {}\n",
            "Round", "Winner", "Loser", "W", "L", "Bonus"
        ));
        report.push_str(&"-".repeat(72));
        report.push('\n');
        for entry in &self.matches {
            report.push_str(&format!(
                "{:<6} {:<20} {:<20} {:>7}-{:<7} {}\n",
                entry.round,
                entry.winner,
                entry.loser,
                entry.winner_score,
                entry.loser_score,
                entry
                    .bonus_item
                    .as_ref()
                    .map(|item| item.model.as_str())
                    .unwrap_or("-")
            ));
        }

        report.push_str("\nWin record:\n");
        report.push_str(&self.win_record());
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

impl Tournament {
    /// Render the win/loss strip of a finished tournament
    pub fn win_record(&self) -> Result<String, TournamentError> {
        Ok(TournamentResults::from_tournament(self)?.win_record())
    }

    pub fn results(&self) -> Result<TournamentResults, TournamentError> {
        TournamentResults::from_tournament(self)
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
