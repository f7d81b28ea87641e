use super::*;
use crate::config::{BudgetRange, ConfigError};
use fleet_core::{CatalogRow, MemoryCatalog};

fn catalog() -> MemoryCatalog {
    MemoryCatalog::from_rows(vec![
        CatalogRow::new("Tesla", "Model S", 40000, 120),
        CatalogRow::new("Tesla", "Model 3", 35000, 130),
        CatalogRow::new("Tesla", "Model X", 50000, 110),
        CatalogRow::new("Ford", "Fusion", 25000, 40),
        CatalogRow::new("BMW", "i3", 30000, 100),
        CatalogRow::new("Honda", "Accord", 28000, 50),
    ])
    .unwrap()
}

fn config(teams: i64) -> TournamentConfig {
    let budget = BudgetRange::new(10000, 50000, 5000).unwrap();
    TournamentConfig::new("Test Cup", "unused.json", teams, budget)
        .unwrap()
        .with_seed(123)
}

fn sponsors(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_display() {
    let tournament = Tournament::new(config(4), catalog());
    assert_eq!(tournament.to_string(), "Test Cup (4 teams)");
    assert_eq!(tournament.strategy_name(), "greedy");
}

#[test]
fn test_generate_teams_matches_allocations() {
    let mut tournament = Tournament::new(config(4), catalog());
    tournament.generate_sponsors(&[], None).unwrap();
    let allocations = tournament.allocations().to_vec();

    let teams = tournament.generate_teams().unwrap();
    assert_eq!(teams.len(), 4);
    for (team, allocation) in teams.iter().zip(&allocations) {
        assert_eq!(team.sponsor(), allocation.sponsor);
        assert_eq!(team.budget(), allocation.budget);
        assert!(team.inventory().is_empty());
        assert!(team.is_active());
    }
}

#[test]
fn test_steps_out_of_order() {
    let mut tournament = Tournament::new(config(4), catalog());
    assert!(matches!(
        tournament.generate_teams(),
        Err(TournamentError::SponsorsNotGenerated)
    ));
    assert!(matches!(tournament.buy_items(), Err(TournamentError::TeamsNotGenerated)));
    assert!(matches!(tournament.hold_event(), Err(TournamentError::TeamsNotGenerated)));
    assert!(matches!(tournament.champion(), Err(TournamentError::NoChampion)));

    tournament.generate_sponsors(&[], None).unwrap();
    tournament.generate_teams().unwrap();
    assert!(matches!(
        tournament.generate_sponsors(&[], None),
        Err(TournamentError::InvalidState { .. })
    ));
}

#[test]
fn test_greedy_initial_purchase() {
    let mut tournament = Tournament::new(config(1), catalog());
    tournament
        .generate_sponsors(&sponsors(&["Tesla"]), Some(50000))
        .unwrap();
    tournament.generate_teams().unwrap();
    tournament.buy_items().unwrap();

    let team = &tournament.teams()[0];
    assert_eq!(team.inventory_models(), vec!["Model 3"]);
    assert_eq!(team.budget(), 15000);
}

#[test]
fn test_hold_event_four_teams() {
    let mut tournament = Tournament::new(config(4), catalog());
    tournament
        .generate_sponsors(&sponsors(&["Tesla", "Ford", "BMW", "Honda"]), Some(50000))
        .unwrap();
    tournament.generate_teams().unwrap();
    tournament.buy_items().unwrap();
    let champion = tournament.hold_event().unwrap().clone();

    // Tesla (130) beats Ford (40); BMW (100) beats Honda (50); Tesla takes the final
    assert_eq!(champion.sponsor(), "Tesla");
    assert!(champion.is_active());
    assert_eq!(champion.record().wins, 2);

    let spent: u64 = champion.inventory().iter().map(|item| item.cost).sum();
    assert_eq!(champion.budget(), 50000 + 2 * 50000 - spent);
    assert!(matches!(tournament.hold_event(), Err(TournamentError::AlreadyConcluded)));
}

#[test]
fn test_invalid_fixed_budget_is_fatal() {
    let mut tournament = Tournament::new(config(4), catalog());
    let result = tournament.generate_sponsors(&[], Some(99_999_999));
    assert!(matches!(
        result,
        Err(TournamentError::Config(ConfigError::BudgetOutOfRange { .. }))
    ));
}

#[test]
fn test_unvalidated_budget_range_is_fatal() {
    let mut config = config(4);
    config.budget.incr = 0;
    let mut tournament = Tournament::new(config, catalog());

    let result = tournament.generate_sponsors(&[], None);
    assert!(matches!(
        result,
        Err(TournamentError::Config(ConfigError::InvalidBudgetRange { .. }))
    ));
    assert!(tournament.allocations().is_empty());
}

#[test]
fn test_set_strategy_only_before_stocking() {
    let mut tournament = Tournament::new(config(2), catalog());
    tournament.set_strategy(StrategyKind::Exact).unwrap();
    assert_eq!(tournament.strategy_name(), "exact");

    tournament.generate_sponsors(&[], None).unwrap();
    tournament.generate_teams().unwrap();
    tournament.buy_items().unwrap();
    assert!(tournament.set_strategy(StrategyKind::Greedy).is_err());
}

#[test]
fn test_seeded_runs_repeat() {
    let mut a = Tournament::new(config(4), catalog());
    let mut b = Tournament::new(config(4), catalog());
    let champion_a = a.run().unwrap().clone();
    let champion_b = b.run().unwrap().clone();
    assert_eq!(champion_a, champion_b);
    assert_eq!(a.matches(), b.matches());
}
