//! Property tests for purchases and brackets over random catalogs

use fleet_core::{CatalogItem, CatalogRow, MemoryCatalog, PurchaseStrategy};
use greedy_strategy::GreedyStrategy;
use proptest::prelude::*;
use std::collections::HashSet;
use tournament::{BracketState, BudgetRange, StrategyKind, Tournament, TournamentConfig};

const SPONSORS: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];

fn arb_items() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((1u64..5_000, 0u64..200), 0..10)
}

fn arb_catalog() -> impl Strategy<Value = MemoryCatalog> {
    prop::collection::vec((0usize..SPONSORS.len(), 1u64..40, 0u64..50), 0..30).prop_map(|rows| {
        let rows = rows.into_iter().enumerate().map(|(i, (sponsor, cost, score))| {
            CatalogRow::new(SPONSORS[sponsor], format!("m{i}"), cost * 1000, score)
        });
        MemoryCatalog::from_rows(rows).unwrap_or_default()
    })
}

fn to_items(raw: &[(u64, u64)]) -> Vec<CatalogItem> {
    raw.iter()
        .enumerate()
        .map(|(i, &(cost, score))| CatalogItem::new(format!("m{i}"), cost, score))
        .collect()
}

proptest! {
    #[test]
    fn greedy_purchase_is_feasible(raw in arb_items(), budget in 0u64..20_000) {
        let items = to_items(&raw);
        let purchase = GreedyStrategy::new().select(budget, &items);

        prop_assert!(purchase.total_cost() <= budget);
        prop_assert_eq!(purchase.residual, budget - purchase.total_cost());
        // Each row at most once
        prop_assert!(purchase.items.len() <= items.len());
    }

    #[test]
    fn bracket_terminates_with_one_champion(
        catalog in arb_catalog(),
        k in 0u32..4,
        exact in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let teams = 1i64 << k;
        let strategy = if exact { StrategyKind::Exact } else { StrategyKind::Greedy };
        let config = TournamentConfig::new("prop", "unused.json", teams, BudgetRange::new(0, 50_000, 5_000).unwrap())
            .unwrap()
            .with_strategy(strategy)
            .with_prize(10_000)
            .with_seed(seed);

        let pool: Vec<String> = SPONSORS.iter().map(|s| s.to_string()).collect();
        let mut tournament = Tournament::new(config, catalog);
        // Catalog may not list every sponsor, so force the roster explicitly
        tournament.generate_sponsors(&pool[..teams as usize], None).unwrap();
        tournament.generate_teams().unwrap();
        let starting: Vec<u64> = tournament.teams().iter().map(|t| t.budget()).collect();
        tournament.buy_items().unwrap();
        tournament.hold_event().unwrap();

        let bracket = tournament.bracket().unwrap();
        prop_assert_eq!(bracket.state(), BracketState::Champion);
        prop_assert_eq!(bracket.rounds_played(), k);
        prop_assert_eq!(bracket.matches().len(), teams as usize - 1);
        prop_assert_eq!(bracket.teams().iter().filter(|t| t.is_active()).count(), 1);

        // Every team's money is accounted for: start + prizes - purchases
        for (team, start) in bracket.teams().iter().zip(starting) {
            let spent: u64 = team.inventory().iter().map(|i| i.cost).sum();
            let earned = team.record().wins as u64 * 10_000;
            prop_assert_eq!(team.budget() + spent, start + earned);
            prop_assert_eq!(team.record().items_used as usize, team.inventory().len());
            prop_assert_eq!(team.record().scores.len() as u32, team.record().wins);
        }

        // Eliminated teams never show up in a later round
        let mut out: HashSet<&str> = HashSet::new();
        for round in 1..=k {
            let matches: Vec<_> = bracket.matches().iter().filter(|m| m.round == round).collect();
            prop_assert_eq!(matches.len(), (teams as usize) >> round);
            for m in &matches {
                prop_assert!(!out.contains(m.winner.as_str()));
                prop_assert!(!out.contains(m.loser.as_str()));
                prop_assert!(m.winner_score >= m.loser_score);
            }
            out.extend(
                bracket
                    .matches()
                    .iter()
                    .filter(|m| m.round == round)
                    .map(|m| m.loser.as_str()),
            );
        }
    }
}
