use super::*;

#[test]
fn test_new_team_defaults() {
    let team = Team::new("Tesla", 45000);
    assert_eq!(team.sponsor(), "Tesla");
    assert_eq!(team.budget(), 45000);
    assert!(team.inventory().is_empty());
    assert!(team.is_active());
    assert_eq!(team.record(), &MatchRecord::default());
    assert_eq!(team.total_score(), 0);
}

#[test]
fn test_commit_deducts_cost() {
    let mut team = Team::new("Tesla", 50000);
    let purchase = Purchase {
        items: vec![CatalogItem::new("Model 3", 35000, 130)],
        residual: 15000,
    };
    team.commit(purchase).unwrap();

    assert_eq!(team.budget(), 15000);
    assert_eq!(team.inventory_models(), vec!["Model 3"]);
    assert_eq!(team.total_score(), 130);
    assert_eq!(team.record().items_used, 1);
}

#[test]
fn test_unaffordable_commit_leaves_team_untouched() {
    let mut team = Team::new("Tesla", 30000);
    let result = team.buy(CatalogItem::new("Model S", 40000, 120));

    assert_eq!(
        result,
        Err(TeamError::Unaffordable {
            sponsor: "Tesla".to_string(),
            cost: 40000,
            budget: 30000,
        })
    );
    assert_eq!(team.budget(), 30000);
    assert!(team.inventory().is_empty());
}

#[test]
fn test_exact_budget_is_affordable() {
    let mut team = Team::new("BMW", 30000);
    team.buy(CatalogItem::new("i3", 30000, 100)).unwrap();
    assert_eq!(team.budget(), 0);
}

#[test]
fn test_record_win_adds_prize_and_score() {
    let mut team = Team::new("Tesla", 15000);
    team.record_win(130, 50000).unwrap();

    assert_eq!(team.budget(), 65000);
    assert_eq!(team.record().wins, 1);
    assert_eq!(team.record().scores, vec![130]);
    assert!(team.is_active());
}

#[test]
fn test_elimination_is_permanent() {
    let mut team = Team::new("Ford", 10000);
    team.record_loss().unwrap();
    assert!(!team.is_active());
    assert_eq!(team.record().losses, 1);

    // Nothing can revive or credit an eliminated team
    assert!(matches!(team.record_win(10, 10), Err(TeamError::Eliminated { .. })));
    assert!(matches!(team.record_loss(), Err(TeamError::Eliminated { .. })));
    assert!(matches!(
        team.buy(CatalogItem::new("Fiesta", 1, 1)),
        Err(TeamError::Eliminated { .. })
    ));
    assert!(!team.is_active());
    assert_eq!(team.record().losses, 1);
}

#[test]
fn test_display() {
    let mut team = Team::new("Tesla", 80000);
    team.buy(CatalogItem::new("Model 3", 35000, 130)).unwrap();
    team.record_loss().unwrap();

    assert_eq!(
        team.to_string(),
        "Team Tesla | Budget: $45000 | Active: false | Inventory: [Model 3]"
    );
}

#[test]
fn test_items_used_saturates() {
    let mut team: Team = serde_json::from_value(serde_json::json!({
        "sponsor": "Tesla",
        "budget": 100,
        "inventory": [],
        "active": true,
        "record": { "wins": 0, "losses": 0, "scores": [], "items_used": u32::MAX - 1 }
    }))
    .unwrap();

    team.commit(Purchase {
        items: vec![CatalogItem::new("a", 10, 1), CatalogItem::new("b", 10, 1)],
        residual: 80,
    })
    .unwrap();

    assert_eq!(team.record().items_used, u32::MAX);
    assert_eq!(team.budget(), 80);
    assert_eq!(team.inventory().len(), 2);
}
