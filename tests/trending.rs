use storefront_core::catalog::{seed_products, Product};
use storefront_core::interactions::{Interaction, InteractionKind};
use storefront_core::types::{ScoreWhy, DAY_MS, WEEK_MS};
use storefront_core::{trending, RecommendationEngine, DEFAULT_TRENDING_LIMIT};

const NOW: i64 = 1_700_000_000_000;

fn make_product(id: &str, rating: f64) -> Product {
    Product::new(id, id.to_uppercase(), "Audio", 10.0, rating)
}

fn ids(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn empty_log_ranks_by_rating_alone() {
    let catalog = vec![make_product("a", 4.5), make_product("b", 4.8)];

    let result = trending(&catalog, &[], DEFAULT_TRENDING_LIMIT, NOW);

    assert_eq!(ids(&result), vec!["b", "a"]);
}

#[test]
fn empty_catalog_yields_nothing() {
    let log = vec![Interaction::new("a", InteractionKind::View, "Audio", NOW)];
    assert!(trending(&[], &log, 6, NOW).is_empty());
}

#[test]
fn seed_catalog_without_history_keeps_catalog_order_on_rating_ties() {
    let catalog = seed_products();

    let result = trending(&catalog, &[], DEFAULT_TRENDING_LIMIT, NOW);

    assert_eq!(ids(&result), vec!["3", "1", "6", "4", "2", "5"]);
}

#[test]
fn recent_activity_outranks_rating() {
    let catalog = seed_products();
    let log = vec![Interaction::new("5", InteractionKind::View, "Bags", NOW)];

    let result = trending(&catalog, &log, 3, NOW);

    assert_eq!(ids(&result), vec!["5", "3", "1"]);
}

#[test]
fn activity_outside_the_window_is_ignored() {
    let catalog = seed_products();
    let log = vec![
        Interaction::new("5", InteractionKind::Purchase, "Bags", NOW - 8 * DAY_MS),
        // Exactly at the window edge is already out
        Interaction::new("2", InteractionKind::Purchase, "Wearables", NOW - WEEK_MS),
    ];

    let result = RecommendationEngine::default().rank_trending(&catalog, &log, 6, NOW);

    let order: Vec<&str> = result.products.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["3", "1", "6", "4", "2", "5"]);
    assert_eq!(result.ranking.interactions_considered, 0);
}

#[test]
fn interaction_kinds_are_weighted_by_intent() {
    let catalog = vec![make_product("a", 4.0), make_product("b", 4.0)];
    let log = vec![
        Interaction::new("b", InteractionKind::View, "Audio", NOW),
        Interaction::new("b", InteractionKind::View, "Audio", NOW),
        Interaction::new("a", InteractionKind::Purchase, "Audio", NOW - DAY_MS),
    ];

    let result = RecommendationEngine::default().rank_trending(&catalog, &log, 6, NOW);

    assert_eq!(result.products[0].id.as_str(), "a");
    match &result.products[0].why {
        ScoreWhy::Trending(why) => {
            assert!((why.interaction - 3.0 * 6.0 / 7.0).abs() < 1e-9);
            assert_eq!(why.recent_interactions, 1);
        }
        other => panic!("unexpected explanation {other:?}"),
    }
    match &result.products[1].why {
        ScoreWhy::Trending(why) => {
            assert!((why.interaction - 2.0).abs() < 1e-12);
            assert_eq!(why.recent_interactions, 2);
        }
        other => panic!("unexpected explanation {other:?}"),
    }
}

#[test]
fn activity_fades_toward_the_window_edge() {
    let catalog = vec![make_product("old", 4.0), make_product("new", 4.0)];
    let log = vec![
        Interaction::new("old", InteractionKind::View, "Audio", NOW - 6 * DAY_MS),
        Interaction::new("new", InteractionKind::View, "Audio", NOW - DAY_MS),
    ];

    let result = trending(&catalog, &log, 6, NOW);

    assert_eq!(ids(&result), vec!["new", "old"]);
}

#[test]
fn trending_weight_is_not_floored_near_the_window_edge() {
    // 6.5 days old: linear weight 1/14, below the 0.1 preference floor
    let catalog = vec![make_product("a", 4.0), make_product("b", 4.75)];
    let log = vec![Interaction::new("a", InteractionKind::View, "Audio", NOW - 13 * DAY_MS / 2)];

    let result = RecommendationEngine::default().rank_trending(&catalog, &log, 6, NOW);

    let order: Vec<&str> = result.products.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order, vec!["b", "a"]);
    match &result.products[1].why {
        ScoreWhy::Trending(why) => {
            assert!((why.interaction - 1.0 / 14.0).abs() < 1e-12);
            assert_eq!(why.recent_interactions, 1);
        }
        other => panic!("unexpected explanation {other:?}"),
    }
}

#[test]
fn dangling_product_ids_are_tolerated() {
    let catalog = vec![make_product("a", 4.0)];
    let log = vec![Interaction::new("ghost", InteractionKind::Purchase, "Audio", NOW)];

    let result = RecommendationEngine::default().rank_trending(&catalog, &log, 6, NOW);

    assert_eq!(result.products.len(), 1);
    assert_eq!(result.products[0].id.as_str(), "a");
    assert_eq!(result.ranking.interactions_considered, 1);
}

#[test]
fn limit_truncates_and_metadata_reports_it() {
    let catalog = seed_products();

    let result = RecommendationEngine::default().rank_trending(&catalog, &[], 2, NOW);

    assert_eq!(result.products.len(), 2);
    assert_eq!(result.ranking.focal, None);
    assert_eq!(result.ranking.candidates_considered, 6);
    assert_eq!(result.ranking.products_returned, 2);
}
