//! Property-based checks of the ranking invariants.
//!
//! Catalogs and logs are generated with `proptest`; logs reference both
//! catalog products and ids that no catalog contains.

use proptest::prelude::*;
use storefront_core::catalog::Product;
use storefront_core::interactions::{Interaction, InteractionKind};
use storefront_core::types::DAY_MS;
use storefront_core::{recommend, trending, RecommendationEngine};

const NOW: i64 = 1_700_000_000_000;
const CATEGORIES: [&str; 4] = ["Audio", "Bags", "Wearables", "Accessories"];

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec((0usize..4, 0u32..500, 0u32..=50), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (category, price, rating))| {
                Product::new(
                    format!("p{i}"),
                    format!("Product {i}"),
                    CATEGORIES[category],
                    f64::from(price),
                    f64::from(rating) / 10.0,
                )
            })
            .collect()
    })
}

fn log_strategy() -> impl Strategy<Value = Vec<Interaction>> {
    let kind = prop_oneof![
        Just(InteractionKind::View),
        Just(InteractionKind::Cart),
        Just(InteractionKind::Purchase),
    ];
    prop::collection::vec((0usize..16, kind, 0usize..4, 0i64..30 * DAY_MS), 0..24).prop_map(
        |rows| {
            rows.into_iter()
                .map(|(id, kind, category, age)| {
                    Interaction::new(format!("p{id}"), kind, CATEGORIES[category], NOW - age)
                })
                .collect()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn recommendations_are_deterministic(
        catalog in catalog_strategy(),
        log in log_strategy(),
        focal_index in 0usize..12,
        limit in 0usize..8,
    ) {
        prop_assume!(!catalog.is_empty());
        let focal = catalog[focal_index % catalog.len()].clone();

        let first = recommend(&catalog, &focal, &log, limit, NOW);
        let second = recommend(&catalog, &focal, &log, limit, NOW);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn recommendations_exclude_focal_and_respect_limit(
        catalog in catalog_strategy(),
        log in log_strategy(),
        focal_index in 0usize..12,
        limit in 0usize..8,
    ) {
        prop_assume!(!catalog.is_empty());
        let focal = catalog[focal_index % catalog.len()].clone();

        let result = RecommendationEngine::default()
            .rank_recommendations(&catalog, &focal, &log, limit, NOW);

        prop_assert!(result.products.iter().all(|ranked| ranked.id != focal.id));
        prop_assert!(result.products.len() <= limit);
        prop_assert!(result.products.len() <= catalog.len() - 1);
        prop_assert!(result.products.iter().all(|ranked| ranked.score.is_finite()));
        prop_assert!(result.products.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn trending_is_deterministic_and_bounded(
        catalog in catalog_strategy(),
        log in log_strategy(),
        limit in 0usize..8,
    ) {
        let first = trending(&catalog, &log, limit, NOW);
        let second = trending(&catalog, &log, limit, NOW);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.len() <= limit);
        prop_assert_eq!(first.len(), limit.min(catalog.len()));
    }

    #[test]
    fn trending_output_is_sorted_by_score(
        catalog in catalog_strategy(),
        log in log_strategy(),
    ) {
        let result = RecommendationEngine::default().rank_trending(&catalog, &log, 12, NOW);

        prop_assert!(result.products.iter().all(|ranked| ranked.score.is_finite()));
        prop_assert!(result.products.windows(2).all(|w| w[0].score >= w[1].score));
    }
}
