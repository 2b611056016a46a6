pub mod config;
pub mod profile;
pub mod ranking;
pub mod similarity;
pub mod trending;

use tracing::debug;

use crate::catalog::{Product, MAX_RATING};
use crate::interactions::log::interacted_ids;
use crate::interactions::Interaction;
use crate::types::ranking::{
    RankingMetadata, RankingResult, RecommendationWhy, ScoreWhy, ScoredCandidate, TrendingWhy,
};
use crate::types::time::Millis;
pub use config::{ConfigError, EngineConfig, TypeWeights};
pub use profile::{linear_recency, recency_weight, PreferenceProfile};
pub use ranking::rank_candidates;
pub use similarity::{similarity, AttributeSimilarity, Similarity};
pub use trending::{TrendEntry, TrendScores};

use similarity::finite_or_zero;

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 4;
pub const DEFAULT_TRENDING_LIMIT: usize = 6;

/// Stateless ranking service. Every call recomputes from its arguments; nothing
/// is cached between calls, so a log that grew since the last call is always
/// fully reflected.
#[derive(Debug, Clone)]
pub struct RecommendationEngine<S = AttributeSimilarity> {
    config: EngineConfig,
    similarity: S,
}

impl Default for RecommendationEngine<AttributeSimilarity> {
    fn default() -> Self {
        let config = EngineConfig::v0();
        let similarity = AttributeSimilarity::from_config(&config);
        Self { config, similarity }
    }
}

impl RecommendationEngine<AttributeSimilarity> {
    /// Engine whose similarity weights also come from `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let similarity = AttributeSimilarity::from_config(&config);
        Self::new(config, similarity)
    }
}

impl<S> RecommendationEngine<S>
where
    S: Similarity,
{
    /// Rejects configs that fail [`EngineConfig::validate`].
    pub fn new(config: EngineConfig, similarity: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, similarity })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Products to show next to `focal`, best first.
    pub fn recommend(
        &self,
        catalog: &[Product],
        focal: &Product,
        log: &[Interaction],
        limit: usize,
        now: Millis,
    ) -> Vec<Product> {
        self.rank_recommendations(catalog, focal, log, limit, now)
            .into_products()
    }

    /// Catalog-wide ranking by recent activity, best first.
    pub fn trending(
        &self,
        catalog: &[Product],
        log: &[Interaction],
        limit: usize,
        now: Millis,
    ) -> Vec<Product> {
        self.rank_trending(catalog, log, limit, now).into_products()
    }

    /// [`recommend`](Self::recommend) with scores and their breakdown.
    ///
    /// The focal product is excluded by id only; if it is absent from
    /// `catalog` nothing is excluded.
    pub fn rank_recommendations(
        &self,
        catalog: &[Product],
        focal: &Product,
        log: &[Interaction],
        limit: usize,
        now: Millis,
    ) -> RankingResult {
        let config = &self.config;

        // 1. Profile Phase
        let profile = PreferenceProfile::from_log(log, now, config);
        let seen = interacted_ids(log);

        // 2. Scoring Phase
        let scored: Vec<ScoredCandidate> = catalog
            .iter()
            .filter(|candidate| candidate.id != focal.id)
            .map(|candidate| {
                let similarity = finite_or_zero(self.similarity.similarity(focal, candidate));
                let content = similarity * config.content_weight;
                let category = profile.get(&candidate.category) * config.category_preference_weight;
                let rating = (candidate.rating / MAX_RATING) * config.rating_boost_weight;

                let is_seen = seen.contains(&candidate.id);
                let mut total = content + category + rating;
                if is_seen {
                    // Penalized, never dropped
                    total *= config.seen_penalty;
                }

                ScoredCandidate {
                    product: candidate,
                    score: finite_or_zero(total),
                    why: ScoreWhy::Recommendation(RecommendationWhy {
                        similarity,
                        content,
                        category,
                        rating,
                        seen: is_seen,
                    }),
                }
            })
            .collect();
        let candidates_considered = scored.len();

        // 3. Ranking Phase
        let products = rank_candidates(scored, limit);

        debug!(
            focal = focal.id.as_str(),
            candidates = candidates_considered,
            interactions = log.len(),
            categories = profile.len(),
            returned = products.len(),
            "ranked recommendations"
        );

        let ranking = RankingMetadata {
            focal: Some(focal.id.clone()),
            limit,
            now,
            candidates_considered,
            interactions_considered: log.len(),
            products_returned: products.len(),
        };

        RankingResult { products, ranking }
    }

    /// [`trending`](Self::trending) with scores and their breakdown.
    ///
    /// A product with no recent activity still scores `rating × weight`, so
    /// the result is never empty for a non-empty catalog.
    pub fn rank_trending(
        &self,
        catalog: &[Product],
        log: &[Interaction],
        limit: usize,
        now: Millis,
    ) -> RankingResult {
        let config = &self.config;

        // 1. Activity Phase
        let trends = TrendScores::from_log(log, now, config);

        // 2. Scoring Phase
        let scored: Vec<ScoredCandidate> = catalog
            .iter()
            .map(|product| {
                let entry = trends.get(&product.id);
                let rating = product.rating * config.trending_rating_weight;

                ScoredCandidate {
                    product,
                    score: finite_or_zero(entry.score + rating),
                    why: ScoreWhy::Trending(TrendingWhy {
                        interaction: entry.score,
                        rating,
                        recent_interactions: entry.interactions,
                    }),
                }
            })
            .collect();
        let candidates_considered = scored.len();

        // 3. Ranking Phase
        let products = rank_candidates(scored, limit);

        debug!(
            candidates = candidates_considered,
            interactions = log.len(),
            recent = trends.recent_interactions(),
            returned = products.len(),
            "ranked trending products"
        );

        let ranking = RankingMetadata {
            focal: None,
            limit,
            now,
            candidates_considered,
            interactions_considered: trends.recent_interactions(),
            products_returned: products.len(),
        };

        RankingResult { products, ranking }
    }
}

/// Recommendations for `focal` under the default configuration.
pub fn recommend(
    catalog: &[Product],
    focal: &Product,
    log: &[Interaction],
    limit: usize,
    now: Millis,
) -> Vec<Product> {
    RecommendationEngine::default().recommend(catalog, focal, log, limit, now)
}

/// Trending products under the default configuration.
pub fn trending(catalog: &[Product], log: &[Interaction], limit: usize, now: Millis) -> Vec<Product> {
    RecommendationEngine::default().trending(catalog, log, limit, now)
}
