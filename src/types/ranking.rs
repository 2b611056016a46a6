use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::identifiers::ProductId;
use crate::types::time::Millis;

/// A ranked product returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedProduct {
    pub id: ProductId,
    pub score: f64,

    /// We own the product here because it's part of the final output payload
    pub product: Product,

    pub why: ScoreWhy,
}

/// Explanation for why a product received its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreWhy {
    Recommendation(RecommendationWhy),
    Trending(TrendingWhy),
}

/// Weighted components of a recommendation score.
///
/// `total = (content + category + rating) * penalty`, where `penalty` is the
/// seen-item multiplier when `seen` is true and `1.0` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationWhy {
    pub similarity: f64,
    pub content: f64,
    pub category: f64,
    pub rating: f64,
    pub seen: bool,
}

/// Weighted components of a trending score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingWhy {
    pub interaction: f64,
    pub rating: f64,
    pub recent_interactions: usize,
}

/// Metadata describing the outcome of a ranking pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMetadata {
    /// Focal product for recommendations, `None` for trending.
    pub focal: Option<ProductId>,
    pub limit: usize,
    pub now: Millis,

    pub candidates_considered: usize,
    /// Interactions that fed scoring; for trending only those inside the window.
    pub interactions_considered: usize,
    pub products_returned: usize,
}

/// The final result of a ranking operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    pub products: Vec<RankedProduct>,
    pub ranking: RankingMetadata,
}

impl RankingResult {
    /// Drop scores and explanations, keeping only the ordered products.
    pub fn into_products(self) -> Vec<Product> {
        self.products.into_iter().map(|ranked| ranked.product).collect()
    }
}

/// Internal: a candidate that has been scored but not yet ranked.
/// Holds a reference to the catalog entry to avoid cloning before truncation.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub product: &'a Product,
    pub score: f64,
    pub why: ScoreWhy,
}

impl ScoredCandidate<'_> {
    pub fn into_ranked(self) -> RankedProduct {
        RankedProduct {
            id: self.product.id.clone(),
            score: self.score,
            product: self.product.clone(),
            why: self.why,
        }
    }
}
