use crate::catalog::{Product, MAX_RATING};
use crate::recommend::config::EngineConfig;

pub trait Similarity {
    /// Content similarity between two products, higher is more similar.
    fn similarity(&self, a: &Product, b: &Product) -> f64;
}

/// v0: weighted sum of category match, price proximity and rating proximity.
///
/// With the default weights a product compared to itself scores exactly `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeSimilarity {
    pub category_match_weight: f64,
    pub price_weight: f64,
    pub rating_weight: f64,
}

impl AttributeSimilarity {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            category_match_weight: config.category_match_weight,
            price_weight: config.price_weight,
            rating_weight: config.rating_similarity_weight,
        }
    }
}

impl Default for AttributeSimilarity {
    fn default() -> Self {
        Self::from_config(&EngineConfig::v0())
    }
}

impl Similarity for AttributeSimilarity {
    fn similarity(&self, a: &Product, b: &Product) -> f64 {
        // Exact, case-sensitive label comparison
        let category = if a.category == b.category {
            self.category_match_weight
        } else {
            0.0
        };
        let price = finite_or_zero(price_proximity(a.price, b.price) * self.price_weight);
        let rating = finite_or_zero(rating_proximity(a.rating, b.rating) * self.rating_weight);

        category + price + rating
    }
}

/// Similarity under the default weights.
pub fn similarity(a: &Product, b: &Product) -> f64 {
    AttributeSimilarity::default().similarity(a, b)
}

/// `1 - |a - b| / max(a, b)`, with two free products counting as identical.
fn price_proximity(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 1.0;
    }
    1.0 - (a - b).abs() / a.max(b)
}

fn rating_proximity(a: f64, b: f64) -> f64 {
    1.0 - (a - b).abs() / MAX_RATING
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
