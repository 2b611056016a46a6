use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interactions::InteractionKind;
use crate::types::time::{Millis, WEEK_MS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // Similarity
    pub category_match_weight: f64,
    pub price_weight: f64,
    pub rating_similarity_weight: f64,

    // Recommendation blend
    pub content_weight: f64,
    pub category_preference_weight: f64,
    pub rating_boost_weight: f64,
    pub seen_penalty: f64,

    // Trending
    pub trending_rating_weight: f64,

    // Recency
    pub recency_window_ms: Millis,
    pub recency_floor: f64,

    pub type_weights: TypeWeights,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            category_match_weight: 0.5,
            price_weight: 0.3,
            rating_similarity_weight: 0.2,
            content_weight: 0.6,
            category_preference_weight: 0.3,
            rating_boost_weight: 0.1,
            seen_penalty: 0.5,
            trending_rating_weight: 0.1,
            recency_window_ms: WEEK_MS,
            recency_floor: 0.1,
            type_weights: TypeWeights::v0(),
        }
    }

    /// Parse overrides from JSON. Absent fields keep their v0 values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let weights = [
            ("category_match_weight", self.category_match_weight),
            ("price_weight", self.price_weight),
            ("rating_similarity_weight", self.rating_similarity_weight),
            ("content_weight", self.content_weight),
            ("category_preference_weight", self.category_preference_weight),
            ("rating_boost_weight", self.rating_boost_weight),
            ("seen_penalty", self.seen_penalty),
            ("trending_rating_weight", self.trending_rating_weight),
            ("recency_floor", self.recency_floor),
            ("type_weights.view", self.type_weights.view),
            ("type_weights.cart", self.type_weights.cart),
            ("type_weights.purchase", self.type_weights.purchase),
        ];
        for (field, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }

        if self.recency_window_ms <= 0 {
            return Err(ConfigError::Invalid {
                field: "recency_window_ms",
                reason: format!("must be positive, got {}", self.recency_window_ms),
            });
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Intent multiplier per interaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeWeights {
    pub view: f64,
    pub cart: f64,
    pub purchase: f64,
}

impl TypeWeights {
    pub fn v0() -> Self {
        Self {
            view: InteractionKind::View.type_weight(),
            cart: InteractionKind::Cart.type_weight(),
            purchase: InteractionKind::Purchase.type_weight(),
        }
    }

    pub fn weight(&self, kind: InteractionKind) -> f64 {
        match kind {
            InteractionKind::View => self.view,
            InteractionKind::Cart => self.cart,
            InteractionKind::Purchase => self.purchase,
        }
    }
}

impl Default for TypeWeights {
    fn default() -> Self {
        Self::v0()
    }
}
