use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::interactions::Interaction;
use crate::recommend::config::EngineConfig;
use crate::types::time::Millis;

/// Linear decay across the recency window: `1` at `now`, `0` at the window edge.
///
/// Older interactions go negative and future-dated ones exceed `1`; callers
/// decide whether to floor or filter.
pub fn linear_recency(timestamp: Millis, now: Millis, window_ms: Millis) -> f64 {
    let age = now.saturating_sub(timestamp) as f64;
    1.0 - age / window_ms as f64
}

/// Recency weight floored at `config.recency_floor`, so stale interactions
/// keep a small share of influence instead of vanishing.
pub fn recency_weight(timestamp: Millis, now: Millis, config: &EngineConfig) -> f64 {
    linear_recency(timestamp, now, config.recency_window_ms).max(config.recency_floor)
}

/// Per-category affinity accumulated from an interaction log.
///
/// Rebuilt from scratch on every request; never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceProfile {
    scores: BTreeMap<String, f64>,
}

impl PreferenceProfile {
    /// Sum `recency × type weight` per category over every interaction.
    ///
    /// Products need not exist in any catalog: the recorded category is used as is.
    pub fn from_log(log: &[Interaction], now: Millis, config: &EngineConfig) -> Self {
        let mut scores = BTreeMap::new();
        for interaction in log {
            let weight = recency_weight(interaction.timestamp, now, config)
                * config.type_weights.weight(interaction.kind);
            *scores.entry(interaction.category.clone()).or_insert(0.0) += weight;
        }
        Self { scores }
    }

    /// Accumulated score for a category, `0.0` when never seen.
    pub fn get(&self, category: &str) -> f64 {
        self.scores.get(category).copied().unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
