use std::collections::HashMap;

use crate::interactions::Interaction;
use crate::recommend::config::EngineConfig;
use crate::recommend::profile::linear_recency;
use crate::types::identifiers::ProductId;
use crate::types::time::Millis;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrendEntry {
    pub score: f64,
    pub interactions: usize,
}

/// Per-product activity inside the recency window.
///
/// Only interactions strictly newer than `now - window` count. Their weight
/// is the unfloored linear recency, so activity fades to nothing at the
/// window edge.
#[derive(Debug, Clone, Default)]
pub struct TrendScores<'a> {
    entries: HashMap<&'a ProductId, TrendEntry>,
    recent: usize,
}

impl<'a> TrendScores<'a> {
    pub fn from_log(log: &'a [Interaction], now: Millis, config: &EngineConfig) -> Self {
        let cutoff = now.saturating_sub(config.recency_window_ms);

        let mut entries: HashMap<&ProductId, TrendEntry> = HashMap::new();
        let mut recent = 0;
        for interaction in log.iter().filter(|i| i.timestamp > cutoff) {
            let weight = linear_recency(interaction.timestamp, now, config.recency_window_ms)
                * config.type_weights.weight(interaction.kind);
            let entry = entries.entry(&interaction.product_id).or_default();
            entry.score += weight;
            entry.interactions += 1;
            recent += 1;
        }

        Self { entries, recent }
    }

    /// Activity for a product, zero when it had none in the window.
    pub fn get(&self, id: &ProductId) -> TrendEntry {
        self.entries.get(id).copied().unwrap_or_default()
    }

    /// Interactions that fell inside the window.
    pub fn recent_interactions(&self) -> usize {
        self.recent
    }
}
