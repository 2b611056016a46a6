use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::interaction::Interaction;
use crate::types::identifiers::ProductId;

/// Append-only, storage-ordered sequence of interactions.
///
/// Serializes as a bare JSON array, the same shape callers keep in their
/// key-value storage.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InteractionLog {
    entries: Vec<Interaction>,
}

impl InteractionLog {
    pub fn new() -> Self {
        InteractionLog {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, interaction: Interaction) {
        self.entries.push(interaction);
    }

    pub fn as_slice(&self) -> &[Interaction] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every product id the log mentions, including ones not in any catalog.
    pub fn product_ids(&self) -> HashSet<&ProductId> {
        interacted_ids(&self.entries)
    }
}

impl From<Vec<Interaction>> for InteractionLog {
    fn from(entries: Vec<Interaction>) -> Self {
        InteractionLog { entries }
    }
}

impl AsRef<[Interaction]> for InteractionLog {
    fn as_ref(&self) -> &[Interaction] {
        &self.entries
    }
}

pub(crate) fn interacted_ids(log: &[Interaction]) -> HashSet<&ProductId> {
    log.iter().map(|interaction| &interaction.product_id).collect()
}
