use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::interaction::{Interaction, InteractionKind};
use super::log::InteractionLog;
use crate::store::{load_json, persist_json, StoreError};
use crate::types::identifiers::ProductId;
use crate::types::time::Millis;

/// Caller-side owner of the interaction log with an explicit
/// load / append / persist lifecycle.
///
/// Single-writer: two stores on the same path will overwrite each other.
#[derive(Debug)]
pub struct InteractionStore {
    path: PathBuf,
    log: InteractionLog,
}

impl InteractionStore {
    /// Load the log from `path`, starting empty when nothing was persisted.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let log: InteractionLog = load_json(&path)?.unwrap_or_default();

        info!(path = %path.display(), interactions = log.len(), "opened interaction store");
        Ok(Self { path, log })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current snapshot, suitable for passing straight to the engines.
    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    /// Append one interaction and persist the whole log.
    ///
    /// The in-memory log keeps the interaction even if persisting fails.
    pub fn append(&mut self, interaction: Interaction) -> Result<(), StoreError> {
        debug!(
            product = interaction.product_id.as_str(),
            kind = ?interaction.kind,
            timestamp = interaction.timestamp,
            "recording interaction"
        );
        self.log.append(interaction);
        self.persist()
    }

    pub fn record(
        &mut self,
        product_id: impl Into<ProductId>,
        kind: InteractionKind,
        category: impl Into<String>,
        timestamp: Millis,
    ) -> Result<(), StoreError> {
        self.append(Interaction::new(product_id, kind, category, timestamp))
    }

    pub fn persist(&self) -> Result<(), StoreError> {
        persist_json(&self.path, &self.log)?;
        debug!(path = %self.path.display(), interactions = self.log.len(), "persisted interaction log");
        Ok(())
    }

    pub fn into_log(self) -> InteractionLog {
        self.log
    }
}
