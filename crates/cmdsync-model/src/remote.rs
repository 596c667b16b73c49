//! Commands as observed in a remote snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::CommandDefinition;

/// A command as currently registered with the remote service.
///
/// Owned by the remote store and read-only to the engine: a snapshot is
/// immutable for the duration of one reconciliation pass, and mutations
/// issued during the pass are not re-observed until the next fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteCommand {
    /// Remote-assigned identifier.
    pub id: String,
    pub definition: CommandDefinition,
    /// When the snapshot containing this command was taken.
    pub observed_at: DateTime<Utc>,
}

impl RemoteCommand {
    pub fn new(id: impl Into<String>, definition: CommandDefinition) -> Self {
        Self {
            id: id.into(),
            definition,
            observed_at: Utc::now(),
        }
    }

    /// Name of the underlying definition.
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}
