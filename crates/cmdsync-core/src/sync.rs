//! Synchronizer: one reconciliation pass
//!
//! Orchestrates snapshot → diff → apply → report over an injected
//! [`CommandStore`]. The pass is stateless: nothing persists between
//! invocations, and concurrent passes against the same scope are the
//! caller's problem to serialize.

use cmdsync_model::{
    CommandDefinition, CommandKind, CommandOption, ItemFailure, Phase, ReconciliationResult, Scope,
};

use crate::diff::reconcile;
use crate::error::{Error, Result, StoreError};
use crate::store::CommandStore;

/// Options for a reconciliation pass.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    /// Registration domain to reconcile.
    pub scope: Scope,
    /// If true, per-item mutation failures and skips are logged at debug.
    pub debug: bool,
}

/// Runs reconciliation passes against one remote store.
///
/// Applies mutations strictly sequentially in create → delete → update
/// order, each phase working from the initial snapshot. Sequencing is a
/// correctness choice: it keeps a delete and a create of the same name from
/// racing, and it stays gentle on a rate-limited remote API.
pub struct Synchronizer<S> {
    store: S,
    options: SyncOptions,
}

impl<S: CommandStore> Synchronizer<S> {
    /// Create a synchronizer with default options (global scope).
    pub fn new(store: S) -> Self {
        Self::with_options(store, SyncOptions::default())
    }

    pub fn with_options(store: S, options: SyncOptions) -> Self {
        Self { store, options }
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Run one pass converging the store toward `desired`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if the desired list is malformed;
    ///   raised before any I/O
    /// - [`Error::AuthorizationMissing`] / [`Error::Remote`] if the
    ///   snapshot fetch fails; no mutation is attempted
    ///
    /// Individual mutation failures do not fail the pass: they are
    /// collected into [`ReconciliationResult::failures`] and the remaining
    /// items and phases continue.
    pub async fn synchronize(&self, desired: &[CommandDefinition]) -> Result<ReconciliationResult> {
        validate(desired)?;

        self.store.await_ready().await.map_err(Error::from)?;

        let observed = match self.store.fetch(&self.options.scope).await {
            Ok(snapshot) => snapshot,
            Err(StoreError::MissingAccess { detail }) => {
                return Err(Error::AuthorizationMissing { detail });
            }
            Err(err) => return Err(Error::Remote(err)),
        };

        let plan = reconcile(desired, &observed);
        tracing::debug!(
            scope = %self.options.scope,
            observed = observed.len(),
            creates = plan.to_create.len(),
            deletes = plan.to_delete.len(),
            updates = plan.to_update.len(),
            "computed reconciliation plan"
        );

        let mut result = ReconciliationResult {
            observed: observed.len(),
            ..Default::default()
        };

        for definition in &plan.to_create {
            match self.store.create(definition, &self.options.scope).await {
                Ok(_) => result.created += 1,
                Err(err) => self.record_failure(&mut result, Phase::Create, &definition.name, err),
            }
        }

        for remote in &plan.to_delete {
            match self.store.delete(remote).await {
                Ok(()) => result.deleted += 1,
                Err(err) => self.record_failure(&mut result, Phase::Delete, remote.name(), err),
            }
        }

        for (definition, remote) in &plan.to_update {
            match self.store.edit(remote, definition).await {
                Ok(_) => result.updated += 1,
                Err(err) => self.record_failure(&mut result, Phase::Update, remote.name(), err),
            }
        }

        Ok(result)
    }

    fn record_failure(
        &self,
        result: &mut ReconciliationResult,
        phase: Phase,
        name: &str,
        err: StoreError,
    ) {
        if self.options.debug {
            tracing::debug!(%phase, name, error = %err, "command mutation failed");
        }
        result.failures.push(ItemFailure {
            phase,
            name: name.to_string(),
            reason: err.to_string(),
        });
    }
}

/// Check the shape of the desired list before any I/O happens.
///
/// The type system already guarantees most of the shape; this covers what
/// it cannot: empty names and a missing description on a chat-input
/// command.
fn validate(desired: &[CommandDefinition]) -> Result<()> {
    for definition in desired {
        if definition.name.trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: "command name must not be empty".into(),
            });
        }
        if definition.kind == CommandKind::ChatInput
            && definition.description.trim().is_empty()
        {
            return Err(Error::InvalidArgument {
                message: format!("command '{}' must have a description", definition.name),
            });
        }
        validate_options(&definition.options, &definition.name)?;
    }
    Ok(())
}

fn validate_options(options: &[CommandOption], command: &str) -> Result<()> {
    for option in options {
        if option.name().trim().is_empty() {
            return Err(Error::InvalidArgument {
                message: format!("command '{command}' has an option with an empty name"),
            });
        }
        if let CommandOption::Group { options, .. } = option {
            validate_options(options, command)?;
        }
    }
    Ok(())
}
