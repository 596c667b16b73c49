//! Remote store collaborator trait.

use async_trait::async_trait;
use cmdsync_model::{CommandDefinition, RemoteCommand, Scope};

use crate::error::StoreError;

/// The remote registration store the engine reconciles against.
///
/// Implementations own all network I/O; the engine only sequences calls.
/// All methods are awaited one at a time in program order — an
/// implementation never sees concurrent calls from a single pass.
#[async_trait]
pub trait CommandStore: Send + Sync {
    /// Resolve once the underlying client is ready to serve requests.
    /// Idempotent: resolving immediately when already ready is fine.
    async fn await_ready(&self) -> Result<(), StoreError>;

    /// Take a snapshot of the commands currently registered in `scope`.
    async fn fetch(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, StoreError>;

    /// Register a new command in `scope`.
    async fn create(
        &self,
        definition: &CommandDefinition,
        scope: &Scope,
    ) -> Result<RemoteCommand, StoreError>;

    /// Unregister a previously observed command.
    async fn delete(&self, command: &RemoteCommand) -> Result<(), StoreError>;

    /// Replace an observed command's definition, keeping its identity.
    async fn edit(
        &self,
        command: &RemoteCommand,
        definition: &CommandDefinition,
    ) -> Result<RemoteCommand, StoreError>;
}

// Shared references delegate, so a synchronizer can borrow a store that
// outlives the pass.
#[async_trait]
impl<S: CommandStore + ?Sized> CommandStore for &S {
    async fn await_ready(&self) -> Result<(), StoreError> {
        (**self).await_ready().await
    }

    async fn fetch(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, StoreError> {
        (**self).fetch(scope).await
    }

    async fn create(
        &self,
        definition: &CommandDefinition,
        scope: &Scope,
    ) -> Result<RemoteCommand, StoreError> {
        (**self).create(definition, scope).await
    }

    async fn delete(&self, command: &RemoteCommand) -> Result<(), StoreError> {
        (**self).delete(command).await
    }

    async fn edit(
        &self,
        command: &RemoteCommand,
        definition: &CommandDefinition,
    ) -> Result<RemoteCommand, StoreError> {
        (**self).edit(command, definition).await
    }
}
