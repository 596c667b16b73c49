//! Deterministic in-memory fake of the remote command store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use cmdsync_core::{CommandStore, StoreError};
use cmdsync_model::{CommandDefinition, RemoteCommand, Scope};

/// Which store operation a call or scripted failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    Ready,
    Fetch,
    Create,
    Delete,
    Edit,
}

/// One recorded call against the fake store, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub op: StoreOp,
    /// Command name the call targeted, where applicable.
    pub name: Option<String>,
}

#[derive(Default)]
struct State {
    commands: HashMap<Scope, Vec<RemoteCommand>>,
    next_id: u64,
    calls: Vec<CallRecord>,
    failures: HashMap<(StoreOp, String), StoreError>,
    fetch_error: Option<StoreError>,
}

/// In-memory [`CommandStore`] for tests.
///
/// Fully deterministic: ids are assigned sequentially, calls are recorded
/// in order, and failures only happen when scripted. Mutations issued
/// during a pass are visible to the *next* fetch, matching the
/// snapshot-per-pass contract.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command directly, bypassing the call log. Returns the
    /// stored remote command.
    pub fn seed(&self, scope: &Scope, definition: CommandDefinition) -> RemoteCommand {
        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let remote = RemoteCommand::new(format!("remote-{}", state.next_id), definition);
        state
            .commands
            .entry(scope.clone())
            .or_default()
            .push(remote.clone());
        remote
    }

    /// Script every fetch to fail with `error`.
    pub fn fail_fetch(&self, error: StoreError) {
        self.state.lock().unwrap().fetch_error = Some(error);
    }

    /// Script the next `op` targeting command `name` to fail once.
    pub fn fail_on(&self, op: StoreOp, name: impl Into<String>, error: StoreError) {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert((op, name.into()), error);
    }

    /// Commands currently registered in `scope`.
    pub fn commands(&self, scope: &Scope) -> Vec<RemoteCommand> {
        self.state
            .lock()
            .unwrap()
            .commands
            .get(scope)
            .cloned()
            .unwrap_or_default()
    }

    /// Names currently registered in `scope`, in registration order.
    pub fn names(&self, scope: &Scope) -> Vec<String> {
        self.commands(scope)
            .iter()
            .map(|remote| remote.name().to_string())
            .collect()
    }

    /// Every call made against the store, in order.
    pub fn calls(&self) -> Vec<CallRecord> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Number of `await_ready` calls seen.
    pub fn ready_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|record| record.op == StoreOp::Ready)
            .count()
    }

    fn record(&self, op: StoreOp, name: Option<&str>) {
        self.state.lock().unwrap().calls.push(CallRecord {
            op,
            name: name.map(str::to_string),
        });
    }

    fn scripted_failure(&self, op: StoreOp, name: &str) -> Option<StoreError> {
        self.state
            .lock()
            .unwrap()
            .failures
            .remove(&(op, name.to_string()))
    }
}

#[async_trait]
impl CommandStore for InMemoryStore {
    async fn await_ready(&self) -> Result<(), StoreError> {
        self.record(StoreOp::Ready, None);
        Ok(())
    }

    async fn fetch(&self, scope: &Scope) -> Result<Vec<RemoteCommand>, StoreError> {
        self.record(StoreOp::Fetch, None);
        let state = self.state.lock().unwrap();
        if let Some(err) = &state.fetch_error {
            return Err(err.clone());
        }
        Ok(state.commands.get(scope).cloned().unwrap_or_default())
    }

    async fn create(
        &self,
        definition: &CommandDefinition,
        scope: &Scope,
    ) -> Result<RemoteCommand, StoreError> {
        self.record(StoreOp::Create, Some(&definition.name));
        if let Some(err) = self.scripted_failure(StoreOp::Create, &definition.name) {
            return Err(err);
        }
        Ok(self.seed(scope, definition.clone()))
    }

    async fn delete(&self, command: &RemoteCommand) -> Result<(), StoreError> {
        self.record(StoreOp::Delete, Some(command.name()));
        if let Some(err) = self.scripted_failure(StoreOp::Delete, command.name()) {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        for commands in state.commands.values_mut() {
            if let Some(index) = commands.iter().position(|c| c.id == command.id) {
                commands.remove(index);
                return Ok(());
            }
        }
        Err(StoreError::unavailable(format!(
            "unknown command id: {}",
            command.id
        )))
    }

    async fn edit(
        &self,
        command: &RemoteCommand,
        definition: &CommandDefinition,
    ) -> Result<RemoteCommand, StoreError> {
        self.record(StoreOp::Edit, Some(command.name()));
        if let Some(err) = self.scripted_failure(StoreOp::Edit, command.name()) {
            return Err(err);
        }
        let mut state = self.state.lock().unwrap();
        for commands in state.commands.values_mut() {
            if let Some(stored) = commands.iter_mut().find(|c| c.id == command.id) {
                stored.definition = definition.clone();
                return Ok(stored.clone());
            }
        }
        Err(StoreError::unavailable(format!(
            "unknown command id: {}",
            command.id
        )))
    }
}
