//! Value types for the cmdsync reconciliation engine.
//!
//! This crate defines the data model shared by the engine and its callers:
//!
//! - [`CommandDefinition`] — the caller-declared target state for a command
//! - [`CommandOption`] — a typed leaf/group option tree
//! - [`RemoteCommand`] — a command as observed in a remote snapshot
//! - [`Scope`] — the registration domain (global or a single guild)
//! - [`ReconciliationResult`] — the outcome record of one pass
//!
//! The model is data only: no I/O, no comparison logic. Structural equality
//! and diffing live in `cmdsync-core`.

pub mod command;
pub mod remote;
pub mod result;
pub mod scope;

pub use command::{Choice, CommandDefinition, CommandKind, CommandOption, OptionKind};
pub use remote::RemoteCommand;
pub use result::{ItemFailure, Phase, ReconciliationResult};
pub use scope::Scope;
