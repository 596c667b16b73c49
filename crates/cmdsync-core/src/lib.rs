//! Reconciliation engine for application command registration
//!
//! Converges the set of commands registered with a remote service toward a
//! caller-declared desired set, issuing only the minimal create, delete,
//! and edit operations. The engine performs no network I/O of its own:
//! callers inject a [`CommandStore`] implementation and the engine
//! sequences calls against it.
//!
//! # Architecture
//!
//! ```text
//!        caller (desired definitions)
//!                   |
//!             Synchronizer ---- validate, await ready, fetch snapshot
//!                   |
//!               reconcile ----- name-partition + structural equality
//!                   |
//!             CommandStore ---- create / delete / edit, one at a time
//!                   |
//!          ReconciliationResult
//! ```
//!
//! Each pass is stateless and snapshot-based: every phase works from the
//! snapshot taken at pass start, never from intermediate results.

pub mod diff;
pub mod equality;
pub mod error;
pub mod store;
pub mod sync;

pub use diff::{ReconcilePlan, reconcile};
pub use equality::definitions_equal;
pub use error::{Error, Result, StoreError};
pub use store::CommandStore;
pub use sync::{SyncOptions, Synchronizer};
