//! Shared test utilities for the cmdsync workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`store`] — [`InMemoryStore`], a deterministic fake remote store with
//!   scriptable failures and a recorded call log
//! - [`fixtures`] — canned command definitions

pub mod fixtures;
pub mod store;

pub use store::{CallRecord, InMemoryStore, StoreOp};
