//! Outcome record of a reconciliation pass.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of a reconciliation pass in which a mutation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Create,
    Delete,
    Update,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Create => write!(f, "create"),
            Phase::Delete => write!(f, "delete"),
            Phase::Update => write!(f, "update"),
        }
    }
}

/// A single mutation that failed during a pass.
///
/// Item failures never abort the pass; they are collected here so callers
/// get more signal than a lower-than-expected count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub phase: Phase,
    /// Name of the command the mutation targeted.
    pub name: String,
    pub reason: String,
}

/// Report from one reconciliation pass.
///
/// Counts cover *successful* mutations only; failed items appear in
/// `failures` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationResult {
    /// Number of commands in the observed snapshot.
    pub observed: usize,
    pub created: usize,
    pub deleted: usize,
    pub updated: usize,
    pub failures: Vec<ItemFailure>,
}

impl ReconciliationResult {
    /// Whether every attempted mutation succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Whether the pass issued no mutations at all.
    pub fn is_noop(&self) -> bool {
        self.created == 0 && self.deleted == 0 && self.updated == 0 && self.failures.is_empty()
    }
}
