//! Diffing desired against observed commands
//!
//! Partitions the two snapshots into the minimal create/delete/update sets
//! by name identity, then narrows update candidates with structural
//! equality. The plan borrows from both inputs; nothing is cloned and
//! nothing is mutated.

use std::collections::{HashMap, HashSet};

use cmdsync_model::{CommandDefinition, RemoteCommand};

use crate::equality::definitions_equal;

/// The minimal set of operations needed to converge a scope.
///
/// Output order follows input order: `to_create` and `to_update` follow the
/// desired list, `to_delete` follows the observed snapshot.
#[derive(Debug, Default)]
pub struct ReconcilePlan<'a> {
    /// Desired commands with no name match in the snapshot.
    pub to_create: Vec<&'a CommandDefinition>,
    /// Observed commands with no name match in the desired list.
    pub to_delete: Vec<&'a RemoteCommand>,
    /// Name-matched pairs whose definitions structurally differ.
    pub to_update: Vec<(&'a CommandDefinition, &'a RemoteCommand)>,
}

impl ReconcilePlan<'_> {
    /// Whether the scope is already converged.
    pub fn is_empty(&self) -> bool {
        self.to_create.is_empty() && self.to_delete.is_empty() && self.to_update.is_empty()
    }

    /// Total number of mutations the plan calls for.
    pub fn len(&self) -> usize {
        self.to_create.len() + self.to_delete.len() + self.to_update.len()
    }
}

/// Compute the operations needed to make `observed` match `desired`.
///
/// Name matching is first-match: if `desired` contains duplicate names,
/// only the first occurrence participates and later duplicates are skipped
/// silently (logged at debug). Observed snapshots are expected to hold
/// unique names per scope; if they do not, the first occurrence wins there
/// too.
pub fn reconcile<'a>(
    desired: &'a [CommandDefinition],
    observed: &'a [RemoteCommand],
) -> ReconcilePlan<'a> {
    let mut by_name: HashMap<&str, &RemoteCommand> = HashMap::with_capacity(observed.len());
    for remote in observed {
        by_name.entry(remote.name()).or_insert(remote);
    }

    let mut plan = ReconcilePlan::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(desired.len());

    for definition in desired {
        if !seen.insert(definition.name.as_str()) {
            tracing::debug!(name = %definition.name, "skipping duplicate desired command name");
            continue;
        }
        match by_name.get(definition.name.as_str()) {
            Some(remote) => {
                if !definitions_equal(&remote.definition, definition) {
                    plan.to_update.push((definition, remote));
                }
            }
            None => plan.to_create.push(definition),
        }
    }

    for remote in observed {
        if !seen.contains(remote.name()) {
            plan.to_delete.push(remote);
        }
    }

    plan
}
