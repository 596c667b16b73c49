//! Registration scope for application commands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The domain within which command names are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Commands registered application-wide.
    #[default]
    Global,
    /// Commands registered to a single guild, identified by its snowflake.
    Guild(String),
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Global => write!(f, "global"),
            Scope::Guild(id) => write!(f, "guild {id}"),
        }
    }
}
