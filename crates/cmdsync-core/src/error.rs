//! Error types for cmdsync-core

/// Result type for cmdsync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by a reconciliation pass.
///
/// Per-item mutation failures are not errors at this level — they are
/// collected into the pass result. Only argument validation and the
/// snapshot fetch can fail a whole pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied command list does not satisfy the expected shape.
    /// Raised before any I/O; no partial effects.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The remote store rejected the snapshot fetch because the token was
    /// not granted the scope required to manage application commands.
    #[error("Missing authorization to manage commands: {detail}")]
    AuthorizationMissing { detail: String },

    /// Any other snapshot-fetch failure, propagated unmodified.
    #[error(transparent)]
    Remote(#[from] StoreError),
}

/// Errors thrown by a [`CommandStore`](crate::store::CommandStore)
/// implementation.
///
/// The engine classifies these; it never constructs them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The recognized "missing required authorization scope" signal.
    #[error("missing access: {detail}")]
    MissingAccess { detail: String },

    /// Any other remote failure (network, rate limit, server error).
    #[error("{message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn missing_access(detail: impl Into<String>) -> Self {
        Self::MissingAccess {
            detail: detail.into(),
        }
    }
}
