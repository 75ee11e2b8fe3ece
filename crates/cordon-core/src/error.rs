//! Error types for cordon-core
//!
//! The taxonomy follows the recoverability contract of the selection core:
//! geometry misuse (cross-world points) is an input error and is never
//! silently coerced; session lifecycle misuse (double enable, disable
//! without enable) is recoverable and surfaced as a user-facing notice;
//! an incomplete commit is expected during normal use and only prompts the
//! user to finish selecting. Nothing here is fatal to the host process.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using the library's error type
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Geometry errors: programmer/input misuse, never coerced away.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Two points from different worlds were combined.
    #[error("points are in different worlds: {first} vs {second}")]
    CrossWorld { first: String, second: String },
}

/// Session lifecycle errors: recoverable, reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A selection session already exists for this identity.
    #[error("selection already enabled for {0}")]
    AlreadyActive(Uuid),

    /// No selection session exists for this identity.
    #[error("selection is not enabled for {0}")]
    NotActive(Uuid),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseFailed(String),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Main error type for cordon-core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Geometry errors
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// Session lifecycle errors
    #[error("session error: {0}")]
    Session(#[from] SessionError),

    /// Commit attempted before both corners were set.
    #[error("both corners must be set before committing")]
    IncompleteSelection,
}

impl SelectionError {
    /// Whether the error is part of normal interactive use and should be
    /// reported as a notice rather than propagated to the host.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Session(_) | Self::IncompleteSelection)
    }
}
