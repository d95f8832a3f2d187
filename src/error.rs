//! Error types for the stack engine and its settings

use thiserror::Error;

/// Errors surfaced by the engine and settings loader.
///
/// Gameplay outcomes (a missed cut, a duplicate commit) are never errors;
/// they are reported through [`crate::sim::CommitOutcome`].
#[derive(Error, Debug)]
pub enum StackError {
    /// Commit was attempted without a resting platform beneath the active one.
    #[error("commit requires a resting and an active platform, found {found} platform(s)")]
    MissingPlatforms { found: usize },

    /// Settings failed validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Settings JSON could not be parsed.
    #[error("settings parse error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Settings file could not be read.
    #[error("settings io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StackResult<T> = Result<T, StackError>;
