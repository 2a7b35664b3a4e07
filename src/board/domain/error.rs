//! Error types for board domain value construction.

use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// Task identifiers are 1-based.
    #[error("invalid task id {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// Expected durations must be positive.
    #[error("invalid duration {0}, expected a positive integer")]
    InvalidDuration(u64),

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The stage name is empty after trimming.
    #[error("stage name must not be empty")]
    EmptyStageName,

    /// The user name is empty after trimming.
    #[error("user name must not be empty")]
    EmptyUserName,
}
