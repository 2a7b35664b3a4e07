//! Identifier and validated scalar types for the board domain.

use super::BoardDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable 1-based identifier of a task on the board.
///
/// Identifiers are assigned in creation order and never reused.
///
/// # Examples
///
/// ```
/// use kanban_core::board::domain::TaskId;
///
/// let id = TaskId::new(3).expect("non-zero id");
/// assert_eq!(id.value(), 3);
/// assert_eq!(id.position(), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidTaskId`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Returns the identifier assigned to the task stored at `position`.
    #[must_use]
    pub const fn from_position(position: u64) -> Self {
        Self(position.saturating_add(1))
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the zero-based storage position, if addressable on this
    /// platform.
    #[must_use]
    pub fn position(self) -> Option<usize> {
        self.0
            .checked_sub(1)
            .and_then(|position| usize::try_from(position).ok())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical board time.
///
/// The board clock starts at zero and only moves forward.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BoardTime(u64);

impl BoardTime {
    /// The time at which every board starts.
    pub const ZERO: Self = Self(0);

    /// Creates a board time from a raw tick count.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw tick count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns this time moved forward by `delta` ticks.
    ///
    /// Saturates at `u64::MAX`.
    #[must_use]
    pub const fn advanced_by(self, delta: u64) -> Self {
        Self(self.0.saturating_add(delta))
    }

    /// Returns the ticks elapsed since `earlier`, or zero if `earlier` is
    /// in the future.
    #[must_use]
    pub const fn since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for BoardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Positive expected duration of a task, in board ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpectedDuration(u64);

impl ExpectedDuration {
    /// Creates a validated expected duration.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::InvalidDuration`] when the value is zero.
    pub const fn new(value: u64) -> Result<Self, BoardDomainError> {
        if value == 0 {
            return Err(BoardDomainError::InvalidDuration(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying tick count.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ExpectedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Order in which tasks were first activated.
///
/// Ties on start time are broken by this number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationSeq(u64);

impl ActivationSeq {
    /// The sequence number assigned to the first activated task.
    pub const FIRST: Self = Self(0);

    /// Returns the underlying sequence value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the next sequence number.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ActivationSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
