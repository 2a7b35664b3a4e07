//! Store port for the authoritative, append-only task collection.

use crate::board::domain::{
    BoardTime, ExpectedDuration, StageName, StartStamp, TaskDescription, TaskId, TaskRecord,
    UserName,
};
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task storage contract.
///
/// Identifiers are assigned by the store: the `n`-th created task receives
/// id `n`. Records are never removed or reordered.
pub trait TaskStore {
    /// Appends a task in `initial_stage` and returns its identifier.
    fn create(
        &mut self,
        description: TaskDescription,
        duration: ExpectedDuration,
        initial_stage: StageName,
    ) -> TaskId;

    /// Returns the record for `id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that id.
    fn get(&self, id: TaskId) -> TaskStoreResult<&TaskRecord>;

    /// Moves the task to `stage` under `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that id.
    fn set_stage_and_owner(
        &mut self,
        id: TaskId,
        stage: StageName,
        owner: UserName,
    ) -> TaskStoreResult<()>;

    /// Stamps the task's start time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::NotFound`] when no task has that id, or
    /// [`TaskStoreError::StartAlreadySet`] when the task already started.
    fn set_start(&mut self, id: TaskId, stamp: StartStamp) -> TaskStoreResult<()>;

    /// Returns the number of stored tasks.
    fn len(&self) -> usize;

    /// Returns `true` when no task has been created.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskStoreError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task already has a start time.
    #[error("task {id} already started at {started_at}")]
    StartAlreadySet {
        /// Task whose start was stamped twice.
        id: TaskId,
        /// Start time recorded by the first stamp.
        started_at: BoardTime,
    },
}
