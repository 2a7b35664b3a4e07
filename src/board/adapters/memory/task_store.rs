//! In-memory task store backed by a growable vector.

use crate::board::{
    domain::{
        ExpectedDuration, StageName, StartStamp, TaskDescription, TaskId, TaskRecord, UserName,
    },
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Vector-backed task store where task `n` lives at position `n - 1`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Vec<TaskRecord>,
}

impl InMemoryTaskStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Creates an empty store with room for `capacity` tasks.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: Vec::with_capacity(capacity),
        }
    }

    /// Returns all records in creation order.
    #[must_use]
    pub fn records(&self) -> &[TaskRecord] {
        &self.tasks
    }

    fn record_mut(&mut self, id: TaskId) -> TaskStoreResult<&mut TaskRecord> {
        id.position()
            .and_then(|position| self.tasks.get_mut(position))
            .ok_or(TaskStoreError::NotFound(id))
    }
}

impl TaskStore for InMemoryTaskStore {
    fn create(
        &mut self,
        description: TaskDescription,
        duration: ExpectedDuration,
        initial_stage: StageName,
    ) -> TaskId {
        let id = TaskId::from_position(self.tasks.len() as u64);
        self.tasks
            .push(TaskRecord::new(id, description, duration, initial_stage));
        id
    }

    fn get(&self, id: TaskId) -> TaskStoreResult<&TaskRecord> {
        id.position()
            .and_then(|position| self.tasks.get(position))
            .ok_or(TaskStoreError::NotFound(id))
    }

    fn set_stage_and_owner(
        &mut self,
        id: TaskId,
        stage: StageName,
        owner: UserName,
    ) -> TaskStoreResult<()> {
        self.record_mut(id)?.move_to(stage, owner);
        Ok(())
    }

    fn set_start(&mut self, id: TaskId, stamp: StartStamp) -> TaskStoreResult<()> {
        self.record_mut(id)?
            .stamp_start(stamp)
            .map_err(|existing| TaskStoreError::StartAlreadySet {
                id,
                started_at: existing.time,
            })
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
