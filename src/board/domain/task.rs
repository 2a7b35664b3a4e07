//! Task record and its start-time ordering key.

use super::{
    ActivationSeq, BoardTime, ExpectedDuration, StageName, TaskDescription, TaskId, UserName,
};
use serde::{Deserialize, Serialize};

/// Moment a task first left the initial stage.
///
/// Ordering is by start time, then by activation order, so tasks started
/// during the same board instant keep the order in which they were moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StartStamp {
    /// Board time at activation.
    pub time: BoardTime,
    /// Position of the activation among all activations on the board.
    pub seq: ActivationSeq,
}

impl StartStamp {
    /// Creates a start stamp.
    #[must_use]
    pub const fn new(time: BoardTime, seq: ActivationSeq) -> Self {
        Self { time, seq }
    }
}

/// A task tracked by the board.
///
/// Records are only built by the store, so they serialize but never
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    id: TaskId,
    description: TaskDescription,
    duration: ExpectedDuration,
    stage: StageName,
    owner: Option<UserName>,
    start: Option<StartStamp>,
}

impl TaskRecord {
    /// Creates a task in `initial_stage` with no owner and no start time.
    #[must_use]
    pub const fn new(
        id: TaskId,
        description: TaskDescription,
        duration: ExpectedDuration,
        initial_stage: StageName,
    ) -> Self {
        Self {
            id,
            description,
            duration,
            stage: initial_stage,
            owner: None,
            start: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the expected duration.
    #[must_use]
    pub const fn duration(&self) -> ExpectedDuration {
        self.duration
    }

    /// Returns the stage the task currently occupies.
    #[must_use]
    pub const fn stage(&self) -> &StageName {
        &self.stage
    }

    /// Returns the owning user, if the task has been moved at least once.
    #[must_use]
    pub const fn owner(&self) -> Option<&UserName> {
        self.owner.as_ref()
    }

    /// Returns the start stamp, if the task has left the initial stage.
    #[must_use]
    pub const fn start(&self) -> Option<StartStamp> {
        self.start
    }

    /// Returns the board time at which the task started, if it has.
    #[must_use]
    pub fn start_time(&self) -> Option<BoardTime> {
        self.start.map(|stamp| stamp.time)
    }

    /// Returns `true` once the task has left the initial stage.
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.start.is_some()
    }

    pub(crate) fn move_to(&mut self, stage: StageName, owner: UserName) {
        self.stage = stage;
        self.owner = Some(owner);
    }

    /// Stamps the start time, handing back the existing stamp if the task
    /// already started.
    pub(crate) const fn stamp_start(&mut self, stamp: StartStamp) -> Result<(), StartStamp> {
        if let Some(existing) = self.start {
            return Err(existing);
        }
        self.start = Some(stamp);
        Ok(())
    }
}
