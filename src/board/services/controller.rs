//! Board controller: task lifecycle, board clock and ordered views.

use crate::board::{
    adapters::memory::InMemoryTaskStore,
    config::{BoardConfig, BoardConfigError},
    domain::{
        ActivationSeq, BoardDomainError, BoardTime, ExpectedDuration, StageName, StartStamp,
        TaskDescription, TaskId, TaskRecord, UserName,
    },
    index::{OrderedIndex, ViewOrder},
    ports::{TaskStore, TaskStoreError},
};
use thiserror::Error;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    description: String,
    duration: u64,
}

impl CreateTaskRequest {
    /// Creates a request for a task with the given description and expected
    /// duration in board ticks.
    #[must_use]
    pub fn new(description: impl Into<String>, duration: u64) -> Self {
        Self {
            description: description.into(),
            duration,
        }
    }
}

/// Request payload for moving a task to a stage under a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateTaskRequest {
    task_id: TaskId,
    user: String,
    stage: String,
}

impl ActivateTaskRequest {
    /// Creates a request moving `task_id` to `stage`, owned by `user`.
    #[must_use]
    pub fn new(task_id: TaskId, user: impl Into<String>, stage: impl Into<String>) -> Self {
        Self {
            task_id,
            user: user.into(),
            stage: stage.into(),
        }
    }
}

/// Result of a successful activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationOutcome {
    /// Task that moved.
    pub task_id: TaskId,
    /// Board time at which the task started.
    pub start: BoardTime,
    /// Ticks between the start and the current board time.
    pub elapsed: u64,
    /// Expected duration of the task.
    pub expected: ExpectedDuration,
    /// `true` if this activation took the task out of the initial stage.
    pub started_now: bool,
    /// `true` if the task moved into the done stage.
    pub completed: bool,
}

impl ActivationOutcome {
    /// Returns `elapsed - expected`; negative when the task finished early.
    #[must_use]
    pub fn slack(&self) -> i64 {
        let expected = self.expected.value();
        if self.elapsed >= expected {
            i64::try_from(self.elapsed - expected).unwrap_or(i64::MAX)
        } else {
            i64::try_from(expected - self.elapsed).map_or(i64::MIN, |early| -early)
        }
    }
}

/// What an activation did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The task moved to the requested stage.
    Moved(ActivationOutcome),
    /// The task was already in the requested stage; nothing changed.
    Unchanged(TaskId),
}

impl Activation {
    /// Returns the outcome of the move, or `None` if nothing moved.
    #[must_use]
    pub const fn outcome(self) -> Option<ActivationOutcome> {
        match self {
            Self::Moved(outcome) => Some(outcome),
            Self::Unchanged(_) => None,
        }
    }

    /// Returns `true` if the task changed stage.
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

/// Service-level errors for board operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] TaskStoreError),

    /// The board clock only moves forward.
    #[error("invalid time step {0}, expected a non-negative delta")]
    NegativeTimeStep(i64),

    /// Tasks never move back into the initial stage.
    #[error("task {task_id} cannot be moved to the initial stage '{stage}'")]
    InitialStageTarget {
        /// Task the move was requested for.
        task_id: TaskId,
        /// The initial stage.
        stage: StageName,
    },
}

impl BoardError {
    /// Returns `true` when a task id did not resolve.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(TaskStoreError::NotFound(_)))
    }

    /// Returns `true` when the caller broke a lifecycle precondition.
    #[must_use]
    pub const fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::NegativeTimeStep(_)
                | Self::InitialStageTarget { .. }
                | Self::Store(TaskStoreError::StartAlreadySet { .. })
        )
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Single-owner task board.
///
/// Holds the task store, the board clock and the two ordered indices. Every
/// task is in the description index from creation; a task joins the
/// start-time index the first time it leaves the initial stage.
#[derive(Debug, Clone)]
pub struct BoardController<S = InMemoryTaskStore>
where
    S: TaskStore,
{
    store: S,
    config: BoardConfig,
    now: BoardTime,
    by_description: OrderedIndex,
    by_start: OrderedIndex,
    // Start-index position of the first task activated since the last clock
    // advance.
    window_floor: usize,
    next_activation: ActivationSeq,
}

impl Default for BoardController<InMemoryTaskStore> {
    fn default() -> Self {
        Self::from_parts(InMemoryTaskStore::new(), BoardConfig::default())
    }
}

impl<S> BoardController<S>
where
    S: TaskStore,
{
    /// Creates a board at time zero over `store`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError`] when `config` fails validation.
    pub fn new(store: S, config: BoardConfig) -> Result<Self, BoardConfigError> {
        config.validate()?;
        Ok(Self::from_parts(store, config))
    }

    const fn from_parts(store: S, config: BoardConfig) -> Self {
        Self {
            store,
            config,
            now: BoardTime::ZERO,
            by_description: OrderedIndex::new(),
            by_start: OrderedIndex::new(),
            window_floor: 0,
            next_activation: ActivationSeq::FIRST,
        }
    }

    /// Returns the current board time.
    #[must_use]
    pub const fn now(&self) -> BoardTime {
        self.now
    }

    /// Returns the board configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Returns the stages present on the board, in listing order.
    #[must_use]
    pub fn stages(&self) -> &[StageName] {
        &self.config.stages
    }

    /// Returns the number of tasks created so far.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of tasks that have left the initial stage.
    #[must_use]
    pub const fn started_count(&self) -> usize {
        self.by_start.len()
    }

    /// Returns the start-index position where the current time window
    /// begins.
    #[must_use]
    pub const fn window_floor(&self) -> usize {
        self.window_floor
    }

    /// Returns the index backing `order`.
    #[must_use]
    pub const fn index(&self, order: ViewOrder) -> &OrderedIndex {
        match order {
            ViewOrder::Description => &self.by_description,
            ViewOrder::StartTime => &self.by_start,
        }
    }

    /// Moves the board clock forward by `delta` ticks and opens a new
    /// start-time window.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NegativeTimeStep`] when `delta` is negative; the
    /// board is left unchanged.
    pub fn advance_time(&mut self, delta: i64) -> BoardResult<BoardTime> {
        let step = u64::try_from(delta).map_err(|_| BoardError::NegativeTimeStep(delta))?;
        self.now = self.now.advanced_by(step);
        self.window_floor = self.by_start.len();
        tracing::debug!(delta = step, now = %self.now, window_floor = self.window_floor, "advanced board time");
        Ok(self.now)
    }

    /// Creates a task in the initial stage and indexes it by description.
    ///
    /// Description uniqueness is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] when the description is blank or the
    /// duration is zero.
    pub fn create_task(&mut self, request: CreateTaskRequest) -> BoardResult<TaskId> {
        let description = TaskDescription::new(request.description)?;
        let duration = ExpectedDuration::new(request.duration)?;

        let task_id = self
            .store
            .create(description, duration, self.config.initial_stage.clone());
        let store = &self.store;
        let window = 0..self.by_description.len();
        self.by_description.insert_sorted(task_id, window, |id| {
            store.get(id).map(|record| record.description().as_str())
        })?;

        tracing::debug!(task_id = %task_id, duration = %duration, "created task");
        Ok(task_id)
    }

    /// Moves a task to a stage under a user.
    ///
    /// The first move out of the initial stage stamps the start time with
    /// the current board time and indexes the task by start. Later moves
    /// only change stage and owner. A move into the stage the task is
    /// already in changes nothing, owner included, and returns
    /// [`Activation::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Domain`] for blank user or stage names,
    /// [`BoardError::InitialStageTarget`] when a task outside the initial
    /// stage is sent back to it,
    /// and [`BoardError::Store`] with [`TaskStoreError::NotFound`] when the
    /// task does not exist.
    pub fn activate(&mut self, request: ActivateTaskRequest) -> BoardResult<Activation> {
        let task_id = request.task_id;
        let user = UserName::new(request.user)?;
        let stage = StageName::new(request.stage)?;

        let record = self.store.get(task_id)?;
        if *record.stage() == stage {
            tracing::trace!(task_id = %task_id, stage = %stage, "task already in stage");
            return Ok(Activation::Unchanged(task_id));
        }
        let (existing, expected) = (record.start(), record.duration());
        if self.config.is_initial(&stage) {
            return Err(BoardError::InitialStageTarget { task_id, stage });
        }

        let stamp = existing.map_or_else(|| self.start_task(task_id), Ok)?;
        let completed = self.config.is_done(&stage);
        tracing::debug!(task_id = %task_id, user = %user, stage = %stage, "moved task");
        self.store.set_stage_and_owner(task_id, stage, user)?;

        Ok(Activation::Moved(ActivationOutcome {
            task_id,
            start: stamp.time,
            elapsed: self.now.since(stamp.time),
            expected,
            started_now: existing.is_none(),
            completed,
        }))
    }

    fn start_task(&mut self, task_id: TaskId) -> BoardResult<StartStamp> {
        let stamp = StartStamp::new(self.now, self.next_activation);
        self.store.set_start(task_id, stamp)?;

        let store = &self.store;
        let window = self.window_floor..self.by_start.len();
        self.by_start
            .insert_sorted(task_id, window, |id| store.get(id).map(TaskRecord::start))?;
        self.next_activation = self.next_activation.next();

        tracing::debug!(task_id = %task_id, start = %stamp.time, seq = %stamp.seq, "started task");
        Ok(stamp)
    }

    /// Returns the task with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] with [`TaskStoreError::NotFound`] when
    /// the task does not exist.
    pub fn task(&self, task_id: TaskId) -> BoardResult<&TaskRecord> {
        Ok(self.store.get(task_id)?)
    }

    /// Looks up each id in turn, keeping one result per id so callers can
    /// report misses individually.
    #[must_use]
    pub fn tasks<I>(&self, task_ids: I) -> Vec<BoardResult<&TaskRecord>>
    where
        I: IntoIterator<Item = TaskId>,
    {
        task_ids.into_iter().map(|id| self.task(id)).collect()
    }

    /// Returns tasks in `order`, optionally restricted to one stage.
    ///
    /// [`ViewOrder::StartTime`] only covers started tasks.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] if an indexed id no longer resolves.
    pub fn ordered_view(
        &self,
        order: ViewOrder,
        stage: Option<&StageName>,
    ) -> BoardResult<Vec<&TaskRecord>> {
        let index = self.index(order);
        let mut view = Vec::with_capacity(index.len());
        for task_id in index.iter() {
            let record = self.store.get(task_id)?;
            if stage.is_none_or(|wanted| record.stage() == wanted) {
                view.push(record);
            }
        }
        Ok(view)
    }

    /// Returns the tasks in `stage`.
    ///
    /// The initial stage is listed by description, since its tasks have not
    /// started; every other stage is listed by start time.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Store`] if an indexed id no longer resolves.
    pub fn tasks_in_stage(&self, stage: &StageName) -> BoardResult<Vec<&TaskRecord>> {
        let order = if self.config.is_initial(stage) {
            ViewOrder::Description
        } else {
            ViewOrder::StartTime
        };
        self.ordered_view(order, Some(stage))
    }
}
