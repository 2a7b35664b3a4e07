//! Shared world state for board lifecycle BDD scenarios.

use std::collections::HashMap;

use kanban_core::board::{
    adapters::memory::InMemoryTaskStore,
    domain::{BoardTime, TaskId},
    services::{ActivationOutcome, BoardController, BoardError},
};
use rstest::fixture;

/// Board type used by the BDD world.
pub type TestBoard = BoardController<InMemoryTaskStore>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub board: TestBoard,
    pub tasks_by_description: HashMap<String, TaskId>,
    pub last_outcome: Option<ActivationOutcome>,
    pub last_time_step: Option<Result<BoardTime, BoardError>>,
}

impl BoardWorld {
    /// Creates a world around an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: BoardController::default(),
            tasks_by_description: HashMap::new(),
            last_outcome: None,
            last_time_step: None,
        }
    }

    /// Resolves a task created earlier in the scenario by description.
    ///
    /// # Errors
    ///
    /// Returns an error if no task with that description was created.
    pub fn task_id(&self, description: &str) -> Result<TaskId, eyre::Report> {
        self.tasks_by_description
            .get(description)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task named '{description}' in scenario world"))
    }

    /// Returns the descriptions of `ids` joined with `", "`.
    ///
    /// # Errors
    ///
    /// Returns an error if an id does not resolve on the board.
    pub fn describe(&self, ids: &[TaskId]) -> Result<String, eyre::Report> {
        let mut names = Vec::with_capacity(ids.len());
        for id in ids {
            names.push(self.board.task(*id)?.description().as_str().to_owned());
        }
        Ok(names.join(", "))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
