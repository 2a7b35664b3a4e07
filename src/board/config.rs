//! Board configuration: the stages present at construction and the two that
//! carry meaning for the lifecycle.

use crate::board::domain::StageName;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the stage every new task starts in.
pub const DEFAULT_INITIAL_STAGE: &str = "TO DO";
/// Name of the stage that is in progress by default.
pub const DEFAULT_IN_PROGRESS_STAGE: &str = "IN PROGRESS";
/// Name of the stage that completes a task.
pub const DEFAULT_DONE_STAGE: &str = "DONE";

/// Errors raised while loading or validating a [`BoardConfig`].
#[derive(Debug, Error)]
pub enum BoardConfigError {
    /// The JSON payload could not be parsed.
    #[error("malformed board configuration: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The initial and done stages must differ.
    #[error("initial stage and done stage are both '{0}'")]
    InitialIsDone(StageName),

    /// A designated stage is not in the stage list.
    #[error("stage '{0}' is not listed in the board stages")]
    UnlistedStage(StageName),
}

/// Stage layout of a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Stage new tasks are created in; leaving it starts a task.
    pub initial_stage: StageName,
    /// Stage whose entry reports elapsed time and slack.
    pub done_stage: StageName,
    /// Stages present when the board is constructed, in listing order.
    pub stages: Vec<StageName>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let initial_stage = StageName::from_literal(DEFAULT_INITIAL_STAGE);
        let done_stage = StageName::from_literal(DEFAULT_DONE_STAGE);
        Self {
            stages: vec![
                initial_stage.clone(),
                StageName::from_literal(DEFAULT_IN_PROGRESS_STAGE),
                done_stage.clone(),
            ],
            initial_stage,
            done_stage,
        }
    }
}

impl BoardConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// ```
    /// use kanban_core::board::config::BoardConfig;
    ///
    /// let config = BoardConfig::from_json(
    ///     r#"{"initial_stage":"BACKLOG","done_stage":"SHIPPED","stages":["BACKLOG","SHIPPED"]}"#,
    /// )
    /// .expect("valid configuration");
    /// assert_eq!(config.initial_stage.as_str(), "BACKLOG");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::Malformed`] when the payload is not a
    /// valid configuration, or any error from [`BoardConfig::validate`].
    pub fn from_json(payload: &str) -> Result<Self, BoardConfigError> {
        let config: Self = serde_json::from_str(payload)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the designated stages are distinct and listed.
    ///
    /// # Errors
    ///
    /// Returns [`BoardConfigError::InitialIsDone`] or
    /// [`BoardConfigError::UnlistedStage`].
    pub fn validate(&self) -> Result<(), BoardConfigError> {
        if self.initial_stage == self.done_stage {
            return Err(BoardConfigError::InitialIsDone(self.initial_stage.clone()));
        }
        for designated in [&self.initial_stage, &self.done_stage] {
            if !self.stages.contains(designated) {
                return Err(BoardConfigError::UnlistedStage(designated.clone()));
            }
        }
        Ok(())
    }

    /// Returns `true` if `stage` is the initial stage.
    #[must_use]
    pub fn is_initial(&self, stage: &StageName) -> bool {
        &self.initial_stage == stage
    }

    /// Returns `true` if `stage` is the done stage.
    #[must_use]
    pub fn is_done(&self, stage: &StageName) -> bool {
        &self.done_stage == stage
    }
}
