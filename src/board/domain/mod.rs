//! Domain model for the task board.
//!
//! Tasks are plain records addressed by a 1-based [`TaskId`]. Validation of
//! scalar inputs happens in the newtype constructors; every other rule is
//! enforced by the board controller.

mod error;
mod ids;
mod names;
mod task;

pub use error::BoardDomainError;
pub use ids::{ActivationSeq, BoardTime, ExpectedDuration, TaskId};
pub use names::{StageName, TaskDescription, UserName};
pub use task::{StartStamp, TaskRecord};
