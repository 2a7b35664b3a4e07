//! Application services for the task board.

mod controller;

pub use controller::{
    ActivateTaskRequest, Activation, ActivationOutcome, BoardController, BoardError, BoardResult,
    CreateTaskRequest,
};
