//! Kanban core: ordered task tracking for a single-process task board.
//!
//! The crate keeps tasks moving through named workflow stages and maintains
//! the sorted views a board needs: all tasks by description, and started
//! tasks by start time with activation order breaking ties.
//!
//! # Architecture
//!
//! The board follows hexagonal architecture principles:
//!
//! - **Domain**: Validated values and task records with no storage concerns
//! - **Ports**: The task store contract
//! - **Adapters**: The vector-backed in-memory store
//! - **Services**: The board controller owning the clock and both indices
//!
//! Command parsing and output formatting live outside this crate; callers
//! pass validated requests and format the returned records themselves.
//!
//! # Modules
//!
//! - [`board`]: Task store, ordered indices and the board controller

pub mod board;
