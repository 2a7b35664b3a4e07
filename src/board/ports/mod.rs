//! Port contracts for the task board.
//!
//! Ports define storage-agnostic interfaces used by board services.

pub mod task_store;

pub use task_store::{TaskStore, TaskStoreError, TaskStoreResult};
