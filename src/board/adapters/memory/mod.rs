//! In-memory adapters for the task board.

mod task_store;

pub use task_store::InMemoryTaskStore;
