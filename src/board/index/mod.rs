//! Secondary indices over the task store.
//!
//! The board keeps two [`OrderedIndex`] instances: one over every task by
//! description, one over started tasks by start stamp.

mod ordered;

pub use ordered::OrderedIndex;

/// Sort order for board views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewOrder {
    /// Every task, by description (byte-wise).
    Description,
    /// Started tasks only, by start time then activation order.
    StartTime,
}
