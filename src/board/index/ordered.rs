//! Sorted permutation of task identifiers with windowed binary insertion.

use crate::board::domain::TaskId;
use std::ops::Range;

/// Task identifiers kept in ascending key order.
///
/// The index does not own the keys. Callers pass a lookup function on every
/// insertion, so the same type serves any key a task record can produce.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedIndex {
    ids: Vec<TaskId>,
}

impl OrderedIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Inserts `id` at its sorted position and returns that position.
    ///
    /// The binary search only compares against entries whose positions fall
    /// in `window`; the new id lands after the last entry in the window
    /// whose key is not greater than its own, so equal keys keep arrival
    /// order. Entries at or after the insertion point shift right by one.
    ///
    /// The window is clamped to the current length. An empty window inserts
    /// at its start without comparing anything.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `key_of`; the index is left
    /// unchanged in that case.
    pub fn insert_sorted<K, E, F>(
        &mut self,
        id: TaskId,
        window: Range<usize>,
        mut key_of: F,
    ) -> Result<usize, E>
    where
        K: Ord,
        F: FnMut(TaskId) -> Result<K, E>,
    {
        let key = key_of(id)?;
        let mut lo = window.start.min(self.ids.len());
        let mut hi = window.end.clamp(lo, self.ids.len());

        while lo < hi {
            let mid = lo.midpoint(hi);
            let Some(&candidate) = self.ids.get(mid) else {
                break;
            };
            if key_of(candidate)? > key {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }

        self.ids.insert(lo, id);
        tracing::trace!(task_id = %id, position = lo, len = self.ids.len(), "indexed task");
        Ok(lo)
    }

    /// Returns the ordered identifiers.
    #[must_use]
    pub fn snapshot(&self) -> &[TaskId] {
        &self.ids
    }

    /// Iterates over identifiers in key order.
    pub fn iter(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.ids.iter().copied()
    }

    /// Returns the position of `id`, if indexed.
    #[must_use]
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.ids.iter().position(|&entry| entry == id)
    }

    /// Returns the number of indexed tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` when nothing has been indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> IntoIterator for &'a OrderedIndex {
    type Item = &'a TaskId;
    type IntoIter = std::slice::Iter<'a, TaskId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
