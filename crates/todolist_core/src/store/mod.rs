//! In-memory record store for a single session.
//!
//! # Responsibility
//! - Hold the ordered sequence of to-do records.
//! - Provide 1-based positional mutation with strict bounds checks.
//!
//! # Invariants
//! - Order is insertion order; it is the only addressing scheme.
//! - Positions are 1-based and ephemeral; removing a record shifts every
//!   later position down by one.
//! - Out-of-range mutations fail without touching the sequence.

use crate::model::todo::Todo;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Mutation error for positional store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The 1-based position is outside `[1, len]`.
    PositionOutOfRange { position: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositionOutOfRange { position, len } => write!(
                f,
                "position {position} is out of range for a list of {len} to-dos"
            ),
        }
    }
}

impl Error for StoreError {}

/// Ordered in-memory sequence of to-do records.
///
/// Owned by the application and threaded through the command loop; there
/// is deliberately no ambient global list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record at the end of the sequence. Always succeeds; no
    /// uniqueness or validation is applied here.
    pub fn add(&mut self, todo: Todo) {
        self.todos.push(todo);
        info!(
            "event=todo_add module=store status=ok count={}",
            self.todos.len()
        );
    }

    /// Marks the record at a 1-based `position` as done.
    ///
    /// # Errors
    /// - `StoreError::PositionOutOfRange` when `position` is not in
    ///   `[1, len]`; the store is left unchanged.
    pub fn mark_done(&mut self, position: usize) -> StoreResult<()> {
        let index = self.index_for(position)?;
        self.todos[index].mark_done();
        info!("event=todo_mark_done module=store status=ok position={position}");
        Ok(())
    }

    /// Removes the record at a 1-based `position`; later records shift
    /// down by one.
    ///
    /// # Errors
    /// - `StoreError::PositionOutOfRange` when `position` is not in
    ///   `[1, len]`; the store is left unchanged.
    pub fn remove(&mut self, position: usize) -> StoreResult<Todo> {
        let index = self.index_for(position)?;
        let removed = self.todos.remove(index);
        info!(
            "event=todo_delete module=store status=ok position={position} remaining={}",
            self.todos.len()
        );
        Ok(removed)
    }

    /// Replaces the whole sequence, used when loading from disk.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Read access to the full sequence in insertion order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    fn index_for(&self, position: usize) -> StoreResult<usize> {
        if position == 0 || position > self.todos.len() {
            warn!(
                "event=position_check module=store status=rejected position={position} len={}",
                self.todos.len()
            );
            return Err(StoreError::PositionOutOfRange {
                position,
                len: self.todos.len(),
            });
        }
        Ok(position - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreError, TodoStore};
    use crate::model::todo::Todo;

    #[test]
    fn positions_are_one_based() {
        let mut store = TodoStore::new();
        store.add(Todo::new("first", "Home", "Low"));

        let err = store
            .mark_done(0)
            .expect_err("position zero must be rejected");
        assert_eq!(err, StoreError::PositionOutOfRange { position: 0, len: 1 });

        store.mark_done(1).expect("position one should be in range");
        assert!(store.todos()[0].done);
    }

    #[test]
    fn remove_returns_the_removed_record() {
        let mut store = TodoStore::new();
        store.add(Todo::new("keep", "Home", "Low"));
        store.add(Todo::new("drop", "Work", "High"));

        let removed = store.remove(2).expect("position two should be in range");
        assert_eq!(removed.title, "drop");
        assert_eq!(store.len(), 1);
        assert_eq!(store.todos()[0].title, "keep");
    }

    #[test]
    fn replace_all_swaps_the_sequence_wholesale() {
        let mut store = TodoStore::new();
        store.add(Todo::new("old", "Home", "Low"));

        store.replace_all(vec![
            Todo::new("new one", "Work", "High"),
            Todo::new("new two", "Work", "Medium"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.todos()[0].title, "new one");
    }
}
