//! Core domain logic for the interactive to-do list manager.
//! This crate is the single source of truth for record semantics.
//!
//! Records have no persistent identity: the 1-based position shown in a
//! listing is the only handle a user has, and it shifts after deletes.

pub mod logging;
pub mod model;
pub mod persist;
pub mod query;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{InvalidPriority, Priority, Todo};
pub use persist::{load_todos, save_todos, LoadOutcome, PersistError, PersistResult, SAVE_FILE};
pub use query::{filter_by_category, filter_by_status, search_titles};
pub use store::{StoreError, StoreResult, TodoStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
