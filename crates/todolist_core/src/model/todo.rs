//! To-do record model.
//!
//! # Responsibility
//! - Define the persisted record shape (`title`, `done`, `category`,
//!   `priority`).
//! - Provide the `Priority` value set used to validate user input.
//!
//! # Invariants
//! - `priority` stores the user's raw spelling; `Priority` only gates
//!   input, it is never the stored representation.
//! - Field order matches the persisted JSON object field order.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One task entry in the session's record store.
///
/// Records carry no identity of their own: the only addressing scheme is
/// a record's transient 1-based position inside the store, which shifts
/// whenever an earlier record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Free-form title, may be empty, not unique.
    pub title: String,
    /// Completion flag. `false` at creation, flipped by mark-done.
    pub done: bool,
    /// Free-form category, matched case-insensitively (exact) by filters.
    pub category: String,
    /// One of High/Medium/Low as typed by the user; casing is preserved.
    pub priority: String,
}

impl Todo {
    /// Creates a pending record from user-supplied fields.
    ///
    /// # Invariants
    /// - `done` starts as `false`.
    /// - No validation or normalization is applied to `title`/`category`;
    ///   the caller validates `priority` against [`Priority`] before
    ///   constructing the record.
    pub fn new(
        title: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            done: false,
            category: category.into(),
            priority: priority.into(),
        }
    }

    /// Marks this record as completed.
    pub fn mark_done(&mut self) {
        self.done = true;
    }
}

/// The fixed priority value set.
///
/// Exists only to validate input; accepted entries are stored as the raw
/// string the user typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Rejection for priority entries outside the fixed value set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPriority(pub String);

impl Display for InvalidPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid priority `{}`; expected High, Medium or Low",
            self.0
        )
    }
}

impl Error for InvalidPriority {}

impl FromStr for Priority {
    type Err = InvalidPriority;

    /// Parses case-insensitively; surrounding whitespace is not trimmed
    /// here because prompt input is already trimmed by the caller.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(InvalidPriority(value.to_string())),
        }
    }
}
