//! Domain model for to-do records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by storage, queries and
//!   persistence.
//! - Gate priority input through a fixed, case-insensitive value set.
//!
//! # Invariants
//! - A record has no persistent identifier; it is addressed only by its
//!   1-based position in the store at a given moment.
//! - `done` starts as `false` for every newly created record.

pub mod todo;
