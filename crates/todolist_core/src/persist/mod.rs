//! JSON-file persistence for the record store.
//!
//! # Responsibility
//! - Serialize the whole store to a single JSON array file on save.
//! - Deserialize it wholesale on load, treating a missing file as an
//!   empty store rather than an error.
//!
//! # Invariants
//! - Save overwrites the file in place (create/truncate); there is no
//!   temp-file/rename step, so an interrupted save can leave the file
//!   truncated.
//! - File handles are scoped to the single call that needs them.
//! - Round-trips are lossless for any array of records, including the
//!   empty array.

use crate::model::todo::Todo;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::Path;
use std::time::Instant;

/// Fixed relative path the session persists to.
pub const SAVE_FILE: &str = "todos.json";

pub type PersistResult<T> = Result<T, PersistError>;

/// Persistence error split by failing phase, so callers can report
/// open/create failures distinctly from codec failures.
#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Encode(serde_json::Error),
    Decode(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode to-dos: {err}"),
            Self::Decode(err) => write!(f, "failed to decode to-dos: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Encode(err) | Self::Decode(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for PersistError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Result of attempting to load a saved session.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The save file exists and decoded cleanly.
    Loaded(Vec<Todo>),
    /// No save file is present; the session starts empty.
    Missing,
}

/// Writes the whole sequence to `path` as a JSON array, overwriting any
/// prior contents.
///
/// Best-effort: the in-memory store is never touched, but a failure can
/// leave prior file contents partially overwritten.
///
/// # Errors
/// - `PersistError::Io` when the file cannot be created or written.
/// - `PersistError::Encode` when serialization fails.
pub fn save_todos(path: impl AsRef<Path>, todos: &[Todo]) -> PersistResult<()> {
    let started_at = Instant::now();
    let path = path.as_ref();

    let file = match File::create(path) {
        Ok(file) => file,
        Err(err) => {
            error!(
                "event=save module=persist status=error duration_ms={} error_code=create_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::to_writer(BufWriter::new(file), todos) {
        Ok(()) => {
            info!(
                "event=save module=persist status=ok duration_ms={} count={}",
                started_at.elapsed().as_millis(),
                todos.len()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=save module=persist status=error duration_ms={} error_code=encode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(PersistError::Encode(err))
        }
    }
}

/// Reads the saved JSON array at `path` back into a record sequence.
///
/// A missing file is `Ok(LoadOutcome::Missing)`, not an error; the
/// caller starts with an empty store and tells the user so.
///
/// # Errors
/// - `PersistError::Io` when the file exists but cannot be opened/read.
/// - `PersistError::Decode` when its contents are not a valid record
///   array; decoding is all-or-nothing, no partial sequence survives.
pub fn load_todos(path: impl AsRef<Path>) -> PersistResult<LoadOutcome> {
    let started_at = Instant::now();
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                "event=load module=persist status=missing duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(LoadOutcome::Missing);
        }
        Err(err) => {
            error!(
                "event=load module=persist status=error duration_ms={} error_code=open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            return Err(err.into());
        }
    };

    match serde_json::from_reader::<_, Vec<Todo>>(BufReader::new(file)) {
        Ok(todos) => {
            info!(
                "event=load module=persist status=ok duration_ms={} count={}",
                started_at.elapsed().as_millis(),
                todos.len()
            );
            Ok(LoadOutcome::Loaded(todos))
        }
        Err(err) => {
            error!(
                "event=load module=persist status=error duration_ms={} error_code=decode_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(PersistError::Decode(err))
        }
    }
}
