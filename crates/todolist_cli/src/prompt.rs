//! Line-oriented prompting over generic I/O handles.
//!
//! # Responsibility
//! - Print a prompt, read one line, hand back the trimmed entry.
//!
//! # Invariants
//! - Prompts are written without a trailing newline and flushed before
//!   blocking on input.
//! - A closed input stream surfaces as `ErrorKind::UnexpectedEof`; the
//!   command loop maps it to save-and-exit.

use std::io::{self, BufRead, ErrorKind, Write};

/// Prints `prompt`, reads one line and returns it with surrounding
/// whitespace trimmed.
///
/// # Errors
/// - `ErrorKind::UnexpectedEof` when the input stream has ended.
/// - Any underlying read/write error.
pub fn read_trimmed<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt} ")?;
    output.flush()?;

    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(ErrorKind::UnexpectedEof, "input stream closed"));
    }
    Ok(line.trim().to_string())
}
