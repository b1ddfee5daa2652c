//! Shared rendering for full and filtered listings.
//!
//! # Responsibility
//! - Print every query result through one routine so all eight menu
//!   operations present records identically.
//!
//! # Invariants
//! - The printed position is the record's 1-based position within the
//!   displayed list, not its position in the full store.

use std::io::{self, Write};
use todolist_core::Todo;

/// Renders a listing: a "no results" line when empty, otherwise a
/// header followed by one numbered line per record.
pub fn render_list<'a, W, I>(output: &mut W, todos: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Todo>,
{
    let mut todos = todos.into_iter().peekable();
    if todos.peek().is_none() {
        writeln!(output, "📭 No to-dos found!")?;
        return Ok(());
    }

    writeln!(output, "\n📌 Your To-Do List:")?;
    for (index, todo) in todos.enumerate() {
        writeln!(output, "{}", format_line(index + 1, todo))?;
    }
    Ok(())
}

/// Formats one record as
/// `{position}. [{Done|Not Done}] {title} (Category: {c}, Priority: {p})`.
pub fn format_line(position: usize, todo: &Todo) -> String {
    let status = if todo.done { "Done" } else { "Not Done" };
    format!(
        "{position}. [{status}] {} (Category: {}, Priority: {})",
        todo.title, todo.category, todo.priority
    )
}

#[cfg(test)]
mod tests {
    use super::{format_line, render_list};
    use todolist_core::Todo;

    #[test]
    fn formats_pending_and_done_records() {
        let pending = Todo::new("Buy milk", "Home", "Low");
        assert_eq!(
            format_line(1, &pending),
            "1. [Not Done] Buy milk (Category: Home, Priority: Low)"
        );

        let mut done = Todo::new("Meeting", "Work", "high");
        done.mark_done();
        assert_eq!(
            format_line(3, &done),
            "3. [Done] Meeting (Category: Work, Priority: high)"
        );
    }

    #[test]
    fn empty_listing_prints_the_no_results_line() {
        let mut output = Vec::new();
        render_list(&mut output, &[]).expect("write should succeed");
        assert_eq!(
            String::from_utf8(output).expect("output is UTF-8"),
            "📭 No to-dos found!\n"
        );
    }

    #[test]
    fn positions_are_relative_to_the_displayed_list() {
        // A filtered listing restarts numbering from 1.
        let todos = [
            Todo::new("second overall", "Work", "High"),
            Todo::new("third overall", "Work", "Low"),
        ];
        let mut output = Vec::new();
        render_list(&mut output, &todos).expect("write should succeed");
        let rendered = String::from_utf8(output).expect("output is UTF-8");
        assert!(rendered.contains("1. [Not Done] second overall"));
        assert!(rendered.contains("2. [Not Done] third overall"));
    }
}
