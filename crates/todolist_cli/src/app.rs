//! Interactive menu session over a record store.
//!
//! # Responsibility
//! - Load the saved session, run the menu loop, dispatch the eight
//!   operations, save on exit.
//!
//! # Invariants
//! - Every failure is reported locally and control returns to the menu;
//!   the only terminal transition is save-and-exit.
//! - Save failures never touch the in-memory store; load failures start
//!   the session empty.
//! - A closed input stream behaves like the save-and-exit choice, so a
//!   piped session still persists its records.

use crate::prompt;
use crate::view;
use log::warn;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::PathBuf;
use todolist_core::{
    filter_by_category, filter_by_status, load_todos, save_todos, search_titles, LoadOutcome,
    PersistError, Priority, Todo, TodoStore,
};

enum Flow {
    Continue,
    Exit,
}

/// One interactive session: the store, its save path and the I/O pair.
///
/// Generic over `BufRead`/`Write` so whole sessions can run against
/// scripted input in tests.
pub struct App<R, W> {
    store: TodoStore,
    save_path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(save_path: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            store: TodoStore::new(),
            save_path: save_path.into(),
            input,
            output,
        }
    }

    /// Runs the session to completion: load, menu loop, save-and-exit.
    ///
    /// # Errors
    /// - Only unrecoverable I/O errors on the output stream; user input
    ///   errors and persistence errors are reported and absorbed.
    pub fn run(&mut self) -> io::Result<()> {
        self.load()?;
        writeln!(self.output, "🎯 Welcome to the Interactive To-Do List! 🎯")?;
        loop {
            self.show_menu()?;
            let flow = match self.step() {
                Ok(flow) => flow,
                Err(err) if err.kind() == ErrorKind::UnexpectedEof => self.save_and_exit()?,
                Err(err) => return Err(err),
            };
            if matches!(flow, Flow::Exit) {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n📋 Menu:")?;
        writeln!(self.output, "1. List All To-Dos")?;
        writeln!(self.output, "2. Add a To-Do")?;
        writeln!(self.output, "3. Mark a To-Do as Done")?;
        writeln!(self.output, "4. Delete a To-Do")?;
        writeln!(self.output, "5. Filter To-Dos by Category")?;
        writeln!(self.output, "6. List Only Pending or Completed To-Dos")?;
        writeln!(self.output, "7. Search To-Dos by Title")?;
        writeln!(self.output, "8. Save and Exit")
    }

    fn step(&mut self) -> io::Result<Flow> {
        let choice = self.prompt("Choose an option:")?;
        match choice.as_str() {
            "1" => view::render_list(&mut self.output, self.store.todos())?,
            "2" => self.add_todo()?,
            "3" => self.mark_todo_done()?,
            "4" => self.delete_todo()?,
            "5" => self.filter_by_category()?,
            "6" => self.list_pending_or_completed()?,
            "7" => self.search_todos()?,
            "8" => return self.save_and_exit(),
            other => {
                warn!("event=menu_choice module=cli status=rejected choice={other}");
                writeln!(self.output, "❌ Invalid choice. Please try again.")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn add_todo(&mut self) -> io::Result<()> {
        let title = self.prompt("Enter the title of the to-do:")?;
        let category = self.prompt("Enter the category (e.g., Work, Personal):")?;
        let priority = self.prompt_priority()?;
        self.store.add(Todo::new(title, category, priority));
        writeln!(self.output, "✅ To-Do added successfully!")
    }

    fn mark_todo_done(&mut self) -> io::Result<()> {
        let position = self.prompt_position("Enter the ID of the to-do to mark as done:")?;
        match self.store.mark_done(position) {
            Ok(()) => writeln!(self.output, "✅ To-Do marked as done!"),
            Err(err) => {
                warn!("event=mark_done module=cli status=rejected error={err}");
                writeln!(self.output, "❌ Invalid ID.")
            }
        }
    }

    fn delete_todo(&mut self) -> io::Result<()> {
        let position = self.prompt_position("Enter the ID of the to-do to delete:")?;
        match self.store.remove(position) {
            Ok(_) => writeln!(self.output, "🗑️ To-Do deleted successfully!"),
            Err(err) => {
                warn!("event=delete module=cli status=rejected error={err}");
                writeln!(self.output, "❌ Invalid ID.")
            }
        }
    }

    fn filter_by_category(&mut self) -> io::Result<()> {
        let category = self.prompt("Enter the category to filter by:")?;
        let hits = filter_by_category(self.store.todos(), &category);
        view::render_list(&mut self.output, hits)
    }

    fn list_pending_or_completed(&mut self) -> io::Result<()> {
        let status = self.prompt(
            "Enter 'pending' to list only pending to-dos or 'completed' for completed ones:",
        )?;
        let hits = filter_by_status(self.store.todos(), &status);
        view::render_list(&mut self.output, hits)
    }

    fn search_todos(&mut self) -> io::Result<()> {
        let keyword = self.prompt("Enter a keyword to search:")?;
        let hits = search_titles(self.store.todos(), &keyword);
        view::render_list(&mut self.output, hits)
    }

    fn save_and_exit(&mut self) -> io::Result<Flow> {
        match save_todos(&self.save_path, self.store.todos()) {
            Ok(()) => {}
            Err(PersistError::Encode(err)) => {
                writeln!(self.output, "❌ Error encoding to-dos: {err}")?;
            }
            Err(err) => {
                writeln!(self.output, "❌ Error saving to-dos: {err}")?;
            }
        }
        writeln!(self.output, "✅ To-Dos saved successfully! Goodbye!")?;
        Ok(Flow::Exit)
    }

    fn load(&mut self) -> io::Result<()> {
        match load_todos(&self.save_path) {
            Ok(LoadOutcome::Loaded(todos)) => self.store.replace_all(todos),
            Ok(LoadOutcome::Missing) => {
                writeln!(self.output, "📂 No existing to-dos found.")?;
            }
            Err(PersistError::Decode(err)) => {
                writeln!(self.output, "❌ Error decoding to-dos: {err}")?;
            }
            Err(err) => {
                writeln!(self.output, "❌ Error loading to-dos: {err}")?;
            }
        }
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        prompt::read_trimmed(&mut self.input, &mut self.output, text)
    }

    /// Reads a 1-based position. Non-numeric entries map to position 0,
    /// which every store operation rejects as out of range.
    fn prompt_position(&mut self, text: &str) -> io::Result<usize> {
        let entry = self.prompt(text)?;
        Ok(entry.parse::<usize>().unwrap_or(0))
    }

    /// Re-prompts until the entry names a valid priority, then returns
    /// the raw spelling as typed.
    fn prompt_priority(&mut self) -> io::Result<String> {
        loop {
            let entry = self.prompt("Enter the priority (High, Medium, Low):")?;
            if entry.parse::<Priority>().is_ok() {
                return Ok(entry);
            }
            writeln!(
                self.output,
                "❌ Invalid priority. Please enter 'High', 'Medium', or 'Low'."
            )?;
        }
    }
}
