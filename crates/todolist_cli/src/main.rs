//! Interactive to-do list entry point.
//!
//! # Responsibility
//! - Bootstrap file logging, then run one menu session over
//!   stdin/stdout against the fixed `todos.json` save file.
//!
//! # Invariants
//! - Logging failure never blocks the session.
//! - The process exits with the default success code on the
//!   save-and-exit choice.

mod app;
mod prompt;
mod view;

use app::App;
use log::info;
use std::io;
use todolist_core::{core_version, default_log_level, init_logging, SAVE_FILE};

fn main() {
    init_file_logging();
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = App::new(SAVE_FILE, stdin.lock(), stdout.lock());
    if let Err(err) = session.run() {
        eprintln!("to-do session ended unexpectedly: {err}");
    }
}

/// Logs land in `logs/` next to the save file. The session runs without
/// logs when the directory cannot be set up.
fn init_file_logging() {
    let Ok(current_dir) = std::env::current_dir() else {
        return;
    };
    let log_dir = current_dir.join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    if let Err(err) = init_logging(default_log_level(), log_dir) {
        eprintln!("logging disabled: {err}");
    }
}
