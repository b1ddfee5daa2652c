//! Read-only derivations over the record store.
//!
//! # Responsibility
//! - Filter and search the sequence without mutating it.
//! - Keep match semantics distinct per operation: category is an exact
//!   case-insensitive match, title search is a substring match.
//!
//! # Invariants
//! - Results preserve the store's current order.
//! - An unknown status keyword yields an empty result, not an error.

use crate::model::todo::Todo;

/// Status keywords accepted by [`filter_by_status`].
pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETED: &str = "completed";

/// Records whose category equals `category`, ignoring case.
///
/// Exact match only: `"Wor"` does not select `"Work"`. The fold is
/// Unicode-aware, same as title search, so `"CAFÉ"` selects `"Café"`.
pub fn filter_by_category<'a>(todos: &'a [Todo], category: &str) -> Vec<&'a Todo> {
    let wanted = category.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.category.to_lowercase() == wanted)
        .collect()
}

/// Records selected by the raw status keyword.
///
/// `"pending"` selects records with `done == false`, `"completed"`
/// selects `done == true`. Any other keyword selects nothing.
pub fn filter_by_status<'a>(todos: &'a [Todo], status: &str) -> Vec<&'a Todo> {
    todos
        .iter()
        .filter(|todo| match status {
            STATUS_PENDING => !todo.done,
            STATUS_COMPLETED => todo.done,
            _ => false,
        })
        .collect()
}

/// Records whose title contains `keyword` as a case-insensitive
/// substring. An empty keyword matches every record.
pub fn search_titles<'a>(todos: &'a [Todo], keyword: &str) -> Vec<&'a Todo> {
    let needle = keyword.to_lowercase();
    todos
        .iter()
        .filter(|todo| todo.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_by_category, filter_by_status, search_titles};
    use crate::model::todo::Todo;

    fn sample() -> Vec<Todo> {
        let mut todos = vec![
            Todo::new("Meeting with team", "Work", "High"),
            Todo::new("Buy milk", "Home", "Low"),
            Todo::new("Write report", "work", "Medium"),
        ];
        todos[1].mark_done();
        todos
    }

    #[test]
    fn category_filter_ignores_case_but_not_partial_matches() {
        let todos = sample();
        let upper = filter_by_category(&todos, "Work");
        let lower = filter_by_category(&todos, "work");
        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);

        assert!(filter_by_category(&todos, "Wor").is_empty());
    }

    #[test]
    fn category_fold_handles_non_ascii_letters() {
        let todos = vec![Todo::new("Order beans", "Café", "Low")];
        let hits = filter_by_category(&todos, "CAFÉ");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Order beans");
    }

    #[test]
    fn status_filter_splits_pending_and_completed() {
        let todos = sample();
        let pending = filter_by_status(&todos, "pending");
        assert_eq!(pending.len(), 2);
        assert!(pending.iter().all(|todo| !todo.done));

        let completed = filter_by_status(&todos, "completed");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title, "Buy milk");
    }

    #[test]
    fn unknown_status_keyword_yields_empty_result() {
        let todos = sample();
        assert!(filter_by_status(&todos, "done").is_empty());
        assert!(filter_by_status(&todos, "").is_empty());
    }

    #[test]
    fn search_matches_case_insensitive_substrings() {
        let todos = sample();
        let hits = search_titles(&todos, "eet");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Meeting with team");

        assert_eq!(search_titles(&todos, "REPORT").len(), 1);
        assert!(search_titles(&todos, "groceries").is_empty());
    }

    #[test]
    fn results_preserve_store_order() {
        let todos = sample();
        let hits = search_titles(&todos, "");
        let titles: Vec<&str> = hits.iter().map(|todo| todo.title.as_str()).collect();
        assert_eq!(titles, vec!["Meeting with team", "Buy milk", "Write report"]);
    }
}
