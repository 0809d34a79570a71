//! View Model
//!
//! Pure derivation of everything the page shows from (list, filter).
//! Components only apply the result.

use crate::models::{Filter, Todo, TodoId};

/// One visible row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoRow {
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
}

/// One filter selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterTab {
    pub filter: Filter,
    pub label: &'static str,
    pub active: bool,
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoView {
    pub rows: Vec<TodoRow>,
    /// No todos exist at all (not "none match the filter")
    pub show_empty: bool,
    pub remaining: usize,
    pub remaining_label: String,
    pub filters: Vec<FilterTab>,
    pub has_completed: bool,
}

pub fn derive_view(todos: &[Todo], filter: Filter) -> TodoView {
    let rows = todos
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| TodoRow {
            id: t.id.clone(),
            text: t.text.clone(),
            completed: t.completed,
        })
        .collect();

    let remaining = todos.iter().filter(|t| !t.completed).count();

    TodoView {
        rows,
        show_empty: todos.is_empty(),
        remaining,
        remaining_label: remaining_label(remaining),
        filters: Filter::ALL
            .iter()
            .map(|&f| FilterTab {
                filter: f,
                label: f.label(),
                active: f == filter,
            })
            .collect(),
        has_completed: remaining < todos.len(),
    }
}

/// "1 item left" / "N items left"
pub fn remaining_label(remaining: usize) -> String {
    format!("{} item{} left", remaining, if remaining == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_todo(id: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            text: format!("Todo {}", id),
            completed,
        }
    }

    fn row_ids(view: &TodoView) -> Vec<&str> {
        view.rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_remaining_label() {
        assert_eq!(remaining_label(0), "0 items left");
        assert_eq!(remaining_label(1), "1 item left");
        assert_eq!(remaining_label(2), "2 items left");
    }

    #[test]
    fn test_filters_keep_order() {
        let todos = vec![make_todo("a", false), make_todo("b", true), make_todo("c", false)];

        assert_eq!(row_ids(&derive_view(&todos, Filter::All)), vec!["a", "b", "c"]);
        assert_eq!(row_ids(&derive_view(&todos, Filter::Active)), vec!["a", "c"]);
        assert_eq!(row_ids(&derive_view(&todos, Filter::Completed)), vec!["b"]);
    }

    #[test]
    fn test_counter_is_filter_independent() {
        let todos = vec![make_todo("a", false), make_todo("b", true), make_todo("c", false)];

        let counts: Vec<usize> = [Filter::Active, Filter::Completed, Filter::All]
            .iter()
            .map(|&f| derive_view(&todos, f).rows.len())
            .collect();
        assert_eq!(counts, vec![2, 1, 3]);

        for filter in Filter::ALL {
            assert_eq!(derive_view(&todos, filter).remaining_label, "2 items left");
        }
    }

    #[test]
    fn test_empty_state_only_when_list_empty() {
        let empty = derive_view(&[], Filter::All);
        assert!(empty.show_empty);
        assert!(empty.rows.is_empty());
        assert_eq!(empty.remaining_label, "0 items left");

        // Nothing matches the filter, but todos exist
        let todos = vec![make_todo("a", false)];
        let view = derive_view(&todos, Filter::Completed);
        assert!(view.rows.is_empty());
        assert!(!view.show_empty);
    }

    #[test]
    fn test_exactly_one_active_tab() {
        let view = derive_view(&[], Filter::Active);
        let active: Vec<Filter> = view.filters.iter().filter(|t| t.active).map(|t| t.filter).collect();
        assert_eq!(active, vec![Filter::Active]);
        assert_eq!(
            view.filters.iter().map(|t| t.label).collect::<Vec<_>>(),
            vec!["All", "Active", "Completed"]
        );
    }

    #[test]
    fn test_row_fields() {
        let todos = vec![make_todo("a", true)];
        let view = derive_view(&todos, Filter::All);
        assert_eq!(
            view.rows,
            vec![TodoRow {
                id: TodoId::from("a"),
                text: "Todo a".to_string(),
                completed: true,
            }]
        );
        assert!(view.has_completed);
        assert!(!derive_view(&[make_todo("b", false)], Filter::All).has_completed);
    }
}
