use regex::Regex;

use crate::model::todo::Todo;
use crate::ops::reconcile::LoadState;

/// Case-insensitive substring containment over a todo title.
pub fn title_matches(todo: &Todo, query_lower: &str) -> bool {
    todo.title.to_lowercase().contains(query_lower)
}

/// The search projection: the order-preserving subsequence of `todos`
/// whose titles contain `query` case-insensitively. An empty query is
/// the identity.
pub fn apply_search<'a>(todos: &'a [Todo], query: &str) -> Vec<&'a Todo> {
    if query.is_empty() {
        return todos.iter().collect();
    }
    let query_lower = query.to_lowercase();
    todos
        .iter()
        .filter(|t| title_matches(t, &query_lower))
        .collect()
}

/// Project the reconciled list through the search query.
/// Pending propagates: a view that hasn't loaded has nothing to search.
pub fn project(state: &LoadState, query: &str) -> LoadState {
    match state {
        LoadState::Pending => LoadState::Pending,
        LoadState::Loaded(todos) => {
            LoadState::Loaded(apply_search(todos, query).into_iter().cloned().collect())
        }
    }
}

/// Highlight regex for rendering match spans: the query as an escaped
/// case-insensitive literal, so highlighted spans agree with the
/// projector's containment test. None for an empty query.
pub fn highlight_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn todo(title: &str) -> Todo {
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            completed: false,
            description: None,
            due_date: None,
            added: Utc::now(),
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            todo("Buy milk"),
            todo("Call the dentist"),
            todo("buy bread"),
            todo("Water plants"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let todos = sample();
        let out = apply_search(&todos, "");
        assert_eq!(out.len(), todos.len());
        for (got, want) in out.iter().zip(&todos) {
            assert_eq!(got.id, want.id);
        }
    }

    #[test]
    fn test_case_insensitive_containment() {
        let todos = sample();
        let out = apply_search(&todos, "BUY");
        let titles: Vec<&str> = out.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Buy milk", "buy bread"]);
    }

    #[test]
    fn test_result_is_order_preserving_subsequence() {
        let todos = sample();
        let out = apply_search(&todos, "a");

        // Every hit appears in the source, in the same relative order
        let mut source_pos = 0;
        for hit in &out {
            let pos = todos[source_pos..]
                .iter()
                .position(|t| t.id == hit.id)
                .expect("hit must come from the source list");
            source_pos += pos + 1;
        }
        // And every hit actually contains the query
        for hit in &out {
            assert!(hit.title.to_lowercase().contains('a'));
        }
    }

    #[test]
    fn test_no_matches_is_empty_not_pending() {
        let todos = sample();
        assert!(apply_search(&todos, "zzz").is_empty());

        let projected = project(&LoadState::Loaded(todos), "zzz");
        assert_eq!(projected, LoadState::Loaded(Vec::new()));
    }

    #[test]
    fn test_project_propagates_pending() {
        assert_eq!(project(&LoadState::Pending, ""), LoadState::Pending);
        assert_eq!(project(&LoadState::Pending, "milk"), LoadState::Pending);
    }

    #[test]
    fn test_project_identity_on_empty_query() {
        let todos = sample();
        let state = LoadState::Loaded(todos.clone());
        assert_eq!(project(&state, ""), state);
    }

    #[test]
    fn test_query_with_regex_metacharacters_is_literal() {
        let todos = vec![todo("fix a+b parsing"), todo("ab")];
        // "a+b" must match literally, not as a regex
        let out = apply_search(&todos, "a+b");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "fix a+b parsing");

        let re = highlight_regex("a+b").unwrap();
        assert!(re.is_match("A+B parsing"));
        assert!(!re.is_match("ab"));
    }

    #[test]
    fn test_highlight_regex_agrees_with_projection() {
        let todos = sample();
        let re = highlight_regex("buy").unwrap();
        for t in &todos {
            let projected = !apply_search(std::slice::from_ref(t), "buy").is_empty();
            assert_eq!(re.is_match(&t.title), projected);
        }
    }

    #[test]
    fn test_highlight_regex_empty_query() {
        assert!(highlight_regex("").is_none());
    }
}
