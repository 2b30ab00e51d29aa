use serde::Serialize;

use crate::model::todo::Todo;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TodoJson {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub added: String,
}

impl From<&Todo> for TodoJson {
    fn from(todo: &Todo) -> Self {
        TodoJson {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            completed: todo.completed,
            description: todo.description.clone(),
            due_date: todo.due_date.clone(),
            added: todo.added.to_rfc3339(),
        }
    }
}

// ---------------------------------------------------------------------------
// Plain text output
// ---------------------------------------------------------------------------

/// One listing row: `[x] 1a2b3c4d Buy milk (due friday)`
pub fn format_row(todo: &Todo) -> String {
    let checkbox = if todo.completed { "[x]" } else { "[ ]" };
    let mut row = format!("{} {} {}", checkbox, todo.short_id(), todo.title);
    if let Some(due) = &todo.due_date
        && !due.is_empty()
    {
        row.push_str(&format!(" (due {})", due));
    }
    row
}
