use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::model::filter::FilterTag;
use crate::model::todo::Todo;
use crate::store::StoreError;

/// Filename of the document inside the store directory.
pub const DOCUMENT_FILE: &str = "todos.json";

/// The whole store document: todos keyed by id, in insertion order.
///
/// Queries return most-recent-first, so insertion order is the canonical
/// order everything else derives from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub todos: IndexMap<Uuid, Todo>,
}

impl Document {
    /// Run the read query: filter store-side, newest first.
    pub fn query(&self, filter: FilterTag) -> Vec<Todo> {
        self.todos
            .values()
            .rev()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect()
    }

    /// Insert a new todo. The store assigns identity and the insertion
    /// instant; new todos always start not completed.
    pub fn insert(
        &mut self,
        title: String,
        description: Option<String>,
        due_date: Option<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.todos.insert(
            id,
            Todo {
                id,
                title,
                completed: false,
                description,
                due_date,
                added: Utc::now(),
            },
        );
        id
    }

    /// Patch the completion flag. Returns false if the id is unknown.
    /// No other field is reachable through this path.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) -> bool {
        match self.todos.get_mut(&id) {
            Some(todo) => {
                todo.completed = completed;
                true
            }
            None => false,
        }
    }

    /// Remove a todo, keeping the order of the rest intact.
    /// Returns false if the id is unknown.
    pub fn remove(&mut self, id: Uuid) -> bool {
        self.todos.shift_remove(&id).is_some()
    }

    /// Remove every completed todo, returning how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|_, t| !t.completed);
        before - self.todos.len()
    }
}

/// Load the document from the store directory.
pub fn load_document(store_dir: &Path) -> Result<Document, StoreError> {
    let path = store_dir.join(DOCUMENT_FILE);
    let text = fs::read_to_string(&path).map_err(|e| StoreError::Read {
        path: path.clone(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| StoreError::Parse { path, source: e })
}

/// Save the document back to the store directory (atomic temp file + rename).
pub fn save_document(store_dir: &Path, document: &Document) -> Result<(), StoreError> {
    let path = store_dir.join(DOCUMENT_FILE);
    let content = serde_json::to_string_pretty(document)?;
    atomic_write(&path, content.as_bytes())?;
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename, so a
/// concurrent reader never observes a half-written document.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
