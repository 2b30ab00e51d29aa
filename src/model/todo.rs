use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do document as held in the shared store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque identity assigned by the store on insert. Never edited by a client.
    pub id: Uuid,
    /// Display title. The store refuses blank titles.
    pub title: String,
    /// Completion flag. The only field ever mutated after creation.
    #[serde(default)]
    pub completed: bool,
    /// Optional free-form description, stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional due date, an opaque display string stored verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Insertion instant, stamped by the store. Drives document order.
    pub added: DateTime<Utc>,
}

impl Todo {
    /// Short display form of the id (first 8 hex digits).
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }
}
