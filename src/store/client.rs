use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::io::config_io;
use crate::io::lock::StoreLock;
use crate::model::filter::FilterTag;
use crate::store::document::{self, DOCUMENT_FILE, Document};
use crate::store::subscription::Subscription;
use crate::store::StoreError;

/// Name of the store directory discovered under a root.
pub const STORE_DIR: &str = ".slate";

/// Long-lived handle to the document store.
///
/// This is the core's only collaborator boundary: reads go through
/// [`Subscription`]s, writes through the mutation methods below. Each
/// mutation is lock → load → mutate → save; subscribers pick the change
/// up on their next poll, so callers never wait for the UI to reflect it.
pub struct StoreClient {
    store_dir: PathBuf,
}

impl StoreClient {
    /// Discover the store root by walking up from the given directory,
    /// looking for a `.slate/` directory holding a document.
    pub fn discover(start: &Path) -> Result<PathBuf, StoreError> {
        let mut current = start.to_path_buf();
        loop {
            let store_dir = current.join(STORE_DIR);
            if store_dir.is_dir() && store_dir.join(DOCUMENT_FILE).exists() {
                return Ok(current);
            }
            if !current.pop() {
                return Err(StoreError::NotAStore);
            }
        }
    }

    /// Open the store under the given root directory.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        let store_dir = root.join(STORE_DIR);
        if !store_dir.is_dir() || !store_dir.join(DOCUMENT_FILE).exists() {
            return Err(StoreError::NotAStore);
        }
        Ok(StoreClient { store_dir })
    }

    /// Create a fresh store under `root`: the `.slate/` directory, an
    /// empty document, and the initial config.
    pub fn init(root: &Path, name: &str) -> Result<Self, StoreError> {
        let store_dir = root.join(STORE_DIR);
        fs::create_dir_all(&store_dir)?;
        document::save_document(&store_dir, &Document::default())?;
        config_io::write_initial_config(&store_dir, name)?;
        Ok(StoreClient { store_dir })
    }

    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Open a live query for the given filter tag. The subscription is
    /// pending until its first poll delivers a snapshot.
    pub fn subscribe(&self, filter: FilterTag) -> Subscription {
        Subscription::start(&self.store_dir, filter)
    }

    /// Create a new todo. The trimmed title must be non-empty; optional
    /// fields pass through verbatim, empty strings included. Returns the
    /// store-assigned id.
    pub fn create(
        &self,
        title: &str,
        description: Option<String>,
        due_date: Option<String>,
    ) -> Result<Uuid, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        self.mutate(|doc| Ok(doc.insert(title.to_string(), description, due_date)))
    }

    /// Set the completion flag of a todo. No other field is updatable
    /// through this path.
    pub fn set_completed(&self, id: Uuid, completed: bool) -> Result<(), StoreError> {
        self.mutate(|doc| {
            if doc.set_completed(id, completed) {
                Ok(())
            } else {
                Err(StoreError::UnknownId(id))
            }
        })
    }

    /// Delete a todo by id.
    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.mutate(|doc| {
            if doc.remove(id) {
                Ok(())
            } else {
                Err(StoreError::UnknownId(id))
            }
        })
    }

    /// Remove every completed todo in one request. Returns the count of
    /// removed items.
    pub fn clear_completed(&self) -> Result<usize, StoreError> {
        self.mutate(|doc| Ok(doc.clear_completed()))
    }

    /// One-shot read outside any subscription (used by the CLI).
    pub fn query(&self, filter: FilterTag) -> Result<Vec<crate::model::todo::Todo>, StoreError> {
        Ok(document::load_document(&self.store_dir)?.query(filter))
    }

    /// Run a mutation under the store lock: load, apply, save.
    /// The document is not rewritten if the mutation fails.
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Document) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _lock = StoreLock::acquire_default(&self.store_dir)?;
        let mut doc = document::load_document(&self.store_dir)?;
        let out = f(&mut doc)?;
        document::save_document(&self.store_dir, &doc)?;
        Ok(out)
    }
}
