pub mod client;
pub mod document;
pub mod subscription;

pub use client::{STORE_DIR, StoreClient};
pub use document::{DOCUMENT_FILE, Document};
pub use subscription::{Snapshot, Subscription};

use std::path::PathBuf;

use uuid::Uuid;

use crate::io::lock::LockError;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not a slate store: no .slate/ directory found")]
    NotAStore,
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("todo title cannot be empty")]
    EmptyTitle,
    #[error("no todo with id {0}")]
    UnknownId(Uuid),
    #[error(transparent)]
    Lock(#[from] LockError),
    #[error(transparent)]
    Config(#[from] crate::io::config_io::ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
