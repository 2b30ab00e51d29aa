use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::io::watcher::StoreWatcher;
use crate::model::filter::FilterTag;
use crate::model::todo::Todo;
use crate::store::document::{self, DOCUMENT_FILE};

/// A full ordered result set pushed for a live subscription.
pub type Snapshot = Vec<Todo>;

/// A live query handle over the store document.
///
/// `poll()` is called once per UI tick. It delivers the initial snapshot
/// on the first successful read, then a fresh snapshot whenever the
/// document changes, reported by the filesystem watcher, with a
/// modification-time check as a fallback so a missed notify event cannot
/// strand the view. Snapshots arrive whole; there is no delta protocol.
///
/// Dropping a subscription drops its watcher and channel with it: an
/// in-flight notification for a superseded subscription is simply never
/// observed (last-snapshot-wins, no cancellation).
pub struct Subscription {
    filter: FilterTag,
    store_dir: PathBuf,
    watcher: Option<StoreWatcher>,
    last_modified: Option<SystemTime>,
    delivered_initial: bool,
}

impl Subscription {
    /// Open a live query against the store directory. The subscription
    /// starts pending; nothing is read until the first poll.
    pub(crate) fn start(store_dir: &Path, filter: FilterTag) -> Subscription {
        // A watcher that fails to start degrades to mtime polling.
        let watcher = StoreWatcher::start(store_dir, DOCUMENT_FILE).ok();
        Subscription {
            filter,
            store_dir: store_dir.to_path_buf(),
            watcher,
            last_modified: None,
            delivered_initial: false,
        }
    }

    pub fn filter(&self) -> FilterTag {
        self.filter
    }

    /// Deliver a snapshot if the document changed (or has never been
    /// read). Returns None when there is nothing new, including when the
    /// document is unreadable, which leaves the subscriber on its last
    /// delivered state (or pending, forever, if there never was one).
    pub fn poll(&mut self) -> Option<Snapshot> {
        let notified = self.watcher.as_ref().is_some_and(|w| w.poll_changed());
        let modified = self.document_mtime();
        let stale = modified != self.last_modified;

        if !notified && !stale && self.delivered_initial {
            return None;
        }

        match document::load_document(&self.store_dir) {
            Ok(doc) => {
                self.delivered_initial = true;
                self.last_modified = modified;
                Some(doc.query(self.filter))
            }
            Err(_) => None,
        }
    }

    fn document_mtime(&self) -> Option<SystemTime> {
        fs::metadata(self.store_dir.join(DOCUMENT_FILE))
            .and_then(|m| m.modified())
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreClient;
    use tempfile::TempDir;

    fn temp_client() -> (TempDir, StoreClient) {
        let tmp = TempDir::new().unwrap();
        let client = StoreClient::init(tmp.path(), "test").unwrap();
        (tmp, client)
    }

    #[test]
    fn test_first_poll_delivers_initial_snapshot() {
        let (_tmp, client) = temp_client();
        client.create("hello", None, None).unwrap();

        let mut sub = client.subscribe(FilterTag::All);
        let snap = sub.poll().expect("initial snapshot");
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title, "hello");
    }

    #[test]
    fn test_quiet_store_delivers_nothing_after_initial() {
        let (_tmp, client) = temp_client();
        let mut sub = client.subscribe(FilterTag::All);

        assert!(sub.poll().is_some());
        assert!(sub.poll().is_none());
        assert!(sub.poll().is_none());
    }

    #[test]
    fn test_write_surfaces_as_fresh_snapshot() {
        let (_tmp, client) = temp_client();
        let mut sub = client.subscribe(FilterTag::All);
        assert_eq!(sub.poll().unwrap().len(), 0);

        client.create("new todo", None, None).unwrap();
        let snap = sub.poll().expect("snapshot after write");
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title, "new todo");
    }

    #[test]
    fn test_subscription_applies_its_filter() {
        let (_tmp, client) = temp_client();
        let a = client.create("open", None, None).unwrap();
        client.create("done", None, None).unwrap();
        let done_id = client.query(FilterTag::All).unwrap()[0].id;
        assert_ne!(a, done_id);
        client.set_completed(done_id, true).unwrap();

        let mut active = client.subscribe(FilterTag::Active);
        let snap = active.poll().unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title, "open");

        let mut completed = client.subscribe(FilterTag::Completed);
        let snap = completed.poll().unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].title, "done");
    }

    #[test]
    fn test_unreadable_document_stays_pending() {
        let tmp = TempDir::new().unwrap();
        let client = StoreClient::init(tmp.path(), "test").unwrap();
        let mut sub = client.subscribe(FilterTag::All);

        std::fs::remove_file(tmp.path().join(".slate").join(DOCUMENT_FILE)).unwrap();
        assert!(sub.poll().is_none());
    }
}
