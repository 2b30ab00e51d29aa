use std::path::Path;
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// A filesystem watcher for the store document.
///
/// Fires whenever `todos.json` is created, modified, or removed in the
/// store directory, by this process or any other. Drained from the UI
/// event loop; the notify callback thread only ever touches the channel.
pub struct StoreWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<()>,
}

impl StoreWatcher {
    /// Start watching the given store directory for document changes.
    pub fn start(store_dir: &Path, document_file: &str) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let document_file = document_file.to_string();

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };

                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }

                let relevant = event.paths.iter().any(|p| {
                    p.file_name().and_then(|n| n.to_str()) == Some(document_file.as_str())
                });
                if relevant {
                    let _ = tx.send(());
                }
            },
            Config::default(),
        )?;

        watcher.watch(store_dir, RecursiveMode::NonRecursive)?;
        Ok(StoreWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking drain of pending change notifications.
    /// Returns true if the document changed since the last poll.
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while self.rx.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}
