use crate::model::todo::Todo;
use crate::store::subscription::Snapshot;

/// The reconciled remote list, or the "not yet loaded" sentinel.
///
/// Pending is distinct from an empty list: the UI shows a loading
/// indicator for one and "No todos yet." for the other.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded(Vec<Todo>),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn todos(&self) -> Option<&[Todo]> {
        match self {
            LoadState::Pending => None,
            LoadState::Loaded(todos) => Some(todos),
        }
    }
}

/// Merges push-delivered remote snapshots with transient local view state.
///
/// The policy is snapshot-replace-wins: every delivered snapshot replaces
/// the held list wholesale, and any local-only reordering done since the
/// last snapshot is discarded with it. The store is authoritative and may
/// carry writes from other sessions; merging by id would resurrect stale
/// positions. Reorder is therefore cosmetic: it issues no write and
/// survives only until the next delivery.
#[derive(Debug, Default)]
pub struct Reconciler {
    state: LoadState,
}

impl Reconciler {
    pub fn new() -> Self {
        Reconciler {
            state: LoadState::Pending,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn todos(&self) -> Option<&[Todo]> {
        self.state.todos()
    }

    /// Replace the held list with a freshly delivered snapshot.
    pub fn apply(&mut self, snapshot: Snapshot) {
        self.state = LoadState::Loaded(snapshot);
    }

    /// Back to pending, used when the filter tag changes and a new
    /// subscription takes over.
    pub fn reset(&mut self) {
        self.state = LoadState::Pending;
    }

    /// Move the item at `from` to position `to`, locally only.
    /// Returns false (and changes nothing) while pending or when either
    /// index is out of range. The held list stays a permutation of the
    /// last snapshot.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let LoadState::Loaded(todos) = &mut self.state else {
            return false;
        };
        if from >= todos.len() || to >= todos.len() {
            return false;
        }
        let item = todos.remove(from);
        todos.insert(to, item);
        true
    }
}
