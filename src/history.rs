//! Linear undo/redo history over full board snapshots.
//!
//! History holds a list of snapshots and a cursor. Committing after an undo
//! discards everything past the cursor; there is no branching.

use crate::types::CanvasItem;
use std::sync::Arc;

/// An immutable, shareable copy of the full item sequence.
pub type Snapshot = Arc<Vec<CanvasItem>>;

#[derive(Debug)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    /// Maximum number of snapshots kept; oldest are dropped first
    limit: Option<usize>,
}

impl History {
    /// Start a history whose base state is `initial`.
    pub fn new(initial: Snapshot) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|&l| l > 0);
        self.enforce_limit();
        self
    }

    /// Record `snapshot` as the new current state.
    ///
    /// Committing the snapshot already at the cursor (same allocation) is a
    /// no-op, so redundant commits never create empty undo steps.
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if Arc::ptr_eq(&self.snapshots[self.cursor], &snapshot) {
            return false;
        }

        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;
        self.enforce_limit();
        tracing::debug!(
            cursor = self.cursor,
            len = self.snapshots.len(),
            "History commit"
        );
        true
    }

    fn enforce_limit(&mut self) {
        if let Some(limit) = self.limit {
            if self.snapshots.len() > limit {
                let excess = self.snapshots.len() - limit;
                self.snapshots.drain(..excess);
                self.cursor = self.cursor.saturating_sub(excess);
            }
        }
    }

    /// Step back, returning the snapshot to restore.
    pub fn undo(&mut self) -> Option<Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Step forward, returning the snapshot to restore.
    pub fn redo(&mut self) -> Option<Snapshot> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Snapshot at the cursor.
    pub fn current(&self) -> Snapshot {
        Arc::clone(&self.snapshots[self.cursor])
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
