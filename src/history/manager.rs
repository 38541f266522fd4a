//! Linear undo/redo over board snapshots.
//!
//! ## State
//!
//! - `past`: older to newer snapshots that `undo` can return to
//! - `future`: snapshots `redo` can return to, most recent undo last
//! - `offset`: the latest checkpoint, staged but not yet pushed to `past`
//!
//! ## Lifecycle
//!
//! The session records a checkpoint before each turn (`record_before_turn`).
//! While the player undoes and redoes, the live board moves between
//! snapshots. When the player commits to a new move (`commit_next`), the
//! staged checkpoint becomes permanent and the redo branch is discarded.

use tracing::debug;

use crate::core::{Board, Snapshot};

/// Undo/redo stacks plus one staged checkpoint.
#[derive(Clone, Debug, Default)]
pub struct HistoryManager {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    offset: Option<Snapshot>,
}

impl HistoryManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a checkpoint, moving any previously staged one into `past`.
    pub fn record_before_turn(&mut self, snapshot: Snapshot) {
        if let Some(previous) = self.offset.replace(snapshot) {
            self.past.push(previous);
        }
    }

    /// Step back one snapshot.
    ///
    /// The live board is saved to `future` and replaced by the newest
    /// `past` snapshot. Returns false (and changes nothing) when `past` is
    /// empty.
    pub fn undo(&mut self, board: &mut Board) -> bool {
        let Some(previous) = self.past.pop() else {
            debug!("nothing to undo");
            return false;
        };
        self.future.push(board.snapshot());
        board.restore(&previous);
        self.offset = Some(previous);
        debug!(turn = board.turn(), past = self.past.len(), future = self.future.len(), "undo");
        true
    }

    /// Step forward one snapshot.
    ///
    /// The live board is saved to `past` and replaced by the newest
    /// `future` snapshot. Returns false (and changes nothing) when
    /// `future` is empty.
    pub fn redo(&mut self, board: &mut Board) -> bool {
        let Some(next) = self.future.pop() else {
            debug!("nothing to redo");
            return false;
        };
        self.past.push(board.snapshot());
        board.restore(&next);
        self.offset = Some(next);
        debug!(turn = board.turn(), past = self.past.len(), future = self.future.len(), "redo");
        true
    }

    /// Commit to a new move from the current state: the staged checkpoint
    /// joins `past` and the redo branch is discarded.
    pub fn commit_next(&mut self) {
        if let Some(offset) = self.offset.take() {
            self.past.push(offset);
        }
        self.future.clear();
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// The staged checkpoint, if any.
    #[must_use]
    pub fn offset(&self) -> Option<&Snapshot> {
        self.offset.as_ref()
    }
}
