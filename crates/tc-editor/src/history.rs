//! Undo/redo history.
//!
//! Two stacks of full element-list snapshots: `past` for undo and
//! `future` for redo. Undo and redo hand back the snapshot that becomes
//! the new current list; the caller restores it into the store.
//!
//! Drag moves never enter the history. Only commits do.
//!
//! ## Modes
//!
//! | | Conventional | Legacy |
//! |---|---|---|
//! | Commit pushes | pre-commit list | post-commit list |
//! | Commit clears redo | yes | no |
//! | Undo yields | popped snapshot | popped snapshot minus its last element |
//! | Redo pushes onto past | pre-redo list | the redone snapshot |

use tc_core::config::HistoryMode;
use tc_core::model::Element;
use tc_core::store::Snapshot;

pub struct HistoryTracker {
    past: Vec<Snapshot>,
    future: Vec<Snapshot>,
    mode: HistoryMode,
    /// Maximum undo depth.
    max_depth: usize,
}

impl HistoryTracker {
    pub fn new(mode: HistoryMode, max_depth: usize) -> Self {
        Self {
            past: Vec::with_capacity(max_depth.min(64)),
            future: Vec::new(),
            mode,
            max_depth,
        }
    }

    pub fn mode(&self) -> HistoryMode {
        self.mode
    }

    /// Record a commit. `before` is the list prior to the commit and
    /// `after` the list including the new element.
    pub fn record_commit(&mut self, before: Snapshot, after: &[Element]) {
        match self.mode {
            HistoryMode::Conventional => {
                self.push_past(before);
                self.future.clear();
            }
            HistoryMode::Legacy => self.push_past(after.to_vec()),
        }
    }

    /// Step back. Returns the new current list, or `None` (no change)
    /// when there is nothing to undo.
    pub fn undo(&mut self, current: &[Element]) -> Option<Snapshot> {
        let mut previous = self.past.pop()?;
        self.future.push(current.to_vec());
        if self.mode == HistoryMode::Legacy {
            previous.pop();
        }
        log::debug!(
            "undo: {} past, {} future",
            self.past.len(),
            self.future.len()
        );
        Some(previous)
    }

    /// Step forward. Returns the new current list, or `None` (no change)
    /// when there is nothing to redo.
    pub fn redo(&mut self, current: &[Element]) -> Option<Snapshot> {
        let next = self.future.pop()?;
        match self.mode {
            HistoryMode::Conventional => self.push_past(current.to_vec()),
            HistoryMode::Legacy => self.push_past(next.clone()),
        }
        log::debug!(
            "redo: {} past, {} future",
            self.past.len(),
            self.future.len()
        );
        Some(next)
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    pub fn past_len(&self) -> usize {
        self.past.len()
    }

    pub fn future_len(&self) -> usize {
        self.future.len()
    }

    fn push_past(&mut self, snapshot: Snapshot) {
        self.past.push(snapshot);
        if self.past.len() > self.max_depth {
            self.past.remove(0);
        }
    }
}
