//! Undo/redo functionality for designer state.

use super::DesignerState;
use crate::history::{ActionType, HistorySnapshot, SnapshotHistory};

impl DesignerState {
    /// Records the current graph as an explicit snapshot.
    pub fn save_snapshot(&mut self) {
        self.record(ActionType::Snapshot);
    }

    pub(crate) fn record(&mut self, action: ActionType) {
        self.history.record(HistorySnapshot::capture(&self.canvas, action));
    }

    /// Steps back one snapshot. Selection is cleared.
    pub fn undo(&mut self) {
        let Some(snapshot) = self.history.undo() else {
            return;
        };
        tracing::debug!("Undo to {} snapshot", snapshot.action);
        snapshot.restore_into(&mut self.canvas);
        self.reset_after_restore();
    }

    /// Steps forward one snapshot. Selection is cleared.
    pub fn redo(&mut self) {
        let Some(snapshot) = self.history.redo() else {
            return;
        };
        tracing::debug!("Redo to {} snapshot", snapshot.action);
        snapshot.restore_into(&mut self.canvas);
        self.reset_after_restore();
    }

    fn reset_after_restore(&mut self) {
        self.drag = None;
        self.selection.clear();
        self.selection.apply_to(&mut self.canvas);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.history.redo_description()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Cursor position, `None` while the history is empty.
    pub fn history_index(&self) -> Option<usize> {
        self.history.index()
    }
}
