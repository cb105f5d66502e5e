//! Snapshot-based undo/redo history.
//!
//! Every discrete editing action records an independent deep copy of the
//! element and connection collections. Undo and redo move a cursor over the
//! recorded snapshots; recording after an undo discards the forward entries.
//! Only the newest `max_depth` snapshots are retained.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::model::{Connection, Element};

/// The kind of action that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    ElementAdded,
    ElementRemoved,
    ElementMoved,
    ConnectionAdded,
    ConnectionRemoved,
    Paste,
    Clear,
    /// Explicit snapshot requested by the caller
    Snapshot,
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementAdded => write!(f, "Add Element"),
            Self::ElementRemoved => write!(f, "Remove Element"),
            Self::ElementMoved => write!(f, "Move Element"),
            Self::ConnectionAdded => write!(f, "Add Connection"),
            Self::ConnectionRemoved => write!(f, "Remove Connection"),
            Self::Paste => write!(f, "Paste"),
            Self::Clear => write!(f, "Clear Diagram"),
            Self::Snapshot => write!(f, "Snapshot"),
        }
    }
}

/// Immutable copy of the graph at one point in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub elements: Vec<Element>,
    pub connections: Vec<Connection>,
    pub timestamp: DateTime<Utc>,
    pub action: ActionType,
}

impl HistorySnapshot {
    /// Deep-copies the canvas graph.
    pub fn capture(canvas: &Canvas, action: ActionType) -> Self {
        Self {
            elements: canvas.elements().to_vec(),
            connections: canvas.connections().to_vec(),
            timestamp: Utc::now(),
            action,
        }
    }

    /// Overwrites the canvas graph with a deep copy of this snapshot.
    pub fn restore_into(&self, canvas: &mut Canvas) {
        canvas.replace(self.elements.clone(), self.connections.clone());
    }
}

/// Linear snapshot history with a bounded depth.
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: VecDeque<HistorySnapshot>,
    /// Cursor into `snapshots`; `None` only while empty
    index: Option<usize>,
    max_depth: usize,
}

impl SnapshotHistory {
    /// Creates an empty history retaining at most `max_depth` snapshots.
    ///
    /// A depth of zero is treated as one.
    pub fn new(max_depth: usize) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(max_depth.min(64)),
            index: None,
            max_depth: max_depth.max(1),
        }
    }

    /// Records a snapshot after the cursor, discarding any redo entries and
    /// evicting the oldest entries beyond the depth limit.
    pub fn record(&mut self, snapshot: HistorySnapshot) {
        match self.index {
            Some(index) => self.snapshots.truncate(index + 1),
            None => self.snapshots.clear(),
        }

        self.snapshots.push_back(snapshot);

        while self.snapshots.len() > self.max_depth {
            self.snapshots.pop_front();
            tracing::trace!("History full, evicted oldest snapshot");
        }

        self.index = Some(self.snapshots.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        self.index.is_some_and(|index| index > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.index.is_some_and(|index| index + 1 < self.snapshots.len())
    }

    /// Moves the cursor back one entry and returns the snapshot there.
    pub fn undo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_undo() {
            return None;
        }
        let index = self.index? - 1;
        self.index = Some(index);
        self.snapshots.get(index)
    }

    /// Moves the cursor forward one entry and returns the snapshot there.
    pub fn redo(&mut self) -> Option<&HistorySnapshot> {
        if !self.can_redo() {
            return None;
        }
        let index = self.index? + 1;
        self.index = Some(index);
        self.snapshots.get(index)
    }

    /// Snapshot under the cursor.
    pub fn current(&self) -> Option<&HistorySnapshot> {
        self.index.and_then(|index| self.snapshots.get(index))
    }

    /// Action that undo would revert.
    pub fn undo_description(&self) -> Option<String> {
        if !self.can_undo() {
            return None;
        }
        self.current().map(|snapshot| snapshot.action.to_string())
    }

    /// Action that redo would replay.
    pub fn redo_description(&self) -> Option<String> {
        if !self.can_redo() {
            return None;
        }
        self.index
            .and_then(|index| self.snapshots.get(index + 1))
            .map(|snapshot| snapshot.action.to_string())
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn snapshots(&self) -> impl Iterator<Item = &HistorySnapshot> {
        self.snapshots.iter()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.index = None;
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(stockflow_settings::config::DEFAULT_HISTORY_LIMIT)
    }
}
