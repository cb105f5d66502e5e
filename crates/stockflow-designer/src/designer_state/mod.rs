//! Designer state manager for UI integration.
//! Owns the diagram graph and every piece of editing state around it.
//!
//! This module is split into submodules for better organization:
//! - `elements`: Element add, update, move, remove
//! - `connections`: Connection add, update, remove, routing
//! - `selection`: Selection operations
//! - `history`: Snapshots, undo/redo
//! - `clipboard`: Copy and paste
//!
//! Every operation is total: an unknown id makes a mutation a no-op and a
//! lookup return `None`. Discrete actions (add, remove, paste, clear) record a
//! history snapshot; continuous ones (move, update, selection) do not.

mod clipboard;
mod connections;
mod elements;
mod history;
mod selection;

use stockflow_core::{ElementId, Point};
use stockflow_settings::EditorConfig;

use crate::canvas::Canvas;
use crate::clipboard::Clipboard;
use crate::history::{ActionType, SnapshotHistory};
use crate::model::{Connection, Element};
use crate::selection_manager::SelectionManager;

/// Element being dragged and where it started.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DragState {
    pub(crate) id: ElementId,
    pub(crate) origin: Point,
}

/// Diagram state engine
#[derive(Debug, Clone)]
pub struct DesignerState {
    pub(crate) canvas: Canvas,
    pub(crate) selection: SelectionManager,
    pub(crate) history: SnapshotHistory,
    pub(crate) clipboard: Option<Clipboard>,
    pub(crate) config: EditorConfig,
    pub(crate) drag: Option<DragState>,
}

impl DesignerState {
    /// Creates an empty diagram with default configuration.
    ///
    /// History starts empty: the first recorded action becomes the oldest
    /// state undo can return to.
    pub fn new() -> Self {
        Self::with_config(&EditorConfig::default())
    }

    /// Creates an empty diagram using the given tunables.
    pub fn with_config(config: &EditorConfig) -> Self {
        Self {
            canvas: Canvas::new(),
            selection: SelectionManager::new(),
            history: SnapshotHistory::new(config.history_limit),
            clipboard: None,
            config: config.clone(),
            drag: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Elements in draw order.
    pub fn elements(&self) -> &[Element] {
        self.canvas.elements()
    }

    /// Connections in draw order.
    pub fn connections(&self) -> &[Connection] {
        self.canvas.connections()
    }

    pub fn element_count(&self) -> usize {
        self.canvas.element_count()
    }

    pub fn connection_count(&self) -> usize {
        self.canvas.connection_count()
    }

    /// Empties the graph, selection, and clipboard. Recorded in history so it
    /// can be undone.
    pub fn clear(&mut self) {
        tracing::debug!(
            "Clearing diagram ({} elements, {} connections)",
            self.canvas.element_count(),
            self.canvas.connection_count()
        );
        self.canvas.clear();
        self.selection.clear();
        self.clipboard = None;
        self.drag = None;
        self.record(ActionType::Clear);
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
