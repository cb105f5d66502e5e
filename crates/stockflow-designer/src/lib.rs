//! # Stockflow Designer
//!
//! State engine behind the stock-and-flow diagram editor. It owns the
//! diagram graph and all editing state around it, and exposes a
//! framework-agnostic API that a UI layer drives.
//!
//! ## Core Components
//!
//! - **Model**: Elements (stocks, flows, connectors, clouds) and the
//!   connections between them
//! - **Canvas**: Ordered element and connection storage with cascading delete
//! - **Selection**: Selected ids kept in sync with each element's flag
//! - **History**: Bounded snapshot history for undo/redo
//! - **Clipboard**: Copy/paste of a selection and its internal connections
//! - **Geometry**: Edge anchoring for connection lines
//! - **Interaction**: Keyboard shortcuts, clicks, and drags
//!
//! ## Architecture
//!
//! ```text
//! DesignerState
//!   ├── Canvas (elements, connections)
//!   ├── SelectionManager
//!   ├── SnapshotHistory
//!   └── Clipboard
//! ```
//!
//! Discrete actions (add, remove, paste, clear, end of a drag) record a
//! snapshot; continuous ones (move, update, selection changes) do not.

pub mod canvas;
pub mod clipboard;
pub mod designer_state;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod model;
pub mod selection_manager;

pub use canvas::Canvas;
pub use clipboard::Clipboard;
pub use designer_state::DesignerState;
pub use geometry::{connection_route, edge_point};
pub use history::{ActionType, HistorySnapshot, SnapshotHistory};
pub use interaction::{EditorAction, Key, KeyChord};
pub use model::{Connection, ConnectionPatch, Element, ElementPatch};
pub use selection_manager::SelectionManager;

pub use stockflow_core::{
    Bounds, ConnectionId, ConnectionType, ElementId, ElementType, Point, Size,
};
