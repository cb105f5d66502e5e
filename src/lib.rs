//! # Stockflow
//!
//! State engine for interactive system-dynamics (stock-and-flow) diagram
//! editors. A UI layer renders what this crate holds and forwards user input
//! to it.
//!
//! ## Architecture
//!
//! Stockflow is organized as a workspace with multiple crates:
//!
//! 1. **stockflow-core** - Geometry, identifiers, element and connection kinds
//! 2. **stockflow-settings** - Editor configuration and UI preference state
//! 3. **stockflow-designer** - Diagram graph, selection, clipboard, undo/redo
//! 4. **stockflow** - Facade re-exporting the above plus logging setup
//!
//! ## Features
//!
//! - **Diagram Graph**: Stocks, flows, connectors, and clouds joined by flow
//!   and connector links, with cascading delete
//! - **Undo/Redo**: Bounded snapshot history of discrete actions
//! - **Clipboard**: Copy and paste with fresh ids and remapped connections
//! - **Connector Anchoring**: Lines start and end on element edges
//! - **Input Mapping**: Keyboard shortcuts, clicks, and drags

pub use stockflow_designer as designer;
pub use stockflow_settings as settings;

pub use stockflow_core::{
    Bounds, ConnectionId, ConnectionType, ElementId, ElementType, Error, Point, Result, Size,
};

pub use stockflow_designer::{
    ActionType, Canvas, Clipboard, Connection, ConnectionPatch, DesignerState, EditorAction,
    Element, ElementPatch, HistorySnapshot, Key, KeyChord, SelectionManager, SnapshotHistory,
    connection_route, edge_point,
};

pub use stockflow_settings::{EditorConfig, SettingsError, ToolMode, UiPreferences, ViewMode};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

fn env_filter() -> tracing_subscriber::EnvFilter {
    tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, defaulting to `info`
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("Stockflow {} (built {})", VERSION, BUILD_DATE);
    Ok(())
}

/// Initialize logging with one JSON object per event, for hosts that ship
/// logs to a collector.
pub fn init_json_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_current_span(false))
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    Ok(())
}
