//! Transient UI preference state.
//!
//! A flat record of view and tool toggles with setters that clamp numeric
//! fields to fixed ranges. There is no history: every setter takes effect
//! immediately. The only cross-field rule is that switching the view mode
//! resets the active tool to [`ToolMode::Select`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stockflow_core::{ElementType, Error};

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 5.0;
pub const MIN_GRID_SIZE: f64 = 10.0;
pub const MAX_GRID_SIZE: f64 = 100.0;
pub const MIN_SIDEBAR_WIDTH: f64 = 200.0;
pub const MAX_SIDEBAR_WIDTH: f64 = 600.0;

/// Active canvas tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolMode {
    #[default]
    Select,
    AddStock,
    AddFlow,
    AddConnector,
    AddCloud,
    Connect,
    Delete,
}

impl ToolMode {
    pub const ALL: [ToolMode; 7] = [
        Self::Select,
        Self::AddStock,
        Self::AddFlow,
        Self::AddConnector,
        Self::AddCloud,
        Self::Connect,
        Self::Delete,
    ];

    /// Element type created by an `add-*` tool.
    pub fn element_type(&self) -> Option<ElementType> {
        match self {
            Self::AddStock => Some(ElementType::Stock),
            Self::AddFlow => Some(ElementType::Flow),
            Self::AddConnector => Some(ElementType::Connector),
            Self::AddCloud => Some(ElementType::Cloud),
            Self::Select | Self::Connect | Self::Delete => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Select => "cursor-arrow",
            Self::AddStock => "square",
            Self::AddFlow => "arrow-right",
            Self::AddConnector => "circle",
            Self::AddCloud => "cloud",
            Self::Connect => "link",
            Self::Delete => "trash",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::AddStock => "Add Stock",
            Self::AddFlow => "Add Flow",
            Self::AddConnector => "Add Auxiliary",
            Self::AddCloud => "Add Cloud",
            Self::Connect => "Connect",
            Self::Delete => "Delete",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::AddStock => "add-stock",
            Self::AddFlow => "add-flow",
            Self::AddConnector => "add-connector",
            Self::AddCloud => "add-cloud",
            Self::Connect => "connect",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| Error::unknown_variant("tool mode", s))
    }
}

/// Diagram view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    #[default]
    CausalLoop,
    StockFlow,
    Analysis,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::CausalLoop, Self::StockFlow, Self::Analysis];

    pub fn label(&self) -> &'static str {
        match self {
            Self::CausalLoop => "Causal Loop Diagram",
            Self::StockFlow => "Stock and Flow Diagram",
            Self::Analysis => "Analysis",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CausalLoop => "causal-loop",
            Self::StockFlow => "stock-flow",
            Self::Analysis => "analysis",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| Error::unknown_variant("view mode", s))
    }
}

/// View, tool, and panel preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiPreferences {
    // Tools
    pub current_tool: ToolMode,
    pub toolbar_visible: bool,

    // Views and panels
    pub current_view: ViewMode,
    pub properties_panel_visible: bool,
    pub performance_test_visible: bool,
    pub debug_info_visible: bool,

    // Canvas
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub grid_visible: bool,
    pub snap_to_grid: bool,
    pub grid_size: f64,

    // Modals
    pub active_modal: Option<String>,
    pub sidebar_width: f64,

    // Diagnostics
    pub show_fps_counter: bool,
    pub performance_monitoring: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            current_tool: ToolMode::Select,
            toolbar_visible: true,
            current_view: ViewMode::CausalLoop,
            properties_panel_visible: false,
            performance_test_visible: false,
            debug_info_visible: true,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            grid_visible: false,
            snap_to_grid: false,
            grid_size: 20.0,
            active_modal: None,
            sidebar_width: 256.0,
            show_fps_counter: false,
            performance_monitoring: false,
        }
    }
}

impl UiPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_current_tool(&mut self, tool: ToolMode) {
        self.current_tool = tool;
    }

    pub fn toggle_toolbar(&mut self) {
        self.toolbar_visible = !self.toolbar_visible;
    }

    /// Switches the view mode and resets the tool to select.
    pub fn set_current_view(&mut self, view: ViewMode) {
        tracing::debug!("View changed {} -> {}", self.current_view, view);
        self.current_view = view;
        self.current_tool = ToolMode::Select;
    }

    pub fn toggle_properties_panel(&mut self) {
        self.properties_panel_visible = !self.properties_panel_visible;
    }

    pub fn toggle_performance_test(&mut self) {
        self.performance_test_visible = !self.performance_test_visible;
    }

    pub fn toggle_debug_info(&mut self) {
        self.debug_info_visible = !self.debug_info_visible;
    }

    /// Sets the zoom level, clamped to `[0.1, 5.0]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    /// Restores zoom to 1.0 and pan to the origin.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    pub fn toggle_snap_to_grid(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }

    /// Sets the grid spacing, clamped to `[10, 100]`.
    pub fn set_grid_size(&mut self, size: f64) {
        self.grid_size = size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE);
    }

    pub fn open_modal(&mut self, modal_id: impl Into<String>) {
        self.active_modal = Some(modal_id.into());
    }

    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }

    /// Sets the sidebar width, clamped to `[200, 600]`.
    pub fn set_sidebar_width(&mut self, width: f64) {
        self.sidebar_width = width.clamp(MIN_SIDEBAR_WIDTH, MAX_SIDEBAR_WIDTH);
    }

    pub fn toggle_fps_counter(&mut self) {
        self.show_fps_counter = !self.show_fps_counter;
    }

    pub fn toggle_performance_monitoring(&mut self) {
        self.performance_monitoring = !self.performance_monitoring;
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}
