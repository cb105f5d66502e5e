//! Diagram elements and connections.

use serde::{Deserialize, Serialize};
use stockflow_core::{Bounds, ConnectionId, ConnectionType, ElementId, ElementType, Point, Size};

/// A shape placed on the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    /// Top-left corner
    pub position: Point,
    pub size: Size,
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Mirrors membership in the selection set; maintained by the engine.
    #[serde(default)]
    pub selected: bool,
}

impl Element {
    pub fn new(
        id: impl Into<ElementId>,
        element_type: ElementType,
        position: Point,
        size: Size,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            element_type,
            position,
            size,
            label: label.into(),
            value: 0.0,
            color: None,
            selected: false,
        }
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.position, self.size)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Explicit colour if set, otherwise the default for the element type.
    pub fn fill_color(&self) -> &str {
        self.color
            .as_deref()
            .unwrap_or_else(|| self.element_type.default_color())
    }

    /// Merges every field present in `patch` into this element.
    pub fn apply(&mut self, patch: ElementPatch) {
        if let Some(element_type) = patch.element_type {
            self.element_type = element_type;
        }
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial update for an [`Element`].
///
/// The id cannot be patched, and neither can the `selected` flag, which only
/// the selection operations may change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub element_type: Option<ElementType>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    pub label: Option<String>,
    pub value: Option<f64>,
    /// `Some(None)` clears the colour.
    pub color: Option<Option<String>>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn element_type(mut self, element_type: ElementType) -> Self {
        self.element_type = Some(element_type);
        self
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = Some(color);
        self
    }
}

/// A line between two elements.
///
/// Endpoints are weak references by id; a connection whose endpoint no longer
/// exists is kept but cannot be routed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    pub source_id: ElementId,
    pub target_id: ElementId,
    #[serde(rename = "type")]
    pub connection_type: ConnectionType,
    /// Intermediate waypoints between the two element edges
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(
        id: impl Into<ConnectionId>,
        source_id: impl Into<ElementId>,
        target_id: impl Into<ElementId>,
        connection_type: ConnectionType,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            connection_type,
            points: Vec::new(),
            label: None,
        }
    }

    pub fn with_points(mut self, points: Vec<Point>) -> Self {
        self.points = points;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// True if either endpoint is `id`.
    pub fn touches(&self, id: &ElementId) -> bool {
        &self.source_id == id || &self.target_id == id
    }

    pub fn apply(&mut self, patch: ConnectionPatch) {
        if let Some(source_id) = patch.source_id {
            self.source_id = source_id;
        }
        if let Some(target_id) = patch.target_id {
            self.target_id = target_id;
        }
        if let Some(connection_type) = patch.connection_type {
            self.connection_type = connection_type;
        }
        if let Some(points) = patch.points {
            self.points = points;
        }
        if let Some(label) = patch.label {
            self.label = label;
        }
    }
}

/// Partial update for a [`Connection`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionPatch {
    pub source_id: Option<ElementId>,
    pub target_id: Option<ElementId>,
    pub connection_type: Option<ConnectionType>,
    pub points: Option<Vec<Point>>,
    /// `Some(None)` clears the label.
    pub label: Option<Option<String>>,
}

impl ConnectionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source(mut self, id: impl Into<ElementId>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    pub fn target(mut self, id: impl Into<ElementId>) -> Self {
        self.target_id = Some(id.into());
        self
    }

    pub fn connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }

    pub fn points(mut self, points: Vec<Point>) -> Self {
        self.points = Some(points);
        self
    }

    pub fn label(mut self, label: Option<String>) -> Self {
        self.label = Some(label);
        self
    }
}
