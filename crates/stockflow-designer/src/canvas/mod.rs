//! Canvas holding the element and connection graph.
//!
//! Elements and connections are kept in insertion order, which is also draw
//! order: connections are drawn beneath elements, later elements on top of
//! earlier ones.

mod operations;

use stockflow_core::{ConnectionId, ElementId};

use crate::model::{Connection, Element};

/// Ordered element and connection collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    elements: Vec<Element>,
    connections: Vec<Connection>,
}

impl Canvas {
    /// Creates an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty() && self.connections.is_empty()
    }

    /// Gets a reference to an element by ID.
    pub fn get_element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| &el.id == id)
    }

    /// Gets a mutable reference to an element by ID.
    pub fn get_element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| &el.id == id)
    }

    /// Gets a reference to a connection by ID.
    pub fn get_connection(&self, id: &ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|conn| &conn.id == id)
    }

    /// Gets a mutable reference to a connection by ID.
    pub fn get_connection_mut(&mut self, id: &ConnectionId) -> Option<&mut Connection> {
        self.connections.iter_mut().find(|conn| &conn.id == id)
    }

    pub fn contains_element(&self, id: &ElementId) -> bool {
        self.get_element(id).is_some()
    }
}
