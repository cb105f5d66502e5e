//! Canvas mutations: insertion, removal with cascading, and bulk restore.

use stockflow_core::{ConnectionId, ElementId, Point};

use super::Canvas;
use crate::model::{Connection, Element};

impl Canvas {
    /// Appends an element. Ids are not checked for uniqueness.
    pub fn push_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Appends a connection. Endpoints are not checked.
    pub fn push_connection(&mut self, connection: Connection) {
        self.connections.push(connection);
    }

    /// Removes every element with `id` and every connection touching it.
    ///
    /// Returns `(elements_removed, connections_removed)`.
    pub fn remove_element_cascade(&mut self, id: &ElementId) -> (usize, usize) {
        let elements_before = self.elements.len();
        self.elements.retain(|el| &el.id != id);

        let connections_before = self.connections.len();
        self.connections.retain(|conn| !conn.touches(id));

        (
            elements_before - self.elements.len(),
            connections_before - self.connections.len(),
        )
    }

    /// Removes every connection with `id`, returning how many were removed.
    pub fn remove_connection(&mut self, id: &ConnectionId) -> usize {
        let before = self.connections.len();
        self.connections.retain(|conn| &conn.id != id);
        before - self.connections.len()
    }

    /// Sets an element's position. Returns false if the id is unknown.
    pub fn set_position(&mut self, id: &ElementId, position: Point) -> bool {
        match self.get_element_mut(id) {
            Some(element) => {
                element.position = position;
                true
            }
            None => false,
        }
    }

    /// Appends a batch of elements and connections.
    pub fn extend(&mut self, elements: Vec<Element>, connections: Vec<Connection>) {
        self.elements.extend(elements);
        self.connections.extend(connections);
    }

    /// Replaces the whole graph.
    pub fn replace(&mut self, elements: Vec<Element>, connections: Vec<Connection>) {
        self.elements = elements;
        self.connections = connections;
    }

    /// Removes every element and connection.
    pub fn clear(&mut self) {
        self.elements.clear();
        self.connections.clear();
    }

    pub(crate) fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }
}
