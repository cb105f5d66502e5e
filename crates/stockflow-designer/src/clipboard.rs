//! Single-slot clipboard for copy and paste.

use std::collections::{HashMap, HashSet};

use stockflow_core::ElementId;

use crate::canvas::Canvas;
use crate::model::{Connection, Element};
use crate::selection_manager::SelectionManager;

/// Deep copies of a set of elements plus the connections fully inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct Clipboard {
    elements: Vec<Element>,
    connections: Vec<Connection>,
}

impl Clipboard {
    /// Copies the selected elements and every connection whose source and
    /// target are both selected.
    ///
    /// Returns `None` when no existing element is selected.
    pub fn capture(canvas: &Canvas, selection: &SelectionManager) -> Option<Self> {
        let elements: Vec<Element> = selection
            .selected_elements(canvas)
            .into_iter()
            .cloned()
            .collect();
        if elements.is_empty() {
            return None;
        }

        let selected: HashSet<&ElementId> = selection.ids().iter().collect();
        let connections = canvas
            .connections()
            .iter()
            .filter(|conn| selected.contains(&conn.source_id) && selected.contains(&conn.target_id))
            .cloned()
            .collect();

        Some(Self {
            elements,
            connections,
        })
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Produces fresh copies with new ids, offset by `(dx, dy)`.
    ///
    /// Connection endpoints are remapped to the new element ids; a connection
    /// whose endpoint has no mapping is dropped. The clipboard itself is left
    /// untouched so it can be pasted again.
    pub fn instantiate(&self, dx: f64, dy: f64) -> (Vec<Element>, Vec<Connection>) {
        let mut id_map: HashMap<&ElementId, ElementId> =
            HashMap::with_capacity(self.elements.len());

        let elements: Vec<Element> = self
            .elements
            .iter()
            .map(|element| {
                let new_id = element.id.copy_of();
                id_map.insert(&element.id, new_id.clone());

                let mut copy = element.clone();
                copy.id = new_id;
                copy.position = element.position.offset(dx, dy);
                copy.selected = false;
                copy
            })
            .collect();

        let connections: Vec<Connection> = self
            .connections
            .iter()
            .filter_map(|conn| {
                let (Some(source), Some(target)) =
                    (id_map.get(&conn.source_id), id_map.get(&conn.target_id))
                else {
                    tracing::warn!("Dropping pasted connection {} with unmapped endpoint", conn.id);
                    return None;
                };

                let mut copy = conn.clone();
                copy.id = conn.id.copy_of();
                copy.source_id = source.clone();
                copy.target_id = target.clone();
                Some(copy)
            })
            .collect();

        (elements, connections)
    }
}
