//! Element operations for designer state.

use stockflow_core::{ElementId, Point};

use super::DesignerState;
use crate::history::ActionType;
use crate::model::{Element, ElementPatch};

impl DesignerState {
    /// Appends an element and records a snapshot.
    ///
    /// Ids are not deduplicated; keeping them unique is the caller's job. The
    /// incoming `selected` flag is overwritten from the selection set.
    pub fn add_element(&mut self, mut element: Element) {
        tracing::debug!("Adding {} element {}", element.element_type, element.id);
        element.selected = self.selection.contains(&element.id);
        self.canvas.push_element(element);
        self.record(ActionType::ElementAdded);
    }

    /// Merges the fields present in `patch` into the element. No snapshot.
    pub fn update_element(&mut self, id: &ElementId, patch: ElementPatch) {
        match self.canvas.get_element_mut(id) {
            Some(element) => element.apply(patch),
            None => tracing::trace!("update_element: no element {}", id),
        }
    }

    /// Removes the element, every connection touching it, and its selection
    /// entry. Records a snapshot even if the id is unknown.
    pub fn remove_element(&mut self, id: &ElementId) {
        let (elements, connections) = self.canvas.remove_element_cascade(id);
        tracing::debug!(
            "Removed element {} ({} removed, {} connections cascaded)",
            id,
            elements,
            connections
        );
        self.selection.remove(id);
        if self.drag.as_ref().is_some_and(|drag| &drag.id == id) {
            self.drag = None;
        }
        self.record(ActionType::ElementRemoved);
    }

    /// Sets the element's position without recording a snapshot, so drags do
    /// not flood the history.
    pub fn move_element(&mut self, id: &ElementId, position: Point) {
        if !self.canvas.set_position(id, position) {
            tracing::trace!("move_element: no element {}", id);
        }
    }

    /// Removes every selected element, one snapshot per element.
    pub fn delete_selected(&mut self) {
        let ids: Vec<ElementId> = self
            .selected_elements()
            .into_iter()
            .map(|el| el.id.clone())
            .collect();
        for id in ids {
            self.remove_element(&id);
        }
    }

    /// Point lookup; `None` if absent.
    pub fn get_element(&self, id: &ElementId) -> Option<&Element> {
        self.canvas.get_element(id)
    }

    /// Selected elements in canvas order.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selection.selected_elements(&self.canvas)
    }
}
