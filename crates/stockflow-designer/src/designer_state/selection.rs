//! Selection operations for designer state.
//!
//! Each operation rewrites the `selected` flag on every element so that it
//! equals membership in the selection set.

use stockflow_core::ElementId;

use super::DesignerState;

impl DesignerState {
    /// Replaces the selection with `id`.
    pub fn select_element(&mut self, id: &ElementId) {
        self.selection.select(id.clone());
        self.selection.apply_to(&mut self.canvas);
    }

    /// Replaces the selection with `ids`.
    pub fn select_elements(&mut self, ids: &[ElementId]) {
        self.selection.select_many(ids.iter().cloned());
        self.selection.apply_to(&mut self.canvas);
    }

    /// Adds `id` to the selection if absent, removes it if present.
    pub fn toggle_element_selection(&mut self, id: &ElementId) {
        self.selection.toggle(id.clone());
        self.selection.apply_to(&mut self.canvas);
    }

    /// Selects every element in canvas order.
    pub fn select_all(&mut self) {
        let ids: Vec<ElementId> = self.canvas.elements().iter().map(|el| el.id.clone()).collect();
        self.selection.select_many(ids);
        self.selection.apply_to(&mut self.canvas);
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.selection.apply_to(&mut self.canvas);
    }

    /// Selected ids in selection order.
    pub fn selected_ids(&self) -> &[ElementId] {
        self.selection.ids()
    }

    pub fn is_selected(&self, id: &ElementId) -> bool {
        self.selection.contains(id)
    }
}
