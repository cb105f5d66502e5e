use std::collections::HashSet;

use stockflow_core::ElementId;

use crate::canvas::Canvas;
use crate::model::Element;

/// Manages the ordered selection set.
///
/// `SelectionManager` is responsible for:
/// - Tracking which element ids are selected, in the order they were selected
/// - Keeping each element's `selected` flag equal to membership in the set
///
/// # Selection Model
///
/// - **Single selection**: replaces the set with one id
/// - **Multiple selection**: replaces the set with a list of ids (duplicates dropped)
/// - **Toggle**: adds or removes one id, leaving the order of the others intact
///
/// The set may hold ids that do not resolve to an element; such ids are inert
/// and never appear in [`SelectionManager::selected_elements`].
///
/// # Design
///
/// The manager does not own elements. After changing the set, callers run
/// [`SelectionManager::apply_to`] to rewrite the flags on the canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionManager {
    selected_ids: Vec<ElementId>,
}

impl SelectionManager {
    /// Creates a new `SelectionManager` with no selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use stockflow_designer::selection_manager::SelectionManager;
    ///
    /// let manager = SelectionManager::new();
    /// assert!(manager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            selected_ids: Vec::new(),
        }
    }

    /// Selected ids in selection order.
    pub fn ids(&self) -> &[ElementId] {
        &self.selected_ids
    }

    pub fn len(&self) -> usize {
        self.selected_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected_ids.is_empty()
    }

    pub fn contains(&self, id: &ElementId) -> bool {
        self.selected_ids.contains(id)
    }

    /// Replaces the selection with a single id.
    pub fn select(&mut self, id: ElementId) {
        self.selected_ids.clear();
        self.selected_ids.push(id);
    }

    /// Replaces the selection with `ids`, keeping the first occurrence of any
    /// duplicate.
    pub fn select_many<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = ElementId>,
    {
        self.selected_ids.clear();
        let mut seen = HashSet::new();
        for id in ids {
            if seen.insert(id.clone()) {
                self.selected_ids.push(id);
            }
        }
    }

    /// Adds `id` if absent, removes it if present.
    ///
    /// # Returns
    ///
    /// `true` if the id is selected after the call.
    pub fn toggle(&mut self, id: ElementId) -> bool {
        if let Some(pos) = self.selected_ids.iter().position(|s| s == &id) {
            self.selected_ids.remove(pos);
            false
        } else {
            self.selected_ids.push(id);
            true
        }
    }

    /// Drops `id` from the selection if present.
    pub fn remove(&mut self, id: &ElementId) {
        self.selected_ids.retain(|s| s != id);
    }

    pub fn clear(&mut self) {
        self.selected_ids.clear();
    }

    /// Rewrites every element's `selected` flag to match the set.
    pub fn apply_to(&self, canvas: &mut Canvas) {
        let selected: HashSet<&ElementId> = self.selected_ids.iter().collect();
        for element in canvas.elements_mut() {
            element.selected = selected.contains(&element.id);
        }
    }

    /// Elements whose ids are selected, in canvas order.
    pub fn selected_elements<'a>(&self, canvas: &'a Canvas) -> Vec<&'a Element> {
        let selected: HashSet<&ElementId> = self.selected_ids.iter().collect();
        canvas
            .elements()
            .iter()
            .filter(|el| selected.contains(&el.id))
            .collect()
    }
}
