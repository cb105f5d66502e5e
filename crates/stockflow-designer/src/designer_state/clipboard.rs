//! Copy and paste for designer state.

use stockflow_core::ElementId;

use super::DesignerState;
use crate::clipboard::Clipboard;
use crate::history::ActionType;

impl DesignerState {
    /// Copies the selected elements and their internal connections to the
    /// clipboard. No-op when nothing is selected.
    pub fn copy(&mut self) {
        match Clipboard::capture(&self.canvas, &self.selection) {
            Some(clipboard) => {
                tracing::debug!(
                    "Copied {} elements, {} connections",
                    clipboard.elements().len(),
                    clipboard.connections().len()
                );
                self.clipboard = Some(clipboard);
            }
            None => tracing::trace!("copy: nothing selected"),
        }
    }

    /// Pastes using the configured offset.
    pub fn paste_default(&mut self) {
        self.paste(self.config.paste_offset_x, self.config.paste_offset_y);
    }

    /// Pastes fresh copies of the clipboard offset by `(offset_x, offset_y)`,
    /// selects exactly the pasted elements, and records a snapshot.
    ///
    /// The clipboard is kept, so repeated pastes produce further copies.
    pub fn paste(&mut self, offset_x: f64, offset_y: f64) {
        let Some(clipboard) = &self.clipboard else {
            tracing::trace!("paste: clipboard empty");
            return;
        };

        let (elements, connections) = clipboard.instantiate(offset_x, offset_y);
        let new_ids: Vec<ElementId> = elements.iter().map(|el| el.id.clone()).collect();
        tracing::debug!(
            "Pasting {} elements, {} connections",
            elements.len(),
            connections.len()
        );

        self.canvas.extend(elements, connections);
        self.selection.select_many(new_ids);
        self.selection.apply_to(&mut self.canvas);
        self.record(ActionType::Paste);
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn clipboard(&self) -> Option<&Clipboard> {
        self.clipboard.as_ref()
    }
}
