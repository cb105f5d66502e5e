//! Input mapping from keyboard and pointer events to engine calls.
//!
//! Framework-agnostic: the host toolkit converts its native events into
//! [`KeyChord`]s and canvas coordinates, and this module decides what the
//! engine should do with them.

use std::fmt;
use std::str::FromStr;

use stockflow_core::{ElementId, Error, Point, Size};
use stockflow_settings::{ToolMode, UiPreferences};

use crate::designer_state::{DesignerState, DragState};
use crate::history::ActionType;
use crate::model::Element;

/// A non-modifier key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable key; letters match case-insensitively
    Char(char),
    Delete,
    Backspace,
    Escape,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Self::Delete => write!(f, "Delete"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Escape => write!(f, "Escape"),
        }
    }
}

/// A key plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
            meta: false,
        }
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta = true;
        self
    }

    /// Ctrl on Linux/Windows or Cmd on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

impl FromStr for KeyChord {
    type Err = Error;

    /// Parses chords like `Ctrl+Shift+Z`, `Cmd+C`, or `Escape`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidKeyChord(s.to_string());

        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key_part = parts.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;

        let key = match key_part.to_ascii_lowercase().as_str() {
            "delete" | "del" => Key::Delete,
            "backspace" => Key::Backspace,
            "escape" | "esc" => Key::Escape,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return Err(invalid()),
                }
            }
        };

        let mut chord = KeyChord::new(key);
        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => chord.ctrl = true,
                "shift" => chord.shift = true,
                "alt" | "option" => chord.alt = true,
                "cmd" | "meta" | "super" => chord.meta = true,
                _ => return Err(invalid()),
            }
        }
        Ok(chord)
    }
}

/// Editor commands reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorAction {
    Undo,
    Redo,
    Copy,
    Paste,
    DeleteSelected,
    ClearSelection,
    SelectAll,
}

impl EditorAction {
    /// Default key bindings.
    pub fn from_chord(chord: &KeyChord) -> Option<Self> {
        let command = chord.command();
        let key = match chord.key {
            Key::Char(c) => Key::Char(c.to_ascii_lowercase()),
            other => other,
        };
        match key {
            Key::Char('z') if command && !chord.shift => Some(Self::Undo),
            Key::Char('z') if command && chord.shift => Some(Self::Redo),
            Key::Char('y') if command => Some(Self::Redo),
            Key::Char('c') if command => Some(Self::Copy),
            Key::Char('v') if command => Some(Self::Paste),
            Key::Char('a') if command => Some(Self::SelectAll),
            Key::Delete | Key::Backspace if !command => Some(Self::DeleteSelected),
            Key::Escape => Some(Self::ClearSelection),
            _ => None,
        }
    }
}

impl DesignerState {
    /// Runs `action` if it applies to the current state.
    ///
    /// Returns whether the action was consumed: undo/redo need history to
    /// step through, copy and delete need a selection. Paste, clear-selection
    /// and select-all are always consumed.
    pub fn apply_action(&mut self, action: EditorAction) -> bool {
        match action {
            EditorAction::Undo if self.can_undo() => self.undo(),
            EditorAction::Redo if self.can_redo() => self.redo(),
            EditorAction::Copy if !self.selected_elements().is_empty() => self.copy(),
            EditorAction::DeleteSelected if !self.selected_elements().is_empty() => {
                self.delete_selected()
            }
            EditorAction::Paste => self.paste_default(),
            EditorAction::ClearSelection => self.clear_selection(),
            EditorAction::SelectAll => self.select_all(),
            EditorAction::Undo
            | EditorAction::Redo
            | EditorAction::Copy
            | EditorAction::DeleteSelected => return false,
        }
        true
    }

    /// Maps a key chord to an action and applies it.
    pub fn handle_shortcut(&mut self, chord: &KeyChord) -> bool {
        match EditorAction::from_chord(chord) {
            Some(action) => self.apply_action(action),
            None => false,
        }
    }

    /// Click on empty canvas.
    ///
    /// With an `add-*` tool, creates an element of that type with its
    /// top-left corner at `point` and returns its id. With the select tool,
    /// clears the selection.
    pub fn handle_canvas_click(
        &mut self,
        prefs: &UiPreferences,
        point: Point,
    ) -> Option<ElementId> {
        if let Some(element_type) = prefs.current_tool.element_type() {
            let id = ElementId::generate();
            let element = Element::new(
                id.clone(),
                element_type,
                point,
                Size::new(
                    self.config.default_element_width,
                    self.config.default_element_height,
                ),
                self.config.default_element_label.clone(),
            );
            self.add_element(element);
            return Some(id);
        }

        if prefs.current_tool == ToolMode::Select {
            self.clear_selection();
        }
        None
    }

    /// Click on an element: toggle with a modifier held, otherwise select.
    pub fn handle_element_click(&mut self, id: &ElementId, multi: bool) {
        if multi {
            self.toggle_element_selection(id);
        } else {
            self.select_element(id);
        }
    }

    /// Starts dragging `id`, selecting it first if it is not selected.
    ///
    /// A drag already in progress is finished first, so its move is recorded.
    pub fn begin_drag(&mut self, id: &ElementId) {
        self.end_drag();
        let Some(origin) = self.get_element(id).map(|el| el.position) else {
            return;
        };
        if !self.is_selected(id) {
            self.select_element(id);
        }
        self.drag = Some(DragState {
            id: id.clone(),
            origin,
        });
    }

    /// Moves the dragged element. No snapshot.
    pub fn drag_to(&mut self, position: Point) {
        if let Some(drag) = &self.drag {
            let id = drag.id.clone();
            self.move_element(&id, position);
        }
    }

    /// Finishes a drag, recording one snapshot if the element moved.
    pub fn end_drag(&mut self) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let moved = self
            .get_element(&drag.id)
            .is_some_and(|el| el.position != drag.origin);
        if moved {
            self.record(ActionType::ElementMoved);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
