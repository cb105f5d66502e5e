use std::str::FromStr;

use stockflow_designer::{
    DesignerState, EditorAction, Element, ElementId, ElementType, Key, KeyChord, Point, Size,
};
use stockflow_settings::{ToolMode, UiPreferences};

fn stock(id: &str, x: f64, y: f64) -> Element {
    Element::new(id, ElementType::Stock, Point::new(x, y), Size::new(100.0, 60.0), id)
}

fn chord(s: &str) -> KeyChord {
    KeyChord::from_str(s).unwrap()
}

#[test]
fn test_parse_key_chords() {
    let redo = chord("Ctrl+Shift+Z");
    assert_eq!(redo.key, Key::Char('z'));
    assert!(redo.ctrl && redo.shift && !redo.alt && !redo.meta);

    let copy = chord("Cmd+C");
    assert!(copy.meta);
    assert!(copy.command());

    assert_eq!(chord("Esc").key, Key::Escape);
    assert_eq!(chord("Del").key, Key::Delete);
    assert_eq!(chord("backspace"), KeyChord::new(Key::Backspace));
}

#[test]
fn test_parse_invalid_key_chords() {
    assert!(KeyChord::from_str("").is_err());
    assert!(KeyChord::from_str("Ctrl+").is_err());
    assert!(KeyChord::from_str("Hyper+Z").is_err());
    assert!(KeyChord::from_str("Ctrl+Enter").is_err());
}

#[test]
fn test_default_bindings() {
    let cases = [
        ("Ctrl+Z", Some(EditorAction::Undo)),
        ("Cmd+Z", Some(EditorAction::Undo)),
        ("Ctrl+Shift+Z", Some(EditorAction::Redo)),
        ("Ctrl+Y", Some(EditorAction::Redo)),
        ("Ctrl+C", Some(EditorAction::Copy)),
        ("Cmd+V", Some(EditorAction::Paste)),
        ("Ctrl+A", Some(EditorAction::SelectAll)),
        ("Delete", Some(EditorAction::DeleteSelected)),
        ("Backspace", Some(EditorAction::DeleteSelected)),
        ("Escape", Some(EditorAction::ClearSelection)),
        ("Ctrl+Backspace", None),
        ("Z", None),
        ("Alt+C", None),
    ];
    for (input, expected) in cases {
        assert_eq!(EditorAction::from_chord(&chord(input)), expected, "{input}");
    }
}

#[test]
fn test_bindings_ignore_letter_case() {
    let upper = KeyChord::new(Key::Char('Z')).ctrl().shift();
    assert_eq!(EditorAction::from_chord(&upper), Some(EditorAction::Redo));
}

#[test]
fn test_undo_shortcut_consumed_only_when_available() {
    let mut state = DesignerState::new();
    assert!(!state.handle_shortcut(&chord("Ctrl+Z")));

    state.add_element(stock("a", 0.0, 0.0));
    state.add_element(stock("b", 200.0, 0.0));
    assert!(state.handle_shortcut(&chord("Ctrl+Z")));
    assert_eq!(state.element_count(), 1);

    assert!(state.handle_shortcut(&chord("Ctrl+Y")));
    assert_eq!(state.element_count(), 2);
    assert!(!state.handle_shortcut(&chord("Ctrl+Shift+Z")));
}

#[test]
fn test_delete_shortcut_needs_selection() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    assert!(!state.handle_shortcut(&chord("Delete")));

    state.select_element(&ElementId::new("a"));
    assert!(state.handle_shortcut(&chord("Delete")));
    assert_eq!(state.element_count(), 0);
}

#[test]
fn test_copy_paste_shortcuts() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    assert!(!state.handle_shortcut(&chord("Ctrl+C")));

    state.select_element(&ElementId::new("a"));
    assert!(state.handle_shortcut(&chord("Ctrl+C")));
    assert!(state.handle_shortcut(&chord("Ctrl+V")));

    assert_eq!(state.element_count(), 2);
    assert_eq!(state.elements()[1].position, Point::new(20.0, 20.0));
}

#[test]
fn test_escape_and_select_all_always_consumed() {
    let mut state = DesignerState::new();
    assert!(state.handle_shortcut(&chord("Escape")));
    assert!(state.handle_shortcut(&chord("Ctrl+A")));

    state.add_element(stock("a", 0.0, 0.0));
    state.add_element(stock("b", 200.0, 0.0));
    state.handle_shortcut(&chord("Ctrl+A"));
    assert_eq!(state.selected_ids().len(), 2);

    state.handle_shortcut(&chord("Escape"));
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_unbound_chord_not_consumed() {
    let mut state = DesignerState::new();
    assert!(!state.handle_shortcut(&chord("Q")));
}

#[test]
fn test_canvas_click_with_add_tool_creates_element() {
    let mut state = DesignerState::new();
    let mut prefs = UiPreferences::new();
    prefs.set_current_tool(ToolMode::AddCloud);

    let id = state
        .handle_canvas_click(&prefs, Point::new(150.0, 75.0))
        .expect("element created");

    assert!(id.as_str().starts_with("element-"));
    let element = state.get_element(&id).unwrap();
    assert_eq!(element.element_type, ElementType::Cloud);
    assert_eq!(element.position, Point::new(150.0, 75.0));
    assert_eq!(element.size, Size::new(100.0, 60.0));
    assert_eq!(element.label, "New Element");
    assert_eq!(element.value, 0.0);
    assert_eq!(state.undo_description().as_deref(), Some("Add Element"));
}

#[test]
fn test_canvas_click_with_select_tool_clears_selection() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    state.select_element(&ElementId::new("a"));
    let prefs = UiPreferences::new();

    assert!(state.handle_canvas_click(&prefs, Point::new(500.0, 500.0)).is_none());
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_canvas_click_with_connect_tool_does_nothing() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    state.select_element(&ElementId::new("a"));
    let mut prefs = UiPreferences::new();
    prefs.set_current_tool(ToolMode::Connect);

    assert!(state.handle_canvas_click(&prefs, Point::new(500.0, 500.0)).is_none());
    assert_eq!(state.element_count(), 1);
    assert!(state.is_selected(&ElementId::new("a")));
}

#[test]
fn test_element_click_modes() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    state.add_element(stock("b", 200.0, 0.0));

    state.handle_element_click(&ElementId::new("a"), false);
    state.handle_element_click(&ElementId::new("b"), true);
    assert_eq!(state.selected_ids().len(), 2);

    state.handle_element_click(&ElementId::new("a"), true);
    assert_eq!(state.selected_ids(), &[ElementId::new("b")]);

    state.handle_element_click(&ElementId::new("a"), false);
    assert_eq!(state.selected_ids(), &[ElementId::new("a")]);
}

#[test]
fn test_drag_records_single_snapshot() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    let id = ElementId::new("a");
    let history_len = state.history_len();

    state.begin_drag(&id);
    assert!(state.is_dragging());
    assert!(state.is_selected(&id));

    for step in 1..=10 {
        state.drag_to(Point::new(step as f64 * 5.0, 0.0));
    }
    assert_eq!(state.history_len(), history_len);

    state.end_drag();
    assert!(!state.is_dragging());
    assert_eq!(state.history_len(), history_len + 1);
    assert_eq!(state.undo_description().as_deref(), Some("Move Element"));

    state.undo();
    assert_eq!(state.get_element(&id).unwrap().position, Point::new(0.0, 0.0));
}

#[test]
fn test_drag_without_movement_records_nothing() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    let history_len = state.history_len();

    state.begin_drag(&ElementId::new("a"));
    state.end_drag();

    assert_eq!(state.history_len(), history_len);
}

#[test]
fn test_drag_unknown_element_is_ignored() {
    let mut state = DesignerState::new();
    state.begin_drag(&ElementId::new("ghost"));
    assert!(!state.is_dragging());
    state.drag_to(Point::new(1.0, 1.0));
    state.end_drag();
    assert_eq!(state.history_len(), 0);
}

#[test]
fn test_begin_drag_finishes_previous_drag() {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0));
    state.add_element(stock("b", 200.0, 0.0));
    let history_len = state.history_len();

    state.begin_drag(&ElementId::new("a"));
    state.drag_to(Point::new(50.0, 50.0));
    state.begin_drag(&ElementId::new("b"));

    assert!(state.is_dragging());
    assert_eq!(state.history_len(), history_len + 1);
    assert_eq!(state.undo_description().as_deref(), Some("Move Element"));

    state.drag_to(Point::new(300.0, 0.0));
    state.end_drag();
    assert_eq!(state.history_len(), history_len + 2);
    assert_eq!(
        state.get_element(&ElementId::new("a")).unwrap().position,
        Point::new(50.0, 50.0)
    );
}
