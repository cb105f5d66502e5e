use stockflow_designer::{
    Connection, ConnectionId, ConnectionType, DesignerState, Element, ElementId, ElementType,
    Point, Size,
};

fn stock(id: &str, x: f64, y: f64) -> Element {
    Element::new(id, ElementType::Stock, Point::new(x, y), Size::new(100.0, 60.0), id)
}

fn diagram() -> DesignerState {
    let mut state = DesignerState::new();
    state.add_element(stock("a", 0.0, 0.0).with_value(5.0));
    state.add_element(stock("b", 200.0, 0.0));
    state.add_element(stock("c", 400.0, 0.0));
    state.add_connection(Connection::new("ab", "a", "b", ConnectionType::Flow));
    state.add_connection(Connection::new("bc", "b", "c", ConnectionType::Connector));
    state
}

#[test]
fn test_copy_without_selection_is_noop() {
    let mut state = diagram();
    state.copy();
    assert!(!state.has_clipboard());

    state.paste(20.0, 20.0);
    assert_eq!(state.element_count(), 3);
}

#[test]
fn test_copy_keeps_only_internal_connections() {
    let mut state = diagram();
    state.select_elements(&[ElementId::new("a"), ElementId::new("b")]);
    state.copy();

    let clipboard = state.clipboard().unwrap();
    assert_eq!(clipboard.elements().len(), 2);
    assert_eq!(clipboard.connections().len(), 1);
    assert_eq!(clipboard.connections()[0].id, ConnectionId::new("ab"));
}

#[test]
fn test_paste_creates_offset_copies_with_fresh_ids() {
    let mut state = diagram();
    state.select_elements(&[ElementId::new("a"), ElementId::new("b")]);
    state.copy();

    state.paste(20.0, 20.0);

    assert_eq!(state.element_count(), 5);
    assert_eq!(state.connection_count(), 3);

    let pasted: Vec<&Element> = state.elements()[3..].iter().collect();
    assert_eq!(pasted[0].position, Point::new(20.0, 20.0));
    assert_eq!(pasted[1].position, Point::new(220.0, 20.0));
    assert_eq!(pasted[0].value, 5.0);
    assert!(pasted[0].id.as_str().starts_with("a-copy-"));
    assert!(pasted[1].id.as_str().starts_with("b-copy-"));

    let originals = ["a", "b", "c"];
    for el in &pasted {
        assert!(!originals.contains(&el.id.as_str()));
    }

    let conn = &state.connections()[2];
    assert_eq!(conn.source_id, pasted[0].id);
    assert_eq!(conn.target_id, pasted[1].id);
    assert_ne!(conn.id, ConnectionId::new("ab"));
    assert!(conn.id.as_str().starts_with("ab-copy-"));
}

#[test]
fn test_paste_selects_exactly_the_pasted_elements() {
    let mut state = diagram();
    state.select_elements(&[ElementId::new("a"), ElementId::new("b")]);
    state.copy();
    state.paste(20.0, 20.0);

    let pasted: Vec<ElementId> = state.elements()[3..].iter().map(|el| el.id.clone()).collect();
    assert_eq!(state.selected_ids(), pasted.as_slice());
    for el in state.elements() {
        assert_eq!(el.selected, pasted.contains(&el.id));
    }
}

#[test]
fn test_paste_is_undoable() {
    let mut state = diagram();
    state.select_element(&ElementId::new("c"));
    state.copy();
    state.paste(20.0, 20.0);
    assert_eq!(state.undo_description().as_deref(), Some("Paste"));

    state.undo();

    assert_eq!(state.element_count(), 3);
    assert_eq!(state.connection_count(), 2);
}

#[test]
fn test_repeated_paste_produces_distinct_copies() {
    let mut state = diagram();
    state.select_element(&ElementId::new("a"));
    state.copy();

    state.paste(20.0, 20.0);
    state.paste(40.0, 40.0);

    assert_eq!(state.element_count(), 5);
    assert_ne!(state.elements()[3].id, state.elements()[4].id);
    assert_eq!(state.elements()[4].position, Point::new(40.0, 40.0));
}

#[test]
fn test_paste_default_uses_configured_offset() {
    let mut state = diagram();
    state.select_element(&ElementId::new("b"));
    state.copy();

    state.paste_default();

    assert_eq!(state.elements()[3].position, Point::new(220.0, 20.0));
}

#[test]
fn test_clipboard_survives_source_removal() {
    let mut state = diagram();
    state.select_element(&ElementId::new("a"));
    state.copy();
    state.remove_element(&ElementId::new("a"));

    state.paste(0.0, 0.0);

    assert_eq!(state.element_count(), 3);
    assert_eq!(state.elements()[2].label, "a");
}
