use stockflow_designer::canvas::Canvas;
use stockflow_designer::history::{ActionType, HistorySnapshot, SnapshotHistory};
use stockflow_designer::{DesignerState, Element, ElementId, ElementType, Point, Size};

fn stock(id: &str) -> Element {
    Element::new(id, ElementType::Stock, Point::new(0.0, 0.0), Size::new(100.0, 60.0), id)
}

fn ids(state: &DesignerState) -> Vec<String> {
    state.elements().iter().map(|el| el.id.to_string()).collect()
}

#[test]
fn test_action_type_descriptions() {
    assert_eq!(ActionType::ElementAdded.to_string(), "Add Element");
    assert_eq!(ActionType::ConnectionRemoved.to_string(), "Remove Connection");
    assert_eq!(ActionType::Clear.to_string(), "Clear Diagram");
}

#[test]
fn test_history_manager_creation() {
    let history = SnapshotHistory::new(50);
    assert!(history.is_empty());
    assert_eq!(history.index(), None);
    assert_eq!(history.max_depth(), 50);
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn test_single_snapshot_cannot_undo() {
    let mut history = SnapshotHistory::new(50);
    history.record(HistorySnapshot::capture(&Canvas::new(), ActionType::Snapshot));

    assert_eq!(history.len(), 1);
    assert_eq!(history.index(), Some(0));
    assert!(!history.can_undo());
    assert!(history.undo().is_none());
    assert_eq!(history.index(), Some(0));
}

#[test]
fn test_undo_restores_previous_state() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));
    assert!(state.can_undo());
    assert_eq!(state.undo_description().as_deref(), Some("Add Element"));

    state.undo();

    assert_eq!(ids(&state), vec!["a"]);
    assert!(state.can_redo());
    assert!(!state.can_undo());
}

#[test]
fn test_redo_after_undo() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));
    let before = state.canvas().clone();

    state.undo();
    assert_eq!(state.redo_description().as_deref(), Some("Add Element"));
    state.redo();

    assert_eq!(state.canvas(), &before);
    assert!(!state.can_redo());
}

#[test]
fn test_undo_redo_clear_selection() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));
    state.select_element(&ElementId::new("a"));

    state.undo();
    assert!(state.selected_ids().is_empty());
    assert!(state.elements().iter().all(|el| !el.selected));

    state.select_element(&ElementId::new("a"));
    state.redo();
    assert!(state.selected_ids().is_empty());
    assert!(state.elements().iter().all(|el| !el.selected));
}

#[test]
fn test_new_action_truncates_redo() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));
    state.undo();
    assert!(state.can_redo());

    state.add_element(stock("c"));

    assert!(!state.can_redo());
    assert_eq!(ids(&state), vec!["a", "c"]);
    assert_eq!(state.history_len(), 2);
}

#[test]
fn test_undo_redo_at_bounds_are_noops() {
    let mut state = DesignerState::new();
    state.undo();
    state.redo();
    assert_eq!(state.element_count(), 0);

    state.add_element(stock("a"));
    state.redo();
    assert_eq!(state.history_index(), Some(0));
    assert_eq!(ids(&state), vec!["a"]);
}

#[test]
fn test_history_is_bounded() {
    let mut state = DesignerState::new();
    for i in 0..60 {
        state.add_element(stock(&format!("e{i}")));
    }

    assert_eq!(state.history_len(), 50);
    assert_eq!(state.history_index(), Some(49));

    let mut undos = 0;
    while state.can_undo() {
        state.undo();
        undos += 1;
    }
    assert_eq!(undos, 49);
    assert_eq!(state.element_count(), 11);
}

#[test]
fn test_snapshots_are_independent_copies() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));
    state.move_element(&ElementId::new("a"), Point::new(500.0, 500.0));

    state.undo();

    assert_eq!(
        state.get_element(&ElementId::new("a")).unwrap().position,
        Point::new(0.0, 0.0)
    );
}

#[test]
fn test_save_snapshot_records_explicitly() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.move_element(&ElementId::new("a"), Point::new(10.0, 10.0));
    state.save_snapshot();
    state.move_element(&ElementId::new("a"), Point::new(99.0, 99.0));

    assert_eq!(state.undo_description().as_deref(), Some("Snapshot"));
    state.undo();

    assert_eq!(
        state.get_element(&ElementId::new("a")).unwrap().position,
        Point::new(0.0, 0.0)
    );
    state.redo();
    assert_eq!(
        state.get_element(&ElementId::new("a")).unwrap().position,
        Point::new(10.0, 10.0)
    );
}

#[test]
fn test_history_records_timestamps_in_order() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));
    state.add_element(stock("b"));

    let stamps: Vec<_> = state.history().snapshots().map(|s| s.timestamp).collect();
    assert_eq!(stamps.len(), 2);
    assert!(stamps[0] <= stamps[1]);
}

#[test]
fn test_snapshot_serializes_graph() {
    let mut state = DesignerState::new();
    state.add_element(stock("a"));

    let snapshot = state.history().current().expect("one snapshot");
    let json = serde_json::to_value(snapshot).expect("serialize");

    assert_eq!(json["action"], "ElementAdded");
    assert_eq!(json["elements"][0]["id"], "a");
    assert_eq!(json["elements"][0]["type"], "stock");
    assert!(json["timestamp"].is_string());
}
