use super::*;
use crate::geom::Corners;

// =============================================================
// Tool
// =============================================================

#[test]
fn default_tool_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_names_round_trip() {
    for tool in Tool::ALL {
        assert_eq!(Tool::from_name(tool.name()), Some(tool));
    }
    assert_eq!(Tool::from_name("brush"), None);
    assert_eq!(Tool::from_name("Pen"), None);
}

#[test]
fn tool_kinds() {
    assert_eq!(Tool::Select.kind(), None);
    assert_eq!(Tool::Pen.kind(), Some(ElementKind::Freehand));
    assert_eq!(Tool::Text.kind(), Some(ElementKind::Text));
    assert_eq!(Tool::Ellipse.kind(), Some(ElementKind::Ellipse));
}

#[test]
fn only_shape_tools_draw() {
    let drawing: Vec<Tool> = Tool::ALL.into_iter().filter(|t| t.is_drawing()).collect();
    assert_eq!(drawing, vec![Tool::Line, Tool::Rectangle, Tool::Ellipse, Tool::Pen]);
}

#[test]
fn tool_serde_uses_names() {
    for tool in Tool::ALL {
        let json = serde_json::to_string(&tool).expect("serialize");
        assert_eq!(json, format!("\"{}\"", tool.name()));
        let back: Tool = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tool);
    }
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_fields_default_to_false() {
    let m: Modifiers = serde_json::from_str(r#"{"ctrl":true}"#).expect("deserialize");
    assert_eq!(m, Modifiers { ctrl: true, ..Modifiers::default() });
    let empty: Modifiers = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(empty, Modifiers::default());
}

// =============================================================
// InputState
// =============================================================

#[test]
fn idle_by_default() {
    let state = InputState::default();
    assert!(state.is_idle());
    assert_eq!(state.element_id(), None);
}

#[test]
fn element_id_per_state() {
    let drawing = InputState::Drawing { id: 3, tool: Tool::Line, origin: Point::new(0.0, 0.0) };
    assert_eq!(drawing.element_id(), Some(3));
    assert!(!drawing.is_idle());

    assert_eq!(InputState::Writing { id: 5 }.element_id(), Some(5));

    let sel = SelectedElement {
        element: Element::new(7, crate::element::Shape::Rectangle(Corners::new(0.0, 0.0, 1.0, 1.0))),
        position: Position::Inside,
        offsets: DragOffsets::Rigid { dx: 0.0, dy: 0.0 },
    };
    assert_eq!(InputState::Moving(sel.clone()).element_id(), Some(7));
    assert_eq!(InputState::Resizing(sel).element_id(), Some(7));
}
