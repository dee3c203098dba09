//! Item creation through the drawing and placement tools.

use crate::helpers::{TestCanvasBuilder, assert_item_count, click, drag, drag_through, pointer};
use kurbo::{Point, Vec2};
use moodboard::{InteractionMode, ItemKind, PointerOutcome, ShapeType, ToolType};

#[test]
fn test_note_is_centered_and_tool_reverts() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Note).build();

    let PointerOutcome::Created(id) = click(&mut canvas, 300.0, 300.0) else {
        panic!("note tool should create an item");
    };

    let note = canvas.item(id).unwrap();
    assert_eq!(note.kind(), ItemKind::StickyNote);
    assert_eq!(note.position, Point::new(200.0, 200.0));
    assert_eq!(note.size, Vec2::new(200.0, 200.0));
    assert!(canvas.is_selected(id));
    assert_eq!(canvas.active_tool(), ToolType::Select);
}

#[test]
fn test_text_is_anchored_above_click() {
    let mut canvas = TestCanvasBuilder::new()
        .with_tool(ToolType::Text)
        .with_zoom(2.0)
        .build();

    let PointerOutcome::Created(id) = click(&mut canvas, 200.0, 200.0) else {
        panic!("text tool should create an item");
    };

    let text = canvas.item(id).unwrap();
    assert_eq!(text.position, Point::new(100.0, 70.0));
    assert_eq!(text.size, Vec2::new(300.0, 60.0));
    assert_eq!(text.font_size(), Some(36.0));
}

#[test]
fn test_shape_tap_gets_default_size() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Shape).build();
    canvas.set_active_shape(ShapeType::Circle);

    click(&mut canvas, 100.0, 100.0);

    assert_item_count(&canvas, 1);
    let shape = &canvas.items()[0];
    assert_eq!(shape.position, Point::new(100.0, 100.0));
    assert_eq!(shape.size, Vec2::new(100.0, 100.0));
    assert!(canvas.is_selected(shape.id));
    // Shape tool is sticky
    assert_eq!(canvas.active_tool(), ToolType::Shape);
}

#[test]
fn test_shape_small_drag_still_defaults() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Shape).build();
    drag(&mut canvas, (100.0, 100.0), (104.0, 103.0));
    assert_eq!(canvas.items()[0].size, Vec2::new(100.0, 100.0));
}

#[test]
fn test_shape_drag_up_left_keeps_positive_size() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Shape).build();

    canvas.handle_pointer_down(&pointer(200.0, 200.0));
    canvas.handle_pointer_move(&pointer(150.0, 120.0));
    assert_eq!(canvas.mode(), InteractionMode::DrawingShape);

    let shape = &canvas.items()[0];
    assert_eq!(shape.position, Point::new(150.0, 120.0));
    assert_eq!(shape.size, Vec2::new(50.0, 80.0));

    canvas.handle_pointer_up();
    assert_eq!(canvas.items()[0].size, Vec2::new(50.0, 80.0));
    assert_eq!(canvas.mode(), InteractionMode::Idle);
}

#[test]
fn test_connector_end_follows_pointer() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Connector).build();

    drag_through(&mut canvas, (100.0, 100.0), &[(150.0, 300.0), (300.0, 200.0)]);

    let connector = &canvas.items()[0];
    assert_eq!(connector.kind(), ItemKind::Connector);
    assert_eq!(connector.position, Point::new(100.0, 100.0));
    assert_eq!(connector.end_point(), Point::new(300.0, 200.0));
    assert!(canvas.is_selected(connector.id));
    assert_eq!(canvas.history().len(), 2);
}

#[test]
fn test_pen_stroke_path() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Pen).build();
    canvas.set_pen_color("#112233");
    canvas.set_pen_width(3.0);

    drag_through(
        &mut canvas,
        (10.0, 20.0),
        &[(30.0, 40.0), (50.0, 60.5), (70.25, 60.5)],
    );

    let stroke = &canvas.items()[0];
    assert_eq!(stroke.kind(), ItemKind::Freehand);
    assert_eq!(stroke.position, Point::ORIGIN);
    assert_eq!(stroke.stroke().unwrap().color, "#112233");
    assert_eq!(stroke.stroke().unwrap().width, 3.0);
    insta::assert_snapshot!(stroke.path().unwrap(), @"M 10 20 L 30 40 L 50 60.5 L 70.25 60.5");
    assert!(canvas.selection().is_empty());
    assert_eq!(canvas.history().len(), 2);
}

#[test]
fn test_pen_path_is_in_canvas_space() {
    let mut canvas = TestCanvasBuilder::new()
        .with_tool(ToolType::Pen)
        .with_zoom(2.0)
        .with_pan(100.0, 0.0)
        .build();

    drag(&mut canvas, (100.0, 0.0), (300.0, 100.0));

    insta::assert_snapshot!(canvas.items()[0].path().unwrap(), @"M 0 0 L 100 50");
}

#[test]
fn test_image_tool_requests_file() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();

    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 40.0, 60.0) else {
        panic!("image tool should request a file");
    };

    assert_eq!(request.anchor, Point::new(40.0, 60.0));
    assert_item_count(&canvas, 0);
    assert_eq!(canvas.pending_image_count(), 1);
    assert!(!canvas.can_undo());
}
