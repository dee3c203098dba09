//! Image placement through the image tool and file drops.

use crate::helpers::{TestCanvasBuilder, assert_item_count, click, png_bytes, pointer};
use kurbo::{Point, Vec2};
use moodboard::{ItemContent, ItemKind, PointerOutcome, ToolType};
use std::fs;

#[test]
fn test_image_tool_places_scaled_image() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 50.0, 70.0) else {
        panic!("image tool should request a file");
    };

    assert!(canvas.load_image_bytes(request.id, png_bytes(800, 300)));
    let id = canvas.wait_for_image_load().expect("image placed");

    let image = canvas.item(id).unwrap();
    assert_eq!(image.kind(), ItemKind::Image);
    assert_eq!(image.position, Point::new(50.0, 70.0));
    assert_eq!(image.size, Vec2::new(400.0, 150.0));
    let ItemContent::Image { source } = &image.content else {
        panic!("expected image content");
    };
    assert!(source.starts_with("data:image/png;base64,"));

    assert!(canvas.is_selected(id));
    assert_eq!(canvas.active_tool(), ToolType::Select);
    assert_eq!(canvas.history().len(), 2);
    assert_eq!(canvas.pending_image_count(), 0);
}

#[test]
fn test_small_image_keeps_natural_size() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };

    canvas.load_image_bytes(request.id, png_bytes(120, 90));
    let id = canvas.wait_for_image_load().unwrap();

    assert_eq!(canvas.item(id).unwrap().size, Vec2::new(120.0, 90.0));
}

#[test]
fn test_undecodable_file_inserts_nothing() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };

    canvas.load_image_bytes(request.id, b"not an image at all".to_vec());

    assert!(canvas.wait_for_image_load().is_none());
    assert_item_count(&canvas, 0);
    assert!(!canvas.can_undo());
    assert_eq!(canvas.pending_image_count(), 0);
    // The tool stays armed for another attempt
    assert_eq!(canvas.active_tool(), ToolType::Image);
}

#[test]
fn test_load_completes_after_tool_change() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };
    canvas.load_image_bytes(request.id, png_bytes(10, 10));
    canvas.set_active_tool(ToolType::Pen);

    assert!(canvas.wait_for_image_load().is_some());
    assert_item_count(&canvas, 1);
}

#[test]
fn test_load_finishing_during_drag_keeps_drag_in_one_entry() {
    let mut canvas = TestCanvasBuilder::new()
        .with_note((300.0, 300.0))
        .with_tool(ToolType::Image)
        .build();
    let note_id = canvas.items()[0].id;
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 700.0, 700.0) else {
        panic!("image tool should request a file");
    };
    canvas.load_image_bytes(request.id, png_bytes(10, 10));
    canvas.set_active_tool(ToolType::Select);

    canvas.handle_pointer_down(&pointer(300.0, 300.0));
    canvas.handle_pointer_move(&pointer(350.0, 300.0));
    assert!(canvas.wait_for_image_load().is_none());
    assert_item_count(&canvas, 1);
    assert!(canvas.is_selected(note_id));
    canvas.handle_pointer_move(&pointer(400.0, 300.0));
    canvas.handle_pointer_up();

    assert_item_count(&canvas, 2);
    assert_eq!(canvas.history().len(), 3);
    assert!(canvas.undo());
    let note = canvas.item(note_id).unwrap();
    assert_eq!(note.position, Point::new(300.0, 200.0));
}

#[test]
fn test_wait_skips_cancelled_loads() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(abandoned) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };
    let PointerOutcome::ImageRequested(kept) = click(&mut canvas, 100.0, 100.0) else {
        panic!("image tool should request a file");
    };

    canvas.load_image_bytes(abandoned.id, png_bytes(4, 4));
    canvas.load_image_bytes(kept.id, png_bytes(600, 600));
    canvas.cancel_image_request(abandoned.id);

    let id = canvas.wait_for_image_load().expect("live load placed");
    assert_eq!(canvas.item(id).unwrap().position, Point::new(100.0, 100.0));
    assert_item_count(&canvas, 1);
    assert!(canvas.wait_for_image_load().is_none());
}

#[test]
fn test_drop_files_inserts_images_only() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("swatch.png");
    let text_path = dir.path().join("notes.txt");
    fs::write(&image_path, png_bytes(40, 20)).unwrap();
    fs::write(&text_path, "not an image").unwrap();

    let mut canvas = TestCanvasBuilder::new()
        .with_tool(ToolType::Pen)
        .with_zoom(2.0)
        .build();
    let started = canvas.drop_files(Point::new(200.0, 100.0), vec![image_path, text_path]);
    assert_eq!(started.len(), 1);

    let id = canvas.wait_for_image_load().unwrap();
    let image = canvas.item(id).unwrap();
    assert_eq!(image.position, Point::new(100.0, 50.0));
    assert_eq!(image.size, Vec2::new(40.0, 20.0));

    // Drops leave the tool and selection alone
    assert_eq!(canvas.active_tool(), ToolType::Pen);
    assert!(canvas.selection().is_empty());
    assert_eq!(canvas.history().len(), 2);
}

#[test]
fn test_drop_missing_file_inserts_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut canvas = TestCanvasBuilder::new().build();

    let started = canvas.drop_files(Point::ORIGIN, vec![dir.path().join("gone.png")]);
    assert_eq!(started.len(), 1);

    assert!(canvas.wait_for_image_load().is_none());
    assert_item_count(&canvas, 0);
}

#[test]
fn test_poll_drains_finished_loads() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };
    canvas.load_image_bytes(request.id, png_bytes(4, 4));

    let mut placed = Vec::new();
    for _ in 0..500 {
        placed.extend(canvas.poll_image_loads());
        if !placed.is_empty() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(5));
    }

    assert_eq!(placed.len(), 1);
    assert_item_count(&canvas, 1);
}

#[test]
fn test_unknown_ticket_is_rejected() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Image).build();
    let PointerOutcome::ImageRequested(request) = click(&mut canvas, 0.0, 0.0) else {
        panic!("image tool should request a file");
    };

    assert!(canvas.cancel_image_request(request.id));
    assert!(!canvas.load_image_bytes(request.id, png_bytes(4, 4)));
    assert!(!canvas.cancel_image_request(request.id));
    assert_eq!(canvas.pending_image_count(), 0);
}
