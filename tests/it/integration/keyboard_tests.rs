//! Keyboard shortcut tests.

use crate::helpers::{TestCanvasBuilder, assert_item_count, click, cmd_shift, ctrl, pointer, press};
use moodboard::{Key, Modifiers, ToolType};

#[test]
fn test_delete_removes_selection_and_commits() {
    let mut canvas = TestCanvasBuilder::new()
        .with_note((300.0, 300.0))
        .with_note((800.0, 300.0))
        .build();
    let keep = canvas.items()[1].id;
    click(&mut canvas, 300.0, 300.0);

    assert!(press(&mut canvas, Key::Delete, Modifiers::default()));

    assert_item_count(&canvas, 1);
    assert_eq!(canvas.items()[0].id, keep);
    assert!(canvas.selection().is_empty());
    assert!(canvas.can_undo());
}

#[test]
fn test_backspace_without_selection_is_not_consumed() {
    let mut canvas = TestCanvasBuilder::new().with_note((300.0, 300.0)).build();
    assert!(!press(&mut canvas, Key::Backspace, Modifiers::default()));
    assert_item_count(&canvas, 1);
    assert!(!canvas.can_undo());
}

#[test]
fn test_undo_redo_shortcuts() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Note).build();
    click(&mut canvas, 100.0, 100.0);

    assert!(press(&mut canvas, Key::Character('z'), ctrl()));
    assert_item_count(&canvas, 0);

    assert!(press(&mut canvas, Key::Character('Z'), cmd_shift()));
    assert_item_count(&canvas, 1);

    canvas.undo();
    assert!(press(&mut canvas, Key::Character('y'), ctrl()));
    assert_item_count(&canvas, 1);

    // Nothing left to redo
    assert!(!press(&mut canvas, Key::Character('y'), ctrl()));
}

#[test]
fn test_plain_letters_are_ignored() {
    let mut canvas = TestCanvasBuilder::new().with_tool(ToolType::Note).build();
    click(&mut canvas, 100.0, 100.0);

    assert!(!press(&mut canvas, Key::Character('z'), Modifiers::default()));
    assert_item_count(&canvas, 1);
}

#[test]
fn test_escape_clears_selection() {
    let mut canvas = TestCanvasBuilder::new().with_note((300.0, 300.0)).build();
    click(&mut canvas, 300.0, 300.0);

    assert!(press(&mut canvas, Key::Escape, Modifiers::default()));
    assert!(canvas.selection().is_empty());
    assert_item_count(&canvas, 1);
}

#[test]
fn test_shortcuts_ignored_mid_gesture() {
    let mut canvas = TestCanvasBuilder::new().with_note((300.0, 300.0)).build();
    click(&mut canvas, 300.0, 300.0);

    canvas.handle_pointer_down(&pointer(300.0, 300.0));
    assert!(!press(&mut canvas, Key::Delete, Modifiers::default()));
    canvas.handle_pointer_up();

    assert_item_count(&canvas, 1);
}
