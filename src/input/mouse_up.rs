//! Pointer up handling - finalize the gesture and commit history.

use super::InputState;
use crate::canvas::Canvas;
use crate::constants::{DEFAULT_SHAPE_SIZE, SHAPE_TAP_THRESHOLD};
use crate::types::ItemPatch;
use kurbo::Vec2;

impl Canvas {
    /// End the current gesture. Gestures that changed the document record
    /// exactly one history entry; images that finished loading meanwhile are
    /// placed after it.
    pub fn handle_pointer_up(&mut self) {
        crate::profile_scope!("handle_pointer_up");

        let finished = self.input_state.take();
        if finished.is_idle() {
            return;
        }

        // A tap with the shape tool gets a usable default size
        if let InputState::DrawingShape { baseline } = &finished {
            if let Some(item) = self.board.get(baseline.id) {
                if item.size.x < SHAPE_TAP_THRESHOLD && item.size.y < SHAPE_TAP_THRESHOLD {
                    let size = Vec2::new(DEFAULT_SHAPE_SIZE.0, DEFAULT_SHAPE_SIZE.1);
                    self.board.update(baseline.id, &ItemPatch::new().size(size));
                }
            }
        }

        let committed = finished.commits_on_release() && self.commit_history();
        tracing::debug!(mode = ?finished.mode(), committed, "Gesture finished");

        self.flush_ready_images();
    }

    /// The pointer left the canvas; finishes the gesture like a release.
    pub fn handle_pointer_leave(&mut self) {
        self.handle_pointer_up();
    }
}
