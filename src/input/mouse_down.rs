//! Pointer down handling - mode selection, handle hits, item creation.
//!
//! ## Performance Notes
//!
//! Pointer down is a hot path during user interaction. Key optimizations:
//! - O(log n) hit testing via R-tree spatial index
//! - Handle hits are only tested against the selected item
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use super::{InputState, InteractionMode, PointerButton, PointerEvent};
use crate::canvas::{Canvas, ImageRequest};
use crate::constants::HANDLE_HIT_RADIUS;
use crate::hit_testing::{Handle, hit_handle};
use crate::types::{CanvasItem, ItemId, ToolType};
use kurbo::Point;

/// What lies under the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerTarget {
    /// A handle of the selected item
    Handle(ItemId, Handle),
    /// The topmost item
    Item(ItemId),
    /// Empty canvas
    Background,
}

/// Result of a pointer down.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerOutcome {
    /// The event was not consumed
    Ignored,
    /// A gesture began in this mode
    Gesture(InteractionMode),
    /// A click-to-create tool placed an item
    Created(ItemId),
    /// The image tool needs file content from the host
    ImageRequested(ImageRequest),
}

impl Canvas {
    /// Resolve what is under a screen point: handles of the selected item
    /// first, then the topmost item.
    pub fn pointer_target(&self, screen: Point) -> PointerTarget {
        let point = self.viewport.screen_to_canvas(screen);

        if let Some(selected) = self.selection.primary() {
            if let Some(item) = self.board.get(selected) {
                // Handles keep a constant on-screen size
                let radius = HANDLE_HIT_RADIUS / self.viewport.scale();
                if let Some(handle) = hit_handle(item, point, radius) {
                    return PointerTarget::Handle(selected, handle);
                }
            }
        }

        match self.board.find_at(point) {
            Some(id) => PointerTarget::Item(id),
            None => PointerTarget::Background,
        }
    }

    pub fn handle_pointer_down(&mut self, event: &PointerEvent) -> PointerOutcome {
        crate::profile_scope!("handle_pointer_down");

        // A second button while a gesture is active does not start another
        if !self.input_state.is_idle() {
            return PointerOutcome::Ignored;
        }

        let screen = event.position;
        if event.button == PointerButton::Middle || self.tools.active == ToolType::Pan {
            return self.start_panning(screen);
        }
        if event.button != PointerButton::Primary {
            return PointerOutcome::Ignored;
        }

        let point = self.viewport.screen_to_canvas(screen);
        let target = self.pointer_target(screen);

        if let PointerTarget::Handle(id, handle) = target {
            if let Some(baseline) = self.board.get(id).cloned() {
                self.input_state = match handle {
                    Handle::Resize(handle) => InputState::Resizing {
                        start: screen,
                        handle,
                        baseline,
                    },
                    Handle::Endpoint(endpoint) => InputState::EditingEndpoint {
                        start: screen,
                        endpoint,
                        baseline,
                    },
                };
                return self.began();
            }
        }

        if self.tools.active == ToolType::Select {
            if let PointerTarget::Item(id) = target {
                if let Some(baseline) = self.board.get(id).cloned() {
                    self.selection.select(Some(id));
                    self.input_state = InputState::Dragging {
                        start: screen,
                        baseline,
                    };
                    return self.began();
                }
            }
        }

        match self.tools.active {
            ToolType::Eraser => {
                self.input_state = InputState::Erasing;
                self.erase_at(point);
                self.began()
            }
            ToolType::Connector => {
                let item = CanvasItem::connector(point);
                self.selection.select(Some(item.id));
                self.board.add(item.clone());
                self.input_state = InputState::DrawingConnector { baseline: item };
                self.began()
            }
            ToolType::Pen => {
                let item = CanvasItem::freehand(point, self.tools.pen_stroke());
                let item_id = item.id;
                let path = item.path().unwrap_or_default().to_string();
                self.board.add(item);
                self.selection.clear();
                self.input_state = InputState::DrawingFreehand { item_id, path };
                self.began()
            }
            ToolType::Shape => {
                let item = CanvasItem::shape(point, self.tools.shape);
                self.selection.select(Some(item.id));
                self.board.add(item.clone());
                self.input_state = InputState::DrawingShape { baseline: item };
                self.began()
            }
            ToolType::Note | ToolType::Text => {
                let item = if self.tools.active == ToolType::Note {
                    CanvasItem::note(point)
                } else {
                    CanvasItem::text(point)
                };
                let id = item.id;
                self.board.add(item);
                self.commit_history();
                self.selection.select(Some(id));
                self.tools.active = ToolType::Select;
                tracing::debug!(item_id = %id, "Placed item");
                PointerOutcome::Created(id)
            }
            ToolType::Image => PointerOutcome::ImageRequested(self.request_image(point)),
            ToolType::Select | ToolType::Pan => {
                self.selection.clear();
                self.start_panning(screen)
            }
        }
    }

    fn start_panning(&mut self, screen: Point) -> PointerOutcome {
        self.input_state = InputState::Panning {
            start: screen,
            start_pan: self.viewport.pan(),
        };
        self.began()
    }

    fn began(&self) -> PointerOutcome {
        let mode = self.input_state.mode();
        tracing::debug!(?mode, "Gesture started");
        PointerOutcome::Gesture(mode)
    }

    /// Remove the topmost item under a canvas point, recording history.
    pub(crate) fn erase_at(&mut self, point: Point) -> Option<ItemId> {
        let id = self.board.find_at(point)?;
        self.remove_items(&[id]);
        Some(id)
    }
}
