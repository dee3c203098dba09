//! Pointer move handling - panning, dragging, resizing and drawing.
//!
//! Every mode recomputes from its baseline and the total pointer delta, so a
//! burst of moves and a single move to the same point end in the same state.

use super::coords::CoordinateConverter;
use super::{InputState, PointerEvent};
use crate::canvas::Canvas;
use crate::constants::{MIN_ITEM_SIZE, TEXT_FONT_HEIGHT_RATIO};
use crate::hit_testing::{Endpoint, ResizeHandle, rotation_about_center};
use crate::types::{CanvasItem, ItemKind, ItemPatch};
use kurbo::{Point, Rect, Vec2};
use std::fmt::Write;

impl Canvas {
    pub fn handle_pointer_move(&mut self, event: &PointerEvent) {
        crate::profile_scope!("handle_pointer_move");

        let screen = event.position;
        let point = self.viewport.screen_to_canvas(screen);
        let scale = self.viewport.scale();
        let mut erase = false;

        match &mut self.input_state {
            InputState::Idle => {}

            InputState::Panning { start, start_pan } => {
                self.viewport.set_pan(*start_pan + (screen - *start));
            }

            InputState::Erasing => erase = true,

            InputState::Dragging { start, baseline } => {
                let delta = CoordinateConverter::delta_screen_to_canvas(screen - *start, scale);
                self.board.update(
                    baseline.id,
                    &ItemPatch::new().position(baseline.position + delta),
                );
            }

            InputState::Resizing {
                start,
                handle,
                baseline,
            } => {
                let delta = CoordinateConverter::delta_screen_to_canvas(screen - *start, scale);
                let patch = resize_patch(baseline, *handle, delta);
                self.board.update(baseline.id, &patch);
            }

            InputState::DrawingShape { baseline } => {
                let anchor = baseline.position;
                let position = Point::new(anchor.x.min(point.x), anchor.y.min(point.y));
                let size = Vec2::new((point.x - anchor.x).abs(), (point.y - anchor.y).abs());
                self.board.update(
                    baseline.id,
                    &ItemPatch::new().position(position).size(size),
                );
            }

            InputState::DrawingConnector { baseline } => {
                self.board.update(
                    baseline.id,
                    &ItemPatch::new().size(point - baseline.position),
                );
            }

            InputState::EditingEndpoint {
                start,
                endpoint,
                baseline,
            } => {
                let delta = CoordinateConverter::delta_screen_to_canvas(screen - *start, scale);
                let patch = endpoint_patch(baseline, *endpoint, delta);
                self.board.update(baseline.id, &patch);
            }

            InputState::DrawingFreehand { item_id, path } => {
                let _ = write!(path, " L {} {}", point.x, point.y);
                self.board.update(*item_id, &ItemPatch::new().path(path.as_str()));
            }
        }

        if erase {
            self.erase_at(point);
        }
        tracing::trace!(mode = ?self.input_state.mode(), x = point.x, y = point.y, "Pointer move");
    }
}

/// Geometry for resizing `baseline` by a canvas-space pointer delta.
///
/// Width and height never drop below [`MIN_ITEM_SIZE`]; when a north or west
/// handle hits the floor, the opposite edge stays where it was. Rotated items
/// resize along their own axes with the opposite corner pinned on the canvas.
pub(crate) fn resize_patch(baseline: &CanvasItem, handle: ResizeHandle, delta: Vec2) -> ItemPatch {
    let delta = unrotate(delta, baseline.rotation);
    let origin = baseline.position;
    let (mut x, mut y) = (origin.x, origin.y);
    let (mut width, mut height) = (baseline.size.x, baseline.size.y);

    if handle.moves_east() {
        width += delta.x;
    }
    if handle.moves_west() {
        width -= delta.x;
        x += delta.x;
    }
    if handle.moves_south() {
        height += delta.y;
    }
    if handle.moves_north() {
        height -= delta.y;
        y += delta.y;
    }

    if width < MIN_ITEM_SIZE {
        width = MIN_ITEM_SIZE;
        if handle.moves_west() {
            x = origin.x + baseline.size.x - MIN_ITEM_SIZE;
        }
    }
    if height < MIN_ITEM_SIZE {
        height = MIN_ITEM_SIZE;
        if handle.moves_north() {
            y = origin.y + baseline.size.y - MIN_ITEM_SIZE;
        }
    }

    if baseline.rotation != 0.0 {
        // Rotation is about the center, which moves with the size
        let pinned = handle.opposite();
        let before = Rect::from_origin_size(origin, baseline.size.to_size());
        let after = Rect::new(x, y, x + width, y + height);
        let fixed = rotation_about_center(baseline.rotation, before) * pinned.corner(before);
        let moved = rotation_about_center(baseline.rotation, after) * pinned.corner(after);
        let shift = fixed - moved;
        x += shift.x;
        y += shift.y;
    }

    let mut patch = ItemPatch::new()
        .position(Point::new(x, y))
        .size(Vec2::new(width, height));
    if baseline.kind() == ItemKind::Text {
        patch = patch.font_size(height * TEXT_FONT_HEIGHT_RATIO);
    }
    patch
}

/// Express a canvas-space vector in the frame of an item rotated by `degrees`.
fn unrotate(v: Vec2, degrees: f64) -> Vec2 {
    if degrees == 0.0 {
        return v;
    }
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos + v.y * sin, v.y * cos - v.x * sin)
}

/// Geometry for moving one end of a connector; the other end stays fixed.
pub(crate) fn endpoint_patch(baseline: &CanvasItem, endpoint: Endpoint, delta: Vec2) -> ItemPatch {
    match endpoint {
        Endpoint::Start => {
            let start = baseline.position + delta;
            ItemPatch::new()
                .position(start)
                .size(baseline.end_point() - start)
        }
        Endpoint::End => ItemPatch::new().size(baseline.size + delta),
    }
}
