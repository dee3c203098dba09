//! Precise hit geometry for canvas items and their handles.
//!
//! The spatial index narrows a point query down to items whose bounding boxes
//! contain the point; the functions here decide whether the rendered geometry
//! actually does:
//! - boxed items (image, note, text, shape): the rotated item rectangle
//! - connectors: within half the hit width of the start-end segment
//! - freehand strokes: within half the stroke width of any path segment

use crate::constants::CONNECTOR_HIT_WIDTH;
use crate::types::{CanvasItem, ItemContent};
use kurbo::{Affine, BezPath, Line, ParamCurveNearest, PathEl, Point, Rect, Size};

/// Accuracy passed to curve nearest-point queries
const NEAREST_ACCURACY: f64 = 1e-3;

/// A corner resize handle of a boxed item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    NorthWest,
    NorthEast,
    SouthWest,
    SouthEast,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 4] = [
        ResizeHandle::NorthWest,
        ResizeHandle::NorthEast,
        ResizeHandle::SouthWest,
        ResizeHandle::SouthEast,
    ];

    /// Moves the top edge (changes height and y)
    pub fn moves_north(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::NorthEast)
    }

    /// Moves the bottom edge (changes height)
    pub fn moves_south(self) -> bool {
        matches!(self, ResizeHandle::SouthWest | ResizeHandle::SouthEast)
    }

    /// Moves the right edge (changes width)
    pub fn moves_east(self) -> bool {
        matches!(self, ResizeHandle::NorthEast | ResizeHandle::SouthEast)
    }

    /// Moves the left edge (changes width and x)
    pub fn moves_west(self) -> bool {
        matches!(self, ResizeHandle::NorthWest | ResizeHandle::SouthWest)
    }

    pub fn name(self) -> &'static str {
        match self {
            ResizeHandle::NorthWest => "nw",
            ResizeHandle::NorthEast => "ne",
            ResizeHandle::SouthWest => "sw",
            ResizeHandle::SouthEast => "se",
        }
    }

    /// The diagonally opposite corner, which stays put while this one moves.
    pub fn opposite(self) -> ResizeHandle {
        match self {
            ResizeHandle::NorthWest => ResizeHandle::SouthEast,
            ResizeHandle::NorthEast => ResizeHandle::SouthWest,
            ResizeHandle::SouthWest => ResizeHandle::NorthEast,
            ResizeHandle::SouthEast => ResizeHandle::NorthWest,
        }
    }

    /// Corner of `rect` this handle sits on (before rotation).
    pub(crate) fn corner(self, rect: Rect) -> Point {
        match self {
            ResizeHandle::NorthWest => Point::new(rect.x0, rect.y0),
            ResizeHandle::NorthEast => Point::new(rect.x1, rect.y0),
            ResizeHandle::SouthWest => Point::new(rect.x0, rect.y1),
            ResizeHandle::SouthEast => Point::new(rect.x1, rect.y1),
        }
    }
}

/// Which end of a connector an endpoint handle controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

/// A draggable affordance attached to the selected item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    Resize(ResizeHandle),
    Endpoint(Endpoint),
}

/// The unrotated box of an item, normalized to positive extent.
fn item_rect(item: &CanvasItem) -> Rect {
    Rect::from_origin_size(item.position, Size::new(item.size.x, item.size.y)).abs()
}

/// Rotation about the item center, as rendered.
fn item_transform(item: &CanvasItem) -> Affine {
    rotation_about_center(item.rotation, item_rect(item))
}

/// Rotation by `degrees` about the center of `rect`.
pub(crate) fn rotation_about_center(degrees: f64, rect: Rect) -> Affine {
    if degrees == 0.0 {
        Affine::IDENTITY
    } else {
        Affine::rotate_about(degrees.to_radians(), rect.center())
    }
}

fn parse_path(path: &str) -> Option<BezPath> {
    match BezPath::from_svg(path) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!("Unparseable stroke path: {}", e);
            None
        }
    }
}

/// Canvas-space bounding box of everything that can be hit.
pub fn item_bounds(item: &CanvasItem) -> Rect {
    match &item.content {
        ItemContent::Connector { .. } => {
            Rect::from_points(item.position, item.end_point()).inflate(
                CONNECTOR_HIT_WIDTH / 2.0,
                CONNECTOR_HIT_WIDTH / 2.0,
            )
        }
        ItemContent::Freehand { path, stroke } => {
            let half_width = stroke.width / 2.0;
            parse_path(path)
                .map(|p| {
                    (Affine::translate(item.position.to_vec2()) * p)
                        .control_box()
                        .inflate(half_width, half_width)
                })
                .unwrap_or_else(|| Rect::from_origin_size(item.position, Size::ZERO))
        }
        _ => item_transform(item).transform_rect_bbox(item_rect(item)),
    }
}

/// Whether the rendered geometry of `item` contains the canvas point.
pub fn hit_item(item: &CanvasItem, point: Point) -> bool {
    match &item.content {
        ItemContent::Connector { .. } => {
            let line = Line::new(item.position, item.end_point());
            distance_to_line(line, point) <= CONNECTOR_HIT_WIDTH / 2.0
        }
        ItemContent::Freehand { path, stroke } => {
            let Some(path) = parse_path(path) else {
                return false;
            };
            let local = point - item.position.to_vec2();
            distance_to_path(&path, local) <= stroke.width / 2.0
        }
        _ => {
            let local = item_transform(item).inverse() * point;
            let rect = item_rect(item);
            local.x >= rect.x0 && local.x <= rect.x1 && local.y >= rect.y0 && local.y <= rect.y1
        }
    }
}

fn distance_to_line(line: Line, point: Point) -> f64 {
    line.nearest(point, NEAREST_ACCURACY).distance_sq.sqrt()
}

/// Distance from `point` to the closest segment of `path`; a path made of a
/// lone move-to counts as a dot.
fn distance_to_path(path: &BezPath, point: Point) -> f64 {
    let mut best = f64::INFINITY;
    let mut has_segments = false;
    for segment in path.segments() {
        has_segments = true;
        best = best.min(segment.nearest(point, NEAREST_ACCURACY).distance_sq.sqrt());
    }
    if !has_segments {
        for element in path.elements() {
            if let PathEl::MoveTo(p) = element {
                best = best.min(p.distance(point));
            }
        }
    }
    best
}

/// Canvas-space positions of the handles `item` shows while selected.
pub fn handle_positions(item: &CanvasItem) -> Vec<(Handle, Point)> {
    match &item.content {
        ItemContent::Connector { .. } => vec![
            (Handle::Endpoint(Endpoint::Start), item.position),
            (Handle::Endpoint(Endpoint::End), item.end_point()),
        ],
        _ if item.is_resizable() => {
            let rect = item_rect(item);
            let transform = item_transform(item);
            ResizeHandle::ALL
                .iter()
                .map(|&handle| (Handle::Resize(handle), transform * handle.corner(rect)))
                .collect()
        }
        _ => Vec::new(),
    }
}

/// The handle of `item` within `radius` canvas units of `point`, if any.
/// The end handle wins over the start handle of a zero-length connector.
pub fn hit_handle(item: &CanvasItem, point: Point, radius: f64) -> Option<Handle> {
    handle_positions(item)
        .into_iter()
        .rev()
        .find(|(_, position)| position.distance(point) <= radius)
        .map(|(handle, _)| handle)
}
