//! Core types for the moodboard canvas.
//!
//! This module defines the document model: canvas items, their kind-dependent
//! content, partial updates, and the tool palette vocabulary.

use crate::constants::{
    DEFAULT_CONNECTOR_COLOR, DEFAULT_CONNECTOR_WIDTH, DEFAULT_FONT_SIZE, DEFAULT_IMAGE_SIZE,
    DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH, MAX_IMAGE_WIDTH, NOTE_PLACEHOLDER, NOTE_SIZE,
    SHAPE_SEED_SIZE, TEXT_ANCHOR_OFFSET_Y, TEXT_PLACEHOLDER, TEXT_SIZE,
};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique, immutable identifier of a canvas item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape variants for the Shape tool
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeType {
    Circle,
    #[default]
    Square,
    Triangle,
}

/// Stroke color and width for lines and pen strokes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Color as hex string (e.g. "#E2B343")
    pub color: String,
    /// Line width in canvas units
    pub width: f64,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    pub fn connector() -> Self {
        Self::new(DEFAULT_CONNECTOR_COLOR, DEFAULT_CONNECTOR_WIDTH)
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new(DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH)
    }
}

/// The fixed kind of an item, derived from its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ItemKind {
    Image,
    StickyNote,
    Text,
    Shape,
    Connector,
    Freehand,
}

/// The kind-dependent payload of a canvas item.
///
/// The variant is chosen at creation and never changes; [`ItemPatch`] can
/// only edit the fields inside it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemContent {
    /// An image, referenced by URL or embedded as a data URL
    Image { source: String },
    /// A sticky note with plain text
    StickyNote { text: String },
    /// A free text box whose font follows its height when resized
    Text { text: String, font_size: f64 },
    /// A geometric shape filling the item box
    Shape { shape_type: ShapeType },
    /// A straight arrow from `position` to `position + size`
    Connector { stroke: Stroke },
    /// A pen stroke; `path` is an SVG path description relative to `position`
    Freehand { path: String, stroke: Stroke },
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Image { .. } => ItemKind::Image,
            ItemContent::StickyNote { .. } => ItemKind::StickyNote,
            ItemContent::Text { .. } => ItemKind::Text,
            ItemContent::Shape { .. } => ItemKind::Shape,
            ItemContent::Connector { .. } => ItemKind::Connector,
            ItemContent::Freehand { .. } => ItemKind::Freehand,
        }
    }
}

/// An item placed on the infinite canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub id: ItemId,
    /// Canvas-space position; the start point for connectors
    pub position: Point,
    /// Canvas-space extent; the end-point offset for connectors, zero for strokes
    pub size: Vec2,
    /// Rotation in degrees around the item center
    #[serde(default)]
    pub rotation: f64,
    pub content: ItemContent,
}

impl CanvasItem {
    pub fn new(position: Point, size: Vec2, content: ItemContent) -> Self {
        Self {
            id: ItemId::new(),
            position,
            size,
            rotation: 0.0,
            content,
        }
    }

    /// Sticky note centered on `at`.
    pub fn note(at: Point) -> Self {
        let size = Vec2::new(NOTE_SIZE.0, NOTE_SIZE.1);
        Self::new(
            at - size / 2.0,
            size,
            ItemContent::StickyNote {
                text: NOTE_PLACEHOLDER.to_string(),
            },
        )
    }

    /// Text box whose left edge starts at `at`, vertically centered on it.
    pub fn text(at: Point) -> Self {
        Self::new(
            Point::new(at.x, at.y - TEXT_ANCHOR_OFFSET_Y),
            Vec2::new(TEXT_SIZE.0, TEXT_SIZE.1),
            ItemContent::Text {
                text: TEXT_PLACEHOLDER.to_string(),
                font_size: DEFAULT_FONT_SIZE,
            },
        )
    }

    /// 1x1 shape seeded at `at`, grown by the shape drag.
    pub fn shape(at: Point, shape_type: ShapeType) -> Self {
        Self::new(
            at,
            Vec2::new(SHAPE_SEED_SIZE, SHAPE_SEED_SIZE),
            ItemContent::Shape { shape_type },
        )
    }

    /// Zero-length connector starting at `at`.
    pub fn connector(at: Point) -> Self {
        Self::new(
            at,
            Vec2::ZERO,
            ItemContent::Connector {
                stroke: Stroke::connector(),
            },
        )
    }

    /// Pen stroke seeded with a single move-to command at `at`.
    pub fn freehand(at: Point, stroke: Stroke) -> Self {
        Self::new(
            Point::ORIGIN,
            Vec2::ZERO,
            ItemContent::Freehand {
                path: format!("M {} {}", at.x, at.y),
                stroke,
            },
        )
    }

    /// Image anchored at `at`, sized from its natural pixel dimensions.
    pub fn image(at: Point, source: impl Into<String>, natural_size: Option<(u32, u32)>) -> Self {
        Self::new(
            at,
            fit_image_size(natural_size),
            ItemContent::Image {
                source: source.into(),
            },
        )
    }

    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// End point of a connector (`position + size`).
    pub fn end_point(&self) -> Point {
        self.position + self.size
    }

    /// Whether the item shows corner resize handles when selected.
    pub fn is_resizable(&self) -> bool {
        matches!(
            self.kind(),
            ItemKind::Image | ItemKind::StickyNote | ItemKind::Text | ItemKind::Shape
        )
    }

    pub fn font_size(&self) -> Option<f64> {
        match &self.content {
            ItemContent::Text { font_size, .. } => Some(*font_size),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Freehand { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn stroke(&self) -> Option<&Stroke> {
        match &self.content {
            ItemContent::Connector { stroke } | ItemContent::Freehand { stroke, .. } => {
                Some(stroke)
            }
            _ => None,
        }
    }
}

/// Scale natural image dimensions down to [`MAX_IMAGE_WIDTH`], preserving aspect.
pub fn fit_image_size(natural_size: Option<(u32, u32)>) -> Vec2 {
    match natural_size {
        Some((width, height)) if width > 0 && height > 0 => {
            let (width, height) = (width as f64, height as f64);
            if width > MAX_IMAGE_WIDTH {
                Vec2::new(MAX_IMAGE_WIDTH, height * MAX_IMAGE_WIDTH / width)
            } else {
                Vec2::new(width, height)
            }
        }
        _ => Vec2::new(DEFAULT_IMAGE_SIZE.0, DEFAULT_IMAGE_SIZE.1),
    }
}

/// A shallow partial update of a [`CanvasItem`].
///
/// Unset fields are left alone. Content fields that do not belong to the
/// item's kind are ignored, so a patch can never change what an item is.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemPatch {
    pub position: Option<Point>,
    pub size: Option<Vec2>,
    pub rotation: Option<f64>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub path: Option<String>,
    pub source: Option<String>,
    pub shape_type: Option<ShapeType>,
    pub stroke: Option<Stroke>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn shape_type(mut self, shape_type: ShapeType) -> Self {
        self.shape_type = Some(shape_type);
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Merge this patch into `item`.
    pub fn apply_to(&self, item: &mut CanvasItem) {
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(size) = self.size {
            item.size = size;
        }
        if let Some(rotation) = self.rotation {
            item.rotation = rotation;
        }

        match &mut item.content {
            ItemContent::Image { source } => {
                if let Some(new_source) = &self.source {
                    source.clone_from(new_source);
                }
            }
            ItemContent::StickyNote { text } => {
                if let Some(new_text) = &self.text {
                    text.clone_from(new_text);
                }
            }
            ItemContent::Text { text, font_size } => {
                if let Some(new_text) = &self.text {
                    text.clone_from(new_text);
                }
                if let Some(new_font_size) = self.font_size {
                    *font_size = new_font_size;
                }
            }
            ItemContent::Shape { shape_type } => {
                if let Some(new_shape) = self.shape_type {
                    *shape_type = new_shape;
                }
            }
            ItemContent::Connector { stroke } => {
                if let Some(new_stroke) = &self.stroke {
                    stroke.clone_from(new_stroke);
                }
            }
            ItemContent::Freehand { path, stroke } => {
                if let Some(new_path) = &self.path {
                    path.clone_from(new_path);
                }
                if let Some(new_stroke) = &self.stroke {
                    stroke.clone_from(new_stroke);
                }
            }
        }
    }
}

/// Tools of the canvas tool palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    #[default]
    Select,
    /// Hand tool: every drag pans
    Pan,
    Note,
    Text,
    Image,
    Shape,
    /// Arrow tool
    Connector,
    Pen,
    Eraser,
}

impl ToolType {
    /// Click-to-create tools revert to Select after a successful creation.
    pub fn is_one_shot(&self) -> bool {
        matches!(self, ToolType::Note | ToolType::Text | ToolType::Image)
    }
}
