//! Canvas-wide constants.
//!
//! Centralizes magic numbers used by the interaction engine so the
//! geometry rules live in one place.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f64 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Zoom step for the zoom-in / zoom-out controls
pub const ZOOM_STEP: f64 = 0.1;

/// Scale change per pixel of vertical wheel delta
pub const DEFAULT_WHEEL_ZOOM_SENSITIVITY: f64 = 0.001;

/// Pixels per line for line-based wheel deltas
pub const DEFAULT_LINE_SCROLL_PIXELS: f64 = 20.0;

// ============================================================================
// Item Defaults
// ============================================================================

/// Sticky note size; notes are centered on the click point
pub const NOTE_SIZE: (f64, f64) = (200.0, 200.0);

/// Initial sticky note text
pub const NOTE_PLACEHOLDER: &str = "New Note";

/// Text box size
pub const TEXT_SIZE: (f64, f64) = (300.0, 60.0);

/// Vertical offset of a new text box above the click point
pub const TEXT_ANCHOR_OFFSET_Y: f64 = 30.0;

/// Initial text box font size
pub const DEFAULT_FONT_SIZE: f64 = 36.0;

/// Initial text box content
pub const TEXT_PLACEHOLDER: &str = "Type Here";

/// Font size as a fraction of the text box height while resizing
pub const TEXT_FONT_HEIGHT_RATIO: f64 = 0.6;

/// Images wider than this are scaled down to it (aspect preserved)
pub const MAX_IMAGE_WIDTH: f64 = 400.0;

/// Image size used when the natural dimensions are unknown
pub const DEFAULT_IMAGE_SIZE: (f64, f64) = (300.0, 200.0);

/// Size a shape is created with before the drag starts
pub const SHAPE_SEED_SIZE: f64 = 1.0;

/// Shapes tapped rather than dragged get this size
pub const DEFAULT_SHAPE_SIZE: (f64, f64) = (100.0, 100.0);

/// Below this extent (in both dimensions) a drawn shape counts as a tap
pub const SHAPE_TAP_THRESHOLD: f64 = 5.0;

// ============================================================================
// Strokes
// ============================================================================

/// Default pen color (gold)
pub const DEFAULT_PEN_COLOR: &str = "#E2B343";

/// Default pen width in canvas units
pub const DEFAULT_PEN_WIDTH: f64 = 5.0;

/// Connector line color
pub const DEFAULT_CONNECTOR_COLOR: &str = "#E2B343";

/// Connector line width in canvas units
pub const DEFAULT_CONNECTOR_WIDTH: f64 = 4.0;

/// Width of the invisible connector hit area in canvas units
pub const CONNECTOR_HIT_WIDTH: f64 = 20.0;

// ============================================================================
// Input Handling
// ============================================================================

/// Minimum width/height an item can be resized to
pub const MIN_ITEM_SIZE: f64 = 20.0;

/// Hit radius of resize and connector endpoint handles, in screen pixels
pub const HANDLE_HIT_RADIUS: f64 = 8.0;
