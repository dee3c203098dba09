//! Input state machine - one variant per interaction mode.
//!
//! Each variant carries exactly what its mode needs, so a resize can never
//! be missing its handle and a pan never carries a stale item.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning            (middle button, pan tool, or select tool on empty canvas)
//! Idle -> Erasing            (eraser tool)
//! Idle -> DrawingConnector   (connector tool)
//! Idle -> DrawingFreehand    (pen tool)
//! Idle -> DrawingShape       (shape tool)
//! Idle -> Dragging           (select tool on an item)
//! Idle -> Resizing           (resize handle of the selected item)
//! Idle -> EditingEndpoint    (endpoint handle of the selected connector)
//!
//! Any -> Idle                (pointer up or pointer leave)
//! ```

use crate::hit_testing::{Endpoint, ResizeHandle};
use crate::types::{CanvasItem, ItemId};
use kurbo::{Point, Vec2};

/// Fieldless view of [`InputState`], for callers that only need the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    Idle,
    Panning,
    Dragging,
    Resizing,
    DrawingFreehand,
    DrawingConnector,
    EditingEndpoint,
    DrawingShape,
    Erasing,
}

/// The interaction session of the current gesture.
///
/// Baselines are copies of the item taken at pointer-down; moves compute
/// from the baseline plus the total pointer delta so rounding never
/// accumulates across ticks.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No active gesture
    #[default]
    Idle,

    /// Canvas panning
    Panning {
        /// Screen position at pointer-down
        start: Point,
        /// Pan offset at pointer-down
        start_pan: Vec2,
    },

    /// Moving an item
    Dragging { start: Point, baseline: CanvasItem },

    /// Resizing the selected item from one of its corners
    Resizing {
        start: Point,
        handle: ResizeHandle,
        baseline: CanvasItem,
    },

    /// Drawing a pen stroke
    DrawingFreehand {
        item_id: ItemId,
        /// Accumulated path, written to the item on every move
        path: String,
    },

    /// Dragging out a new connector; its start is `baseline.position`
    DrawingConnector { baseline: CanvasItem },

    /// Moving one end of the selected connector
    EditingEndpoint {
        start: Point,
        endpoint: Endpoint,
        baseline: CanvasItem,
    },

    /// Dragging out a new shape; its anchor is `baseline.position`
    DrawingShape { baseline: CanvasItem },

    /// Erasing whatever is under the pointer while the button is held
    Erasing,
}

impl InputState {
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle => InteractionMode::Idle,
            Self::Panning { .. } => InteractionMode::Panning,
            Self::Dragging { .. } => InteractionMode::Dragging,
            Self::Resizing { .. } => InteractionMode::Resizing,
            Self::DrawingFreehand { .. } => InteractionMode::DrawingFreehand,
            Self::DrawingConnector { .. } => InteractionMode::DrawingConnector,
            Self::EditingEndpoint { .. } => InteractionMode::EditingEndpoint,
            Self::DrawingShape { .. } => InteractionMode::DrawingShape,
            Self::Erasing => InteractionMode::Erasing,
        }
    }

    /// Returns true if the state is Idle
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if currently panning the canvas
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Whether finishing this gesture records a history entry.
    ///
    /// Erasing commits per removed item instead, and panning never touches
    /// the document.
    pub fn commits_on_release(&self) -> bool {
        !matches!(self, Self::Idle | Self::Panning { .. } | Self::Erasing)
    }

    /// The item the gesture is manipulating, if any
    pub fn active_item(&self) -> Option<ItemId> {
        match self {
            Self::Dragging { baseline, .. }
            | Self::Resizing { baseline, .. }
            | Self::DrawingConnector { baseline }
            | Self::EditingEndpoint { baseline, .. }
            | Self::DrawingShape { baseline } => Some(baseline.id),
            Self::DrawingFreehand { item_id, .. } => Some(*item_id),
            Self::Idle | Self::Panning { .. } | Self::Erasing => None,
        }
    }

    /// Reset to Idle state, returning the finished session
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}
