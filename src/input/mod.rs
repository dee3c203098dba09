//! Pointer, wheel and keyboard input handling for the canvas.
//!
//! This module implements the interaction engine: raw events from the host
//! are resolved against the viewport and dispatched by the active tool into
//! one of the [`InputState`] modes.
//!
//! ## Modules
//!
//! - `state` - Input state machine enum and helper methods
//! - `coords` - Screen/canvas coordinate conversion
//! - `mouse_down` - Pointer down handling (mode selection, item creation)
//! - `drag` - Pointer move handling (pan, drag, resize, drawing)
//! - `mouse_up` - Pointer up handling (finalize gesture, commit history)
//! - `transform` - Wheel zoom
//! - `keyboard` - Delete and undo/redo shortcuts

pub mod coords;
mod drag;
mod keyboard;
mod mouse_down;
mod mouse_up;
mod state;
mod transform;

pub use keyboard::{Key, KeyEvent};
pub use mouse_down::{PointerOutcome, PointerTarget};
pub use state::{InputState, InteractionMode};
pub use transform::{ScrollDelta, ScrollEvent, ScrollOutcome};

use kurbo::Point;

/// Pointer buttons the canvas distinguishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub control: bool,
    /// Command on macOS
    pub platform: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Control or Command
    pub fn command(&self) -> bool {
        self.control || self.platform
    }
}

/// A pointer event in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Primary-button event with no modifiers
    pub fn primary(position: impl Into<Point>) -> Self {
        Self {
            position: position.into(),
            button: PointerButton::Primary,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}
