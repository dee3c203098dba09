//! Wheel zoom.
//!
//! Every wheel event zooms around the pointer. Line-based deltas (mouse
//! wheels on some platforms) are converted to pixels first.

use super::Modifiers;
use crate::canvas::Canvas;
use kurbo::{Point, Vec2};

/// Wheel delta as reported by the platform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollDelta {
    Pixels(Vec2),
    Lines(Vec2),
}

impl ScrollDelta {
    pub fn pixel_delta(&self, line_height: f64) -> Vec2 {
        match self {
            ScrollDelta::Pixels(delta) => *delta,
            ScrollDelta::Lines(lines) => *lines * line_height,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEvent {
    pub position: Point,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

/// What the host should do after a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// The viewport changed
    pub zoomed: bool,
    /// Suppress the platform's native handling (page zoom on Ctrl/Cmd+wheel)
    pub prevent_default: bool,
}

impl Canvas {
    pub fn handle_scroll(&mut self, event: &ScrollEvent) -> ScrollOutcome {
        crate::profile_scope!("handle_scroll");

        let delta = event.delta.pixel_delta(self.settings.line_scroll_pixels);
        let scale_delta = -delta.y * self.settings.wheel_zoom_sensitivity;
        let zoomed = self.viewport.zoom_around(event.position, scale_delta);
        if zoomed {
            tracing::trace!(scale = self.viewport.scale(), "Wheel zoom");
        }

        ScrollOutcome {
            zoomed,
            prevent_default: event.modifiers.command(),
        }
    }
}
