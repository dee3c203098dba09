//! Coordinate conversion utilities for canvas interactions.
//!
//! This module provides centralized coordinate conversion functions so the
//! screen/canvas formulas are not duplicated across input handling code.

use kurbo::{Point, Vec2};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub origin: Point,
    pub pan: Vec2,
    pub scale: f64,
}

impl CoordinateContext {
    /// Create a new coordinate context
    #[inline]
    pub fn new(origin: Point, pan: Vec2, scale: f64) -> Self {
        Self { origin, pan, scale }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert screen position to canvas position
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        ((screen_pos - ctx.origin - ctx.pan) / ctx.scale).to_point()
    }

    /// Convert canvas position to screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: Point, ctx: &CoordinateContext) -> Point {
        ctx.origin + ctx.pan + canvas_pos.to_vec2() * ctx.scale
    }

    /// Convert a delta from screen to canvas (for drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(delta: Vec2, scale: f64) -> Vec2 {
        delta / scale
    }

    /// Convert a delta from canvas to screen
    #[inline]
    pub fn delta_canvas_to_screen(delta: Vec2, scale: f64) -> Vec2 {
        delta * scale
    }
}
