//! Viewport controller - owns the canvas scale and pan offset.
//!
//! Rendering maps canvas space to the screen with
//! `screen = origin + pan + canvas * scale`; pointer input goes the other way
//! through [`CoordinateConverter`](crate::input::coords::CoordinateConverter).

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    scale: f64,
    /// Pan offset in screen pixels
    pan: Vec2,
    /// Top-left of the canvas element in screen pixels
    origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_ZOOM,
            pan: Vec2::ZERO,
            origin: Point::ORIGIN,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Set where the canvas element sits on screen.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn coordinate_context(&self) -> CoordinateContext {
        CoordinateContext::new(self.origin, self.pan, self.scale)
    }

    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        CoordinateConverter::screen_to_canvas(screen, &self.coordinate_context())
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        CoordinateConverter::canvas_to_screen(canvas, &self.coordinate_context())
    }

    /// Set the scale, clamped to `[MIN_ZOOM, MAX_ZOOM]`. Returns whether it changed.
    pub fn set_scale(&mut self, scale: f64) -> bool {
        if !scale.is_finite() {
            return false;
        }
        let clamped = clamp_scale(scale);
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Change the scale by `scale_delta` while keeping the canvas point under
    /// `screen` fixed on screen. Returns whether anything changed.
    pub fn zoom_around(&mut self, screen: Point, scale_delta: f64) -> bool {
        if !scale_delta.is_finite() {
            return false;
        }
        let old_scale = self.scale;
        let new_scale = clamp_scale(old_scale + scale_delta);
        if new_scale == old_scale {
            return false;
        }

        let local = screen - self.origin;
        self.pan = local - (local - self.pan) * (new_scale / old_scale);
        self.scale = new_scale;
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_scale(self.scale + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_scale(self.scale - ZOOM_STEP)
    }

    /// Shift the pan offset. The canvas is unbounded, so no clamping.
    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Reset to scale 1 and no pan.
    pub fn fit_to_screen(&mut self) {
        self.scale = DEFAULT_ZOOM;
        self.pan = Vec2::ZERO;
    }
}

fn clamp_scale(scale: f64) -> f64 {
    scale.clamp(MIN_ZOOM, MAX_ZOOM)
}
