//! User settings for the canvas, persisted as JSON in the platform config dir.

use crate::constants::{
    DEFAULT_LINE_SCROLL_PIXELS, DEFAULT_PEN_COLOR, DEFAULT_PEN_WIDTH,
    DEFAULT_WHEEL_ZOOM_SENSITIVITY,
};
use crate::error::SettingsError;
use crate::types::ShapeType;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "moodboard";
const SETTINGS_FILE: &str = "settings.json";

/// Canvas settings. Missing fields in a settings file take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scale change per pixel of wheel delta
    pub wheel_zoom_sensitivity: f64,
    /// Pixels per line for line-based wheel deltas
    pub line_scroll_pixels: f64,
    /// Initial pen color
    pub pen_color: String,
    /// Initial pen width in canvas units
    pub pen_width: f64,
    /// Initial shape for the shape tool
    pub default_shape: ShapeType,
    /// Cap on stored history snapshots; `None` keeps everything
    pub max_history: Option<usize>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wheel_zoom_sensitivity: DEFAULT_WHEEL_ZOOM_SENSITIVITY,
            line_scroll_pixels: DEFAULT_LINE_SCROLL_PIXELS,
            pen_color: DEFAULT_PEN_COLOR.to_string(),
            pen_width: DEFAULT_PEN_WIDTH,
            default_shape: ShapeType::default(),
            max_history: None,
        }
    }
}

impl Settings {
    /// Default settings file location, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = Self::config_path().ok_or(SettingsError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Load from the default location, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(Some(settings)) => {
                tracing::info!("Loaded canvas settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> anyhow::Result<Option<Self>> {
        let Some(path) = Self::config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let settings = Self::load_from(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(settings.sanitized()))
    }

    /// Replace out-of-range values with defaults.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.wheel_zoom_sensitivity.is_finite() && self.wheel_zoom_sensitivity > 0.0) {
            self.wheel_zoom_sensitivity = defaults.wheel_zoom_sensitivity;
        }
        if !(self.line_scroll_pixels.is_finite() && self.line_scroll_pixels > 0.0) {
            self.line_scroll_pixels = defaults.line_scroll_pixels;
        }
        if !(self.pen_width.is_finite() && self.pen_width > 0.0) {
            self.pen_width = defaults.pen_width;
        }
        if self.max_history == Some(0) {
            self.max_history = None;
        }
        self
    }
}
