//! Moodboard - infinite-canvas interaction engine.
//!
//! A [`Canvas`] owns the item store, linear undo history, selection and
//! viewport, and turns raw pointer, wheel and keyboard events into document
//! edits according to the active tool. Rendering and file pickers belong to
//! the host; the host reads [`Canvas::items`], [`Canvas::selection`] and
//! [`Canvas::viewport`] after each event.
//!
//! ```ignore
//! let mut canvas = Canvas::new(Settings::load());
//! canvas.set_active_tool(ToolType::Note);
//! canvas.handle_pointer_down(&PointerEvent::primary((300.0, 300.0)));
//! canvas.handle_pointer_up();
//! assert!(canvas.can_undo());
//! ```

pub mod board;
pub mod canvas;
pub mod constants;
pub mod error;
pub mod history;
pub mod hit_testing;
pub mod input;
pub mod loading;
pub mod perf;
pub mod selection;
pub mod settings;
pub mod spatial_index;
pub mod types;
pub mod viewport;

pub use canvas::{Canvas, ImageRequest, ToolState};
pub use error::{LoadError, LoadResult, SettingsError};
pub use history::Snapshot;
pub use input::{
    InputState, InteractionMode, Key, KeyEvent, Modifiers, PointerButton, PointerEvent,
    PointerOutcome, PointerTarget, ScrollDelta, ScrollEvent, ScrollOutcome,
};
pub use loading::{LoadId, LoadedImage};
pub use settings::Settings;
pub use types::{
    CanvasItem, ItemContent, ItemId, ItemKind, ItemPatch, ShapeType, Stroke, ToolType,
};
pub use viewport::Viewport;

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, defaulting to
/// `moodboard=info`. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("moodboard=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
