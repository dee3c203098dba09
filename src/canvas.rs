//! Canvas - owns every component of the interaction engine.
//!
//! The canvas is the single writer of the board, the selection and the
//! viewport. Input handlers live in the `input` module as further
//! `impl Canvas` blocks; this file holds construction, tool state, the
//! programmatic operations and image placement.

use crate::board::Board;
use crate::error::LoadResult;
use crate::hit_testing::item_bounds;
use crate::history::{History, Snapshot};
use crate::input::{InputState, InteractionMode};
use crate::loading::{ImageLoader, LoadId, LoadSource, LoadedImage, is_image_path};
use crate::selection::SelectionManager;
use crate::settings::Settings;
use crate::types::{CanvasItem, ItemId, ItemPatch, ShapeType, Stroke, ToolType};
use crate::viewport::Viewport;
use kurbo::{Point, Rect, Size, Vec2};
use std::collections::HashMap;
use std::path::PathBuf;

/// Active tool and the drawing style it applies.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    pub active: ToolType,
    pub shape: ShapeType,
    pub pen_color: String,
    pub pen_width: f64,
}

impl ToolState {
    fn from_settings(settings: &Settings) -> Self {
        Self {
            active: ToolType::default(),
            shape: settings.default_shape,
            pen_color: settings.pen_color.clone(),
            pen_width: settings.pen_width,
        }
    }

    pub fn pen_stroke(&self) -> Stroke {
        Stroke::new(self.pen_color.clone(), self.pen_width)
    }
}

/// Ticket for an image-tool placement waiting on file content.
///
/// The host shows its file picker and answers with
/// [`Canvas::load_image_file`] or [`Canvas::load_image_bytes`], or gives up
/// with [`Canvas::cancel_image_request`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageRequest {
    pub id: LoadId,
    /// Canvas point the image will be anchored at
    pub anchor: Point,
}

/// How an image placement was started; decides what happens on success.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PlacementOrigin {
    /// Image tool: select the image and switch back to Select
    Tool,
    /// Dropped file: insert only
    Drop,
}

#[derive(Clone, Copy, Debug)]
struct PendingImage {
    anchor: Point,
    origin: PlacementOrigin,
    /// Bytes or a path have been handed to a worker
    in_flight: bool,
}

/// A decoded image held back until the current gesture ends.
#[derive(Debug)]
struct ReadyImage {
    id: LoadId,
    pending: PendingImage,
    loaded: LoadedImage,
}

pub struct Canvas {
    pub(crate) board: Board,
    pub(crate) history: History,
    pub(crate) selection: SelectionManager,
    pub(crate) viewport: Viewport,
    pub(crate) tools: ToolState,
    pub(crate) input_state: InputState,
    pub(crate) settings: Settings,
    loader: ImageLoader,
    pending_images: HashMap<LoadId, PendingImage>,
    ready_images: Vec<ReadyImage>,
    next_load_id: u64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl Canvas {
    pub fn new(settings: Settings) -> Self {
        Self::with_items(Vec::new(), settings)
    }

    /// Start from a pre-populated board. The seed becomes the base of history.
    pub fn with_items(items: Vec<CanvasItem>, settings: Settings) -> Self {
        let settings = settings.sanitized();
        let board = Board::from_items(items);
        let history = History::new(board.snapshot()).with_limit(settings.max_history);
        tracing::debug!(items = board.len(), "Canvas created");

        Self {
            board,
            history,
            selection: SelectionManager::new(),
            viewport: Viewport::new(),
            tools: ToolState::from_settings(&settings),
            input_state: InputState::Idle,
            settings,
            loader: ImageLoader::new(),
            pending_images: HashMap::new(),
            ready_images: Vec::new(),
            next_load_id: 0,
        }
    }

    // ---------------------------------------------------------------------
    // Read access for renderers and hosts
    // ---------------------------------------------------------------------

    /// Items in paint order, bottom first.
    pub fn items(&self) -> &[CanvasItem] {
        self.board.items()
    }

    pub fn item(&self, id: ItemId) -> Option<&CanvasItem> {
        self.board.get(id)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selection.contains(id)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn active_tool(&self) -> ToolType {
        self.tools.active
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn mode(&self) -> InteractionMode {
        self.input_state.mode()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---------------------------------------------------------------------
    // Tool palette
    // ---------------------------------------------------------------------

    /// Switch tools. Always clears the selection.
    pub fn set_active_tool(&mut self, tool: ToolType) {
        if self.tools.active != tool {
            tracing::debug!(from = ?self.tools.active, to = ?tool, "Tool changed");
        }
        self.tools.active = tool;
        self.selection.clear();
    }

    pub fn set_active_shape(&mut self, shape: ShapeType) {
        self.tools.shape = shape;
    }

    pub fn set_pen_color(&mut self, color: impl Into<String>) {
        self.tools.pen_color = color.into();
    }

    /// Non-positive or non-finite widths are ignored.
    pub fn set_pen_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.tools.pen_width = width;
        }
    }

    // ---------------------------------------------------------------------
    // Document operations
    // ---------------------------------------------------------------------

    /// Append an item without recording history. Returns `false` for a
    /// duplicate id.
    pub fn add_item(&mut self, item: CanvasItem) -> bool {
        self.board.add(item)
    }

    /// Merge `patch` into an item without recording history. Stale ids are
    /// ignored.
    pub fn update_item(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        self.board.update(id, patch)
    }

    /// Remove items, drop them from the selection and record one history
    /// entry. Returns the ids that were actually removed.
    pub fn remove_items(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let removed = self.board.remove(ids);
        if !removed.is_empty() {
            self.selection.deselect(&removed);
            self.commit_history();
            tracing::debug!(count = removed.len(), "Removed items");
        }
        removed
    }

    /// Replace the text of a note or text item and record history.
    pub fn set_item_text(&mut self, id: ItemId, text: impl Into<String>) -> bool {
        let changed = self.board.update(id, &ItemPatch::new().text(text));
        if changed {
            self.commit_history();
        }
        changed
    }

    /// Select a single item, or clear the selection with `None`.
    /// Ids that are not on the board clear the selection.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selection.select(id.filter(|&id| self.board.contains(id)));
    }

    /// Record the current board as a history entry. Returns `false` if the
    /// board has not changed since the last entry.
    pub fn commit_history(&mut self) -> bool {
        self.history.commit(self.board.snapshot())
    }

    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!(cursor = self.history.cursor(), "Undo");
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                tracing::debug!(cursor = self.history.cursor(), "Redo");
                true
            }
            None => false,
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.input_state = InputState::Idle;
        self.board.restore(snapshot);
        self.selection.clear();
    }

    // ---------------------------------------------------------------------
    // Viewport
    // ---------------------------------------------------------------------

    /// Canvas point under a screen point.
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        self.viewport.screen_to_canvas(screen)
    }

    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        self.viewport.canvas_to_screen(canvas)
    }

    /// Where the canvas element sits on screen.
    pub fn set_viewport_origin(&mut self, origin: Point) {
        self.viewport.set_origin(origin);
    }

    pub fn set_scale(&mut self, scale: f64) -> bool {
        self.viewport.set_scale(scale)
    }

    pub fn zoom_around(&mut self, screen: Point, scale_delta: f64) -> bool {
        self.viewport.zoom_around(screen, scale_delta)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.viewport.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.viewport.zoom_out()
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.viewport.pan_by(delta);
    }

    pub fn fit_to_screen(&mut self) {
        self.viewport.fit_to_screen();
    }

    /// Topmost item under a screen point.
    pub fn hit_test(&self, screen: Point) -> Option<ItemId> {
        self.board.find_at(self.screen_to_canvas(screen))
    }

    /// Items intersecting a viewport of `size` screen pixels, in paint order.
    pub fn visible_items(&self, size: Size) -> Vec<&CanvasItem> {
        let origin = self.viewport.origin();
        let top_left = self.screen_to_canvas(origin);
        let bottom_right = self.screen_to_canvas(origin + size.to_vec2());
        self.board.items_in_rect(Rect::from_points(top_left, bottom_right))
    }

    /// Canvas-space bounds of an item, as used for hit testing.
    pub fn item_bounds(&self, id: ItemId) -> Option<Rect> {
        self.board.get(id).map(item_bounds)
    }

    // ---------------------------------------------------------------------
    // Image placement
    // ---------------------------------------------------------------------

    fn next_load_id(&mut self) -> LoadId {
        let id = LoadId(self.next_load_id);
        self.next_load_id += 1;
        id
    }

    /// Register an image-tool placement at `anchor` (canvas space).
    pub(crate) fn request_image(&mut self, anchor: Point) -> ImageRequest {
        let id = self.next_load_id();
        self.pending_images.insert(
            id,
            PendingImage {
                anchor,
                origin: PlacementOrigin::Tool,
                in_flight: false,
            },
        );
        tracing::debug!(load_id = %id, "Image requested");
        ImageRequest { id, anchor }
    }

    /// Fulfil a request with a file read and decoded in the background.
    pub fn load_image_file(&mut self, id: LoadId, path: impl Into<PathBuf>) -> bool {
        self.start_load(id, LoadSource::File(path.into()))
    }

    /// Fulfil a request with raw file bytes decoded in the background.
    pub fn load_image_bytes(&mut self, id: LoadId, bytes: Vec<u8>) -> bool {
        self.start_load(id, LoadSource::Bytes(bytes))
    }

    fn start_load(&mut self, id: LoadId, source: LoadSource) -> bool {
        let Some(pending) = self.pending_images.get_mut(&id) else {
            tracing::debug!(load_id = %id, "Ignoring load for unknown request");
            return false;
        };
        if pending.in_flight {
            tracing::debug!(load_id = %id, "Request already has a load in flight");
            return false;
        }
        pending.in_flight = true;
        self.loader.spawn(id, source);
        true
    }

    /// Abandon a request. A load already in flight is discarded when it
    /// finishes, and a decoded image still waiting for a gesture to end is
    /// dropped.
    pub fn cancel_image_request(&mut self, id: LoadId) -> bool {
        let queued = self.ready_images.len();
        self.ready_images.retain(|ready| ready.id != id);
        let cancelled =
            self.pending_images.remove(&id).is_some() || self.ready_images.len() != queued;
        if cancelled {
            tracing::debug!(load_id = %id, "Image request cancelled");
        }
        cancelled
    }

    /// Requests not yet placed, including decoded images waiting for the
    /// current gesture to end.
    pub fn pending_image_count(&self) -> usize {
        self.pending_images.len() + self.ready_images.len()
    }

    /// Load every image among `paths` and insert each at the drop point.
    /// Other files are skipped. Returns the ids of the started loads.
    pub fn drop_files(&mut self, screen: Point, paths: Vec<PathBuf>) -> Vec<LoadId> {
        let anchor = self.screen_to_canvas(screen);
        let mut started = Vec::new();
        for path in paths {
            if !is_image_path(&path) {
                tracing::debug!(path = %path.display(), "Skipping dropped non-image file");
                continue;
            }
            let id = self.next_load_id();
            self.pending_images.insert(
                id,
                PendingImage {
                    anchor,
                    origin: PlacementOrigin::Drop,
                    in_flight: true,
                },
            );
            self.loader.spawn(id, LoadSource::File(path));
            started.push(id);
        }
        started
    }

    /// Insert every image whose background load has finished. Call once per
    /// frame; never blocks.
    pub fn poll_image_loads(&mut self) -> Vec<ItemId> {
        crate::profile_scope!("poll_image_loads");
        let mut placed = self.flush_ready_images();
        for (id, result) in self.loader.try_drain() {
            placed.extend(self.complete_image_load(id, result));
        }
        placed
    }

    /// Block until an in-flight load places an image. Returns `None` once no
    /// live load is left, or when the image has to wait for the current
    /// gesture to end.
    pub fn wait_for_image_load(&mut self) -> Option<ItemId> {
        while self.pending_images.values().any(|p| p.in_flight) {
            let (id, result) = match self.loader.recv() {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("{}", e);
                    return None;
                }
            };
            let deferred = self.ready_images.len();
            if let Some(item_id) = self.complete_image_load(id, result) {
                return Some(item_id);
            }
            if self.ready_images.len() != deferred {
                return None;
            }
        }
        None
    }

    /// Finish a placement with a decoded image, or drop it on failure.
    ///
    /// Results for cancelled or unknown requests are discarded. Nothing is
    /// inserted unless decoding succeeded. While a gesture is in progress the
    /// image waits and is placed after the gesture's own history entry.
    pub fn complete_image_load(
        &mut self,
        id: LoadId,
        result: LoadResult<LoadedImage>,
    ) -> Option<ItemId> {
        let Some(pending) = self.pending_images.remove(&id) else {
            tracing::debug!(load_id = %id, "Discarding result of cancelled image load");
            return None;
        };

        let loaded = match result {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::warn!(load_id = %id, "Image load failed: {}", e);
                return None;
            }
        };

        if !self.input_state.is_idle() {
            let mode = self.input_state.mode();
            tracing::debug!(load_id = %id, ?mode, "Deferring image placement until gesture ends");
            self.ready_images.push(ReadyImage {
                id,
                pending,
                loaded,
            });
            return None;
        }
        self.place_image(id, pending, loaded)
    }

    /// Place every image that finished during the last gesture, in arrival
    /// order. Does nothing while a gesture is still running.
    pub(crate) fn flush_ready_images(&mut self) -> Vec<ItemId> {
        if !self.input_state.is_idle() || self.ready_images.is_empty() {
            return Vec::new();
        }
        std::mem::take(&mut self.ready_images)
            .into_iter()
            .filter_map(|ready| self.place_image(ready.id, ready.pending, ready.loaded))
            .collect()
    }

    fn place_image(
        &mut self,
        id: LoadId,
        pending: PendingImage,
        loaded: LoadedImage,
    ) -> Option<ItemId> {
        let item = CanvasItem::image(pending.anchor, loaded.source, Some(loaded.natural_size));
        let item_id = item.id;
        if !self.board.add(item) {
            return None;
        }
        self.commit_history();

        if pending.origin == PlacementOrigin::Tool {
            self.selection.select(Some(item_id));
            // One-shot tool reverts without clearing the new selection
            self.tools.active = ToolType::Select;
        }
        tracing::debug!(load_id = %id, item_id = %item_id, "Image placed");
        Some(item_id)
    }
}
