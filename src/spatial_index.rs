//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing on the canvas.
//! Point queries return candidates whose bounding boxes contain the point;
//! precise per-kind geometry is checked afterwards in `hit_testing`.

use crate::types::ItemId;
use kurbo::Rect;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;
use std::fmt;

/// A spatial entry representing a canvas item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    /// Paint order; higher is drawn later (on top)
    pub order: u64,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn new(item_id: ItemId, order: u64, bounds: Rect) -> Self {
        let bounds = bounds.abs();
        Self {
            item_id,
            order,
            min_x: bounds.x0,
            min_y: bounds.y0,
            max_x: bounds.x1,
            max_y: bounds.y1,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for canvas items using an R-tree.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or replace the entry for `item_id`.
    pub fn insert(&mut self, item_id: ItemId, order: u64, bounds: Rect) {
        if let Some(old_entry) = self.entries.remove(&item_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(item_id, order, bounds);
        self.tree.insert(entry);
        self.entries.insert(item_id, entry);
    }

    /// Replace the bounds of an existing entry, keeping its paint order.
    pub fn update(&mut self, item_id: ItemId, bounds: Rect) {
        if let Some(order) = self.entries.get(&item_id).map(|e| e.order) {
            self.insert(item_id, order, bounds);
        }
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// All entries whose bounds contain the point, topmost first.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<SpatialEntry> {
        let point_envelope = AABB::from_point([x, y]);

        let mut hits: Vec<SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .copied()
            .collect();
        hits.sort_unstable_by(|a, b| b.order.cmp(&a.order));
        hits
    }

    /// Ids of all entries whose bounds intersect the rectangle.
    pub fn query_rect(&self, rect: Rect) -> Vec<ItemId> {
        let rect = rect.abs();
        let envelope = AABB::from_corners([rect.x0, rect.y0], [rect.x1, rect.y1]);

        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<I>(&mut self, items: I)
    where
        I: Iterator<Item = (ItemId, u64, Rect)>,
    {
        let entries: Vec<SpatialEntry> = items
            .map(|(id, order, bounds)| SpatialEntry::new(id, order, bounds))
            .collect();

        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }
}

impl fmt::Debug for SpatialIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
