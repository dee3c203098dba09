//! Board - the item store of the canvas.
//!
//! Items are kept in paint order (last is topmost) inside a shared
//! [`Snapshot`]. Mutations go through `Arc::make_mut`, so the vector is only
//! cloned when history still holds the current snapshot; a gesture that does
//! not change anything leaves the snapshot pointer untouched.

use crate::hit_testing::{hit_item, item_bounds};
use crate::history::Snapshot;
use crate::spatial_index::SpatialIndex;
use crate::types::{CanvasItem, ItemId, ItemPatch};
use kurbo::{Point, Rect};
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug)]
pub struct Board {
    items: Snapshot,
    index: SpatialIndex,
    next_order: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self::from_snapshot(Arc::new(Vec::new()))
    }

    pub fn from_items(items: Vec<CanvasItem>) -> Self {
        Self::from_snapshot(Arc::new(items))
    }

    fn from_snapshot(items: Snapshot) -> Self {
        let mut board = Self {
            items,
            index: SpatialIndex::new(),
            next_order: 0,
        };
        board.rebuild_index();
        board
    }

    /// Items in paint order, bottom first.
    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Share the current item sequence.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.items)
    }

    /// Replace the whole item sequence, e.g. from history.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.items = snapshot;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.rebuild(
            self.items
                .iter()
                .enumerate()
                .map(|(order, item)| (item.id, order as u64, item_bounds(item))),
        );
        self.next_order = self.items.len() as u64;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Append an item on top of everything else. Returns `false` if an item
    /// with the same id already exists.
    pub fn add(&mut self, item: CanvasItem) -> bool {
        if self.contains(item.id) {
            tracing::warn!(item_id = %item.id, "Ignoring item with duplicate id");
            return false;
        }

        self.index.insert(item.id, self.next_order, item_bounds(&item));
        self.next_order += 1;
        Arc::make_mut(&mut self.items).push(item);
        true
    }

    /// Merge `patch` into the item with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let item = &mut Arc::make_mut(&mut self.items)[position];
        patch.apply_to(item);
        let bounds = item_bounds(item);
        self.index.update(id, bounds);
        true
    }

    /// Remove every item whose id is in `ids`, returning the ids actually removed.
    pub fn remove(&mut self, ids: &[ItemId]) -> Vec<ItemId> {
        let targets: HashSet<ItemId> = ids.iter().copied().collect();
        let removed: Vec<ItemId> = self
            .items
            .iter()
            .filter(|item| targets.contains(&item.id))
            .map(|item| item.id)
            .collect();
        if removed.is_empty() {
            return removed;
        }

        Arc::make_mut(&mut self.items).retain(|item| !targets.contains(&item.id));
        for &id in &removed {
            self.index.remove(id);
        }
        removed
    }

    /// Topmost item whose geometry contains the canvas point.
    pub fn find_at(&self, point: Point) -> Option<ItemId> {
        self.index
            .query_point(point.x, point.y)
            .into_iter()
            .filter_map(|entry| self.get(entry.item_id))
            .find(|item| hit_item(item, point))
            .map(|item| item.id)
    }

    /// Items whose bounds intersect `rect`, in paint order.
    pub fn items_in_rect(&self, rect: Rect) -> Vec<&CanvasItem> {
        let hits: HashSet<ItemId> = self.index.query_rect(rect).into_iter().collect();
        self.items
            .iter()
            .filter(|item| hits.contains(&item.id))
            .collect()
    }
}
