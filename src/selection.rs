//! Selection model for canvas items.
//!
//! The model is a set, but the canvas only ever selects a single item or
//! nothing; `select` replaces the whole set.

use crate::types::ItemId;
use std::collections::HashSet;

#[derive(Debug, Default, Clone)]
pub struct SelectionManager {
    selected: HashSet<ItemId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection with `{id}`, or clear it for `None`.
    pub fn select(&mut self, id: Option<ItemId>) {
        self.selected.clear();
        if let Some(id) = id {
            self.selected.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    /// Drop any of `ids` from the selection. Returns whether anything changed.
    pub fn deselect(&mut self, ids: &[ItemId]) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| !ids.contains(id));
        self.selected.len() != before
    }

    /// The selected item, if exactly one is selected.
    pub fn primary(&self) -> Option<ItemId> {
        if self.selected.len() == 1 {
            self.selected.iter().next().copied()
        } else {
            None
        }
    }

    pub fn ids(&self) -> Vec<ItemId> {
        self.selected.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
