//! Canvas document: the ordered item collection.

use crate::items::{Item, ItemId, ItemKind};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A canvas document containing all placed items.
///
/// Items are kept in insertion order, which doubles as the render order
/// (back to front). Items never reorder, move, or resize after creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CanvasDocument {
    items: Vec<Item>,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an item of the given kind and append it.
    ///
    /// The item gets a fresh unique id and a pseudo-random spawn position;
    /// returns the new id.
    pub fn add_item(&mut self, kind: ItemKind) -> ItemId {
        let item = Item::spawn(kind);
        let id = item.id();
        log::debug!("add item {id} ({kind:?})");
        self.items.push(item);
        id
    }

    /// Append an already-constructed item (used by tests and command replay).
    pub fn insert(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the item with the given id.
    ///
    /// Silent no-op (`None`) when the id is not present. Callers that track
    /// selection must clear it when the removed id was selected.
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        log::debug!("remove item {id}");
        Some(self.items.remove(index))
    }

    /// Replace the content of a text item.
    ///
    /// Returns `false` (no-op) for non-text items and unknown ids.
    pub fn update_text_content(&mut self, id: ItemId, content: String) -> bool {
        match self.get_mut(id).and_then(Item::as_text_mut) {
            Some(text) => {
                text.set_content(content);
                true
            }
            None => false,
        }
    }

    /// Get an item by id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Get a mutable reference to an item by id.
    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Iterate items in insertion order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Find the topmost item at a point, if any.
    ///
    /// Later insertions render on top, so the search runs front to back.
    pub fn item_at_point(&self, point: Point, tolerance: f64) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.hit_test(point, tolerance))
            .map(Item::id)
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
