//! Item definitions for the free canvas.

mod circle;
mod rectangle;
mod text;

pub use circle::CircleItem;
pub use rectangle::RectangleItem;
pub use text::TextItem;

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for items.
///
/// Ids come from a process-wide monotonic counter, so rapid successive
/// creation can never collide (unlike wall-clock timestamps).
pub type ItemId = u64;

/// Hand out the next item id.
pub(crate) fn next_item_id() -> ItemId {
    static ITEM_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
    ITEM_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Spawn range for new items: [50, 450) on each axis.
const SPAWN_MIN: f64 = 50.0;
const SPAWN_RANGE: f64 = 400.0;

/// Mix an id into a well-distributed 64-bit value (splitmix64 finalizer).
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Compute the pseudo-random spawn position for a freshly created item.
///
/// Deterministic per id: hashing the monotonic counter gives scattered
/// positions without ambient RNG state.
pub(crate) fn spawn_position(id: ItemId) -> Point {
    let mixed = splitmix64(id);
    let x = (mixed >> 32) as f64 / f64::from(u32::MAX) * SPAWN_RANGE + SPAWN_MIN;
    let y = (mixed & 0xFFFF_FFFF) as f64 / f64::from(u32::MAX) * SPAWN_RANGE + SPAWN_MIN;
    Point::new(x, y)
}

/// The kind of a canvas item. Fixed at creation; items never change kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Rectangle,
    Circle,
    Text,
}

/// Common accessors for all item types.
pub trait ItemTrait {
    /// Get the unique identifier.
    fn id(&self) -> ItemId;

    /// Get the item kind.
    fn kind(&self) -> ItemKind;

    /// Get the bounding box in canvas coordinates.
    fn bounds(&self) -> Rect;

    /// Check if a point (in canvas coordinates) hits this item.
    fn hit_test(&self, point: Point, tolerance: f64) -> bool;
}

/// Enum wrapper for all item types (for storage and serialization).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    Rectangle(RectangleItem),
    Circle(CircleItem),
    Text(TextItem),
}

impl Item {
    /// Create an item of the given kind at a pseudo-random spawn position.
    pub fn spawn(kind: ItemKind) -> Self {
        let id = next_item_id();
        let position = spawn_position(id);
        match kind {
            ItemKind::Rectangle => Item::Rectangle(RectangleItem::with_id(id, position)),
            ItemKind::Circle => Item::Circle(CircleItem::with_id(id, position)),
            ItemKind::Text => Item::Text(TextItem::with_id(id, position)),
        }
    }

    pub fn id(&self) -> ItemId {
        match self {
            Item::Rectangle(i) => i.id(),
            Item::Circle(i) => i.id(),
            Item::Text(i) => i.id(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Rectangle(i) => i.kind(),
            Item::Circle(i) => i.kind(),
            Item::Text(i) => i.kind(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Item::Rectangle(i) => i.bounds(),
            Item::Circle(i) => i.bounds(),
            Item::Text(i) => i.bounds(),
        }
    }

    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        match self {
            Item::Rectangle(i) => i.hit_test(point, tolerance),
            Item::Circle(i) => i.hit_test(point, tolerance),
            Item::Text(i) => i.hit_test(point, tolerance),
        }
    }

    /// Check if this item is a text item.
    pub fn is_text(&self) -> bool {
        matches!(self, Item::Text(_))
    }

    /// Get the text item if this item is text.
    pub fn as_text(&self) -> Option<&TextItem> {
        match self {
            Item::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the mutable text item if this item is text.
    pub fn as_text_mut(&mut self) -> Option<&mut TextItem> {
        match self {
            Item::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Get the text content, if any. Non-text items carry none.
    pub fn content(&self) -> Option<&str> {
        self.as_text().map(TextItem::content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_ids_are_unique() {
        let items: Vec<Item> = (0..100).map(|_| Item::spawn(ItemKind::Rectangle)).collect();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn test_spawn_position_in_range() {
        for id in 0..1000 {
            let pos = spawn_position(id);
            assert!(pos.x >= SPAWN_MIN && pos.x < SPAWN_MIN + SPAWN_RANGE + 1e-9);
            assert!(pos.y >= SPAWN_MIN && pos.y < SPAWN_MIN + SPAWN_RANGE + 1e-9);
        }
    }

    #[test]
    fn test_spawn_position_deterministic() {
        assert_eq!(spawn_position(42), spawn_position(42));
    }

    #[test]
    fn test_spawn_defaults_per_kind() {
        let rect = Item::spawn(ItemKind::Rectangle);
        assert_eq!(rect.kind(), ItemKind::Rectangle);
        assert!((rect.bounds().width() - 100.0).abs() < f64::EPSILON);
        assert!((rect.bounds().height() - 100.0).abs() < f64::EPSILON);
        assert!(rect.content().is_none());

        let text = Item::spawn(ItemKind::Text);
        assert_eq!(text.kind(), ItemKind::Text);
        assert!((text.bounds().width() - 200.0).abs() < f64::EPSILON);
        assert!((text.bounds().height() - 50.0).abs() < f64::EPSILON);
        assert_eq!(text.content(), Some(TextItem::PLACEHOLDER));
    }

    #[test]
    fn test_item_kind_is_fixed() {
        let circle = Item::spawn(ItemKind::Circle);
        assert_eq!(circle.kind(), ItemKind::Circle);
        assert!(!circle.is_text());
        assert!(circle.as_text().is_none());
    }
}
