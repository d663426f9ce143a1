//! Rectangle item.

use super::{next_item_id, ItemId, ItemKind, ItemTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A rectangle item.
///
/// Geometry is fixed at creation; there is no move or resize interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectangleItem {
    pub(crate) id: ItemId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl RectangleItem {
    /// Default side length for new rectangles.
    pub const DEFAULT_SIZE: f64 = 100.0;

    /// Create a new rectangle with the default size.
    pub fn new(position: Point) -> Self {
        Self::with_id(next_item_id(), position)
    }

    /// Construct a rectangle with a specific id (for spawn and tests).
    pub(crate) fn with_id(id: ItemId, position: Point) -> Self {
        Self {
            id,
            position,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }

    /// Get the rectangle as a kurbo Rect.
    pub fn as_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }
}

impl ItemTrait for RectangleItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Rectangle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.as_rect().inflate(tolerance, tolerance).contains(point)
    }
}
