//! Circle item.

use super::{next_item_id, ItemId, ItemKind, ItemTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A circle item, stored as the top-left corner of its bounding square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircleItem {
    pub(crate) id: ItemId,
    /// Top-left corner of the bounding box.
    pub position: Point,
    /// Width of the bounding box.
    pub width: f64,
    /// Height of the bounding box.
    pub height: f64,
}

impl CircleItem {
    /// Default diameter for new circles.
    pub const DEFAULT_SIZE: f64 = 100.0;

    /// Create a new circle with the default size.
    pub fn new(position: Point) -> Self {
        Self::with_id(next_item_id(), position)
    }

    pub(crate) fn with_id(id: ItemId, position: Point) -> Self {
        Self {
            id,
            position,
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }

    /// Center of the circle.
    pub fn center(&self) -> Point {
        Point::new(
            self.position.x + self.width / 2.0,
            self.position.y + self.height / 2.0,
        )
    }
}

impl ItemTrait for CircleItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Circle
    }

    fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.width,
            self.position.y + self.height,
        )
    }

    fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        // Treat as the ellipse inscribed in the bounds: normalized distance <= 1.
        let center = self.center();
        let rx = self.width / 2.0 + tolerance;
        let ry = self.height / 2.0 + tolerance;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let dx = (point.x - center.x) / rx;
        let dy = (point.y - center.y) / ry;
        dx * dx + dy * dy <= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_center() {
        let circle = CircleItem::new(Point::new(0.0, 0.0));
        let center = circle.center();
        assert!((center.x - 50.0).abs() < f64::EPSILON);
        assert!((center.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hit_test_inside() {
        let circle = CircleItem::new(Point::new(0.0, 0.0));
        assert!(circle.hit_test(Point::new(50.0, 50.0), 0.0));
        // Corner of the bounding box is outside the circle itself.
        assert!(!circle.hit_test(Point::new(2.0, 2.0), 0.0));
        assert!(!circle.hit_test(Point::new(120.0, 50.0), 0.0));
    }
}
