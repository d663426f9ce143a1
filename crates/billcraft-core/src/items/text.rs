//! Text item.

use super::{next_item_id, ItemId, ItemKind, ItemTrait};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A text box item.
///
/// The only mutable field on any item: `content`, written by the text-edit
/// interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextItem {
    pub(crate) id: ItemId,
    /// Top-left corner position.
    pub position: Point,
    /// Width of the text box.
    pub width: f64,
    /// Height of the text box.
    pub height: f64,
    /// The text content.
    content: String,
}

impl TextItem {
    /// Default width for new text boxes.
    pub const DEFAULT_WIDTH: f64 = 200.0;
    /// Default height for new text boxes.
    pub const DEFAULT_HEIGHT: f64 = 50.0;
    /// Content a fresh text box starts with.
    pub const PLACEHOLDER: &'static str = "Double click to edit";

    /// Create a new text box with placeholder content.
    pub fn new(position: Point) -> Self {
        Self::with_id(next_item_id(), position)
    }

    pub(crate) fn with_id(id: ItemId, position: Point) -> Self {
        Self {
            id,
            position,
            width: Self::DEFAULT_WIDTH,
            height: Self::DEFAULT_HEIGHT,
            content: Self::PLACEHOLDER.to_string(),
        }
    }

    /// Get the text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the text content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

impl ItemTrait for TextItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn kind(&self) -> ItemKind {
        ItemKind::Text
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
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_creation() {
        let text = TextItem::new(Point::new(100.0, 100.0));
        assert_eq!(text.content(), TextItem::PLACEHOLDER);
        assert!((text.width - TextItem::DEFAULT_WIDTH).abs() < f64::EPSILON);
        assert!((text.height - TextItem::DEFAULT_HEIGHT).abs() < f64::EPSILON);
    }

    #[test]
    fn test_set_content() {
        let mut text = TextItem::new(Point::new(0.0, 0.0));
        text.set_content("Hello".to_string());
        assert_eq!(text.content(), "Hello");
    }

    #[test]
    fn test_hit_test() {
        let text = TextItem::new(Point::new(100.0, 100.0));
        assert!(text.hit_test(Point::new(150.0, 120.0), 0.0));
        assert!(!text.hit_test(Point::new(0.0, 0.0), 0.0));
    }
}
