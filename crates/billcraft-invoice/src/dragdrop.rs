//! Drag-and-drop controller for placing elements on the invoice canvas.
//!
//! The platform drag transport (native drag events, ghost images,
//! drag-over default suppression) stays in the presentation layer; the
//! core only sees "a drag of kind K began" and "it dropped at point P".

use crate::elements::{ElementKind, PlacedElement};
use kurbo::{Point, Rect};

/// State of a drag interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A palette entry of this kind is being dragged.
    Dragging(ElementKind),
}

/// Tracks the in-progress drag and materializes elements on drop.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a palette entry of the given kind.
    pub fn begin(&mut self, kind: ElementKind) {
        self.state = DragState::Dragging(kind);
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// The kind being dragged, if any.
    pub fn dragged_kind(&self) -> Option<ElementKind> {
        match self.state {
            DragState::Dragging(kind) => Some(kind),
            DragState::Idle => None,
        }
    }

    /// Abort the drag without dropping (pointer left the canvas).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Complete the drag at a client-space point over the given canvas.
    ///
    /// Client coordinates become canvas-local offsets by subtracting the
    /// canvas bounding-box origin. Returns `None` (and stays idle) when no
    /// drag is in progress.
    pub fn drop_at(&mut self, client_point: Point, canvas_bounds: Rect) -> Option<PlacedElement> {
        let DragState::Dragging(kind) = self.state else {
            return None;
        };
        self.state = DragState::Idle;
        let offset = Point::new(
            client_point.x - canvas_bounds.x0,
            client_point.y - canvas_bounds.y0,
        );
        Some(PlacedElement::at_drop(kind, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ElementAnchor, Extent};

    #[test]
    fn test_drop_translates_to_canvas_local() {
        let mut drag = DragController::new();
        drag.begin(ElementKind::Header);

        let canvas = Rect::new(20.0, 20.0, 820.0, 1120.0);
        let element = drag.drop_at(Point::new(120.0, 80.0), canvas).unwrap();

        assert_eq!(element.anchor, ElementAnchor::top_left(60.0, 100.0));
        assert_eq!(element.content.as_deref(), Some("INVOICE"));
        assert_eq!(element.width, Extent::Full);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_without_drag_is_noop() {
        let mut drag = DragController::new();
        let canvas = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(drag.drop_at(Point::new(10.0, 10.0), canvas).is_none());
    }

    #[test]
    fn test_cancel_clears_drag() {
        let mut drag = DragController::new();
        drag.begin(ElementKind::Image);
        assert_eq!(drag.dragged_kind(), Some(ElementKind::Image));

        drag.cancel();
        assert!(!drag.is_dragging());

        let canvas = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert!(drag.drop_at(Point::new(10.0, 10.0), canvas).is_none());
    }
}
