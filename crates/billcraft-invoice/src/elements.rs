//! Layout elements placed on the invoice canvas.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for placed elements.
pub type ElementId = Uuid;

/// The kind of a layout element. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Header,
    Footer,
    Image,
}

/// Horizontal position: an offset from exactly one horizontal edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAnchor {
    /// Offset in px from the left edge.
    Left(f64),
    /// Offset in px from the right edge.
    Right(f64),
}

/// Vertical position: an offset from exactly one vertical edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// Offset in px from the top edge.
    Top(f64),
    /// Offset in px from the bottom edge.
    Bottom(f64),
}

/// Where an element sits on the canvas.
///
/// One anchor per axis, so top/bottom and left/right offsets are mutually
/// exclusive by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl ElementAnchor {
    /// Anchor to the top-left corner.
    pub fn top_left(top: f64, left: f64) -> Self {
        Self {
            horizontal: HorizontalAnchor::Left(left),
            vertical: VerticalAnchor::Top(top),
        }
    }

    /// Anchor to the top-right corner.
    pub fn top_right(top: f64, right: f64) -> Self {
        Self {
            horizontal: HorizontalAnchor::Right(right),
            vertical: VerticalAnchor::Top(top),
        }
    }

    /// Anchor to the bottom-left corner.
    pub fn bottom_left(bottom: f64, left: f64) -> Self {
        Self {
            horizontal: HorizontalAnchor::Left(left),
            vertical: VerticalAnchor::Bottom(bottom),
        }
    }
}

/// An element dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extent {
    /// Fixed size in px.
    Px(f64),
    /// The full canvas width/height (100%).
    Full,
    /// Sized by content.
    Auto,
}

/// A drag-and-drop layout object on the invoice canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedElement {
    pub(crate) id: ElementId,
    /// Element kind; never changes after creation.
    pub kind: ElementKind,
    /// Edge offsets positioning the element.
    pub anchor: ElementAnchor,
    /// Element width.
    pub width: Extent,
    /// Element height.
    pub height: Extent,
    /// Display text (headers and footers).
    pub content: Option<String>,
    /// Image source (images only).
    pub src: Option<String>,
}

impl PlacedElement {
    /// Content a freshly dropped header starts with.
    pub const HEADER_CONTENT: &'static str = "INVOICE";
    /// Content a freshly dropped footer starts with.
    pub const FOOTER_CONTENT: &'static str = "Thank you for your business";
    /// Placeholder source for freshly dropped images.
    pub const IMAGE_PLACEHOLDER_SRC: &'static str =
        "https://source.unsplash.com/random/150x150?logo";
    /// Side length for freshly dropped images, in px.
    pub const IMAGE_DROP_SIZE: f64 = 150.0;

    /// Create an element of the given kind with kind-specific defaults.
    ///
    /// Headers and footers span the full width with fixed copy; images get
    /// a square placeholder.
    pub fn new(kind: ElementKind, anchor: ElementAnchor) -> Self {
        let (width, height, content, src) = match kind {
            ElementKind::Header => (
                Extent::Full,
                Extent::Auto,
                Some(Self::HEADER_CONTENT.to_string()),
                None,
            ),
            ElementKind::Footer => (
                Extent::Full,
                Extent::Auto,
                Some(Self::FOOTER_CONTENT.to_string()),
                None,
            ),
            ElementKind::Image => (
                Extent::Px(Self::IMAGE_DROP_SIZE),
                Extent::Px(Self::IMAGE_DROP_SIZE),
                None,
                Some(Self::IMAGE_PLACEHOLDER_SRC.to_string()),
            ),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            anchor,
            width,
            height,
            content,
            src,
        }
    }

    /// Create an element from a drop at the given canvas-local offset.
    pub fn at_drop(kind: ElementKind, offset: Point) -> Self {
        Self::new(kind, ElementAnchor::top_left(offset.y, offset.x))
    }

    /// Override the element size.
    pub fn with_size(mut self, width: Extent, height: Extent) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the image source.
    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }
}
