//! Billcraft Invoice Library
//!
//! The invoice-canvas flow: a drag-and-drop layout of placed elements
//! over an invoice document whose line items feed live-computed totals.
//! Built on `billcraft-core` for selection, events, and geometry.

pub mod command;
pub mod document;
pub mod dragdrop;
pub mod editor;
pub mod elements;
pub mod line_items;
pub mod totals;

pub use command::InvoiceCommand;
pub use document::{InvoiceDocument, InvoiceMetadata, MetadataField};
pub use dragdrop::{DragController, DragState};
pub use editor::{InvoiceEditor, InvoiceEvent, InvoiceSnapshot};
pub use elements::{
    ElementAnchor, ElementId, ElementKind, Extent, HorizontalAnchor, PlacedElement,
    VerticalAnchor,
};
pub use line_items::{parse_numeric_field, EditError, InvoiceLineItem, LineItemId};
pub use totals::{InvoiceTotals, TAX_RATE};
