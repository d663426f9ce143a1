//! Invoice-canvas editor: placed elements, selection, drag-and-drop, and
//! the document edit surface.

use crate::document::{InvoiceDocument, InvoiceMetadata, MetadataField};
use crate::dragdrop::DragController;
use crate::elements::{ElementAnchor, ElementId, ElementKind, Extent, PlacedElement};
use crate::line_items::{EditError, InvoiceLineItem, LineItemId};
use crate::totals::InvoiceTotals;
use billcraft_core::events::{Observers, SubscriptionId};
use billcraft_core::selection::Selection;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Events published by the invoice editor after each mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InvoiceEvent {
    /// A dropped element was added to the canvas.
    ElementPlaced { id: ElementId },
    /// An element was removed.
    ElementDeleted { id: ElementId },
    /// The element selection changed (including to nothing).
    SelectionChanged { selected: Option<ElementId> },
    /// A line item was appended.
    LineItemAdded { id: LineItemId },
    /// A line item was removed.
    LineItemRemoved { id: LineItemId },
    /// A line item's description, quantity, or price changed.
    LineItemChanged { id: LineItemId },
    /// A metadata field changed.
    MetadataChanged { field: MetadataField },
    /// The derived totals changed (follows every line-item mutation).
    TotalsChanged { totals: InvoiceTotals },
}

/// Read-only view of the invoice canvas for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceSnapshot {
    /// Header fields.
    pub metadata: InvoiceMetadata,
    /// Line items in insertion order.
    pub line_items: Vec<InvoiceLineItem>,
    /// Current derived totals.
    pub totals: InvoiceTotals,
    /// Placed elements in insertion order (back to front).
    pub elements: Vec<PlacedElement>,
    /// The selected element, if any.
    pub selected: Option<ElementId>,
}

/// The invoice-canvas editor.
///
/// Owns the document, the placed-element collection, the selection
/// controller, and the drag state for one invoice canvas.
#[derive(Debug)]
pub struct InvoiceEditor {
    document: InvoiceDocument,
    elements: Vec<PlacedElement>,
    selection: Selection<ElementId>,
    drag: DragController,
    observers: Observers<InvoiceEvent>,
}

impl Default for InvoiceEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceEditor {
    /// Create an editor seeded with the default invoice: the two sample
    /// line items and the three starter elements (header, logo, footer).
    pub fn new() -> Self {
        Self {
            document: InvoiceDocument::sample(),
            elements: Self::default_elements(),
            selection: Selection::new(),
            drag: DragController::new(),
            observers: Observers::new(),
        }
    }

    /// Create an editor with an empty document and no elements.
    pub fn empty() -> Self {
        Self {
            document: InvoiceDocument::new(),
            elements: Vec::new(),
            selection: Selection::new(),
            drag: DragController::new(),
            observers: Observers::new(),
        }
    }

    /// The three elements every fresh invoice starts with.
    fn default_elements() -> Vec<PlacedElement> {
        vec![
            PlacedElement::new(ElementKind::Header, ElementAnchor::top_left(20.0, 0.0)),
            PlacedElement::new(ElementKind::Image, ElementAnchor::top_right(70.0, 40.0))
                .with_size(Extent::Px(100.0), Extent::Px(100.0))
                .with_src("https://source.unsplash.com/random/100x100?logo"),
            PlacedElement::new(ElementKind::Footer, ElementAnchor::bottom_left(20.0, 0.0)),
        ]
    }

    /// The underlying invoice document.
    pub fn document(&self) -> &InvoiceDocument {
        &self.document
    }

    /// Placed elements in insertion order.
    pub fn elements(&self) -> &[PlacedElement] {
        &self.elements
    }

    /// Get an element by id.
    pub fn get_element(&self, id: ElementId) -> Option<&PlacedElement> {
        self.elements.iter().find(|element| element.id() == id)
    }

    /// The selected element id, if any.
    pub fn selection(&self) -> Option<ElementId> {
        self.selection.selected()
    }

    /// Current derived totals.
    pub fn totals(&self) -> InvoiceTotals {
        self.document.totals()
    }

    /// Take a read-only snapshot for rendering.
    pub fn snapshot(&self) -> InvoiceSnapshot {
        InvoiceSnapshot {
            metadata: self.document.metadata.clone(),
            line_items: self.document.line_items().to_vec(),
            totals: self.document.totals(),
            elements: self.elements.clone(),
            selected: self.selection.selected(),
        }
    }

    /// Register an observer for invoice events.
    pub fn subscribe(&mut self, observer: impl Fn(&InvoiceEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Element interaction -------------------------------------------

    /// Handle a click on an element: toggle selection.
    ///
    /// Element clicks consume the event; the background handler never sees
    /// them. Unknown ids are ignored.
    pub fn element_clicked(&mut self, id: ElementId) {
        if self.get_element(id).is_none() {
            return;
        }
        self.selection.select(id);
        self.observers.notify(&InvoiceEvent::SelectionChanged {
            selected: self.selection.selected(),
        });
    }

    /// Handle a click on the canvas background: deselect.
    pub fn canvas_clicked(&mut self) {
        if self.selection.has_selection() {
            self.selection.click_background();
            self.observers
                .notify(&InvoiceEvent::SelectionChanged { selected: None });
        }
    }

    /// Delete an element; silent no-op when absent.
    ///
    /// Clears the selection when the removed element was selected.
    pub fn delete_element(&mut self, id: ElementId) -> Option<PlacedElement> {
        let index = self.elements.iter().position(|element| element.id() == id)?;
        let removed = self.elements.remove(index);
        log::debug!("remove element {id}");
        let was_selected = self.selection.is_selected(id);
        self.selection.item_deleted(id);
        self.observers.notify(&InvoiceEvent::ElementDeleted { id });
        if was_selected {
            self.observers
                .notify(&InvoiceEvent::SelectionChanged { selected: None });
        }
        Some(removed)
    }

    // --- Drag-and-drop -------------------------------------------------

    /// Begin dragging a palette entry.
    pub fn begin_drag(&mut self, kind: ElementKind) {
        self.drag.begin(kind);
    }

    /// Check if a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Abort the in-progress drag.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Complete the drag at a client-space point over the given canvas.
    ///
    /// Appends the materialized element and returns its id; `None` when no
    /// drag was in progress.
    pub fn drop_at(&mut self, client_point: Point, canvas_bounds: Rect) -> Option<ElementId> {
        let element = self.drag.drop_at(client_point, canvas_bounds)?;
        let id = element.id();
        log::debug!("place element {id} ({:?})", element.kind);
        self.elements.push(element);
        self.observers.notify(&InvoiceEvent::ElementPlaced { id });
        Some(id)
    }

    // --- Document edits ------------------------------------------------

    /// Append a blank line item; returns its id.
    pub fn add_line_item(&mut self) -> LineItemId {
        let id = self.document.add_line_item();
        self.observers.notify(&InvoiceEvent::LineItemAdded { id });
        self.publish_totals();
        id
    }

    /// Remove a line item; silent no-op when absent.
    pub fn remove_line_item(&mut self, id: LineItemId) {
        if self.document.remove_line_item(id).is_none() {
            return;
        }
        self.observers.notify(&InvoiceEvent::LineItemRemoved { id });
        self.publish_totals();
    }

    /// Replace a line item's description.
    pub fn edit_description(&mut self, id: LineItemId, value: &str) {
        if self.document.edit_description(id, value) {
            self.observers.notify(&InvoiceEvent::LineItemChanged { id });
        }
    }

    /// Apply a user-entered quantity; rejected input leaves the model
    /// untouched and is returned for the view to surface.
    pub fn edit_quantity(&mut self, id: LineItemId, raw: &str) -> Result<(), EditError> {
        self.document.edit_quantity(id, raw)?;
        self.observers.notify(&InvoiceEvent::LineItemChanged { id });
        self.publish_totals();
        Ok(())
    }

    /// Apply a user-entered price. Same rules as [`Self::edit_quantity`].
    pub fn edit_price(&mut self, id: LineItemId, raw: &str) -> Result<(), EditError> {
        self.document.edit_price(id, raw)?;
        self.observers.notify(&InvoiceEvent::LineItemChanged { id });
        self.publish_totals();
        Ok(())
    }

    /// Replace one metadata field.
    pub fn set_metadata_field(&mut self, field: MetadataField, value: String) {
        self.document.metadata.set_field(field, value);
        self.observers
            .notify(&InvoiceEvent::MetadataChanged { field });
    }

    fn publish_totals(&self) {
        self.observers.notify(&InvoiceEvent::TotalsChanged {
            totals: self.document.totals(),
        });
    }
}
