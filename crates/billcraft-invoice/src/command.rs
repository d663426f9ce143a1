//! Serializable command surface for the invoice editor.
//!
//! Mirrors the free-canvas command bus: a decoupled presentation layer
//! sends these as JSON, and applying one is exactly equivalent to the
//! corresponding direct editor call.

use crate::document::MetadataField;
use crate::editor::InvoiceEditor;
use crate::elements::{ElementId, ElementKind};
use crate::line_items::{EditError, LineItemId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// One mutation or input event for the invoice editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum InvoiceCommand {
    BeginDrag { kind: ElementKind },
    CancelDrag,
    Drop { client_x: f64, client_y: f64, canvas: Rect },
    ElementClicked { id: ElementId },
    CanvasClicked,
    DeleteElement { id: ElementId },
    AddLineItem,
    RemoveLineItem { id: LineItemId },
    EditDescription { id: LineItemId, value: String },
    EditQuantity { id: LineItemId, value: String },
    EditPrice { id: LineItemId, value: String },
    SetMetadataField { field: MetadataField, value: String },
}

impl InvoiceCommand {
    /// Serialize the command to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize a command from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Apply the command to an editor.
    ///
    /// Only the numeric edits can fail; every other command follows the
    /// model's silent no-op rules.
    pub fn apply(self, editor: &mut InvoiceEditor) -> Result<(), EditError> {
        match self {
            InvoiceCommand::BeginDrag { kind } => editor.begin_drag(kind),
            InvoiceCommand::CancelDrag => editor.cancel_drag(),
            InvoiceCommand::Drop {
                client_x,
                client_y,
                canvas,
            } => {
                editor.drop_at(Point::new(client_x, client_y), canvas);
            }
            InvoiceCommand::ElementClicked { id } => editor.element_clicked(id),
            InvoiceCommand::CanvasClicked => editor.canvas_clicked(),
            InvoiceCommand::DeleteElement { id } => {
                editor.delete_element(id);
            }
            InvoiceCommand::AddLineItem => {
                editor.add_line_item();
            }
            InvoiceCommand::RemoveLineItem { id } => editor.remove_line_item(id),
            InvoiceCommand::EditDescription { id, value } => editor.edit_description(id, &value),
            InvoiceCommand::EditQuantity { id, value } => editor.edit_quantity(id, &value)?,
            InvoiceCommand::EditPrice { id, value } => editor.edit_price(id, &value)?,
            InvoiceCommand::SetMetadataField { field, value } => {
                editor.set_metadata_field(field, value)
            }
        }
        Ok(())
    }
}
