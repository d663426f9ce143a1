//! Invoice document: metadata and line items.

use crate::line_items::{parse_numeric_field, EditError, InvoiceLineItem, LineItemId};
use crate::totals::InvoiceTotals;
use serde::{Deserialize, Serialize};

/// Free-form invoice header fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceMetadata {
    pub title: String,
    /// Issue date; seeded by the presentation layer, not the clock.
    pub date: String,
    pub due_date: String,
    pub company_name: String,
    pub company_address: String,
    pub client_name: String,
    pub client_address: String,
    pub notes: String,
    pub terms: String,
}

impl Default for InvoiceMetadata {
    fn default() -> Self {
        Self {
            title: "Invoice #INV-001".to_string(),
            date: String::new(),
            due_date: String::new(),
            company_name: "Your Company Name".to_string(),
            company_address: "123 Business St, City, Country".to_string(),
            client_name: "Client Name".to_string(),
            client_address: "456 Client Ave, City, Country".to_string(),
            notes: "Thank you for your business!".to_string(),
            terms: "Payment due within 30 days.".to_string(),
        }
    }
}

/// Names one metadata field for the generic field-update operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataField {
    Title,
    Date,
    DueDate,
    CompanyName,
    CompanyAddress,
    ClientName,
    ClientAddress,
    Notes,
    Terms,
}

impl InvoiceMetadata {
    /// Replace one field's value.
    pub fn set_field(&mut self, field: MetadataField, value: String) {
        match field {
            MetadataField::Title => self.title = value,
            MetadataField::Date => self.date = value,
            MetadataField::DueDate => self.due_date = value,
            MetadataField::CompanyName => self.company_name = value,
            MetadataField::CompanyAddress => self.company_address = value,
            MetadataField::ClientName => self.client_name = value,
            MetadataField::ClientAddress => self.client_address = value,
            MetadataField::Notes => self.notes = value,
            MetadataField::Terms => self.terms = value,
        }
    }

    /// Read one field's value.
    pub fn field(&self, field: MetadataField) -> &str {
        match field {
            MetadataField::Title => &self.title,
            MetadataField::Date => &self.date,
            MetadataField::DueDate => &self.due_date,
            MetadataField::CompanyName => &self.company_name,
            MetadataField::CompanyAddress => &self.company_address,
            MetadataField::ClientName => &self.client_name,
            MetadataField::ClientAddress => &self.client_address,
            MetadataField::Notes => &self.notes,
            MetadataField::Terms => &self.terms,
        }
    }
}

/// The invoice being edited: metadata plus the billable line items.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceDocument {
    /// Header fields.
    pub metadata: InvoiceMetadata,
    line_items: Vec<InvoiceLineItem>,
}

impl InvoiceDocument {
    /// Create a document with default metadata and no line items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default sample invoice: two seeded line items.
    pub fn sample() -> Self {
        Self {
            metadata: InvoiceMetadata::default(),
            line_items: vec![
                InvoiceLineItem::new("Web Design Services", 1.0, 1200.0),
                InvoiceLineItem::new("Hosting (Annual)", 1.0, 200.0),
            ],
        }
    }

    /// Append a blank line item (quantity 1, price 0); returns its id.
    pub fn add_line_item(&mut self) -> LineItemId {
        let item = InvoiceLineItem::seeded();
        let id = item.id();
        log::debug!("add line item {id}");
        self.line_items.push(item);
        id
    }

    /// Remove a line item; silent no-op (`None`) when absent.
    ///
    /// The next totals computation simply no longer sees it.
    pub fn remove_line_item(&mut self, id: LineItemId) -> Option<InvoiceLineItem> {
        let index = self.line_items.iter().position(|item| item.id() == id)?;
        log::debug!("remove line item {id}");
        Some(self.line_items.remove(index))
    }

    /// Replace a line item's description. Returns `false` for unknown ids.
    pub fn edit_description(&mut self, id: LineItemId, value: &str) -> bool {
        match self.get_line_item_mut(id) {
            Some(item) => {
                item.description = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Apply a user-entered quantity.
    ///
    /// Invalid input is rejected and the prior value kept; unknown ids are
    /// a silent no-op.
    pub fn edit_quantity(&mut self, id: LineItemId, raw: &str) -> Result<(), EditError> {
        let value = parse_numeric_field(raw)?;
        if let Some(item) = self.get_line_item_mut(id) {
            item.set_quantity(value);
        }
        Ok(())
    }

    /// Apply a user-entered price. Same rules as [`Self::edit_quantity`].
    pub fn edit_price(&mut self, id: LineItemId, raw: &str) -> Result<(), EditError> {
        let value = parse_numeric_field(raw)?;
        if let Some(item) = self.get_line_item_mut(id) {
            item.set_price(value);
        }
        Ok(())
    }

    /// The line items in insertion order.
    pub fn line_items(&self) -> &[InvoiceLineItem] {
        &self.line_items
    }

    /// Get a line item by id.
    pub fn get_line_item(&self, id: LineItemId) -> Option<&InvoiceLineItem> {
        self.line_items.iter().find(|item| item.id() == id)
    }

    fn get_line_item_mut(&mut self, id: LineItemId) -> Option<&mut InvoiceLineItem> {
        self.line_items.iter_mut().find(|item| item.id() == id)
    }

    /// Compute the current totals.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::compute(&self.line_items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sample_document_totals() {
        let doc = InvoiceDocument::sample();
        let totals = doc.totals();
        assert!((totals.subtotal - 1400.0).abs() < EPS);
        assert!((totals.tax - 140.0).abs() < EPS);
        assert!((totals.total - 1540.0).abs() < EPS);
    }

    #[test]
    fn test_edit_quantity_recomputes() {
        let mut doc = InvoiceDocument::sample();
        let id = doc.line_items()[1].id();

        doc.edit_quantity(id, "3").unwrap();
        let item = doc.get_line_item(id).unwrap();
        assert!((item.amount() - 600.0).abs() < EPS);
        assert!((doc.totals().subtotal - 1800.0).abs() < EPS);
    }

    #[test]
    fn test_invalid_edit_keeps_prior_value() {
        let mut doc = InvoiceDocument::sample();
        let id = doc.line_items()[0].id();
        let before = doc.totals();

        assert!(doc.edit_price(id, "twelve").is_err());
        assert!(doc.edit_quantity(id, "-2").is_err());

        let item = doc.get_line_item(id).unwrap();
        assert!((item.price() - 1200.0).abs() < EPS);
        assert!((item.quantity() - 1.0).abs() < EPS);
        assert_eq!(doc.totals(), before);
    }

    #[test]
    fn test_edit_unknown_id_is_noop() {
        let mut doc = InvoiceDocument::sample();
        let before = doc.totals();
        doc.edit_quantity(0, "5").unwrap();
        assert_eq!(doc.totals(), before);
    }

    #[test]
    fn test_add_line_item_seeds_blank_row() {
        let mut doc = InvoiceDocument::new();
        let id = doc.add_line_item();
        let item = doc.get_line_item(id).unwrap();
        assert!((item.quantity() - 1.0).abs() < EPS);
        assert!(item.price().abs() < EPS);
        assert!(item.amount().abs() < EPS);
    }

    #[test]
    fn test_remove_line_item_updates_totals() {
        let mut doc = InvoiceDocument::sample();
        let id = doc.line_items()[0].id();

        doc.remove_line_item(id);
        assert_eq!(doc.line_items().len(), 1);
        assert!((doc.totals().subtotal - 200.0).abs() < EPS);

        // Removing again is a silent no-op.
        assert!(doc.remove_line_item(id).is_none());
    }

    #[test]
    fn test_metadata_field_updates() {
        let mut doc = InvoiceDocument::new();
        doc.metadata
            .set_field(MetadataField::ClientName, "ACME Corp".to_string());
        assert_eq!(doc.metadata.field(MetadataField::ClientName), "ACME Corp");
        assert_eq!(doc.metadata.client_name, "ACME Corp");
    }
}
