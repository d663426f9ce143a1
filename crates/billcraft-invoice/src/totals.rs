//! Derived invoice totals.

use crate::line_items::InvoiceLineItem;
use serde::{Deserialize, Serialize};

/// Tax rate applied to the subtotal (10%).
pub const TAX_RATE: f64 = 0.10;

/// The aggregate amounts shown on the invoice.
///
/// Always recomputed from the current line items; nothing here is cached
/// across edits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line-item amounts.
    pub subtotal: f64,
    /// `subtotal * TAX_RATE`.
    pub tax: f64,
    /// `subtotal + tax`.
    pub total: f64,
}

impl InvoiceTotals {
    /// Compute the totals for the given line items.
    pub fn compute(items: &[InvoiceLineItem]) -> Self {
        let subtotal: f64 = items.iter().map(InvoiceLineItem::amount).sum();
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_sample_invoice_totals() {
        let items = vec![
            InvoiceLineItem::new("Web Design Services", 1.0, 1200.0),
            InvoiceLineItem::new("Hosting (Annual)", 1.0, 200.0),
        ];
        let totals = InvoiceTotals::compute(&items);
        assert!((totals.subtotal - 1400.0).abs() < EPS);
        assert!((totals.tax - 140.0).abs() < EPS);
        assert!((totals.total - 1540.0).abs() < EPS);
    }

    #[test]
    fn test_empty_invoice_totals() {
        let totals = InvoiceTotals::compute(&[]);
        assert!(totals.subtotal.abs() < EPS);
        assert!(totals.tax.abs() < EPS);
        assert!(totals.total.abs() < EPS);
    }

    #[test]
    fn test_total_is_subtotal_times_one_point_one() {
        let items = vec![
            InvoiceLineItem::new("A", 2.0, 33.5),
            InvoiceLineItem::new("B", 4.0, 12.25),
        ];
        let totals = InvoiceTotals::compute(&items);
        assert!((totals.total - totals.subtotal * 1.10).abs() < EPS);
    }
}
