//! Invoice line items and numeric field validation.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Unique identifier for line items, from a process-wide monotonic counter.
pub type LineItemId = u64;

pub(crate) fn next_line_item_id() -> LineItemId {
    static LINE_ITEM_ID_COUNTER: AtomicU64 = AtomicU64::new(1);
    LINE_ITEM_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

/// Errors from editing invoice fields.
///
/// A rejected edit never changes the model: the prior valid value stays in
/// place and the presentation layer surfaces the error as a validation
/// indicator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// Input did not parse as a finite number.
    #[error("not a number: {0:?}")]
    NotANumber(String),
    /// Quantities and prices cannot be negative.
    #[error("negative value: {0}")]
    Negative(f64),
}

/// Parse a user-entered quantity or price field.
///
/// Rejects anything that is not a finite, non-negative number, so `NaN`
/// can never reach the derived totals.
pub fn parse_numeric_field(raw: &str) -> Result<f64, EditError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| EditError::NotANumber(raw.to_string()))?;
    if !value.is_finite() {
        return Err(EditError::NotANumber(raw.to_string()));
    }
    if value < 0.0 {
        return Err(EditError::Negative(value));
    }
    Ok(value)
}

/// One row of the invoice's billable items.
///
/// Invariant: `amount == quantity * price` after every edit; the amount is
/// a cached derived value, recomputed synchronously whenever either input
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    id: LineItemId,
    /// Free-form description of the billed work.
    pub description: String,
    quantity: f64,
    price: f64,
    amount: f64,
}

impl InvoiceLineItem {
    /// Create a line item; the amount is computed from the inputs.
    pub fn new(description: impl Into<String>, quantity: f64, price: f64) -> Self {
        Self {
            id: next_line_item_id(),
            description: description.into(),
            quantity,
            price,
            amount: quantity * price,
        }
    }

    /// Create the blank row the add-item action appends.
    pub fn seeded() -> Self {
        Self::new("New Item", 1.0, 0.0)
    }

    /// Get the unique identifier.
    pub fn id(&self) -> LineItemId {
        self.id
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The derived `quantity * price`.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Set the quantity and recompute the amount.
    pub fn set_quantity(&mut self, quantity: f64) {
        self.quantity = quantity;
        self.recompute();
    }

    /// Set the price and recompute the amount.
    pub fn set_price(&mut self, price: f64) {
        self.price = price;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.amount = self.quantity * self.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_amount_follows_inputs() {
        let mut item = InvoiceLineItem::new("Web Design Services", 1.0, 1200.0);
        assert!((item.amount() - 1200.0).abs() < EPS);

        item.set_quantity(3.0);
        assert!((item.amount() - 3600.0).abs() < EPS);

        item.set_price(100.0);
        assert!((item.amount() - 300.0).abs() < EPS);
    }

    #[test]
    fn test_seeded_row() {
        let item = InvoiceLineItem::seeded();
        assert_eq!(item.description, "New Item");
        assert!((item.quantity() - 1.0).abs() < EPS);
        assert!(item.price().abs() < EPS);
        assert!(item.amount().abs() < EPS);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = InvoiceLineItem::seeded();
        let b = InvoiceLineItem::seeded();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_parse_accepts_numbers() {
        assert_eq!(parse_numeric_field("2"), Ok(2.0));
        assert_eq!(parse_numeric_field(" 19.99 "), Ok(19.99));
        assert_eq!(parse_numeric_field("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            parse_numeric_field("abc"),
            Err(EditError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_numeric_field(""),
            Err(EditError::NotANumber(String::new()))
        );
        assert_eq!(
            parse_numeric_field("NaN"),
            Err(EditError::NotANumber("NaN".to_string()))
        );
        assert_eq!(
            parse_numeric_field("inf"),
            Err(EditError::NotANumber("inf".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert_eq!(parse_numeric_field("-1"), Err(EditError::Negative(-1.0)));
    }
}
