use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Transient input state for the add-product form.
///
/// A draft carries no id (the backend assigns one on create) and is never
/// persisted; it exists only while the form is open and resets to `Default`
/// (all empty/zero) after every successful or cancelled add.
///
/// Serializes to the creation request body:
/// `{productName, price, description, initialStock}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProductDraft {
    pub product_name: String,
    pub price: Decimal,
    pub description: String,
    pub initial_stock: u32,
}

impl NewProductDraft {
    /// True when every field is back at its empty/zero default.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replace a single field in place. Local only, no network effect.
    pub fn set(&mut self, field: DraftField) {
        match field {
            DraftField::ProductName(v) => self.product_name = v,
            DraftField::Price(v) => self.price = v,
            DraftField::Description(v) => self.description = v,
            DraftField::InitialStock(v) => self.initial_stock = v,
        }
    }
}

/// The fixed set of draft fields an operator can edit, each carrying its
/// replacement value.
///
/// No validation happens on edit or submit; the backend is the sole
/// validator and rejects what it will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    ProductName(String),
    Price(Decimal),
    Description(String),
    InitialStock(u32),
}
