use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product identifier, assigned by the backend on create.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A catalog item as returned by `GET /api/products`.
///
/// `available` and `stock` are independent, server-authoritative fields: the
/// client never infers one from the other, it only derives display attributes
/// from them (see [`crate::display`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: Decimal,
    pub description: String,
    pub stock: u32,
    pub available: bool,
}
