//! Derived display policy.
//!
//! Pure functions of a [`Product`]; nothing here is stored. The presentation
//! layer recomputes these attributes on every render from the store's latest
//! snapshot.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::product::Product;

/// Presentation attributes derived from a product's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAttrs {
    /// Strike through the name, price and description.
    pub strike_through: bool,
    /// Render the stock count in the alert color.
    pub stock_alert: bool,
}

impl DisplayAttrs {
    /// Derive attributes for one product.
    ///
    /// Both flags follow `available` alone; the numeric `stock` value never
    /// participates.
    pub fn for_product(product: &Product) -> Self {
        Self {
            strike_through: !product.available,
            stock_alert: !product.available,
        }
    }
}

/// Format a price with exactly two fractional digits, rounding half away
/// from zero beyond the second place: `9.5` -> `"9.50"`, `9.999` -> `"10.00"`.
///
/// The currency symbol is the presentation layer's concern.
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
