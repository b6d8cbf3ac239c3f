//! `stockroom-core` — pure domain types for the marketplace inventory client.
//!
//! This crate contains the wire-shaped product model, the transient
//! add-product draft, and the derived display policy, implemented purely as
//! deterministic logic (no IO, no HTTP).

pub mod display;
pub mod draft;
pub mod product;

pub use display::{DisplayAttrs, format_price};
pub use draft::{DraftField, NewProductDraft};
pub use product::{Product, ProductId};
