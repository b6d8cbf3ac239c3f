//! `stockroom-client`
//!
//! **Responsibility:** the Inventory Store — the client-side component that
//! owns the cached product list and mediates all reads and writes against the
//! marketplace backend.
//!
//! The presentation layer is a **thin shell** around this crate: it renders
//! snapshots taken from [`InventoryStore`] and invokes store operations on
//! user action. The store holds no authoritative state; its list is a cache
//! of the last successful fetch and is replaced whole after every confirmed
//! mutation.

pub mod api;
pub mod config;
pub mod notify;
pub mod store;

pub use api::{ApiError, HttpProductsApi, ProductsApi};
pub use config::ClientConfig;
pub use notify::{Notification, Severity};
pub use store::{InventoryStore, StoreError};
