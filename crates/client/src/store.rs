//! The Inventory Store.
//!
//! Owns the cached product list and the add-product draft, and mediates
//! every read and write against the backend:
//! - `load` replaces the cache whole with the backend's list
//! - `submit_draft` and `delete_product` wait for server confirmation and
//!   then reload; nothing is applied speculatively
//! - every failure becomes a toast notification and a returned error; the
//!   affected state (draft or list) is left exactly as it was

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::{Mutex, mpsc};

use stockroom_core::{DraftField, NewProductDraft, Product, ProductId};

use crate::api::{ApiError, HttpProductsApi, ProductsApi};
use crate::config::ClientConfig;
use crate::notify::Notification;

/// Store-boundary failure. Always non-fatal and retryable; by the time the
/// caller sees one, a failure notification has already been emitted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The product list failed to load; the previous cache is retained.
    #[error("failed to load products: {0}")]
    Fetch(#[source] ApiError),

    /// The creation request failed; the draft is retained for retry.
    #[error("failed to add product: {0}")]
    Create(#[source] ApiError),

    /// The deletion request failed; the cache is unchanged.
    #[error("failed to delete product {id}: {source}")]
    Delete {
        id: ProductId,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Default)]
struct StoreState {
    /// Cache of the last successful fetch, in server order.
    products: Vec<Product>,
    draft: NewProductDraft,
    /// Sequence number of the most recently issued load.
    load_seq: u64,
}

/// Client-side owner of the cached product list and the add-product draft.
///
/// Cheap to clone; all clones share state, so the presentation layer can
/// hold one handle per widget. The internal lock is never held across a
/// network await, so operations interleave freely; the load sequence guard
/// ensures a late-landing stale list can never overwrite a newer one.
#[derive(Clone)]
pub struct InventoryStore {
    api: Arc<dyn ProductsApi>,
    state: Arc<Mutex<StoreState>>,
    notifications: mpsc::UnboundedSender<Notification>,
}

impl InventoryStore {
    /// Create a store over the given backend.
    ///
    /// Returns the receiving half of the notification channel; the UI's
    /// toast mechanism drains it.
    pub fn new(api: Arc<dyn ProductsApi>) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Self {
            api,
            state: Arc::new(Mutex::new(StoreState::default())),
            notifications: tx,
        };
        (store, rx)
    }

    /// Create a store over the real HTTP binding described by `config`.
    pub fn connect(config: &ClientConfig) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        Self::new(Arc::new(HttpProductsApi::new(config.base_url.clone())))
    }

    /// Snapshot of the cached product list, in server order.
    pub async fn products(&self) -> Vec<Product> {
        self.state.lock().await.products.clone()
    }

    /// Snapshot of the in-progress add-product draft.
    pub async fn draft(&self) -> NewProductDraft {
        self.state.lock().await.draft.clone()
    }

    /// Replace one draft field. Local only; no network effect, no validation.
    pub async fn set_draft_field(&self, field: DraftField) {
        self.state.lock().await.draft.set(field);
    }

    /// Reset the draft without submitting (the operator cancelled the form).
    pub async fn clear_draft(&self) {
        self.state.lock().await.draft = NewProductDraft::default();
    }

    /// Fetch the full product list and replace the cache atomically.
    ///
    /// On failure the previous list is retained and the error is reported
    /// (notification + return value), never escalated. A response is only
    /// committed while its load is still the most recently issued one, so
    /// overlapping calls resolve to the latest request rather than the last
    /// response to land.
    pub async fn load(&self) -> Result<(), StoreError> {
        let seq = {
            let mut state = self.state.lock().await;
            state.load_seq += 1;
            state.load_seq
        };

        match self.api.list_products().await {
            Ok(products) => {
                let mut state = self.state.lock().await;
                if seq == state.load_seq {
                    tracing::debug!(count = products.len(), "product list loaded");
                    state.products = products;
                } else {
                    tracing::debug!(
                        seq,
                        latest = state.load_seq,
                        "discarding superseded product list response"
                    );
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load products");
                self.notify(Notification::error("Error", "Failed to load products."));
                Err(StoreError::Fetch(err))
            }
        }
    }

    /// Submit the current draft as a creation request.
    ///
    /// The draft is forwarded as-is; the backend is the sole validator. On
    /// success the draft resets to empty and the list reloads exactly once.
    /// On failure the draft is left untouched so the operator can correct
    /// the input and retry.
    pub async fn submit_draft(&self) -> Result<(), StoreError> {
        let draft = self.state.lock().await.draft.clone();

        match self.api.create_product(&draft).await {
            Ok(()) => {
                self.state.lock().await.draft = NewProductDraft::default();
                self.notify(Notification::success(
                    "Product Added",
                    "Product has been added successfully.",
                ));
                // A failed reload notifies through load() itself.
                let _ = self.load().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to create product");
                self.notify(Notification::error("Error", "Failed to add product."));
                Err(StoreError::Create(err))
            }
        }
    }

    /// Send a deletion request for `id`.
    ///
    /// Never speculative: the cached list only changes through the reload
    /// that follows a confirmed delete, so a failed delete leaves the list
    /// exactly as it was.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), StoreError> {
        match self.api.delete_product(id).await {
            Ok(()) => {
                self.notify(Notification::success(
                    "Product deleted.",
                    "The product has been removed from your inventory.",
                ));
                let _ = self.load().await;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, product_id = %id, "failed to delete product");
                self.notify(Notification::error(
                    "Failed to delete product.",
                    "There was an issue deleting the product.",
                ));
                Err(StoreError::Delete { id, source: err })
            }
        }
    }

    fn notify(&self, notification: Notification) {
        // The UI may have dropped its receiver; notifications are best-effort.
        let _ = self.notifications.send(notification);
    }
}
