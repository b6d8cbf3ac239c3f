//! Black-box checks of the store against a real HTTP backend stub.
//!
//! The stub serves the same endpoint family as the production backend
//! (`GET`/`POST /api/products`, `DELETE /api/products/{id}`) on an ephemeral
//! loopback port; the store talks to it through the real `reqwest` binding.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use rust_decimal_macros::dec;
use tokio::sync::mpsc::UnboundedReceiver;

use stockroom_client::{HttpProductsApi, InventoryStore, Notification, Severity};
use stockroom_core::{DraftField, NewProductDraft, Product, ProductId};

#[derive(Default)]
struct StubState {
    products: Mutex<Vec<Product>>,
    next_id: AtomicI64,
    /// When set, every request answers 500.
    broken: AtomicBool,
}

impl StubState {
    fn seeded(products: Vec<Product>) -> Arc<Self> {
        let max_id = products.iter().map(|p| p.product_id.0).max().unwrap_or(0);
        let state = Self {
            products: Mutex::new(products),
            next_id: AtomicI64::new(max_id + 1),
            broken: AtomicBool::new(false),
        };
        Arc::new(state)
    }
}

async fn list_products(
    State(state): State<Arc<StubState>>,
) -> Result<Json<Vec<Product>>, StatusCode> {
    if state.broken.load(Ordering::SeqCst) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(Json(state.products.lock().unwrap().clone()))
}

async fn create_product(
    State(state): State<Arc<StubState>>,
    Json(draft): Json<NewProductDraft>,
) -> StatusCode {
    if state.broken.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }
    if draft.product_name.trim().is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }

    let id = state.next_id.fetch_add(1, Ordering::SeqCst);
    state.products.lock().unwrap().push(Product {
        product_id: ProductId::new(id),
        product_name: draft.product_name,
        price: draft.price,
        description: draft.description,
        stock: draft.initial_stock,
        available: true,
    });
    StatusCode::CREATED
}

async fn delete_product(
    State(state): State<Arc<StubState>>,
    Path(id): Path<i64>,
) -> StatusCode {
    if state.broken.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR;
    }

    let mut products = state.products.lock().unwrap();
    let before = products.len();
    products.retain(|p| p.product_id != ProductId::new(id));
    if products.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

struct TestServer {
    base_url: String,
    state: Arc<StubState>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(state: Arc<StubState>) -> Self {
        stockroom_observability::init();

        let app = Router::new()
            .route("/api/products", get(list_products).post(create_product))
            .route("/api/products/:id", delete(delete_product))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            state,
            handle,
        }
    }

    fn store(&self) -> (InventoryStore, UnboundedReceiver<Notification>) {
        InventoryStore::new(Arc::new(HttpProductsApi::new(self.base_url.clone())))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn widget() -> Product {
    Product {
        product_id: ProductId::new(1),
        product_name: "Widget".to_string(),
        price: dec!(19.99),
        description: "A widget".to_string(),
        stock: 5,
        available: true,
    }
}

#[tokio::test]
async fn load_returns_backend_list_verbatim() {
    let srv = TestServer::spawn(StubState::seeded(vec![widget()])).await;
    let (store, _rx) = srv.store();

    store.load().await.unwrap();

    assert_eq!(store.products().await, vec![widget()]);
}

#[tokio::test]
async fn add_product_round_trips_through_the_backend() {
    let srv = TestServer::spawn(StubState::seeded(vec![])).await;
    let (store, mut rx) = srv.store();

    store.load().await.unwrap();
    assert!(store.products().await.is_empty());

    store
        .set_draft_field(DraftField::ProductName("New".to_string()))
        .await;
    store.set_draft_field(DraftField::Price(dec!(5))).await;
    store.set_draft_field(DraftField::InitialStock(10)).await;

    store.submit_draft().await.unwrap();

    // The post-add reload picked up the server-assigned product.
    let products = store.products().await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, ProductId::new(1));
    assert_eq!(products[0].product_name, "New");
    assert_eq!(products[0].price, dec!(5));
    assert_eq!(products[0].stock, 10);
    assert!(products[0].available);

    assert!(store.draft().await.is_empty());

    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.severity, Severity::Success);
}

#[tokio::test]
async fn delete_removes_the_product_via_reload() {
    let srv = TestServer::spawn(StubState::seeded(vec![widget()])).await;
    let (store, _rx) = srv.store();

    store.load().await.unwrap();
    store.delete_product(ProductId::new(1)).await.unwrap();

    assert!(store.products().await.is_empty());
    assert!(srv.state.products.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_delete_keeps_cache_and_notifies() {
    let srv = TestServer::spawn(StubState::seeded(vec![widget()])).await;
    let (store, mut rx) = srv.store();

    store.load().await.unwrap();

    // Unknown id: the stub answers 404.
    store.delete_product(ProductId::new(99)).await.unwrap_err();

    assert_eq!(store.products().await, vec![widget()]);
    assert_eq!(srv.state.products.lock().unwrap().len(), 1);

    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.severity, Severity::Error);
    assert_eq!(toast.title, "Failed to delete product.");
}

#[tokio::test]
async fn rejected_draft_survives_for_retry() {
    let srv = TestServer::spawn(StubState::seeded(vec![])).await;
    let (store, mut rx) = srv.store();

    // Empty name: forwarded as-is, rejected by the backend, kept locally.
    store.set_draft_field(DraftField::Price(dec!(2.5))).await;
    store.submit_draft().await.unwrap_err();

    assert_eq!(store.draft().await.price, dec!(2.5));
    assert!(srv.state.products.lock().unwrap().is_empty());

    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.severity, Severity::Error);

    // Correct the input and retry; the same draft now goes through.
    store
        .set_draft_field(DraftField::ProductName("Fixed".to_string()))
        .await;
    store.submit_draft().await.unwrap();
    assert_eq!(store.products().await.len(), 1);
}

#[tokio::test]
async fn backend_outage_retains_the_previous_list() {
    let srv = TestServer::spawn(StubState::seeded(vec![widget()])).await;
    let (store, mut rx) = srv.store();

    store.load().await.unwrap();

    srv.state.broken.store(true, Ordering::SeqCst);
    store.load().await.unwrap_err();

    // Stale-but-consistent.
    assert_eq!(store.products().await, vec![widget()]);

    let toast = rx.try_recv().unwrap();
    assert_eq!(toast.severity, Severity::Error);
}
