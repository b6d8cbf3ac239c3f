//! HTTP binding for the products backend.

use async_trait::async_trait;
use thiserror::Error;

use stockroom_core::{NewProductDraft, Product, ProductId};

/// Transport-level failure while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Parse(String),
}

/// The products endpoint family the store consumes.
///
/// This trait is the injectable seam between the store and the network:
/// production code uses [`HttpProductsApi`], tests script their own
/// implementation.
#[async_trait]
pub trait ProductsApi: Send + Sync {
    /// `GET /api/products`: the full catalog, in server order.
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `POST /api/products`: create a product from a draft. The success
    /// body is ignored; the caller reloads the list instead.
    async fn create_product(&self, draft: &NewProductDraft) -> Result<(), ApiError>;

    /// `DELETE /api/products/{id}`. The success body is ignored.
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;
}

/// `reqwest`-backed [`ProductsApi`] against a base URL.
#[derive(Debug, Clone)]
pub struct HttpProductsApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductsApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Map any non-2xx response to [`ApiError::Status`].
    async fn into_checked(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl ProductsApi for HttpProductsApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self
            .client
            .get(self.url("/api/products"))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let resp = Self::into_checked(resp).await?;

        resp.json::<Vec<Product>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn create_product(&self, draft: &NewProductDraft) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.url("/api/products"))
            .json(draft)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::into_checked(resp).await.map(|_| ())
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.url(&format!("/api/products/{id}")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::into_checked(resp).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_without_double_slash() {
        let api = HttpProductsApi::new("http://localhost:8080/");
        assert_eq!(api.url("/api/products"), "http://localhost:8080/api/products");

        let api = HttpProductsApi::new("http://localhost:8080");
        assert_eq!(api.url("/api/products"), "http://localhost:8080/api/products");
    }
}
