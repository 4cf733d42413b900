//! The seam between the inventory client and the backend.

use stockroom_products::{Product, ProductDraft, ProductId};

use crate::error::ApiError;

/// Operations the backend exposes for products.
///
/// Every mutation treats any 2xx status as success and discards the body.
/// Futures are not required to be `Send`: the browser runs them on its single
/// event loop.
#[allow(async_fn_in_trait)]
pub trait ProductApi {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/search?keyword=...`; `keyword` is sent as given.
    async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError>;

    /// `POST /products`
    async fn create_product(&self, draft: &ProductDraft) -> Result<(), ApiError>;

    /// `PUT /products/{id}` (full replace)
    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> Result<(), ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError>;
}
