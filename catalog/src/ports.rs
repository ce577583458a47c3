use crate::domain::{Product, ProductDraft, ProductFilter, ProductId, Sort};
use crate::store::StoreError;
use async_trait::async_trait;

/// CRUD persistence for products. Identity and creation timestamp are
/// assigned by the implementation, never by the caller.
#[async_trait]
pub trait ProductStore: Send + Sync + 'static {
    async fn list(&self, filter: &ProductFilter, sort: Sort) -> Result<Vec<Product>, StoreError>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Inserts a new row and returns the assigned id.
    async fn insert(&self, draft: &ProductDraft) -> Result<ProductId, StoreError>;

    /// Returns the number of rows affected (0 when `id` does not exist).
    /// `created_at` keeps its original value.
    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError>;

    /// Returns the number of rows affected (0 when `id` does not exist).
    async fn delete(&self, id: ProductId) -> Result<u64, StoreError>;
}
