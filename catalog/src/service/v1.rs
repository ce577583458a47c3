use super::{not_found, store_err};
use crate::domain::{Product, ProductFilter, ProductId, ProductPayload, Sort};
use crate::ports::ProductStore;
use crate::validation;
use shared::Result;
use std::sync::Arc;

/// The stable passthrough implementation: unconditional store access and
/// lenient validation, nothing else.
#[derive(Clone)]
pub struct ProductServiceV1 {
    store: Arc<dyn ProductStore>,
}

impl ProductServiceV1 {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        self.store
            .list(&ProductFilter::default(), Sort::Natural)
            .await
            .map_err(store_err("Failed to fetch products"))
    }

    pub async fn get(&self, id: ProductId) -> Result<Product> {
        self.store
            .get(id)
            .await
            .map_err(store_err("Failed to fetch product"))?
            .ok_or_else(|| not_found(id))
    }

    /// Insert followed by a read-back so the caller sees the canonical row
    /// with its server-assigned id and timestamp.
    pub async fn create(&self, payload: &ProductPayload) -> Result<Product> {
        let draft = validation::lenient(payload)?;

        let id = self
            .store
            .insert(&draft)
            .await
            .map_err(store_err("Failed to create product"))?;

        self.store
            .get(id)
            .await
            .map_err(store_err("Product created but failed to retrieve it"))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<Product> {
        let draft = validation::lenient(payload)?;

        let affected = self
            .store
            .update(id, &draft)
            .await
            .map_err(store_err("Failed to update product"))?;
        if affected == 0 {
            return Err(not_found(id));
        }

        self.store
            .get(id)
            .await
            .map_err(store_err("Product updated but failed to retrieve it"))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn delete(&self, id: ProductId) -> Result<()> {
        let affected = self
            .store
            .delete(id)
            .await
            .map_err(store_err("Failed to delete product"))?;
        if affected == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProductStore;
    use shared::Error;

    fn service() -> ProductServiceV1 {
        ProductServiceV1::new(Arc::new(MemoryProductStore::new()))
    }

    fn payload(name: &str, price: f64) -> ProductPayload {
        ProductPayload {
            name: Some(name.to_string()),
            price: Some(price),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_reads_back_the_persisted_row() {
        let service = service();
        let product = service.create(&payload("Widget", 9.99)).await.unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "");

        let fetched = service.get(product.id).await.unwrap();
        assert_eq!(fetched, product);
    }

    #[tokio::test]
    async fn short_names_pass_the_lenient_policy() {
        let service = service();
        assert!(service.create(&payload("ab", 5.0)).await.is_ok());
    }

    #[tokio::test]
    async fn get_update_delete_of_missing_id_are_not_found() {
        let service = service();

        assert!(matches!(service.get(42).await, Err(Error::NotFound(_))));
        assert!(matches!(
            service.update(42, &payload("Widget", 9.99)).await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(service.delete(42).await, Err(Error::NotFound(_))));
    }

    #[tokio::test]
    async fn list_returns_every_row() {
        let service = service();
        service.create(&payload("one", 1.0)).await.unwrap();
        service.create(&payload("two", 2.0)).await.unwrap();

        let products = service.list().await.unwrap();
        assert_eq!(products.len(), 2);
    }
}
