use super::StoreError;
use crate::domain::{Product, ProductDraft, ProductFilter, ProductId, Sort};
use crate::ports::ProductStore;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory product store with the same contract as the sled-backed one.
/// Used by tests and handy for local demos.
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    rows: DashMap<ProductId, Product>,
    next_id: AtomicU64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self, filter: &ProductFilter, sort: Sort) -> Result<Vec<Product>, StoreError> {
        let mut products: Vec<Product> = self
            .rows
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        // Natural order first, then the requested ordering on top.
        products.sort_by_key(|product| product.id);
        sort.apply(&mut products);
        Ok(products)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<ProductId, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed) + 1;
        let product = Product {
            id,
            name: draft.name.clone(),
            price: draft.price,
            description: draft.description.clone(),
            created_at: Utc::now(),
        };
        self.rows.insert(id, product);
        Ok(id)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError> {
        match self.rows.get_mut(&id) {
            Some(mut entry) => {
                let product = entry.value_mut();
                product.name = draft.name.clone();
                product.price = draft.price;
                product.description = draft.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<u64, StoreError> {
        Ok(if self.rows.remove(&id).is_some() { 1 } else { 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn crud_roundtrip() {
        let store = MemoryProductStore::new();

        let id = store.insert(&draft("Widget", 9.99)).await.unwrap();
        assert_eq!(id, 1);

        let product = store.get(id).await.unwrap().unwrap();
        assert_eq!(product.name, "Widget");

        assert_eq!(store.update(id, &draft("Gadget", 19.99)).await.unwrap(), 1);
        assert_eq!(store.get(id).await.unwrap().unwrap().name, "Gadget");

        assert_eq!(store.delete(id).await.unwrap(), 1);
        assert!(store.get(id).await.unwrap().is_none());
        assert_eq!(store.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn list_is_natural_order_by_default() {
        let store = MemoryProductStore::new();
        store.insert(&draft("c", 3.0)).await.unwrap();
        store.insert(&draft("a", 1.0)).await.unwrap();
        store.insert(&draft("b", 2.0)).await.unwrap();

        let products = store
            .list(&ProductFilter::default(), Sort::Natural)
            .await
            .unwrap();
        let ids: Vec<ProductId> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
