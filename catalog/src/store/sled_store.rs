use super::StoreError;
use crate::domain::{Product, ProductDraft, ProductFilter, ProductId, Sort};
use crate::ports::ProductStore;
use async_trait::async_trait;
use chrono::Utc;
use sled::Db;
use std::path::Path;

const PRODUCTS_TREE: &str = "products";
const META_TREE: &str = "meta";
const NEXT_ID_KEY: &str = "next_id";

/// Durable product store. Rows are serde_json-encoded and keyed by the
/// big-endian id, so iterating the tree yields ascending ids — the natural
/// order list queries rely on. A meta tree carries the autoincrement
/// counter; ids start at 1 and are never reused.
#[derive(Clone)]
pub struct SledProductStore {
    db: Db,
}

impl SledProductStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    fn products_tree(&self) -> Result<sled::Tree, StoreError> {
        Ok(self.db.open_tree(PRODUCTS_TREE)?)
    }

    fn next_id(&self) -> Result<ProductId, StoreError> {
        let meta = self.db.open_tree(META_TREE)?;
        let raw = meta.update_and_fetch(NEXT_ID_KEY, |old| {
            let next = old.map(decode_id).unwrap_or(0) + 1;
            Some(next.to_be_bytes().to_vec())
        })?;
        Ok(raw.as_deref().map(decode_id).unwrap_or(1))
    }
}

fn decode_id(raw: &[u8]) -> ProductId {
    let mut buf = [0u8; 8];
    if raw.len() != buf.len() {
        return 0;
    }
    buf.copy_from_slice(raw);
    ProductId::from_be_bytes(buf)
}

#[async_trait]
impl ProductStore for SledProductStore {
    async fn list(&self, filter: &ProductFilter, sort: Sort) -> Result<Vec<Product>, StoreError> {
        let tree = self.products_tree()?;
        let mut products = Vec::new();

        for item in tree.iter() {
            let (_, raw) = item?;
            let product: Product = serde_json::from_slice(&raw)?;
            if filter.matches(&product) {
                products.push(product);
            }
        }

        sort.apply(&mut products);
        Ok(products)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let tree = self.products_tree()?;

        if let Some(raw) = tree.get(id.to_be_bytes())? {
            let product: Product = serde_json::from_slice(&raw)?;
            return Ok(Some(product));
        }

        Ok(None)
    }

    async fn insert(&self, draft: &ProductDraft) -> Result<ProductId, StoreError> {
        let id = self.next_id()?;
        let product = Product {
            id,
            name: draft.name.clone(),
            price: draft.price,
            description: draft.description.clone(),
            created_at: Utc::now(),
        };

        let tree = self.products_tree()?;
        tree.insert(id.to_be_bytes(), serde_json::to_vec(&product)?)?;

        Ok(id)
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> Result<u64, StoreError> {
        let tree = self.products_tree()?;

        let Some(raw) = tree.get(id.to_be_bytes())? else {
            return Ok(0);
        };

        let mut product: Product = serde_json::from_slice(&raw)?;
        product.name = draft.name.clone();
        product.price = draft.price;
        product.description = draft.description.clone();

        tree.insert(id.to_be_bytes(), serde_json::to_vec(&product)?)?;
        Ok(1)
    }

    async fn delete(&self, id: ProductId) -> Result<u64, StoreError> {
        let tree = self.products_tree()?;
        Ok(if tree.remove(id.to_be_bytes())?.is_some() {
            1
        } else {
            0
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn draft(name: &str, price: f64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            description: String::new(),
        }
    }

    fn open_store(dir: &TempDir) -> SledProductStore {
        SledProductStore::new(dir.path().join("products.sled")).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids_from_one() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.insert(&draft("first", 1.0)).await.unwrap(), 1);
        assert_eq!(store.insert(&draft("second", 2.0)).await.unwrap(), 2);
        assert_eq!(store.insert(&draft("third", 3.0)).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn inserted_row_reads_back_with_server_assigned_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.insert(&draft("Widget", 9.99)).await.unwrap();
        let product = store.get(id).await.unwrap().unwrap();

        assert_eq!(product.id, id);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.description, "");
        assert!(product.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn update_preserves_created_at_and_reports_rows() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let id = store.insert(&draft("before", 1.0)).await.unwrap();
        let created_at = store.get(id).await.unwrap().unwrap().created_at;

        let affected = store.update(id, &draft("after", 2.0)).await.unwrap();
        assert_eq!(affected, 1);

        let product = store.get(id).await.unwrap().unwrap();
        assert_eq!(product.name, "after");
        assert_eq!(product.price, 2.0);
        assert_eq!(product.created_at, created_at);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_id_affect_zero_rows() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        assert_eq!(store.update(99, &draft("x", 1.0)).await.unwrap(), 0);
        assert_eq!(store.delete(99).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        let first = store.insert(&draft("a", 1.0)).await.unwrap();
        store.delete(first).await.unwrap();
        let second = store.insert(&draft("b", 2.0)).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn list_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir);

        store.insert(&draft("cheap", 5.0)).await.unwrap();
        store.insert(&draft("mid", 50.0)).await.unwrap();
        store.insert(&draft("dear", 500.0)).await.unwrap();

        let all = store.list(&ProductFilter::default(), Sort::Natural).await.unwrap();
        let ids: Vec<ProductId> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let filter = ProductFilter {
            min_price: Some(50.0),
            max_price: None,
        };
        let expensive = store.list(&filter, Sort::PriceDesc).await.unwrap();
        let names: Vec<&str> = expensive.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["dear", "mid"]);
    }
}
