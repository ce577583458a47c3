use super::{not_found, store_err};
use crate::cache::ResponseCache;
use crate::domain::{Product, ProductFilter, ProductId, ProductPayload, Sort};
use crate::ports::ProductStore;
use crate::validation;
use shared::Result;
use std::sync::Arc;
use tracing::debug;

/// A list request: parsed filter/sort plus the raw sort key, which gets
/// echoed back to the client even when it named no known ordering.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: ProductFilter,
    pub sort: Sort,
    pub sort_key: Option<String>,
}

/// What a list call produced. On a cache hit `filter`/`sort_key` describe
/// the incoming request, not the query that filled the snapshot.
#[derive(Debug, Clone)]
pub struct ListOutcome {
    pub products: Vec<Product>,
    pub from_cache: bool,
    pub filter: ProductFilter,
    pub sort_key: String,
}

/// The enhanced implementation: strict validation, read-through caching
/// with explicit invalidation on every mutation, and query-based
/// filtering/sorting.
#[derive(Clone)]
pub struct ProductServiceV2 {
    store: Arc<dyn ProductStore>,
    cache: Arc<ResponseCache>,
}

impl ProductServiceV2 {
    pub fn new(store: Arc<dyn ProductStore>, cache: Arc<ResponseCache>) -> Self {
        Self { store, cache }
    }

    /// The cache is consulted before the filters are even looked at: a hit
    /// within the TTL serves the last stored snapshot whatever query
    /// produced it. Keying the slot by filter/sort signature would change
    /// that; kept as-is to match the behavior this service replaces.
    pub async fn list(&self, query: &ListQuery) -> Result<ListOutcome> {
        let sort_key = query
            .sort_key
            .clone()
            .unwrap_or_else(|| "default".to_string());

        if let Some(products) = self.cache.lookup_list() {
            debug!("serving product list from cache");
            return Ok(ListOutcome {
                products,
                from_cache: true,
                filter: query.filter,
                sort_key,
            });
        }

        let products = self
            .store
            .list(&query.filter, query.sort)
            .await
            .map_err(store_err("Failed to fetch products"))?;

        self.cache.store_list(products.clone());

        Ok(ListOutcome {
            products,
            from_cache: false,
            filter: query.filter,
            sort_key,
        })
    }

    /// Read-through by id. The bool says whether the cache served the hit.
    pub async fn get(&self, id: ProductId) -> Result<(Product, bool)> {
        if let Some(product) = self.cache.lookup_by_id(id) {
            debug!(id, "serving product from cache");
            return Ok((product, true));
        }

        let product = self
            .store
            .get(id)
            .await
            .map_err(store_err("Failed to fetch product"))?
            .ok_or_else(|| not_found(id))?;

        self.cache.store_by_id(id, product.clone());
        Ok((product, false))
    }

    pub async fn create(&self, payload: &ProductPayload) -> Result<Product> {
        let draft = validation::strict(payload)?;

        let id = self
            .store
            .insert(&draft)
            .await
            .map_err(store_err("Failed to create product"))?;

        self.cache.invalidate_list();

        let product = self
            .store
            .get(id)
            .await
            .map_err(store_err("Product created but failed to retrieve it"))?
            .ok_or_else(|| not_found(id))?;

        self.cache.store_by_id(id, product.clone());
        Ok(product)
    }

    pub async fn update(&self, id: ProductId, payload: &ProductPayload) -> Result<Product> {
        let draft = validation::strict(payload)?;

        let affected = self
            .store
            .update(id, &draft)
            .await
            .map_err(store_err("Failed to update product"))?;
        if affected == 0 {
            // No cache mutation on a miss: the caches still describe
            // whatever state existed before this request.
            return Err(not_found(id));
        }

        self.cache.invalidate_list();
        self.cache.mark_stale(id);

        let product = self
            .store
            .get(id)
            .await
            .map_err(store_err("Product updated but failed to retrieve it"))?
            .ok_or_else(|| not_found(id))?;

        self.cache.store_by_id(id, product.clone());
        Ok(product)
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

        self.cache.invalidate_list();
        self.cache.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryProductStore;
    use shared::Error;
    use std::time::Duration;

    fn service() -> (ProductServiceV2, Arc<ResponseCache>) {
        let cache = Arc::new(ResponseCache::new(Duration::from_millis(60_000)));
        let store = Arc::new(MemoryProductStore::new());
        (ProductServiceV2::new(store, cache.clone()), cache)
    }

    fn payload(name: &str, price: f64) -> ProductPayload {
        ProductPayload {
            name: Some(name.to_string()),
            price: Some(price),
            description: None,
        }
    }

    #[tokio::test]
    async fn get_populates_the_cache_and_second_read_hits() {
        let (service, _) = service();
        let created = service.create(&payload("Widget", 9.99)).await.unwrap();

        // create already put the row in the by-id cache
        let (first, from_cache) = service.get(created.id).await.unwrap();
        assert!(from_cache);
        assert_eq!(first, created);
    }

    #[tokio::test]
    async fn get_miss_reads_the_store_then_hits() {
        let (service, cache) = service();
        let created = service.create(&payload("Widget", 9.99)).await.unwrap();
        cache.remove(created.id);

        let (_, from_cache) = service.get(created.id).await.unwrap();
        assert!(!from_cache);

        let (product, from_cache) = service.get(created.id).await.unwrap();
        assert!(from_cache);
        assert_eq!(product, created);
    }

    #[tokio::test]
    async fn create_invalidates_the_list_cache() {
        let (service, cache) = service();
        service.create(&payload("one", 1.0)).await.unwrap();

        let listed = service.list(&ListQuery::default()).await.unwrap();
        assert!(!listed.from_cache);
        assert!(cache.lookup_list().is_some());

        service.create(&payload("two", 2.0)).await.unwrap();
        assert!(cache.lookup_list().is_none());

        let listed = service.list(&ListQuery::default()).await.unwrap();
        assert!(!listed.from_cache);
        assert_eq!(listed.products.len(), 2);
    }

    #[tokio::test]
    async fn update_invalidates_list_and_refills_by_id() {
        let (service, cache) = service();
        let created = service.create(&payload("before", 1.0)).await.unwrap();
        service.list(&ListQuery::default()).await.unwrap();

        let updated = service.update(created.id, &payload("after", 2.0)).await.unwrap();
        assert!(cache.lookup_list().is_none());
        assert_eq!(updated.name, "after");
        assert_eq!(updated.created_at, created.created_at);

        // read-back repopulated the per-id entry
        let (product, from_cache) = service.get(created.id).await.unwrap();
        assert!(from_cache);
        assert_eq!(product.name, "after");
    }

    #[tokio::test]
    async fn delete_removes_the_by_id_entry() {
        let (service, cache) = service();
        let created = service.create(&payload("Widget", 9.99)).await.unwrap();
        service.list(&ListQuery::default()).await.unwrap();

        service.delete(created.id).await.unwrap();
        assert!(cache.lookup_list().is_none());
        assert!(cache.lookup_by_id(created.id).is_none());
        assert!(matches!(
            service.get(created.id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn update_of_missing_id_leaves_caches_untouched() {
        let (service, cache) = service();
        service.create(&payload("Widget", 9.99)).await.unwrap();
        service.list(&ListQuery::default()).await.unwrap();

        let result = service.update(42, &payload("Widget", 9.99)).await;
        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(cache.lookup_list().is_some());
        assert!(cache.lookup_by_id(1).is_some());
    }

    #[tokio::test]
    async fn strict_validation_runs_before_any_store_access() {
        let (service, _) = service();
        let result = service
            .create(&ProductPayload {
                name: Some(String::new()),
                price: Some(-1.0),
                description: None,
            })
            .await;

        match result {
            Err(Error::Validation(errors)) => assert!(errors.len() >= 3),
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(service.list(&ListQuery::default()).await.unwrap().products.is_empty());
    }

    #[tokio::test]
    async fn list_hit_ignores_the_requested_filters() {
        let (service, _) = service();
        service.create(&payload("cheap", 1.0)).await.unwrap();
        service.create(&payload("dear", 100.0)).await.unwrap();

        // Fill the snapshot with the unfiltered result.
        let unfiltered = service.list(&ListQuery::default()).await.unwrap();
        assert_eq!(unfiltered.products.len(), 2);

        // A filtered request within the TTL is served the same snapshot.
        let query = ListQuery {
            filter: ProductFilter {
                min_price: Some(50.0),
                max_price: None,
            },
            sort: Sort::Natural,
            sort_key: None,
        };
        let filtered = service.list(&query).await.unwrap();
        assert!(filtered.from_cache);
        assert_eq!(filtered.products.len(), 2);
    }

    #[tokio::test]
    async fn list_miss_applies_filters_and_sort() {
        let (service, cache) = service();
        service.create(&payload("cheap", 1.0)).await.unwrap();
        service.create(&payload("mid", 50.0)).await.unwrap();
        service.create(&payload("dear", 100.0)).await.unwrap();
        cache.invalidate_list();

        let query = ListQuery {
            filter: ProductFilter {
                min_price: Some(40.0),
                max_price: Some(120.0),
            },
            sort: Sort::PriceDesc,
            sort_key: Some("price_desc".to_string()),
        };
        let outcome = service.list(&query).await.unwrap();

        assert!(!outcome.from_cache);
        assert_eq!(outcome.sort_key, "price_desc");
        let names: Vec<&str> = outcome.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["dear", "mid"]);
    }
}
