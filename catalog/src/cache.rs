use crate::domain::{Product, ProductId};
use dashmap::DashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_millis(60_000);

/// One cached value plus the moment it was stored.
///
/// Invalidation clears `cached_at` but keeps the value around, so the slot
/// reads as stale until the next successful read-through refills it.
#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    cached_at: Option<Instant>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            value: None,
            cached_at: None,
        }
    }
}

impl<T: Clone> Slot<T> {
    fn fresh(&self, ttl: Duration) -> Option<T> {
        let cached_at = self.cached_at?;
        if cached_at.elapsed() < ttl {
            self.value.clone()
        } else {
            None
        }
    }

    fn fill(&mut self, value: T) {
        self.value = Some(value);
        self.cached_at = Some(Instant::now());
    }

    fn mark_stale(&mut self) {
        self.cached_at = None;
    }
}

/// Read-through response cache for the V2 product service.
///
/// Writes are last-write-wins and never span a store call, so a racing
/// invalidation against a concurrent read-through can leave a stale entry
/// that keeps being served until the TTL runs out. The store stays the
/// source of truth; that window only ever returns data that was recently
/// correct.
///
/// The per-id partition grows without bound; in practice it is bounded by
/// the number of products that exist.
pub struct ResponseCache {
    ttl: Duration,
    // Holds the last list result no matter which filter/sort produced it.
    // Any list request hitting within the TTL gets this snapshot back.
    list: RwLock<Slot<Vec<Product>>>,
    by_id: DashMap<ProductId, Slot<Product>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            list: RwLock::new(Slot::default()),
            by_id: DashMap::new(),
        }
    }

    pub fn lookup_list(&self) -> Option<Vec<Product>> {
        self.list
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .fresh(self.ttl)
    }

    pub fn store_list(&self, products: Vec<Product>) {
        self.list
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fill(products);
    }

    /// Marks the list snapshot stale. The stored value stays in place and
    /// the next lookup misses.
    pub fn invalidate_list(&self) {
        self.list
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .mark_stale();
    }

    pub fn lookup_by_id(&self, id: ProductId) -> Option<Product> {
        self.by_id.get(&id)?.fresh(self.ttl)
    }

    pub fn store_by_id(&self, id: ProductId, product: Product) {
        self.by_id.entry(id).or_default().fill(product);
    }

    /// Update path: the entry stays but reads miss until it is refilled.
    pub fn mark_stale(&self, id: ProductId) {
        if let Some(mut slot) = self.by_id.get_mut(&id) {
            slot.mark_stale();
        }
    }

    /// Delete path: the entry is removed outright.
    pub fn remove(&self, id: ProductId) {
        self.by_id.remove(&id);
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}
