use catalog::cache::ResponseCache;
use catalog::ports::ProductStore;
use catalog::service::{ProductServiceV1, ProductServiceV2};
use catalog::strangler::FeatureFlags;
use std::sync::Arc;
use std::time::Duration;

/// Server state shared across handlers. Both implementations sit on the
/// same store; only V2 gets the response cache.
#[derive(Clone)]
pub struct AppState {
    pub v1: ProductServiceV1,
    pub v2: ProductServiceV2,
    pub flags: Arc<FeatureFlags>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProductStore>, flags: FeatureFlags, cache_ttl: Duration) -> Self {
        let cache = Arc::new(ResponseCache::new(cache_ttl));

        Self {
            v1: ProductServiceV1::new(store.clone()),
            v2: ProductServiceV2::new(store, cache),
            flags: Arc::new(flags),
        }
    }
}
