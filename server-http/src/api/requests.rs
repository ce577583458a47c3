use catalog::domain::{ProductFilter, Sort};
use catalog::service::ListQuery;
use serde::Deserialize;

/// Query string for list requests. Field names match the public API, not
/// Rust convention.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
    pub sort: Option<String>,
}

impl ListParams {
    pub fn into_query(self) -> ListQuery {
        ListQuery {
            filter: ProductFilter {
                min_price: self.min_price,
                max_price: self.max_price,
            },
            sort: Sort::parse(self.sort.as_deref()),
            sort_key: self.sort,
        }
    }
}
