use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ProductId = u64;

/// A persisted catalog entry. `id` and `created_at` are assigned by the
/// store at insert time and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields as they arrive, before any validation. Everything
/// is optional so the validation policy owns the error reporting instead of
/// the deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

/// A payload that passed validation and can be handed to the store.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// Inclusive price bounds for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        true
    }
}

/// Orderings a list query can ask for. `Natural` is the store's insertion
/// order (ascending id).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sort {
    #[default]
    Natural,
    PriceAsc,
    PriceDesc,
    Name,
    Newest,
}

impl Sort {
    /// Unknown sort keys fall back to the natural order rather than failing
    /// the request.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("name") => Self::Name,
            Some("newest") => Self::Newest,
            _ => Self::Natural,
        }
    }

    pub fn apply(self, products: &mut [Product]) {
        match self {
            Self::Natural => {}
            Self::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
            Self::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
            Self::Newest => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }
    }
}
