use catalog::domain::ProductFilter;
use catalog::strangler::ApiVersion;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub message: String,
}

/// Echo of the filters a list query was executed with.
#[derive(Serialize)]
pub struct FilterEcho {
    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}

impl From<ProductFilter> for FilterEcho {
    fn from(filter: ProductFilter) -> Self {
        Self {
            min_price: filter.min_price,
            max_price: filter.max_price,
        }
    }
}

/// Success envelope shared by both API versions. Optional fields are
/// omitted from the wire entirely, so a V1 response carries only `version`
/// and `data`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub version: &'static str,
    pub data: T,
    #[serde(rename = "fromCache", skip_serializing_if = "Option::is_none")]
    pub from_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FilterEcho>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(version: ApiVersion, data: T) -> Self {
        Self {
            version: version.label(),
            data,
            from_cache: None,
            filters: None,
            sort: None,
            message: None,
        }
    }

    pub fn from_cache(mut self) -> Self {
        self.from_cache = Some(true);
        self
    }

    pub fn with_filters(mut self, filter: ProductFilter) -> Self {
        self.filters = Some(filter.into());
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Envelope for operations that return no entity (delete).
#[derive(Serialize)]
pub struct MessageEnvelope {
    pub version: &'static str,
    pub message: String,
}

impl MessageEnvelope {
    pub fn new(version: ApiVersion, message: impl Into<String>) -> Self {
        Self {
            version: version.label(),
            message: message.into(),
        }
    }
}
