// shared/src/lib.rs

/// Failure taxonomy shared by every layer. The transport layer maps each
/// variant to exactly one status code; handlers never build ad hoc error
/// shapes of their own.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Client input defect. Carries every violation found, not just the
    /// first one.
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    /// The identity has no matching entity. The payload is a client-facing
    /// message, e.g. "No product exists with ID 42".
    #[error("{0}")]
    NotFound(String),
    /// Persistence failure. `context` says what was being attempted,
    /// `detail` carries the underlying store message for diagnostics.
    #[error("{context}: {detail}")]
    Store { context: String, detail: String },
    /// Anything else that reaches the router boundary.
    #[error("internal: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod config;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_joins_all_violations() {
        let err = Error::Validation(vec!["Name is required".into(), "Price is required".into()]);
        assert_eq!(
            err.to_string(),
            "validation failed: Name is required; Price is required"
        );
    }

    #[test]
    fn store_display_includes_context_and_detail() {
        let err = Error::Store {
            context: "Failed to fetch products".into(),
            detail: "io error".into(),
        };
        assert_eq!(err.to_string(), "Failed to fetch products: io error");
    }
}
