use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Wire shape for every failure leaving the service.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

/// Newtype so `shared::Error` crosses the axum boundary through a single
/// status mapping instead of per-handler status juggling.
#[derive(Debug)]
pub struct ApiError(pub shared::Error);

impl From<shared::Error> for ApiError {
    fn from(err: shared::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            shared::Error::Validation(details) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "Validation failed".to_string(),
                    message: None,
                    details: Some(details),
                },
            ),
            shared::Error::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: "Product not found".to_string(),
                    message: Some(message),
                    details: None,
                },
            ),
            shared::Error::Store { context, detail } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: context,
                    message: None,
                    details: Some(vec![detail]),
                },
            ),
            shared::Error::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorBody {
                    error: "Internal Server Error".to_string(),
                    message: Some(message),
                    details: None,
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
