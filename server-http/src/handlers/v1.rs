use crate::api::responses::{Envelope, MessageEnvelope};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use catalog::domain::{Product, ProductId, ProductPayload};
use catalog::strangler::ApiVersion;

/// GET /api/v1/products
pub async fn list(State(state): State<AppState>) -> Result<Json<Envelope<Vec<Product>>>, ApiError> {
    let products = state.v1.list().await?;
    Ok(Json(Envelope::new(ApiVersion::V1, products)))
}

/// GET /api/v1/products/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.v1.get(id).await?;
    Ok(Json(Envelope::new(ApiVersion::V1, product)))
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let product = state.v1.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(ApiVersion::V1, product)),
    ))
}

/// PUT /api/v1/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.v1.update(id, &payload).await?;
    Ok(Json(Envelope::new(ApiVersion::V1, product)))
}

/// DELETE /api/v1/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    state.v1.delete(id).await?;
    Ok(Json(deleted_message(ApiVersion::V1, id)))
}

pub(crate) fn deleted_message(version: ApiVersion, id: ProductId) -> MessageEnvelope {
    MessageEnvelope::new(version, format!("Product with ID {id} deleted successfully"))
}
