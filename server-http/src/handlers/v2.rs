use crate::api::requests::ListParams;
use crate::api::responses::{Envelope, MessageEnvelope};
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use catalog::domain::{Product, ProductId, ProductPayload};
use catalog::service::ListOutcome;
use catalog::strangler::ApiVersion;

/// GET /api/v2/products
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Envelope<Vec<Product>>>, ApiError> {
    let outcome = state.v2.list(&params.into_query()).await?;
    Ok(Json(list_envelope(outcome)))
}

/// GET /api/v2/products/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let (product, from_cache) = state.v2.get(id).await?;
    Ok(Json(get_envelope(product, from_cache)))
}

/// POST /api/v2/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Envelope<Product>>), ApiError> {
    let product = state.v2.create(&payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::new(ApiVersion::V2, product).with_message("Product created successfully")),
    ))
}

/// PUT /api/v2/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Envelope<Product>>, ApiError> {
    let product = state.v2.update(id, &payload).await?;
    Ok(Json(
        Envelope::new(ApiVersion::V2, product).with_message("Product updated successfully"),
    ))
}

/// DELETE /api/v2/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<MessageEnvelope>, ApiError> {
    state.v2.delete(id).await?;
    Ok(Json(super::v1::deleted_message(ApiVersion::V2, id)))
}

/// Cache hits carry only `fromCache`; misses echo the filters and sort the
/// query actually ran with.
pub(crate) fn list_envelope(outcome: ListOutcome) -> Envelope<Vec<Product>> {
    if outcome.from_cache {
        Envelope::new(ApiVersion::V2, outcome.products).from_cache()
    } else {
        Envelope::new(ApiVersion::V2, outcome.products)
            .with_filters(outcome.filter)
            .with_sort(outcome.sort_key)
    }
}

pub(crate) fn get_envelope(product: Product, from_cache: bool) -> Envelope<Product> {
    let envelope = Envelope::new(ApiVersion::V2, product);
    if from_cache {
        envelope.from_cache()
    } else {
        envelope
    }
}
