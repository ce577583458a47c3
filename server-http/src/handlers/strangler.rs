//! The facade endpoints under /api/products. Each handler asks the flag set
//! which implementation serves the operation and delegates to the same
//! services the version-pinned routes use.

use crate::api::requests::ListParams;
use crate::api::responses::Envelope;
use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use catalog::domain::{ProductId, ProductPayload};
use catalog::strangler::{ApiVersion, Verb};
use tracing::info;

use super::{v1, v2};

fn route(state: &AppState, verb: Verb, has_id: bool) -> ApiVersion {
    let version = state.flags.route(verb, has_id);
    info!(version = version.label(), ?verb, has_id, "strangler facade dispatch");
    version
}

/// GET /api/products
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, ApiError> {
    match route(&state, Verb::Get, false) {
        ApiVersion::V2 => {
            let outcome = state.v2.list(&params.into_query()).await?;
            Ok(Json(v2::list_envelope(outcome)).into_response())
        }
        ApiVersion::V1 => {
            let products = state.v1.list().await?;
            Ok(Json(Envelope::new(ApiVersion::V1, products)).into_response())
        }
    }
}

/// GET /api/products/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Response, ApiError> {
    match route(&state, Verb::Get, true) {
        ApiVersion::V2 => {
            let (product, from_cache) = state.v2.get(id).await?;
            Ok(Json(v2::get_envelope(product, from_cache)).into_response())
        }
        ApiVersion::V1 => {
            let product = state.v1.get(id).await?;
            Ok(Json(Envelope::new(ApiVersion::V1, product)).into_response())
        }
    }
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, ApiError> {
    match route(&state, Verb::Post, false) {
        ApiVersion::V2 => {
            let product = state.v2.create(&payload).await?;
            let envelope =
                Envelope::new(ApiVersion::V2, product).with_message("Product created successfully");
            Ok((StatusCode::CREATED, Json(envelope)).into_response())
        }
        ApiVersion::V1 => {
            let product = state.v1.create(&payload).await?;
            let envelope = Envelope::new(ApiVersion::V1, product);
            Ok((StatusCode::CREATED, Json(envelope)).into_response())
        }
    }
}

/// PUT /api/products/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(payload): Json<ProductPayload>,
) -> Result<Response, ApiError> {
    match route(&state, Verb::Put, true) {
        ApiVersion::V2 => {
            let product = state.v2.update(id, &payload).await?;
            let envelope =
                Envelope::new(ApiVersion::V2, product).with_message("Product updated successfully");
            Ok(Json(envelope).into_response())
        }
        ApiVersion::V1 => {
            let product = state.v1.update(id, &payload).await?;
            Ok(Json(Envelope::new(ApiVersion::V1, product)).into_response())
        }
    }
}

/// DELETE /api/products/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Response, ApiError> {
    match route(&state, Verb::Delete, true) {
        ApiVersion::V2 => {
            state.v2.delete(id).await?;
            Ok(Json(v1::deleted_message(ApiVersion::V2, id)).into_response())
        }
        ApiVersion::V1 => {
            state.v1.delete(id).await?;
            Ok(Json(v1::deleted_message(ApiVersion::V1, id)).into_response())
        }
    }
}
