use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::auth_handlers::MessageResponse;
use crate::error::ApiError;
use crate::extract::{Json, Path};
use crate::middleware::CurrentUser;
use crate::state::AppState;
use crate::validate;

/// Create/update payload. `price` arrives as a JSON number; fields are
/// optional so validation can enumerate what is missing.
#[derive(Debug, Deserialize)]
pub struct ProductPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    _caller: CurrentUser,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("fetching all products");

    let products = state.products.list().await?;
    Ok(Json(products))
}

pub async fn get_by_id(
    State(state): State<Arc<AppState>>,
    _caller: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(id, "fetching product");

    let product = state.products.get(id).await?;
    Ok(Json(product))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = validate::product_input(&payload)?;
    tracing::info!(name = %fields.name, caller = %caller.username, "creating product");

    let product = state.products.create(fields).await?;
    tracing::info!(id = product.id, "product created successfully");

    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let fields = validate::product_input(&payload)?;
    tracing::info!(id, caller = %caller.username, "updating product");

    let product = state.products.update(id, fields).await?;
    Ok(Json(product))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    caller: CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(id, caller = %caller.username, "deleting product");

    state.products.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
