use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::Json;
use crate::state::AppState;
use crate::validate;

/// Fields are optional so missing ones land in the validation field map
/// instead of a deserialization failure. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
    pub message: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, password) = validate::register_input(&payload)?;
    tracing::info!(username = %username, "registration attempt");

    state.auth.register(&username, &password).await?;
    tracing::info!(username = %username, "user registered successfully");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (username, password) = validate::login_input(&payload)?;
    tracing::info!(username = %username, "login attempt");

    let (token, user) = state.auth.login(&username, &password).await?;
    tracing::info!(username = %user.username, "user logged in successfully");

    Ok(Json(AuthResponse {
        token,
        username: user.username,
        message: "Login successful".to_string(),
    }))
}
