use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use catalog::ProductError;
use catalog_auth::AuthError;

/// Closed set of error kinds the HTTP surface can produce. Everything a
/// handler returns funnels through this type's `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("Invalid username or password")]
    BadCredentials,

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("Internal server error")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUsername => Self::Duplicate(err.to_string()),
            AuthError::BadCredentials => Self::BadCredentials,
            AuthError::TokenMalformed | AuthError::TokenSignature | AuthError::TokenExpired => {
                Self::Unauthenticated(err.to_string())
            }
            AuthError::Hashing(_) | AuthError::TokenCreation(_) | AuthError::Store(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => Self::NotFound(err.to_string()),
            ProductError::Store(_) => Self::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadCredentials | Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Duplicate(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Validation(fields) => json!({
                "error": "Validation failed",
                "fields": fields,
            }),
            // Details stay in the logs; the client gets an opaque id to
            // quote when reporting the failure.
            Self::Internal(detail) => {
                let correlation_id = Uuid::new_v4();
                tracing::error!(%correlation_id, error = %detail, "request failed");
                json!({
                    "error": "Internal server error",
                    "correlation_id": correlation_id.to_string(),
                })
            }
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                ApiError::Validation(BTreeMap::new()),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::BadCredentials, StatusCode::UNAUTHORIZED),
            (
                ApiError::Unauthenticated("no token".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::NotFound("Product not found with id: 1".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Duplicate("Username already exists".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::Internal("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_auth_errors_map_without_leaking() {
        // Missing user and wrong password both collapse to BadCredentials.
        assert!(matches!(
            ApiError::from(AuthError::BadCredentials),
            ApiError::BadCredentials
        ));
        assert!(matches!(
            ApiError::from(AuthError::DuplicateUsername),
            ApiError::Duplicate(msg) if msg.contains("exists")
        ));
        assert!(matches!(
            ApiError::from(AuthError::TokenExpired),
            ApiError::Unauthenticated(_)
        ));
    }

    #[test]
    fn test_product_not_found_maps_to_404() {
        let err = ApiError::from(ProductError::NotFound(42));
        assert!(matches!(&err, ApiError::NotFound(msg) if msg.contains("42")));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
