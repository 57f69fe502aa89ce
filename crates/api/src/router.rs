use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{auth_handlers, middleware as auth_middleware, product_handlers, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/", get(|| async { "Product catalog API running" }))
        .route("/api/auth/register", post(auth_handlers::register))
        .route("/api/auth/login", post(auth_handlers::login));

    // Product routes (require a valid bearer token)
    let product_routes = Router::new()
        .route(
            "/api/products",
            get(product_handlers::list).post(product_handlers::create),
        )
        .route(
            "/api/products/{id}",
            get(product_handlers::get_by_id)
                .put(product_handlers::update)
                .delete(product_handlers::remove),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(product_routes)
        .with_state(state)
}
