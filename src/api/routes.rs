//! API Routes
//!
//! Configures the Axum router with all cache API endpoints.

use axum::{
    routing::{get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    calls_handler, get_handler, health_handler, page_count_handler, page_handler, store_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /store` - Store a scalar under a generated key
/// - `GET /get/:key` - Retrieve a value (`?as=raw|string|int`)
/// - `GET /calls/:operation` - Call count and history of an operation
/// - `GET /page` - Fetch a page through the TTL cache (`?url=..&ttl=..`)
/// - `GET /page/count` - Access count of a URL (`?url=..`)
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/store", put(store_handler))
        .route("/get/:key", get(get_handler))
        .route("/calls/:operation", get(calls_handler))
        .route("/page", get(page_handler))
        .route("/page/count", get(page_count_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
