//! Router construction for the metadata server.

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{self, AppState};

/// Build the axum router with all routes and middleware.
///
/// State is injected by the caller so tests can construct isolated
/// instances.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/metadata", post(handlers::create_metadata))
        .route("/v1", get(handlers::get_metadata))
        .route("/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
