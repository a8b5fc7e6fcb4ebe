//! Route definitions

use axum::{
    Router,
    routing::{get, post},
};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Search form
        .route("/", get(handlers::pages::index))
        // Lookup endpoints
        .route("/city", post(handlers::pages::today))
        .route("/tomorrow", post(handlers::pages::tomorrow))
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
