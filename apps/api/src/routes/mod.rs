pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dialect::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/analyze",
            post(handlers::handle_analyze).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
