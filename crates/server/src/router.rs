//! Route table assembly.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::auth::require_basic_auth;
use crate::handlers;
use crate::state::AppState;

/// Build the application router with all routes.
///
/// The root route stays open for liveness probes; the status routes sit
/// behind Basic auth.
pub fn build_router(state: AppState) -> Router {
    // Liveness route (no auth required)
    let health_routes = Router::new().route("/", get(handlers::root));

    // Status push routes
    let status_routes = Router::new()
        .route("/status/update", post(handlers::update_status))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .merge(status_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
