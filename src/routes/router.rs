/**
 * Router Configuration
 *
 * Assembles the full Axum router: user API routes, request tracing, and
 * a JSON 404 fallback.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::configure_user_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - shared state (pool + signing keys)
///
/// # Routes
///
/// - `POST /signup` - registration
/// - `POST /signin` - login
/// - `PUT /update` - profile update (bearer token required)
/// - `GET /bulk` - user search
pub fn create_router(app_state: AppState) -> Router {
    let router = Router::new();

    let router = configure_user_routes(router, app_state.clone());

    router
        .fallback(|| async { ApiError::NotFound })
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
