/**
 * User API Routes
 *
 * Route table for the user endpoints. `/update` is the only protected
 * route; it is wrapped with the authentication middleware so the handler
 * always receives a verified identity.
 */

use axum::Router;

use crate::auth::{search, signin, signup, update};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure user routes
///
/// # Routes
///
/// - `POST /signup` - public
/// - `POST /signin` - public
/// - `PUT /update` - requires `Authorization: Bearer <token>`
/// - `GET /bulk` - public
pub fn configure_user_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    router
        .route("/signup", axum::routing::post(signup))
        .route("/signin", axum::routing::post(signin))
        .route(
            "/update",
            axum::routing::put(update).layer(axum::middleware::from_fn_with_state(
                app_state,
                auth_middleware,
            )),
        )
        .route("/bulk", axum::routing::get(search))
}
