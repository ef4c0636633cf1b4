/**
 * Application State Management
 *
 * `AppState` is the central state container shared by all handlers. It
 * holds the PostgreSQL pool and the session signing keys, both created
 * once at startup and read-only afterwards.
 *
 * The `FromRef` implementations let handlers extract just the part of
 * the state they need, following Axum's recommended pattern.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::SessionKeys;

/// Shared application state
///
/// Cloned per request; both fields are cheap to clone (pool is an `Arc`
/// internally, keys are wrapped in one explicitly).
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,

    /// JWT signing/verification keys and token lifetime
    pub session_keys: Arc<SessionKeys>,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
