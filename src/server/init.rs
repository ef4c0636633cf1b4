/**
 * Server Initialization
 *
 * Builds the Axum application from a loaded `ServerConfig`:
 *
 * 1. Connect the PostgreSQL pool
 * 2. Run database migrations
 * 3. Build the session signing keys
 * 4. Assemble the router with shared state
 *
 * Unlike services that can degrade gracefully without their store, this
 * one is nothing but a front for it, so a failed connection or migration
 * aborts startup.
 */

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::SessionKeys;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - configuration loaded once at startup
///
/// # Errors
///
/// Returns an error if the database is unreachable or migrations fail.
pub async fn create_app(config: ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    let session_keys = Arc::new(SessionKeys::new(
        config.jwt_secret.as_bytes(),
        config.token_ttl_secs,
    ));

    let app_state = AppState { pool, session_keys };

    tracing::info!("Router configured");
    Ok(create_router(app_state))
}
