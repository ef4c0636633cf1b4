/**
 * Profile Update Handler
 *
 * PUT /update (protected)
 *
 * Applies the provided fields to the caller's own user record. The row
 * is selected by the id the auth middleware resolved from the bearer
 * token; nothing in the request body can redirect the update to another
 * user's record.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::handlers::types::{UpdateRequest, UpdateResponse};
use crate::auth::passwords::hash_password;
use crate::auth::users::{update_user, UserChanges};
use crate::auth::validation::validate_update;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Update the authenticated user's password and/or names
///
/// # Errors
///
/// * `400` - a provided field is empty
/// * `401` - missing or invalid token (rejected by the middleware)
/// * `404` - the authenticated user no longer exists
/// * `500` - store or hashing failure
pub async fn update(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<UpdateRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    validate_update(&request)?;

    let password_hash = match &request.password {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let changes = UserChanges {
        password_hash,
        first_name: request.first_name,
        last_name: request.last_name,
    };

    let rows = update_user(&state.pool, auth.user_id, &changes).await?;
    if rows == 0 {
        // Token was valid but the row is gone (deleted out of band).
        tracing::warn!("update target missing: {}", auth.user_id);
        return Err(ApiError::NotFound);
    }

    tracing::info!("user updated: {}", auth.user_id);

    Ok(Json(UpdateResponse {
        msg: "Updated successfully".to_string(),
    }))
}
