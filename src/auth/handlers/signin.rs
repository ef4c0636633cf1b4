/**
 * Signin Handler
 *
 * POST /signin
 *
 * Looks the user up by username and verifies the password with bcrypt.
 * An unknown username and a wrong password both return the same 401, so
 * the endpoint cannot be used to probe which usernames exist.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::handlers::types::{SigninRequest, SigninResponse};
use crate::auth::passwords::verify_password;
use crate::auth::users::get_user_by_username;
use crate::auth::validation::validate_signin;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticate a user and issue a session token
///
/// # Errors
///
/// * `400` - malformed payload
/// * `401` - unknown username or wrong password (indistinguishable)
/// * `500` - store or token failure
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<SigninResponse>, ApiError> {
    validate_signin(&request)?;

    let user = get_user_by_username(&state.pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("signin rejected: unknown username");
            ApiError::Unauthorized
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("signin rejected: wrong password for {}", user.id);
        return Err(ApiError::Unauthorized);
    }

    let token = state.session_keys.issue(user.id)?;

    tracing::info!("user signed in: {}", user.id);

    Ok(Json(SigninResponse { token }))
}
