/**
 * Signup Handler
 *
 * POST /signup
 *
 * 1. Validate the payload
 * 2. Reject a taken username (the unique index is the authoritative
 *    check; the pre-read only provides the common-case fast path)
 * 3. Hash the password
 * 4. Create the user and its wallet account in one transaction
 * 5. Issue a session token
 *
 * Validation failures and duplicate usernames produce the same generic
 * 400 response so the endpoint cannot be used to enumerate usernames.
 */

use axum::extract::State;
use axum::Json;

use crate::auth::accounts::{create_account, random_initial_balance};
use crate::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::auth::passwords::hash_password;
use crate::auth::users::{create_user, get_user_by_username, is_unique_violation};
use crate::auth::validation::validate_signup;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register a new user and provision their account
///
/// # Errors
///
/// * `400` - invalid payload or username already taken
/// * `500` - store, hashing, or token failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    validate_signup(&request)?;

    if get_user_by_username(&state.pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("signup rejected: username already exists");
        return Err(ApiError::Conflict);
    }

    let password_hash = hash_password(&request.password)?;

    // User and account commit together; a failed account insert rolls
    // the user back as well.
    let mut tx = state.pool.begin().await?;

    let user = match create_user(
        &mut tx,
        &request.username,
        &request.first_name,
        &request.last_name,
        &password_hash,
    )
    .await
    {
        Ok(user) => user,
        // Concurrent signup with the same username slipped past the
        // pre-read; the unique index caught it.
        Err(e) if is_unique_violation(&e) => {
            tracing::warn!("signup rejected: unique index hit on insert");
            return Err(ApiError::Conflict);
        }
        Err(e) => return Err(e.into()),
    };

    create_account(&mut tx, user.id, random_initial_balance()).await?;

    tx.commit().await?;

    let token = state.session_keys.issue(user.id)?;

    tracing::info!("user created: {}", user.id);

    Ok(Json(SignupResponse {
        msg: "User created successfully".to_string(),
        token,
    }))
}
