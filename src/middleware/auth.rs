/**
 * Authentication Middleware
 *
 * Guards protected routes. Extracts the JWT from the Authorization
 * header, verifies it against the server's signing keys, and attaches
 * the resolved user id to the request extensions. Any failure (missing
 * header, malformed header, bad signature, expired token) short-circuits
 * with 401 before the handler runs.
 */

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::error::ApiError;
use crate::server::state::AppState;

/// Identity resolved from a verified bearer token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Pull the token out of an `Authorization: Bearer <token>` header value
fn extract_bearer(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ")
}

/// Authentication middleware
///
/// 1. Extracts the bearer token from the Authorization header
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 if any step fails; the downstream handler never runs.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("missing Authorization header");
            ApiError::Unauthorized
        })?;

    let token = extract_bearer(auth_header).ok_or_else(|| {
        tracing::warn!("malformed Authorization header");
        ApiError::Unauthorized
    })?;

    let claims = app_state.session_keys.verify(token).map_err(|e| {
        tracing::warn!("token rejected: {}", e);
        ApiError::Unauthorized
    })?;

    let user_id = claims.user_id().map_err(|_| {
        tracing::warn!("token subject is not a valid user id");
        ApiError::Unauthorized
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Handlers behind `auth_middleware` take `AuthUser(user)` as a
/// parameter to get the identity the middleware resolved.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer("bearer abc"), None);
        assert_eq!(extract_bearer("Basic dXNlcjpwdw=="), None);
        assert_eq!(extract_bearer("abc.def.ghi"), None);
    }

    #[tokio::test]
    async fn test_auth_user_extractor_with_identity() {
        let request = axum::http::Request::builder()
            .uri("http://example.com/update")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let user_id = Uuid::new_v4();
        parts.extensions.insert(AuthenticatedUser { user_id });

        let extracted = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted.0.user_id, user_id);
    }

    #[tokio::test]
    async fn test_auth_user_extractor_without_identity() {
        let request = axum::http::Request::builder()
            .uri("http://example.com/update")
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }
}
