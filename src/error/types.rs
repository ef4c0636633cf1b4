/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Each
 * variant maps to an HTTP status code and a short client-facing message.
 *
 * # Outward Collapse
 *
 * The client-facing mapping deliberately hides which check failed:
 *
 * - `InvalidInput` and `Conflict` share the same 400 status and message,
 *   so a caller probing the signup endpoint cannot distinguish a taken
 *   username from a malformed payload.
 * - Signin failures (unknown username, wrong password) are both reported
 *   as `Unauthorized` before they reach this type.
 * - Internal failures (`Database`, `Hash`, `Token`) surface as a bare
 *   500 with no detail; the underlying cause is logged server-side only.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by request handlers and middleware
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Username already exists
    #[error("username already taken")]
    Conflict,

    /// Bad credentials or missing/invalid bearer token
    #[error("unauthorized")]
    Unauthorized,

    /// Referenced record does not exist
    #[error("not found")]
    NotFound,

    /// Database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token signing failure
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short message safe to return to the client
    ///
    /// Never includes internal error details. `InvalidInput` and
    /// `Conflict` intentionally share one message.
    pub fn client_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) | Self::Conflict => "Email already taken / incorrect inputs",
            Self::Unauthorized => "Invalid username or password",
            Self::NotFound => "Not found",
            Self::Database(_) | Self::Hash(_) | Self::Token(_) => "Internal server error",
        }
    }

    /// True for errors caused by the server rather than the request
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Hash(_) | Self::Token(_))
    }
}
