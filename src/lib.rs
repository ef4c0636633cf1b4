//! PayVault - User Account Service
//!
//! PayVault is a small wallet backend built with Axum and PostgreSQL. It
//! handles user registration, login, profile updates, and a fuzzy user
//! search, and provisions a wallet account with a starting balance for
//! every new user.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, application state, server initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - User storage, password hashing, JWT sessions, handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Authentication Flow
//!
//! 1. **Signup**: validate payload → hash password → create user + account
//!    in one transaction → return JWT token
//! 2. **Signin**: validate payload → verify password → return JWT token
//! 3. **Protected routes**: `Authorization: Bearer <token>` verified by
//!    middleware, which resolves the caller's user id for the handler
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never logged
//! - Tokens are HS256 JWTs with an expiry claim; no server-side session
//!   store is kept
//! - Error responses carry a short generic message only, so a caller
//!   cannot tell a bad password from an unknown username, or which
//!   signup field failed validation

/// Server configuration, state, and initialization
pub mod server;

/// HTTP route configuration
pub mod routes;

/// Authentication, user storage, and request handlers
pub mod auth;

/// Request-processing middleware
pub mod middleware;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::config::ServerConfig;
pub use server::state::AppState;
