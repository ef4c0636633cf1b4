//! Middleware Module
//!
//! Request-processing middleware. Currently only the bearer-token
//! authentication guard for protected routes.

pub mod auth;

pub use auth::{auth_middleware, AuthenticatedUser, AuthUser};
