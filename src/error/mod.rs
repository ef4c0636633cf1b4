//! API Error Module
//!
//! Defines the error taxonomy used by the HTTP handlers and its conversion
//! to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Categories
//!
//! - `InvalidInput` - malformed or missing request fields
//! - `Conflict` - username already taken
//! - `Unauthorized` - bad credentials or a missing/invalid token
//! - `NotFound` - referenced record does not exist
//! - `Database` / `Hash` / `Token` - internal failures, surfaced as 500
//!
//! Several of these collapse to the same outward response on purpose; see
//! `types.rs` for the mapping.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::ApiError;
