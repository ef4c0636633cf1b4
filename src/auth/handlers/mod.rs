//! Authentication Handlers Module
//!
//! HTTP handlers for the user endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - registration + account provisioning
//! - **`signin`** - POST /signin - credential check, token issuance
//! - **`update`** - PUT /update - profile update (protected)
//! - **`search`** - GET /bulk - fuzzy user search

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

/// Profile update handler
pub mod update;

/// User search handler
pub mod search;

pub use types::{
    SearchResponse, SigninRequest, SigninResponse, SignupRequest, SignupResponse, UpdateRequest,
    UpdateResponse,
};

pub use search::search;
pub use signin::signin;
pub use signup::signup;
pub use update::update;
