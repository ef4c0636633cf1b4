//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// Router assembly
pub mod router;

/// User API route table
pub mod api_routes;

pub use router::create_router;
