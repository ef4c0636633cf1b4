//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - ServerConfig, read once from the environment
//! ├── state.rs  - AppState and FromRef implementations
//! └── init.rs   - Pool setup, migrations, router assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. `ServerConfig::from_env()` reads configuration once at startup;
//!    missing required values abort before anything is bound
//! 2. `create_app` connects the PostgreSQL pool, runs migrations, builds
//!    the signing keys, and assembles the router

/// Server configuration loading
pub mod config;

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
