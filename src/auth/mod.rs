//! Authentication Module
//!
//! User storage, password hashing, session tokens, payload validation,
//! and the HTTP handlers that tie them together.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs        - Module exports
//! ├── users.rs      - User model and database operations
//! ├── accounts.rs   - Wallet account model and provisioning
//! ├── passwords.rs  - bcrypt hashing and verification
//! ├── sessions.rs   - JWT issuance and verification
//! ├── validation.rs - Request payload validation
//! └── handlers/     - HTTP handlers (signup, signin, update, search)
//! ```

/// User model and database operations
pub mod users;

/// Wallet account model and provisioning
pub mod accounts;

/// Password hashing
pub mod passwords;

/// JWT session tokens
pub mod sessions;

/// Payload validation
pub mod validation;

/// HTTP handlers
pub mod handlers;

pub use handlers::{search, signin, signup, update};
pub use sessions::SessionKeys;
