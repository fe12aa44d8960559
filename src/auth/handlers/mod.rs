//! Authentication Handlers
//!
//! HTTP handlers for the user endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Handler exports
//! ├── types.rs     - Request/response types
//! ├── register.rs  - POST /users/register
//! ├── login.rs     - POST /users/login
//! ├── list.rs      - GET /users
//! └── protected.rs - GET /users/protected
//! ```

/// Request and response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Paginated user listing handler
pub mod list;

/// Token-gated demonstration handler
pub mod protected;

// Re-export handlers for route configuration
pub use list::list_users;
pub use login::login;
pub use protected::protected;
pub use register::register;
