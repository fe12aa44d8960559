//! Authentication Module
//!
//! This module handles user registration, login, and session management.
//! It provides HTTP handlers for the user endpoints and manages user data
//! and JWT tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - User data model and database operations
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token generation and validation
//! - **`handlers`** - HTTP handlers for the user endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     ├── list.rs     - Paginated user listing handler
//!     └── protected.rs - Token-gated demonstration handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: User provides email, gender, password, role → password
//!    hashed → user persisted → 201
//! 2. **Login**: User provides email and password → credentials verified →
//!    JWT token returned
//! 3. **Protected**: User provides JWT token → token verified by the access
//!    gate → handler runs
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - JWT tokens are stateless; validity is signature plus expiry only
//! - Tokens expire after one hour
//! - No token is ever issued without a successful hash comparison against
//!   a persisted record

/// User data model and database operations
pub mod users;

/// Password hashing and verification
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for user endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, RegisterRequest, TokenResponse};
pub use handlers::{list_users, login, protected, register};
pub use sessions::{Claims, TokenKeys};
