//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and validation
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment configuration
//! └── init.rs   - Pool connection, migrations, router assembly
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration**: read `DATABASE_URL`, `JWT_SECRET`, `SERVER_PORT`
//!    from the environment; the first two are required
//! 2. **Database**: connect the pool and run embedded migrations
//! 3. **State**: derive token keys from the secret, build `AppState`
//! 4. **Router**: wire routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::create_app;
pub use state::AppState;
