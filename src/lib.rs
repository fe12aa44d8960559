//! MovieDB - Main Library
//!
//! MovieDB is a small REST API exposing CRUD operations over movies and
//! users, backed by PostgreSQL, with a registration/login flow issuing
//! JWT bearer tokens.
//!
//! # Overview
//!
//! This library provides:
//! - User registration with bcrypt password hashing
//! - Login issuing signed JWT tokens (1-hour expiry)
//! - A stateless access gate protecting routes via bearer tokens
//! - Paginated movie and user listings
//! - Movie create/update/delete endpoints
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`auth`** - Registration, login, sessions, user storage
//! - **`movies`** - Movie model, queries, and CRUD handlers
//! - **`middleware`** - Token verification gate for protected routes
//! - **`routes`** - HTTP route configuration
//! - **`server`** - Application state, configuration, initialization
//! - **`error`** - API error taxonomy and HTTP response conversion
//! - **`pagination`** - Shared page/limit query parameters
//!
//! # Usage
//!
//! ```rust,no_run
//! use moviedb::server::config::ServerConfig;
//! use moviedb::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Authentication, user storage, and session management
pub mod auth;

/// API error taxonomy and response conversion
pub mod error;

/// Request middleware (token verification gate)
pub mod middleware;

/// Movie model, queries, and handlers
pub mod movies;

/// Shared pagination query parameters
pub mod pagination;

/// HTTP route configuration
pub mod routes;

/// Server state, configuration, and initialization
pub mod server;

// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
