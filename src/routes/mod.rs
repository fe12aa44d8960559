//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - User and movie endpoint wiring
//! ```
//!
//! # Routes
//!
//! ## Users
//!
//! - `POST /users/register` - User registration
//! - `POST /users/login` - User login, returns a JWT token
//! - `GET /users` - Paginated user listing
//! - `GET /users/protected` - Token-gated demonstration route
//!
//! ## Movies
//!
//! - `POST /movies` - Add a movie
//! - `PUT /movies/{id}` - Update a movie
//! - `DELETE /movies/{id}` - Delete a movie
//! - `GET /movies` - Paginated movie listing
//!
//! Unmatched routes fall through to a 404 handler with a localized body.

/// Main router creation
pub mod router;

/// User and movie endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
