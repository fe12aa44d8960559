//! Movies Module
//!
//! CRUD endpoints for the movie resource. These are thin pass-throughs to
//! the store: handlers validate field presence, run a single query, and
//! map failures to localized error bodies.
//!
//! # Module Structure
//!
//! ```text
//! movies/
//! ├── mod.rs      - Module exports
//! ├── db.rs       - Movie model and database operations
//! └── handlers.rs - HTTP handlers
//! ```

/// Movie model and database operations
pub mod db;

/// HTTP handlers for movie endpoints
pub mod handlers;

pub use db::Movie;
pub use handlers::{create_movie, delete_movie, list_movies, update_movie};
