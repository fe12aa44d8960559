//! API Error Module
//!
//! This module defines the error types used by the HTTP handlers and
//! their conversion to HTTP responses.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Taxonomy
//!
//! - `Validation` - missing required fields (400)
//! - `Unauthorized` - absent/invalid/expired token, wrong credentials (401)
//! - `NotFound` - unmatched route (404)
//! - `Internal` - persistence or hashing failure, generic message (500)
//! - `Database` - sqlx query failure, generic message to the client (500)
//!
//! # HTTP Response Conversion
//!
//! All API errors implement `IntoResponse` from Axum, allowing them to be
//! returned directly from handlers. The client receives a JSON body of the
//! form `{"error": "..."}`; internal detail is logged server-side only.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
