//! Middleware Module
//!
//! This module contains the HTTP middleware for the server. Middleware
//! runs before requests reach handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - The access gate protecting token-gated routes

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
