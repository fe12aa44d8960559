/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the user
 * endpoint handlers.
 */

use serde::{Deserialize, Serialize};

/// Registration request
///
/// Every field is optional at the deserialization layer so the handler can
/// report missing fields as a 400 validation error instead of letting the
/// extractor reject the body.
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// User's email address
    pub email: Option<String>,
    /// Free-text gender attribute
    pub gender: Option<String>,
    /// User's password (hashed before storage)
    pub password: Option<String>,
    /// Free-text role string
    pub role: Option<String>,
}

/// Login request
///
/// Contains the email and password for user authentication.
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash)
    pub password: String,
}

/// Token response
///
/// Returned by the login handler on successful authentication.
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Signed JWT token (1-hour expiration)
    pub token: String,
}

/// Protected route response
#[derive(Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    /// Fixed message body
    pub message: String,
}
