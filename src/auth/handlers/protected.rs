/**
 * Protected Route Handler
 *
 * This module implements the handler for GET /users/protected, a
 * demonstration route composed with the access gate. The gate verifies the
 * bearer token before this handler runs; by the time control arrives here,
 * the request carries an authenticated identity.
 */

use axum::response::Json;

use crate::auth::handlers::types::MessageResponse;
use crate::middleware::auth::AuthUser;

/// Protected route handler
///
/// Only reachable through the access gate. Returns a fixed message for
/// any request carrying a valid, unexpired token.
///
/// # Arguments
///
/// * `AuthUser(user)` - Identity attached by the gate
pub async fn protected(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::debug!("Protected route accessed by: {}", user.email);

    Json(MessageResponse {
        message: "Hanya user terdaftar yang bisa mengakses ini!".to_string(),
    })
}
