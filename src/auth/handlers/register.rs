/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /users/register.
 *
 * # Registration Process
 *
 * 1. Check that all required fields are present and non-empty
 * 2. Hash the password using bcrypt (cost 10)
 * 3. Insert the user record with the hash in place of the plaintext
 * 4. Return 201 with an empty body
 *
 * # Security
 *
 * - The plaintext password is never persisted or logged
 * - Hashing and persistence failures surface as a generic 500; the cause
 *   is logged server-side only
 */

use axum::{extract::State, http::StatusCode, response::Json};
use sqlx::PgPool;

use crate::auth::handlers::types::RegisterRequest;
use crate::auth::password::hash_password;
use crate::auth::users::create_user;
use crate::error::ApiError;

/// Registration handler
///
/// This handler processes user registration requests. It validates field
/// presence, hashes the password, and persists the new user record.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Json(request)` - Registration request with email, gender, password, role
///
/// # Returns
///
/// `201 Created` with an empty body on success
///
/// # Errors
///
/// * `400 Bad Request` - If any required field is missing or empty
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /users/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "gender": "male",
///   "password": "securepassword123",
///   "role": "user"
/// }
/// ```
pub async fn register(
    State(pool): State<PgPool>,
    Json(request): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    let email = request.email.as_deref().unwrap_or("").trim();
    let gender = request.gender.as_deref().unwrap_or("").trim();
    let password = request.password.as_deref().unwrap_or("");
    let role = request.role.as_deref().unwrap_or("").trim();

    if email.is_empty() || gender.is_empty() || password.is_empty() || role.is_empty() {
        tracing::warn!("Registration request with missing fields");
        return Err(ApiError::validation(
            "Email, gender, password, and role are required",
        ));
    }

    tracing::info!("Registration request for: {}", email);

    let password_hash = hash_password(password).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::internal("Internal Server Error")
    })?;

    create_user(&pool, email, gender, &password_hash, role)
        .await
        .map_err(|e| {
            tracing::error!("Error during registration: {:?}", e);
            ApiError::internal("Internal Server Error")
        })?;

    tracing::info!("User registered: {}", email);

    Ok(StatusCode::CREATED)
}
