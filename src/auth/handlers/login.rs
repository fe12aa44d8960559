/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /users/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by exact email match
 * 2. Verify the password against the stored bcrypt hash
 * 3. Sign a JWT embedding the user's email and role
 * 4. Return the token
 *
 * # Security
 *
 * - Password verification uses bcrypt's constant-time comparison
 * - No token is ever issued without a successful hash comparison against
 *   a persisted record
 * - The response distinguishes "User Not Found" from "Invalid Password";
 *   both are 401
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::auth::password::verify_password;
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// This handler processes user authentication requests. It verifies the
/// email and password, and returns a signed JWT if authentication succeeds.
///
/// # Arguments
///
/// * `State(state)` - Application state (database pool and signing keys)
/// * `Json(request)` - Login request containing email and password
///
/// # Returns
///
/// JSON response with the token, or an error status code
///
/// # Errors
///
/// * `401 Unauthorized` - `{"error":"User Not Found"}` if no record matches
///   the email, `{"error":"Invalid Password"}` if the hash comparison fails
/// * `500 Internal Server Error` - If the lookup, verification, or signing fails
///
/// # Example Request
///
/// ```http
/// POST /users/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "securepassword123"
/// }
/// ```
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.db_pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Error during login: {:?}", e);
            ApiError::internal("Internal Server Error")
        })?;

    let Some(user) = user else {
        tracing::warn!("User not found: {}", request.email);
        return Err(ApiError::unauthorized("User Not Found"));
    };

    let valid = verify_password(&request.password, &user.password_hash).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::internal("Internal Server Error")
    })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(ApiError::unauthorized("Invalid Password"));
    }

    let token = create_token(&state.token_keys, &user.email, &user.role).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        ApiError::internal("Internal Server Error")
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse { token }))
}
