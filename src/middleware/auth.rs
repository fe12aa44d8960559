/**
 * Access Gate Middleware
 *
 * This module provides the middleware protecting routes that require a
 * bearer token. It reads the Authorization header, verifies the token,
 * and attaches the decoded identity to the request.
 *
 * # Statelessness
 *
 * Verification is purely cryptographic: signature and expiry against the
 * process-wide keys. The gate never touches the database, so any process
 * holding the shared secret can validate any token issued by any other
 * process.
 *
 * # Fail Closed
 *
 * A missing, malformed, expired, or tampered token short-circuits the
 * request with 401 before any protected logic executes.
 */

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from token claims
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub email: String,
    pub role: String,
}

/// Access gate middleware
///
/// This middleware:
/// 1. Reads the token from the Authorization header (the raw header value,
///    or a `Bearer <token>` form)
/// 2. Verifies the signature and expiry
/// 3. Attaches the decoded claims to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing or fails verification.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::unauthorized("Missing token")
        })?;

    // The header value is the token itself; a "Bearer " prefix is accepted
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = verify_token(&state.token_keys, token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::unauthorized("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        email: claims.email,
        role: claims.role,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter to receive the identity attached by the
/// gate. Rejects with 401 if the gate did not run for the route.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::unauthorized("Missing token")
            })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use axum::http::Request;

    #[tokio::test]
    async fn test_extract_auth_user() {
        let mut request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        request.extensions_mut().insert(AuthenticatedUser {
            email: "a@b.com".to_string(),
            role: "user".to_string(),
        });

        let (mut parts, _) = request.into_parts();
        let AuthUser(user) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.role, "user");
    }

    #[tokio::test]
    async fn test_extract_auth_user_missing() {
        let request = Request::builder()
            .uri("http://example.com")
            .body(())
            .unwrap();

        let (mut parts, _) = request.into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
    }
}
