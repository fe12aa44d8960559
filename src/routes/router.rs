/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the endpoint wiring, request tracing, and the fallback handler into a
 * single Axum router.
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Fallback handler for unmatched routes
async fn not_found() -> ApiError {
    ApiError::not_found("Halaman tidak ditemukan")
}

/// Create the Axum router with all routes configured
///
/// This function sets up:
///
/// 1. **API Routes**: user and movie endpoints, with the access gate on
///    the protected route
/// 2. **Request Tracing**: `TraceLayer` logging every request
/// 3. **Fallback Handler**: 404 with a localized error body
///
/// # Arguments
///
/// * `app_state` - Application state (database pool and signing keys)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_api_routes(router, &app_state);

    router
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
