/**
 * API Route Handlers
 *
 * This module wires the user and movie endpoints into the router.
 *
 * # Routes
 *
 * ## Users
 * - `POST /users/register` - User registration
 * - `POST /users/login` - User login
 * - `GET /users` - Paginated user listing
 * - `GET /users/protected` - Requires a valid bearer token
 *
 * ## Movies
 * - `POST /movies` / `GET /movies` - Create and list
 * - `PUT /movies/{id}` / `DELETE /movies/{id}` - Update and delete
 */

use axum::{middleware, Router};

use crate::auth::handlers::{list_users, login, protected, register};
use crate::middleware::auth::auth_middleware;
use crate::movies::handlers::{create_movie, delete_movie, list_movies, update_movie};
use crate::server::state::AppState;

/// Configure API routes
///
/// Adds the user and movie endpoints to the router. The access gate is
/// applied only to `/users/protected`; every other route is public.
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - Application state, needed to instantiate the gate
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    router
        // User endpoints
        .route(
            "/users/register",
            axum::routing::post(register),
        )
        .route(
            "/users/login",
            axum::routing::post(login),
        )
        .route(
            "/users",
            axum::routing::get(list_users),
        )
        .route(
            "/users/protected",
            axum::routing::get(protected).route_layer(middleware::from_fn_with_state(
                app_state.clone(),
                auth_middleware,
            )),
        )
        // Movie endpoints
        .route(
            "/movies",
            axum::routing::post(create_movie).get(list_movies),
        )
        .route(
            "/movies/{id}",
            axum::routing::put(update_movie).delete(delete_movie),
        )
}
