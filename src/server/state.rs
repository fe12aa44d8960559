/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The PostgreSQL connection pool
 * - The token signing/verification keys
 *
 * Both are explicit dependencies injected at startup; handlers and
 * middleware receive them through extractors rather than module-level
 * singletons. Neither field is mutated after startup, so requests share
 * the state without locking.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;

/// Application state shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Token signing and verification keys
    ///
    /// Derived once at startup from the configured secret.
    pub token_keys: TokenKeys,
}

/// Allow handlers to extract the pool directly with `State(pool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers to extract the token keys directly with `State(keys)`
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.token_keys.clone()
    }
}
