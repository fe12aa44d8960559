/**
 * Server Initialization
 *
 * This module handles the initialization of the Axum HTTP server:
 * connecting the database pool, running migrations, building the
 * application state, and assembling the router.
 *
 * # Initialization Process
 *
 * 1. Connect a PgPool to the configured database
 * 2. Run embedded migrations
 * 3. Derive token keys from the configured secret
 * 4. Create the router with all routes and middleware
 *
 * The store is not optional: a failed connection fails startup.
 */

use axum::Router;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;
use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Connect the database pool and run migrations
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns the sqlx error if the connection or a migration fails.
pub async fn load_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated server configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Fails if the database is unreachable or migrations cannot run.
pub async fn create_app(config: &ServerConfig) -> Result<Router, sqlx::Error> {
    let db_pool = load_database(&config.database_url).await?;

    let token_keys = TokenKeys::from_secret(config.jwt_secret.as_bytes());

    let app_state = AppState {
        db_pool,
        token_keys,
    };

    Ok(create_router(app_state))
}
