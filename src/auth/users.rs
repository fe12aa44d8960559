/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 *
 * All operations are free functions over a `&PgPool`. None of them run in
 * a transaction; email uniqueness is enforced by the schema constraint, so
 * a racing duplicate registration surfaces as a database error.
 */

use serde::Serialize;
use sqlx::PgPool;

/// User struct representing a user in the database
///
/// The password hash is never serialized: listing endpoints return the row
/// without it.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Surrogate key
    pub id: i32,
    /// User email address (unique)
    pub email: String,
    /// Free-text gender attribute, stored without validation
    pub gender: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Free-text role, carried verbatim into token claims
    pub role: String,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `gender` - Gender attribute
/// * `password_hash` - Hashed password (never the plaintext)
/// * `role` - Role string
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: &str,
    gender: &str,
    password_hash: &str,
    role: &str,
) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, gender, password_hash, role)
        VALUES ($1, $2, $3, $4)
        RETURNING id, email, gender, password_hash, role
        "#,
    )
    .bind(email)
    .bind(gender)
    .bind(password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// Exact match; no case normalization is applied.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, gender, password_hash, role
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// List users with pagination
///
/// Rows come back in the store's natural order; no total count is computed.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `limit` - Maximum number of rows
/// * `offset` - Row offset
///
/// # Returns
/// One page of users or error
pub async fn list_users(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<User>, sqlx::Error> {
    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, gender, password_hash, role
        FROM users
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
