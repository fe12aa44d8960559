/**
 * Database Operations for Movies
 *
 * This module provides the movie row type and its queries.
 */

use serde::Serialize;
use sqlx::PgPool;

/// Movie row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub genres: String,
    pub year: i32,
}

/// Insert a new movie
pub async fn create_movie(
    pool: &PgPool,
    title: &str,
    genres: &str,
    year: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO movies (title, genres, year)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(title)
    .bind(genres)
    .bind(year)
    .execute(pool)
    .await?;

    Ok(())
}

/// Update a movie by id
///
/// Updating a missing id is not an error; the caller does not check
/// affected rows.
pub async fn update_movie(
    pool: &PgPool,
    id: i32,
    title: &str,
    genres: &str,
    year: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE movies
        SET title = $1, genres = $2, year = $3
        WHERE id = $4
        "#,
    )
    .bind(title)
    .bind(genres)
    .bind(year)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a movie by id
pub async fn delete_movie(pool: &PgPool, id: i32) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

/// List movies with pagination
///
/// Rows come back in the store's natural order; no total count is computed.
pub async fn list_movies(
    pool: &PgPool,
    limit: i64,
    offset: i64,
) -> Result<Vec<Movie>, sqlx::Error> {
    let movies = sqlx::query_as::<_, Movie>(
        r#"
        SELECT id, title, genres, year
        FROM movies
        OFFSET $1 LIMIT $2
        "#,
    )
    .bind(offset)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(movies)
}
