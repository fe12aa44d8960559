/**
 * Movie Handlers
 *
 * HTTP handlers for the movie endpoints:
 *
 * - `POST /movies` - add a movie
 * - `PUT /movies/{id}` - update a movie
 * - `DELETE /movies/{id}` - delete a movie
 * - `GET /movies` - paginated listing
 *
 * Write endpoints validate that title, genres, and year are all present
 * before touching the store; a missing field is a 400. Query failures map
 * to localized 500 bodies with the cause logged server-side.
 */

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::movies::db::{self, Movie};
use crate::pagination::Pagination;

/// Movie request body for create and update
///
/// Fields are optional at the deserialization layer so presence is checked
/// by the handler and reported as a 400 rather than an extractor rejection.
#[derive(Deserialize, Debug)]
pub struct MoviePayload {
    pub title: Option<String>,
    pub genres: Option<String>,
    pub year: Option<i32>,
}

/// Check that every movie field is present and non-empty
fn validate_payload(payload: &MoviePayload) -> Result<(&str, &str, i32), ApiError> {
    let title = payload.title.as_deref().unwrap_or("").trim();
    let genres = payload.genres.as_deref().unwrap_or("").trim();

    match (payload.year, title.is_empty() || genres.is_empty()) {
        (Some(year), false) => Ok((title, genres, year)),
        _ => Err(ApiError::validation(
            "Harap masukkan title, genres, dan year",
        )),
    }
}

/// Add a movie
///
/// # Errors
///
/// * `400 Bad Request` - If title, genres, or year is missing
/// * `500 Internal Server Error` - If the insert fails
pub async fn create_movie(
    State(pool): State<PgPool>,
    Json(payload): Json<MoviePayload>,
) -> Result<StatusCode, ApiError> {
    let (title, genres, year) = validate_payload(&payload)?;

    db::create_movie(&pool, title, genres, year)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert movie: {:?}", e);
            ApiError::internal("Gagal menambahkan film")
        })?;

    Ok(StatusCode::CREATED)
}

/// Update a movie by id
///
/// Updating an id with no matching row still returns 200.
///
/// # Errors
///
/// * `400 Bad Request` - If title, genres, or year is missing
/// * `500 Internal Server Error` - If the update fails
pub async fn update_movie(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
    Json(payload): Json<MoviePayload>,
) -> Result<StatusCode, ApiError> {
    let (title, genres, year) = validate_payload(&payload)?;

    db::update_movie(&pool, id, title, genres, year)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update movie {}: {:?}", id, e);
            ApiError::internal("Gagal memperbarui film")
        })?;

    Ok(StatusCode::OK)
}

/// Delete a movie by id
///
/// Deleting an id with no matching row still returns 200.
pub async fn delete_movie(
    State(pool): State<PgPool>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    db::delete_movie(&pool, id).await.map_err(|e| {
        tracing::error!("Failed to delete movie {}: {:?}", id, e);
        ApiError::internal("Gagal menghapus film")
    })?;

    Ok(StatusCode::OK)
}

/// Paginated movie listing
///
/// Defaults to page 1 with 10 rows; offset is `(page - 1) * limit`.
pub async fn list_movies(
    State(pool): State<PgPool>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<Movie>>, ApiError> {
    let movies = db::list_movies(&pool, pagination.limit, pagination.offset()).await?;

    Ok(Json(movies))
}
