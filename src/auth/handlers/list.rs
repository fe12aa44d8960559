/**
 * User Listing Handler
 *
 * This module implements the paginated user listing for GET /users.
 *
 * Rows are returned in the store's natural order with no total-count
 * metadata. The password hash column is excluded from the serialized rows.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use sqlx::PgPool;

use crate::auth::users::{self, User};
use crate::error::ApiError;
use crate::pagination::Pagination;

/// User listing handler
///
/// Returns one page of user rows. Pagination defaults to page 1 with 10
/// rows per page; the offset is `(page - 1) * limit`.
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool
/// * `Query(pagination)` - `page` and `limit` query parameters
///
/// # Errors
///
/// * `500 Internal Server Error` - If the query fails
pub async fn list_users(
    State(pool): State<PgPool>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = users::list_users(&pool, pagination.limit, pagination.offset()).await?;

    Ok(Json(users))
}
