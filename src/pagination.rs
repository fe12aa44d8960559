/**
 * Pagination Query Parameters
 *
 * Shared `page`/`limit` query parameters for the listing endpoints.
 * `page` defaults to 1 and `limit` to 10; the row offset is
 * `(page - 1) * limit`. No total-count metadata is computed anywhere.
 */

use serde::Deserialize;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

/// Pagination query parameters
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Pagination {
    /// Page to return, starting at 1
    #[serde(default = "default_page")]
    pub page: i64,
    /// Rows per page
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Pagination {
    /// Row offset for this page
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}
