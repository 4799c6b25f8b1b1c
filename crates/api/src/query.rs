//! Shared query parameter types for API handlers.

use serde::Deserialize;

use cinelog_core::types::DbId;

/// Pagination parameters (`?pageIndex=&pageSize=`).
///
/// Both are optional; defaults and clamping live in
/// `cinelog_core::pagination` and the repository layer.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub page_index: Option<i64>,
    pub page_size: Option<i64>,
}

/// Id carried as a query parameter (`DELETE /movies?id=`).
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: DbId,
}
