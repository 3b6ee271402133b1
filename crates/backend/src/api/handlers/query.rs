use axum::{http::StatusCode, Json};

use contracts::query::{QueryRequest, QueryResponse};

use crate::query::service;

/// POST /api/query
/// Refresh the grid for one table. Database trouble degrades to an empty
/// response with an error string; only an unknown table id is a 404.
pub async fn run_query(
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, (StatusCode, String)> {
    tracing::info!(
        "query: table={} search={:?} filters={}",
        request.table,
        request.search_text(),
        request.filters.len()
    );

    match service::fetch(&request.table, request.search_text(), &request.filters).await {
        Ok(response) => Ok(Json(response)),
        Err(e) => {
            tracing::warn!("query rejected: {}", e);
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
    }
}
