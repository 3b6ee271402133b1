use std::path::Path;

use axum::{http::StatusCode, Json};

use contracts::export::{ExportRequest, ExportResponse};

use crate::export::{writer, ExportFormat};
use crate::query::service;
use crate::shared::stopwatch::OperationTimer;

/// Export files land here, next to the working directory
pub const EXPORT_DIR: &str = "exports";

/// POST /api/export
/// Re-run the request's view and write it to disk. An unsupported format,
/// an empty view or a write failure all answer with `artifact: null`; the
/// UI simply shows no download.
pub async fn run_export(
    Json(request): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, (StatusCode, String)> {
    let timer = OperationTimer::start(format!("export_{}_{}", request.table, request.format));

    let format: ExportFormat = match request.format.parse() {
        Ok(format) => format,
        Err(e) => {
            tracing::warn!("export refused: {}", e);
            let elapsed = timer.finish();
            return Ok(Json(ExportResponse {
                artifact: None,
                elapsed_seconds: elapsed,
            }));
        }
    };

    let search = request.search.as_deref().filter(|s| !s.trim().is_empty());
    let result = match service::fetch(&request.table, search, &request.filters).await {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("export rejected: {}", e);
            return Err((StatusCode::NOT_FOUND, e.to_string()));
        }
    };

    let display_name = crate::catalog::get_table(&request.table)
        .map(|t| t.display_name)
        .unwrap_or(request.table.as_str());

    let artifact = if result.error.is_some() {
        // Degraded query: nothing worth writing
        None
    } else {
        match writer::export(display_name, &result, format, Path::new(EXPORT_DIR)) {
            Ok(artifact) => artifact,
            Err(e) => {
                tracing::error!("export failed for table {}: {}", request.table, e);
                None
            }
        }
    };

    let elapsed = timer.finish();
    if let Some(ref artifact) = artifact {
        tracing::info!(
            "export done: {} ({} rows, {:.2}s)",
            artifact.file_path,
            artifact.row_count,
            elapsed
        );
    }

    Ok(Json(ExportResponse {
        artifact,
        elapsed_seconds: elapsed,
    }))
}
