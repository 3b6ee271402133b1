use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Request to export the currently displayed view of a table.
/// Carries the same search/filter state as the grid so the backend can
/// reproduce exactly what the user is looking at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    pub table: String,
    /// "csv", "excel" or "json"
    pub format: String,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub filters: BTreeMap<String, Vec<String>>,
}

/// A file written by the export writer. Never updated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportArtifact {
    pub file_path: String,
    pub format: String,
    pub row_count: usize,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// None when the view was empty or the format was not supported
    pub artifact: Option<ExportArtifact>,
    pub elapsed_seconds: f64,
}
