use axum::Json;

use contracts::system::{DatabaseHealth, SystemInfo};

use crate::system;

/// GET /api/system/health
/// Database probe for the info tab; the refresh button re-calls this
pub async fn database_health() -> Json<DatabaseHealth> {
    Json(system::database_health().await)
}

/// GET /api/system/info
pub async fn system_info() -> Json<SystemInfo> {
    Json(system::system_info())
}
