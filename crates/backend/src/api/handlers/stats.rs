use axum::Json;

use contracts::stats::StatsSnapshot;

use crate::shared::stopwatch;

/// GET /api/stats
/// Cumulative operation timings since process start
pub async fn get_stats() -> Json<StatsSnapshot> {
    Json(stopwatch::registry().snapshot())
}
