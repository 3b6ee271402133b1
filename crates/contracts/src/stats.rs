use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timed operation (query or export)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    pub operation: String,
    pub duration_seconds: f64,
    pub timestamp: DateTime<Utc>,
}

/// Cumulative performance statistics for the process lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_operations: usize,
    pub avg_duration: f64,
    pub max_duration: f64,
    pub min_duration: f64,
    /// Most recent operations, newest last, at most five
    pub recent_operations: Vec<OperationRecord>,
}

impl StatsSnapshot {
    pub fn empty() -> Self {
        Self {
            total_operations: 0,
            avg_duration: 0.0,
            max_duration: 0.0,
            min_duration: 0.0,
            recent_operations: Vec::new(),
        }
    }
}
