use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Database health probe result for the info tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    /// "healthy" or "unhealthy"
    pub status: String,
    pub connection: bool,
    pub query_test: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Host system snapshot for the info tab
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub platform: String,
    pub hostname: String,
    pub cpu_count: usize,
    /// Formatted with binary units, e.g. "15.6GB"
    pub memory_total: String,
    pub memory_available: String,
    pub disk_free: String,
}
