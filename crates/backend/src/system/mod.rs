//! Database health probe and host snapshot for the informational tab.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sysinfo::{Disks, System};

use contracts::system::{DatabaseHealth, SystemInfo};

use crate::shared::data::db;
use crate::shared::format::format_file_size;

/// Probe the database with a trivial statement. Never fails; an unreachable
/// database yields an "unhealthy" report.
pub async fn database_health() -> DatabaseHealth {
    let Some(conn) = db::try_connection() else {
        return unhealthy("database connection was never established".to_string());
    };

    let stmt = Statement::from_string(DatabaseBackend::MySql, "SELECT 1 AS test".to_string());
    match conn.query_one(stmt).await {
        Ok(row) => DatabaseHealth {
            status: "healthy".to_string(),
            connection: true,
            query_test: row.is_some(),
            error: None,
            timestamp: Utc::now(),
        },
        Err(e) => unhealthy(e.to_string()),
    }
}

fn unhealthy(error: String) -> DatabaseHealth {
    DatabaseHealth {
        status: "unhealthy".to_string(),
        connection: false,
        query_test: false,
        error: Some(error),
        timestamp: Utc::now(),
    }
}

/// Host snapshot: platform, cpu and memory figures formatted for display
pub fn system_info() -> SystemInfo {
    let mut sys = System::new_all();
    sys.refresh_all();

    let disks = Disks::new_with_refreshed_list();
    let disk_free: u64 = disks.iter().map(|d| d.available_space()).sum();

    let platform = format!(
        "{} {}",
        System::name().unwrap_or_else(|| "unknown".to_string()),
        System::os_version().unwrap_or_default()
    );

    SystemInfo {
        platform: platform.trim().to_string(),
        hostname: System::host_name().unwrap_or_else(|| "unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format_file_size(sys.total_memory()),
        memory_available: format_file_size(sys.available_memory()),
        disk_free: format_file_size(disk_free),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_info_is_populated() {
        let info = system_info();
        assert!(!info.platform.is_empty());
        assert!(info.cpu_count > 0);
        assert!(info.memory_total.ends_with('B'));
    }

    #[tokio::test]
    async fn test_health_without_connection_is_unhealthy() {
        // No database is initialized in unit tests
        let health = database_health().await;
        assert_eq!(health.status, "unhealthy");
        assert!(!health.connection);
        assert!(health.error.is_some());
    }
}
