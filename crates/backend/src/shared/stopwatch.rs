//! Operation timing for the stats endpoint.
//!
//! Timers are plain values held by the request that started them, so
//! concurrent requests measure independently; only the finished records
//! go into the process-wide registry.

use std::sync::Mutex;
use std::time::Instant;

use chrono::Utc;
use once_cell::sync::Lazy;

use contracts::stats::{OperationRecord, StatsSnapshot};

static REGISTRY: Lazy<StatsRegistry> = Lazy::new(StatsRegistry::new);

pub fn registry() -> &'static StatsRegistry {
    &REGISTRY
}

/// A single in-flight measurement, started per request
pub struct OperationTimer {
    label: String,
    started: Instant,
}

impl OperationTimer {
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
        }
    }

    /// Stop the timer, record it, and return the elapsed seconds
    pub fn finish(self) -> f64 {
        let duration = self.started.elapsed().as_secs_f64();
        REGISTRY.record(&self.label, duration);
        duration
    }
}

/// Cumulative per-process statistics over all finished operations
pub struct StatsRegistry {
    operations: Mutex<Vec<OperationRecord>>,
}

impl StatsRegistry {
    fn new() -> Self {
        Self {
            operations: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, operation: &str, duration_seconds: f64) {
        let mut ops = self.operations.lock().expect("stats registry poisoned");
        ops.push(OperationRecord {
            operation: operation.to_string(),
            duration_seconds,
            timestamp: Utc::now(),
        });
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let ops = self.operations.lock().expect("stats registry poisoned");
        if ops.is_empty() {
            return StatsSnapshot::empty();
        }

        let durations: Vec<f64> = ops.iter().map(|op| op.duration_seconds).collect();
        let sum: f64 = durations.iter().sum();
        let max = durations.iter().cloned().fold(f64::MIN, f64::max);
        let min = durations.iter().cloned().fold(f64::MAX, f64::min);
        let recent_start = ops.len().saturating_sub(5);

        StatsSnapshot {
            total_operations: ops.len(),
            avg_duration: sum / ops.len() as f64,
            max_duration: max,
            min_duration: min,
            recent_operations: ops[recent_start..].to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_records_into_registry() {
        let registry = StatsRegistry::new();
        registry.record("query_dataset_index", 0.25);
        registry.record("export_test_cases_csv", 0.75);

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.total_operations, 2);
        assert!((snapshot.avg_duration - 0.5).abs() < 1e-9);
        assert!((snapshot.max_duration - 0.75).abs() < 1e-9);
        assert!((snapshot.min_duration - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot() {
        let registry = StatsRegistry::new();
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.total_operations, 0);
        assert_eq!(snapshot.avg_duration, 0.0);
        assert!(snapshot.recent_operations.is_empty());
    }

    #[test]
    fn test_recent_operations_capped_at_five() {
        let registry = StatsRegistry::new();
        for i in 0..8 {
            registry.record("op", i as f64);
        }

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.total_operations, 8);
        assert_eq!(snapshot.recent_operations.len(), 5);
        // newest last
        assert_eq!(snapshot.recent_operations[4].duration_seconds, 7.0);
        assert_eq!(snapshot.recent_operations[0].duration_seconds, 3.0);
    }

    #[test]
    fn test_operation_timer_elapsed() {
        let timer = OperationTimer::start("test_op");
        let elapsed = timer.finish();
        assert!(elapsed >= 0.0);
    }
}
