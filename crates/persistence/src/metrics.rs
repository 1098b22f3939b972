//! Storage metrics.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

use crate::backend::StorageMode;

/// Records how long a named query took.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Publishes pool occupancy gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Sets `storage_mode{mode}` to 1 for the selected backend.
pub fn record_storage_mode(mode: StorageMode) {
    gauge!("storage_mode", "mode" => mode.as_str()).set(1.0);
}

/// Times a query and reports it under `database_query_duration_seconds`.
///
/// ```ignore
/// let timer = QueryTimer::new("find_device_by_serial");
/// let result = sqlx::query_as::<_, DeviceEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    pub fn record(self) {
        record_query_duration(self.query_name, self.start.elapsed().as_secs_f64());
    }
}
