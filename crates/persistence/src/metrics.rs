//! Query timing metrics.
//!
//! Every repository method wraps its query in a [`QueryTimer`] so slow
//! statements show up per query name in the
//! `database_query_duration_seconds` histogram.

use metrics::histogram;
use std::time::Instant;

/// Times one database operation under a stable query name.
///
/// ```ignore
/// let timer = QueryTimer::new("find_property_by_slug");
/// let row = sqlx::query_as::<_, PropertyEntity>(...).fetch_optional(&pool).await;
/// timer.record();
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

    /// Records the elapsed time; consumes the timer so a query is never
    /// recorded twice.
    pub fn record(self) {
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name
        )
        .record(self.start.elapsed().as_secs_f64());
    }
}
