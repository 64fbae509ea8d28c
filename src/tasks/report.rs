//! Stats Reporter Task
//!
//! Background task that periodically logs cache statistics.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{CacheStats, SharedCache};

/// Spawns a background task that logs cache statistics at a fixed interval.
///
/// The task runs until aborted. Each report takes the cache lock once to
/// snapshot the counters. Reports are skipped at `info` level when nothing
/// changed since the previous one.
///
/// # Arguments
/// * `cache` - Shared handle to the cache being observed
/// * `interval_secs` - Interval in seconds between reports
///
/// # Example
/// ```ignore
/// let cache = CacheBuilder::new().capacity(100).build_shared()?;
/// let reporter = spawn_stats_reporter(cache.clone(), 1);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(cache: SharedCache, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        let mut last: Option<CacheStats> = None;
        loop {
            tokio::time::sleep(interval).await;

            match changed_stats(&cache, &mut last) {
                Some(stats) => info!(
                    entries = stats.total_entries,
                    capacity = stats.capacity,
                    hits = stats.hits,
                    misses = stats.misses,
                    evictions = stats.evictions,
                    hit_rate = stats.hit_rate(),
                    "Cache stats"
                ),
                None => debug!("Stats unchanged since last report"),
            }
        }
    })
}

/// Snapshots the counters, returning them only if they differ from `last`.
///
/// `last` is updated whenever a new snapshot is returned.
fn changed_stats(cache: &SharedCache, last: &mut Option<CacheStats>) -> Option<CacheStats> {
    let stats = cache.stats();
    if last.as_ref() == Some(&stats) {
        return None;
    }
    *last = Some(stats.clone());
    Some(stats)
}
