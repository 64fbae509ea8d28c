//! FIFO Cache - demo binary
//!
//! Builds a shared cache from the environment and walks through its
//! behavior: eviction order, removal, duplication, factory creation and
//! concurrent writers.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fifo_cache::{
    spawn_stats_reporter, CacheBuilder, CacheFactory, Config, FifoCacheFactory, SharedCache,
};

const WRITER_TASKS: usize = 4;
const WRITES_PER_TASK: i64 = 250;

/// Main entry point for the FIFO cache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build one shared cache and hand clones of the handle to consumers
/// 4. Start background stats reporter
/// 5. Run the walk-through and the concurrent writers
/// 6. Print final stats as JSON
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fifo_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting FIFO cache demo");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: capacity={}, policy={}, stats_interval={}s",
        config.capacity, config.eviction_policy, config.stats_interval
    );

    let cache = CacheBuilder::from_config(&config)
        .build_shared()
        .context("failed to build cache")?;

    let reporter = spawn_stats_reporter(cache.clone(), config.stats_interval);

    walkthrough(&cache);
    independent_copy(&cache);
    factory_cache()?;
    concurrent_writers(&cache).await?;

    reporter.abort();

    let stats = serde_json::to_string_pretty(&cache.stats())?;
    println!("{}", stats);

    info!("Demo complete");
    Ok(())
}

/// Fill, evict, remove and refill the shared cache.
fn walkthrough(cache: &SharedCache) {
    for (key, value) in [("a", 1), ("b", 2), ("c", 3)] {
        cache.put(key, value);
    }
    info!("get(a) = {:?}", cache.get("a"));

    if let Some((key, value)) = cache.insert("d", 4) {
        info!("put(d) evicted {}={}", key, value);
    }
    info!("get(a) = {:?}", cache.get("a"));
    info!("get(b) = {:?}", cache.get("b"));

    cache.remove("b");
    info!("after remove(b): get(b) = {:?}, size = {}", cache.get("b"), cache.size());

    cache.put("e", 5);
    info!("after put(e): size = {}, keys = {:?}", cache.size(), cache.keys());
}

/// An independent copy diverges from the original.
fn independent_copy(cache: &SharedCache) {
    let copy = cache.duplicate();
    copy.put("f", 6);

    info!(
        "copy: get(f) = {:?}, original: get(f) = {:?}",
        copy.get("f"),
        cache.get("f")
    );
}

fn factory_cache() -> anyhow::Result<()> {
    let factory = FifoCacheFactory::new(3);
    let mut cache = factory
        .create_cache()
        .context("factory failed to create cache")?;

    cache.put("x", 10);
    info!("factory cache: get(x) = {:?}", cache.get("x"));
    Ok(())
}

/// Several tasks write through clones of the same handle.
async fn concurrent_writers(cache: &SharedCache) -> anyhow::Result<()> {
    let handles: Vec<_> = (0..WRITER_TASKS)
        .map(|task| {
            let cache = cache.clone();
            tokio::spawn(async move {
                for i in 0..WRITES_PER_TASK {
                    cache.put(format!("w{}-{}", task, i), i);
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for handle in handles {
        handle.await.context("writer task panicked")?;
    }

    info!(
        "Concurrent writers finished: size = {}/{}",
        cache.size(),
        cache.capacity()
    );
    Ok(())
}
