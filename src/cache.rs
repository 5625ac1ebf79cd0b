//! Time-bounded memoization of latest-version lookups with bounded retries.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::errors::RegistryError;
use crate::net::RegistryClient;

/// A resolved version and the moment it was captured.
struct CacheEntry {
    /// Version string as resolved from the registry.
    version: String,
    /// Capture time; the entry is valid while younger than the TTL.
    captured: Instant,
}

/// Memoization layer in front of [`RegistryClient`], keyed by package name.
///
/// Entries are replaced, never merged, and stale entries are ignored rather
/// than evicted; the map lives for one interactive session. Concurrent
/// lookups for the same name are NOT deduplicated: two simultaneous callers
/// may both miss and both fetch. The inner mutex is held only across map
/// access, never across a network await, which is what keeps that property.
pub struct VersionCache {
    /// Maximum age at which a cached value is still served.
    ttl: Duration,
    /// Total attempts per resolution (first try included).
    attempts: u32,
    /// Backoff unit; the sleep after failed attempt `i` is `base_delay * i`.
    base_delay: Duration,
    /// Name → entry map behind an async mutex.
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl VersionCache {
    /// Build a cache with the given TTL and retry policy.
    pub fn new(ttl: Duration, attempts: u32, base_delay: Duration) -> Self {
        Self {
            ttl,
            attempts,
            base_delay,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// What: Resolve `name`, serving from cache when fresh.
    ///
    /// Inputs:
    /// - `registry`: client used on a cache miss
    /// - `name`: package to resolve
    ///
    /// Output:
    /// - The cached version when a non-expired entry exists (no network
    ///   call); otherwise the result of a bounded retry loop around the
    ///   registry, stored before returning. The final failed attempt's error
    ///   propagates unchanged.
    pub async fn latest(
        &self,
        registry: &RegistryClient,
        name: &str,
    ) -> Result<String, RegistryError> {
        self.latest_with(name, || registry.fetch_latest_version(name))
            .await
    }

    /// Cache-or-retry core with an injectable fetch, the seam the clock and
    /// retry tests drive without a network.
    async fn latest_with<F, Fut>(&self, name: &str, fetch: F) -> Result<String, RegistryError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, RegistryError>>,
    {
        if let Some(hit) = self.lookup(name).await {
            tracing::trace!(package = name, "[Cache] Hit");
            return Ok(hit);
        }
        let version = retry_with_backoff(self.attempts, self.base_delay, fetch).await?;
        self.store(name, &version).await;
        Ok(version)
    }

    /// Discard all entries unconditionally.
    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    /// Fresh cached version for `name`, if any. Stale entries stay in place.
    async fn lookup(&self, name: &str) -> Option<String> {
        let entries = self.entries.lock().await;
        entries
            .get(name)
            .and_then(|e| (e.captured.elapsed() < self.ttl).then(|| e.version.clone()))
    }

    /// Store or overwrite the entry for `name` with the current timestamp.
    async fn store(&self, name: &str, version: &str) {
        let mut entries = self.entries.lock().await;
        entries.insert(
            name.to_string(),
            CacheEntry {
                version: version.to_string(),
                captured: Instant::now(),
            },
        );
    }
}

/// What: Run `op` up to `attempts` times with linearly growing backoff.
///
/// Inputs:
/// - `attempts`: total tries; values below 1 still try once
/// - `base_delay`: sleep after failed attempt `i` is `base_delay * i`
/// - `op`: the fallible lookup
///
/// Output:
/// - The first success, or the last attempt's error unchanged.
async fn retry_with_backoff<F, Fut>(
    attempts: u32,
    base_delay: Duration,
    mut op: F,
) -> Result<String, RegistryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, RegistryError>>,
{
    let mut attempt: u32 = 1;
    loop {
        match op().await {
            Ok(version) => return Ok(version),
            Err(e) if attempt < attempts => {
                tracing::debug!(attempt, error = %e, "[Cache] Lookup failed, backing off");
                tokio::time::sleep(base_delay * attempt).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TTL: Duration = Duration::from_secs(3600);
    const BASE: Duration = Duration::from_millis(1000);

    /// A fresh entry is served without calling the resolver again.
    #[tokio::test(start_paused = true)]
    async fn hit_within_ttl_skips_resolver() {
        let cache = VersionCache::new(TTL, 3, BASE);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        let first = cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("1.0.0".to_string()) }
            })
            .await
            .unwrap();
        tokio::time::advance(TTL - Duration::from_secs(1)).await;
        let c = Arc::clone(&calls);
        let second = cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("2.0.0".to_string()) }
            })
            .await
            .unwrap();

        assert_eq!(first, "1.0.0");
        assert_eq!(second, "1.0.0");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    /// Past the TTL, exactly one fresh resolution sequence runs and the
    /// entry is replaced.
    #[tokio::test(start_paused = true)]
    async fn expired_entry_triggers_one_fresh_lookup() {
        let cache = VersionCache::new(TTL, 3, BASE);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("1.0.0".to_string()) }
            })
            .await
            .unwrap();
        tokio::time::advance(TTL + Duration::from_millis(1)).await;
        let c = Arc::clone(&calls);
        let refreshed = cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("1.1.0".to_string()) }
            })
            .await
            .unwrap();

        assert_eq!(refreshed, "1.1.0");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    /// Fail, fail, succeed: the value arrives after exactly three attempts
    /// and at least `base * 1 + base * 2` of backoff.
    #[tokio::test(start_paused = true)]
    async fn retry_succeeds_on_third_attempt_after_backoff() {
        let cache = VersionCache::new(TTL, 3, BASE);
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_in = Arc::clone(&calls);

        let started = Instant::now();
        let version = cache
            .latest_with("pkg", move || {
                let n = calls_in.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n < 2 {
                        Err(RegistryError::Timeout("pkg".to_string()))
                    } else {
                        Ok("3.0.0".to_string())
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(version, "3.0.0");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(started.elapsed() >= BASE + BASE * 2);
    }

    /// When every attempt fails, the last error propagates unchanged.
    #[tokio::test(start_paused = true)]
    async fn exhausted_retries_propagate_the_last_error() {
        let cache = VersionCache::new(TTL, 3, BASE);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        let err = cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Err::<String, _>(RegistryError::Timeout("pkg".to_string())) }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, RegistryError::Timeout(name) if name == "pkg"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    /// Two concurrent misses for the same name both hit the resolver; the
    /// cache does not deduplicate in-flight lookups.
    #[tokio::test(start_paused = true)]
    async fn concurrent_misses_are_not_deduplicated() {
        let cache = VersionCache::new(TTL, 1, BASE);
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_fetch = || {
            let calls = Arc::clone(&calls);
            move || {
                calls.fetch_add(1, Ordering::SeqCst);
                async {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok::<String, RegistryError>("1.0.0".to_string())
                }
            }
        };
        let (a, b) = tokio::join!(
            cache.latest_with("pkg", slow_fetch()),
            cache.latest_with("pkg", slow_fetch()),
        );

        assert_eq!(a.unwrap(), "1.0.0");
        assert_eq!(b.unwrap(), "1.0.0");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    /// Clearing drops every entry, forcing a refetch.
    #[tokio::test(start_paused = true)]
    async fn clear_discards_all_entries() {
        let cache = VersionCache::new(TTL, 1, BASE);
        let calls = Arc::new(AtomicUsize::new(0));

        let c = Arc::clone(&calls);
        cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("1.0.0".to_string()) }
            })
            .await
            .unwrap();
        cache.clear().await;
        let c = Arc::clone(&calls);
        cache
            .latest_with("pkg", move || {
                c.fetch_add(1, Ordering::SeqCst);
                async { Ok("1.0.1".to_string()) }
            })
            .await
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
