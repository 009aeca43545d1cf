// src/cache.rs
//! Caller-owned TTL cache for dataset loads.
//!
//! Explicit keys and an injected clock; nothing process-global. The cache
//! stores the loaded posting set per key and re-runs the loader only after
//! the entry's TTL has elapsed or the key was invalidated.

use crate::provider::ProviderError;
use crate::types::JobPosting;
use std::collections::HashMap;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{debug, info};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct Entry {
    postings: Vec<JobPosting>,
    expires_at: Instant,
}

pub struct DatasetCache<C: Clock = SystemClock> {
    clock: C,
    entries: HashMap<String, Entry>,
}

impl DatasetCache<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for DatasetCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> DatasetCache<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            entries: HashMap::new(),
        }
    }

    /// Return the cached postings for `key`, running `loader` on a miss or
    /// an expired entry. Loader failures are propagated and nothing is cached.
    pub async fn get_or_load<F, Fut>(
        &mut self,
        key: &str,
        ttl: Duration,
        loader: F,
    ) -> Result<Vec<JobPosting>, ProviderError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<JobPosting>, ProviderError>>,
    {
        let now = self.clock.now();
        if let Some(entry) = self.entries.get(key) {
            if now < entry.expires_at {
                debug!("Dataset cache hit for key '{}'", key);
                return Ok(entry.postings.clone());
            }
            debug!("Dataset cache entry for key '{}' expired", key);
        }

        let postings = loader().await?;
        info!("Dataset cache loaded {} postings for key '{}'", postings.len(), key);
        self.entries.insert(
            key.to_string(),
            Entry {
                postings: postings.clone(),
                expires_at: now + ttl,
            },
        );
        Ok(postings)
    }

    pub fn invalidate(&mut self, key: &str) {
        self.entries.remove(key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JobCategory;
    use chrono::Utc;
    use std::cell::Cell;

    /// Manually advanced clock for TTL tests.
    struct ManualClock {
        start: Instant,
        offset: Cell<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                start: Instant::now(),
                offset: Cell::new(Duration::ZERO),
            }
        }

        fn advance(&self, by: Duration) {
            self.offset.set(self.offset.get() + by);
        }
    }

    impl Clock for &ManualClock {
        fn now(&self) -> Instant {
            self.start + self.offset.get()
        }
    }

    fn sample_posting(id: i64) -> JobPosting {
        JobPosting {
            id,
            category: JobCategory::Developer,
            region: None,
            company_name: "Acme".into(),
            title: "Engineer".into(),
            status_code: None,
            is_partner: false,
            join_reward: 0,
            skill_keywords: None,
            job_level: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_second_get_within_ttl_does_not_reload() {
        let clock = ManualClock::new();
        let mut cache = DatasetCache::with_clock(&clock);
        let mut loads = 0;

        for _ in 0..3 {
            let result = cache
                .get_or_load("jobs", Duration::from_secs(60), || {
                    loads += 1;
                    async { Ok(vec![sample_posting(1)]) }
                })
                .await
                .unwrap();
            assert_eq!(result.len(), 1);
        }
        assert_eq!(loads, 1);
    }

    #[tokio::test]
    async fn test_expired_entry_reloads() {
        let clock = ManualClock::new();
        let mut cache = DatasetCache::with_clock(&clock);
        let mut loads = 0;

        cache
            .get_or_load("jobs", Duration::from_secs(60), || {
                loads += 1;
                async { Ok(vec![sample_posting(1)]) }
            })
            .await
            .unwrap();

        clock.advance(Duration::from_secs(61));

        cache
            .get_or_load("jobs", Duration::from_secs(60), || {
                loads += 1;
                async { Ok(vec![sample_posting(2)]) }
            })
            .await
            .unwrap();
        assert_eq!(loads, 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let clock = ManualClock::new();
        let mut cache = DatasetCache::with_clock(&clock);
        let mut loads = 0;

        for _ in 0..2 {
            cache
                .get_or_load("jobs", Duration::from_secs(60), || {
                    loads += 1;
                    async { Ok(vec![sample_posting(1)]) }
                })
                .await
                .unwrap();
            cache.invalidate("jobs");
        }
        assert_eq!(loads, 2);
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let clock = ManualClock::new();
        let mut cache = DatasetCache::with_clock(&clock);

        let a = cache
            .get_or_load("a", Duration::from_secs(60), || async {
                Ok(vec![sample_posting(1)])
            })
            .await
            .unwrap();
        let b = cache
            .get_or_load("b", Duration::from_secs(60), || async {
                Ok(vec![sample_posting(2), sample_posting(3)])
            })
            .await
            .unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
    }

    #[tokio::test]
    async fn test_loader_failure_is_not_cached() {
        let clock = ManualClock::new();
        let mut cache = DatasetCache::with_clock(&clock);

        let err = cache
            .get_or_load("jobs", Duration::from_secs(60), || async {
                Err(ProviderError::Unavailable("db down".into()))
            })
            .await;
        assert!(err.is_err());

        let ok = cache
            .get_or_load("jobs", Duration::from_secs(60), || async {
                Ok(vec![sample_posting(1)])
            })
            .await
            .unwrap();
        assert_eq!(ok.len(), 1);
    }
}
