//! In-process mapping cache with per-entry expiry.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, trace};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache is full ({capacity} entries)")]
    Full { capacity: usize },
}

/// Key/value cache in front of the metadata store.
///
/// Implementations must be safe to share across tasks. Expired entries are
/// never returned.
pub trait MappingCache: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove an entry, returning its value if it was live.
    fn get_and_delete(&self, key: &str) -> Option<String>;

    fn delete(&self, key: &str);

    /// Spawn background eviction; the task exits when `shutdown` flips to `true`
    /// or its sender is dropped.
    fn start(&self, shutdown: watch::Receiver<bool>) -> JoinHandle<()>;
}

#[derive(Clone, Debug)]
pub struct CacheConfig {
    pub expire_duration: Duration,
    pub expire_check_duration: Duration,
    pub max_entries: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            expire_duration: Duration::from_secs(600),
            expire_check_duration: Duration::from_secs(60),
            max_entries: None,
        }
    }
}

#[derive(Debug)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// [`MappingCache`] backed by a sharded concurrent map.
#[derive(Clone, Debug)]
pub struct TtlCache {
    entries: Arc<DashMap<String, Entry>>,
    config: CacheConfig,
}

impl TtlCache {
    pub fn new(config: CacheConfig) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            config,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_expired(entries: &DashMap<String, Entry>) -> usize {
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| entry.is_live(now));
        before.saturating_sub(entries.len())
    }
}

impl MappingCache for TtlCache {
    fn get(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(now) {
                return Some(entry.value.clone());
            }
        }
        self.entries.remove_if(key, |_, entry| !entry.is_live(now));
        None
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        if let Some(capacity) = self.config.max_entries {
            if self.entries.len() >= capacity && !self.entries.contains_key(key) {
                return Err(CacheError::Full { capacity });
            }
        }
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Instant::now() + self.config.expire_duration,
            },
        );
        Ok(())
    }

    fn get_and_delete(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.entries
            .remove(key)
            .and_then(|(_, entry)| entry.is_live(now).then_some(entry.value))
    }

    fn delete(&self, key: &str) {
        self.entries.remove(key);
    }

    fn start(&self, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        let entries = self.entries.clone();
        let period = self.config.expire_check_duration;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            debug!(?period, "cache eviction started");

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let evicted = TtlCache::evict_expired(&entries);
                        if evicted > 0 {
                            trace!(evicted, remaining = entries.len(), "evicted expired cache entries");
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }

            debug!("cache eviction stopped");
        })
    }
}
