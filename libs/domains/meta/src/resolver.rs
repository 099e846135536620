//! Key ↔ id resolution with an optional read-through cache.
//!
//! Cache layout: `uuid:<key>` → id and `meta:<id>` → key. Writes go to the
//! store first and populate the cache only on success. Deletes invalidate the
//! cache before calling the store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, instrument, warn};

use crate::cache::MappingCache;
use crate::error::{MetaError, MetaResult};
use crate::store::MetaStore;

const UUID_PREFIX: &str = "uuid:";
const META_PREFIX: &str = "meta:";
const MONITOR_BUFFER: usize = 16;

fn uuid_key(key: &str) -> String {
    format!("{UUID_PREFIX}{key}")
}

fn meta_key(id: &str) -> String {
    format!("{META_PREFIX}{id}")
}

pub struct MetaResolver<S: MetaStore> {
    store: Arc<S>,
    cache: Option<Arc<dyn MappingCache>>,
    monitor_interval: Duration,
}

impl<S: MetaStore> MetaResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            cache: None,
            monitor_interval: Duration::from_secs(5),
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn MappingCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_monitor_interval(mut self, interval: Duration) -> Self {
        self.monitor_interval = interval;
        self
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Launch cache eviction and the store connection monitor.
    ///
    /// Monitor failures are reported on the returned channel; both background
    /// tasks stop when `shutdown` flips to `true`.
    pub fn start(&self, shutdown: watch::Receiver<bool>) -> mpsc::Receiver<MetaError> {
        if let Some(cache) = &self.cache {
            cache.start(shutdown.clone());
        }

        let (tx, rx) = mpsc::channel(MONITOR_BUFFER);
        let store = self.store.clone();
        let period = self.monitor_interval;
        let mut shutdown = shutdown;

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if let Err(e) = store.health_check().await {
                            warn!(error = %e, "metadata store health check failed");
                            if tx.try_send(e).is_err() {
                                debug!("monitor error channel full or closed, dropping error");
                            }
                        }
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            break;
                        }
                    }
                }
            }
            debug!("metadata store monitor stopped");
        });

        rx
    }

    fn cache_get(&self, key: &str) -> Option<String> {
        self.cache.as_ref().and_then(|c| c.get(key))
    }

    fn cache_pair(&self, id: &str, key: &str) {
        let Some(cache) = &self.cache else { return };
        for (k, v) in [(uuid_key(key), id), (meta_key(id), key)] {
            if let Err(e) = cache.set(&k, v) {
                warn!(entry = %k, error = %e, "cache population failed");
            }
        }
    }

    fn invalidate_by_key(&self, key: &str) {
        if let Some(cache) = &self.cache {
            if let Some(id) = cache.get_and_delete(&uuid_key(key)) {
                cache.delete(&meta_key(&id));
            }
        }
    }

    fn invalidate_by_id(&self, id: &str) {
        if let Some(cache) = &self.cache {
            if let Some(key) = cache.get_and_delete(&meta_key(id)) {
                cache.delete(&uuid_key(&key));
            }
        }
    }

    /// Whether `key` is mapped. A store `NotFound` is `Ok(false)`.
    #[instrument(skip(self))]
    pub async fn exists(&self, key: &str) -> MetaResult<bool> {
        if self.cache_get(&uuid_key(key)).is_some() {
            return Ok(true);
        }
        match self.store.get_meta_inverse(key.to_string()).await {
            Ok(id) if id.is_empty() => Ok(false),
            Ok(id) => {
                self.cache_pair(&id, key);
                Ok(true)
            }
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => {
                debug!(error = %e, "exists lookup failed");
                Err(e)
            }
        }
    }

    /// key → id
    #[instrument(skip(self))]
    pub async fn get_uuid(&self, key: &str) -> MetaResult<String> {
        if let Some(id) = self.cache_get(&uuid_key(key)) {
            return Ok(id);
        }
        let id = self.store.get_meta_inverse(key.to_string()).await?;
        if id.is_empty() {
            return Err(MetaError::NotFound(key.to_string()));
        }
        self.cache_pair(&id, key);
        Ok(id)
    }

    /// id → key
    #[instrument(skip(self))]
    pub async fn get_meta(&self, id: &str) -> MetaResult<String> {
        if let Some(key) = self.cache_get(&meta_key(id)) {
            return Ok(key);
        }
        let key = self.store.get_meta(id.to_string()).await?;
        if key.is_empty() {
            return Err(MetaError::NotFound(id.to_string()));
        }
        self.cache_pair(id, &key);
        Ok(key)
    }

    /// keys → ids, positionally aligned; unmapped keys yield `""`.
    ///
    /// The cache only answers when every key hits; otherwise the whole batch
    /// goes to the store.
    #[instrument(skip_all, fields(count = keys.len()))]
    pub async fn get_uuids(&self, keys: &[String]) -> MetaResult<Vec<String>> {
        if let Some(ids) = self.all_cached(keys, uuid_key) {
            return Ok(ids);
        }
        let ids = self.store.get_metas_inverse(keys.to_vec()).await?;
        for (key, id) in keys.iter().zip(&ids) {
            if !id.is_empty() {
                self.cache_pair(id, key);
            }
        }
        Ok(ids)
    }

    /// ids → keys, positionally aligned; unmapped ids yield `""`.
    #[instrument(skip_all, fields(count = ids.len()))]
    pub async fn get_metas(&self, ids: &[String]) -> MetaResult<Vec<String>> {
        if let Some(keys) = self.all_cached(ids, meta_key) {
            return Ok(keys);
        }
        let keys = self.store.get_metas(ids.to_vec()).await?;
        for (id, key) in ids.iter().zip(&keys) {
            if !key.is_empty() {
                self.cache_pair(id, key);
            }
        }
        Ok(keys)
    }

    fn all_cached(&self, items: &[String], cache_key: fn(&str) -> String) -> Option<Vec<String>> {
        let cache = self.cache.as_ref()?;
        items.iter().map(|item| cache.get(&cache_key(item))).collect()
    }

    #[instrument(skip(self))]
    pub async fn set_uuid_and_meta(&self, id: &str, key: &str) -> MetaResult<()> {
        self.store.set_meta(id.to_string(), key.to_string()).await?;
        self.cache_pair(id, key);
        Ok(())
    }

    /// Store `(id, key)` pairs in one batch.
    #[instrument(skip_all, fields(count = pairs.len()))]
    pub async fn set_uuid_and_metas(&self, pairs: &[(String, String)]) -> MetaResult<()> {
        self.store.set_metas(pairs.to_vec()).await?;
        for (id, key) in pairs {
            self.cache_pair(id, key);
        }
        Ok(())
    }

    /// Delete by id, returning the key it mapped to.
    #[instrument(skip(self))]
    pub async fn delete_meta(&self, id: &str) -> MetaResult<String> {
        self.invalidate_by_id(id);
        let key = self.store.delete_meta(id.to_string()).await?;
        self.invalidate_by_key(&key);
        Ok(key)
    }

    #[instrument(skip_all, fields(count = ids.len()))]
    pub async fn delete_metas(&self, ids: &[String]) -> MetaResult<Vec<String>> {
        ids.iter().for_each(|id| self.invalidate_by_id(id));
        let keys = self.store.delete_metas(ids.to_vec()).await?;
        keys.iter().for_each(|key| self.invalidate_by_key(key));
        Ok(keys)
    }

    /// Delete by key, returning the id it mapped to.
    #[instrument(skip(self))]
    pub async fn delete_uuid(&self, key: &str) -> MetaResult<String> {
        self.invalidate_by_key(key);
        let id = self.store.delete_meta_inverse(key.to_string()).await?;
        self.invalidate_by_id(&id);
        Ok(id)
    }

    #[instrument(skip_all, fields(count = keys.len()))]
    pub async fn delete_uuids(&self, keys: &[String]) -> MetaResult<Vec<String>> {
        keys.iter().for_each(|key| self.invalidate_by_key(key));
        let ids = self.store.delete_metas_inverse(keys.to_vec()).await?;
        ids.iter().for_each(|id| self.invalidate_by_id(id));
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheConfig, TtlCache};
    use crate::store::MockMetaStore;
    use mockall::predicate::eq;

    fn cached(store: MockMetaStore) -> (MetaResolver<MockMetaStore>, Arc<TtlCache>) {
        let cache = Arc::new(TtlCache::new(CacheConfig::default()));
        let resolver = MetaResolver::new(store).with_cache(cache.clone());
        (resolver, cache)
    }

    #[tokio::test]
    async fn test_exists_treats_not_found_as_absent() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .with(eq("k1".to_string()))
            .times(1)
            .returning(|k| Err(MetaError::NotFound(k)));

        let resolver = MetaResolver::new(store);
        assert!(!resolver.exists("k1").await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_propagates_other_errors() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .returning(|_| Err(MetaError::Rpc(tonic::Status::unavailable("down"))));

        let resolver = MetaResolver::new(store);
        let err = resolver.exists("k1").await.unwrap_err();
        assert_eq!(err.code(), tonic::Code::Unavailable);
    }

    #[tokio::test]
    async fn test_cache_hit_skips_store() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .with(eq("k1".to_string()))
            .times(1)
            .returning(|_| Ok("id-1".to_string()));
        store.expect_get_meta().never();

        let (resolver, _cache) = cached(store);
        assert_eq!(resolver.get_uuid("k1").await.unwrap(), "id-1");
        // both directions are now cached
        assert_eq!(resolver.get_uuid("k1").await.unwrap(), "id-1");
        assert!(resolver.exists("k1").await.unwrap());
        assert_eq!(resolver.get_meta("id-1").await.unwrap(), "k1");
    }

    #[tokio::test]
    async fn test_no_cache_always_hits_store() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta()
            .times(2)
            .returning(|_| Ok("k1".to_string()));

        let resolver = MetaResolver::new(store);
        assert!(!resolver.cache_enabled());
        resolver.get_meta("id-1").await.unwrap();
        resolver.get_meta("id-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_batch_cache_is_all_or_nothing() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas()
            .with(eq(vec!["id-1".to_string(), "id-2".to_string()]))
            .times(1)
            .returning(|_| Ok(vec!["k1".to_string(), String::new()]));

        let (resolver, cache) = cached(store);
        cache.set("meta:id-1", "k1").unwrap();

        let ids = vec!["id-1".to_string(), "id-2".to_string()];
        let keys = resolver.get_metas(&ids).await.unwrap();
        assert_eq!(keys, vec!["k1".to_string(), String::new()]);
        // the empty slot was not cached
        assert!(cache.get("meta:id-2").is_none());
    }

    #[tokio::test]
    async fn test_batch_fully_cached() {
        let mut store = MockMetaStore::new();
        store.expect_get_metas_inverse().never();

        let (resolver, cache) = cached(store);
        cache.set("uuid:k1", "id-1").unwrap();
        cache.set("uuid:k2", "id-2").unwrap();

        let ids = resolver
            .get_uuids(&["k1".to_string(), "k2".to_string()])
            .await
            .unwrap();
        assert_eq!(ids, vec!["id-1".to_string(), "id-2".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_write_leaves_cache_untouched() {
        let mut store = MockMetaStore::new();
        store
            .expect_set_meta()
            .returning(|_, _| Err(MetaError::Rpc(tonic::Status::unavailable("down"))));

        let (resolver, cache) = cached(store);
        assert!(resolver.set_uuid_and_meta("id-1", "k1").await.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_write_populates_both_directions() {
        let mut store = MockMetaStore::new();
        store
            .expect_set_metas()
            .with(eq(vec![("id-1".to_string(), "k1".to_string())]))
            .times(1)
            .returning(|_| Ok(()));

        let (resolver, cache) = cached(store);
        resolver
            .set_uuid_and_metas(&[("id-1".to_string(), "k1".to_string())])
            .await
            .unwrap();
        assert_eq!(cache.get("uuid:k1").as_deref(), Some("id-1"));
        assert_eq!(cache.get("meta:id-1").as_deref(), Some("k1"));
    }

    #[tokio::test]
    async fn test_delete_invalidates_before_store_call() {
        let mut store = MockMetaStore::new();
        store
            .expect_delete_meta()
            .with(eq("id-1".to_string()))
            .times(1)
            .returning(|_| Err(MetaError::Rpc(tonic::Status::unavailable("down"))));

        let (resolver, cache) = cached(store);
        cache.set("uuid:k1", "id-1").unwrap();
        cache.set("meta:id-1", "k1").unwrap();

        assert!(resolver.delete_meta("id-1").await.is_err());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_delete_uuid_returns_id() {
        let mut store = MockMetaStore::new();
        store
            .expect_delete_meta_inverse()
            .with(eq("k1".to_string()))
            .returning(|_| Ok("id-1".to_string()));

        let (resolver, cache) = cached(store);
        cache.set("meta:id-1", "k1").unwrap();

        assert_eq!(resolver.delete_uuid("k1").await.unwrap(), "id-1");
        assert!(cache.get("meta:id-1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_monitor_reports_health_failures() {
        let mut store = MockMetaStore::new();
        store
            .expect_health_check()
            .returning(|| Err(MetaError::Rpc(tonic::Status::unavailable("down"))));

        let resolver = MetaResolver::new(store).with_monitor_interval(Duration::from_secs(1));
        let (tx, rx) = watch::channel(false);
        let mut errors = resolver.start(rx);

        let err = errors.recv().await.unwrap();
        assert_eq!(err.code(), tonic::Code::Unavailable);

        tx.send(true).unwrap();
    }
}
