use std::collections::HashSet;
use std::sync::Arc;

use rpc::payload::v1::{insert, object, remove, search, update, upsert};
use tracing::{Span, debug, instrument, warn};
use uuid::Uuid;

use crate::backend::VectorBackend;
use crate::config::DimensionBounds;
use crate::error::{MetaError, MetaResult};
use crate::fanout::{Partial, fan_out};
use crate::location::restore_order;
use crate::resolver::MetaResolver;
use crate::saga::Saga;
use crate::store::MetaStore;

/// Public request handling: translates caller keys to internal ids on the
/// way in, forwards to the vector backend, and translates ids back to keys on
/// the way out.
pub struct MetaGateway<B: VectorBackend, S: MetaStore> {
    backend: Arc<B>,
    resolver: Arc<MetaResolver<S>>,
    dimensions: DimensionBounds,
}

impl<B: VectorBackend, S: MetaStore> Clone for MetaGateway<B, S> {
    fn clone(&self) -> Self {
        Self {
            backend: self.backend.clone(),
            resolver: self.resolver.clone(),
            dimensions: self.dimensions.clone(),
        }
    }
}

fn remove_request(id: String) -> remove::Request {
    remove::Request {
        id: Some(object::Id { id }),
        config: None,
    }
}

fn missing_vector(api: &'static str) -> MetaError {
    MetaError::InvalidArgument(format!("{api} request carries no vector"))
}

/// A failed key lookup: absent keys are `NotFound`, store failures `Internal`.
#[track_caller]
fn resolve_error(api: &'static str, key: &str, source: MetaError) -> MetaError {
    if source.is_not_found() {
        MetaError::not_found(api, format!("key={key}"), source)
    } else {
        MetaError::internal(api, format!("key={key}"), source)
    }
}

/// Every key must have resolved to a non-empty id.
#[track_caller]
fn ensure_resolved(api: &'static str, keys: &[String], ids: &[String]) -> MetaResult<()> {
    if keys.len() != ids.len() {
        return Err(MetaError::internal(
            api,
            format!("keys={}", keys.len()),
            MetaError::Internal(format!(
                "metadata store answered {} ids for {} keys",
                ids.len(),
                keys.len()
            )),
        ));
    }
    let missing: Vec<MetaError> = keys
        .iter()
        .zip(ids)
        .filter(|(_, id)| id.is_empty())
        .map(|(key, _)| MetaError::NotFound(key.clone()))
        .collect();
    let unresolved = missing.len();
    match MetaError::chain(missing) {
        None => Ok(()),
        Some(source) => Err(MetaError::not_found(
            api,
            format!("unresolved={unresolved}"),
            source,
        )),
    }
}

fn upsert_as_insert(req: upsert::Request) -> insert::Request {
    let config = req.config.unwrap_or_default();
    insert::Request {
        vector: req.vector,
        config: Some(insert::Config {
            skip_strict_exist_check: true,
            filters: config.filters,
            timestamp: config.timestamp,
        }),
    }
}

fn upsert_as_update(req: upsert::Request) -> update::Request {
    let config = req.config.unwrap_or_default();
    update::Request {
        vector: req.vector,
        config: Some(update::Config {
            skip_strict_exist_check: true,
            filters: config.filters,
            timestamp: config.timestamp,
        }),
    }
}

impl<B: VectorBackend, S: MetaStore> MetaGateway<B, S> {
    pub fn new(backend: B, resolver: MetaResolver<S>) -> Self {
        Self {
            backend: Arc::new(backend),
            resolver: Arc::new(resolver),
            dimensions: DimensionBounds::default(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: DimensionBounds) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn resolver(&self) -> &MetaResolver<S> {
        &self.resolver
    }

    #[track_caller]
    fn validate(&self, api: &'static str, key: &str, vector: &[f32]) -> MetaResult<()> {
        if key.is_empty() {
            return Err(MetaError::InvalidArgument(format!("{api}: vector id is empty")));
        }
        self.dimensions.check(api, vector)
    }

    async fn ensure_absent(&self, api: &'static str, key: &str) -> MetaResult<()> {
        match self.resolver.exists(key).await {
            Ok(false) => Ok(()),
            Ok(true) => Err(MetaError::already_exists(api, key)),
            Err(e) => Err(MetaError::internal(api, format!("key={key}"), e)),
        }
    }

    /// Existence for upsert routing; a failed lookup routes to insert.
    async fn key_exists(&self, api: &'static str, key: &str) -> bool {
        match self.resolver.exists(key).await {
            Ok(exists) => exists,
            Err(e) => {
                debug!(api, key, error = %e, "existence check failed, treating key as absent");
                false
            }
        }
    }

    /// Replace internal ids in search results with caller keys. Rows whose id
    /// has no mapping keep the internal id.
    async fn remap(&self, mut res: search::Response) -> search::Response {
        if res.results.is_empty() {
            return res;
        }
        let ids: Vec<String> = res.results.iter().map(|d| d.id.clone()).collect();
        match self.resolver.get_metas(&ids).await {
            Ok(keys) => {
                for (distance, key) in res.results.iter_mut().zip(keys) {
                    if !key.is_empty() {
                        distance.id = key;
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, count = ids.len(), "reverse lookup failed, returning internal ids")
            }
        }
        res
    }

    #[instrument(skip_all, fields(key = %req.id))]
    pub async fn exists(&self, req: object::Id) -> MetaResult<object::Id> {
        let key = req.id;
        match self.resolver.exists(&key).await {
            Ok(true) => Ok(object::Id { id: key }),
            Ok(false) => Err(MetaError::not_found(
                "Exists",
                format!("key={key}"),
                MetaError::NotFound(key),
            )),
            Err(e) => {
                debug!(error = %e, "exists check failed");
                Err(MetaError::not_found("Exists", format!("key={key}"), e))
            }
        }
    }

    #[instrument(skip_all, fields(dim = req.vector.len()))]
    pub async fn search(&self, req: search::Request) -> MetaResult<search::Response> {
        self.dimensions.check("Search", &req.vector)?;
        let res = self
            .backend
            .search(req)
            .await
            .map_err(|e| MetaError::backend("Search", "", e))?;
        Ok(self.remap(res).await)
    }

    #[instrument(skip_all, fields(key = %req.id))]
    pub async fn search_by_id(&self, req: search::IdRequest) -> MetaResult<search::Response> {
        let key = req.id.clone();
        let id = self
            .resolver
            .get_uuid(&key)
            .await
            .map_err(|e| MetaError::not_found("SearchByID", format!("key={key}"), e))?;
        let res = self
            .backend
            .search_by_id(search::IdRequest { id, ..req })
            .await
            .map_err(|e| MetaError::backend("SearchByID", format!("key={key}"), e))?;
        Ok(self.remap(res).await)
    }

    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_search(&self, req: search::MultiRequest) -> Partial<search::Responses> {
        fan_out(req.requests, |r| {
            let this = self.clone();
            async move { this.search(r).await }
        })
        .await
        .map(|responses| search::Responses { responses })
    }

    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_search_by_id(
        &self,
        req: search::MultiIdRequest,
    ) -> Partial<search::Responses> {
        fan_out(req.requests, |r| {
            let this = self.clone();
            async move { this.search_by_id(r).await }
        })
        .await
        .map(|responses| search::Responses { responses })
    }

    #[instrument(skip_all, fields(key, id))]
    pub async fn insert(&self, mut req: insert::Request) -> MetaResult<object::Location> {
        let api = "Insert";
        let skip_check = req
            .config
            .as_ref()
            .is_some_and(|c| c.skip_strict_exist_check);
        let vector = req.vector.as_mut().ok_or_else(|| missing_vector(api))?;
        let key = vector.id.clone();
        Span::current().record("key", key.as_str());
        self.validate(api, &key, &vector.vector)?;

        if !skip_check {
            self.ensure_absent(api, &key).await?;
        }

        let id = Uuid::new_v4().to_string();
        Span::current().record("id", id.as_str());
        vector.id = id.clone();

        let location = self
            .backend
            .insert(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("key={key}, id={id}"), e))?;

        let mut saga = Saga::new(api);
        let backend = self.backend.clone();
        let undo_id = id.clone();
        saga.on_rollback(format!("remove {id}"), async move {
            backend.remove(remove_request(undo_id)).await.map(|_| ())
        });

        if let Err(e) = self.resolver.set_uuid_and_meta(&id, &key).await {
            let cause = MetaError::internal(api, format!("key={key}, id={id}"), e);
            return Err(saga.rollback(cause).await);
        }
        Ok(location)
    }

    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_insert(&self, mut req: insert::MultiRequest) -> MetaResult<object::Locations> {
        let api = "MultiInsert";
        let mut seen = HashSet::with_capacity(req.requests.len());
        let mut pairs = Vec::with_capacity(req.requests.len());

        for r in req.requests.iter_mut() {
            let skip_check = r.config.as_ref().is_some_and(|c| c.skip_strict_exist_check);
            let vector = r.vector.as_mut().ok_or_else(|| missing_vector(api))?;
            let key = vector.id.clone();
            self.validate(api, &key, &vector.vector)?;
            if !seen.insert(key.clone()) {
                return Err(MetaError::already_exists(api, key));
            }
            if !skip_check {
                self.ensure_absent(api, &key).await?;
            }
            let id = Uuid::new_v4().to_string();
            vector.id = id.clone();
            pairs.push((id, key));
        }

        let locations = self
            .backend
            .multi_insert(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("count={}", pairs.len()), e))?;

        let mut saga = Saga::new(api);
        let backend = self.backend.clone();
        let undo = remove::MultiRequest {
            requests: pairs.iter().map(|(id, _)| remove_request(id.clone())).collect(),
        };
        saga.on_rollback(format!("remove {} ids", pairs.len()), async move {
            backend.multi_remove(undo).await.map(|_| ())
        });

        if let Err(e) = self.resolver.set_uuid_and_metas(&pairs).await {
            let cause = MetaError::internal(api, format!("count={}", pairs.len()), e);
            return Err(saga.rollback(cause).await);
        }
        Ok(locations)
    }

    #[instrument(skip_all, fields(key, id))]
    pub async fn update(&self, mut req: update::Request) -> MetaResult<object::Location> {
        let api = "Update";
        let vector = req.vector.as_mut().ok_or_else(|| missing_vector(api))?;
        let key = vector.id.clone();
        Span::current().record("key", key.as_str());
        self.validate(api, &key, &vector.vector)?;

        let id = self
            .resolver
            .get_uuid(&key)
            .await
            .map_err(|e| resolve_error(api, &key, e))?;
        Span::current().record("id", id.as_str());
        vector.id = id.clone();

        self.backend
            .update(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("key={key}, id={id}"), e))
    }

    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_update(&self, mut req: update::MultiRequest) -> MetaResult<object::Locations> {
        let api = "MultiUpdate";
        let mut keys = Vec::with_capacity(req.requests.len());
        for r in &req.requests {
            let vector = r.vector.as_ref().ok_or_else(|| missing_vector(api))?;
            self.validate(api, &vector.id, &vector.vector)?;
            keys.push(vector.id.clone());
        }

        let ids = self
            .resolver
            .get_uuids(&keys)
            .await
            .map_err(|e| MetaError::internal(api, format!("count={}", keys.len()), e))?;
        ensure_resolved(api, &keys, &ids)?;

        for (r, id) in req.requests.iter_mut().zip(ids) {
            if let Some(vector) = r.vector.as_mut() {
                vector.id = id;
            }
        }

        self.backend
            .multi_update(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("count={}", keys.len()), e))
    }

    /// Update when the key is mapped, insert otherwise.
    #[instrument(skip_all, fields(key))]
    pub async fn upsert(&self, req: upsert::Request) -> MetaResult<object::Location> {
        let api = "Upsert";
        let vector = req.vector.as_ref().ok_or_else(|| missing_vector(api))?;
        let key = vector.id.clone();
        Span::current().record("key", key.as_str());
        self.validate(api, &key, &vector.vector)?;

        let result = if self.key_exists(api, &key).await {
            self.update(upsert_as_update(req)).await
        } else {
            self.insert(upsert_as_insert(req)).await
        };
        result.map_err(|e| MetaError::internal(api, format!("key={key}"), e))
    }

    /// Split into an update bucket and an insert bucket, dispatch the non-empty
    /// ones concurrently, and return locations in request order.
    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_upsert(&self, req: upsert::MultiRequest) -> MetaResult<object::Locations> {
        let api = "MultiUpsert";
        let total = req.requests.len();
        let (mut insert_pos, mut inserts) = (Vec::new(), Vec::new());
        let (mut update_pos, mut updates) = (Vec::new(), Vec::new());

        for (pos, r) in req.requests.into_iter().enumerate() {
            let vector = r.vector.as_ref().ok_or_else(|| missing_vector(api))?;
            let key = vector.id.clone();
            self.validate(api, &key, &vector.vector)?;

            if self.key_exists(api, &key).await {
                update_pos.push(pos);
                updates.push(upsert_as_update(r));
            } else {
                insert_pos.push(pos);
                inserts.push(upsert_as_insert(r));
            }
        }

        let insert_bucket = async {
            if inserts.is_empty() {
                return Ok(object::Locations::default());
            }
            self.multi_insert(insert::MultiRequest { requests: inserts })
                .await
        };
        let update_bucket = async {
            if updates.is_empty() {
                return Ok(object::Locations::default());
            }
            self.multi_update(update::MultiRequest { requests: updates })
                .await
        };
        let (inserted, updated) = tokio::try_join!(insert_bucket, update_bucket)
            .map_err(|e| MetaError::internal(api, format!("count={total}"), e))?;

        Ok(restore_order(
            total,
            vec![(insert_pos, inserted), (update_pos, updated)],
        ))
    }

    #[instrument(skip_all, fields(key, id))]
    pub async fn remove(&self, mut req: remove::Request) -> MetaResult<object::Location> {
        let api = "Remove";
        let target = req
            .id
            .as_mut()
            .ok_or_else(|| MetaError::InvalidArgument(format!("{api} request carries no id")))?;
        let key = target.id.clone();
        Span::current().record("key", key.as_str());

        let id = self
            .resolver
            .get_uuid(&key)
            .await
            .map_err(|e| resolve_error(api, &key, e))?;
        Span::current().record("id", id.as_str());
        target.id = id.clone();

        let location = self
            .backend
            .remove(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("key={key}, id={id}"), e))?;

        self.resolver
            .delete_meta(&id)
            .await
            .map_err(|e| MetaError::internal(api, format!("key={key}, id={id}, mapping not deleted"), e))?;
        Ok(location)
    }

    #[instrument(skip_all, fields(count = req.requests.len()))]
    pub async fn multi_remove(&self, mut req: remove::MultiRequest) -> MetaResult<object::Locations> {
        let api = "MultiRemove";
        let keys = req
            .requests
            .iter()
            .map(|r| {
                r.id.as_ref()
                    .map(|id| id.id.clone())
                    .ok_or_else(|| MetaError::InvalidArgument(format!("{api} request carries no id")))
            })
            .collect::<MetaResult<Vec<_>>>()?;

        let ids = self
            .resolver
            .get_uuids(&keys)
            .await
            .map_err(|e| MetaError::internal(api, format!("count={}", keys.len()), e))?;
        ensure_resolved(api, &keys, &ids)?;

        for (r, id) in req.requests.iter_mut().zip(&ids) {
            r.id = Some(object::Id { id: id.clone() });
        }

        let locations = self
            .backend
            .multi_remove(req)
            .await
            .map_err(|e| MetaError::backend(api, format!("count={}", keys.len()), e))?;

        self.resolver
            .delete_metas(&ids)
            .await
            .map_err(|e| MetaError::internal(api, format!("count={}, mappings not deleted", ids.len()), e))?;
        Ok(locations)
    }

    #[instrument(skip_all, fields(key = %req.id))]
    pub async fn get_object(&self, req: object::Id) -> MetaResult<object::Vector> {
        let api = "GetObject";
        let key = req.id;
        let id = self
            .resolver
            .get_uuid(&key)
            .await
            .map_err(|e| resolve_error(api, &key, e))?;

        let mut vector = self
            .backend
            .get_object(object::Id { id: id.clone() })
            .await
            .map_err(|e| MetaError::backend(api, format!("key={key}, id={id}"), e))?;
        vector.id = key;
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockVectorBackend;
    use crate::cache::{CacheConfig, TtlCache};
    use crate::store::MockMetaStore;
    use mockall::predicate::eq;
    use std::sync::Mutex;
    use tonic::{Code, Status};

    type Gateway = MetaGateway<MockVectorBackend, MockMetaStore>;

    fn gateway(backend: MockVectorBackend, store: MockMetaStore) -> Gateway {
        MetaGateway::new(backend, MetaResolver::new(store))
    }

    fn vector(id: &str) -> object::Vector {
        object::Vector {
            id: id.to_string(),
            vector: vec![0.1, 0.2, 0.3],
        }
    }

    fn location(uuid: &str) -> object::Location {
        object::Location {
            name: "agent-0".to_string(),
            uuid: uuid.to_string(),
            ips: vec!["10.0.0.1".to_string()],
        }
    }

    fn distance(id: &str, distance: f32) -> object::Distance {
        object::Distance {
            id: id.to_string(),
            distance,
        }
    }

    fn insert_request(key: &str) -> insert::Request {
        insert::Request {
            vector: Some(vector(key)),
            config: None,
        }
    }

    fn upsert_request(key: &str) -> upsert::Request {
        upsert::Request {
            vector: Some(vector(key)),
            config: None,
        }
    }

    fn is_uuid(s: &str) -> bool {
        Uuid::parse_str(s).is_ok()
    }

    /// k1 maps to id-1, every other key is absent.
    fn store_with_k1() -> MockMetaStore {
        let mut store = MockMetaStore::new();
        store.expect_get_meta_inverse().returning(|key| {
            if key == "k1" {
                Ok("id-1".to_string())
            } else {
                Err(MetaError::NotFound(key))
            }
        });
        store
    }

    fn echo_locations(ids: impl Iterator<Item = String>) -> object::Locations {
        object::Locations {
            locations: ids.map(|id| location(&id)).collect(),
        }
    }

    #[tokio::test]
    async fn test_exists_returns_key() {
        let gw = gateway(MockVectorBackend::new(), store_with_k1());

        let found = gw.exists(object::Id { id: "k1".into() }).await.unwrap();
        assert_eq!(found.id, "k1");

        let err = gw.exists(object::Id { id: "k9".into() }).await.unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_insert_existing_key_is_rejected_before_backend() {
        let mut backend = MockVectorBackend::new();
        backend.expect_insert().never();

        let gw = gateway(backend, store_with_k1());
        let err = gw.insert(insert_request("k1")).await.unwrap_err();
        assert_eq!(err.code(), Code::AlreadyExists);
    }

    #[tokio::test]
    async fn test_insert_mints_id_and_stores_mapping() {
        let stored = Arc::new(Mutex::new(None::<String>));

        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .with(eq("k2".to_string()))
            .times(1)
            .returning(|key| Err(MetaError::NotFound(key)));
        let seen = stored.clone();
        store
            .expect_set_meta()
            .withf(|id, key| key == "k2" && is_uuid(id))
            .times(1)
            .returning(move |id, _| {
                *seen.lock().unwrap() = Some(id);
                Ok(())
            });

        let mut backend = MockVectorBackend::new();
        backend
            .expect_insert()
            .withf(|req| req.vector.as_ref().is_some_and(|v| is_uuid(&v.id)))
            .times(1)
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));
        backend.expect_remove().never();

        let gw = gateway(backend, store);
        let loc = gw.insert(insert_request("k2")).await.unwrap();

        assert_eq!(Some(loc.uuid), stored.lock().unwrap().clone());
    }

    #[tokio::test]
    async fn test_insert_skip_strict_exist_check() {
        let mut store = MockMetaStore::new();
        store.expect_get_meta_inverse().never();
        store.expect_set_meta().times(1).returning(|_, _| Ok(()));

        let mut backend = MockVectorBackend::new();
        backend
            .expect_insert()
            .times(1)
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));

        let gw = gateway(backend, store);
        let req = insert::Request {
            vector: Some(vector("k1")),
            config: Some(insert::Config {
                skip_strict_exist_check: true,
                ..Default::default()
            }),
        };
        assert!(gw.insert(req).await.is_ok());
    }

    #[tokio::test]
    async fn test_insert_removes_vector_when_mapping_write_fails() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .returning(|key| Err(MetaError::NotFound(key)));
        store
            .expect_set_meta()
            .returning(|_, _| Err(Status::unavailable("store down").into()));

        let inserted = Arc::new(Mutex::new(String::new()));
        let mut backend = MockVectorBackend::new();
        let seen = inserted.clone();
        backend.expect_insert().returning(move |req| {
            let id = req.vector.unwrap_or_default().id;
            *seen.lock().unwrap() = id.clone();
            Ok(location(&id))
        });
        let expected = inserted.clone();
        backend
            .expect_remove()
            .withf(move |req| {
                req.id.as_ref().map(|id| id.id.clone()) == Some(expected.lock().unwrap().clone())
            })
            .times(1)
            .returning(|req| Ok(location(&req.id.unwrap_or_default().id)));

        let gw = gateway(backend, store);
        let err = gw.insert(insert_request("k2")).await.unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_insert_compensation_failure_is_reported() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .returning(|key| Err(MetaError::NotFound(key)));
        store
            .expect_set_meta()
            .returning(|_, _| Err(Status::unavailable("store down").into()));

        let mut backend = MockVectorBackend::new();
        backend
            .expect_insert()
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));
        backend
            .expect_remove()
            .times(1)
            .returning(|_| Err(Status::internal("agent down").into()));

        let gw = gateway(backend, store);
        let err = gw.insert(insert_request("k2")).await.unwrap_err();
        match err {
            MetaError::Chain(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected chained error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_bad_input() {
        let mut backend = MockVectorBackend::new();
        backend.expect_insert().never();
        let mut store = MockMetaStore::new();
        store.expect_get_meta_inverse().never();
        let gw = gateway(backend, store);

        let no_vector = insert::Request::default();
        assert_eq!(gw.insert(no_vector).await.unwrap_err().code(), Code::InvalidArgument);

        let no_key = insert_request("");
        assert_eq!(gw.insert(no_key).await.unwrap_err().code(), Code::InvalidArgument);

        let short = insert::Request {
            vector: Some(object::Vector {
                id: "k1".into(),
                vector: vec![0.5],
            }),
            config: None,
        };
        assert_eq!(gw.insert(short).await.unwrap_err().code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_search_results_are_remapped_to_keys() {
        let mut backend = MockVectorBackend::new();
        backend.expect_search().times(1).returning(|_| {
            Ok(search::Response {
                request_id: "r1".into(),
                results: vec![
                    distance("id-1", 0.1),
                    distance("id-2", 0.2),
                    distance("id-3", 0.3),
                ],
            })
        });
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas()
            .with(eq(vec![
                "id-1".to_string(),
                "id-2".to_string(),
                "id-3".to_string(),
            ]))
            .times(1)
            .returning(|_| Ok(vec!["k1".into(), String::new(), "k3".into()]));

        let gw = gateway(backend, store);
        let res = gw
            .search(search::Request {
                vector: vec![0.1, 0.2, 0.3],
                config: None,
            })
            .await
            .unwrap();

        let ids: Vec<&str> = res.results.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["k1", "id-2", "k3"]);
        assert_eq!(res.request_id, "r1");
    }

    #[tokio::test]
    async fn test_search_keeps_ids_when_reverse_lookup_fails() {
        let mut backend = MockVectorBackend::new();
        backend.expect_search().returning(|_| {
            Ok(search::Response {
                request_id: String::new(),
                results: vec![distance("id-1", 0.1)],
            })
        });
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas()
            .returning(|_| Err(Status::unavailable("store down").into()));

        let gw = gateway(backend, store);
        let res = gw
            .search(search::Request {
                vector: vec![0.1, 0.2],
                config: None,
            })
            .await
            .unwrap();
        assert_eq!(res.results[0].id, "id-1");
    }

    #[tokio::test]
    async fn test_search_rejects_dimension_out_of_bounds() {
        let mut backend = MockVectorBackend::new();
        backend.expect_search().never();
        let gw = gateway(backend, MockMetaStore::new()).with_dimensions(DimensionBounds {
            min: 2,
            max: 4,
        });

        for vector in [vec![0.1], vec![0.1; 5]] {
            let err = gw
                .search(search::Request { vector, config: None })
                .await
                .unwrap_err();
            assert_eq!(err.code(), Code::InvalidArgument);
        }
    }

    #[tokio::test]
    async fn test_search_cancellation_code_survives_wrapping() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_search()
            .returning(|_| Err(Status::cancelled("client went away").into()));

        let gw = gateway(backend, MockMetaStore::new());
        let err = gw
            .search(search::Request {
                vector: vec![0.1, 0.2],
                config: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Cancelled);
    }

    #[tokio::test]
    async fn test_search_by_id_translates_key() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_search_by_id()
            .withf(|req| req.id == "id-1")
            .times(1)
            .returning(|_| {
                Ok(search::Response {
                    request_id: String::new(),
                    results: vec![distance("id-1", 0.0)],
                })
            });
        let mut store = store_with_k1();
        store
            .expect_get_metas()
            .returning(|_| Ok(vec!["k1".to_string()]));

        let gw = gateway(backend, store);
        let res = gw
            .search_by_id(search::IdRequest {
                id: "k1".into(),
                config: None,
            })
            .await
            .unwrap();
        assert_eq!(res.results[0].id, "k1");
    }

    #[tokio::test]
    async fn test_search_by_unknown_key_is_not_found() {
        let mut backend = MockVectorBackend::new();
        backend.expect_search_by_id().never();

        let gw = gateway(backend, store_with_k1());
        let err = gw
            .search_by_id(search::IdRequest {
                id: "k9".into(),
                config: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_multi_search_keeps_partial_results() {
        let mut backend = MockVectorBackend::new();
        backend.expect_search().times(2).returning(|req| {
            if req.vector[0] > 0.5 {
                Err(Status::internal("agent down").into())
            } else {
                Ok(search::Response {
                    request_id: String::new(),
                    results: vec![distance("id-1", 0.1)],
                })
            }
        });
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas()
            .returning(|_| Ok(vec!["k1".to_string()]));

        let gw = gateway(backend, store);
        let partial = gw
            .multi_search(search::MultiRequest {
                requests: vec![
                    search::Request {
                        vector: vec![0.1, 0.1],
                        config: None,
                    },
                    search::Request {
                        vector: vec![0.9, 0.9],
                        config: None,
                    },
                ],
            })
            .await;

        assert!(!partial.is_complete());
        assert_eq!(partial.value.responses.len(), 2);
        assert_eq!(partial.value.responses[0].results[0].id, "k1");
        assert!(partial.value.responses[1].results.is_empty());
    }

    #[tokio::test]
    async fn test_update_unknown_key_is_not_found() {
        let mut backend = MockVectorBackend::new();
        backend.expect_update().never();

        let gw = gateway(backend, store_with_k1());
        let err = gw
            .update(update::Request {
                vector: Some(vector("k9")),
                config: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_upsert_routes_by_existence() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_update()
            .withf(|req| req.vector.as_ref().is_some_and(|v| v.id == "id-1"))
            .times(1)
            .returning(|_| Ok(location("id-1")));
        backend
            .expect_insert()
            .times(1)
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));
        let mut store = store_with_k1();
        store
            .expect_set_meta()
            .withf(|_, key| key == "k2")
            .times(1)
            .returning(|_, _| Ok(()));

        let gw = gateway(backend, store);
        assert_eq!(gw.upsert(upsert_request("k1")).await.unwrap().uuid, "id-1");
        assert!(is_uuid(&gw.upsert(upsert_request("k2")).await.unwrap().uuid));
    }

    #[tokio::test]
    async fn test_upsert_routes_to_insert_when_lookup_fails() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .times(1)
            .returning(|_| Err(Status::unavailable("store down").into()));
        store.expect_set_meta().times(1).returning(|_, _| Ok(()));

        let mut backend = MockVectorBackend::new();
        backend.expect_update().never();
        backend
            .expect_insert()
            .withf(|req| req.config.as_ref().is_some_and(|c| c.skip_strict_exist_check))
            .times(1)
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));

        let gw = gateway(backend, store);
        assert!(gw.upsert(upsert_request("k2")).await.is_ok());
    }

    #[tokio::test]
    async fn test_upsert_failure_is_internal() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_update()
            .returning(|_| Err(Status::aborted("agent busy").into()));

        let gw = gateway(backend, store_with_k1());
        let err = gw.upsert(upsert_request("k1")).await.unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_upsert_update_path_skips_strict_exist_check() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_update()
            .withf(|req| req.config.as_ref().is_some_and(|c| c.skip_strict_exist_check))
            .times(2)
            .returning(|_| Ok(location("id-1")));

        let gw = gateway(backend, store_with_k1());
        let req = upsert::Request {
            vector: Some(vector("k1")),
            config: Some(upsert::Config {
                skip_strict_exist_check: false,
                ..Default::default()
            }),
        };
        assert_eq!(gw.upsert(req).await.unwrap().uuid, "id-1");
        assert_eq!(gw.upsert(upsert_request("k1")).await.unwrap().uuid, "id-1");
    }

    #[tokio::test]
    async fn test_multi_upsert_update_bucket_skips_strict_exist_check() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_insert().never();
        backend
            .expect_multi_update()
            .withf(|req| {
                req.requests
                    .iter()
                    .all(|r| r.config.as_ref().is_some_and(|c| c.skip_strict_exist_check))
            })
            .times(1)
            .returning(|_| Ok(echo_locations(["id-1".to_string()].into_iter())));
        let mut store = store_with_k1();
        store
            .expect_get_metas_inverse()
            .returning(|_| Ok(vec!["id-1".to_string()]));

        let gw = gateway(backend, store);
        let locs = gw
            .multi_upsert(upsert::MultiRequest {
                requests: vec![upsert_request("k1")],
            })
            .await
            .unwrap();
        assert_eq!(locs.locations[0].uuid, "id-1");
    }

    #[tokio::test]
    async fn test_multi_upsert_bucket_failure_is_internal() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_update().never();
        let mut store = store_with_k1();
        // k1 exists for routing but vanishes before the batched lookup
        store
            .expect_get_metas_inverse()
            .returning(|_| Ok(vec![String::new()]));

        let gw = gateway(backend, store);
        let err = gw
            .multi_upsert(upsert::MultiRequest {
                requests: vec![upsert_request("k1")],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_multi_upsert_splits_and_restores_order() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_multi_insert()
            .withf(|req| req.requests.len() == 2)
            .times(1)
            .returning(|req| {
                Ok(echo_locations(
                    req.requests.into_iter().map(|r| r.vector.unwrap_or_default().id),
                ))
            });
        backend
            .expect_multi_update()
            .withf(|req| req.requests.len() == 1)
            .times(1)
            .returning(|req| {
                Ok(echo_locations(
                    req.requests.into_iter().map(|r| r.vector.unwrap_or_default().id),
                ))
            });

        let mut store = store_with_k1();
        store
            .expect_set_metas()
            .withf(|pairs| {
                let keys: Vec<&str> = pairs.iter().map(|(_, k)| k.as_str()).collect();
                keys == ["k2", "k3"]
            })
            .times(1)
            .returning(|_| Ok(()));
        store
            .expect_get_metas_inverse()
            .with(eq(vec!["k1".to_string()]))
            .times(1)
            .returning(|_| Ok(vec!["id-1".to_string()]));

        let gw = gateway(backend, store);
        let locs = gw
            .multi_upsert(upsert::MultiRequest {
                requests: vec![upsert_request("k2"), upsert_request("k1"), upsert_request("k3")],
            })
            .await
            .unwrap();

        assert_eq!(locs.locations.len(), 3);
        assert!(is_uuid(&locs.locations[0].uuid));
        assert_eq!(locs.locations[1].uuid, "id-1");
        assert!(is_uuid(&locs.locations[2].uuid));
    }

    #[tokio::test]
    async fn test_multi_upsert_skips_empty_bucket() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_update().never();
        backend.expect_multi_insert().times(1).returning(|req| {
            Ok(echo_locations(
                req.requests.into_iter().map(|r| r.vector.unwrap_or_default().id),
            ))
        });
        let mut store = store_with_k1();
        store.expect_get_metas_inverse().never();
        store.expect_set_metas().times(1).returning(|_| Ok(()));

        let gw = gateway(backend, store);
        let locs = gw
            .multi_upsert(upsert::MultiRequest {
                requests: vec![upsert_request("k2"), upsert_request("k3")],
            })
            .await
            .unwrap();
        assert_eq!(locs.locations.len(), 2);
    }

    #[tokio::test]
    async fn test_multi_insert_rejects_duplicate_keys() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_insert().never();

        let gw = gateway(backend, store_with_k1());
        let err = gw
            .multi_insert(insert::MultiRequest {
                requests: vec![insert_request("k2"), insert_request("k2")],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::AlreadyExists);
    }

    #[tokio::test]
    async fn test_multi_insert_conflict_aborts_before_backend_write() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_insert().never();
        let mut store = store_with_k1();
        store.expect_set_metas().never();

        let gw = gateway(backend, store);
        let err = gw
            .multi_insert(insert::MultiRequest {
                requests: vec![insert_request("k2"), insert_request("k1"), insert_request("k3")],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::AlreadyExists);
    }

    #[tokio::test]
    async fn test_multi_insert_removes_batch_when_mapping_write_fails() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_insert().returning(|req| {
            Ok(echo_locations(
                req.requests.into_iter().map(|r| r.vector.unwrap_or_default().id),
            ))
        });
        backend
            .expect_multi_remove()
            .withf(|req| req.requests.len() == 2)
            .times(1)
            .returning(|_| Ok(object::Locations::default()));
        let mut store = store_with_k1();
        store
            .expect_set_metas()
            .returning(|_| Err(Status::unavailable("store down").into()));

        let gw = gateway(backend, store);
        let err = gw
            .multi_insert(insert::MultiRequest {
                requests: vec![insert_request("k2"), insert_request("k3")],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_remove_deletes_mapping_after_vector() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_remove()
            .withf(|req| req.id.as_ref().is_some_and(|id| id.id == "id-1"))
            .times(1)
            .returning(|_| Ok(location("id-1")));
        let mut store = store_with_k1();
        store
            .expect_delete_meta()
            .with(eq("id-1".to_string()))
            .times(1)
            .returning(|_| Ok("k1".to_string()));

        let gw = gateway(backend, store);
        let loc = gw
            .remove(remove::Request {
                id: Some(object::Id { id: "k1".into() }),
                config: None,
            })
            .await
            .unwrap();
        assert_eq!(loc.uuid, "id-1");
    }

    #[tokio::test]
    async fn test_remove_reports_orphaned_mapping() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_remove()
            .times(1)
            .returning(|_| Ok(location("id-1")));
        let mut store = store_with_k1();
        store
            .expect_delete_meta()
            .times(1)
            .returning(|_| Err(Status::unavailable("store down").into()));

        let gw = gateway(backend, store);
        let err = gw
            .remove(remove::Request {
                id: Some(object::Id { id: "k1".into() }),
                config: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_multi_remove_reports_orphaned_mappings() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_multi_remove()
            .times(1)
            .returning(|_| Ok(echo_locations(["id-1".to_string()].into_iter())));
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas_inverse()
            .returning(|_| Ok(vec!["id-1".to_string()]));
        store
            .expect_delete_metas()
            .with(eq(vec!["id-1".to_string()]))
            .times(1)
            .returning(|_| Err(Status::unavailable("store down").into()));

        let gw = gateway(backend, store);
        let err = gw
            .multi_remove(remove::MultiRequest {
                requests: vec![remove::Request {
                    id: Some(object::Id { id: "k1".into() }),
                    config: None,
                }],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_multi_remove_with_unknown_key_is_not_found() {
        let mut backend = MockVectorBackend::new();
        backend.expect_multi_remove().never();
        let mut store = MockMetaStore::new();
        store
            .expect_get_metas_inverse()
            .returning(|_| Ok(vec!["id-1".to_string(), String::new()]));
        store.expect_delete_metas().never();

        let gw = gateway(backend, store);
        let err = gw
            .multi_remove(remove::MultiRequest {
                requests: vec![
                    remove::Request {
                        id: Some(object::Id { id: "k1".into() }),
                        config: None,
                    },
                    remove::Request {
                        id: Some(object::Id { id: "k9".into() }),
                        config: None,
                    },
                ],
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_get_object_returns_key() {
        let mut backend = MockVectorBackend::new();
        backend
            .expect_get_object()
            .with(eq(object::Id { id: "id-1".into() }))
            .times(1)
            .returning(|id| Ok(vector(&id.id)));

        let gw = gateway(backend, store_with_k1());
        let obj = gw.get_object(object::Id { id: "k1".into() }).await.unwrap();
        assert_eq!(obj.id, "k1");
        assert_eq!(obj.vector, vec![0.1, 0.2, 0.3]);
    }

    #[tokio::test]
    async fn test_inserted_mapping_serves_lookups_from_cache() {
        let mut store = MockMetaStore::new();
        store
            .expect_get_meta_inverse()
            .times(1)
            .returning(|key| Err(MetaError::NotFound(key)));
        store.expect_set_meta().times(1).returning(|_, _| Ok(()));

        let mut backend = MockVectorBackend::new();
        backend
            .expect_insert()
            .returning(|req| Ok(location(&req.vector.unwrap_or_default().id)));
        backend
            .expect_get_object()
            .returning(|id| Ok(vector(&id.id)));

        let cache = Arc::new(TtlCache::new(CacheConfig::default()));
        let gw = MetaGateway::new(backend, MetaResolver::new(store).with_cache(cache));

        gw.insert(insert_request("k2")).await.unwrap();
        assert_eq!(gw.exists(object::Id { id: "k2".into() }).await.unwrap().id, "k2");
        assert_eq!(gw.get_object(object::Id { id: "k2".into() }).await.unwrap().id, "k2");
    }
}
