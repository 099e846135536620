//! In-memory `meta.v1.Meta` server
//!
//! Keys on the wire are internal ids and values are caller keys, the same
//! orientation the gateway uses. Batched calls answer positionally with an
//! empty string for misses; single lookups answer `NotFound`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use rpc::meta::v1::meta_server::{Meta, MetaServer};
use rpc::payload::v1::{Empty, meta};
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic::{Request, Response, Status};
use tonic_health::server::health_reporter;

use crate::server::TestServer;

#[derive(Debug, Default)]
struct Mappings {
    by_id: HashMap<String, String>,
    by_key: HashMap<String, String>,
}

impl Mappings {
    fn set(&mut self, id: String, key: String) {
        if let Some(old_key) = self.by_id.insert(id.clone(), key.clone()) {
            self.by_key.remove(&old_key);
        }
        if let Some(old_id) = self.by_key.insert(key, id) {
            self.by_id.remove(&old_id);
        }
    }

    fn remove_id(&mut self, id: &str) -> Option<String> {
        let key = self.by_id.remove(id)?;
        self.by_key.remove(&key);
        Some(key)
    }

    fn remove_key(&mut self, key: &str) -> Option<String> {
        let id = self.by_key.remove(key)?;
        self.by_id.remove(&id);
        Some(id)
    }
}

/// Map-backed store with call counting and write-failure injection
#[derive(Clone, Debug, Default)]
pub struct FakeMetaStore {
    mappings: Arc<Mutex<Mappings>>,
    calls: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl FakeMetaStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Mappings> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.mappings.lock().expect("meta store lock poisoned")
    }

    /// Seed a mapping without going through gRPC
    pub fn insert(&self, id: impl Into<String>, key: impl Into<String>) {
        self.mappings
            .lock()
            .expect("meta store lock poisoned")
            .set(id.into(), key.into());
    }

    pub fn id_of(&self, key: &str) -> Option<String> {
        self.mappings
            .lock()
            .expect("meta store lock poisoned")
            .by_key
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.mappings.lock().expect("meta store lock poisoned").by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of RPCs served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Make every `SetMeta`/`SetMetas` call fail with `Unavailable`
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), Status> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Status::unavailable("meta store writes disabled"));
        }
        Ok(())
    }
}

#[tonic::async_trait]
impl Meta for FakeMetaStore {
    async fn get_meta(&self, request: Request<meta::Key>) -> Result<Response<meta::Val>, Status> {
        let id = request.into_inner().key;
        let val = self
            .lock()
            .by_id
            .get(&id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("id {id} not found")))?;
        Ok(Response::new(meta::Val { val }))
    }

    async fn get_metas(&self, request: Request<meta::Keys>) -> Result<Response<meta::Vals>, Status> {
        let mappings = self.lock();
        let vals = request
            .into_inner()
            .keys
            .iter()
            .map(|id| mappings.by_id.get(id).cloned().unwrap_or_default())
            .collect();
        Ok(Response::new(meta::Vals { vals }))
    }

    async fn get_meta_inverse(&self, request: Request<meta::Val>) -> Result<Response<meta::Key>, Status> {
        let key = request.into_inner().val;
        let id = self
            .lock()
            .by_key
            .get(&key)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("key {key} not found")))?;
        Ok(Response::new(meta::Key { key: id }))
    }

    async fn get_metas_inverse(&self, request: Request<meta::Vals>) -> Result<Response<meta::Keys>, Status> {
        let mappings = self.lock();
        let keys = request
            .into_inner()
            .vals
            .iter()
            .map(|key| mappings.by_key.get(key).cloned().unwrap_or_default())
            .collect();
        Ok(Response::new(meta::Keys { keys }))
    }

    async fn set_meta(&self, request: Request<meta::KeyVal>) -> Result<Response<Empty>, Status> {
        self.check_writable()?;
        let kv = request.into_inner();
        self.lock().set(kv.key, kv.val);
        Ok(Response::new(Empty {}))
    }

    async fn set_metas(&self, request: Request<meta::KeyVals>) -> Result<Response<Empty>, Status> {
        self.check_writable()?;
        let mut mappings = self.lock();
        for kv in request.into_inner().kvs {
            mappings.set(kv.key, kv.val);
        }
        Ok(Response::new(Empty {}))
    }

    async fn delete_meta(&self, request: Request<meta::Key>) -> Result<Response<meta::Val>, Status> {
        let id = request.into_inner().key;
        let val = self
            .lock()
            .remove_id(&id)
            .ok_or_else(|| Status::not_found(format!("id {id} not found")))?;
        Ok(Response::new(meta::Val { val }))
    }

    async fn delete_metas(&self, request: Request<meta::Keys>) -> Result<Response<meta::Vals>, Status> {
        let mut mappings = self.lock();
        let vals = request
            .into_inner()
            .keys
            .iter()
            .map(|id| mappings.remove_id(id).unwrap_or_default())
            .collect();
        Ok(Response::new(meta::Vals { vals }))
    }

    async fn delete_meta_inverse(&self, request: Request<meta::Val>) -> Result<Response<meta::Key>, Status> {
        let key = request.into_inner().val;
        let id = self
            .lock()
            .remove_key(&key)
            .ok_or_else(|| Status::not_found(format!("key {key} not found")))?;
        Ok(Response::new(meta::Key { key: id }))
    }

    async fn delete_metas_inverse(&self, request: Request<meta::Vals>) -> Result<Response<meta::Keys>, Status> {
        let mut mappings = self.lock();
        let keys = request
            .into_inner()
            .vals
            .iter()
            .map(|key| mappings.remove_key(key).unwrap_or_default())
            .collect();
        Ok(Response::new(meta::Keys { keys }))
    }
}

/// A [`FakeMetaStore`] served over gRPC with health checks
///
/// # Example
///
/// ```no_run
/// use test_utils::TestMetaStore;
///
/// # async fn example() {
/// let meta = TestMetaStore::new().await;
/// meta.store.insert("id-1", "k1");
/// // Point a client at meta.url()
/// # }
/// ```
pub struct TestMetaStore {
    pub store: FakeMetaStore,
    pub server: TestServer,
}

impl TestMetaStore {
    pub async fn new() -> Self {
        let store = FakeMetaStore::new();
        let (health, health_service) = health_reporter();
        health
            .set_service_status(
                rpc::meta::v1::meta_server::SERVICE_NAME,
                tonic_health::ServingStatus::Serving,
            )
            .await;

        let router = Server::builder().add_service(health_service).add_service(
            MetaServer::new(store.clone())
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd),
        );

        let server = TestServer::start(router, health).await;
        Self { store, server }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }
}
