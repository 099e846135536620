//! In-memory stand-in for the vector engine
//!
//! Implements the unary `gateway.v1.VectorGateway` calls the meta gateway
//! forwards to. Ids are whatever the caller sends; search is exact L2 over
//! every stored vector.

use std::collections::HashMap;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use rpc::gateway::v1::vector_gateway_server::{VectorGateway, VectorGatewayServer};
use rpc::payload::v1::{insert, object, remove, search, update, upsert};
use tokio_stream::Stream;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tonic::{Request, Response, Status, Streaming};
use tonic_health::server::health_reporter;

use crate::server::TestServer;

type BoxStream<T> = Pin<Box<dyn Stream<Item = Result<T, Status>> + Send>>;

const DEFAULT_TOP_K: usize = 10;
const AGENT_NAME: &str = "fake-agent-0";

/// Map-backed vector engine that counts removes
#[derive(Clone, Debug, Default)]
pub struct FakeVectorBackend {
    vectors: Arc<Mutex<HashMap<String, Vec<f32>>>>,
    removes: Arc<AtomicUsize>,
}

fn location(id: &str) -> object::Location {
    object::Location {
        name: AGENT_NAME.to_string(),
        uuid: id.to_string(),
        ips: vec!["127.0.0.1".to_string()],
    }
}

fn l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

fn required_vector(vector: Option<object::Vector>) -> Result<object::Vector, Status> {
    vector.ok_or_else(|| Status::invalid_argument("request carries no vector"))
}

impl FakeVectorBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<f32>>> {
        self.vectors.lock().expect("vector store lock poisoned")
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Ids currently stored, unordered
    pub fn ids(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    /// Number of remove requests served, single and batched items alike
    pub fn removes(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    fn nearest(&self, query: &[f32], config: Option<search::Config>) -> search::Response {
        let config = config.unwrap_or_default();
        let top_k = match config.num {
            0 => DEFAULT_TOP_K,
            n => n as usize,
        };
        let mut results: Vec<object::Distance> = self
            .lock()
            .iter()
            .filter(|(_, v)| v.len() == query.len())
            .map(|(id, v)| object::Distance {
                id: id.clone(),
                distance: l2(query, v),
            })
            .collect();
        results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then_with(|| a.id.cmp(&b.id)));
        results.truncate(top_k);
        search::Response {
            request_id: config.request_id,
            results,
        }
    }

    fn do_insert(&self, vector: Option<object::Vector>, skip_check: bool) -> Result<object::Location, Status> {
        let vector = required_vector(vector)?;
        let mut vectors = self.lock();
        if !skip_check && vectors.contains_key(&vector.id) {
            return Err(Status::already_exists(format!("id {} already exists", vector.id)));
        }
        vectors.insert(vector.id.clone(), vector.vector);
        Ok(location(&vector.id))
    }

    fn do_update(&self, vector: Option<object::Vector>) -> Result<object::Location, Status> {
        let vector = required_vector(vector)?;
        let mut vectors = self.lock();
        match vectors.get_mut(&vector.id) {
            Some(slot) => *slot = vector.vector,
            None => return Err(Status::not_found(format!("id {} not found", vector.id))),
        }
        Ok(location(&vector.id))
    }

    fn do_remove(&self, id: Option<object::Id>) -> Result<object::Location, Status> {
        let id = id
            .ok_or_else(|| Status::invalid_argument("request carries no id"))?
            .id;
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.lock()
            .remove(&id)
            .map(|_| location(&id))
            .ok_or_else(|| Status::not_found(format!("id {id} not found")))
    }
}

#[tonic::async_trait]
impl VectorGateway for FakeVectorBackend {
    async fn exists(&self, request: Request<object::Id>) -> Result<Response<object::Id>, Status> {
        let id = request.into_inner();
        if self.contains(&id.id) {
            Ok(Response::new(id))
        } else {
            Err(Status::not_found(format!("id {} not found", id.id)))
        }
    }

    async fn search(&self, request: Request<search::Request>) -> Result<Response<search::Response>, Status> {
        let req = request.into_inner();
        Ok(Response::new(self.nearest(&req.vector, req.config)))
    }

    async fn search_by_id(
        &self,
        request: Request<search::IdRequest>,
    ) -> Result<Response<search::Response>, Status> {
        let req = request.into_inner();
        let query = self
            .lock()
            .get(&req.id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("id {} not found", req.id)))?;
        Ok(Response::new(self.nearest(&query, req.config)))
    }

    type StreamSearchStream = BoxStream<search::StreamResponse>;

    async fn stream_search(
        &self,
        _request: Request<Streaming<search::Request>>,
    ) -> Result<Response<Self::StreamSearchStream>, Status> {
        Err(Status::unimplemented("stream search is not served by the fake backend"))
    }

    type StreamSearchByIDStream = BoxStream<search::StreamResponse>;

    async fn stream_search_by_id(
        &self,
        _request: Request<Streaming<search::IdRequest>>,
    ) -> Result<Response<Self::StreamSearchByIDStream>, Status> {
        Err(Status::unimplemented("stream search by id is not served by the fake backend"))
    }

    async fn multi_search(
        &self,
        request: Request<search::MultiRequest>,
    ) -> Result<Response<search::Responses>, Status> {
        let responses = request
            .into_inner()
            .requests
            .into_iter()
            .map(|r| self.nearest(&r.vector, r.config))
            .collect();
        Ok(Response::new(search::Responses { responses }))
    }

    async fn multi_search_by_id(
        &self,
        _request: Request<search::MultiIdRequest>,
    ) -> Result<Response<search::Responses>, Status> {
        Err(Status::unimplemented("multi search by id is not served by the fake backend"))
    }

    async fn insert(&self, request: Request<insert::Request>) -> Result<Response<object::Location>, Status> {
        let req = request.into_inner();
        let skip = req.config.is_some_and(|c| c.skip_strict_exist_check);
        self.do_insert(req.vector, skip).map(Response::new)
    }

    type StreamInsertStream = BoxStream<object::StreamLocation>;

    async fn stream_insert(
        &self,
        _request: Request<Streaming<insert::Request>>,
    ) -> Result<Response<Self::StreamInsertStream>, Status> {
        Err(Status::unimplemented("stream insert is not served by the fake backend"))
    }

    async fn multi_insert(
        &self,
        request: Request<insert::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        let locations = request
            .into_inner()
            .requests
            .into_iter()
            .map(|r| {
                let skip = r.config.is_some_and(|c| c.skip_strict_exist_check);
                self.do_insert(r.vector, skip)
            })
            .collect::<Result<Vec<_>, Status>>()?;
        Ok(Response::new(object::Locations { locations }))
    }

    async fn update(&self, request: Request<update::Request>) -> Result<Response<object::Location>, Status> {
        self.do_update(request.into_inner().vector).map(Response::new)
    }

    type StreamUpdateStream = BoxStream<object::StreamLocation>;

    async fn stream_update(
        &self,
        _request: Request<Streaming<update::Request>>,
    ) -> Result<Response<Self::StreamUpdateStream>, Status> {
        Err(Status::unimplemented("stream update is not served by the fake backend"))
    }

    async fn multi_update(
        &self,
        request: Request<update::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        let locations = request
            .into_inner()
            .requests
            .into_iter()
            .map(|r| self.do_update(r.vector))
            .collect::<Result<Vec<_>, Status>>()?;
        Ok(Response::new(object::Locations { locations }))
    }

    async fn upsert(&self, request: Request<upsert::Request>) -> Result<Response<object::Location>, Status> {
        self.do_insert(request.into_inner().vector, true).map(Response::new)
    }

    type StreamUpsertStream = BoxStream<object::StreamLocation>;

    async fn stream_upsert(
        &self,
        _request: Request<Streaming<upsert::Request>>,
    ) -> Result<Response<Self::StreamUpsertStream>, Status> {
        Err(Status::unimplemented("stream upsert is not served by the fake backend"))
    }

    async fn multi_upsert(
        &self,
        request: Request<upsert::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        let locations = request
            .into_inner()
            .requests
            .into_iter()
            .map(|r| self.do_insert(r.vector, true))
            .collect::<Result<Vec<_>, Status>>()?;
        Ok(Response::new(object::Locations { locations }))
    }

    async fn remove(&self, request: Request<remove::Request>) -> Result<Response<object::Location>, Status> {
        self.do_remove(request.into_inner().id).map(Response::new)
    }

    type StreamRemoveStream = BoxStream<object::StreamLocation>;

    async fn stream_remove(
        &self,
        _request: Request<Streaming<remove::Request>>,
    ) -> Result<Response<Self::StreamRemoveStream>, Status> {
        Err(Status::unimplemented("stream remove is not served by the fake backend"))
    }

    async fn multi_remove(
        &self,
        request: Request<remove::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        let locations = request
            .into_inner()
            .requests
            .into_iter()
            .map(|r| self.do_remove(r.id))
            .collect::<Result<Vec<_>, Status>>()?;
        Ok(Response::new(object::Locations { locations }))
    }

    async fn get_object(&self, request: Request<object::Id>) -> Result<Response<object::Vector>, Status> {
        let id = request.into_inner().id;
        let vector = self
            .lock()
            .get(&id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("id {id} not found")))?;
        Ok(Response::new(object::Vector { id, vector }))
    }

    type StreamGetObjectStream = BoxStream<object::StreamVector>;

    async fn stream_get_object(
        &self,
        _request: Request<Streaming<object::Id>>,
    ) -> Result<Response<Self::StreamGetObjectStream>, Status> {
        Err(Status::unimplemented("stream get object is not served by the fake backend"))
    }
}

/// A [`FakeVectorBackend`] served over gRPC with health checks
pub struct TestVectorBackend {
    pub backend: FakeVectorBackend,
    pub server: TestServer,
}

impl TestVectorBackend {
    pub async fn new() -> Self {
        let backend = FakeVectorBackend::new();
        let (health, health_service) = health_reporter();
        health
            .set_service_status(
                rpc::gateway::v1::vector_gateway_server::SERVICE_NAME,
                tonic_health::ServingStatus::Serving,
            )
            .await;

        let router = Server::builder().add_service(health_service).add_service(
            VectorGatewayServer::new(backend.clone())
                .accept_compressed(CompressionEncoding::Zstd)
                .send_compressed(CompressionEncoding::Zstd),
        );

        let server = TestServer::start(router, health).await;
        Self { backend, server }
    }

    pub fn url(&self) -> String {
        self.server.url()
    }
}
