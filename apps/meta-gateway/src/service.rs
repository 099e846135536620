//! VectorGateway gRPC service implementation
//!
//! Thin adapter over [`MetaGateway`]: unary calls translate errors through
//! `From<MetaError> for Status`, stream calls run every request through
//! [`bidirectional_stream`] and answer with one envelope per request.

use core_grpc::{ResponseStream, bidirectional_stream};
use domain_meta::{MetaGateway, MetaResult, MetaStore, Partial, VectorBackend};
use rpc::gateway::v1::vector_gateway_server::VectorGateway;
use rpc::payload::v1::{insert, object, remove, search, update, upsert};
use tonic::{Request, Response, Status, Streaming};
use tracing::{debug, warn};

/// gRPC service implementation for the gateway
///
/// Generic over the upstream clients for testability.
pub struct MetaGatewayService<B: VectorBackend, S: MetaStore> {
    gateway: MetaGateway<B, S>,
    stream_concurrency: usize,
}

impl<B: VectorBackend, S: MetaStore> MetaGatewayService<B, S> {
    pub fn new(gateway: MetaGateway<B, S>, stream_concurrency: usize) -> Self {
        Self {
            gateway,
            stream_concurrency,
        }
    }
}

fn reply<T>(api: &'static str, result: MetaResult<T>) -> Result<Response<T>, Status> {
    result.map(Response::new).map_err(|err| {
        debug!(api, error = %err, "request failed");
        Status::from(err)
    })
}

/// A unary call cannot carry both results and an error; any failure wins.
fn reply_partial(api: &'static str, partial: Partial<search::Responses>) -> Result<Response<search::Responses>, Status> {
    match partial.error {
        None => Ok(Response::new(partial.value)),
        Some(err) => {
            let answered = partial
                .value
                .responses
                .iter()
                .filter(|r| !r.results.is_empty())
                .count();
            warn!(
                api,
                answered,
                total = partial.value.responses.len(),
                error = %err,
                "batch search partially failed, discarding partial results"
            );
            Err(err.into())
        }
    }
}

#[tonic::async_trait]
impl<B, S> VectorGateway for MetaGatewayService<B, S>
where
    B: VectorBackend,
    S: MetaStore,
{
    async fn exists(&self, request: Request<object::Id>) -> Result<Response<object::Id>, Status> {
        reply("Exists", self.gateway.exists(request.into_inner()).await)
    }

    async fn search(&self, request: Request<search::Request>) -> Result<Response<search::Response>, Status> {
        reply("Search", self.gateway.search(request.into_inner()).await)
    }

    async fn search_by_id(
        &self,
        request: Request<search::IdRequest>,
    ) -> Result<Response<search::Response>, Status> {
        reply("SearchByID", self.gateway.search_by_id(request.into_inner()).await)
    }

    type StreamSearchStream = ResponseStream<search::StreamResponse>;

    async fn stream_search(
        &self,
        request: Request<Streaming<search::Request>>,
    ) -> Result<Response<Self::StreamSearchStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.search(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    type StreamSearchByIDStream = ResponseStream<search::StreamResponse>;

    async fn stream_search_by_id(
        &self,
        request: Request<Streaming<search::IdRequest>>,
    ) -> Result<Response<Self::StreamSearchByIDStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.search_by_id(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    async fn multi_search(
        &self,
        request: Request<search::MultiRequest>,
    ) -> Result<Response<search::Responses>, Status> {
        reply_partial("MultiSearch", self.gateway.multi_search(request.into_inner()).await)
    }

    async fn multi_search_by_id(
        &self,
        request: Request<search::MultiIdRequest>,
    ) -> Result<Response<search::Responses>, Status> {
        reply_partial(
            "MultiSearchByID",
            self.gateway.multi_search_by_id(request.into_inner()).await,
        )
    }

    async fn insert(&self, request: Request<insert::Request>) -> Result<Response<object::Location>, Status> {
        reply("Insert", self.gateway.insert(request.into_inner()).await)
    }

    type StreamInsertStream = ResponseStream<object::StreamLocation>;

    async fn stream_insert(
        &self,
        request: Request<Streaming<insert::Request>>,
    ) -> Result<Response<Self::StreamInsertStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.insert(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    async fn multi_insert(
        &self,
        request: Request<insert::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        reply("MultiInsert", self.gateway.multi_insert(request.into_inner()).await)
    }

    async fn update(&self, request: Request<update::Request>) -> Result<Response<object::Location>, Status> {
        reply("Update", self.gateway.update(request.into_inner()).await)
    }

    type StreamUpdateStream = ResponseStream<object::StreamLocation>;

    async fn stream_update(
        &self,
        request: Request<Streaming<update::Request>>,
    ) -> Result<Response<Self::StreamUpdateStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.update(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    async fn multi_update(
        &self,
        request: Request<update::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        reply("MultiUpdate", self.gateway.multi_update(request.into_inner()).await)
    }

    async fn upsert(&self, request: Request<upsert::Request>) -> Result<Response<object::Location>, Status> {
        reply("Upsert", self.gateway.upsert(request.into_inner()).await)
    }

    type StreamUpsertStream = ResponseStream<object::StreamLocation>;

    async fn stream_upsert(
        &self,
        request: Request<Streaming<upsert::Request>>,
    ) -> Result<Response<Self::StreamUpsertStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.upsert(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    async fn multi_upsert(
        &self,
        request: Request<upsert::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        reply("MultiUpsert", self.gateway.multi_upsert(request.into_inner()).await)
    }

    async fn remove(&self, request: Request<remove::Request>) -> Result<Response<object::Location>, Status> {
        reply("Remove", self.gateway.remove(request.into_inner()).await)
    }

    type StreamRemoveStream = ResponseStream<object::StreamLocation>;

    async fn stream_remove(
        &self,
        request: Request<Streaming<remove::Request>>,
    ) -> Result<Response<Self::StreamRemoveStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.remove(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }

    async fn multi_remove(
        &self,
        request: Request<remove::MultiRequest>,
    ) -> Result<Response<object::Locations>, Status> {
        reply("MultiRemove", self.gateway.multi_remove(request.into_inner()).await)
    }

    async fn get_object(&self, request: Request<object::Id>) -> Result<Response<object::Vector>, Status> {
        reply("GetObject", self.gateway.get_object(request.into_inner()).await)
    }

    type StreamGetObjectStream = ResponseStream<object::StreamVector>;

    async fn stream_get_object(
        &self,
        request: Request<Streaming<object::Id>>,
    ) -> Result<Response<Self::StreamGetObjectStream>, Status> {
        let gateway = self.gateway.clone();
        let stream = bidirectional_stream(request.into_inner(), self.stream_concurrency, move |req| {
            let gateway = gateway.clone();
            async move { gateway.get_object(req).await.map_err(Status::from) }
        });
        Ok(Response::new(stream))
    }
}
