use async_trait::async_trait;
use core_grpc::{ChannelConfig, MAX_MESSAGE_SIZE, TracingInterceptor, create_channel_lazy_with_config};
use rpc::gateway::v1::vector_gateway_client::VectorGatewayClient;
use rpc::payload::v1::{insert, object, remove, search, update};
use tonic::codec::CompressionEncoding;
use tonic::codegen::InterceptedService;
use tonic::transport::Channel;

use crate::error::MetaResult;

/// Downstream vector gateway, addressed by internal ids only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorBackend: Send + Sync + 'static {
    async fn search(&self, req: search::Request) -> MetaResult<search::Response>;

    async fn search_by_id(&self, req: search::IdRequest) -> MetaResult<search::Response>;

    async fn insert(&self, req: insert::Request) -> MetaResult<object::Location>;

    async fn multi_insert(&self, req: insert::MultiRequest) -> MetaResult<object::Locations>;

    async fn update(&self, req: update::Request) -> MetaResult<object::Location>;

    async fn multi_update(&self, req: update::MultiRequest) -> MetaResult<object::Locations>;

    async fn remove(&self, req: remove::Request) -> MetaResult<object::Location>;

    async fn multi_remove(&self, req: remove::MultiRequest) -> MetaResult<object::Locations>;

    async fn get_object(&self, id: object::Id) -> MetaResult<object::Vector>;
}

type BackendChannel = InterceptedService<Channel, TracingInterceptor>;

/// [`VectorBackend`] over the `gateway.v1.VectorGateway` gRPC service.
#[derive(Clone, Debug)]
pub struct GrpcVectorBackend {
    client: VectorGatewayClient<BackendChannel>,
}

impl GrpcVectorBackend {
    pub fn new(channel: Channel) -> Self {
        let client = VectorGatewayClient::with_interceptor(channel, TracingInterceptor::new())
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd)
            .max_decoding_message_size(MAX_MESSAGE_SIZE)
            .max_encoding_message_size(MAX_MESSAGE_SIZE);
        Self { client }
    }

    pub fn connect_lazy(addr: impl Into<String>, config: ChannelConfig) -> MetaResult<Self> {
        let channel = create_channel_lazy_with_config(addr, config)?;
        Ok(Self::new(channel))
    }
}

#[async_trait]
impl VectorBackend for GrpcVectorBackend {
    async fn search(&self, req: search::Request) -> MetaResult<search::Response> {
        Ok(self.client.clone().search(req).await?.into_inner())
    }

    async fn search_by_id(&self, req: search::IdRequest) -> MetaResult<search::Response> {
        Ok(self.client.clone().search_by_id(req).await?.into_inner())
    }

    async fn insert(&self, req: insert::Request) -> MetaResult<object::Location> {
        Ok(self.client.clone().insert(req).await?.into_inner())
    }

    async fn multi_insert(&self, req: insert::MultiRequest) -> MetaResult<object::Locations> {
        Ok(self.client.clone().multi_insert(req).await?.into_inner())
    }

    async fn update(&self, req: update::Request) -> MetaResult<object::Location> {
        Ok(self.client.clone().update(req).await?.into_inner())
    }

    async fn multi_update(&self, req: update::MultiRequest) -> MetaResult<object::Locations> {
        Ok(self.client.clone().multi_update(req).await?.into_inner())
    }

    async fn remove(&self, req: remove::Request) -> MetaResult<object::Location> {
        Ok(self.client.clone().remove(req).await?.into_inner())
    }

    async fn multi_remove(&self, req: remove::MultiRequest) -> MetaResult<object::Locations> {
        Ok(self.client.clone().multi_remove(req).await?.into_inner())
    }

    async fn get_object(&self, id: object::Id) -> MetaResult<object::Vector> {
        Ok(self.client.clone().get_object(id).await?.into_inner())
    }
}
