// @generated
/// Generated client implementations.
pub mod vector_gateway_client {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    use tonic::codegen::http::Uri;
    #[derive(Debug, Clone)]
    pub struct VectorGatewayClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl VectorGatewayClient<tonic::transport::Channel> {
        /// Attempt to create a new client by connecting to a given endpoint.
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> VectorGatewayClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::Body>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + std::marker::Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + std::marker::Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_origin(inner: T, origin: Uri) -> Self {
            let inner = tonic::client::Grpc::with_origin(inner, origin);
            Self { inner }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> VectorGatewayClient<InterceptedService<T, F>>
        where
            F: tonic::service::Interceptor,
            T::ResponseBody: Default,
            T: tonic::codegen::Service<
                http::Request<tonic::body::Body>,
                Response = http::Response<
                    <T as tonic::client::GrpcService<tonic::body::Body>>::ResponseBody,
                >,
            >,
            <T as tonic::codegen::Service<
                http::Request<tonic::body::Body>,
            >>::Error: Into<StdError> + std::marker::Send + std::marker::Sync,
        {
            VectorGatewayClient::new(InterceptedService::new(inner, interceptor))
        }
        /// Compress requests with the given encoding.
        ///
        /// This requires the server to support it otherwise it might respond with an
        /// error.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.send_compressed(encoding);
            self
        }
        /// Enable decompressing responses.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.inner = self.inner.accept_compressed(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_decoding_message_size(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.inner = self.inner.max_encoding_message_size(limit);
            self
        }
        pub async fn exists(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::object::Id>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Id>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Exists",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Exists"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn search(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::search::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Response>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Search",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Search"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn search_by_id(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::search::IdRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Response>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/SearchByID",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "SearchByID"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_search(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::search::Request>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::search::StreamResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamSearch",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamSearch"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn stream_search_by_id(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::search::IdRequest>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::search::StreamResponse>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamSearchByID",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamSearchByID"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn multi_search(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::search::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Responses>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiSearch",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiSearch"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn multi_search_by_id(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::search::MultiIdRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Responses>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiSearchByID",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiSearchByID"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn insert(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::insert::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Insert",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Insert"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_insert(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::insert::Request>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::object::StreamLocation>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamInsert",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamInsert"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn multi_insert(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::insert::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiInsert",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiInsert"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn update(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::update::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Update",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Update"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_update(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::update::Request>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::object::StreamLocation>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamUpdate",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamUpdate"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn multi_update(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::update::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiUpdate",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiUpdate"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn upsert(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::upsert::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Upsert",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Upsert"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_upsert(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::upsert::Request>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::object::StreamLocation>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamUpsert",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamUpsert"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn multi_upsert(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::upsert::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiUpsert",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiUpsert"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn remove(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::remove::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/Remove",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "Remove"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_remove(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::remove::Request>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::object::StreamLocation>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamRemove",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamRemove"));
            self.inner.streaming(req, path, codec).await
        }
        pub async fn multi_remove(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::remove::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/MultiRemove",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "MultiRemove"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_object(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::object::Id>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Vector>, tonic::Status> {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/GetObject",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "GetObject"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn stream_get_object(
            &mut self,
            request: impl tonic::IntoStreamingRequest<Message = super::super::super::payload::v1::object::Id>,
        ) -> std::result::Result<
            tonic::Response<tonic::codec::Streaming<super::super::super::payload::v1::object::StreamVector>>,
            tonic::Status,
        > {
            self.inner
                .ready()
                .await
                .map_err(|e| {
                    tonic::Status::unknown(
                        format!("Service was not ready: {}", e.into()),
                    )
                })?;
            let codec = tonic_prost::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static(
                "/gateway.v1.VectorGateway/StreamGetObject",
            );
            let mut req = request.into_streaming_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gateway.v1.VectorGateway", "StreamGetObject"));
            self.inner.streaming(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod vector_gateway_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with VectorGatewayServer.
    #[async_trait]
    pub trait VectorGateway: std::marker::Send + std::marker::Sync + 'static {
        async fn exists(
            &self,
            request: tonic::Request<super::super::super::payload::v1::object::Id>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Id>, tonic::Status>;
        async fn search(
            &self,
            request: tonic::Request<super::super::super::payload::v1::search::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Response>, tonic::Status>;
        async fn search_by_id(
            &self,
            request: tonic::Request<super::super::super::payload::v1::search::IdRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Response>, tonic::Status>;
        /// Server streaming response type for the StreamSearch method.
        type StreamSearchStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::search::StreamResponse, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_search(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::search::Request>>,
        ) -> std::result::Result<tonic::Response<Self::StreamSearchStream>, tonic::Status>;
        /// Server streaming response type for the StreamSearchByID method.
        type StreamSearchByIDStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::search::StreamResponse, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_search_by_id(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::search::IdRequest>>,
        ) -> std::result::Result<tonic::Response<Self::StreamSearchByIDStream>, tonic::Status>;
        async fn multi_search(
            &self,
            request: tonic::Request<super::super::super::payload::v1::search::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Responses>, tonic::Status>;
        async fn multi_search_by_id(
            &self,
            request: tonic::Request<super::super::super::payload::v1::search::MultiIdRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::search::Responses>, tonic::Status>;
        async fn insert(
            &self,
            request: tonic::Request<super::super::super::payload::v1::insert::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status>;
        /// Server streaming response type for the StreamInsert method.
        type StreamInsertStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::object::StreamLocation, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_insert(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::insert::Request>>,
        ) -> std::result::Result<tonic::Response<Self::StreamInsertStream>, tonic::Status>;
        async fn multi_insert(
            &self,
            request: tonic::Request<super::super::super::payload::v1::insert::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status>;
        async fn update(
            &self,
            request: tonic::Request<super::super::super::payload::v1::update::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status>;
        /// Server streaming response type for the StreamUpdate method.
        type StreamUpdateStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::object::StreamLocation, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_update(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::update::Request>>,
        ) -> std::result::Result<tonic::Response<Self::StreamUpdateStream>, tonic::Status>;
        async fn multi_update(
            &self,
            request: tonic::Request<super::super::super::payload::v1::update::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status>;
        async fn upsert(
            &self,
            request: tonic::Request<super::super::super::payload::v1::upsert::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status>;
        /// Server streaming response type for the StreamUpsert method.
        type StreamUpsertStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::object::StreamLocation, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_upsert(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::upsert::Request>>,
        ) -> std::result::Result<tonic::Response<Self::StreamUpsertStream>, tonic::Status>;
        async fn multi_upsert(
            &self,
            request: tonic::Request<super::super::super::payload::v1::upsert::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status>;
        async fn remove(
            &self,
            request: tonic::Request<super::super::super::payload::v1::remove::Request>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Location>, tonic::Status>;
        /// Server streaming response type for the StreamRemove method.
        type StreamRemoveStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::object::StreamLocation, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_remove(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::remove::Request>>,
        ) -> std::result::Result<tonic::Response<Self::StreamRemoveStream>, tonic::Status>;
        async fn multi_remove(
            &self,
            request: tonic::Request<super::super::super::payload::v1::remove::MultiRequest>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Locations>, tonic::Status>;
        async fn get_object(
            &self,
            request: tonic::Request<super::super::super::payload::v1::object::Id>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::object::Vector>, tonic::Status>;
        /// Server streaming response type for the StreamGetObject method.
        type StreamGetObjectStream: tonic::codegen::tokio_stream::Stream<
                Item = std::result::Result<super::super::super::payload::v1::object::StreamVector, tonic::Status>,
            >
            + std::marker::Send
            + 'static;
        async fn stream_get_object(
            &self,
            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::object::Id>>,
        ) -> std::result::Result<tonic::Response<Self::StreamGetObjectStream>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct VectorGatewayServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> VectorGatewayServer<T> {
        pub fn new(inner: T) -> Self {
            Self::from_arc(Arc::new(inner))
        }
        pub fn from_arc(inner: Arc<T>) -> Self {
            Self {
                inner,
                accept_compression_encodings: Default::default(),
                send_compression_encodings: Default::default(),
                max_decoding_message_size: None,
                max_encoding_message_size: None,
            }
        }
        pub fn with_interceptor<F>(
            inner: T,
            interceptor: F,
        ) -> InterceptedService<Self, F>
        where
            F: tonic::service::Interceptor,
        {
            InterceptedService::new(Self::new(inner), interceptor)
        }
        /// Enable decompressing requests with the given encoding.
        #[must_use]
        pub fn accept_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.accept_compression_encodings.enable(encoding);
            self
        }
        /// Compress responses with the given encoding, if the client supports it.
        #[must_use]
        pub fn send_compressed(mut self, encoding: CompressionEncoding) -> Self {
            self.send_compression_encodings.enable(encoding);
            self
        }
        /// Limits the maximum size of a decoded message.
        ///
        /// Default: `4MB`
        #[must_use]
        pub fn max_decoding_message_size(mut self, limit: usize) -> Self {
            self.max_decoding_message_size = Some(limit);
            self
        }
        /// Limits the maximum size of an encoded message.
        ///
        /// Default: `usize::MAX`
        #[must_use]
        pub fn max_encoding_message_size(mut self, limit: usize) -> Self {
            self.max_encoding_message_size = Some(limit);
            self
        }
    }
    impl<T, B> tonic::codegen::Service<http::Request<B>> for VectorGatewayServer<T>
    where
        T: VectorGateway,
        B: Body + std::marker::Send + 'static,
        B::Error: Into<StdError> + std::marker::Send + 'static,
    {
        type Response = http::Response<tonic::body::Body>;
        type Error = std::convert::Infallible;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(
            &mut self,
            _cx: &mut Context<'_>,
        ) -> Poll<std::result::Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            match req.uri().path() {
                "/gateway.v1.VectorGateway/Exists" => {
                    #[allow(non_camel_case_types)]
                    struct ExistsSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::object::Id>
                    for ExistsSvc<T> {
                        type Response = super::super::super::payload::v1::object::Id;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::object::Id>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::exists(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = ExistsSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/Search" => {
                    #[allow(non_camel_case_types)]
                    struct SearchSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::search::Request>
                    for SearchSvc<T> {
                        type Response = super::super::super::payload::v1::search::Response;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::search::Request>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::search(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SearchSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/SearchByID" => {
                    #[allow(non_camel_case_types)]
                    struct SearchByIDSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::search::IdRequest>
                    for SearchByIDSvc<T> {
                        type Response = super::super::super::payload::v1::search::Response;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::search::IdRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::search_by_id(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = SearchByIDSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamSearch" => {
                    #[allow(non_camel_case_types)]
                    struct StreamSearchSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::search::Request>
                    for StreamSearchSvc<T> {
                        type Response = super::super::super::payload::v1::search::StreamResponse;
                        type ResponseStream = T::StreamSearchStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::search::Request>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_search(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamSearchSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamSearchByID" => {
                    #[allow(non_camel_case_types)]
                    struct StreamSearchByIDSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::search::IdRequest>
                    for StreamSearchByIDSvc<T> {
                        type Response = super::super::super::payload::v1::search::StreamResponse;
                        type ResponseStream = T::StreamSearchByIDStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::search::IdRequest>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_search_by_id(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamSearchByIDSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiSearch" => {
                    #[allow(non_camel_case_types)]
                    struct MultiSearchSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::search::MultiRequest>
                    for MultiSearchSvc<T> {
                        type Response = super::super::super::payload::v1::search::Responses;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::search::MultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_search(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiSearchSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiSearchByID" => {
                    #[allow(non_camel_case_types)]
                    struct MultiSearchByIDSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::search::MultiIdRequest>
                    for MultiSearchByIDSvc<T> {
                        type Response = super::super::super::payload::v1::search::Responses;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::search::MultiIdRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_search_by_id(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiSearchByIDSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/Insert" => {
                    #[allow(non_camel_case_types)]
                    struct InsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::insert::Request>
                    for InsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::Location;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::insert::Request>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::insert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = InsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamInsert" => {
                    #[allow(non_camel_case_types)]
                    struct StreamInsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::insert::Request>
                    for StreamInsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::StreamLocation;
                        type ResponseStream = T::StreamInsertStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::insert::Request>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_insert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamInsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiInsert" => {
                    #[allow(non_camel_case_types)]
                    struct MultiInsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::insert::MultiRequest>
                    for MultiInsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::Locations;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::insert::MultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_insert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiInsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/Update" => {
                    #[allow(non_camel_case_types)]
                    struct UpdateSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::update::Request>
                    for UpdateSvc<T> {
                        type Response = super::super::super::payload::v1::object::Location;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::update::Request>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::update(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpdateSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamUpdate" => {
                    #[allow(non_camel_case_types)]
                    struct StreamUpdateSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::update::Request>
                    for StreamUpdateSvc<T> {
                        type Response = super::super::super::payload::v1::object::StreamLocation;
                        type ResponseStream = T::StreamUpdateStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::update::Request>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_update(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamUpdateSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiUpdate" => {
                    #[allow(non_camel_case_types)]
                    struct MultiUpdateSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::update::MultiRequest>
                    for MultiUpdateSvc<T> {
                        type Response = super::super::super::payload::v1::object::Locations;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::update::MultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_update(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiUpdateSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/Upsert" => {
                    #[allow(non_camel_case_types)]
                    struct UpsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::upsert::Request>
                    for UpsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::Location;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::upsert::Request>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::upsert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = UpsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamUpsert" => {
                    #[allow(non_camel_case_types)]
                    struct StreamUpsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::upsert::Request>
                    for StreamUpsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::StreamLocation;
                        type ResponseStream = T::StreamUpsertStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::upsert::Request>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_upsert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamUpsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiUpsert" => {
                    #[allow(non_camel_case_types)]
                    struct MultiUpsertSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::upsert::MultiRequest>
                    for MultiUpsertSvc<T> {
                        type Response = super::super::super::payload::v1::object::Locations;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::upsert::MultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_upsert(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiUpsertSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/Remove" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::remove::Request>
                    for RemoveSvc<T> {
                        type Response = super::super::super::payload::v1::object::Location;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::remove::Request>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::remove(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = RemoveSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamRemove" => {
                    #[allow(non_camel_case_types)]
                    struct StreamRemoveSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::remove::Request>
                    for StreamRemoveSvc<T> {
                        type Response = super::super::super::payload::v1::object::StreamLocation;
                        type ResponseStream = T::StreamRemoveStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::remove::Request>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_remove(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamRemoveSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/MultiRemove" => {
                    #[allow(non_camel_case_types)]
                    struct MultiRemoveSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::remove::MultiRequest>
                    for MultiRemoveSvc<T> {
                        type Response = super::super::super::payload::v1::object::Locations;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::remove::MultiRequest>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::multi_remove(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = MultiRemoveSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/GetObject" => {
                    #[allow(non_camel_case_types)]
                    struct GetObjectSvc<T: VectorGateway>(pub Arc<T>);
                    impl<
                        T: VectorGateway,
                    > tonic::server::UnaryService<super::super::super::payload::v1::object::Id>
                    for GetObjectSvc<T> {
                        type Response = super::super::super::payload::v1::object::Vector;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::object::Id>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::get_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = GetObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/gateway.v1.VectorGateway/StreamGetObject" => {
                    #[allow(non_camel_case_types)]
                    struct StreamGetObjectSvc<T: VectorGateway>(pub Arc<T>);
                    impl<T: VectorGateway> tonic::server::StreamingService<super::super::super::payload::v1::object::Id>
                    for StreamGetObjectSvc<T> {
                        type Response = super::super::super::payload::v1::object::StreamVector;
                        type ResponseStream = T::StreamGetObjectStream;
                        type Future = BoxFuture<
                            tonic::Response<Self::ResponseStream>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<tonic::Streaming<super::super::super::payload::v1::object::Id>>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as VectorGateway>::stream_get_object(&inner, request).await
                            };
                            Box::pin(fut)
                        }
                    }
                    let accept_compression_encodings = self.accept_compression_encodings;
                    let send_compression_encodings = self.send_compression_encodings;
                    let max_decoding_message_size = self.max_decoding_message_size;
                    let max_encoding_message_size = self.max_encoding_message_size;
                    let inner = self.inner.clone();
                    let fut = async move {
                        let method = StreamGetObjectSvc(inner);
                        let codec = tonic_prost::ProstCodec::default();
                        let mut grpc = tonic::server::Grpc::new(codec)
                            .apply_compression_config(
                                accept_compression_encodings,
                                send_compression_encodings,
                            )
                            .apply_max_message_size_config(
                                max_decoding_message_size,
                                max_encoding_message_size,
                            );
                        let res = grpc.streaming(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => {
                    Box::pin(async move {
                        let mut response = http::Response::new(
                            tonic::body::Body::default(),
                        );
                        let headers = response.headers_mut();
                        headers
                            .insert(
                                tonic::Status::GRPC_STATUS,
                                (tonic::Code::Unimplemented as i32).into(),
                            );
                        headers
                            .insert(
                                http::header::CONTENT_TYPE,
                                tonic::metadata::GRPC_CONTENT_TYPE,
                            );
                        Ok(response)
                    })
                }
            }
        }
    }
    impl<T> Clone for VectorGatewayServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self {
                inner,
                accept_compression_encodings: self.accept_compression_encodings,
                send_compression_encodings: self.send_compression_encodings,
                max_decoding_message_size: self.max_decoding_message_size,
                max_encoding_message_size: self.max_encoding_message_size,
            }
        }
    }
    /// Generated gRPC service name
    pub const SERVICE_NAME: &str = "gateway.v1.VectorGateway";
    impl<T> tonic::server::NamedService for VectorGatewayServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
