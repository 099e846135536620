// @generated
/// Generated client implementations.
pub mod meta_client {
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
    pub struct MetaClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl MetaClient<tonic::transport::Channel> {
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
    impl<T> MetaClient<T>
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
        ) -> MetaClient<InterceptedService<T, F>>
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
            MetaClient::new(InterceptedService::new(inner, interceptor))
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
        pub async fn get_meta(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Key>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Val>, tonic::Status> {
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
                "/meta.v1.Meta/GetMeta",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "GetMeta"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_metas(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Keys>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Vals>, tonic::Status> {
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
                "/meta.v1.Meta/GetMetas",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "GetMetas"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_meta_inverse(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Val>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Key>, tonic::Status> {
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
                "/meta.v1.Meta/GetMetaInverse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "GetMetaInverse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn get_metas_inverse(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Vals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Keys>, tonic::Status> {
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
                "/meta.v1.Meta/GetMetasInverse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "GetMetasInverse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn set_meta(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::KeyVal>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::Empty>, tonic::Status> {
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
                "/meta.v1.Meta/SetMeta",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "SetMeta"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn set_metas(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::KeyVals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::Empty>, tonic::Status> {
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
                "/meta.v1.Meta/SetMetas",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "SetMetas"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_meta(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Key>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Val>, tonic::Status> {
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
                "/meta.v1.Meta/DeleteMeta",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "DeleteMeta"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_metas(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Keys>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Vals>, tonic::Status> {
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
                "/meta.v1.Meta/DeleteMetas",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "DeleteMetas"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_meta_inverse(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Val>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Key>, tonic::Status> {
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
                "/meta.v1.Meta/DeleteMetaInverse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "DeleteMetaInverse"));
            self.inner.unary(req, path, codec).await
        }
        pub async fn delete_metas_inverse(
            &mut self,
            request: impl tonic::IntoRequest<super::super::super::payload::v1::meta::Vals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Keys>, tonic::Status> {
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
                "/meta.v1.Meta/DeleteMetasInverse",
            );
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("meta.v1.Meta", "DeleteMetasInverse"));
            self.inner.unary(req, path, codec).await
        }
    }
}
/// Generated server implementations.
pub mod meta_server {
    #![allow(
        unused_variables,
        dead_code,
        missing_docs,
        clippy::wildcard_imports,
        clippy::let_unit_value,
    )]
    use tonic::codegen::*;
    /// Generated trait containing gRPC methods that should be implemented for use with MetaServer.
    #[async_trait]
    pub trait Meta: std::marker::Send + std::marker::Sync + 'static {
        async fn get_meta(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Key>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Val>, tonic::Status>;
        async fn get_metas(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Keys>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Vals>, tonic::Status>;
        async fn get_meta_inverse(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Val>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Key>, tonic::Status>;
        async fn get_metas_inverse(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Vals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Keys>, tonic::Status>;
        async fn set_meta(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::KeyVal>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::Empty>, tonic::Status>;
        async fn set_metas(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::KeyVals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::Empty>, tonic::Status>;
        async fn delete_meta(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Key>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Val>, tonic::Status>;
        async fn delete_metas(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Keys>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Vals>, tonic::Status>;
        async fn delete_meta_inverse(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Val>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Key>, tonic::Status>;
        async fn delete_metas_inverse(
            &self,
            request: tonic::Request<super::super::super::payload::v1::meta::Vals>,
        ) -> std::result::Result<tonic::Response<super::super::super::payload::v1::meta::Keys>, tonic::Status>;
    }
    #[derive(Debug)]
    pub struct MetaServer<T> {
        inner: Arc<T>,
        accept_compression_encodings: EnabledCompressionEncodings,
        send_compression_encodings: EnabledCompressionEncodings,
        max_decoding_message_size: Option<usize>,
        max_encoding_message_size: Option<usize>,
    }
    impl<T> MetaServer<T> {
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
    impl<T, B> tonic::codegen::Service<http::Request<B>> for MetaServer<T>
    where
        T: Meta,
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
                "/meta.v1.Meta/GetMeta" => {
                    #[allow(non_camel_case_types)]
                    struct GetMetaSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Key>
                    for GetMetaSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Val;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Key>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::get_meta(&inner, request).await
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
                        let method = GetMetaSvc(inner);
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
                "/meta.v1.Meta/GetMetas" => {
                    #[allow(non_camel_case_types)]
                    struct GetMetasSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Keys>
                    for GetMetasSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Vals;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Keys>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::get_metas(&inner, request).await
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
                        let method = GetMetasSvc(inner);
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
                "/meta.v1.Meta/GetMetaInverse" => {
                    #[allow(non_camel_case_types)]
                    struct GetMetaInverseSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Val>
                    for GetMetaInverseSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Key;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Val>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::get_meta_inverse(&inner, request).await
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
                        let method = GetMetaInverseSvc(inner);
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
                "/meta.v1.Meta/GetMetasInverse" => {
                    #[allow(non_camel_case_types)]
                    struct GetMetasInverseSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Vals>
                    for GetMetasInverseSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Keys;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Vals>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::get_metas_inverse(&inner, request).await
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
                        let method = GetMetasInverseSvc(inner);
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
                "/meta.v1.Meta/SetMeta" => {
                    #[allow(non_camel_case_types)]
                    struct SetMetaSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::KeyVal>
                    for SetMetaSvc<T> {
                        type Response = super::super::super::payload::v1::Empty;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::KeyVal>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::set_meta(&inner, request).await
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
                        let method = SetMetaSvc(inner);
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
                "/meta.v1.Meta/SetMetas" => {
                    #[allow(non_camel_case_types)]
                    struct SetMetasSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::KeyVals>
                    for SetMetasSvc<T> {
                        type Response = super::super::super::payload::v1::Empty;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::KeyVals>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::set_metas(&inner, request).await
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
                        let method = SetMetasSvc(inner);
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
                "/meta.v1.Meta/DeleteMeta" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteMetaSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Key>
                    for DeleteMetaSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Val;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Key>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::delete_meta(&inner, request).await
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
                        let method = DeleteMetaSvc(inner);
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
                "/meta.v1.Meta/DeleteMetas" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteMetasSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Keys>
                    for DeleteMetasSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Vals;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Keys>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::delete_metas(&inner, request).await
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
                        let method = DeleteMetasSvc(inner);
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
                "/meta.v1.Meta/DeleteMetaInverse" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteMetaInverseSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Val>
                    for DeleteMetaInverseSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Key;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Val>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::delete_meta_inverse(&inner, request).await
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
                        let method = DeleteMetaInverseSvc(inner);
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
                "/meta.v1.Meta/DeleteMetasInverse" => {
                    #[allow(non_camel_case_types)]
                    struct DeleteMetasInverseSvc<T: Meta>(pub Arc<T>);
                    impl<
                        T: Meta,
                    > tonic::server::UnaryService<super::super::super::payload::v1::meta::Vals>
                    for DeleteMetasInverseSvc<T> {
                        type Response = super::super::super::payload::v1::meta::Keys;
                        type Future = BoxFuture<
                            tonic::Response<Self::Response>,
                            tonic::Status,
                        >;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::super::super::payload::v1::meta::Vals>,
                        ) -> Self::Future {
                            let inner = Arc::clone(&self.0);
                            let fut = async move {
                                <T as Meta>::delete_metas_inverse(&inner, request).await
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
                        let method = DeleteMetasInverseSvc(inner);
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
    impl<T> Clone for MetaServer<T> {
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
    pub const SERVICE_NAME: &str = "meta.v1.Meta";
    impl<T> tonic::server::NamedService for MetaServer<T> {
        const NAME: &'static str = SERVICE_NAME;
    }
}
