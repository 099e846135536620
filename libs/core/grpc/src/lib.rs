//! # gRPC plumbing
//!
//! Shared client and streaming utilities for the gateway and its collaborators.
//!
//! - **Channels**: lazy HTTP/2 tuned [`tonic::transport::Channel`]s configured
//!   through [`ChannelConfig`] (env-loadable).
//! - **Interceptors**: [`TracingInterceptor`] stamps every outgoing call with an
//!   `x-request-id`.
//! - **Streams**: [`bidirectional_stream`] turns a request stream into a response
//!   stream with bounded concurrency and one response per request.
//!
//! ```ignore
//! use core_grpc::{ChannelConfig, TracingInterceptor, create_channel_lazy_with_config};
//! use rpc::meta::v1::meta_client::MetaClient;
//!
//! let channel = create_channel_lazy_with_config("http://meta:8083", ChannelConfig::from_env()?)?;
//! let client = MetaClient::with_interceptor(channel, TracingInterceptor::new());
//! ```

pub mod channel;
pub mod error;
pub mod interceptors;
pub mod stream;

pub use channel::{ChannelConfig, create_channel_lazy_with_config};
pub use error::{GrpcError, GrpcResult};
pub use interceptors::TracingInterceptor;
pub use stream::{DEFAULT_STREAM_CONCURRENCY, ResponseStream, bidirectional_stream};

/// Upper bound for a single encoded/decoded message on gateway clients and servers.
pub const MAX_MESSAGE_SIZE: usize = 8 * 1024 * 1024;
