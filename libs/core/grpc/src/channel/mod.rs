pub mod config;

pub use config::ChannelConfig;

use crate::error::{GrpcError, GrpcResult};
use tonic::transport::{Channel, Endpoint};

fn endpoint(addr: &str, config: ChannelConfig) -> GrpcResult<Endpoint> {
  let endpoint = Endpoint::from_shared(addr.to_string()).map_err(|e| {
    tracing::error!(target: "core_grpc", addr = %addr, error = ?e, "Invalid URI");
    GrpcError::InvalidUri(e)
  })?;
  Ok(config.apply_to_endpoint(endpoint))
}

/// Creates a lazy gRPC channel that connects on first request
///
/// The gateway boots with lazy channels so it can start while the vector
/// backend or the metadata store are still coming up; the resolver's
/// connection monitor reports the store's reachability.
///
/// ## Example
/// ```ignore
/// let channel = core_grpc::create_channel_lazy_with_config("http://[::1]:8083", ChannelConfig::from_env()?)?;
/// let client = MetaClient::new(channel);
/// ```
pub fn create_channel_lazy_with_config(
  addr: impl Into<String>,
  config: ChannelConfig,
) -> GrpcResult<Channel> {
  let addr = addr.into();
  let endpoint = endpoint(&addr, config)?;

  tracing::debug!(target: "core_grpc", addr = %addr, "Creating lazy gRPC channel");

  Ok(endpoint.connect_lazy())
}
