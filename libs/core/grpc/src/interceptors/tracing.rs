use tonic::{Request, Status};

/// Header carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Stamps outgoing calls with an `x-request-id` header.
///
/// A caller-supplied id already present in the metadata is kept, so a request
/// id received at the gateway can be forwarded to the backend and the store.
///
/// ```ignore
/// let client = VectorGatewayClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor;

impl TracingInterceptor {
  pub fn new() -> Self {
    Self
  }
}

impl tonic::service::Interceptor for TracingInterceptor {
  fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
    if let Some(existing) = request.metadata().get(REQUEST_ID_HEADER) {
      tracing::trace!(
        target: "core_grpc",
        request_id = ?existing,
        "Outgoing gRPC request"
      );
      return Ok(request);
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    request.metadata_mut().insert(
      REQUEST_ID_HEADER,
      request_id
        .parse()
        .map_err(|_| Status::internal("Failed to create request ID"))?,
    );

    tracing::trace!(
      target: "core_grpc",
      request_id = %request_id,
      "Outgoing gRPC request"
    );

    Ok(request)
  }
}
