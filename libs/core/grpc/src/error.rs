use thiserror::Error;

pub type GrpcResult<T> = Result<T, GrpcError>;

/// Errors that can occur during gRPC client creation
#[derive(Error, Debug)]
pub enum GrpcError {
  /// Invalid URI provided for connection
  #[error("Invalid URI: {0}")]
  InvalidUri(#[from] tonic::transport::Error),
}

impl From<GrpcError> for tonic::Status {
  fn from(err: GrpcError) -> Self {
    match err {
      GrpcError::InvalidUri(_) => tonic::Status::invalid_argument(err.to_string()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::create_channel_lazy_with_config;

  #[test]
  fn test_invalid_uri_maps_to_invalid_argument() {
    let err = create_channel_lazy_with_config("not a valid uri", Default::default()).unwrap_err();
    let status: tonic::Status = err.into();
    assert_eq!(status.code(), tonic::Code::InvalidArgument);
    assert!(status.message().starts_with("Invalid URI"));
  }
}
