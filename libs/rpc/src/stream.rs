//! Conversions between per-item RPC results and the stream response envelopes.
//!
//! A bidirectional stream answers every request with exactly one message. A
//! failed item is carried inside the envelope as a `google.rpc.Status` so the
//! stream itself keeps running.

use crate::google::rpc::Status as RpcStatus;
use crate::payload::v1::{object, search};

impl From<tonic::Status> for RpcStatus {
    fn from(status: tonic::Status) -> Self {
        Self {
            code: status.code() as i32,
            message: status.message().to_string(),
        }
    }
}

impl From<RpcStatus> for tonic::Status {
    fn from(status: RpcStatus) -> Self {
        tonic::Status::new(tonic::Code::from_i32(status.code), status.message)
    }
}

impl From<Result<object::Location, tonic::Status>> for object::StreamLocation {
    fn from(result: Result<object::Location, tonic::Status>) -> Self {
        let payload = match result {
            Ok(location) => object::stream_location::Payload::Location(location),
            Err(status) => object::stream_location::Payload::Status(status.into()),
        };
        Self {
            payload: Some(payload),
        }
    }
}

impl From<Result<object::Vector, tonic::Status>> for object::StreamVector {
    fn from(result: Result<object::Vector, tonic::Status>) -> Self {
        let payload = match result {
            Ok(vector) => object::stream_vector::Payload::Vector(vector),
            Err(status) => object::stream_vector::Payload::Status(status.into()),
        };
        Self {
            payload: Some(payload),
        }
    }
}

impl From<Result<search::Response, tonic::Status>> for search::StreamResponse {
    fn from(result: Result<search::Response, tonic::Status>) -> Self {
        let payload = match result {
            Ok(response) => search::stream_response::Payload::Response(response),
            Err(status) => search::stream_response::Payload::Status(status.into()),
        };
        Self {
            payload: Some(payload),
        }
    }
}
