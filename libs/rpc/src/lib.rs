//! Checked-in protobuf and gRPC bindings.
//!
//! - `payload::v1`: request/response messages shared by every service
//! - `gateway::v1`: the `VectorGateway` service (served by the meta gateway and
//!   consumed as the vector backend client)
//! - `meta::v1`: the `Meta` key/value store service
//! - `google::rpc`: the `Status` message carried inside stream responses

pub mod stream;

pub mod google {
    pub mod rpc {
        include!("generated/google/rpc/google.rpc.rs");
    }
}

pub mod payload {
    pub mod v1 {
        include!("generated/payload/v1/payload.v1.rs");
    }
}

pub mod gateway {
    pub mod v1 {
        include!("generated/gateway/v1/gateway.v1.tonic.rs");
    }
}

pub mod meta {
    pub mod v1 {
        include!("generated/meta/v1/meta.v1.tonic.rs");
    }
}
