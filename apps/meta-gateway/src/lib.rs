//! Meta Gateway gRPC Service
//!
//! Serves `gateway.v1.VectorGateway` addressed by caller keys and forwards to a
//! vector backend that only understands internal ids.
//!
//! ## Architecture
//!
//! ```text
//! Client
//!   ↓ (gRPC with Zstd compression)
//! MetaGatewayService (service.rs)
//!   ↓ (unary calls, bounded-concurrency bidirectional streams)
//! MetaGateway (domain_meta orchestrator)
//!   ↓                         ↓
//! MetaResolver + TtlCache   GrpcVectorBackend
//!   ↓                         ↓
//! meta.v1.Meta store        vector backend (gateway.v1.VectorGateway)
//! ```
//!
//! ## Modules
//!
//! - `server`: Bootstrap, wiring and lifecycle
//! - `service`: gRPC service implementation (MetaGatewayService)

pub mod server;
pub mod service;

// Re-export for convenience
pub use server::{build_gateway, run, serve};
pub use service::MetaGatewayService;
