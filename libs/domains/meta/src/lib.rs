//! Key-to-id translation in front of a vector search backend.
//!
//! Callers address vectors by their own string keys. The backend only knows
//! internal UUIDs. [`MetaGateway`] keeps the two in sync through a
//! [`MetaResolver`] (metadata store plus optional TTL cache), validates
//! requests, compensates half-finished writes, and remaps search results back
//! to caller keys.

pub mod backend;
pub mod cache;
pub mod config;
pub mod error;
pub mod fanout;
pub mod location;
pub mod orchestrator;
pub mod resolver;
pub mod saga;
pub mod store;

pub use backend::{GrpcVectorBackend, VectorBackend};
pub use cache::{CacheConfig, CacheError, MappingCache, TtlCache};
pub use config::{DimensionBounds, GatewayConfig};
pub use error::{MetaError, MetaResult};
pub use fanout::{Partial, fan_out};
pub use orchestrator::MetaGateway;
pub use resolver::MetaResolver;
pub use store::{GrpcMetaStore, MetaStore};
